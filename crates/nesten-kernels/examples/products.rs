//! Outer product, inner product, and norm examples.
//!
//! This example demonstrates the product operations of nesten-kernels:
//! - Outer products and the shape-concatenation law
//! - Inner products from vector dot products to higher-rank contraction
//! - The Euclidean norm expressed through self-contraction
//!
//! Run with:
//! ```bash
//! cargo run --example products
//! ```

use nesten_core::Tensor;
use nesten_kernels::{inner, norm, outer};

fn main() {
    println!("=== NesTen Kernels: Product Examples ===\n");

    example_outer();
    example_inner();
    example_norm();

    println!("\n=== All examples completed successfully! ===");
}

fn example_outer() {
    println!("--- Example 1: Outer Product ---");

    let u = Tensor::make([1.0, 2.0]).unwrap();
    let v = Tensor::make([3.0, 4.0]).unwrap();

    let m = outer(&u, &v);
    println!("u = {}", u);
    println!("v = {}", v);
    println!("outer(u, v) = {}", m);
    println!("  shape: {:?} (ranks add)", m.shape());

    let cube = outer(&m, &u);
    println!("outer(outer(u, v), u) shape: {:?}", cube.shape());
}

fn example_inner() {
    println!("\n--- Example 2: Inner Product ---");

    let u = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    let v = Tensor::make([4.0, 5.0, 6.0]).unwrap();
    println!("u . v = {}", inner(&u, &v).unwrap());

    let m = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let w = Tensor::make([5.0, 6.0]).unwrap();
    println!("matrix . vector = {}", inner(&m, &w).unwrap());

    // Containment failures surface as errors
    println!("u . matrix: {}", inner(&u, &m).unwrap_err());
}

fn example_norm() {
    println!("\n--- Example 3: Euclidean Norm ---");

    let v = Tensor::make([3.0, 4.0]).unwrap();
    println!("norm({}) = {}", v, norm(&v));

    let m = Tensor::make([[1.0, 2.0], [2.0, 4.0]]).unwrap();
    println!("norm({}) = {}", m, norm(&m));
}
