//! Basic tensor creation and manipulation examples.
//!
//! This example demonstrates the core functionality of nesten-core:
//! - Creating tensors from nested literals and shape-driven builders
//! - Accessing tensor properties (rank, shape, components)
//! - Element-wise arithmetic (plus, scale)
//! - Rendering and re-parsing the textual form
//!
//! Run with:
//! ```bash
//! cargo run --example basic_tensor
//! ```

use nesten_core::Tensor;

fn main() {
    println!("=== NesTen Core: Basic Tensor Examples ===\n");

    example_creation();
    example_properties();
    example_arithmetic();
    example_rendering();

    println!("\n=== All examples completed successfully! ===");
}

fn example_creation() {
    println!("--- Example 1: Tensor Creation ---");

    // From a nested literal
    let matrix = Tensor::make([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    println!("Matrix from literal: {}", matrix);

    // Shape-driven builders
    let zeros = Tensor::zero(&[2, 3]);
    println!("Zeros tensor [2, 3]: {}", zeros);

    let ones = Tensor::ones(&[4]);
    println!("Ones vector [4]:     {}", ones);

    let fives = Tensor::full(&[2, 2], 5.0);
    println!("Filled with 5.0:     {}", fives);

    // Jagged input is rejected eagerly
    let jagged = Tensor::make([vec![1.0, 2.0], vec![3.0]]);
    println!("Jagged literal:      {}", jagged.unwrap_err());
}

fn example_properties() {
    println!("\n--- Example 2: Tensor Properties ---");

    let cube = Tensor::make([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]).unwrap();
    println!("Tensor: {}", cube);
    println!("  Rank:  {}", cube.rank());
    println!("  Shape: {:?}", cube.shape());
    println!("  First component: {}", cube[0]);
    println!("  Leaf [1][0][1]:  {}", cube[1][0][1]);
}

fn example_arithmetic() {
    println!("\n--- Example 3: Element-wise Arithmetic ---");

    let a = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    let b = Tensor::make([4.0, 5.0, 6.0]).unwrap();

    println!("a            = {}", a);
    println!("b            = {}", b);
    println!("a + b        = {}", a.plus(&b).unwrap());
    println!("a scaled x10 = {}", a.scale(10.0));

    // Mismatched shapes surface as errors, never wrong results
    let short = Tensor::make([1.0, 2.0]).unwrap();
    println!("a + [1, 2]   : {}", a.plus(&short).unwrap_err());
}

fn example_rendering() {
    println!("\n--- Example 4: Rendering and Parsing ---");

    let tensor = Tensor::make([[0.5, -1.0], [2.0, 3.25]]).unwrap();
    let rendered = tensor.to_string();
    println!("Rendered: {}", rendered);

    let reparsed: Tensor = rendered.parse().unwrap();
    println!("Round-trips equal: {}", reparsed == tensor);
}
