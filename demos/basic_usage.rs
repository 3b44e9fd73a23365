// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see
// constant bindings logged at debug level.

use typed_numerics::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Typed Numerics Example ===\n");

    // Statically typed sums
    println!("sum!(1, 2, 3, 4, 5)   = {}", sum!(1, 2, 3, 4, 5));
    println!("sum!(1, 2, 3)         = {}", sum!(1, 2, 3));
    println!("sum!(1.5, 2.0, 3.7)   = {}", sum!(1.5, 2.0, 3.7));
    println!("sum!(250u8, 10)       = {} (wraps)", sum!(250u8, 10));
    println!(
        "sum_widening(1000u32, [200u8; 3]) = {}",
        sum_widening(1_000u32, [200u8; 3])
    );

    // Constants bound once per type
    println!("\n=== Constants ===");
    println!("pi as f32        = {}", get_constant::<f32>());
    println!("pi as f64        = {}", get_constant::<f64>());
    println!("pi as fixed<4>   = {}", get_constant::<FixedDecimal<4>>());
    println!("e as fixed<9>    = {}", constant::<Euler, FixedDecimal<9>>());
    println!("area of r=2.0    = {}", circular_area(2.0f64));
    println!(
        "bindings: {} computed, {} computations",
        global_table().len(),
        global_table().computations()
    );

    // Runtime-typed sums
    println!("\n=== Runtime Aggregation ===");
    let inputs: [(&str, Vec<Value>); 4] = [
        ("i64 + u8 + i32", vec![Value::I64(10), Value::U8(5), Value::I32(-3)]),
        ("i32 + f64", vec![Value::I32(1), Value::F64(2.5)]),
        ("u16 + bool", vec![Value::U16(3), Value::Bool(true)]),
        ("(empty)", Vec::new()),
    ];

    let aggregator = Aggregator::default();
    for (label, values) in &inputs {
        match aggregator.sum_values(values) {
            Ok(total) => println!("{:<16} => {}", label, total),
            Err(err) => println!("{:<16} => error: {}", label, err),
        }
    }

    let strict = Aggregator::new(AggregatorConfig::strict());
    match strict.sum_values(&[Value::U8(200), Value::U8(100)]) {
        Ok(total) => println!("{:<16} => {}", "strict u8", total),
        Err(err) => println!("{:<16} => error: {}", "strict u8", err),
    }
}
