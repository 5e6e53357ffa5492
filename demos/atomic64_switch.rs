/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # 64-bit Implementation Switch Example
//!
//! Demonstrates choosing between hardware and lock-based 64-bit atomics
//! at start-up. Run with `RUST_LOG=debug` to see the switch and the
//! emulation warning.

use prism3_concurrent::atomic::NATIVE_ATOMIC64_AVAILABLE;
use prism3_concurrent::{
    atomic64_implementation,
    set_atomic64_implementation,
    Atomic64Implementation,
    AtomicInt64,
};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn count_to(target: i64) -> (i64, f64) {
    let counter = Arc::new(AtomicInt64::new(0));
    let threads = 4;
    let start = Instant::now();

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let counter = counter.clone();
            thread::spawn(move || {
                for _ in 0..target / threads {
                    counter.increment();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    (counter.get_value(), start.elapsed().as_secs_f64())
}

fn main() {
    env_logger::init();
    println!("=== 64-bit Implementation Switch Example ===\n");

    // Example 1: Default implementation
    println!("1. Default Implementation:");
    println!("   Native 64-bit atomics available: {}", NATIVE_ATOMIC64_AVAILABLE);
    println!("   Active implementation: {}", atomic64_implementation());

    // Example 2: Same operations on both implementations
    println!("\n2. Native vs Emulated:");
    for implementation in [Atomic64Implementation::Native, Atomic64Implementation::Emulated] {
        let previous = set_atomic64_implementation(implementation);
        let (value, seconds) = count_to(400_000);
        println!(
            "   {} (was {}): final value {} in {:.3}s",
            atomic64_implementation(),
            previous,
            value,
            seconds
        );
    }

    // Example 3: Wrap-around is identical on both
    println!("\n3. Wrap-around:");
    let value = AtomicInt64::new(i64::MAX);
    println!("   Emulated: {} + 1 = {}", i64::MAX, value.increment());
    set_atomic64_implementation(Atomic64Implementation::Native);
    let value = AtomicInt64::new(i64::MAX);
    println!("   {}: {} + 1 = {}", atomic64_implementation(), i64::MAX, value.increment());

    println!("\n=== Example completed ===");
}
