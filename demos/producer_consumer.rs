/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Producer/Consumer Example
//!
//! Demonstrates a bounded buffer guarded by two counting semaphores, with
//! an atomic integer collecting the consumed total.

use prism3_concurrent::{
    AtomicInt64,
    Semaphore,
    SemaphoreParameters,
};
use std::collections::VecDeque;
use std::sync::{
    Arc,
    Mutex,
};
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();
    println!("=== Producer/Consumer Example ===\n");

    // Example 1: Basic semaphore operations
    println!("1. Basic Semaphore Operations:");
    let sem = Semaphore::new(&SemaphoreParameters::new(1).with_max_count(2)).unwrap();
    println!("   Initial count: {}", sem.get_count());
    println!("   After wait: {}", sem.wait().unwrap());
    println!("   After post: {}", sem.post().unwrap());
    println!("   After post: {}", sem.post().unwrap());
    match sem.post() {
        Ok(count) => println!("   Post succeeded: count is now {}", count),
        Err(e) => println!("   Post rejected: {}", e),
    }
    match Semaphore::with_count(0).unwrap().wait_timeout(Duration::from_millis(20)) {
        Ok(count) => println!("   Wait succeeded: count is now {}", count),
        Err(e) => println!("   Wait on empty semaphore: {}", e),
    }

    // Example 2: Bounded buffer
    println!("\n2. Bounded Buffer:");
    let capacity = 4;
    let producers = 3;
    let items_per_producer = 100;

    let empty_slots = Arc::new(
        Semaphore::new(&SemaphoreParameters::new(capacity).with_max_count(capacity)).unwrap(),
    );
    let full_slots =
        Arc::new(Semaphore::new(&SemaphoreParameters::new(0).with_max_count(capacity)).unwrap());
    let buffer = Arc::new(Mutex::new(VecDeque::new()));
    let total = Arc::new(AtomicInt64::new(0));

    let mut handles = vec![];
    for p in 0..producers {
        let empty_slots = empty_slots.clone();
        let full_slots = full_slots.clone();
        let buffer = buffer.clone();
        handles.push(thread::spawn(move || {
            for i in 0..items_per_producer {
                empty_slots.wait().unwrap();
                buffer.lock().unwrap().push_back((p * items_per_producer + i) as i64);
                full_slots.post().unwrap();
            }
            println!("   Producer {} completed", p);
        }));
    }

    let consumer = {
        let total = total.clone();
        thread::spawn(move || {
            for _ in 0..producers * items_per_producer {
                full_slots.wait().unwrap();
                let item = buffer.lock().unwrap().pop_front().unwrap();
                total.add(item);
                empty_slots.post().unwrap();
            }
        })
    };

    for handle in handles {
        handle.join().unwrap();
    }
    consumer.join().unwrap();

    let n = (producers * items_per_producer) as i64;
    println!(
        "   Consumed total: {} (expected: {})",
        total.get_value(),
        n * (n - 1) / 2
    );

    println!("\n=== Example completed ===");
}
