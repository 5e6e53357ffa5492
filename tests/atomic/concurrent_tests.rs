/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_concurrent::{
    AtomicInt32,
    AtomicInt64,
    AtomicUint32,
    AtomicUint64,
};
use std::collections::HashSet;
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// Balanced increment/decrement pairs leave the value unchanged for any
// number of threads.
#[test]
fn test_balanced_increment_decrement_32() {
    for threads in 1..=8 {
        let counter = Arc::new(AtomicInt32::new(17));
        let barrier = Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let counter = counter.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..ITERATIONS_PER_THREAD {
                        counter.increment();
                        counter.decrement();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.get_value(), 17, "{} threads", threads);
    }
}

#[test]
fn test_balanced_increment_decrement_64() {
    for threads in 1..=8 {
        let counter = Arc::new(AtomicInt64::new(-3));
        let barrier = Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let counter = counter.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..ITERATIONS_PER_THREAD {
                        counter.post_increment();
                        counter.post_decrement();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.get_value(), -3, "{} threads", threads);
    }
}

// Test concurrent CAS operations
#[test]
fn test_concurrent_cas_counter() {
    let atomic = Arc::new(AtomicUint32::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                loop {
                    let current = atomic.get_value();
                    if atomic.set_value_conditional(current + 1, current) {
                        break;
                    }
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.get_value(), (NUM_THREADS * ITERATIONS_PER_THREAD) as u32);
}

// Only one thread wins a race on the same expected value.
#[test]
fn test_concurrent_cas_single_winner() {
    let atomic = Arc::new(AtomicUint64::new(0));
    let winners = Arc::new(AtomicInt32::new(0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let winners = winners.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            if atomic.set_value_conditional(i as u64 + 1, 0) {
                winners.increment();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(winners.get_value(), 1);
    let value = atomic.get_value();
    assert!(value >= 1 && value <= NUM_THREADS as u64);
}

// A spinlock built from set_value_conditional gives mutual exclusion.
#[test]
fn test_spinlock_mutual_exclusion() {
    let lock = Arc::new(AtomicInt32::new(0));
    let inside = Arc::new(AtomicInt32::new(0));
    let total = Arc::new(AtomicInt64::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let lock = lock.clone();
        let inside = inside.clone();
        let total = total.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                while !lock.set_value_conditional(1, 0) {
                    thread::yield_now();
                }
                assert_eq!(inside.increment(), 1);
                total.add(1);
                assert_eq!(inside.decrement(), 0);
                assert_eq!(lock.set_value(0), 1);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(total.get_value(), (NUM_THREADS * 100) as i64);
}

// Every value swapped in is swapped out exactly once.
#[test]
fn test_concurrent_set_value() {
    let atomic = Arc::new(AtomicInt32::new(0));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || atomic.set_value((i + 1) as i32));
        handles.push(handle);
    }

    let mut seen: HashSet<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    seen.insert(atomic.get_value());

    let expected: HashSet<i32> = (0..=NUM_THREADS as i32).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_concurrent_bitwise_or() {
    let flags = Arc::new(AtomicUint64::new(0));
    let mut handles = vec![];

    for bit in 0..40u64 {
        let flags = flags.clone();
        handles.push(thread::spawn(move || {
            flags.or(1 << bit);
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(flags.get_value(), (1u64 << 40) - 1);
}
