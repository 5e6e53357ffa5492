/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-concurrent
//!
//! Portable concurrency primitives: a generic atomic integer and a bounded
//! counting semaphore.
//!
//! ## Design Goals
//!
//! - **Portability**: one contract whatever the hardware's native atomic
//!   width or the OS semaphore primitive
//! - **Predictability**: every atomic operation is a single sequentially
//!   consistent transaction; every semaphore failure is a returned value
//! - **Escape hatches**: 64-bit atomics can be moved onto a lock-based
//!   emulation at start-up for hardware whose 64-bit atomics are broken
//!
//! ## Features
//!
//! - Atomic integers: `AtomicInt<T>` with `AtomicInt32`, `AtomicUint32`,
//!   `AtomicInt64`, `AtomicUint64`
//! - Architecture backends: `RmwBackend`, `LlscBackend`, `NativeBackend`
//! - 64-bit selection: `set_atomic64_implementation`
//! - Counting semaphore: `Semaphore`, `SemaphoreParameters`
//!
//! ## Example
//!
//! ```rust
//! use prism3_concurrent::{AtomicInt32, Semaphore};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let done = Arc::new(AtomicInt32::new(0));
//! let ready = Arc::new(Semaphore::with_count(0).unwrap());
//!
//! let worker = {
//!     let done = done.clone();
//!     let ready = ready.clone();
//!     thread::spawn(move || {
//!         done.increment();
//!         ready.post().unwrap();
//!     })
//! };
//!
//! ready.wait().unwrap();
//! assert_eq!(done.get_value(), 1);
//! worker.join().unwrap();
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod semaphore;

pub use atomic::{
    atomic64_implementation,
    set_atomic64_implementation,
    Atomic,
    Atomic64Implementation,
    AtomicInt,
    AtomicInt32,
    AtomicInt64,
    AtomicInteger,
    AtomicUint32,
    AtomicUint64,
    AtomicValue,
};
pub use semaphore::{
    Semaphore,
    SemaphoreError,
    SemaphoreParameters,
    SemaphoreResult,
};
