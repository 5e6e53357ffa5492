/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integers
//!
//! A generic atomic integer, [`AtomicInt<T>`], for 32- and 64-bit signed and
//! unsigned integers, built on per-architecture backends.
//!
//! # Features
//!
//! - One operation set for every width: get, set, conditional set,
//!   increment, decrement, add, or, and, xor
//! - Compile-time choice between single-instruction and LL/SC-style
//!   backends, with or without trailing barriers
//! - 64-bit atomics switchable at run time between hardware instructions
//!   and a lock-based emulation, for hardware whose 64-bit atomics are
//!   missing or unreliable
//!
//! # Author
//!
//! Haixing Hu

mod atomic_int;
mod backend;
mod cell64;
mod emulated;
mod raw;
mod selector;
mod traits;
mod value;

pub use atomic_int::{
    AtomicInt,
    AtomicInt32,
    AtomicInt64,
    AtomicUint32,
    AtomicUint64,
};
pub use backend::{
    AtomicBackend,
    LlscBackend,
    NativeBackend,
    RmwBackend,
    REQUIRES_EXPLICIT_FENCE,
};
pub use emulated::emulation_notice_emitted;
pub use raw::RawAtomic;
pub use selector::{
    atomic64_implementation,
    set_atomic64_implementation,
    Atomic64Implementation,
    NATIVE_ATOMIC64_AVAILABLE,
};
pub use traits::{
    Atomic,
    AtomicInteger,
};
pub use value::AtomicValue;
