/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Architecture Atomic Backends
//!
//! Two ways of building the atomic operation set out of hardware
//! primitives:
//!
//! - [`RmwBackend`] issues a single read-modify-write instruction per
//!   operation (`lock xadd`, `xchg`, `lock cmpxchg` on x86).
//! - [`LlscBackend`] runs a load / compute / conditional-store retry loop,
//!   which is what load-linked/store-conditional hardware executes. The
//!   `FENCED` variant issues a full fence after every successful operation
//!   for targets whose memory model needs explicit barriers.
//!
//! [`NativeBackend`] is the variant chosen for the compilation target.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    fence,
    Ordering,
};

use super::raw::RawAtomic;

/// The operation set every architecture backend provides.
///
/// `add`, `or`, `and` and `xor` return the value *after* the operation.
/// `set` returns the value before it.
pub trait AtomicBackend {
    /// Reads the current value.
    fn get<A: RawAtomic>(cell: &A) -> A::Value;

    /// Replaces the value, returning the previous one.
    fn set<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value;

    /// Stores `value` iff the current value equals `condition`, as one
    /// atomic transaction. Returns whether the store happened.
    fn set_conditional<A: RawAtomic>(cell: &A, value: A::Value, condition: A::Value) -> bool;

    /// Adds `value` with wrap-around and returns the new value.
    fn add<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value;

    /// Bitwise or; returns the new value.
    fn or<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value;

    /// Bitwise and; returns the new value.
    fn and<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value;

    /// Bitwise xor; returns the new value.
    fn xor<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value;
}

/// Backend for targets with single-instruction read-modify-write atomics.
///
/// No retry loop and no extra barrier: the locked instructions are already
/// sequentially consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RmwBackend;

impl AtomicBackend for RmwBackend {
    #[inline]
    fn get<A: RawAtomic>(cell: &A) -> A::Value {
        cell.load(Ordering::SeqCst)
    }

    #[inline]
    fn set<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        cell.swap(value)
    }

    #[inline]
    fn set_conditional<A: RawAtomic>(cell: &A, value: A::Value, condition: A::Value) -> bool {
        cell.compare_exchange(condition, value).is_ok()
    }

    #[inline]
    fn add<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        A::wrapping_add(cell.fetch_add(value), value)
    }

    #[inline]
    fn or<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        cell.fetch_or(value) | value
    }

    #[inline]
    fn and<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        cell.fetch_and(value) & value
    }

    #[inline]
    fn xor<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        cell.fetch_xor(value) ^ value
    }
}

/// Backend for load-linked/store-conditional targets.
///
/// Each operation reserves the current value, computes the replacement and
/// attempts a conditional store, starting over when another write got in
/// between. Lock-free, not wait-free.
///
/// With `FENCED = true` a `SeqCst` fence follows every successful store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LlscBackend<const FENCED: bool>;

impl<const FENCED: bool> LlscBackend<FENCED> {
    /// Runs the retry loop, returning `(previous, new)`.
    #[inline]
    fn update<A, F>(cell: &A, f: F) -> (A::Value, A::Value)
    where
        A: RawAtomic,
        F: Fn(A::Value) -> A::Value,
    {
        let mut current = cell.load(Ordering::Relaxed);
        loop {
            let new = f(current);
            match cell.compare_exchange_weak(current, new) {
                Ok(_) => {
                    Self::barrier();
                    return (current, new);
                }
                Err(actual) => current = actual,
            }
        }
    }

    #[inline(always)]
    fn barrier() {
        if FENCED {
            fence(Ordering::SeqCst);
        }
    }
}

impl<const FENCED: bool> AtomicBackend for LlscBackend<FENCED> {
    #[inline]
    fn get<A: RawAtomic>(cell: &A) -> A::Value {
        let value = cell.load(Ordering::SeqCst);
        Self::barrier();
        value
    }

    #[inline]
    fn set<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        Self::update(cell, |_| value).0
    }

    #[inline]
    fn set_conditional<A: RawAtomic>(cell: &A, value: A::Value, condition: A::Value) -> bool {
        loop {
            match cell.compare_exchange_weak(condition, value) {
                Ok(_) => {
                    Self::barrier();
                    return true;
                }
                // Lost the reservation without the value changing: retry.
                Err(actual) if actual == condition => continue,
                Err(_) => return false,
            }
        }
    }

    #[inline]
    fn add<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        Self::update(cell, |current| A::wrapping_add(current, value)).1
    }

    #[inline]
    fn or<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        Self::update(cell, |current| current | value).1
    }

    #[inline]
    fn and<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        Self::update(cell, |current| current & value).1
    }

    #[inline]
    fn xor<A: RawAtomic>(cell: &A, value: A::Value) -> A::Value {
        Self::update(cell, |current| current ^ value).1
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        /// The backend selected for the compilation target.
        pub type NativeBackend = RmwBackend;

        /// Whether the target needs explicit barriers around atomics.
        pub const REQUIRES_EXPLICIT_FENCE: bool = false;
    } else if #[cfg(any(
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "riscv32",
        target_arch = "riscv64"
    ))] {
        /// The backend selected for the compilation target.
        pub type NativeBackend = LlscBackend<true>;

        /// Whether the target needs explicit barriers around atomics.
        pub const REQUIRES_EXPLICIT_FENCE: bool = true;
    } else {
        /// The backend selected for the compilation target.
        pub type NativeBackend = LlscBackend<false>;

        /// Whether the target needs explicit barriers around atomics.
        pub const REQUIRES_EXPLICIT_FENCE: bool = false;
    }
}
