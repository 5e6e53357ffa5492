/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Raw Atomic Cells
//!
//! A uniform view over the standard library's fixed-width atomic integers,
//! so that the architecture backends can be written once for every width.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::ops::{
    BitAnd,
    BitOr,
    BitXor,
};
use std::sync::atomic::Ordering;

/// A hardware atomic integer cell.
///
/// Every read-modify-write method uses `SeqCst` ordering. Only `load` and
/// `store` take an explicit ordering, because the backends need relaxed
/// accesses for the first read of a retry loop and for raw inspection.
pub trait RawAtomic: Send + Sync {
    /// The integer type held by the cell.
    type Value: Copy
        + Eq
        + fmt::Debug
        + BitOr<Output = Self::Value>
        + BitAnd<Output = Self::Value>
        + BitXor<Output = Self::Value>;

    /// Creates a new cell holding `value`.
    fn new(value: Self::Value) -> Self;

    /// Loads the value with the given ordering.
    fn load(&self, order: Ordering) -> Self::Value;

    /// Stores the value with the given ordering.
    fn store(&self, value: Self::Value, order: Ordering);

    /// Replaces the value, returning the previous one.
    fn swap(&self, value: Self::Value) -> Self::Value;

    /// Strong compare-and-exchange. Returns `Ok(previous)` on success and
    /// `Err(actual)` on failure.
    fn compare_exchange(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Result<Self::Value, Self::Value>;

    /// Weak compare-and-exchange. May fail spuriously even when the value
    /// equals `current`; this is the reserve/conditional-store primitive on
    /// LL/SC hardware.
    fn compare_exchange_weak(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Result<Self::Value, Self::Value>;

    /// Adds with wrap-around, returning the previous value.
    fn fetch_add(&self, value: Self::Value) -> Self::Value;

    /// Bitwise or, returning the previous value.
    fn fetch_or(&self, value: Self::Value) -> Self::Value;

    /// Bitwise and, returning the previous value.
    fn fetch_and(&self, value: Self::Value) -> Self::Value;

    /// Bitwise xor, returning the previous value.
    fn fetch_xor(&self, value: Self::Value) -> Self::Value;

    /// Two's-complement addition of two plain values.
    fn wrapping_add(a: Self::Value, b: Self::Value) -> Self::Value;
}

/// Implements [`RawAtomic`] for one standard library atomic type.
macro_rules! impl_raw_atomic {
    ($inner_type:ty, $value_type:ty) => {
        impl RawAtomic for $inner_type {
            type Value = $value_type;

            #[inline]
            fn new(value: $value_type) -> Self {
                <$inner_type>::new(value)
            }

            #[inline]
            fn load(&self, order: Ordering) -> $value_type {
                <$inner_type>::load(self, order)
            }

            #[inline]
            fn store(&self, value: $value_type, order: Ordering) {
                <$inner_type>::store(self, value, order);
            }

            #[inline]
            fn swap(&self, value: $value_type) -> $value_type {
                <$inner_type>::swap(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn compare_exchange(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<$value_type, $value_type> {
                <$inner_type>::compare_exchange(
                    self,
                    current,
                    new,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                )
            }

            #[inline]
            fn compare_exchange_weak(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<$value_type, $value_type> {
                <$inner_type>::compare_exchange_weak(
                    self,
                    current,
                    new,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                )
            }

            #[inline]
            fn fetch_add(&self, value: $value_type) -> $value_type {
                <$inner_type>::fetch_add(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn fetch_or(&self, value: $value_type) -> $value_type {
                <$inner_type>::fetch_or(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn fetch_and(&self, value: $value_type) -> $value_type {
                <$inner_type>::fetch_and(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn fetch_xor(&self, value: $value_type) -> $value_type {
                <$inner_type>::fetch_xor(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn wrapping_add(a: $value_type, b: $value_type) -> $value_type {
                a.wrapping_add(b)
            }
        }
    };
}

impl_raw_atomic!(std::sync::atomic::AtomicI32, i32);
impl_raw_atomic!(std::sync::atomic::AtomicU32, u32);

#[cfg(target_has_atomic = "64")]
impl_raw_atomic!(std::sync::atomic::AtomicI64, i64);
#[cfg(target_has_atomic = "64")]
impl_raw_atomic!(std::sync::atomic::AtomicU64, u64);
