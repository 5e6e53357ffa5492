/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Value Types
//!
//! Routes each supported integer width to its implementation: 32-bit
//! integers go straight to the architecture backend, 64-bit integers go
//! through the process-wide 64-bit selector.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::{
    AtomicI32 as StdAtomicI32,
    AtomicU32 as StdAtomicU32,
    Ordering,
};

use super::backend::{
    AtomicBackend,
    NativeBackend,
};
use super::cell64::Cell64;
use super::selector::Atomic64Ops;

mod private {
    pub trait Sealed {}
}

/// An integer type that can be held by an
/// [`AtomicInt`](super::AtomicInt).
///
/// Implemented for `i32`, `u32`, `i64` and `u64`. Sealed.
pub trait AtomicValue:
    private::Sealed + Copy + Eq + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The storage cell for this width.
    #[doc(hidden)]
    type Storage: Send + Sync;

    /// The value one.
    const ONE: Self;

    #[doc(hidden)]
    fn new_storage(value: Self) -> Self::Storage;

    #[doc(hidden)]
    fn load(storage: &Self::Storage) -> Self;

    #[doc(hidden)]
    fn load_raw(storage: &Self::Storage) -> Self;

    #[doc(hidden)]
    fn swap(storage: &Self::Storage, value: Self) -> Self;

    #[doc(hidden)]
    fn set_conditional(storage: &Self::Storage, value: Self, condition: Self) -> bool;

    #[doc(hidden)]
    fn add(storage: &Self::Storage, value: Self) -> Self;

    #[doc(hidden)]
    fn or(storage: &Self::Storage, value: Self) -> Self;

    #[doc(hidden)]
    fn and(storage: &Self::Storage, value: Self) -> Self;

    #[doc(hidden)]
    fn xor(storage: &Self::Storage, value: Self) -> Self;

    /// Two's-complement negation.
    fn wrapping_neg(self) -> Self;

    /// Two's-complement addition.
    fn wrapping_add(self, other: Self) -> Self;
}

/// Implements [`AtomicValue`] for a 32-bit integer on top of the native
/// architecture backend.
macro_rules! impl_atomic_value_32 {
    ($value_type:ty, $storage_type:ty) => {
        impl private::Sealed for $value_type {}

        impl AtomicValue for $value_type {
            type Storage = $storage_type;

            const ONE: Self = 1;

            #[inline]
            fn new_storage(value: Self) -> Self::Storage {
                <$storage_type>::new(value)
            }

            #[inline]
            fn load(storage: &Self::Storage) -> Self {
                NativeBackend::get(storage)
            }

            #[inline]
            fn load_raw(storage: &Self::Storage) -> Self {
                storage.load(Ordering::Relaxed)
            }

            #[inline]
            fn swap(storage: &Self::Storage, value: Self) -> Self {
                NativeBackend::set(storage, value)
            }

            #[inline]
            fn set_conditional(storage: &Self::Storage, value: Self, condition: Self) -> bool {
                NativeBackend::set_conditional(storage, value, condition)
            }

            #[inline]
            fn add(storage: &Self::Storage, value: Self) -> Self {
                NativeBackend::add(storage, value)
            }

            #[inline]
            fn or(storage: &Self::Storage, value: Self) -> Self {
                NativeBackend::or(storage, value)
            }

            #[inline]
            fn and(storage: &Self::Storage, value: Self) -> Self {
                NativeBackend::and(storage, value)
            }

            #[inline]
            fn xor(storage: &Self::Storage, value: Self) -> Self {
                NativeBackend::xor(storage, value)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$value_type>::wrapping_neg(self)
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                <$value_type>::wrapping_add(self, other)
            }
        }
    };
}

/// Implements [`AtomicValue`] for a 64-bit integer dispatched through the
/// active [`Atomic64Ops`] table. The bitwise operations are compare-and-swap
/// loops over the table's `get` and `set_conditional`.
macro_rules! impl_atomic_value_64 {
    ($value_type:ty) => {
        impl private::Sealed for $value_type {}

        impl AtomicValue for $value_type {
            type Storage = Cell64;

            const ONE: Self = 1;

            #[inline]
            fn new_storage(value: Self) -> Self::Storage {
                Cell64::new(value as u64)
            }

            #[inline]
            fn load(storage: &Self::Storage) -> Self {
                (Atomic64Ops::active().get)(storage) as $value_type
            }

            #[inline]
            fn load_raw(storage: &Self::Storage) -> Self {
                storage.load_raw() as $value_type
            }

            #[inline]
            fn swap(storage: &Self::Storage, value: Self) -> Self {
                (Atomic64Ops::active().set)(storage, value as u64) as $value_type
            }

            #[inline]
            fn set_conditional(storage: &Self::Storage, value: Self, condition: Self) -> bool {
                (Atomic64Ops::active().set_conditional)(storage, value as u64, condition as u64)
            }

            #[inline]
            fn add(storage: &Self::Storage, value: Self) -> Self {
                (Atomic64Ops::active().add)(storage, value as u64) as $value_type
            }

            #[inline]
            fn or(storage: &Self::Storage, value: Self) -> Self {
                update_64(storage, |bits| bits | value as u64) as $value_type
            }

            #[inline]
            fn and(storage: &Self::Storage, value: Self) -> Self {
                update_64(storage, |bits| bits & value as u64) as $value_type
            }

            #[inline]
            fn xor(storage: &Self::Storage, value: Self) -> Self {
                update_64(storage, |bits| bits ^ value as u64) as $value_type
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$value_type>::wrapping_neg(self)
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                <$value_type>::wrapping_add(self, other)
            }
        }
    };
}

/// Compare-and-swap loop on a 64-bit cell; returns the new bits.
#[inline]
fn update_64<F>(storage: &Cell64, f: F) -> u64
where
    F: Fn(u64) -> u64,
{
    let ops = Atomic64Ops::active();
    let mut current = (ops.get)(storage);
    loop {
        let new = f(current);
        if (ops.set_conditional)(storage, new, current) {
            return new;
        }
        current = (ops.get)(storage);
    }
}

impl_atomic_value_32!(i32, StdAtomicI32);
impl_atomic_value_32!(u32, StdAtomicU32);
impl_atomic_value_64!(i64);
impl_atomic_value_64!(u64);
