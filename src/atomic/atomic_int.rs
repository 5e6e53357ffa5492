/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Generic Atomic Integer
//!
//! Provides [`AtomicInt<T>`], one atomic integer type for every supported
//! width and signedness, with a single operation set.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::ops::{
    AddAssign,
    SubAssign,
};

use super::traits::{
    Atomic,
    AtomicInteger,
};
use super::value::AtomicValue;

/// Atomic integer of type `T` (`i32`, `u32`, `i64` or `u64`).
///
/// Every operation is a single atomic transaction in one total order per
/// location: a reader never observes a value formed from partial writes.
/// Arithmetic wraps on overflow in two's complement.
///
/// 32-bit operations use the architecture backend directly. 64-bit
/// operations go through the process-wide selector and therefore run
/// either on hardware atomics or under a process-wide lock (see
/// [`set_atomic64_implementation`](crate::set_atomic64_implementation)).
///
/// # Memory Ordering
///
/// All operations are sequentially consistent, except
/// [`get_value_raw`](Self::get_value_raw).
///
/// # Example
///
/// ```rust
/// use prism3_concurrent::AtomicInt32;
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(AtomicInt32::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     handles.push(thread::spawn(move || {
///         for _ in 0..100 {
///             counter.increment();
///         }
///     }));
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.get_value(), 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicInt<T: AtomicValue> {
    storage: T::Storage,
}

/// Atomic `i32`.
pub type AtomicInt32 = AtomicInt<i32>;

/// Atomic `u32`.
pub type AtomicUint32 = AtomicInt<u32>;

/// Atomic `i64`.
pub type AtomicInt64 = AtomicInt<i64>;

/// Atomic `u64`.
pub type AtomicUint64 = AtomicInt<u64>;

impl<T: AtomicValue> AtomicInt<T> {
    /// Creates a new atomic integer.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            storage: T::new_storage(value),
        }
    }

    /// Gets the current value.
    ///
    /// # Returns
    ///
    /// A value consistent with the total order of completed writes.
    #[inline]
    pub fn get_value(&self) -> T {
        T::load(&self.storage)
    }

    /// Reads the stored value without synchronizing with other threads.
    ///
    /// Meant for diagnostics and debugging only. This is *not* a
    /// synchronization point: writes made by other threads before their
    /// last operation on this integer may not be visible afterwards.
    #[inline]
    pub fn get_value_raw(&self) -> T {
        T::load_raw(&self.storage)
    }

    /// Replaces the value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The previous value.
    #[inline]
    pub fn set_value(&self, value: T) -> T {
        T::swap(&self.storage, value)
    }

    /// Replaces the value with `value` iff it currently equals `condition`.
    ///
    /// The comparison and the store form one atomic transaction; no other
    /// write can land between them. Lock-free algorithms elsewhere are built
    /// on this.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to store.
    /// * `condition` - The value expected to be present.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced, `false` if it was left unchanged.
    #[inline]
    pub fn set_value_conditional(&self, value: T, condition: T) -> bool {
        T::set_conditional(&self.storage, value, condition)
    }

    /// Increments by one and returns the new value.
    #[inline]
    pub fn increment(&self) -> T {
        T::add(&self.storage, T::ONE)
    }

    /// Decrements by one and returns the new value.
    #[inline]
    pub fn decrement(&self) -> T {
        T::add(&self.storage, T::ONE.wrapping_neg())
    }

    /// Increments by one and returns the value before the increment.
    ///
    /// Same atomic operation as [`increment`](Self::increment); only the
    /// reported value differs.
    #[inline]
    pub fn post_increment(&self) -> T {
        self.increment().wrapping_add(T::ONE.wrapping_neg())
    }

    /// Decrements by one and returns the value before the decrement.
    #[inline]
    pub fn post_decrement(&self) -> T {
        self.decrement().wrapping_add(T::ONE)
    }

    /// Adds `value` and returns the new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The addend. For signed types a negative addend
    ///   subtracts.
    ///
    /// # Returns
    ///
    /// The value after the addition.
    #[inline]
    pub fn add(&self, value: T) -> T {
        T::add(&self.storage, value)
    }

    /// Subtracts `value` and returns the new value.
    #[inline]
    pub fn sub(&self, value: T) -> T {
        T::add(&self.storage, value.wrapping_neg())
    }

    /// Bitwise or with `value`; returns the new value.
    #[inline]
    pub fn or(&self, value: T) -> T {
        T::or(&self.storage, value)
    }

    /// Bitwise and with `value`; returns the new value.
    #[inline]
    pub fn and(&self, value: T) -> T {
        T::and(&self.storage, value)
    }

    /// Bitwise xor with `value`; returns the new value.
    #[inline]
    pub fn xor(&self, value: T) -> T {
        T::xor(&self.storage, value)
    }
}

// Trait implementations forward to the inherent methods so that both
// direct calls and generic code over `Atomic`/`AtomicInteger` work.

impl<T: AtomicValue> Atomic for AtomicInt<T> {
    type Value = T;

    #[inline]
    fn get_value(&self) -> T {
        AtomicInt::get_value(self)
    }

    #[inline]
    fn set_value(&self, value: T) -> T {
        AtomicInt::set_value(self, value)
    }

    #[inline]
    fn set_value_conditional(&self, value: T, condition: T) -> bool {
        AtomicInt::set_value_conditional(self, value, condition)
    }
}

impl<T: AtomicValue> AtomicInteger for AtomicInt<T> {
    #[inline]
    fn increment(&self) -> T {
        AtomicInt::increment(self)
    }

    #[inline]
    fn decrement(&self) -> T {
        AtomicInt::decrement(self)
    }

    #[inline]
    fn add(&self, value: T) -> T {
        AtomicInt::add(self, value)
    }

    #[inline]
    fn or(&self, value: T) -> T {
        AtomicInt::or(self, value)
    }

    #[inline]
    fn and(&self, value: T) -> T {
        AtomicInt::and(self, value)
    }

    #[inline]
    fn xor(&self, value: T) -> T {
        AtomicInt::xor(self, value)
    }
}

impl<T: AtomicValue> AddAssign<T> for AtomicInt<T> {
    #[inline]
    fn add_assign(&mut self, value: T) {
        AtomicInt::add(self, value);
    }
}

impl<T: AtomicValue> SubAssign<T> for AtomicInt<T> {
    #[inline]
    fn sub_assign(&mut self, value: T) {
        AtomicInt::sub(self, value);
    }
}

impl<T: AtomicValue> AddAssign<T> for &AtomicInt<T> {
    #[inline]
    fn add_assign(&mut self, value: T) {
        AtomicInt::add(*self, value);
    }
}

impl<T: AtomicValue> SubAssign<T> for &AtomicInt<T> {
    #[inline]
    fn sub_assign(&mut self, value: T) {
        AtomicInt::sub(*self, value);
    }
}

impl<T: AtomicValue> Clone for AtomicInt<T> {
    /// Creates a new atomic integer holding this one's current value.
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.get_value())
    }
}

impl<T: AtomicValue> Default for AtomicInt<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: AtomicValue> From<T> for AtomicInt<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: AtomicValue> fmt::Debug for AtomicInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicInt")
            .field("value", &self.get_value())
            .finish()
    }
}

impl<T: AtomicValue> fmt::Display for AtomicInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_value())
    }
}
