/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic integers, so that algorithms such as
//! spinlocks or counters can be written once for every width.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic integers.
///
/// Provides the three primitive operations: get, set, and conditional set.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Gets the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    fn get_value(&self) -> Self::Value;

    /// Replaces the current value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The previous value.
    fn set_value(&self, value: Self::Value) -> Self::Value;

    /// Sets the value to `value` iff it currently equals `condition`.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    /// * `condition` - The expected current value.
    ///
    /// # Returns
    ///
    /// Whether the value was replaced.
    fn set_value_conditional(&self, value: Self::Value, condition: Self::Value) -> bool;
}

/// Trait for atomic integer arithmetic and bitwise operations.
///
/// Every method returns the value *after* the operation.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: Atomic {
    /// Increments the value by 1, returning the new value.
    fn increment(&self) -> Self::Value;

    /// Decrements the value by 1, returning the new value.
    fn decrement(&self) -> Self::Value;

    /// Adds a delta to the value, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to add.
    fn add(&self, value: Self::Value) -> Self::Value;

    /// Bitwise or, returning the new value.
    fn or(&self, value: Self::Value) -> Self::Value;

    /// Bitwise and, returning the new value.
    fn and(&self, value: Self::Value) -> Self::Value;

    /// Bitwise xor, returning the new value.
    fn xor(&self, value: Self::Value) -> Self::Value;
}
