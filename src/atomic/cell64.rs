/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # 64-bit Storage Cell
//!
//! The location shared by the native and the emulated 64-bit routines.
//! Signed and unsigned 64-bit integers are both stored as `u64` bit
//! patterns.

cfg_if::cfg_if! {
    if #[cfg(target_has_atomic = "64")] {
        use std::sync::atomic::{
            AtomicU64,
            Ordering,
        };

        /// Storage for one 64-bit atomic integer.
        #[doc(hidden)]
        #[repr(transparent)]
        pub struct Cell64(AtomicU64);

        impl Cell64 {
            #[inline]
            pub(crate) const fn new(bits: u64) -> Self {
                Self(AtomicU64::new(bits))
            }

            /// The hardware cell used by the native routines.
            #[inline]
            pub(crate) fn native(&self) -> &AtomicU64 {
                &self.0
            }

            /// Reads without taking part in any synchronization.
            #[inline]
            pub(crate) fn load_raw(&self) -> u64 {
                self.0.load(Ordering::Relaxed)
            }

            /// # Safety
            ///
            /// The emulation lock must be held.
            #[inline]
            pub(crate) unsafe fn read_plain(&self) -> u64 {
                self.0.load(Ordering::Relaxed)
            }

            /// # Safety
            ///
            /// The emulation lock must be held.
            #[inline]
            pub(crate) unsafe fn write_plain(&self, bits: u64) {
                self.0.store(bits, Ordering::Relaxed);
            }
        }
    } else {
        use std::cell::UnsafeCell;

        /// Storage for one 64-bit integer on a target without 64-bit
        /// atomics. Only ever touched under the emulation lock.
        #[doc(hidden)]
        #[repr(transparent)]
        pub struct Cell64(UnsafeCell<u64>);

        // SAFETY: every access goes through the emulated routines, which
        // serialize on one process-wide lock.
        unsafe impl Sync for Cell64 {}

        impl Cell64 {
            #[inline]
            pub(crate) const fn new(bits: u64) -> Self {
                Self(UnsafeCell::new(bits))
            }

            /// Without hardware support even a raw read must be serialized.
            #[inline]
            pub(crate) fn load_raw(&self) -> u64 {
                super::emulated::get(self)
            }

            /// # Safety
            ///
            /// The emulation lock must be held.
            #[inline]
            pub(crate) unsafe fn read_plain(&self) -> u64 {
                // SAFETY: the caller holds the emulation lock.
                unsafe { *self.0.get() }
            }

            /// # Safety
            ///
            /// The emulation lock must be held.
            #[inline]
            pub(crate) unsafe fn write_plain(&self, bits: u64) {
                // SAFETY: the caller holds the emulation lock.
                unsafe { *self.0.get() = bits }
            }
        }
    }
}
