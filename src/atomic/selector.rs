/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # 64-bit Atomic Implementation Selector
//!
//! Process-wide choice between the native and the emulated 64-bit routines.
//!
//! The four routines (`add`, `get`, `set`, `set_conditional`) are grouped
//! in one [`Atomic64Ops`] table per family, and the selection is a single
//! tag naming the table, so the routines in use always come from the same
//! family.
//!
//! The tag is read on every 64-bit operation and written without a lock.
//! An in-flight operation on another thread may still run with the
//! previous family, and native and emulated routines are not atomic with
//! respect to each other. Switch only during single-threaded start-up,
//! before any 64-bit atomic is shared.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::{
    AtomicU8,
    Ordering,
};

use log::{
    debug,
    warn,
};

use super::cell64::Cell64;
use super::emulated;

/// The family of routines backing 64-bit atomic integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Atomic64Implementation {
    /// Hardware 64-bit atomic instructions.
    Native = 0,
    /// A process-wide lock around plain reads and writes.
    Emulated = 1,
}

impl Atomic64Implementation {
    #[inline]
    fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Self::Native,
            _ => Self::Emulated,
        }
    }
}

impl fmt::Display for Atomic64Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Emulated => f.write_str("emulated"),
        }
    }
}

/// Whether this target has hardware 64-bit atomics at all.
pub const NATIVE_ATOMIC64_AVAILABLE: bool = cfg!(target_has_atomic = "64");

const DEFAULT_IMPLEMENTATION: Atomic64Implementation =
    if NATIVE_ATOMIC64_AVAILABLE && !cfg!(feature = "emulated-atomic64") {
        Atomic64Implementation::Native
    } else {
        Atomic64Implementation::Emulated
    };

static ACTIVE: AtomicU8 = AtomicU8::new(DEFAULT_IMPLEMENTATION as u8);

/// One family of 64-bit routines.
pub(crate) struct Atomic64Ops {
    pub(crate) add: fn(&Cell64, u64) -> u64,
    pub(crate) get: fn(&Cell64) -> u64,
    pub(crate) set: fn(&Cell64, u64) -> u64,
    pub(crate) set_conditional: fn(&Cell64, u64, u64) -> bool,
}

#[cfg(target_has_atomic = "64")]
mod native {
    use super::super::backend::{
        AtomicBackend,
        NativeBackend,
    };
    use super::Cell64;

    pub(super) fn add(cell: &Cell64, value: u64) -> u64 {
        NativeBackend::add(cell.native(), value)
    }

    pub(super) fn get(cell: &Cell64) -> u64 {
        NativeBackend::get(cell.native())
    }

    pub(super) fn set(cell: &Cell64, value: u64) -> u64 {
        NativeBackend::set(cell.native(), value)
    }

    pub(super) fn set_conditional(cell: &Cell64, value: u64, condition: u64) -> bool {
        NativeBackend::set_conditional(cell.native(), value, condition)
    }
}

#[cfg(target_has_atomic = "64")]
static NATIVE_OPS: Atomic64Ops = Atomic64Ops {
    add: native::add,
    get: native::get,
    set: native::set,
    set_conditional: native::set_conditional,
};

static EMULATED_OPS: Atomic64Ops = Atomic64Ops {
    add: emulated::add,
    get: emulated::get,
    set: emulated::set,
    set_conditional: emulated::set_conditional,
};

impl Atomic64Ops {
    /// The routine table of the given family.
    #[inline]
    pub(crate) fn of(implementation: Atomic64Implementation) -> &'static Self {
        match implementation {
            #[cfg(target_has_atomic = "64")]
            Atomic64Implementation::Native => &NATIVE_OPS,
            _ => &EMULATED_OPS,
        }
    }

    /// The routine table currently selected for the process.
    #[inline]
    pub(crate) fn active() -> &'static Self {
        Self::of(atomic64_implementation())
    }
}

/// Returns the family currently backing 64-bit atomic integers.
#[inline]
pub fn atomic64_implementation() -> Atomic64Implementation {
    Atomic64Implementation::from_tag(ACTIVE.load(Ordering::Relaxed))
}

/// Repoints all 64-bit atomic operations to the given family and returns
/// the family that was active before.
///
/// Not synchronized with concurrent 64-bit atomic operations: call it only
/// while no other thread uses 64-bit atomics, typically at start-up.
///
/// Requesting [`Atomic64Implementation::Native`] on a target without
/// hardware 64-bit atomics keeps the emulated routines and logs a warning.
///
/// # Parameters
///
/// * `implementation` - The family to switch to.
///
/// # Returns
///
/// The previously active family.
pub fn set_atomic64_implementation(
    implementation: Atomic64Implementation,
) -> Atomic64Implementation {
    let effective = if implementation == Atomic64Implementation::Native
        && !NATIVE_ATOMIC64_AVAILABLE
    {
        warn!("native 64-bit atomics are not available on this target; keeping emulation");
        Atomic64Implementation::Emulated
    } else {
        implementation
    };
    let previous = Atomic64Implementation::from_tag(ACTIVE.swap(effective as u8, Ordering::Relaxed));
    if previous != effective {
        debug!("64-bit atomics switched from {} to {}", previous, effective);
    }
    previous
}
