/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Emulated 64-bit Atomics
//!
//! The 64-bit operation set built from one process-wide lock instead of
//! hardware atomics. Each routine takes the lock, does a plain read or
//! read-modify-write of the cell, and releases the lock when its guard
//! drops. None of them can fail.
//!
//! The first emulated operation logs a warning, because emulation is a
//! performance hazard on hardware that could do the job natively. The
//! warning is best-effort-once: concurrent first calls may log it more
//! than once, but it is never skipped.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    AtomicBool,
    Ordering,
};

use log::warn;
use parking_lot::{
    const_mutex,
    Mutex,
};

use super::cell64::Cell64;

static EMULATION_LOCK: Mutex<()> = const_mutex(());

static NOTICE_EMITTED: AtomicBool = AtomicBool::new(false);

#[inline]
fn emit_emulation_notice() {
    if !NOTICE_EMITTED.load(Ordering::Relaxed) {
        NOTICE_EMITTED.store(true, Ordering::Relaxed);
        warn!(
            "64-bit atomics are emulated with a process-wide lock. This is a \
             performance hazard on hardware with native 64-bit atomics; call \
             set_atomic64_implementation(Atomic64Implementation::Native) if \
             this platform supports them."
        );
    }
}

/// Returns whether the emulated-atomics warning has been logged in this
/// process.
pub fn emulation_notice_emitted() -> bool {
    NOTICE_EMITTED.load(Ordering::Relaxed)
}

/// Adds with wrap-around and returns the new value.
pub(crate) fn add(cell: &Cell64, value: u64) -> u64 {
    let _guard = EMULATION_LOCK.lock();
    emit_emulation_notice();
    // SAFETY: the emulation lock is held.
    unsafe {
        let new = cell.read_plain().wrapping_add(value);
        cell.write_plain(new);
        new
    }
}

/// Reads the current value.
pub(crate) fn get(cell: &Cell64) -> u64 {
    let _guard = EMULATION_LOCK.lock();
    emit_emulation_notice();
    // SAFETY: the emulation lock is held.
    unsafe { cell.read_plain() }
}

/// Replaces the value and returns the previous one.
pub(crate) fn set(cell: &Cell64, value: u64) -> u64 {
    let _guard = EMULATION_LOCK.lock();
    emit_emulation_notice();
    // SAFETY: the emulation lock is held.
    unsafe {
        let old = cell.read_plain();
        cell.write_plain(value);
        old
    }
}

/// Stores `value` iff the current value equals `condition`; returns
/// whether the store happened.
pub(crate) fn set_conditional(cell: &Cell64, value: u64, condition: u64) -> bool {
    let _guard = EMULATION_LOCK.lock();
    emit_emulation_notice();
    // SAFETY: the emulation lock is held.
    unsafe {
        if cell.read_plain() == condition {
            cell.write_plain(value);
            true
        } else {
            false
        }
    }
}
