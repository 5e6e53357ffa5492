/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Platform Semaphore Primitives
//!
//! The kernel-object contract a [`Semaphore`](super::Semaphore) is layered
//! on, and the implementation selected for the current platform.
//!
//! # Author
//!
//! Haixing Hu

use std::io;
use std::time::Instant;

use super::params::SemaphoreParameters;

/// A platform counting semaphore: create, wait, post, and release on drop.
///
/// Implementations know nothing about the maximum count; the owning
/// [`Semaphore`](super::Semaphore) enforces it.
pub trait RawSemaphore: Send + Sync + Sized {
    /// Creates the platform object holding `params.initial_count` tokens.
    fn create(params: &SemaphoreParameters) -> io::Result<Self>;

    /// Blocks until a token is taken or the deadline passes.
    ///
    /// # Parameters
    ///
    /// * `deadline` - Absolute deadline, or `None` to wait forever. A
    ///   deadline in the past still takes an available token.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a token was taken, `Ok(false)` if the deadline passed
    /// first, `Err` if the platform wait failed.
    fn wait(&self, deadline: Option<Instant>) -> io::Result<bool>;

    /// Releases one token, waking one waiter if any.
    fn post(&self) -> io::Result<()>;

    /// Returns the token count held by the platform object when other
    /// handles, possibly in other processes, can change it.
    ///
    /// `None` means this handle is the only one and the owning
    /// [`Semaphore`](super::Semaphore) tracks the count itself.
    fn shared_count(&self) -> Option<i32> {
        None
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        /// The platform semaphore used by default.
        pub type DefaultRawSemaphore = super::posix::PosixSemaphore;
    } else {
        /// The platform semaphore used by default.
        pub type DefaultRawSemaphore = super::condvar::CondvarSemaphore;
    }
}
