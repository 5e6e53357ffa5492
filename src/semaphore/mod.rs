/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Counting Semaphore
//!
//! A bounded counting semaphore layered on a platform semaphore, with an
//! atomic mirror of the count for lock-free inspection.
//!
//! # Author
//!
//! Haixing Hu

mod condvar;
mod error;
mod params;
#[cfg(target_os = "linux")]
mod posix;
mod raw;

use std::fmt;
use std::time::{
    Duration,
    Instant,
};

use log::{
    debug,
    trace,
    warn,
};

use crate::atomic::AtomicInt32;

pub use condvar::CondvarSemaphore;
pub use error::{
    SemaphoreError,
    SemaphoreResult,
};
pub use params::SemaphoreParameters;
#[cfg(target_os = "linux")]
pub use posix::PosixSemaphore;
pub use raw::{
    DefaultRawSemaphore,
    RawSemaphore,
};

/// A counting semaphore holding between `0` and `max_count` tokens.
///
/// [`wait`](Self::wait) takes a token, blocking while none is available;
/// [`post`](Self::post) returns tokens, rejecting posts that would exceed
/// the maximum count.
///
/// Creating the value initializes the platform semaphore and dropping it
/// releases the platform handle exactly once. Dropping a semaphore while
/// threads are blocked in `wait` is the caller's error; shared ownership
/// (e.g. `Arc`) rules it out.
///
/// No wake order among waiters is promised beyond what the platform
/// semaphore provides.
///
/// An intra-process semaphore keeps an atomic mirror of the count. A named
/// inter-process semaphore has no private count: every handle reads the
/// count held by the platform object, so tokens posted through one handle
/// are seen by all of them.
///
/// # Example
///
/// ```rust
/// use prism3_concurrent::{Semaphore, SemaphoreParameters};
///
/// let sem = Semaphore::new(&SemaphoreParameters::new(1).with_max_count(1)).unwrap();
/// assert_eq!(sem.wait().unwrap(), 0);
/// assert_eq!(sem.post().unwrap(), 1);
/// assert!(sem.post().unwrap_err().is_overflow());
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct Semaphore<R: RawSemaphore = DefaultRawSemaphore> {
    raw: R,
    count: AtomicInt32,
    shared: bool,
    max_count: i32,
    name: Option<String>,
}

impl Semaphore {
    /// Creates a semaphore on the platform's default primitive.
    ///
    /// # Parameters
    ///
    /// * `params` - Initial count, maximum count, scope and name.
    ///
    /// # Returns
    ///
    /// The semaphore, or [`SemaphoreError::InvalidParameters`] /
    /// [`SemaphoreError::Creation`] if it could not be initialized.
    pub fn new(params: &SemaphoreParameters) -> SemaphoreResult<Self> {
        Self::with_raw(params)
    }

    /// Creates an intra-process semaphore with the given initial count and
    /// the default maximum count.
    pub fn with_count(initial_count: i32) -> SemaphoreResult<Self> {
        Self::new(&SemaphoreParameters::new(initial_count))
    }
}

impl<R: RawSemaphore> Semaphore<R> {
    /// Creates a semaphore on the platform primitive `R`.
    pub fn with_raw(params: &SemaphoreParameters) -> SemaphoreResult<Self> {
        params.validate()?;
        let raw = R::create(params).map_err(|e| {
            warn!("failed to create semaphore {:?}: {}", params.name, e);
            SemaphoreError::Creation(e)
        })?;
        let shared = raw.shared_count();
        debug!(
            "created semaphore {:?} with count {} (max {})",
            params.name,
            shared.unwrap_or(params.initial_count),
            params.max_count
        );
        Ok(Self {
            raw,
            count: AtomicInt32::new(params.initial_count),
            shared: shared.is_some(),
            max_count: params.max_count,
            name: params.name.clone(),
        })
    }

    /// Takes a token, blocking for as long as it takes.
    ///
    /// # Returns
    ///
    /// The count after taking the token. Other threads may have changed it
    /// by the time the caller looks at it.
    pub fn wait(&self) -> SemaphoreResult<i32> {
        self.wait_deadline(None)
    }

    /// Takes a token, blocking until the absolute `deadline` at the latest.
    ///
    /// Returns [`SemaphoreError::Timeout`] without consuming a token if the
    /// deadline passes first. A deadline in the past fails immediately
    /// unless a token is available.
    pub fn wait_until(&self, deadline: Instant) -> SemaphoreResult<i32> {
        self.wait_deadline(Some(deadline))
    }

    /// Takes a token, blocking for at most `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> SemaphoreResult<i32> {
        self.wait_deadline(Instant::now().checked_add(timeout))
    }

    /// Takes a token if one is available right now.
    pub fn try_wait(&self) -> SemaphoreResult<i32> {
        self.wait_until(Instant::now())
    }

    fn wait_deadline(&self, deadline: Option<Instant>) -> SemaphoreResult<i32> {
        match self.raw.wait(deadline) {
            Ok(true) => {
                let count = if self.shared {
                    self.get_count()
                } else {
                    // The mirror is raised before every platform post, so it
                    // is positive whenever a platform token exists.
                    debug_assert!(self.count.get_value() > 0);
                    self.count.decrement()
                };
                trace!("semaphore {:?} acquired, count {}", self.name, count);
                Ok(count)
            }
            Ok(false) => {
                trace!("semaphore {:?} wait timed out", self.name);
                Err(SemaphoreError::Timeout)
            }
            Err(e) => {
                warn!("semaphore {:?} wait failed: {}", self.name, e);
                Err(SemaphoreError::Wait(e))
            }
        }
    }

    /// Returns one token.
    ///
    /// # Returns
    ///
    /// The count after the post.
    pub fn post(&self) -> SemaphoreResult<i32> {
        self.post_count(1)
    }

    /// Returns `count` tokens.
    ///
    /// The maximum count is checked against the count observed on entry,
    /// and the whole call is rejected with [`SemaphoreError::Overflow`] if
    /// it would be exceeded. Concurrent posters can both pass that check;
    /// posts racing against a full semaphore must be serialized by the
    /// caller for the bound to hold strictly.
    ///
    /// Tokens are signalled one at a time. If the platform fails on a
    /// token, that token is rolled back and [`SemaphoreError::Post`]
    /// reports how many were posted before it; those stay posted.
    ///
    /// # Parameters
    ///
    /// * `count` - Number of tokens, at least zero.
    ///
    /// # Returns
    ///
    /// The count after the post, as observed by this call.
    pub fn post_count(&self, count: i32) -> SemaphoreResult<i32> {
        if count < 0 {
            return Err(SemaphoreError::InvalidPostCount(count));
        }
        let current = self.get_count();
        debug_assert!(current >= 0);
        if self.max_count - count < current {
            warn!(
                "semaphore {:?} post of {} rejected at count {} (max {})",
                self.name, count, current, self.max_count
            );
            return Err(SemaphoreError::Overflow {
                count: current,
                max_count: self.max_count,
                requested: count,
            });
        }
        for posted in 0..count {
            if !self.shared {
                self.count.increment();
            }
            if let Err(source) = self.raw.post() {
                if !self.shared {
                    self.count.decrement();
                }
                warn!(
                    "semaphore {:?} post failed after {} of {} token(s): {}",
                    self.name, posted, count, source
                );
                return Err(SemaphoreError::Post {
                    posted,
                    requested: count,
                    source,
                });
            }
        }
        trace!("semaphore {:?} posted {}", self.name, count);
        Ok(current + count)
    }

    /// Returns a snapshot of the count.
    ///
    /// Advisory only: another thread, or another process for a named
    /// semaphore, may change the count before the caller acts on it.
    #[inline]
    pub fn get_count(&self) -> i32 {
        match self.raw.shared_count() {
            Some(count) => count,
            None => self.count.get_value(),
        }
    }

    /// Returns the maximum count.
    #[inline]
    pub fn max_count(&self) -> i32 {
        self.max_count
    }

    /// Returns the name given at creation.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<R: RawSemaphore> Drop for Semaphore<R> {
    fn drop(&mut self) {
        debug!(
            "destroying semaphore {:?} at count {}",
            self.name,
            self.get_count()
        );
    }
}

impl<R: RawSemaphore> fmt::Debug for Semaphore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Semaphore")
            .field("count", &self.get_count())
            .field("max_count", &self.max_count)
            .field("name", &self.name)
            .finish()
    }
}
