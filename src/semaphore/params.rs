/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Semaphore Parameters
//!
//! # Author
//!
//! Haixing Hu

use super::error::{
    SemaphoreError,
    SemaphoreResult,
};

/// Creation parameters of a [`Semaphore`](super::Semaphore).
///
/// # Example
///
/// ```rust
/// use prism3_concurrent::SemaphoreParameters;
///
/// let params = SemaphoreParameters::new(0)
///     .with_max_count(16)
///     .with_name("work-queue");
/// assert_eq!(params.max_count, 16);
/// assert!(params.intra_process);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemaphoreParameters {
    /// Number of tokens available right after creation.
    pub initial_count: i32,
    /// Upper bound on the count; posts beyond it are rejected.
    pub max_count: i32,
    /// `true` if the semaphore is only used inside this process.
    pub intra_process: bool,
    /// Name identifying an inter-process semaphore, where the platform
    /// supports named semaphores. Informational otherwise.
    ///
    /// The first semaphore created with a name creates the platform object
    /// with `initial_count` tokens; later ones open that object and share
    /// its count, ignoring their own `initial_count`. The name is removed
    /// when the semaphore that created it is dropped, together with any
    /// tokens left in it; handles opened before that keep working. An
    /// object left behind by a process that never dropped its creating
    /// semaphore is reused as is.
    pub name: Option<String>,
}

impl SemaphoreParameters {
    /// Maximum count used when none is given.
    pub const DEFAULT_MAX_COUNT: i32 = i32::MAX;

    /// Creates intra-process, unnamed parameters with the given initial
    /// count and the default maximum count.
    pub fn new(initial_count: i32) -> Self {
        Self {
            initial_count,
            max_count: Self::DEFAULT_MAX_COUNT,
            intra_process: true,
            name: None,
        }
    }

    /// Sets the maximum count.
    pub fn with_max_count(mut self, max_count: i32) -> Self {
        self.max_count = max_count;
        self
    }

    /// Sets whether the semaphore is restricted to this process.
    pub fn with_intra_process(mut self, intra_process: bool) -> Self {
        self.intra_process = intra_process;
        self
    }

    /// Sets the semaphore name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Checks `0 <= initial_count <= max_count` and `max_count >= 1`.
    pub(crate) fn validate(&self) -> SemaphoreResult<()> {
        if self.max_count < 1 || self.initial_count < 0 || self.initial_count > self.max_count {
            return Err(SemaphoreError::InvalidParameters {
                initial_count: self.initial_count,
                max_count: self.max_count,
            });
        }
        Ok(())
    }
}

impl Default for SemaphoreParameters {
    fn default() -> Self {
        Self::new(0)
    }
}
