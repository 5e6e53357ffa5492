/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Semaphore Errors
//!
//! All semaphore failures are local, returned conditions; none of them
//! poisons the semaphore.
//!
//! # Author
//!
//! Haixing Hu

use std::io;

use thiserror::Error;

/// Result type of semaphore operations.
pub type SemaphoreResult<T> = Result<T, SemaphoreError>;

/// Errors reported by [`Semaphore`](super::Semaphore).
#[derive(Debug, Error)]
pub enum SemaphoreError {
    /// The platform semaphore could not be created.
    #[error("failed to create the platform semaphore: {0}")]
    Creation(#[source] io::Error),

    /// The creation parameters violate `0 <= initial <= max`, `max >= 1`.
    #[error("invalid semaphore parameters: initial count {initial_count}, max count {max_count}")]
    InvalidParameters {
        /// The requested initial count.
        initial_count: i32,
        /// The requested maximum count.
        max_count: i32,
    },

    /// The platform wait failed for a reason other than a timeout. No token
    /// was consumed.
    #[error("semaphore wait failed: {0}")]
    Wait(#[source] io::Error),

    /// The deadline passed before a token became available. No token was
    /// consumed.
    #[error("semaphore wait timed out")]
    Timeout,

    /// The post would have raised the count above the maximum. Nothing was
    /// posted.
    #[error(
        "posting {requested} token(s) at count {count} would exceed the maximum count {max_count}"
    )]
    Overflow {
        /// The count observed before the post.
        count: i32,
        /// The semaphore's maximum count.
        max_count: i32,
        /// The number of tokens the caller tried to post.
        requested: i32,
    },

    /// Signalling the platform semaphore failed. The tokens posted before
    /// the failure stay posted; the failed token was rolled back.
    #[error("semaphore post failed after {posted} of {requested} token(s): {source}")]
    Post {
        /// Tokens successfully posted before the failure.
        posted: i32,
        /// Tokens the caller tried to post.
        requested: i32,
        /// The platform error.
        #[source]
        source: io::Error,
    },

    /// A negative number of tokens was passed to a post.
    #[error("cannot post a negative number of tokens: {0}")]
    InvalidPostCount(i32),
}

impl SemaphoreError {
    /// Returns whether this is a wait timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns whether this is a rejected post above the maximum count.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
