/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Mutex/Condvar Semaphore
//!
//! A portable [`RawSemaphore`] made of a token counter behind a mutex and
//! a condition variable. Intra-process only.
//!
//! # Author
//!
//! Haixing Hu

use std::io;
use std::time::Instant;

use log::warn;
use parking_lot::{
    Condvar,
    Mutex,
};

use super::params::SemaphoreParameters;
use super::raw::RawSemaphore;

/// Portable intra-process semaphore.
#[derive(Debug)]
pub struct CondvarSemaphore {
    tokens: Mutex<u32>,
    available: Condvar,
}

impl RawSemaphore for CondvarSemaphore {
    fn create(params: &SemaphoreParameters) -> io::Result<Self> {
        let initial = u32::try_from(params.initial_count).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("negative initial count {}", params.initial_count),
            )
        })?;
        if !params.intra_process {
            warn!(
                "inter-process semaphore {:?} requested; this platform semaphore is \
                 intra-process only",
                params.name
            );
        }
        Ok(Self {
            tokens: Mutex::new(initial),
            available: Condvar::new(),
        })
    }

    fn wait(&self, deadline: Option<Instant>) -> io::Result<bool> {
        let mut tokens = self.tokens.lock();
        while *tokens == 0 {
            match deadline {
                None => self.available.wait(&mut tokens),
                Some(deadline) => {
                    if self.available.wait_until(&mut tokens, deadline).timed_out() && *tokens == 0 {
                        return Ok(false);
                    }
                }
            }
        }
        *tokens -= 1;
        Ok(true)
    }

    fn post(&self) -> io::Result<()> {
        {
            let mut tokens = self.tokens.lock();
            *tokens = tokens
                .checked_add(1)
                .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "semaphore token overflow"))?;
        }
        self.available.notify_one();
        Ok(())
    }
}
