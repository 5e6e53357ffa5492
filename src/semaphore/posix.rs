/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # POSIX Semaphore
//!
//! [`RawSemaphore`] on top of POSIX semaphores. Intra-process semaphores
//! are unnamed (`sem_init`); inter-process semaphores with a name are
//! opened with `sem_open` so other processes can open the same object.
//!
//! The handle that creates a named object owns it and unlinks the name
//! when dropped. Handles that open an existing object only close it.
//!
//! `sem_timedwait` measures its deadline on `CLOCK_REALTIME`. Timed waits
//! sleep in slices of at most `WAIT_SLICE` and re-check the monotonic
//! deadline after each slice, so a wall-clock jump neither ends a wait
//! early nor stretches it by more than one slice.
//!
//! # Author
//!
//! Haixing Hu

use std::cell::UnsafeCell;
use std::ffi::CString;
use std::io;
use std::mem;
use std::time::{
    Duration,
    Instant,
    SystemTime,
    UNIX_EPOCH,
};

use log::{
    debug,
    warn,
};

use super::params::SemaphoreParameters;
use super::raw::RawSemaphore;

/// Longest single `sem_timedwait` of a timed wait.
const WAIT_SLICE: Duration = Duration::from_millis(50);

enum Handle {
    // Boxed so the `sem_t` never moves after `sem_init`.
    Unnamed(Box<UnsafeCell<libc::sem_t>>),
    Named {
        sem: *mut libc::sem_t,
        path: CString,
        owner: bool,
    },
}

/// POSIX semaphore handle, released exactly once on drop.
pub struct PosixSemaphore {
    handle: Handle,
}

// SAFETY: POSIX semaphore operations are thread-safe and the handle is
// only released in `drop`.
unsafe impl Send for PosixSemaphore {}
unsafe impl Sync for PosixSemaphore {}

impl PosixSemaphore {
    #[inline]
    fn as_ptr(&self) -> *mut libc::sem_t {
        match &self.handle {
            Handle::Unnamed(cell) => cell.get(),
            Handle::Named { sem, .. } => *sem,
        }
    }

    /// Creates the named object, or opens it if another handle already
    /// created it. `initial` only applies to a newly created object.
    fn open_named(name: &str, initial: libc::c_uint) -> io::Result<Self> {
        let path = if name.starts_with('/') {
            name.to_owned()
        } else {
            format!("/{name}")
        };
        let path = CString::new(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        loop {
            // SAFETY: `path` is a valid NUL-terminated string; the variadic
            // arguments are the mode and initial value `O_CREAT` requires.
            let sem = unsafe {
                libc::sem_open(
                    path.as_ptr(),
                    libc::O_CREAT | libc::O_EXCL,
                    0o644 as libc::c_uint,
                    initial,
                )
            };
            if sem != libc::SEM_FAILED {
                debug!("created named semaphore {:?}", path);
                return Ok(Self {
                    handle: Handle::Named {
                        sem,
                        path,
                        owner: true,
                    },
                });
            }
            let err = io::Error::last_os_error();
            if err.raw_os_error() != Some(libc::EEXIST) {
                return Err(err);
            }

            // SAFETY: `path` is a valid NUL-terminated string.
            let sem = unsafe { libc::sem_open(path.as_ptr(), 0) };
            if sem != libc::SEM_FAILED {
                debug!("opened existing named semaphore {:?}", path);
                return Ok(Self {
                    handle: Handle::Named {
                        sem,
                        path,
                        owner: false,
                    },
                });
            }
            let err = io::Error::last_os_error();
            // The owner unlinked the name in between: create it again.
            if err.raw_os_error() != Some(libc::ENOENT) {
                return Err(err);
            }
        }
    }

    fn init_unnamed(initial: libc::c_uint) -> io::Result<Self> {
        // SAFETY: an all-zero `sem_t` is a valid argument for `sem_init`.
        let cell = Box::new(UnsafeCell::new(unsafe { mem::zeroed::<libc::sem_t>() }));
        // SAFETY: `cell` points to writable, pinned storage for a `sem_t`.
        if unsafe { libc::sem_init(cell.get(), 0, initial) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Self {
            handle: Handle::Unnamed(cell),
        })
    }

    fn timed_wait(sem: *mut libc::sem_t, deadline: Instant) -> io::Result<bool> {
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let ts = realtime_after(remaining.min(WAIT_SLICE));
            // SAFETY: `sem` is live and `ts` is a normalized timespec.
            if unsafe { libc::sem_timedwait(sem, &ts) } == 0 {
                return Ok(true);
            }
            let err = io::Error::last_os_error();
            match err.raw_os_error() {
                Some(libc::EINTR) => continue,
                Some(libc::ETIMEDOUT) => {
                    if Instant::now() >= deadline {
                        return Ok(false);
                    }
                }
                _ => return Err(err),
            }
        }
    }
}

/// The `CLOCK_REALTIME` timespec `duration` from now.
fn realtime_after(duration: Duration) -> libc::timespec {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let target = now.saturating_add(duration);
    // SAFETY: `timespec` is plain data; zeroing covers any padding fields.
    let mut ts: libc::timespec = unsafe { mem::zeroed() };
    ts.tv_sec = target.as_secs() as libc::time_t;
    ts.tv_nsec = target.subsec_nanos() as libc::c_long;
    ts
}

impl RawSemaphore for PosixSemaphore {
    fn create(params: &SemaphoreParameters) -> io::Result<Self> {
        let initial = libc::c_uint::try_from(params.initial_count).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("negative initial count {}", params.initial_count),
            )
        })?;
        match (&params.name, params.intra_process) {
            (Some(name), false) => Self::open_named(name, initial),
            (None, false) => {
                warn!("inter-process semaphore requested without a name; creating a private one");
                Self::init_unnamed(initial)
            }
            _ => Self::init_unnamed(initial),
        }
    }

    fn wait(&self, deadline: Option<Instant>) -> io::Result<bool> {
        let sem = self.as_ptr();
        match deadline {
            Some(deadline) => Self::timed_wait(sem, deadline),
            None => loop {
                // SAFETY: `sem` is a live semaphore owned by `self`.
                if unsafe { libc::sem_wait(sem) } == 0 {
                    return Ok(true);
                }
                let err = io::Error::last_os_error();
                if err.raw_os_error() != Some(libc::EINTR) {
                    return Err(err);
                }
            },
        }
    }

    fn post(&self) -> io::Result<()> {
        // SAFETY: the semaphore is live for the lifetime of `self`.
        if unsafe { libc::sem_post(self.as_ptr()) } == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn shared_count(&self) -> Option<i32> {
        let Handle::Named { sem, path, .. } = &self.handle else {
            return None;
        };
        let mut value: libc::c_int = 0;
        // SAFETY: `sem` is open for the lifetime of `self` and `value` is
        // writable.
        if unsafe { libc::sem_getvalue(*sem, &mut value) } != 0 {
            warn!(
                "failed to read the count of semaphore {:?}: {}",
                path,
                io::Error::last_os_error()
            );
            return Some(0);
        }
        // Linux reports 0, never a negative waiter count, while blocked.
        Some(value.max(0))
    }
}

impl Drop for PosixSemaphore {
    fn drop(&mut self) {
        match &self.handle {
            Handle::Unnamed(cell) => {
                // SAFETY: initialized by `sem_init`, destroyed only here.
                if unsafe { libc::sem_destroy(cell.get()) } != 0 {
                    warn!("failed to destroy semaphore: {}", io::Error::last_os_error());
                }
            }
            Handle::Named { sem, path, owner } => {
                // SAFETY: opened by `sem_open`, closed only here.
                if unsafe { libc::sem_close(*sem) } != 0 {
                    warn!(
                        "failed to close semaphore {:?}: {}",
                        path,
                        io::Error::last_os_error()
                    );
                }
                // SAFETY: `path` is a valid NUL-terminated string.
                if *owner && unsafe { libc::sem_unlink(path.as_ptr()) } != 0 {
                    warn!(
                        "failed to unlink semaphore {:?}: {}",
                        path,
                        io::Error::last_os_error()
                    );
                }
            }
        }
    }
}
