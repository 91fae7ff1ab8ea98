// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Error kinds surfaced by the device core.

use thiserror::Error;

use crate::transfer::TransferFault;

/// Errors returned by device registration and session I/O.
#[derive(Debug, Error)]
pub enum DevError {
    /// Device bring-up failed. Any partially acquired registration
    /// state (major number, class, node) has already been rolled back.
    #[error("registration failed: {0}")]
    Registration(String),

    /// Copying across the caller-memory boundary failed. The buffer
    /// store and the session cursor are unchanged.
    #[error(transparent)]
    Transfer(#[from] TransferFault),

    /// Operation attempted on a session that is no longer open, or on
    /// a device that has been torn down.
    #[error("session is not open")]
    NotOpen,

    /// A writer panicked while holding the buffer store lock. The
    /// store contents are suspect, so further I/O is refused.
    #[error("buffer store lock poisoned")]
    LockPoisoned,
}

/// Convenience alias used throughout the crate.
pub type DevResult<T> = Result<T, DevError>;
