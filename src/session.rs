// CLASSIFICATION: COMMUNITY
// Filename: session.rs v0.5
// Author: Lukas Bower
// Date Modified: 2027-09-04

//! Per-open device sessions.
//!
//! A session is one open-to-release lifetime of a handle to the
//! device. It carries the read cursor; the buffer itself lives on the
//! shared [`Device`](crate::device::Device). Caller-boundary copies
//! happen outside the store lock: reads stage into a local buffer
//! under the lock and copy out afterwards, writes copy in before the
//! lock is taken. A transfer fault therefore leaves both the store
//! and the cursor exactly as they were.

use std::sync::Arc;

use log::{debug, error, info};

use crate::device::Device;
use crate::error::{DevError, DevResult};
use crate::transfer::{TransferSink, TransferSource, VecSink};

/// An open handle to the device. Dropping or [`release`](Session::release)-ing
/// it closes the session; the buffer is never touched by open or release.
pub struct Session {
    device: Arc<Device>,
    id: u64,
    cursor: usize,
}

impl Session {
    pub(crate) fn new(device: Arc<Device>, id: u64) -> Self {
        Self {
            device,
            id,
            cursor: 0,
        }
    }

    /// Session identifier, unique per device.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Byte offset of the next read on this handle.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Read up to `sink.wanted()` bytes starting at the cursor.
    ///
    /// Returns `Ok(0)` at end-of-data (cursor at or past the valid
    /// length) without attempting the outbound copy. The cursor
    /// advances only after the copy to the caller succeeds.
    pub fn read<S: TransferSink>(&mut self, sink: &mut S) -> DevResult<usize> {
        if self.device.is_revoked() {
            return Err(DevError::NotOpen);
        }
        let wanted = sink.wanted();
        let staged = {
            let store = self.device.lock_store()?;
            store.read_at(self.cursor, wanted).to_vec()
        };
        if staged.is_empty() {
            debug!(
                "{}: session {} at end of data (cursor {})",
                self.device.node(),
                self.id,
                self.cursor
            );
            return Ok(0);
        }
        if let Err(fault) = sink.copy_out(&staged) {
            error!(
                "{}: failed to send {} bytes to the caller",
                self.device.node(),
                staged.len()
            );
            return Err(fault.into());
        }
        self.cursor += staged.len();
        info!(
            "{}: sent {} bytes to the caller",
            self.device.node(),
            staged.len()
        );
        Ok(staged.len())
    }

    /// Write the caller's payload through the device's configured
    /// policy. The inbound copy is staged first; if it faults the
    /// store is left unmodified. Returns the number of bytes actually
    /// stored, which may be less than offered (truncation) or zero
    /// (append policy at capacity).
    pub fn write<S: TransferSource>(&mut self, source: &S) -> DevResult<usize> {
        if self.device.is_revoked() {
            return Err(DevError::NotOpen);
        }
        let mut staging = vec![0u8; source.len()];
        if let Err(fault) = source.copy_in(&mut staging) {
            error!(
                "{}: failed to receive {} bytes from the caller",
                self.device.node(),
                staging.len()
            );
            return Err(fault.into());
        }
        let written = {
            let mut store = self.device.lock_store()?;
            store.write(self.device.policy(), &staging)
        };
        info!(
            "{}: received {} bytes from the caller",
            self.device.node(),
            written
        );
        Ok(written)
    }

    /// Convenience read into an owned Vec of at most `max_len` bytes.
    pub fn read_buf(&mut self, max_len: usize) -> DevResult<Vec<u8>> {
        let mut sink = VecSink::new(max_len);
        self.read(&mut sink)?;
        Ok(sink.into_inner())
    }

    /// Convenience write from a byte slice.
    pub fn write_buf(&mut self, data: &[u8]) -> DevResult<usize> {
        self.write(&data)
    }

    /// Close the session. Equivalent to dropping it.
    pub fn release(self) {}
}

impl Drop for Session {
    fn drop(&mut self) {
        self.device.session_closed(self.id);
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("cursor", &self.cursor)
            .finish()
    }
}
