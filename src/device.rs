// CLASSIFICATION: COMMUNITY
// Filename: device.rs v0.4
// Author: Lukas Bower
// Date Modified: 2027-09-04

//! Shared device object.
//!
//! One `Device` owns the buffer store for exactly one registered
//! device node. Every concurrently open session sees the same store;
//! all inspection and mutation happens under the store mutex.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};

use crate::buffer::BufferStore;
use crate::config::WritePolicy;
use crate::error::{DevError, DevResult};
use crate::session::Session;

/// A registered device: node identity plus the store shared by all
/// of its sessions.
pub struct Device {
    node: String,
    major: u32,
    policy: WritePolicy,
    store: Mutex<BufferStore>,
    open_sessions: AtomicUsize,
    next_session: AtomicU64,
    revoked: AtomicBool,
}

impl Device {
    pub(crate) fn new(node: String, major: u32, policy: WritePolicy, store: BufferStore) -> Self {
        Self {
            node,
            major,
            policy,
            store: Mutex::new(store),
            open_sessions: AtomicUsize::new(0),
            next_session: AtomicU64::new(1),
            revoked: AtomicBool::new(false),
        }
    }

    /// Device node name.
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Major number allocated at registration.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Write policy every session on this device uses.
    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Fixed capacity of the underlying store.
    pub fn capacity(&self) -> DevResult<usize> {
        Ok(self.lock_store()?.capacity())
    }

    /// Number of currently meaningful bytes in the store.
    pub fn valid_len(&self) -> DevResult<usize> {
        Ok(self.lock_store()?.valid_len())
    }

    /// Sessions currently open on this device.
    pub fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::SeqCst)
    }

    /// Open a new session with a fresh cursor at offset 0. Does not
    /// touch the buffer store.
    pub fn open(self: &Arc<Self>) -> DevResult<Session> {
        if self.is_revoked() {
            return Err(DevError::NotOpen);
        }
        let id = self.next_session.fetch_add(1, Ordering::SeqCst);
        self.open_sessions.fetch_add(1, Ordering::SeqCst);
        info!("{}: device opened (session {})", self.node, id);
        Ok(Session::new(Arc::clone(self), id))
    }

    pub(crate) fn lock_store(&self) -> DevResult<MutexGuard<'_, BufferStore>> {
        self.store.lock().map_err(|_| DevError::LockPoisoned)
    }

    pub(crate) fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::SeqCst)
    }

    /// Invalidate the device at teardown. Returns the number of
    /// sessions that were still open.
    pub(crate) fn revoke(&self) -> usize {
        self.revoked.store(true, Ordering::SeqCst);
        let open = self.open_sessions.load(Ordering::SeqCst);
        if open > 0 {
            warn!(
                "{}: torn down with {} session(s) still open; they are now invalid",
                self.node, open
            );
        }
        open
    }

    pub(crate) fn session_closed(&self, id: u64) {
        self.open_sessions.fetch_sub(1, Ordering::SeqCst);
        info!("{}: device released (session {})", self.node, id);
    }
}

impl core::fmt::Debug for Device {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Device")
            .field("node", &self.node)
            .field("major", &self.major)
            .field("policy", &self.policy)
            .field("open_sessions", &self.open_sessions())
            .field("revoked", &self.is_revoked())
            .finish()
    }
}
