// CLASSIFICATION: COMMUNITY
// Filename: registry.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-09-04

//! Device registration collaborator.
//!
//! Performs the bring-up bookkeeping around the buffer core: major
//! number allocation, class and node entries, buffer allocation and
//! seeding. Registration acquires those resources in order and rolls
//! back the ones already taken, in reverse, when a later step fails.
//! The registry holds at most one device at a time; the core models
//! exactly one shared buffer.

use std::sync::Arc;

use log::{error, info};

use crate::buffer::BufferStore;
use crate::config::DeviceConfig;
use crate::device::Device;
use crate::error::{DevError, DevResult};

/// First major number handed out; subsequent registrations on the
/// same registry take the next one up, the way dynamically allocated
/// majors behave.
const DYNAMIC_MAJOR_BASE: u32 = 240;

/// Owns the registration state for one device slot.
///
/// No global registry exists; callers create one and thread it (or
/// the [`Device`] handle it yields) through their code.
pub struct DeviceRegistry {
    next_major: u32,
    major: Option<u32>,
    class: Option<String>,
    node: Option<String>,
    device: Option<Arc<Device>>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next_major: DYNAMIC_MAJOR_BASE,
            major: None,
            class: None,
            node: None,
            device: None,
        }
    }

    /// True while a device is registered.
    pub fn is_registered(&self) -> bool {
        self.device.is_some()
    }

    /// Handle to the registered device, if any.
    pub fn device(&self) -> Option<&Arc<Device>> {
        self.device.as_ref()
    }

    /// Bring up a device: allocate a major number, record the class
    /// and node entries, then allocate and seed the buffer. On any
    /// failure the steps already completed are rolled back before the
    /// error is returned.
    pub fn register(&mut self, config: DeviceConfig) -> DevResult<Arc<Device>> {
        if self.device.is_some() {
            error!("{}: a device is already registered", config.node);
            return Err(DevError::Registration(
                "a device is already registered".into(),
            ));
        }

        let major = self.next_major;
        self.next_major += 1;
        self.major = Some(major);
        info!("{}: registered with major number {}", config.node, major);

        self.class = Some(config.class.clone());
        info!("{}: device class {} registered", config.node, config.class);

        self.node = Some(config.node.clone());
        info!("{}: device node {}/{} created", config.node, config.class, config.node);

        if config.capacity == 0 {
            error!("{}: buffer capacity must be positive", config.node);
            self.rollback();
            return Err(DevError::Registration(
                "buffer capacity must be positive".into(),
            ));
        }
        if config.greeting.len() > config.capacity - 1 {
            error!(
                "{}: greeting of {} bytes does not fit a {} byte buffer",
                config.node,
                config.greeting.len(),
                config.capacity
            );
            self.rollback();
            return Err(DevError::Registration(
                "greeting does not fit the buffer".into(),
            ));
        }

        let store = BufferStore::new(config.capacity, &config.greeting);
        let device = Arc::new(Device::new(config.node.clone(), major, config.policy, store));
        self.device = Some(Arc::clone(&device));
        info!("{}: driver loaded successfully", config.node);
        Ok(device)
    }

    /// Tear the device down. Proceeds unconditionally even when
    /// sessions are still open: the device is revoked and any
    /// surviving session's operations fail from then on.
    pub fn unregister(&mut self) -> DevResult<()> {
        let device = self
            .device
            .take()
            .ok_or_else(|| DevError::Registration("no device registered".into()))?;
        let node = device.node().to_string();
        device.revoke();
        self.rollback();
        info!("{}: exiting", node);
        Ok(())
    }

    /// Release registration resources in reverse acquisition order.
    fn rollback(&mut self) {
        if let Some(node) = self.node.take() {
            info!("{node}: device node destroyed");
        }
        if let Some(class) = self.class.take() {
            info!("device class {class} destroyed");
        }
        if let Some(major) = self.major.take() {
            info!("major number {major} released");
        }
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DeviceRegistry {
    fn drop(&mut self) {
        if self.device.is_some() {
            let _ = self.unregister();
        }
    }
}
