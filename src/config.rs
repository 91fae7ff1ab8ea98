// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Device configuration.

/// Default buffer capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Payload seeded into a freshly registered device.
pub const DEFAULT_GREETING: &[u8] = b"Hello from the device!\n";

/// Default device node name.
pub const DEFAULT_NODE: &str = "chardev0";

/// Default device class name.
pub const DEFAULT_CLASS: &str = "chardev";

/// How a write interacts with existing buffer content.
///
/// The two policies are not interchangeable: `Replace` resets the
/// buffer on every write, `Append` accumulates until the buffer is
/// full and then drops further bytes. A device is configured with
/// exactly one policy at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Each write fully supersedes prior content and is stored as a
    /// terminated string.
    Replace,
    /// Writes accumulate at the end of valid data; once the buffer is
    /// full further writes are silently dropped.
    Append,
}

/// Runtime configuration for one device registration.
///
/// Extend this struct as new knobs become necessary.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Device node name, e.g. `chardev0`.
    pub node: String,
    /// Device class the node is filed under.
    pub class: String,
    /// Fixed buffer capacity in bytes. Must be positive.
    pub capacity: usize,
    /// Bytes seeded into the buffer at registration. Must leave room
    /// for the replace-policy terminator, i.e. at most `capacity - 1`.
    pub greeting: Vec<u8>,
    /// Write policy for every session on this device.
    pub policy: WritePolicy,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            node: DEFAULT_NODE.to_string(),
            class: DEFAULT_CLASS.to_string(),
            capacity: DEFAULT_CAPACITY,
            greeting: DEFAULT_GREETING.to_vec(),
            policy: WritePolicy::Replace,
        }
    }
}
