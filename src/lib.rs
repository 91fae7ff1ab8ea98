// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.6
// Author: Lukas Bower
// Date Modified: 2027-09-04

//! Byte-oriented character device abstraction.
//!
//! One fixed-capacity buffer exposed through open/read/write/release,
//! addressed by a per-session cursor. All sessions share the single
//! buffer store; every inspection or mutation of it runs under one
//! store-wide mutex, while caller-boundary copies are staged outside
//! the lock. Overflowing writes truncate silently; they never error.
//!
//! ```
//! use cohdev::{DeviceConfig, DeviceRegistry};
//!
//! fn main() -> Result<(), cohdev::DevError> {
//!     let mut registry = DeviceRegistry::new();
//!     let device = registry.register(DeviceConfig::default())?;
//!
//!     let mut session = device.open()?;
//!     let greeting = session.read_buf(1024)?;
//!     assert_eq!(greeting, b"Hello from the device!\n");
//!
//!     session.write_buf(b"fresh payload")?;
//!     session.release();
//!     registry.unregister()
//! }
//! ```

/// Fixed-capacity buffer store and its write/read algorithms.
pub mod buffer;

/// Device configuration knobs and defaults.
pub mod config;

/// Shared device object tying sessions to the store.
pub mod device;

/// Error kinds for registration and session I/O.
pub mod error;

/// Registration collaborator: bring-up, bookkeeping, teardown.
pub mod registry;

/// Per-open sessions carrying the read cursor.
pub mod session;

/// Caller-memory boundary traits.
pub mod transfer;

pub use buffer::BufferStore;
pub use config::{DeviceConfig, WritePolicy, DEFAULT_CAPACITY, DEFAULT_GREETING};
pub use device::Device;
pub use error::{DevError, DevResult};
pub use registry::DeviceRegistry;
pub use session::Session;
pub use transfer::{SliceSink, TransferFault, TransferSink, TransferSource, VecSink};
