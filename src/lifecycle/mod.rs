//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C → Shutdown::trigger()
//!     → HTTP server stops accepting and drains
//!     → heartbeat task exits its loop
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
