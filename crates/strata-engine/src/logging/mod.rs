//! Logging utilities.
//!
//! The crates log through the `log` facade only. This module wires up
//! `env_logger` for binaries and tests that want to see the output.

mod init;

pub use init::{init_logging, LoggingConfig};
