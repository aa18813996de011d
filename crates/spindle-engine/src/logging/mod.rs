//! Logging setup.

mod init;

pub use init::{init_logging, LoggingConfig};
