//! Logging utilities.
//!
//! Centralizes logger initialization; the rest of the crate only speaks the
//! `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
