//! Logging utilities.
//!
//! Library code only talks to the `log` facade. This module installs an
//! `env_logger` backend for binaries and test harnesses that want one.

mod init;

pub use init::{init_logging, LoggingConfig, LOG_ENV};
