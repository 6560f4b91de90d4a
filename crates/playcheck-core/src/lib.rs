//! Playcheck Core - shared configuration and error handling
//!
//! This crate provides the configuration model, config file discovery and the
//! error types used by the playcheck validator.

pub mod config;
pub mod error;

pub use config::{Config, ConfigOverrides};
pub use error::{ConfigError, PlaycheckError, Result};
