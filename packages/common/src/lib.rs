//! Common infrastructure shared by the tokensmith crates
//!
//! This crate provides:
//! - `env_logger`-backed structured logging with hashed identifiers
//! - Environment configuration with `.env` fallback

pub mod config;
pub mod logging;

pub use config::{ConfigError, EnvConfig};
pub use logging::LoggingTransformer;
