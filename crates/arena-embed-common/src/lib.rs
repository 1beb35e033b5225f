//! Shared pieces for the arena-embed crates: the error taxonomy, endpoint
//! configuration, and (behind the `telemetry` feature) native tracing setup.

pub mod config;
pub mod error;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use crate::config::EmbedConfig;
pub use crate::error::{ConfigError, EmbedError, FailureKind};
