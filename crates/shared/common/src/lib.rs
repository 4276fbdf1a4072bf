//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Configuration loaded from the environment
//! - Tracing subscriber setup

pub mod config;
pub mod telemetry;

pub use config::CoreConfig;
pub use telemetry::{init_tracing, TelemetryError};
