//! Shared configuration, errors and logging setup for the cadence workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
