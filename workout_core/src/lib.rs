#![forbid(unsafe_code)]

//! Workout statistics from raw sensor packages.
//!
//! This crate provides:
//! - Domain types (activity kinds, training records, sensor packages)
//! - Distance, speed and calorie formulas per activity
//! - Package dispatch and the batch driver
//! - Summary formatting
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod training;
pub mod message;
pub mod dispatch;
pub mod batch;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use message::{InfoMessage, OutputFormat};
pub use dispatch::read_package;
pub use batch::{run_batch, sample_packages, BatchOptions, BatchReport, UnknownCodePolicy};
pub use config::Config;
