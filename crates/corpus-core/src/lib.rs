//! # corpus-core
//!
//! Core types, traits, and error definitions for the vehicle-ad corpus cleaner.
//!
//! This crate provides the foundational abstractions used across all other crates
//! in the workspace, including:
//!
//! - The record model (`Value`, `Record`, `RecordCollection`)
//! - Collaborator traits (`BaseNormalizer`, `Clock`)
//! - Gregorian/Jalali year arithmetic
//! - Unified error handling via `CleanError`
//! - Configuration structures and the authored default vocabulary

pub mod calendar;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;
pub mod vocab;

pub use calendar::{CalendarNow, FixedClock, SystemClock};
pub use config::{
    BalanceConfig, FilterOptions, LoggingConfig, NoiseConfig, PipelineConfig, StripperConfig,
};
pub use error::{CleanError, CleanResult};
pub use traits::{BaseNormalizer, Clock};
pub use types::{Grouped, Record, RecordCollection, SampleRange, Value};
