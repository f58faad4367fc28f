//! # runtime
//!
//! Orchestration for the vehicle-ad corpus cleaner.
//!
//! This crate provides:
//! - [`Preprocessor`]: the drop stage and per-row cleaning built from a
//!   [`PipelineConfig`](corpus_core::PipelineConfig)
//! - Balancing and augmentation helpers bound to the same configuration
//! - Structured logging setup

pub mod logging;
pub mod preprocess;

pub use logging::{init_logging, init_logging_from_config, LogFormat};
pub use preprocess::{CleanedText, Preprocessor};
