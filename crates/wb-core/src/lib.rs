//! # wb-core
//!
//! Core types for the weekbeeld reporting pipeline.
//!
//! This crate defines the foundational types used across all other
//! weekbeeld crates:
//! - [`Record`] — one free-text submission per (week, topic, area)
//! - [`Catalog`] — the fixed area/topic lists and the special topic set
//! - [`ReportPolicy`] — named configuration flags for compilation
//! - [`Config`] — the on-disk `weekbeeld.yaml` configuration
//! - Error hierarchy ([`WbError`], [`Result`])

pub mod catalog;
pub mod config;
pub mod error;
pub mod policy;
pub mod record;

pub use catalog::{Catalog, SpecialSet};
pub use config::Config;
pub use error::{Result, WbError};
pub use policy::{MissingText, ReportPolicy};
pub use record::{default_report_week, Record};
