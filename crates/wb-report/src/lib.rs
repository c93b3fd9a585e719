//! # wb-report
//!
//! Report compilation for weekbeeld: load a week's records from the
//! store, assemble them into a renderer-agnostic block document, and
//! render that document to Markdown or HTML.
//!
//! Ordering is a pure function of the configured [`Catalog`] — never of
//! the order records are discovered on disk — so recompiling an
//! unchanged week reproduces the same document, modulo the embedded
//! generation date.
//!
//! [`Catalog`]: wb_core::Catalog

pub mod compiler;
pub mod document;
pub mod formatter;
pub mod output;

pub use compiler::{build_document, compile};
pub use document::{Block, ReportDoc};
pub use formatter::{render, OutputFormat};
pub use output::{report_filename, write_report};
