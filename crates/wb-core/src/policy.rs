//! Report policy — named configuration flags.
//!
//! Observed deployments differ on a few behaviors (blank submissions,
//! missing-text rendering, timestamped output names). Each is an explicit
//! flag here rather than a hard-coded rule.

use serde::{Deserialize, Serialize};

/// How an area with no stored text for a topic is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingText {
    /// Emit nothing below the area sub-heading.
    #[default]
    Skip,
    /// Emit an explicit placeholder line, e.g. "geen invoer".
    Placeholder(String),
}

/// Configuration flags for submission validation and report rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPolicy {
    /// Rendering of areas without stored text.
    pub missing_text: MissingText,

    /// Reject blank/whitespace-only submissions instead of storing them.
    pub reject_blank: bool,

    /// Embed the generation timestamp in the output filename.
    pub timestamped_filenames: bool,

    /// Optional area name rendered with an accent style. Pure rendering
    /// decision; does not affect structure or ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_overview: Option<String>,
}
