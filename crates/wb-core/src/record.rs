//! Record type — one free-text submission per (week, topic, area).

use chrono::{Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single weekly free-text submission.
///
/// On disk every record is one JSON file keyed by (week, topic, area).
/// The serialized field names keep the original Dutch wire format
/// (`onderdeel`, `stadsdeel`, `tekst`) so existing record files stay
/// readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// ISO week number this submission reports on.
    pub week: u32,

    /// Top-level report category.
    #[serde(rename = "onderdeel")]
    pub topic: String,

    /// Organizational subdivision the text applies to.
    #[serde(rename = "stadsdeel")]
    pub area: String,

    /// Free text. Newlines delimit paragraphs in the compiled report.
    #[serde(rename = "tekst")]
    pub text: String,
}

impl Record {
    #[must_use]
    pub fn new(
        week: u32,
        topic: impl Into<String>,
        area: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            week,
            topic: topic.into(),
            area: area.into(),
            text: text.into(),
        }
    }

    /// Whether the submitted text is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The default reporting week: the ISO week of seven days ago.
///
/// Reports describe the week that has just closed, so a report generated
/// early in a new week still targets the previous one.
#[must_use]
pub fn default_report_week() -> u32 {
    (Utc::now() - Duration::days(7)).iso_week().week()
}
