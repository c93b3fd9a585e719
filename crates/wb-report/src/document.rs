//! Block document model — the renderer-agnostic report structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One block of the compiled report, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// The document title, e.g. "Rapportage week 29".
    Title(String),
    /// The generation date line below the title.
    DateLine(String),
    /// One table-of-contents entry with its 1-based position label.
    TocEntry { position: usize, text: String },
    /// A section (level 1) or area (level 2) heading. `accent` marks the
    /// highlighted style variant.
    Heading { level: u8, text: String, accent: bool },
    /// One paragraph of stored text (one newline-delimited line).
    Paragraph(String),
    /// Explicit marker for an area without stored text.
    Placeholder(String),
    PageBreak,
}

/// The compiled weekly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDoc {
    pub week: u32,
    pub generated_at: DateTime<Utc>,
    pub blocks: Vec<Block>,
}

impl ReportDoc {
    /// The blocks that must be identical across recompilations of the
    /// same record set: everything except the generation date line.
    pub fn stable_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|b| !matches!(b, Block::DateLine(_)))
    }
}
