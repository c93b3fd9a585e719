//! Record set → block document compiler.
//!
//! Groups the week's records by topic then area and emits the fixed
//! report structure: title, table of contents, one section per general
//! topic with one subsection per area, and the special topic set as the
//! final section keyed against its reserved area.

use std::collections::HashMap;

use chrono::Utc;
use tracing::info;

use wb_core::{Catalog, MissingText, ReportPolicy, Result, WbError};
use wb_store::RecordStore;

use crate::document::{Block, ReportDoc};

/// Two-level grouping: topic → (area → text).
pub type Grouped = HashMap<String, HashMap<String, String>>;

/// Load all records for `week` and compile them into a report document.
///
/// # Errors
///
/// Returns [`WbError::NoInput`] when zero records are stored for the
/// week, plus the store's read errors.
pub fn compile(
    store: &RecordStore,
    week: u32,
    catalog: &Catalog,
    policy: &ReportPolicy,
) -> Result<ReportDoc> {
    let records = store.get_all(week)?;
    if records.is_empty() {
        return Err(WbError::NoInput { week });
    }
    info!(week, records = records.len(), "compiling report");

    let mut grouped: Grouped = HashMap::new();
    for record in records {
        grouped
            .entry(record.topic)
            .or_default()
            .insert(record.area, record.text);
    }

    Ok(build_document(week, &grouped, catalog, policy))
}

/// Build the block document from pre-grouped records. Pure: ordering and
/// content depend only on the arguments (and the embedded generation
/// time, which lives outside the stable blocks).
#[must_use]
pub fn build_document(
    week: u32,
    grouped: &Grouped,
    catalog: &Catalog,
    policy: &ReportPolicy,
) -> ReportDoc {
    let generated_at = Utc::now();
    let mut blocks = Vec::new();

    blocks.push(Block::Title(format!("Rapportage week {week}")));
    blocks.push(Block::DateLine(generated_at.format("%d-%m-%Y").to_string()));

    // Table of contents: general topics in fixed order, special set last,
    // labels assigned strictly by list position.
    blocks.push(Block::Heading {
        level: 1,
        text: "Inhoudsopgave".to_string(),
        accent: false,
    });
    let toc: Vec<&str> = catalog
        .topics
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(catalog.special.area.as_str()))
        .collect();
    for (i, entry) in toc.iter().enumerate() {
        blocks.push(Block::TocEntry {
            position: i + 1,
            text: (*entry).to_string(),
        });
    }
    blocks.push(Block::PageBreak);

    // General topic sections.
    for topic in &catalog.topics {
        blocks.push(Block::Heading {
            level: 1,
            text: topic.clone(),
            accent: true,
        });
        let by_area = grouped.get(topic);
        for area in catalog.general_areas() {
            let accent = policy.accent_overview.as_deref() == Some(area);
            blocks.push(Block::Heading {
                level: 2,
                text: area.to_string(),
                accent,
            });
            let text = by_area.and_then(|m| m.get(area)).map(String::as_str);
            push_text(&mut blocks, text, policy);
        }
    }

    // Special topic set, keyed against its reserved area.
    blocks.push(Block::Heading {
        level: 1,
        text: catalog.special.area.clone(),
        accent: true,
    });
    for topic in &catalog.special.topics {
        blocks.push(Block::Heading {
            level: 2,
            text: topic.clone(),
            accent: false,
        });
        let text = grouped
            .get(topic)
            .and_then(|m| m.get(&catalog.special.area))
            .map(String::as_str);
        push_text(&mut blocks, text, policy);
    }

    ReportDoc {
        week,
        generated_at,
        blocks,
    }
}

fn push_text(blocks: &mut Vec<Block>, text: Option<&str>, policy: &ReportPolicy) {
    match text {
        Some(text) if !text.is_empty() => {
            for line in text.split('\n') {
                blocks.push(Block::Paragraph(line.to_string()));
            }
        }
        _ => {
            if let MissingText::Placeholder(label) = &policy.missing_text {
                blocks.push(Block::Placeholder(label.clone()));
            }
        }
    }
}
