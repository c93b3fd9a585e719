//! Output artifact writing.
//!
//! Reports land in the designated output directory under a filename
//! keyed by week number. The rendered document is written to a temp
//! file and renamed into place, so an interrupted write never leaves a
//! half-written file under the final name.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use wb_core::{ReportPolicy, Result};

use crate::document::ReportDoc;
use crate::formatter::{render, OutputFormat};

/// Output filename for a compiled report: `Week_{week}_Rapport.{ext}`,
/// with the generation timestamp appended when the policy asks for it.
#[must_use]
pub fn report_filename(doc: &ReportDoc, format: OutputFormat, policy: &ReportPolicy) -> String {
    let ext = format.extension();
    if policy.timestamped_filenames {
        let stamp = doc.generated_at.format("%Y%m%d_%H%M%S");
        format!("Week_{}_Rapport_{stamp}.{ext}", doc.week)
    } else {
        format!("Week_{}_Rapport.{ext}", doc.week)
    }
}

/// Render `doc` and write it under `output_dir`.
///
/// # Errors
///
/// Returns [`wb_core::WbError::Io`] on filesystem failure; on failure no
/// file exists under the final name.
pub fn write_report(
    doc: &ReportDoc,
    format: OutputFormat,
    output_dir: &Path,
    policy: &ReportPolicy,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let rendered = render(doc, format);

    let path = output_dir.join(report_filename(doc, format, policy));
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, rendered)?;
    fs::rename(&tmp, &path)?;
    info!(path = %path.display(), "wrote report");
    Ok(path)
}
