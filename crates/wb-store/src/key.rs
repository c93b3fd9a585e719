//! Storage-key sanitization.
//!
//! Maps a (week, topic, area) identity to a stable filename. Topic and
//! area names may contain characters unsafe for filenames (slashes,
//! spaces); the mapping is pure and deterministic so the same identity
//! always lands on the same file.
//!
//! Distinct names that sanitize identically ("A/B" and "A_B") collide on
//! the same key. This is an accepted risk with the fixed production
//! lists; it is documented rather than guarded against so the on-disk
//! filename pattern stays compatible with existing record files.

/// Filename for a (week, topic, area) record: `{week}_{topic}_{area}.json`
/// with path separators and spaces replaced by underscores.
#[must_use]
pub fn storage_key(week: u32, topic: &str, area: &str) -> String {
    let topic = sanitize(topic);
    let area = sanitize(area);
    format!("{week}_{topic}_{area}.json").replace(' ', "_")
}

/// The filename prefix selecting all records of one week.
///
/// The trailing underscore keeps week 1 from matching week 10 files.
#[must_use]
pub fn week_prefix(week: u32) -> String {
    format!("{week}_")
}

fn sanitize(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}
