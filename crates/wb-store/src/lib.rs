//! # wb-store
//!
//! Flat-file record store for weekbeeld.
//!
//! The data directory is the authoritative source of truth: one JSON file
//! per (week, topic, area) key. Writes replace the whole file
//! (last-write-wins); reads select by filename prefix, never by scanning
//! file contents. The compiled report is a derived artifact that can
//! always be rebuilt from these files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use wb_core::{Record, Result, WbError};

pub mod key;

pub use key::{storage_key, week_prefix};

/// Flat-file store mapping (week, topic, area) keys to record files.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist one record, replacing any prior record with the same key.
    ///
    /// # Errors
    ///
    /// Returns [`WbError::Io`] on filesystem failure and
    /// [`WbError::Serialization`] if the record cannot be encoded.
    pub fn put(&self, record: &Record) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let path = self
            .root
            .join(storage_key(record.week, &record.topic, &record.area));
        let json = serde_json::to_string(record)
            .map_err(|e| WbError::Serialization(e.to_string()))?;
        fs::write(&path, json)?;
        info!(path = %path.display(), "stored record");
        Ok(path)
    }

    /// Persist all topics for one area as a single batch.
    ///
    /// Entries are validated before anything is written: when
    /// `reject_blank` is set, one blank text fails the whole batch and no
    /// file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`WbError::BlankText`] for a rejected blank entry, plus
    /// the errors of [`RecordStore::put`].
    pub fn put_batch<'a, I>(
        &self,
        week: u32,
        area: &str,
        entries: I,
        reject_blank: bool,
    ) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let records: Vec<Record> = entries
            .into_iter()
            .map(|(topic, text)| Record::new(week, topic, area, text))
            .collect();

        if reject_blank {
            if let Some(blank) = records.iter().find(|r| r.is_blank()) {
                return Err(WbError::BlankText {
                    topic: blank.topic.clone(),
                });
            }
        }

        records.iter().map(|r| self.put(r)).collect()
    }

    /// All records stored for `week`, in no particular order.
    ///
    /// Selection is by filename prefix. Files that cannot be read or
    /// parsed are skipped, never fatal; a missing data directory yields
    /// an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`WbError::Io`] only if the data directory itself cannot
    /// be listed.
    pub fn get_all(&self, week: u32) -> Result<Vec<Record>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let prefix = week_prefix(week);
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.root)?.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(&prefix) || !name.ends_with(".json") {
                continue;
            }
            match fs::read_to_string(entry.path())
                .ok()
                .and_then(|raw| serde_json::from_str::<Record>(&raw).ok())
            {
                Some(record) => records.push(record),
                None => debug!(file = %name, "skipping unreadable record"),
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, RecordStore) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn put_then_get_all_roundtrips() {
        let (_dir, store) = store();
        let record = Record::new(10, "Afval", "Centrum", "volle containers");
        store.put(&record).unwrap();

        let all = store.get_all(10).unwrap();
        assert_eq!(all, vec![record]);
    }

    #[test]
    fn put_twice_keeps_only_the_second_text() {
        let (_dir, store) = store();
        store.put(&Record::new(10, "Afval", "Centrum", "first")).unwrap();
        store.put(&Record::new(10, "Afval", "Centrum", "second")).unwrap();

        let all = store.get_all(10).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "second");
    }

    #[test]
    fn get_all_selects_only_the_requested_week() {
        let (_dir, store) = store();
        store.put(&Record::new(1, "Afval", "Centrum", "week one")).unwrap();
        store.put(&Record::new(10, "Afval", "Centrum", "week ten")).unwrap();
        store.put(&Record::new(11, "Afval", "Centrum", "week eleven")).unwrap();

        let all = store.get_all(1).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "week one");
    }

    #[test]
    fn get_all_on_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("nonexistent"));
        assert!(store.get_all(10).unwrap().is_empty());
    }

    #[test]
    fn malformed_files_are_skipped_silently() {
        let (_dir, store) = store();
        store.put(&Record::new(10, "Afval", "Centrum", "goed")).unwrap();
        std::fs::write(store.root().join("10_Broken_Oost.json"), "{not json").unwrap();
        std::fs::write(store.root().join("10_notes.txt"), "ignored").unwrap();

        let all = store.get_all(10).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "goed");
    }

    #[test]
    fn put_batch_writes_one_file_per_topic() {
        let (_dir, store) = store();
        let paths = store
            .put_batch(
                29,
                "Centrum",
                [("Afval", "vol"), ("Overlast jeugd", "rustig")],
                false,
            )
            .unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(store.get_all(29).unwrap().len(), 2);
    }

    #[test]
    fn put_batch_rejecting_blanks_writes_nothing() {
        let (_dir, store) = store();
        let err = store
            .put_batch(29, "Centrum", [("Afval", "vol"), ("Overlast jeugd", "  ")], true)
            .unwrap_err();
        assert!(matches!(err, WbError::BlankText { .. }));
        assert!(store.get_all(29).unwrap().is_empty());
    }

    #[test]
    fn put_batch_accepts_blanks_by_default() {
        let (_dir, store) = store();
        store
            .put_batch(29, "Centrum", [("Afval", "")], false)
            .unwrap();
        let all = store.get_all(29).unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].text.is_empty());
    }
}
