//! The on-disk `weekbeeld.yaml` configuration.
//!
//! Holds the storage locations, the [`Catalog`], the [`ReportPolicy`],
//! and the credential allow-list for the login gate.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Result, WbError};
use crate::policy::ReportPolicy;

/// Full weekbeeld configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one JSON file per record.
    pub data_dir: PathBuf,
    /// Directory the compiled reports are written to.
    pub output_dir: PathBuf,
    pub catalog: Catalog,
    pub policy: ReportPolicy,
    /// Credential allow-list. When non-empty, every data-touching command
    /// requires a matching username/password pair.
    pub users: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            catalog: Catalog::default(),
            policy: ReportPolicy::default(),
            users: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`WbError::Io`] if the file cannot be read and
    /// [`WbError::Config`] if the YAML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_yaml::from_str(&raw).map_err(|e| WbError::Config(e.to_string()))
    }

    /// Load a configuration, falling back to defaults when the file does
    /// not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`WbError::Config`] if serialization fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml =
            serde_yaml::to_string(self).map_err(|e| WbError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
