//! Catalog types — the fixed area and topic lists that drive report order.
//!
//! Order is significant: the area and topic lists determine both input-field
//! order and the section order of the compiled report, independent of the
//! order in which records are discovered on disk.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WbError};

/// An alternate fixed topic list reported against a single reserved area
/// value instead of the general area list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSet {
    /// The reserved area name. Excluded from the general per-topic
    /// iteration and used as the heading of the final report section.
    pub area: String,
    /// Fixed topic list for this set, in report order.
    pub topics: Vec<String>,
}

/// The fixed reporting structure: ordered areas, ordered topics, and one
/// special topic set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Ordered area list. May include the special set's reserved area.
    pub areas: Vec<String>,
    /// Ordered general topic list.
    pub topics: Vec<String>,
    /// The special topic set, always reported last.
    pub special: SpecialSet,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            areas: [
                "Centrum",
                "Noord",
                "Oost",
                "Zuid",
                "Zuidoost",
                "Weesp",
                "West",
                "Nieuw-West",
                "VOV",
                "Nautisch Toezicht",
            ]
            .map(String::from)
            .to_vec(),
            topics: [
                "Overlast personen",
                "Overlast jeugd",
                "Afval",
                "Parkeeroverlast/verkeersoverlast",
                "Overige reguliere taken",
            ]
            .map(String::from)
            .to_vec(),
            special: SpecialSet {
                area: "Nautisch Toezicht".to_string(),
                topics: ["Incidenten", "Regulier Werk", "CityControl", "SIG-meldingen"]
                    .map(String::from)
                    .to_vec(),
            },
        }
    }
}

impl Catalog {
    /// Areas iterated inside each general topic section: the fixed area
    /// list minus the special set's reserved area.
    pub fn general_areas(&self) -> impl Iterator<Item = &str> {
        self.areas
            .iter()
            .map(String::as_str)
            .filter(|a| *a != self.special.area)
    }

    /// The topic list that applies to submissions for `area`.
    #[must_use]
    pub fn topics_for(&self, area: &str) -> &[String] {
        if area == self.special.area {
            &self.special.topics
        } else {
            &self.topics
        }
    }

    /// Validate that `area` is one of the configured areas.
    ///
    /// # Errors
    ///
    /// Returns [`WbError::UnknownArea`] otherwise.
    pub fn require_area(&self, area: &str) -> Result<()> {
        if self.areas.iter().any(|a| a == area) || area == self.special.area {
            Ok(())
        } else {
            Err(WbError::UnknownArea(area.to_string()))
        }
    }

    /// Validate that `topic` is valid for submissions targeting `area`.
    ///
    /// # Errors
    ///
    /// Returns [`WbError::UnknownTopic`] otherwise.
    pub fn require_topic(&self, area: &str, topic: &str) -> Result<()> {
        if self.topics_for(area).iter().any(|t| t == topic) {
            Ok(())
        } else {
            Err(WbError::UnknownTopic(topic.to_string()))
        }
    }
}
