//! Process and NIST stage filters.
//!
//! Filter selection is a plain value owned by the caller. Visibility is a
//! pure function of that value and a record; nothing is kept globally.

use serde::{Deserialize, Serialize};

use crate::record::RiskRecord;

/// Opacity of hexagons hidden by a filter.
pub const DIMMED_OPACITY: f64 = 0.1;

/// A filter choice: everything, or one value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a button value, where "All" selects everything.
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

/// The two independent filters. A record is visible when both admit it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub process: Selection,
    pub nist: Selection,
}

impl FilterState {
    pub fn new(process: Selection, nist: Selection) -> Self {
        Self { process, nist }
    }

    pub fn with_process(self, process: Selection) -> Self {
        Self { process, ..self }
    }

    pub fn with_nist(self, nist: Selection) -> Self {
        Self { nist, ..self }
    }

    pub fn is_visible(&self, record: &RiskRecord) -> bool {
        self.process.admits(&record.process_name) && self.nist.admits(&record.nist_stage)
    }

    pub fn visibility(&self, record: &RiskRecord) -> Visibility {
        if self.is_visible(record) {
            Visibility::SHOWN
        } else {
            Visibility::DIMMED
        }
    }
}

/// How a hexagon is drawn under the current filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Visibility {
    pub opacity: f64,
    /// Whether hover and click reach the hexagon
    pub interactive: bool,
}

impl Visibility {
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        interactive: true,
    };
    pub const DIMMED: Self = Self {
        opacity: DIMMED_OPACITY,
        interactive: false,
    };
}
