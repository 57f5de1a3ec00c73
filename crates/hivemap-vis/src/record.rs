//! Risk records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::columns::Column;

/// NIST stage value meaning "no stage recorded".
pub const NO_NIST_STAGE: &str = "N/A";

/// Process number given to processes whose name has no "N." prefix.
pub const UNNUMBERED_PROCESS: u32 = 999;

/// One risk, normalized from a spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRecord {
    pub process_name: String,
    pub sub_process_name: String,
    pub risk_name: String,
    pub risk_description: String,
    pub nist_stage: String,
    /// Free-text citations, one per line
    pub sources_text: String,
    /// Reference links: `title | url` entries separated by ` || `
    pub source_links: String,
}

impl RiskRecord {
    /// Normalize a row keyed by spreadsheet headers.
    pub fn from_row(row: &Map<String, Value>) -> Self {
        Self {
            process_name: Column::ProcessName.text(row),
            sub_process_name: Column::SubProcessName.text(row),
            risk_name: Column::RiskName.text(row),
            risk_description: Column::RiskDescription.text(row),
            nist_stage: Column::NistStage.text(row),
            sources_text: Column::SourcesText.text(row),
            source_links: Column::SourceLinks.text(row),
        }
    }

    /// The NIST stage, unless it is blank or "N/A".
    pub fn nist_stage(&self) -> Option<&str> {
        let stage = self.nist_stage.as_str();
        (!stage.is_empty() && stage != NO_NIST_STAGE).then_some(stage)
    }

    /// Number from a process name of the form "3. Data Collection".
    pub fn process_number(&self) -> Option<u32> {
        process_number(&self.process_name)
    }

    /// Sort key: process number, unnumbered processes last.
    pub fn process_order(&self) -> u32 {
        self.process_number().unwrap_or(UNNUMBERED_PROCESS)
    }
}

/// Leading digits of `name` when directly followed by a period.
pub fn process_number(name: &str) -> Option<u32> {
    let digits = name.len() - name.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 || !name[digits..].starts_with('.') {
        return None;
    }
    name[..digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(process: &str, nist: &str) -> RiskRecord {
        RiskRecord {
            process_name: process.into(),
            sub_process_name: String::new(),
            risk_name: "r".into(),
            risk_description: String::new(),
            nist_stage: nist.into(),
            sources_text: String::new(),
            source_links: String::new(),
        }
    }

    #[test]
    fn from_row_normalizes_every_field() {
        let row = json!({
            "Process Name": "1. Governance",
            "Sub Process": "Policy",
            "Risk": "No owner",
            "Description": "Nobody is accountable",
            "NIST AI Lifecycle Stage": "Plan",
            "Sources": "ISO 42001",
            "Links": "Guide | https://example.org"
        });
        let record = RiskRecord::from_row(row.as_object().unwrap());

        assert_eq!(record.process_name, "1. Governance");
        assert_eq!(record.sub_process_name, "Policy");
        assert_eq!(record.risk_name, "No owner");
        assert_eq!(record.risk_description, "Nobody is accountable");
        assert_eq!(record.nist_stage, "Plan");
        assert_eq!(record.sources_text, "ISO 42001");
        assert_eq!(record.source_links, "Guide | https://example.org");
    }

    #[test]
    fn empty_row_gets_fallbacks() {
        let record = RiskRecord::from_row(&Map::new());
        assert_eq!(record.process_name, "Unknown Process");
        assert_eq!(record.risk_name, "Unknown Risk");
        assert_eq!(record.nist_stage, NO_NIST_STAGE);
        assert_eq!(record.nist_stage(), None);
    }

    #[test]
    fn nist_stage_filters_placeholder() {
        assert_eq!(record("p", "Deploy").nist_stage(), Some("Deploy"));
        assert_eq!(record("p", "N/A").nist_stage(), None);
        assert_eq!(record("p", "").nist_stage(), None);
    }

    #[test]
    fn process_numbers() {
        assert_eq!(process_number("1. Governance"), Some(1));
        assert_eq!(process_number("12.Data"), Some(12));
        assert_eq!(process_number("Governance"), None);
        assert_eq!(process_number("3 Data"), None);
        assert_eq!(process_number(""), None);
        assert_eq!(record("Data", "").process_order(), UNNUMBERED_PROCESS);
    }
}
