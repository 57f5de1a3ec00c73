//! Column alias resolution for spreadsheet rows.
//!
//! Spreadsheets in the wild name the same column differently ("Risk",
//! "Risk Name", " risk title "). A header matches an alias when the trimmed
//! header equals the alias, ignoring ASCII case. The first header, in row
//! order, that matches any alias of a field wins.

use serde_json::{Map, Value};

/// A field of a risk record and the headers it may be stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ProcessName,
    SubProcessName,
    RiskName,
    RiskDescription,
    NistStage,
    SourcesText,
    SourceLinks,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::ProcessName,
        Column::SubProcessName,
        Column::RiskName,
        Column::RiskDescription,
        Column::NistStage,
        Column::SourcesText,
        Column::SourceLinks,
    ];

    /// Accepted headers, in no particular priority.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::ProcessName => &["Process Name", "Process", "Risk Process"],
            Column::SubProcessName => &["Sub-Process Name", "Sub Process"],
            Column::RiskName => &["Risk Name", "Risk", "Risk Title"],
            Column::RiskDescription => &["Risk Description", "Description", "Desc"],
            Column::NistStage => &["NIST AI Lifecycle Stage", "NIST Stage", "NIST"],
            Column::SourcesText => &[
                "Sources and References",
                "Sources",
                "Source",
                "References",
                "Citation",
            ],
            Column::SourceLinks => &["URL Sources", "URL Source", "Link Sources", "Links"],
        }
    }

    /// Value used when the column is missing or blank.
    pub const fn fallback(self) -> &'static str {
        match self {
            Column::ProcessName => "Unknown Process",
            Column::SubProcessName => "Unknown Sub-Process",
            Column::RiskName => "Unknown Risk",
            Column::NistStage => "N/A",
            Column::RiskDescription | Column::SourcesText | Column::SourceLinks => "",
        }
    }

    /// Whether `header` names this column.
    pub fn matches(self, header: &str) -> bool {
        let header = header.trim();
        self.aliases()
            .iter()
            .any(|alias| header.eq_ignore_ascii_case(alias))
    }

    /// The cell of `row` stored under this column, if any header matches.
    pub fn find(self, row: &Map<String, Value>) -> Option<&Value> {
        row.iter()
            .find(|(header, _)| self.matches(header))
            .map(|(_, value)| value)
    }

    /// Cell text, or the fallback when missing or blank.
    pub fn text(self, row: &Map<String, Value>) -> String {
        self.find(row)
            .and_then(cell_text)
            .unwrap_or_else(|| self.fallback().to_string())
    }
}

/// Text of a cell. Null, false, zero and empty strings count as blank.
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
