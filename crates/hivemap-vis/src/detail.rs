//! Hover tooltip and click-through detail content.
//!
//! These are the data behind the tooltip and the detail modal. Markup is
//! left to whoever draws them.

use serde::Serialize;

use crate::links::{parse_links, source_lines, SourceLink};
use crate::record::RiskRecord;

/// Content shown while hovering a hexagon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub process_name: String,
    pub risk_name: String,
    pub description: String,
    pub nist_stage: Option<String>,
}

impl Tooltip {
    pub fn for_record(record: &RiskRecord) -> Self {
        Self {
            process_name: record.process_name.clone(),
            risk_name: record.risk_name.clone(),
            description: non_empty_or(&record.risk_description, "No description available."),
            nist_stage: record.nist_stage().map(str::to_string),
        }
    }

    /// Plain-text rendering, one piece per line.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            self.process_name.clone(),
            self.risk_name.clone(),
            self.description.clone(),
        ];
        if let Some(stage) = &self.nist_stage {
            lines.push(format!("AI Lifecycle Stage (by NIST): {stage}"));
        }
        lines.join("\n")
    }
}

/// Content of the detail view opened by clicking a hexagon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    /// Process name, drawn in the process color
    pub header: String,
    pub color: String,
    pub subheader: String,
    pub nist_badge: Option<String>,
    pub title: String,
    pub description: String,
    /// Citation lines; the section is hidden when empty
    pub sources: Vec<String>,
    /// Reference links; the section is hidden when empty
    pub links: Vec<SourceLink>,
}

impl Detail {
    pub fn for_record(record: &RiskRecord, color: &str) -> Self {
        let title = [record.risk_name.as_str(), record.sub_process_name.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or("Risk Detail")
            .to_string();

        Self {
            header: record.process_name.clone(),
            color: color.to_string(),
            subheader: record.sub_process_name.clone(),
            nist_badge: record
                .nist_stage()
                .map(|stage| format!("AI Lifecycle Stage: {stage}")),
            title,
            description: non_empty_or(&record.risk_description, "No description provided."),
            sources: source_lines(&record.sources_text),
            links: parse_links(&record.source_links),
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
