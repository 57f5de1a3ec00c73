//! Ordering records so each process forms one contiguous run of the spiral.

use crate::record::RiskRecord;

/// Sort by process number, then process name.
///
/// The sort is stable: risks of one process keep their spreadsheet order.
pub fn sort_by_process(records: &mut [RiskRecord]) {
    records.sort_by(|a, b| {
        a.process_order()
            .cmp(&b.process_order())
            .then_with(|| a.process_name.cmp(&b.process_name))
    });
}

/// Distinct process names, in order of first appearance.
pub fn process_names(records: &[RiskRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        if !names.contains(&record.process_name) {
            names.push(record.process_name.clone());
        }
    }
    names
}

/// Distinct NIST stages, sorted, without blanks or "N/A".
pub fn nist_stages(records: &[RiskRecord]) -> Vec<String> {
    let mut stages: Vec<String> = records
        .iter()
        .filter_map(|r| r.nist_stage())
        .map(str::to_string)
        .collect();
    stages.sort();
    stages.dedup();
    stages
}
