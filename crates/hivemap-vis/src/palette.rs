//! Process colors.
//!
//! The n-th process gets the n-th palette color, wrapping around. Colors
//! only depend on the process list, never on filters or layout.

use serde::Serialize;

/// Color assignment for a list of processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessColors {
    entries: Vec<(String, String)>,
}

impl ProcessColors {
    /// Assign `palette` colors to `processes` in order.
    ///
    /// An empty palette leaves every process uncolored.
    pub fn assign(processes: &[String], palette: &[String]) -> Self {
        let entries = if palette.is_empty() {
            Vec::new()
        } else {
            processes
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), palette[i % palette.len()].clone()))
                .collect()
        };
        Self { entries }
    }

    /// Color of `process`, if it is known.
    pub fn color_of(&self, process: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == process)
            .map(|(_, color)| color.as_str())
    }

    /// `(process, color)` pairs in process order, e.g. for legend buttons.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
