//! Hivemap Visualization
//!
//! Turns a spreadsheet of risks into a hive map: one hexagon per risk,
//! grouped by process along a spiral, colored by process, filterable by
//! process and NIST AI lifecycle stage.
//!
//! # Architecture
//!
//! - **Records**: column alias resolution and normalization of raw rows
//! - **Ordering / Palette**: process sort order and process colors
//! - **Hive**: one layout pass over the sorted records
//! - **Filter**: per-hexagon visibility from the current selection
//! - **View**: fit on resize, clamped user zoom in between
//! - **SVG**: static rendering with tooltips
//!
//! # Usage
//!
//! ```
//! use hivemap_vis::{render_svg, FilterState, HiveConfig, HiveMap};
//!
//! let rows = serde_json::json!([
//!     {"Process Name": "1. Governance", "Risk Name": "No owner"},
//!     {"Process Name": "2. Data", "Risk Name": "Leakage"},
//! ]);
//! let hive = HiveMap::from_rows(&rows, &HiveConfig::default()).unwrap();
//! let transform = hive.fit(800.0, 600.0).unwrap();
//! let svg = render_svg(&hive, transform, &FilterState::default(), 800.0, 600.0);
//! assert!(svg.contains("No owner"));
//! ```

mod columns;
mod config;
mod detail;
mod error;
mod filter;
mod hive;
mod links;
mod ordering;
mod palette;
mod record;
mod svg;
mod view;

pub use columns::{cell_text, Column};
pub use config::{HiveConfig, DEFAULT_COLORS};
pub use detail::{Detail, Tooltip};
pub use error::{Error, Result};
pub use filter::{FilterState, Selection, Visibility, DIMMED_OPACITY};
pub use hive::{ExportedCell, HiveCell, HiveExport, HiveMap, LegendEntry};
pub use links::{parse_links, source_lines, LinkTag, SourceLink};
pub use ordering::{nist_stages, process_names, sort_by_process};
pub use palette::ProcessColors;
pub use record::{process_number, RiskRecord, NO_NIST_STAGE, UNNUMBERED_PROCESS};
pub use svg::{escape as escape_xml, render as render_svg};
pub use view::{FitRequest, ViewState};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> serde_json::Value {
        json!([
            {"Process": "10. Monitoring", "Risk": "Silent failure", "NIST": "Operate"},
            {"Process": "2. Data", "Risk": "Leakage", "NIST": "Collect"},
            {"Process": "Misc", "Risk": "Unclassified"},
            {"Process": "2. Data", "Risk": "Poisoning", "NIST": "Collect"}
        ])
    }

    #[test]
    fn hive_view_round() {
        let config = HiveConfig::default();
        let hive = HiveMap::from_rows(&rows(), &config).unwrap();

        let processes: Vec<_> = hive.colors().iter().map(|(name, _)| name).collect();
        assert_eq!(processes, ["2. Data", "10. Monitoring", "Misc"]);

        let mut view = ViewState::new(
            *hive.fitter(),
            hive.bounds(),
            config.viewport_width,
            config.viewport_height,
            (config.min_zoom, config.max_zoom),
        )
        .unwrap();
        assert_eq!(view.transform(), hive.fit(1280.0, 800.0).unwrap());

        view.resize(640.0, 480.0).unwrap();
        let center = view.transform().apply(hive.bounds().center());
        assert!((center.x - 320.0).abs() < 1e-9);
        assert!((center.y - 240.0).abs() < 1e-9);
    }

    #[test]
    fn filter_by_stage() {
        let hive = HiveMap::from_rows(&rows(), &HiveConfig::default()).unwrap();
        let filter = FilterState::new(Selection::All, Selection::parse("Collect"));
        let visible = hive.visibility(&filter).iter().filter(|v| v.interactive).count();
        assert_eq!(visible, 2);
    }
}
