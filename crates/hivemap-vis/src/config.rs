//! Hive map configuration.

use std::path::Path;

use hivemap_layout::{FitPolicy, HexGeometry, ViewportFitter};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Process colors, in process order. Cycles when there are more processes.
pub const DEFAULT_COLORS: [&str; 7] = [
    "#2E8B57", // Sea Green
    "#4682B4", // Steel Blue
    "#DAA520", // Goldenrod
    "#CD853F", // Peru
    "#9370DB", // Medium Purple
    "#DC143C", // Crimson
    "#FF6347", // Tomato
];

/// Configuration for building and viewing a hive map.
///
/// Every field is optional in a config file; missing ones take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiveConfig {
    /// Hexagon radius in pixels, center to vertex
    pub hex_radius: f64,
    /// Fraction of the viewport the content should fill, in (0, 1]
    pub target_fill: f64,
    /// How the initial fit chooses its scale
    pub fit_policy: FitPolicy,
    /// Palette assigned to processes in order
    pub colors: Vec<String>,
    /// Smallest interactive zoom scale
    pub min_zoom: f64,
    /// Largest interactive zoom scale
    pub max_zoom: f64,
    /// Viewport used when none is given
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for HiveConfig {
    fn default() -> Self {
        Self {
            hex_radius: HexGeometry::DEFAULT_RADIUS,
            target_fill: ViewportFitter::DEFAULT_TARGET_FILL,
            fit_policy: FitPolicy::Fixed,
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            min_zoom: 0.1,
            max_zoom: 5.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
        }
    }
}

impl HiveConfig {
    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the layout engine does not check itself.
    pub fn validate(&self) -> Result<()> {
        self.geometry()?;
        self.fitter()?;
        if self.colors.is_empty() {
            return Err(Error::InvalidInput("colors: palette is empty".into()));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom && self.max_zoom.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "zoom extent must satisfy 0 < min <= max, got [{}, {}]",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }

    pub fn geometry(&self) -> Result<HexGeometry> {
        Ok(HexGeometry::new(self.hex_radius)?)
    }

    pub fn fitter(&self) -> Result<ViewportFitter> {
        Ok(ViewportFitter::new(self.target_fill)?.with_policy(self.fit_policy))
    }
}
