//! Building the hive: one layout pass over the risk records.

use hivemap_layout::{
    bounding_box, coord_to_spiral, place, BoundingBox, HexGeometry, PixelPoint, PlacedItem,
    Transform, ViewportFitter,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::HiveConfig;
use crate::detail::{Detail, Tooltip};
use crate::error::{Error, Result};
use crate::filter::{FilterState, Visibility};
use crate::ordering::{nist_stages, process_names, sort_by_process};
use crate::palette::ProcessColors;
use crate::record::RiskRecord;

/// A risk together with its process color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiveCell {
    pub record: RiskRecord,
    pub color: String,
}

/// A laid-out hive map.
///
/// Records are sorted by process, colored, and placed on the spiral once.
/// Filters and viewport changes never move a cell.
#[derive(Debug, Clone)]
pub struct HiveMap {
    geometry: HexGeometry,
    fitter: ViewportFitter,
    cells: Vec<PlacedItem<HiveCell>>,
    colors: ProcessColors,
    nist_stages: Vec<String>,
    bounds: BoundingBox,
}

impl HiveMap {
    /// Lay out `records`.
    pub fn build(mut records: Vec<RiskRecord>, config: &HiveConfig) -> Result<Self> {
        config.validate()?;
        let geometry = config.geometry()?;
        let fitter = config.fitter()?;

        sort_by_process(&mut records);
        let colors = ProcessColors::assign(&process_names(&records), &config.colors);
        let nist_stages = nist_stages(&records);

        let cells = place(
            records.into_iter().map(|record| {
                let color = colors
                    .color_of(&record.process_name)
                    .unwrap_or_default()
                    .to_string();
                HiveCell { record, color }
            }),
            &geometry,
        );
        // An empty hive is a point at the origin, so it still fits and renders.
        let bounds = if cells.is_empty() {
            BoundingBox::new(0.0, 0.0, 0.0, 0.0)
        } else {
            bounding_box(&cells, &geometry)
        };

        tracing::debug!(
            risks = cells.len(),
            processes = colors.len(),
            outer_ring = cells.last().map_or(0, |c| c.coord.ring()),
            "hive laid out"
        );

        Ok(Self {
            geometry,
            fitter,
            cells,
            colors,
            nist_stages,
            bounds,
        })
    }

    /// Lay out rows decoded from a spreadsheet export: a JSON array of
    /// objects keyed by column header. Rows that are not objects are skipped.
    pub fn from_rows(rows: &Value, config: &HiveConfig) -> Result<Self> {
        let rows = rows
            .as_array()
            .ok_or_else(|| Error::InvalidInput("expected a JSON array of rows".into()))?;

        let mut records = Vec::with_capacity(rows.len());
        for (line, row) in rows.iter().enumerate() {
            match row.as_object() {
                Some(row) => records.push(RiskRecord::from_row(row)),
                None => tracing::warn!(row = line, "skipping row that is not an object"),
            }
        }
        if let Some(first) = records.first() {
            tracing::debug!(?first, "first normalized row");
        }

        Self::build(records, config)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[PlacedItem<HiveCell>] {
        &self.cells
    }

    pub fn geometry(&self) -> &HexGeometry {
        &self.geometry
    }

    pub fn fitter(&self) -> &ViewportFitter {
        &self.fitter
    }

    pub fn colors(&self) -> &ProcessColors {
        &self.colors
    }

    /// Distinct NIST stages, for the stage filter.
    pub fn nist_stages(&self) -> &[String] {
        &self.nist_stages
    }

    /// Bounds of every hexagon outline, in content space. A point at the
    /// origin when the hive is empty.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Transform centering the hive in a `width` x `height` viewport.
    pub fn fit(&self, width: f64, height: f64) -> Result<Transform> {
        Ok(self.fitter.fit(&self.bounds, width, height)?)
    }

    /// Cell under a content-space point, for hit testing.
    pub fn cell_at(&self, point: PixelPoint) -> Option<&PlacedItem<HiveCell>> {
        if !self.bounds.contains(point) {
            return None;
        }
        let index = coord_to_spiral(self.geometry.pixel_to_hex(point)).value();
        usize::try_from(index).ok().and_then(|i| self.cells.get(i))
    }

    pub fn visibility(&self, filter: &FilterState) -> Vec<Visibility> {
        self.cells
            .iter()
            .map(|c| filter.visibility(&c.item.record))
            .collect()
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.cells
            .get(index)
            .map(|c| Tooltip::for_record(&c.item.record))
    }

    pub fn detail(&self, index: usize) -> Option<Detail> {
        self.cells
            .get(index)
            .map(|c| Detail::for_record(&c.item.record, &c.item.color))
    }

    /// Everything a renderer needs, as one serializable value.
    pub fn export(&self, transform: Transform, filter: &FilterState) -> HiveExport<'_> {
        HiveExport {
            radius: self.geometry.radius(),
            transform,
            bounds: self.bounds,
            processes: self.colors.iter().map(|(name, color)| LegendEntry { name, color }).collect(),
            nist_stages: &self.nist_stages,
            cells: self
                .cells
                .iter()
                .map(|cell| ExportedCell {
                    cell,
                    visibility: filter.visibility(&cell.item.record),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LegendEntry<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ExportedCell<'a> {
    #[serde(flatten)]
    pub cell: &'a PlacedItem<HiveCell>,
    pub visibility: Visibility,
}

/// Serializable snapshot of a laid-out hive.
#[derive(Debug, Serialize)]
pub struct HiveExport<'a> {
    pub radius: f64,
    pub transform: Transform,
    pub bounds: BoundingBox,
    pub processes: Vec<LegendEntry<'a>>,
    pub nist_stages: &'a [String],
    pub cells: Vec<ExportedCell<'a>>,
}
