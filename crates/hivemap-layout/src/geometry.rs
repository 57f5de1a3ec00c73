//! Axial-to-pixel projection for pointy-top hexagons.
//!
//! A pointy-top hexagon of radius `R` (center to vertex) is `√3·R` wide and
//! `2R` tall. Columns are `√3·R` apart, rows `1.5R` apart, and every other
//! row is shifted half a column by the skew of the `r` axis.

use std::fmt::Write as _;

use crate::error::{ensure_positive, Result};
use crate::AxialCoord;

/// A point in the plane of the rendered hive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Project `(q, r)` onto the plane for hexagons of the given radius.
///
/// Pure formula evaluation: identical inputs give bit-identical output.
#[inline]
pub fn hex_to_pixel(q: i64, r: i64, radius: f64) -> PixelPoint {
    let sqrt3 = 3.0_f64.sqrt();
    let (q, r) = (q as f64, r as f64);

    let x = radius * (sqrt3 * q + sqrt3 / 2.0 * r);
    let y = radius * (1.5 * r);

    PixelPoint { x, y }
}

/// The six vertices of a pointy-top hexagon centered on the local origin.
///
/// Vertex k sits at 30° + 60°·k, in increasing angle order.
pub fn hex_outline(radius: f64) -> [PixelPoint; 6] {
    std::array::from_fn(|k| {
        let angle = (30.0 + 60.0 * k as f64).to_radians();
        PixelPoint {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    })
}

/// Hex geometry bound to one validated radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGeometry {
    radius: f64,
}

impl HexGeometry {
    /// Default radius, in pixels.
    pub const DEFAULT_RADIUS: f64 = 60.0;

    /// Create geometry for hexagons of `radius`, which must be finite and positive.
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: ensure_positive("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Width of one hexagon, flat side to flat side.
    pub fn width(&self) -> f64 {
        3.0_f64.sqrt() * self.radius
    }

    /// Height of one hexagon, vertex to vertex.
    pub fn height(&self) -> f64 {
        2.0 * self.radius
    }

    /// Center of `coord` in pixel space.
    #[inline]
    pub fn to_pixel(&self, coord: AxialCoord) -> PixelPoint {
        hex_to_pixel(coord.q, coord.r, self.radius)
    }

    /// Outline around the local origin.
    pub fn outline(&self) -> [PixelPoint; 6] {
        hex_outline(self.radius)
    }

    /// Outline translated to `center`.
    pub fn outline_at(&self, center: PixelPoint) -> [PixelPoint; 6] {
        self.outline()
            .map(|v| PixelPoint::new(center.x + v.x, center.y + v.y))
    }

    /// Outline as SVG path data: `Mx,yLx,y...Z`.
    pub fn outline_path(&self) -> String {
        let mut path = String::with_capacity(128);
        for (k, v) in self.outline().iter().enumerate() {
            let cmd = if k == 0 { 'M' } else { 'L' };
            // Writing to a String cannot fail.
            let _ = write!(path, "{cmd}{},{}", v.x, v.y);
        }
        path.push('Z');
        path
    }

    /// Cell containing `point`, the inverse of [`HexGeometry::to_pixel`].
    ///
    /// Points on a shared edge resolve to one of the touching cells.
    pub fn pixel_to_hex(&self, point: PixelPoint) -> AxialCoord {
        let sqrt3 = 3.0_f64.sqrt();
        let q = (sqrt3 / 3.0 * point.x - point.y / 3.0) / self.radius;
        let r = (2.0 / 3.0 * point.y) / self.radius;
        cube_round(q, r)
    }
}

impl Default for HexGeometry {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
        }
    }
}

/// Round fractional axial coordinates to the nearest cell.
///
/// Rounds all three cube axes and recomputes the one with the largest
/// rounding error so that q + r + s = 0 still holds.
fn cube_round(q: f64, r: f64) -> AxialCoord {
    let s = -q - r;
    let (mut rq, mut rr, rs) = (q.round(), r.round(), s.round());

    let dq = (rq - q).abs();
    let dr = (rr - r).abs();
    let ds = (rs - s).abs();

    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }

    AxialCoord::new(rq as i64, rr as i64)
}
