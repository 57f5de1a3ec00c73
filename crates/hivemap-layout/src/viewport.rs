//! Fitting placed content into a viewport.
//!
//! A fit is a pure function of the content bounds and the viewport size. It
//! is recomputed from scratch on every layout or resize and replaces any
//! earlier transform, including pan or zoom the user applied.

use crate::error::{ensure_positive, Error, Result};
use crate::PixelPoint;

/// Axis-aligned bounding box in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    /// Box containing nothing. Including any point makes it non-empty.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every point.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = PixelPoint>,
    {
        points.into_iter().fold(Self::EMPTY, |mut bounds, p| {
            bounds.include(p);
            bounds
        })
    }

    pub fn include(&mut self, point: PixelPoint) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.min_x <= self.max_x && self.min_y <= self.max_y)
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint {
            x: self.min_x + self.width() / 2.0,
            y: self.min_y + self.height() / 2.0,
        }
    }

    pub fn contains(&self, point: PixelPoint) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// Similarity transform from content space to viewport space.
///
/// A point maps to `translate + scale * point`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// Map a content point into the viewport.
    pub fn apply(&self, point: PixelPoint) -> PixelPoint {
        PixelPoint {
            x: self.translate_x + self.scale * point.x,
            y: self.translate_y + self.scale * point.y,
        }
    }

    /// Map a viewport point back into content space.
    pub fn invert(&self, point: PixelPoint) -> PixelPoint {
        PixelPoint {
            x: (point.x - self.translate_x) / self.scale,
            y: (point.y - self.translate_y) / self.scale,
        }
    }

    /// The transform as an SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!(
            "translate({},{}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// How the fitter chooses the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitPolicy {
    /// Scale is the target fill fraction itself, whatever the content size.
    #[default]
    Fixed,
    /// Scale so the whole box fits, then shrink by the target fill fraction.
    Contain,
}

/// Centers content bounds in a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFitter {
    target_fill: f64,
    policy: FitPolicy,
}

impl Default for ViewportFitter {
    fn default() -> Self {
        Self {
            target_fill: Self::DEFAULT_TARGET_FILL,
            policy: FitPolicy::Fixed,
        }
    }
}

impl ViewportFitter {
    pub const DEFAULT_TARGET_FILL: f64 = 0.85;

    /// Fitter with a target fill fraction in (0, 1].
    pub fn new(target_fill: f64) -> Result<Self> {
        if !(target_fill > 0.0 && target_fill <= 1.0) {
            return Err(Error::invalid(
                "target_fill",
                format!("must be in (0, 1], got {target_fill}"),
            ));
        }
        Ok(Self {
            target_fill,
            policy: FitPolicy::Fixed,
        })
    }

    pub fn with_policy(mut self, policy: FitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn target_fill(&self) -> f64 {
        self.target_fill
    }

    pub fn policy(&self) -> FitPolicy {
        self.policy
    }

    /// Transform that puts the center of `bounds` at the center of a
    /// `viewport_width` x `viewport_height` viewport.
    pub fn fit(&self, bounds: &BoundingBox, viewport_width: f64, viewport_height: f64) -> Result<Transform> {
        let viewport_width = ensure_positive("viewport_width", viewport_width)?;
        let viewport_height = ensure_positive("viewport_height", viewport_height)?;
        if bounds.is_empty() {
            return Err(Error::invalid("bounds", "cannot fit an empty bounding box"));
        }

        let scale = match self.policy {
            FitPolicy::Fixed => self.target_fill,
            FitPolicy::Contain => self.target_fill * contain_scale(bounds, viewport_width, viewport_height),
        };

        let center = bounds.center();
        Ok(Transform {
            scale,
            translate_x: viewport_width / 2.0 - scale * center.x,
            translate_y: viewport_height / 2.0 - scale * center.y,
        })
    }
}

/// Largest scale at which `bounds` fits the viewport. Degenerate axes are
/// ignored; a point-sized box keeps scale 1.
fn contain_scale(bounds: &BoundingBox, viewport_width: f64, viewport_height: f64) -> f64 {
    let sx = (bounds.width() > 0.0).then(|| viewport_width / bounds.width());
    let sy = (bounds.height() > 0.0).then(|| viewport_height / bounds.height());
    match (sx, sy) {
        (Some(sx), Some(sy)) => sx.min(sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 1.0,
    }
}
