//! Interactive view state: fit on resize, user zoom in between.
//!
//! Every resize or content change replaces the transform with a fresh fit,
//! discarding any zoom the user applied. Fits may be computed elsewhere and
//! handed back later; only the one for the most recent request is kept.

use hivemap_layout::{BoundingBox, PixelPoint, Transform, ViewportFitter};

use crate::error::{Error, Result};

/// A pending fit, tagged with the generation it was requested in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest {
    pub generation: u64,
    pub bounds: BoundingBox,
    pub fitter: ViewportFitter,
    pub width: f64,
    pub height: f64,
}

impl FitRequest {
    pub fn compute(&self) -> Result<Transform> {
        Ok(self.fitter.fit(&self.bounds, self.width, self.height)?)
    }
}

/// Current transform of a hive view.
#[derive(Debug, Clone)]
pub struct ViewState {
    fitter: ViewportFitter,
    bounds: BoundingBox,
    width: f64,
    height: f64,
    transform: Transform,
    generation: u64,
    min_zoom: f64,
    max_zoom: f64,
}

impl ViewState {
    /// Fit `bounds` into the initial viewport.
    pub fn new(
        fitter: ViewportFitter,
        bounds: BoundingBox,
        width: f64,
        height: f64,
        zoom_extent: (f64, f64),
    ) -> Result<Self> {
        let (min_zoom, max_zoom) = zoom_extent;
        if !(min_zoom > 0.0 && min_zoom <= max_zoom && max_zoom.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "zoom extent must satisfy 0 < min <= max, got [{min_zoom}, {max_zoom}]"
            )));
        }
        let transform = fitter.fit(&bounds, width, height)?;
        Ok(Self {
            fitter,
            bounds,
            width,
            height,
            transform,
            generation: 0,
            min_zoom,
            max_zoom,
        })
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a fit for a new viewport size. Any older request goes stale.
    ///
    /// A size the fitter would reject leaves the view untouched.
    pub fn request_resize(&mut self, width: f64, height: f64) -> Result<FitRequest> {
        check_viewport(width, height)?;
        self.width = width;
        self.height = height;
        Ok(self.next_request())
    }

    /// Start a fit for new content. Any older request goes stale.
    pub fn request_content(&mut self, bounds: BoundingBox) -> FitRequest {
        self.bounds = bounds;
        self.next_request()
    }

    fn next_request(&mut self) -> FitRequest {
        self.generation += 1;
        FitRequest {
            generation: self.generation,
            bounds: self.bounds,
            fitter: self.fitter,
            width: self.width,
            height: self.height,
        }
    }

    /// Install a computed fit. Returns false, changing nothing, when a newer
    /// request was made after `request`.
    pub fn commit(&mut self, request: &FitRequest, transform: Transform) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                stale = request.generation,
                current = self.generation,
                "discarding stale fit"
            );
            return false;
        }
        self.transform = transform;
        true
    }

    /// Resize and refit in one step. On error nothing changes.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<Transform> {
        check_viewport(width, height)?;
        let transform = self.fitter.fit(&self.bounds, width, height)?;
        let request = self.request_resize(width, height)?;
        self.commit(&request, transform);
        Ok(transform)
    }

    /// Apply a user pan/zoom, clamping the scale to the zoom extent.
    pub fn set_user_transform(&mut self, transform: Transform) {
        self.transform = Transform {
            scale: self.clamp_zoom(transform.scale),
            ..transform
        };
    }

    /// Zoom by `factor` keeping the viewport point `anchor` fixed.
    pub fn zoom_at(&mut self, factor: f64, anchor: PixelPoint) {
        let current = self.transform;
        let scale = self.clamp_zoom(current.scale * factor);
        let ratio = scale / current.scale;
        self.transform = Transform {
            scale,
            translate_x: anchor.x - (anchor.x - current.translate_x) * ratio,
            translate_y: anchor.y - (anchor.y - current.translate_y) * ratio,
        };
    }

    /// Move the content by a viewport-space offset.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.transform.translate_x += dx;
        self.transform.translate_y += dy;
    }

    fn clamp_zoom(&self, scale: f64) -> f64 {
        scale.clamp(self.min_zoom, self.max_zoom)
    }
}

fn check_viewport(width: f64, height: f64) -> Result<()> {
    if width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "viewport must be finite and positive, got {width} x {height}"
        )))
    }
}
