//! Hivemap Layout
//!
//! Deterministic hexagonal layout for hive maps: one hexagon per item, laid
//! out on an outward spiral from the origin, projected to pixels and fitted
//! into a viewport.
//!
//! # Pieces
//!
//! - [`generate`] / [`Spiral`]: the first N cells of the spiral walk
//! - [`HexGeometry`]: axial-to-pixel projection and hexagon outlines
//! - [`place`]: pair caller items with cells and pixel centers
//! - [`ViewportFitter`]: similarity transform centering the placed content
//!
//! Everything here is a pure function of its arguments. Nothing holds
//! shared mutable state, so every entry point can be called from any thread
//! without synchronization.
//!
//! # Configuration
//!
//! The only tunables are the hexagon radius ([`HexGeometry::new`], default
//! 60) and the target fill fraction ([`ViewportFitter::new`], default 0.85).

mod error;
mod geometry;
mod hex;
mod placement;
mod spiral;
mod viewport;

pub use error::{Error, Result};
pub use geometry::{hex_outline, hex_to_pixel, HexGeometry, PixelPoint};
pub use hex::AxialCoord;
pub use placement::{bounding_box, place, PlacedItem};
pub use spiral::{
    coord_to_spiral, generate, slots_in_ring, spiral_to_coord, total_slots_through, try_generate,
    Spiral, SpiralIndex,
};
pub use viewport::{BoundingBox, FitPolicy, Transform, ViewportFitter};

/// Number of sides (and vertices) of every cell.
pub const HEX_SIDES: usize = 6;

const _: () = assert!(HEX_SIDES == AxialCoord::DIRECTIONS.len());

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_types_are_thread_safe() {
        assert_send_sync::<HexGeometry>();
        assert_send_sync::<ViewportFitter>();
        assert_send_sync::<Spiral>();
        assert_send_sync::<PlacedItem<String>>();
    }

    #[test]
    fn layout_then_fit_centers_the_hive() {
        let geometry = HexGeometry::default();
        let placed = place(0..50, &geometry);
        let bounds = bounding_box(&placed, &geometry);
        let transform = ViewportFitter::default().fit(&bounds, 1280.0, 720.0).unwrap();

        let center = transform.apply(bounds.center());
        assert!((center.x - 640.0).abs() < 1e-9);
        assert!((center.y - 360.0).abs() < 1e-9);
    }

    #[test]
    fn concurrent_generation_agrees() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| generate(1_000)))
            .collect();
        let expected = generate(1_000);
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
