//! Assigning spiral cells to caller items.
//!
//! The i-th item always gets the i-th cell of the spiral. Placement looks
//! at positions only; what an item contains never affects where it lands.

use crate::{AxialCoord, BoundingBox, HexGeometry, PixelPoint, Spiral};

/// A caller item together with its cell and pixel center.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem<T> {
    /// Position of the item in the caller's ordering.
    pub index: usize,
    pub item: T,
    pub coord: AxialCoord,
    pub pixel: PixelPoint,
}

impl<T> PlacedItem<T> {
    /// Swap the payload, keeping the position.
    pub fn map<U, F>(self, f: F) -> PlacedItem<U>
    where
        F: FnOnce(T) -> U,
    {
        PlacedItem {
            index: self.index,
            item: f(self.item),
            coord: self.coord,
            pixel: self.pixel,
        }
    }
}

/// Place every item on the spiral, in input order.
pub fn place<T, I>(items: I, geometry: &HexGeometry) -> Vec<PlacedItem<T>>
where
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .zip(Spiral::new())
        .enumerate()
        .map(|(index, (item, coord))| PlacedItem {
            index,
            item,
            coord,
            pixel: geometry.to_pixel(coord),
        })
        .collect()
}

/// Bounds of every placed hexagon, outlines included.
///
/// Using centers alone would clip the outermost hexagons.
pub fn bounding_box<T>(placed: &[PlacedItem<T>], geometry: &HexGeometry) -> BoundingBox {
    BoundingBox::from_points(
        placed
            .iter()
            .flat_map(|p| geometry.outline_at(p.pixel)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn nothing_to_place() {
        let placed = place(Vec::<u8>::new(), &HexGeometry::default());
        assert!(placed.is_empty());
        assert!(bounding_box(&placed, &HexGeometry::default()).is_empty());
    }

    #[test]
    fn ith_item_gets_ith_cell() {
        let geometry = HexGeometry::default();
        let items = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
        let placed = place(items, &geometry);
        let cells = generate(items.len());

        assert_eq!(placed.len(), items.len());
        for (i, p) in placed.iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.item, items[i]);
            assert_eq!(p.coord, cells[i]);
            assert_eq!(p.pixel, geometry.to_pixel(cells[i]));
        }
    }

    #[test]
    fn content_does_not_affect_position() {
        let geometry = HexGeometry::default();
        let a: Vec<_> = place(["x"; 5], &geometry).into_iter().map(|p| p.coord).collect();
        let b: Vec<_> = place([10, 20, 30, 40, 50], &geometry).into_iter().map(|p| p.coord).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn single_hexagon_bounds_are_its_outline() {
        let geometry = HexGeometry::new(60.0).unwrap();
        let bounds = bounding_box(&place([()], &geometry), &geometry);
        let half_width = geometry.width() / 2.0;
        assert!((bounds.min_x + half_width).abs() < 1e-9);
        assert!((bounds.max_x - half_width).abs() < 1e-9);
        assert!((bounds.min_y + 60.0).abs() < 1e-9);
        assert!((bounds.max_y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_cover_every_vertex() {
        let geometry = HexGeometry::new(25.0).unwrap();
        let placed = place(0..40, &geometry);
        let bounds = bounding_box(&placed, &geometry);
        for p in &placed {
            for v in geometry.outline_at(p.pixel) {
                assert!(bounds.contains(v));
            }
        }
    }

    #[test]
    fn map_keeps_position() {
        let placed = place(["risk"], &HexGeometry::default()).remove(0);
        let mapped = placed.clone().map(str::len);
        assert_eq!(mapped.item, 4);
        assert_eq!(mapped.coord, placed.coord);
        assert_eq!(mapped.index, placed.index);
    }
}
