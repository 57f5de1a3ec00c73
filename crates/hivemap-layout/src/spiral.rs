//! Spiral enumeration of hive cells.
//!
//! Cells are handed out ring by ring, starting at the origin:
//!
//! - Ring 0: just the origin (1 slot)
//! - Ring k > 0: 6k slots, starting at the "bottom left" corner (-k, k)
//!
//! A ring is walked counter-clockwise along its six edges, k unit steps per
//! edge, in the direction order of [`AxialCoord::DIRECTIONS`]. A cell is
//! emitted at the *start* of each step, so the walk never visits a corner
//! twice and consecutive slots inside a ring are always neighbors.
//!
//! The walk order is the layout order. It is never re-sorted by distance:
//! sequential items land on spatially adjacent cells.

use crate::error::{Error, Result};
use crate::AxialCoord;

/// A spiral index: position of a cell in the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u64);

impl SpiralIndex {
    /// Origin slot.
    pub const ORIGIN: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Determine which ring this index falls in.
    ///
    /// Ring 0: index 0
    /// Ring 1: indices 1-6
    /// Ring 2: indices 7-18
    /// Ring n: indices from total_slots_through(n-1) to total_slots_through(n)-1
    pub fn ring(&self) -> u64 {
        if self.0 == 0 {
            return 0;
        }

        // Smallest n with total_slots_through(n) > index. Compared in u128 so
        // indices near u64::MAX do not overflow the slot count.
        let index = u128::from(self.0);
        let mut low = 1u64;
        let mut high = ((self.0 as f64).sqrt() as u64) + 2;

        while low < high {
            let mid = low + (high - low) / 2;
            let m = u128::from(mid);
            if 1 + 3 * m * (m + 1) <= index {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    /// Offset within the ring (0 to 6n-1 for ring n > 0).
    pub fn offset_in_ring(&self) -> u64 {
        let ring = self.ring();
        if ring == 0 {
            return 0;
        }
        self.0 - total_slots_through(ring - 1)
    }
}

impl From<u64> for SpiralIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u64 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

/// Total number of slots in ring n.
#[inline]
pub const fn slots_in_ring(ring: u64) -> u64 {
    if ring == 0 {
        1
    } else {
        6 * ring
    }
}

/// Total slots through ring n (inclusive).
///
/// Formula: 1 + 3n(n+1)
#[inline]
pub const fn total_slots_through(ring: u64) -> u64 {
    1 + 3 * ring * (ring + 1)
}

/// First cell of ring `ring`, where the walk enters it.
#[inline]
const fn ring_start(ring: i64) -> AxialCoord {
    AxialCoord::new(-ring, ring)
}

/// Corner at which edge `edge` of ring `ring` begins.
fn edge_corner(ring: i64, edge: usize) -> AxialCoord {
    AxialCoord::DIRECTIONS[..edge]
        .iter()
        .fold(ring_start(ring), |corner, dir| corner + *dir * ring)
}

/// Iterator over spiral coordinates.
///
/// Walks the rings directly, so each step is O(1).
#[derive(Debug, Clone)]
pub struct Spiral {
    next: u64,
    limit: Option<u64>,
    ring: u64,
    edge: usize,
    step: u64,
    cursor: AxialCoord,
}

impl Spiral {
    /// Create an infinite spiral iterator starting from origin.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create a spiral iterator that yields `count` coordinates.
    pub fn take_slots(count: u64) -> Self {
        Self::with_limit(Some(count))
    }

    fn with_limit(limit: Option<u64>) -> Self {
        Self {
            next: 0,
            limit,
            ring: 0,
            edge: 0,
            step: 0,
            cursor: AxialCoord::ORIGIN,
        }
    }

    fn advance(&mut self) {
        if self.ring == 0 {
            self.ring = 1;
            self.cursor = ring_start(1);
            return;
        }

        self.cursor = self.cursor + AxialCoord::DIRECTIONS[self.edge];
        self.step += 1;
        if self.step == self.ring {
            self.step = 0;
            self.edge += 1;
            if self.edge == AxialCoord::DIRECTIONS.len() {
                self.edge = 0;
                self.ring += 1;
                self.cursor = ring_start(self.ring as i64);
            }
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Spiral {
    type Item = AxialCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.next >= limit {
                return None;
            }
        }

        let coord = self.cursor;
        self.next += 1;
        self.advance();
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.next) as usize;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

/// The first `count` cells of the spiral, in walk order.
///
/// ```
/// use hivemap_layout::{generate, AxialCoord};
///
/// let cells = generate(7);
/// assert_eq!(cells[0], AxialCoord::ORIGIN);
/// assert_eq!(cells[1], AxialCoord::new(-1, 1));
/// assert_eq!(cells.len(), 7);
/// ```
pub fn generate(count: usize) -> Vec<AxialCoord> {
    Spiral::take_slots(count as u64).collect()
}

/// Like [`generate`], for counts that arrive as signed integers.
pub fn try_generate(count: i64) -> Result<Vec<AxialCoord>> {
    let count = usize::try_from(count)
        .map_err(|_| Error::invalid("count", format!("must be >= 0, got {count}")))?;
    Ok(generate(count))
}

/// Convert a spiral index to its cell.
pub fn spiral_to_coord(index: SpiralIndex) -> AxialCoord {
    if index.0 == 0 {
        return AxialCoord::ORIGIN;
    }

    let ring = index.ring();
    let offset = index.offset_in_ring();
    let edge = (offset / ring) as usize;
    let pos_on_edge = (offset % ring) as i64;

    edge_corner(ring as i64, edge) + AxialCoord::DIRECTIONS[edge] * pos_on_edge
}

/// Convert a cell to its spiral index.
///
/// Inverse of [`spiral_to_coord`]; every cell has exactly one index.
pub fn coord_to_spiral(coord: AxialCoord) -> SpiralIndex {
    if coord == AxialCoord::ORIGIN {
        return SpiralIndex::ORIGIN;
    }

    let ring = coord.ring();
    let base = total_slots_through(ring - 1);

    for (edge, dir) in AxialCoord::DIRECTIONS.iter().enumerate() {
        let delta = coord - edge_corner(ring as i64, edge);
        // Direction components are -1, 0 or 1, so multiplying divides.
        let pos = if dir.q != 0 { delta.q * dir.q } else { delta.r * dir.r };
        if (0..ring as i64).contains(&pos) && *dir * pos == delta {
            return SpiralIndex(base + edge as u64 * ring + pos as u64);
        }
    }

    unreachable!("every cell of ring {ring} lies on one of its six edges: {coord}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn slots_in_ring_formula() {
        assert_eq!(slots_in_ring(0), 1);
        assert_eq!(slots_in_ring(1), 6);
        assert_eq!(slots_in_ring(2), 12);
        assert_eq!(slots_in_ring(10), 60);
    }

    #[test]
    fn total_slots_formula() {
        assert_eq!(total_slots_through(0), 1);
        assert_eq!(total_slots_through(1), 7);
        assert_eq!(total_slots_through(2), 19);
        assert_eq!(total_slots_through(3), 37);
        assert_eq!(total_slots_through(10), 331);
    }

    #[test]
    fn spiral_index_ring() {
        assert_eq!(SpiralIndex(0).ring(), 0);
        for i in 1..=6 {
            assert_eq!(SpiralIndex(i).ring(), 1, "index {} should be ring 1", i);
        }
        for i in 7..=18 {
            assert_eq!(SpiralIndex(i).ring(), 2, "index {} should be ring 2", i);
        }
        for i in 19..=36 {
            assert_eq!(SpiralIndex(i).ring(), 3, "index {} should be ring 3", i);
        }
    }

    #[test]
    fn empty_for_zero() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn single_is_origin() {
        assert_eq!(generate(1), vec![AxialCoord::ORIGIN]);
    }

    #[test]
    fn first_ring_walk_order() {
        let expected: Vec<AxialCoord> = [(0, 0), (-1, 1), (0, 1), (1, 0), (1, -1), (0, -1), (-1, 0)]
            .into_iter()
            .map(AxialCoord::from)
            .collect();
        assert_eq!(generate(7), expected);
    }

    #[test]
    fn second_ring_starts_bottom_left() {
        let cells = generate(19);
        assert_eq!(cells[7], AxialCoord::new(-2, 2));
        assert_eq!(cells[8], AxialCoord::new(-1, 2));
        assert_eq!(cells[9], AxialCoord::new(0, 2));
        // Second edge turns northeast at the corner (0, 2).
        assert_eq!(cells[10], AxialCoord::new(1, 1));
        assert_eq!(cells[18], AxialCoord::new(-2, 1));
    }

    #[test]
    fn negative_count_is_invalid() {
        let err = try_generate(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "count", .. }));
        assert_eq!(try_generate(3).unwrap(), generate(3));
    }

    #[test]
    fn walk_stays_on_its_ring() {
        for (i, coord) in Spiral::take_slots(total_slots_through(6)).enumerate() {
            assert_eq!(coord.ring(), SpiralIndex(i as u64).ring(), "slot {i} at {coord}");
        }
    }

    #[test]
    fn consecutive_slots_in_a_ring_are_neighbors() {
        let cells = generate(total_slots_through(5) as usize);
        for pair in cells[1..].windows(2) {
            if pair[0].ring() == pair[1].ring() {
                assert!(pair[0].is_neighbor(&pair[1]), "{} -> {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn iterator_matches_index_conversion() {
        for (i, coord) in Spiral::take_slots(500).enumerate() {
            assert_eq!(coord, spiral_to_coord(SpiralIndex(i as u64)));
        }
    }

    #[test]
    fn spiral_bijection_ring_0_to_4() {
        for i in 0..total_slots_through(4) {
            let coord = spiral_to_coord(SpiralIndex(i));
            assert_eq!(coord_to_spiral(coord).0, i, "round-trip failed for {i}: {coord}");
        }
    }

    #[test]
    fn ring_of_huge_index() {
        let ring = SpiralIndex(u64::MAX).ring();
        assert!(u128::from(total_slots_through(ring - 1)) <= u128::from(u64::MAX));
        assert!(1 + 3 * u128::from(ring) * (u128::from(ring) + 1) > u128::from(u64::MAX));
        assert!(SpiralIndex(u64::MAX).offset_in_ring() < slots_in_ring(ring));
    }

    #[test]
    fn size_hint_is_exact() {
        let mut spiral = Spiral::take_slots(10);
        assert_eq!(spiral.size_hint(), (10, Some(10)));
        spiral.next();
        assert_eq!(spiral.size_hint(), (9, Some(9)));
    }

    #[test]
    fn large_ring_formula() {
        assert_eq!(total_slots_through(1000), 3_003_001);
    }

    proptest! {
        #[test]
        fn exact_count_all_distinct(count in 0usize..2_000) {
            let cells = generate(count);
            prop_assert_eq!(cells.len(), count);
            let unique: HashSet<_> = cells.iter().copied().collect();
            prop_assert_eq!(unique.len(), count);
            if count > 0 {
                prop_assert_eq!(cells[0], AxialCoord::ORIGIN);
            }
        }

        #[test]
        fn shorter_layout_is_prefix(a in 0usize..800, b in 0usize..800) {
            let (short, long) = (a.min(b), a.max(b));
            let long_cells = generate(long);
            prop_assert_eq!(&generate(short)[..], &long_cells[..short]);
        }

        #[test]
        fn any_cell_round_trips(q in -200i64..200, r in -200i64..200) {
            let coord = AxialCoord::new(q, r);
            prop_assert_eq!(spiral_to_coord(coord_to_spiral(coord)), coord);
        }

        #[test]
        fn layout_fills_rings_without_gaps(rings in 0u64..12) {
            let cells: HashSet<_> = generate(total_slots_through(rings) as usize).into_iter().collect();
            let n = rings as i64;
            for q in -n..=n {
                for r in -n..=n {
                    let coord = AxialCoord::new(q, r);
                    if coord.ring() <= rings {
                        prop_assert!(cells.contains(&coord), "gap at {}", coord);
                    }
                }
            }
        }
    }
}
