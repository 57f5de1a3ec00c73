//! Hexagonal cells addressed by axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. Two values are stored while the hexagonal symmetry
//! stays available through `s()`.

use std::ops::{Add, Mul, Neg, Sub};

/// A cell of the hive, in axial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    /// First axial coordinate
    pub q: i64,
    /// Second axial coordinate
    pub r: i64,
}

impl AxialCoord {
    /// Center of the hive. Always the first cell handed out.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Hexagonal distance between two cells.
    ///
    /// max(|dq|, |dr|, |ds|) where ds = -dq - dr
    pub fn distance(&self, other: &Self) -> u64 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = ((self.q - other.q) + (self.r - other.r)).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// Ring number in the spiral (0 = origin, 1 = first ring, etc.)
    pub fn ring(&self) -> u64 {
        self.distance(&Self::ORIGIN)
    }

    /// The six unit steps, in the order the spiral walks a ring's edges.
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: 0 },  // East
        Self { q: 1, r: -1 }, // Northeast
        Self { q: 0, r: -1 }, // Northwest
        Self { q: -1, r: 0 }, // West
        Self { q: -1, r: 1 }, // Southwest
        Self { q: 0, r: 1 },  // Southeast
    ];

    /// Get all six neighbors.
    pub fn neighbors(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_neighbor(&self, other: &Self) -> bool {
        self.distance(other) == 1
    }
}

impl Add for AxialCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for AxialCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for AxialCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl Mul<i64> for AxialCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i64) -> Self {
        Self {
            q: self.q * k,
            r: self.r * k,
        }
    }
}

impl From<(i64, i64)> for AxialCoord {
    fn from((q, r): (i64, i64)) -> Self {
        Self { q, r }
    }
}

impl std::fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
