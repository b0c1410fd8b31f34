//! Coordinates and the append-only buffer that stores them.

use geo_traits::{CoordTrait, Dimensions};
use serde::{Deserialize, Serialize};

/// A single coordinate as stored in a [`PointBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    /// A coordinate with only x and y.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Copy any geo-traits coordinate, keeping Z and M ordinates according to its dimension.
    pub fn from_coord(coord: &impl CoordTrait<T = f64>) -> Self {
        let (z, m) = match coord.dim() {
            Dimensions::Xyz | Dimensions::Unknown(3) => (coord.nth(2), None),
            Dimensions::Xym => (None, coord.nth(2)),
            Dimensions::Xyzm | Dimensions::Unknown(4) => (coord.nth(2), coord.nth(3)),
            _ => (None, None),
        };
        Self {
            x: coord.x(),
            y: coord.y(),
            z,
            m,
        }
    }
}

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> Dimensions {
        match (self.z.is_some(), self.m.is_some()) {
            (false, false) => Dimensions::Xy,
            (true, false) => Dimensions::Xyz,
            (false, true) => Dimensions::Xym,
            (true, true) => Dimensions::Xyzm,
        }
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match (n, self.z, self.m) {
            (0, _, _) => self.x,
            (1, _, _) => self.y,
            (2, Some(z), _) => z,
            (2, None, Some(m)) => m,
            (3, Some(_), Some(m)) => m,
            _ => panic!("n out of range for {:?} coordinate: {n}", self.dim()),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

/// An append-only sequence of coordinates with a running count.
///
/// The count is read *before* pushing the coordinates of a figure, which gives the point offset
/// that figure records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointBuffer {
    coords: Vec<Coord>,
    has_z: bool,
    has_m: bool,
}

impl PointBuffer {
    /// Creates a new empty [`PointBuffer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty [`PointBuffer`] with room for `capacity` coordinates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(capacity),
            has_z: false,
            has_m: false,
        }
    }

    /// Reserves capacity for at least `additional` more coordinates.
    pub fn reserve(&mut self, additional: usize) {
        self.coords.reserve(additional);
    }

    /// Append a coordinate.
    #[inline]
    pub fn push(&mut self, coord: Coord) {
        self.has_z |= coord.z.is_some();
        self.has_m |= coord.m.is_some();
        self.coords.push(coord);
    }

    /// Append any geo-traits coordinate.
    #[inline]
    pub fn push_coord(&mut self, coord: &impl CoordTrait<T = f64>) {
        self.push(Coord::from_coord(coord));
    }

    /// The number of coordinates added so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether any coordinate carries a Z ordinate.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Whether any coordinate carries an M ordinate.
    pub fn has_m(&self) -> bool {
        self.has_m
    }

    pub fn get(&self, i: usize) -> Option<&Coord> {
        self.coords.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.coords
    }
}

impl<'a> IntoIterator for &'a PointBuffer {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}
