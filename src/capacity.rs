use std::ops::{Add, AddAssign};

use geo_traits::{
    Dimensions, GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait,
};

use crate::util::non_empty_exterior;

/// A counter for the buffer sizes of a [`ShapeBuilder`][crate::builder::ShapeBuilder].
///
/// Counting a geometry yields exactly the number of coordinates, figures and shapes that encoding
/// it appends, so a builder can allocate once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeCapacity {
    pub(crate) coord_capacity: usize,
    pub(crate) figure_capacity: usize,
    pub(crate) shape_capacity: usize,
}

impl ShapeCapacity {
    /// Create a new capacity with known sizes.
    pub fn new(coord_capacity: usize, figure_capacity: usize, shape_capacity: usize) -> Self {
        Self {
            coord_capacity,
            figure_capacity,
            shape_capacity,
        }
    }

    /// Create a new empty capacity.
    pub fn new_empty() -> Self {
        Self::new(0, 0, 0)
    }

    /// Return `true` if the capacity is empty.
    pub fn is_empty(&self) -> bool {
        self.coord_capacity == 0 && self.figure_capacity == 0 && self.shape_capacity == 0
    }

    pub fn coord_capacity(&self) -> usize {
        self.coord_capacity
    }

    pub fn figure_capacity(&self) -> usize {
        self.figure_capacity
    }

    pub fn shape_capacity(&self) -> usize {
        self.shape_capacity
    }

    #[inline]
    pub fn add_point(&mut self, point: &impl PointTrait) {
        self.shape_capacity += 1;
        if point.coord().is_some() {
            self.figure_capacity += 1;
            self.coord_capacity += 1;
        }
    }

    #[inline]
    pub fn add_line_string(&mut self, line_string: &impl LineStringTrait) {
        self.shape_capacity += 1;
        self.add_figure(line_string);
    }

    #[inline]
    pub fn add_polygon(&mut self, polygon: &impl PolygonTrait) {
        self.shape_capacity += 1;
        if let Some(exterior) = non_empty_exterior(polygon) {
            self.add_figure(&exterior);
            // Interior rings are written even when they hold no coordinates
            for interior in polygon.interiors() {
                self.figure_capacity += 1;
                self.coord_capacity += interior.num_coords();
            }
        }
    }

    #[inline]
    pub fn add_multi_point(&mut self, multi_point: &impl MultiPointTrait) {
        self.shape_capacity += 1;
        for point in multi_point.points() {
            self.add_point(&point);
        }
    }

    #[inline]
    pub fn add_multi_line_string(&mut self, multi_line_string: &impl MultiLineStringTrait) {
        self.shape_capacity += 1;
        for line_string in multi_line_string.line_strings() {
            self.add_line_string(&line_string);
        }
    }

    #[inline]
    pub fn add_multi_polygon(&mut self, multi_polygon: &impl MultiPolygonTrait) {
        self.shape_capacity += 1;
        for polygon in multi_polygon.polygons() {
            self.add_polygon(&polygon);
        }
    }

    #[inline]
    pub fn add_geometry_collection(&mut self, collection: &impl GeometryCollectionTrait) {
        self.shape_capacity += 1;
        for geom in collection.geometries() {
            self.add_geometry(&geom);
        }
    }

    /// Add a Geometry to this capacity counter.
    pub fn add_geometry(&mut self, geom: &impl GeometryTrait) {
        use GeometryType::*;
        match geom.as_type() {
            Point(p) => self.add_point(p),
            LineString(ls) => self.add_line_string(ls),
            Polygon(p) => self.add_polygon(p),
            MultiPoint(mp) => self.add_multi_point(mp),
            MultiLineString(ml) => self.add_multi_line_string(ml),
            MultiPolygon(mp) => self.add_multi_polygon(mp),
            GeometryCollection(gc) => self.add_geometry_collection(gc),
            // A rect is a closed ring of 5 coordinates
            Rect(_) => self.add_closed_ring(5),
            Triangle(_) => self.add_closed_ring(4),
            Line(_) => {
                self.shape_capacity += 1;
                self.figure_capacity += 1;
                self.coord_capacity += 2;
            }
        }
    }

    pub fn from_geometry(geom: &impl GeometryTrait) -> Self {
        let mut counter = Self::new_empty();
        counter.add_geometry(geom);
        counter
    }

    pub fn from_geometries<'a>(
        geoms: impl Iterator<Item = Option<&'a (impl GeometryTrait + 'a)>>,
    ) -> Self {
        let mut counter = Self::new_empty();
        for geom in geoms.flatten() {
            counter.add_geometry(geom);
        }
        counter
    }

    /// The number of bytes the three sequences occupy when serialized, excluding headers.
    pub fn num_bytes(&self, dim: Dimensions) -> usize {
        (self.coord_capacity * dim.size() * 8) + (self.figure_capacity * 5) + (self.shape_capacity * 9)
    }

    #[inline]
    fn add_figure(&mut self, ring: &impl LineStringTrait) {
        let num_coords = ring.num_coords();
        if num_coords > 0 {
            self.figure_capacity += 1;
            self.coord_capacity += num_coords;
        }
    }

    #[inline]
    fn add_closed_ring(&mut self, num_coords: usize) {
        self.shape_capacity += 1;
        self.figure_capacity += 1;
        self.coord_capacity += num_coords;
    }
}

impl Default for ShapeCapacity {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Add for ShapeCapacity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut new = self;
        new += rhs;
        new
    }
}

impl AddAssign for ShapeCapacity {
    fn add_assign(&mut self, rhs: Self) {
        self.coord_capacity += rhs.coord_capacity;
        self.figure_capacity += rhs.figure_capacity;
        self.shape_capacity += rhs.shape_capacity;
    }
}
