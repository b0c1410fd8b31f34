use geo_traits::{CoordTrait, LineStringTrait};

use crate::capacity::ShapeCapacity;
use crate::coord::{Coord, PointBuffer};
use crate::datatypes::{FigureAttribute, GeometryKind};
use crate::error::Result;
use crate::shape::{Figure, Shape};
use crate::util::to_offset;
use crate::writer::{mssql_geometry_size, write_mssql_geometry};

/// The three append-only sequences a single encode call writes into.
///
/// Shapes, figures and points can only be pushed, never changed or removed, so every offset read
/// from the builder stays valid for the rest of the encode. Converting a [`ShapeBuilder`] into a
/// [`MssqlGeometry`] is `O(1)`.
#[derive(Debug, Default)]
pub struct ShapeBuilder {
    points: PointBuffer,
    figures: Vec<Figure>,
    shapes: Vec<Shape>,

    /// Nesting depth of the geometry currently being encoded
    pub(crate) depth: usize,
}

impl ShapeBuilder {
    /// Creates a new empty [`ShapeBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`ShapeBuilder`] with the given capacity.
    pub fn with_capacity(capacity: ShapeCapacity) -> Self {
        Self {
            points: PointBuffer::with_capacity(capacity.coord_capacity),
            figures: Vec::with_capacity(capacity.figure_capacity),
            shapes: Vec::with_capacity(capacity.shape_capacity),
            depth: 0,
        }
    }

    /// Reserves capacity for at least `additional` more coordinates, figures and shapes.
    pub fn reserve(&mut self, additional: ShapeCapacity) {
        self.points.reserve(additional.coord_capacity);
        self.figures.reserve(additional.figure_capacity);
        self.shapes.reserve(additional.shape_capacity);
    }

    pub fn points(&self) -> &PointBuffer {
        &self.points
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The index the next pushed figure will occupy.
    #[inline]
    pub fn next_figure_offset(&self) -> Result<i32> {
        to_offset(self.figures.len())
    }

    /// The index the next pushed point will occupy.
    #[inline]
    pub fn next_point_offset(&self) -> Result<i32> {
        to_offset(self.points.count())
    }

    /// Add a new shape to the end of the shape list, returning its index.
    ///
    /// # Errors
    ///
    /// This function errors iff the new shape's index does not fit in an `i32`.
    #[inline]
    pub fn push_shape(
        &mut self,
        parent_offset: i32,
        figure_offset: i32,
        kind: GeometryKind,
    ) -> Result<i32> {
        let shape_offset = to_offset(self.shapes.len())?;
        self.shapes
            .push(Shape::new(parent_offset, figure_offset, kind));
        Ok(shape_offset)
    }

    /// Add a new figure to the end of the figure list.
    #[inline]
    pub fn push_figure(&mut self, attribute: FigureAttribute, point_offset: i32) {
        self.figures.push(Figure::new(attribute, point_offset));
    }

    /// Add a coordinate to the end of the point buffer.
    #[inline]
    pub fn push_coord(&mut self, coord: &impl CoordTrait<T = f64>) {
        self.points.push_coord(coord);
    }

    /// Add the coordinates of `ring` as one figure with the given attribute.
    ///
    /// The figure's point offset is taken before any coordinate of the ring is pushed.
    pub fn push_ring(
        &mut self,
        attribute: FigureAttribute,
        ring: &impl LineStringTrait<T = f64>,
    ) -> Result<()> {
        let point_offset = self.next_point_offset()?;
        for coord in ring.coords() {
            self.points.push_coord(&coord);
        }
        self.push_figure(attribute, point_offset);
        Ok(())
    }

    /// Consume the builder and convert to an immutable [`MssqlGeometry`].
    pub fn finish(self) -> MssqlGeometry {
        MssqlGeometry {
            srid: 0,
            points: self.points,
            figures: self.figures,
            shapes: self.shapes,
        }
    }
}

/// A geometry flattened into SQL Server's shapes, figures and points.
#[derive(Debug, Clone, PartialEq)]
pub struct MssqlGeometry {
    srid: i32,
    points: PointBuffer,
    figures: Vec<Figure>,
    shapes: Vec<Shape>,
}

impl MssqlGeometry {
    pub fn srid(&self) -> i32 {
        self.srid
    }

    pub fn with_srid(self, srid: i32) -> Self {
        Self { srid, ..self }
    }

    pub fn points(&self) -> &PointBuffer {
        &self.points
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn has_z(&self) -> bool {
        self.points.has_z()
    }

    pub fn has_m(&self) -> bool {
        self.points.has_m()
    }

    /// The coordinates of the figure at index `i`.
    pub fn figure_points(&self, i: usize) -> Option<&[Coord]> {
        let start = usize::try_from(self.figures.get(i)?.point_offset).ok()?;
        let end = match self.figures.get(i + 1) {
            Some(next) => usize::try_from(next.point_offset).ok()?,
            None => self.points.count(),
        };
        self.points.as_slice().get(start..end)
    }

    /// A lone, non-empty point.
    pub fn is_single_point(&self) -> bool {
        self.is_single_figure(GeometryKind::Point, 1)
    }

    /// A lone line string with exactly two points.
    pub fn is_single_line_segment(&self) -> bool {
        self.is_single_figure(GeometryKind::LineString, 2)
    }

    /// Serialize into SQL Server's native binary format.
    pub fn to_bytes(&self, valid: bool) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(mssql_geometry_size(self));
        self.write(&mut buf, valid)?;
        Ok(buf)
    }

    /// Serialize into SQL Server's native binary format, writing to `writer`.
    pub fn write<W: std::io::Write>(&self, writer: W, valid: bool) -> Result<()> {
        write_mssql_geometry(writer, self, valid)
    }

    fn is_single_figure(&self, kind: GeometryKind, num_points: usize) -> bool {
        matches!(self.shapes.as_slice(), [shape] if shape.kind == kind)
            && self.figures.len() == 1
            && self.points.count() == num_points
    }
}
