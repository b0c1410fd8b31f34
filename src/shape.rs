//! Figure and shape records of the flattened geometry tree.

use serde::{Deserialize, Serialize};

use crate::datatypes::{FigureAttribute, GeometryKind};

/// A run of points in the [`PointBuffer`][crate::coord::PointBuffer].
///
/// The run starts at `point_offset` and extends to the next figure's offset, or to the end of the
/// buffer for the last figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    /// Whether the run is a stroke, an exterior ring or an interior ring.
    pub attribute: FigureAttribute,
    /// Index of the figure's first point.
    pub point_offset: i32,
}

impl Figure {
    /// Create a figure starting at `point_offset`.
    pub fn new(attribute: FigureAttribute, point_offset: i32) -> Self {
        Self {
            attribute,
            point_offset,
        }
    }
}

/// One node of the flattened geometry tree.
///
/// ```
/// use geoarrow_mssql::datatypes::GeometryKind;
/// use geoarrow_mssql::shape::Shape;
///
/// let root = Shape::new(-1, -1, GeometryKind::GeometryCollection);
/// assert!(root.is_root() && root.is_empty());
/// assert_eq!(Shape::new(0, 2, GeometryKind::Point).kind, GeometryKind::Point);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Index of the enclosing shape, or `-1` for the root.
    pub parent_offset: i32,
    /// Index of this shape's first figure, or `-1` if it has none of its own.
    pub figure_offset: i32,
    /// The geometry kind of this node.
    pub kind: GeometryKind,
}

impl Shape {
    /// Create a shape under `parent_offset` whose figures start at `figure_offset`.
    pub fn new(parent_offset: i32, figure_offset: i32, kind: GeometryKind) -> Self {
        Self {
            parent_offset,
            figure_offset,
            kind,
        }
    }

    /// Whether this shape is the root of the tree.
    pub fn is_root(&self) -> bool {
        self.parent_offset == -1
    }

    /// Whether this shape records no figures.
    pub fn is_empty(&self) -> bool {
        self.figure_offset == -1
    }
}
