//! Enums shared by the data model and the wire format.

use geo_traits::{GeometryTrait, GeometryType};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// The kind of a [`Shape`][crate::shape::Shape].
///
/// Discriminants are the OpenGIS type codes, which is also how the kind is stored on the wire.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryKind {
    /// All geometry kinds, in wire order.
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// The kind a geometry is encoded as.
    ///
    /// `Rect` and `Triangle` are encoded as polygons and `Line` as a line string.
    pub fn of(geom: &impl GeometryTrait) -> Self {
        use GeometryType::*;
        match geom.as_type() {
            Point(_) => Self::Point,
            LineString(_) | Line(_) => Self::LineString,
            Polygon(_) | Rect(_) | Triangle(_) => Self::Polygon,
            MultiPoint(_) => Self::MultiPoint,
            MultiLineString(_) => Self::MultiLineString,
            MultiPolygon(_) => Self::MultiPolygon,
            GeometryCollection(_) => Self::GeometryCollection,
        }
    }

    /// Whether shapes of this kind only hold other shapes.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::MultiPoint | Self::MultiLineString | Self::MultiPolygon | Self::GeometryCollection
        )
    }
}

/// The role of a [`Figure`][crate::shape::Figure] within its shape.
///
/// Discriminants are the attribute bytes of serialization format version 1.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum FigureAttribute {
    InteriorRing = 0,
    Stroke = 1,
    ExteriorRing = 2,
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::{line_string, point, Geometry, Line, Rect};

    #[test]
    fn kind_of_geo_types() {
        let p = Geometry::Point(point!(x: 1., y: 2.));
        assert_eq!(GeometryKind::of(&p), GeometryKind::Point);

        let ls = Geometry::LineString(line_string![(x: 0., y: 0.), (x: 1., y: 1.)]);
        assert_eq!(GeometryKind::of(&ls), GeometryKind::LineString);

        let rect = Geometry::Rect(Rect::new((0., 0.), (1., 1.)));
        assert_eq!(GeometryKind::of(&rect), GeometryKind::Polygon);

        let line = Geometry::Line(Line::new((0., 0.), (1., 1.)));
        assert_eq!(GeometryKind::of(&line), GeometryKind::LineString);
    }

    #[test]
    fn wire_values() {
        assert_eq!(u8::from(GeometryKind::GeometryCollection), 7);
        assert_eq!(GeometryKind::try_from(3u8).unwrap(), GeometryKind::Polygon);
        assert!(GeometryKind::try_from(8u8).is_err());
        assert_eq!(u8::from(FigureAttribute::ExteriorRing), 2);
        assert_eq!(u8::from(FigureAttribute::InteriorRing), 0);
    }

    #[test]
    fn containers() {
        let containers: Vec<_> = GeometryKind::ALL
            .into_iter()
            .filter(|kind| kind.is_container())
            .collect();
        assert_eq!(containers.len(), 4);
        assert!(!GeometryKind::Polygon.is_container());
    }
}
