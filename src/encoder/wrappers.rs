//! Wrappers around `RectTrait`, `TriangleTrait`, and `LineTrait` to implement
//! `PolygonTrait`, `PolygonTrait` and `LineStringTrait` traits, respectively.
//!
//! SQL Server has no shape kind for these, so they are encoded as a one-ring polygon or a two-point
//! line string.

use geo_traits::{
    CoordTrait, Dimensions, GeometryTrait, GeometryType, LineStringTrait, LineTrait, PolygonTrait,
    RectTrait, TriangleTrait, UnimplementedGeometryCollection, UnimplementedLine,
    UnimplementedLineString, UnimplementedMultiLineString, UnimplementedMultiPoint,
    UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon, UnimplementedRect,
    UnimplementedTriangle,
};

use crate::coord::Coord;
use crate::error::{MssqlError, Result};

/// `GeometryTrait` for a wrapper that presents itself as a single polygon or line string.
macro_rules! impl_geometry_trait {
    (Polygon) => {
        impl_geometry_trait!(@impl Polygon, Self, UnimplementedLineString<f64>);
    };
    (LineString) => {
        impl_geometry_trait!(@impl LineString, UnimplementedPolygon<f64>, Self);
    };
    (@impl $variant:ident, $polygon:ty, $line_string:ty) => {
        type T = f64;
        type PointType<'b>
            = UnimplementedPoint<f64>
        where
            Self: 'b;
        type LineStringType<'b>
            = $line_string
        where
            Self: 'b;
        type PolygonType<'b>
            = $polygon
        where
            Self: 'b;
        type MultiPointType<'b>
            = UnimplementedMultiPoint<f64>
        where
            Self: 'b;
        type MultiLineStringType<'b>
            = UnimplementedMultiLineString<f64>
        where
            Self: 'b;
        type MultiPolygonType<'b>
            = UnimplementedMultiPolygon<f64>
        where
            Self: 'b;
        type GeometryCollectionType<'b>
            = UnimplementedGeometryCollection<f64>
        where
            Self: 'b;
        type RectType<'b>
            = UnimplementedRect<f64>
        where
            Self: 'b;
        type TriangleType<'b>
            = UnimplementedTriangle<f64>
        where
            Self: 'b;
        type LineType<'b>
            = UnimplementedLine<f64>
        where
            Self: 'b;

        fn dim(&self) -> Dimensions {
            self.0.dim()
        }

        fn as_type(
            &self,
        ) -> GeometryType<
            '_,
            Self::PointType<'_>,
            Self::LineStringType<'_>,
            Self::PolygonType<'_>,
            Self::MultiPointType<'_>,
            Self::MultiLineStringType<'_>,
            Self::MultiPolygonType<'_>,
            Self::GeometryCollectionType<'_>,
            Self::RectType<'_>,
            Self::TriangleType<'_>,
            Self::LineType<'_>,
        > {
            GeometryType::$variant(self)
        }
    };
}

pub(crate) struct RectWrapper<'a, R: RectTrait<T = f64>>(&'a R);

impl<'a, R: RectTrait<T = f64>> RectWrapper<'a, R> {
    pub(crate) fn try_new(rect: &'a R) -> Result<Self> {
        match rect.dim() {
            Dimensions::Xy | Dimensions::Unknown(2) => Ok(Self(rect)),
            dim => Err(MssqlError::General(format!(
                "Only 2d rect supported when encoding as polygon, got {dim:?}"
            ))),
        }
    }

    fn corner(&self, x_from_max: bool, y_from_max: bool) -> Coord {
        let min = self.0.min();
        let max = self.0.max();
        Coord::xy(
            if x_from_max { max.x() } else { min.x() },
            if y_from_max { max.y() } else { min.y() },
        )
    }
}

impl<R: RectTrait<T = f64>> GeometryTrait for RectWrapper<'_, R> {
    impl_geometry_trait!(Polygon);
}

impl<R: RectTrait<T = f64>> PolygonTrait for RectWrapper<'_, R> {
    type RingType<'a>
        = &'a RectWrapper<'a, R>
    where
        Self: 'a;

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        Some(self)
    }

    fn num_interiors(&self) -> usize {
        0
    }

    unsafe fn interior_unchecked(&self, _: usize) -> Self::RingType<'_> {
        panic!("interior_unchecked called on a rect")
    }
}

impl<'a, R: RectTrait<T = f64>> GeometryTrait for &'a RectWrapper<'a, R> {
    impl_geometry_trait!(LineString);
}

impl<'a, R: RectTrait<T = f64>> LineStringTrait for &'a RectWrapper<'a, R> {
    type CoordType<'b>
        = Coord
    where
        Self: 'b;

    fn num_coords(&self) -> usize {
        5
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        // lower left, upper left, upper right, lower right, closing at lower left
        match i {
            0 | 4 => self.corner(false, false),
            1 => self.corner(false, true),
            2 => self.corner(true, true),
            3 => self.corner(true, false),
            _ => panic!("out of range for rect coord: {i}"),
        }
    }
}

pub(crate) struct TriangleWrapper<'a, Tri: TriangleTrait<T = f64>>(pub(crate) &'a Tri);

impl<Tri: TriangleTrait<T = f64>> GeometryTrait for TriangleWrapper<'_, Tri> {
    impl_geometry_trait!(Polygon);
}

impl<Tri: TriangleTrait<T = f64>> PolygonTrait for TriangleWrapper<'_, Tri> {
    type RingType<'a>
        = &'a TriangleWrapper<'a, Tri>
    where
        Self: 'a;

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        Some(self)
    }

    fn num_interiors(&self) -> usize {
        0
    }

    unsafe fn interior_unchecked(&self, _: usize) -> Self::RingType<'_> {
        panic!("interior_unchecked called on a triangle")
    }
}

impl<'a, Tri: TriangleTrait<T = f64>> GeometryTrait for &'a TriangleWrapper<'a, Tri> {
    impl_geometry_trait!(LineString);
}

impl<'a, Tri: TriangleTrait<T = f64>> LineStringTrait for &'a TriangleWrapper<'a, Tri> {
    type CoordType<'b>
        = <Tri as TriangleTrait>::CoordType<'b>
    where
        Self: 'b;

    fn num_coords(&self) -> usize {
        4
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        match i {
            0 | 3 => self.0.first(),
            1 => self.0.second(),
            2 => self.0.third(),
            _ => panic!("out of range for triangle ring: {i}"),
        }
    }
}

pub(crate) struct LineWrapper<'a, L: LineTrait<T = f64>>(pub(crate) &'a L);

impl<L: LineTrait<T = f64>> GeometryTrait for LineWrapper<'_, L> {
    impl_geometry_trait!(LineString);
}

impl<L: LineTrait<T = f64>> LineStringTrait for LineWrapper<'_, L> {
    type CoordType<'b>
        = <L as LineTrait>::CoordType<'b>
    where
        Self: 'b;

    fn num_coords(&self) -> usize {
        2
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        match i {
            0 => self.0.start(),
            1 => self.0.end(),
            _ => panic!("out of range for line coord: {i}"),
        }
    }
}
