use geo_traits::PolygonTrait;

use crate::builder::ShapeBuilder;
use crate::datatypes::{FigureAttribute, GeometryKind};
use crate::error::Result;
use crate::util::non_empty_exterior;

/// Encode a Polygon as one shape holding its exterior ring, then each interior ring in order.
///
/// Rings are written as they are, whether or not they are closed or valid.
pub(crate) fn encode_polygon(
    geom: &impl PolygonTrait<T = f64>,
    parent_offset: i32,
    builder: &mut ShapeBuilder,
) -> Result<()> {
    let Some(exterior) = non_empty_exterior(geom) else {
        builder.push_shape(parent_offset, -1, GeometryKind::Polygon)?;
        return Ok(());
    };

    // The exterior ring becomes the first figure of this shape
    let figure_offset = builder.next_figure_offset()?;
    builder.push_shape(parent_offset, figure_offset, GeometryKind::Polygon)?;

    builder.push_ring(FigureAttribute::ExteriorRing, &exterior)?;
    for interior in geom.interiors() {
        builder.push_ring(FigureAttribute::InteriorRing, &interior)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coord;
    use crate::encoder::{EncoderSet, ShapeEncoder};
    use crate::error::MssqlError;
    use crate::shape::{Figure, Shape};
    use crate::test::polygon::{empty_polygon, p_two_holes, square, square_with_hole};
    use geo_types::{point, Geometry, Rect, Triangle};

    #[test]
    fn exterior_only() {
        let encoded = EncoderSet::default()
            .encode_geometry(&Geometry::Polygon(square()))
            .unwrap();

        assert_eq!(encoded.shapes(), &[Shape::new(-1, 0, GeometryKind::Polygon)]);
        assert_eq!(
            encoded.figures(),
            &[Figure::new(FigureAttribute::ExteriorRing, 0)]
        );
        assert_eq!(
            encoded.points().as_slice(),
            &[
                Coord::xy(0., 0.),
                Coord::xy(0., 4.),
                Coord::xy(4., 4.),
                Coord::xy(4., 0.),
                Coord::xy(0., 0.),
            ]
        );
    }

    #[test]
    fn with_interior_ring() {
        let encoded = EncoderSet::default()
            .encode_geometry(&Geometry::Polygon(square_with_hole()))
            .unwrap();

        assert_eq!(encoded.shapes(), &[Shape::new(-1, 0, GeometryKind::Polygon)]);
        assert_eq!(
            encoded.figures(),
            &[
                Figure::new(FigureAttribute::ExteriorRing, 0),
                Figure::new(FigureAttribute::InteriorRing, 5),
            ]
        );
        assert_eq!(encoded.points().count(), 10);
        assert_eq!(encoded.figure_points(1).unwrap()[0], Coord::xy(1., 1.));
    }

    #[test]
    fn interior_rings_keep_their_order() {
        let encoded = EncoderSet::default()
            .encode_geometry(&Geometry::Polygon(p_two_holes()))
            .unwrap();

        let attributes: Vec<_> = encoded.figures().iter().map(|f| f.attribute).collect();
        assert_eq!(
            attributes,
            [
                FigureAttribute::ExteriorRing,
                FigureAttribute::InteriorRing,
                FigureAttribute::InteriorRing,
            ]
        );
        assert_eq!(encoded.figure_points(1).unwrap()[0], Coord::xy(1., 1.));
        assert_eq!(encoded.figure_points(2).unwrap()[0], Coord::xy(5., 5.));
    }

    #[test]
    fn empty() {
        let encoded = EncoderSet::default()
            .encode_geometry(&Geometry::Polygon(empty_polygon()))
            .unwrap();

        assert_eq!(encoded.shapes(), &[Shape::new(-1, -1, GeometryKind::Polygon)]);
        assert!(encoded.figures().is_empty());
        assert!(encoded.points().is_empty());
    }

    #[test]
    fn figure_offset_points_at_exterior_start() {
        // Two polygons in one builder: the second starts part way into every buffer
        let mut builder = ShapeBuilder::new();
        encode_polygon(&square_with_hole(), -1, &mut builder).unwrap();
        let points_before = builder.points().count();
        encode_polygon(&square(), 0, &mut builder).unwrap();

        let shape = builder.shapes()[1];
        let figure = builder.figures()[shape.figure_offset as usize];
        assert_eq!(figure.attribute, FigureAttribute::ExteriorRing);
        assert_eq!(figure.point_offset as usize, points_before);
    }

    #[test]
    fn rect_and_triangle() {
        let rect = Geometry::Rect(Rect::new((0., 0.), (2., 1.)));
        let encoded = EncoderSet::default().encode_geometry(&rect).unwrap();
        assert_eq!(encoded.shapes(), &[Shape::new(-1, 0, GeometryKind::Polygon)]);
        assert_eq!(
            encoded.points().as_slice(),
            &[
                Coord::xy(0., 0.),
                Coord::xy(0., 1.),
                Coord::xy(2., 1.),
                Coord::xy(2., 0.),
                Coord::xy(0., 0.),
            ]
        );

        let triangle = Geometry::Triangle(Triangle::new(
            (0., 0.).into(),
            (1., 0.).into(),
            (0., 1.).into(),
        ));
        let encoded = EncoderSet::default().encode_geometry(&triangle).unwrap();
        assert_eq!(encoded.points().count(), 4);
        assert_eq!(encoded.points().get(3), encoded.points().get(0));
    }

    #[test]
    fn rejects_other_kinds() {
        let mut builder = ShapeBuilder::new();
        let err = ShapeEncoder::Polygon
            .encode(
                &EncoderSet::default(),
                &Geometry::Point(point!(x: 0., y: 0.)),
                -1,
                &mut builder,
            )
            .unwrap_err();

        assert!(matches!(
            err,
            MssqlError::TypeMismatch {
                expected: GeometryKind::Polygon,
                found: GeometryKind::Point,
            }
        ));
        assert!(builder.shapes().is_empty());
    }
}
