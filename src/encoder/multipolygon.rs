use geo_traits::MultiPolygonTrait;

use crate::builder::ShapeBuilder;
use crate::datatypes::GeometryKind;
use crate::encoder::EncoderSet;
use crate::error::Result;

/// Encode a MultiPolygon as a container shape followed by one shape per polygon.
pub(crate) fn encode_multi_polygon(
    encoders: &EncoderSet,
    geom: &impl MultiPolygonTrait<T = f64>,
    parent_offset: i32,
    builder: &mut ShapeBuilder,
) -> Result<()> {
    let figure_offset = encoders.container_figure_offset(geom, builder)?;
    let shape_offset =
        builder.push_shape(parent_offset, figure_offset, GeometryKind::MultiPolygon)?;
    for polygon in geom.polygons() {
        encoders.encode_polygon(&polygon, shape_offset, builder)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::datatypes::{FigureAttribute, GeometryKind};
    use crate::encoder::EncoderSet;
    use crate::shape::{Figure, Shape};
    use crate::test::multipolygon::mp0;
    use crate::test::wkt_geom;
    use geo_types::Geometry;

    #[test]
    fn multi_polygon() {
        let encoded = EncoderSet::default()
            .encode_geometry(&Geometry::MultiPolygon(mp0()))
            .unwrap();

        assert_eq!(
            encoded.shapes(),
            &[
                Shape::new(-1, -1, GeometryKind::MultiPolygon),
                Shape::new(0, 0, GeometryKind::Polygon),
                Shape::new(0, 2, GeometryKind::Polygon),
            ]
        );
        assert_eq!(
            encoded.figures(),
            &[
                Figure::new(FigureAttribute::ExteriorRing, 0),
                Figure::new(FigureAttribute::InteriorRing, 5),
                Figure::new(FigureAttribute::ExteriorRing, 10),
            ]
        );
        assert_eq!(encoded.points().count(), 15);
    }

    #[test]
    fn empty_multi_polygon() {
        let encoded = EncoderSet::default()
            .encode_geometry(&wkt_geom("MULTIPOLYGON EMPTY"))
            .unwrap();

        assert_eq!(
            encoded.shapes(),
            &[Shape::new(-1, -1, GeometryKind::MultiPolygon)]
        );
        assert!(encoded.figures().is_empty());
        assert!(encoded.points().is_empty());
    }
}
