use geo_traits::PointTrait;

use crate::builder::ShapeBuilder;
use crate::datatypes::{FigureAttribute, GeometryKind};
use crate::error::Result;

/// Encode a Point as one shape holding one stroke figure of one point.
pub(crate) fn encode_point(
    geom: &impl PointTrait<T = f64>,
    parent_offset: i32,
    builder: &mut ShapeBuilder,
) -> Result<()> {
    let Some(coord) = geom.coord() else {
        builder.push_shape(parent_offset, -1, GeometryKind::Point)?;
        return Ok(());
    };

    let figure_offset = builder.next_figure_offset()?;
    builder.push_shape(parent_offset, figure_offset, GeometryKind::Point)?;

    let point_offset = builder.next_point_offset()?;
    builder.push_coord(&coord);
    builder.push_figure(FigureAttribute::Stroke, point_offset);
    Ok(())
}
