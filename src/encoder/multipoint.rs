use geo_traits::MultiPointTrait;

use crate::builder::ShapeBuilder;
use crate::datatypes::GeometryKind;
use crate::encoder::EncoderSet;
use crate::error::Result;

/// Encode a MultiPoint as a container shape followed by one shape per point.
pub(crate) fn encode_multi_point(
    encoders: &EncoderSet,
    geom: &impl MultiPointTrait<T = f64>,
    parent_offset: i32,
    builder: &mut ShapeBuilder,
) -> Result<()> {
    let figure_offset = encoders.container_figure_offset(geom, builder)?;
    let shape_offset = builder.push_shape(parent_offset, figure_offset, GeometryKind::MultiPoint)?;
    for point in geom.points() {
        encoders.encode_point(&point, shape_offset, builder)?;
    }
    Ok(())
}
