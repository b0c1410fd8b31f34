use geo_traits::GeometryCollectionTrait;

use crate::builder::ShapeBuilder;
use crate::datatypes::GeometryKind;
use crate::encoder::EncoderSet;
use crate::error::Result;

/// Encode a GeometryCollection as a container shape followed by each member, dispatched on its own
/// kind.
pub(crate) fn encode_geometry_collection(
    encoders: &EncoderSet,
    geom: &impl GeometryCollectionTrait<T = f64>,
    parent_offset: i32,
    builder: &mut ShapeBuilder,
) -> Result<()> {
    let figure_offset = encoders.container_figure_offset(geom, builder)?;
    let shape_offset =
        builder.push_shape(parent_offset, figure_offset, GeometryKind::GeometryCollection)?;
    for member in geom.geometries() {
        encoders.encode(&member, shape_offset, builder)?;
    }
    Ok(())
}
