use geo_traits::MultiLineStringTrait;

use crate::builder::ShapeBuilder;
use crate::datatypes::GeometryKind;
use crate::encoder::EncoderSet;
use crate::error::Result;

/// Encode a MultiLineString as a container shape followed by one shape per line string.
pub(crate) fn encode_multi_line_string(
    encoders: &EncoderSet,
    geom: &impl MultiLineStringTrait<T = f64>,
    parent_offset: i32,
    builder: &mut ShapeBuilder,
) -> Result<()> {
    let figure_offset = encoders.container_figure_offset(geom, builder)?;
    let shape_offset =
        builder.push_shape(parent_offset, figure_offset, GeometryKind::MultiLineString)?;
    for line_string in geom.line_strings() {
        encoders.encode_line_string(&line_string, shape_offset, builder)?;
    }
    Ok(())
}
