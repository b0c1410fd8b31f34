use geo_traits::LineStringTrait;

use crate::builder::ShapeBuilder;
use crate::datatypes::{FigureAttribute, GeometryKind};
use crate::error::Result;

/// Encode a LineString as one shape holding one stroke figure.
pub(crate) fn encode_line_string(
    geom: &impl LineStringTrait<T = f64>,
    parent_offset: i32,
    builder: &mut ShapeBuilder,
) -> Result<()> {
    if geom.num_coords() == 0 {
        builder.push_shape(parent_offset, -1, GeometryKind::LineString)?;
        return Ok(());
    }

    let figure_offset = builder.next_figure_offset()?;
    builder.push_shape(parent_offset, figure_offset, GeometryKind::LineString)?;
    builder.push_ring(FigureAttribute::Stroke, geom)
}
