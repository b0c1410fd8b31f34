//! Serialize an [`MssqlGeometry`] into SQL Server's native `geometry` bytes.
//!
//! The layout is serialization format version 1, little-endian throughout:
//!
//! ```text
//! srid: i32, version: u8, properties: u8
//! single point:        x, y, [z], [m]
//! single line segment: x1, y1, x2, y2, [z1, z2], [m1, m2]
//! otherwise:           num_points: u32, (x, y) per point, [z per point], [m per point],
//!                      num_figures: u32, (attribute: u8, point_offset: i32) per figure,
//!                      num_shapes: u32, (parent_offset: i32, figure_offset: i32, kind: u8) per shape
//! ```

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::builder::MssqlGeometry;
use crate::coord::Coord;
use crate::error::{MssqlError, Result};

pub(crate) const SERIALIZATION_VERSION: u8 = 1;

/// Bits of the serialization properties byte.
pub(crate) mod properties {
    pub const HAS_Z: u8 = 0x01;
    pub const HAS_M: u8 = 0x02;
    pub const IS_VALID: u8 = 0x04;
    pub const IS_SINGLE_POINT: u8 = 0x08;
    pub const IS_SINGLE_LINE_SEGMENT: u8 = 0x10;
}

const HEADER_SIZE: usize = 4 + 1 + 1;
const FIGURE_SIZE: usize = 1 + 4;
const SHAPE_SIZE: usize = 4 + 4 + 1;

/// The byte length of a serialized geometry
pub fn mssql_geometry_size(geom: &MssqlGeometry) -> usize {
    let ordinates = 2 + usize::from(geom.has_z()) + usize::from(geom.has_m());
    let points = geom.points().count() * ordinates * 8;
    if geom.is_single_point() || geom.is_single_line_segment() {
        HEADER_SIZE + points
    } else {
        HEADER_SIZE
            + 4
            + points
            + 4
            + geom.figures().len() * FIGURE_SIZE
            + 4
            + geom.shapes().len() * SHAPE_SIZE
    }
}

/// Write a geometry to a Writer in SQL Server's native format
pub fn write_mssql_geometry<W: Write>(
    mut writer: W,
    geom: &MssqlGeometry,
    valid: bool,
) -> Result<()> {
    let single = geom.is_single_point() || geom.is_single_line_segment();

    writer.write_i32::<LittleEndian>(geom.srid())?;
    writer.write_u8(SERIALIZATION_VERSION)?;
    writer.write_u8(serialization_properties(geom, valid))?;

    if !single {
        write_count(&mut writer, geom.points().count())?;
    }
    write_points(&mut writer, geom)?;
    if single {
        return Ok(());
    }

    write_count(&mut writer, geom.figures().len())?;
    for figure in geom.figures() {
        writer.write_u8(figure.attribute.into())?;
        writer.write_i32::<LittleEndian>(figure.point_offset)?;
    }

    write_count(&mut writer, geom.shapes().len())?;
    for shape in geom.shapes() {
        writer.write_i32::<LittleEndian>(shape.parent_offset)?;
        writer.write_i32::<LittleEndian>(shape.figure_offset)?;
        writer.write_u8(shape.kind.into())?;
    }

    Ok(())
}

fn serialization_properties(geom: &MssqlGeometry, valid: bool) -> u8 {
    let mut props = 0;
    if geom.has_z() {
        props |= properties::HAS_Z;
    }
    if geom.has_m() {
        props |= properties::HAS_M;
    }
    if valid {
        props |= properties::IS_VALID;
    }
    if geom.is_single_point() {
        props |= properties::IS_SINGLE_POINT;
    }
    if geom.is_single_line_segment() {
        props |= properties::IS_SINGLE_LINE_SEGMENT;
    }
    props
}

/// All x/y pairs first, then every z, then every m. Missing ordinates are written as NaN.
fn write_points<W: Write>(writer: &mut W, geom: &MssqlGeometry) -> Result<()> {
    for coord in geom.points() {
        writer.write_f64::<LittleEndian>(coord.x)?;
        writer.write_f64::<LittleEndian>(coord.y)?;
    }
    if geom.has_z() {
        write_ordinates(writer, geom, |c| c.z)?;
    }
    if geom.has_m() {
        write_ordinates(writer, geom, |c| c.m)?;
    }
    Ok(())
}

fn write_ordinates<W: Write>(
    writer: &mut W,
    geom: &MssqlGeometry,
    ordinate: impl Fn(&Coord) -> Option<f64>,
) -> Result<()> {
    for coord in geom.points() {
        writer.write_f64::<LittleEndian>(ordinate(coord).unwrap_or(f64::NAN))?;
    }
    Ok(())
}

fn write_count<W: Write>(writer: &mut W, count: usize) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| MssqlError::Overflow)?;
    writer.write_u32::<LittleEndian>(count)?;
    Ok(())
}
