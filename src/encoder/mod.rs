//! Encoding geometries into shapes, figures and points.
//!
//! Each geometry kind has one [`ShapeEncoder`]. An [`EncoderSet`] is the registry that dispatches a
//! geometry, and every member of a multi-geometry or collection, to the encoder for its kind.

mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod options;
mod point;
mod polygon;
mod wrappers;

pub use options::{ContainerOffsets, EncodeOptions};

use geo_traits::{GeometryTrait, GeometryType, LineStringTrait, PointTrait, PolygonTrait};
use log::{debug, trace};

use crate::builder::{MssqlGeometry, ShapeBuilder};
use crate::capacity::ShapeCapacity;
use crate::datatypes::GeometryKind;
use crate::error::{MssqlError, Result};
use wrappers::{LineWrapper, RectWrapper, TriangleWrapper};

/// The encoding strategy for one geometry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeEncoder {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl ShapeEncoder {
    /// One encoder per geometry kind.
    pub const ALL: [ShapeEncoder; 7] = [
        ShapeEncoder::Point,
        ShapeEncoder::LineString,
        ShapeEncoder::Polygon,
        ShapeEncoder::MultiPoint,
        ShapeEncoder::MultiLineString,
        ShapeEncoder::MultiPolygon,
        ShapeEncoder::GeometryCollection,
    ];

    /// The geometry kind this encoder writes.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point => GeometryKind::Point,
            Self::LineString => GeometryKind::LineString,
            Self::Polygon => GeometryKind::Polygon,
            Self::MultiPoint => GeometryKind::MultiPoint,
            Self::MultiLineString => GeometryKind::MultiLineString,
            Self::MultiPolygon => GeometryKind::MultiPolygon,
            Self::GeometryCollection => GeometryKind::GeometryCollection,
        }
    }

    /// Whether this encoder can encode geometries of `kind`.
    pub fn accepts(&self, kind: GeometryKind) -> bool {
        self.kind() == kind
    }

    /// Append `geom` to `builder` as a child of the shape at `parent_offset`.
    ///
    /// Members of multi-geometries and collections are dispatched through `encoders`.
    ///
    /// # Errors
    ///
    /// - [`MssqlError::TypeMismatch`] if `geom` is not of the kind this encoder accepts
    /// - any error from dispatching a member
    pub fn encode(
        &self,
        encoders: &EncoderSet,
        geom: &impl GeometryTrait<T = f64>,
        parent_offset: i32,
        builder: &mut ShapeBuilder,
    ) -> Result<()> {
        use GeometryType as G;
        match (*self, geom.as_type()) {
            (Self::Point, G::Point(p)) => point::encode_point(p, parent_offset, builder),
            (Self::LineString, G::LineString(ls)) => {
                linestring::encode_line_string(ls, parent_offset, builder)
            }
            (Self::LineString, G::Line(l)) => {
                linestring::encode_line_string(&LineWrapper(l), parent_offset, builder)
            }
            (Self::Polygon, G::Polygon(p)) => polygon::encode_polygon(p, parent_offset, builder),
            (Self::Polygon, G::Rect(r)) => {
                polygon::encode_polygon(&RectWrapper::try_new(r)?, parent_offset, builder)
            }
            (Self::Polygon, G::Triangle(tri)) => {
                polygon::encode_polygon(&TriangleWrapper(tri), parent_offset, builder)
            }
            (Self::MultiPoint, G::MultiPoint(mp)) => {
                multipoint::encode_multi_point(encoders, mp, parent_offset, builder)
            }
            (Self::MultiLineString, G::MultiLineString(ml)) => {
                multilinestring::encode_multi_line_string(encoders, ml, parent_offset, builder)
            }
            (Self::MultiPolygon, G::MultiPolygon(mp)) => {
                multipolygon::encode_multi_polygon(encoders, mp, parent_offset, builder)
            }
            (Self::GeometryCollection, G::GeometryCollection(gc)) => {
                geometrycollection::encode_geometry_collection(
                    encoders,
                    gc,
                    parent_offset,
                    builder,
                )
            }
            _ => Err(MssqlError::TypeMismatch {
                expected: self.kind(),
                found: GeometryKind::of(geom),
            }),
        }
    }
}

/// A registry of [`ShapeEncoder`]s plus the options they encode with.
///
/// The default set registers one encoder for every geometry kind.
#[derive(Debug, Clone)]
pub struct EncoderSet {
    encoders: Vec<ShapeEncoder>,
    options: EncodeOptions,
}

impl EncoderSet {
    pub fn new(encoders: impl IntoIterator<Item = ShapeEncoder>) -> Self {
        Self {
            encoders: encoders.into_iter().collect(),
            options: Default::default(),
        }
    }

    pub fn with_options(self, options: EncodeOptions) -> Self {
        Self { options, ..self }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    pub fn encoders(&self) -> &[ShapeEncoder] {
        &self.encoders
    }

    /// The single registered encoder that accepts `kind`.
    ///
    /// # Errors
    ///
    /// - [`MssqlError::MissingEncoder`] if no registered encoder accepts `kind`
    /// - [`MssqlError::AmbiguousEncoder`] if more than one does
    pub fn resolve(&self, kind: GeometryKind) -> Result<ShapeEncoder> {
        let mut candidates = self.encoders.iter().filter(|e| e.accepts(kind));
        match (candidates.next(), candidates.count()) {
            (None, _) => Err(MssqlError::MissingEncoder(kind)),
            (Some(encoder), 0) => Ok(*encoder),
            (Some(_), others) => Err(MssqlError::AmbiguousEncoder(kind, others + 1)),
        }
    }

    /// Encode a root geometry into a new [`MssqlGeometry`].
    pub fn encode_geometry(&self, geom: &impl GeometryTrait<T = f64>) -> Result<MssqlGeometry> {
        let mut builder = ShapeBuilder::with_capacity(ShapeCapacity::from_geometry(geom));
        self.encode(geom, -1, &mut builder)?;
        let encoded = builder.finish().with_srid(self.options.srid);
        debug!(
            "Encoded {:?} into {} shapes, {} figures and {} points",
            GeometryKind::of(geom),
            encoded.shapes().len(),
            encoded.figures().len(),
            encoded.points().count(),
        );
        Ok(encoded)
    }

    /// Encode a root geometry straight to SQL Server's native bytes.
    pub fn to_bytes(&self, geom: &impl GeometryTrait<T = f64>) -> Result<Vec<u8>> {
        self.encode_geometry(geom)?.to_bytes(self.options.valid)
    }

    /// Dispatch `geom` to the encoder registered for its kind.
    ///
    /// `parent_offset` is the index of the enclosing shape, or `-1` for a root geometry. On error
    /// `builder` may hold a partial encoding and should be discarded.
    pub fn encode(
        &self,
        geom: &impl GeometryTrait<T = f64>,
        parent_offset: i32,
        builder: &mut ShapeBuilder,
    ) -> Result<()> {
        let kind = GeometryKind::of(geom);
        let encoder = self.resolve(kind)?;
        trace!("Dispatching {kind:?} under shape {parent_offset}");
        self.descend(builder, |builder| {
            encoder.encode(self, geom, parent_offset, builder)
        })
    }

    pub(crate) fn encode_point(
        &self,
        geom: &impl PointTrait<T = f64>,
        parent_offset: i32,
        builder: &mut ShapeBuilder,
    ) -> Result<()> {
        self.resolve(GeometryKind::Point)?;
        self.descend(builder, |builder| {
            point::encode_point(geom, parent_offset, builder)
        })
    }

    pub(crate) fn encode_line_string(
        &self,
        geom: &impl LineStringTrait<T = f64>,
        parent_offset: i32,
        builder: &mut ShapeBuilder,
    ) -> Result<()> {
        self.resolve(GeometryKind::LineString)?;
        self.descend(builder, |builder| {
            linestring::encode_line_string(geom, parent_offset, builder)
        })
    }

    pub(crate) fn encode_polygon(
        &self,
        geom: &impl PolygonTrait<T = f64>,
        parent_offset: i32,
        builder: &mut ShapeBuilder,
    ) -> Result<()> {
        self.resolve(GeometryKind::Polygon)?;
        self.descend(builder, |builder| {
            polygon::encode_polygon(geom, parent_offset, builder)
        })
    }

    /// The figure offset a container shape records under the configured policy.
    ///
    /// A container is anchored only if some descendant writes a figure, so the recorded index
    /// always exists.
    pub(crate) fn container_figure_offset(
        &self,
        geom: &impl GeometryTrait,
        builder: &ShapeBuilder,
    ) -> Result<i32> {
        match self.options.container_offsets {
            ContainerOffsets::Anchored
                if ShapeCapacity::from_geometry(geom).figure_capacity() > 0 =>
            {
                builder.next_figure_offset()
            }
            _ => Ok(-1),
        }
    }

    fn descend(
        &self,
        builder: &mut ShapeBuilder,
        encode: impl FnOnce(&mut ShapeBuilder) -> Result<()>,
    ) -> Result<()> {
        if builder.depth >= self.options.max_depth {
            return Err(MssqlError::NestingTooDeep(self.options.max_depth));
        }
        builder.depth += 1;
        let result = encode(builder);
        builder.depth -= 1;
        result
    }
}

impl Default for EncoderSet {
    fn default() -> Self {
        Self::new(ShapeEncoder::ALL)
    }
}
