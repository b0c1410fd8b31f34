//! Encode [geo-traits](https://docs.rs/geo-traits) geometries into SQL Server's native `geometry`
//! binary representation.
//!
//! A geometry tree is flattened into three append-only sequences: shapes (one per node of the
//! tree, pointing at its parent), figures (one per ring or stroke) and points. These are then
//! serialized in SQL Server's format version 1.
//!
//! ```
//! use geo_types::{polygon, Geometry};
//! use geoarrow_mssql::datatypes::GeometryKind;
//!
//! let geom = Geometry::Polygon(polygon![
//!     (x: 0., y: 0.),
//!     (x: 0., y: 4.),
//!     (x: 4., y: 4.),
//!     (x: 4., y: 0.),
//!     (x: 0., y: 0.),
//! ]);
//! let encoded = geoarrow_mssql::encode_geometry(&geom).unwrap();
//! assert_eq!(encoded.shapes()[0].kind, GeometryKind::Polygon);
//! assert_eq!(encoded.points().count(), 5);
//!
//! let bytes = geoarrow_mssql::to_mssql_bytes(&geom).unwrap();
//! assert_eq!(bytes.len(), geoarrow_mssql::writer::mssql_geometry_size(&encoded));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

use geo_traits::GeometryTrait;

pub use builder::{MssqlGeometry, ShapeBuilder};
pub use encoder::{EncodeOptions, EncoderSet, ShapeEncoder};
pub use error::{MssqlError, Result};

pub mod array;
pub mod builder;
pub mod capacity;
pub mod coord;
pub mod datatypes;
pub mod encoder;
pub mod error;
pub mod shape;
#[cfg(test)]
pub(crate) mod test;
mod util;
pub mod writer;

/// Encode `geom` with the default [`EncoderSet`].
pub fn encode_geometry(geom: &impl GeometryTrait<T = f64>) -> Result<MssqlGeometry> {
    EncoderSet::default().encode_geometry(geom)
}

/// Encode `geom` with the default [`EncoderSet`] straight to SQL Server's native bytes.
pub fn to_mssql_bytes(geom: &impl GeometryTrait<T = f64>) -> Result<Vec<u8>> {
    EncoderSet::default().to_bytes(geom)
}
