#![allow(dead_code)]

use std::str::FromStr;

pub(crate) mod linestring;
pub(crate) mod multipolygon;
pub(crate) mod polygon;

/// Parse a WKT string into a geometry implementing the geo-traits.
pub(crate) fn wkt_geom(s: &str) -> wkt::Wkt<f64> {
    wkt::Wkt::from_str(s).unwrap()
}
