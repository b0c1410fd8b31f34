use geo_types::MultiPolygon;

use crate::test::polygon::{square, square_with_hole};

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::new(vec![square_with_hole(), square()])
}
