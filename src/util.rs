use geo_traits::{LineStringTrait, PolygonTrait};

use crate::error::{MssqlError, Result};

/// The exterior ring of a polygon, or `None` if the polygon is empty.
///
/// Some implementations model an empty polygon as an exterior ring with no coordinates instead of
/// no exterior ring at all.
#[inline]
pub(crate) fn non_empty_exterior<P: PolygonTrait>(polygon: &P) -> Option<P::RingType<'_>> {
    polygon.exterior().filter(|ring| ring.num_coords() > 0)
}

/// Convert a buffer length or index to the 32-bit integer stored on the wire.
#[inline]
pub(crate) fn to_offset(value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| MssqlError::Overflow)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offsets_fit_i32() {
        assert_eq!(to_offset(5).unwrap(), 5);
        assert!(matches!(
            to_offset(i32::MAX as usize + 1),
            Err(MssqlError::Overflow)
        ));
    }
}
