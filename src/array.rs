//! Encode a column of geometries into an Arrow binary array of native `geometry` values.

use arrow_array::builder::{ArrayBuilder, GenericBinaryBuilder};
use arrow_array::{GenericBinaryArray, OffsetSizeTrait};
use geo_traits::GeometryTrait;

use crate::encoder::EncoderSet;
use crate::error::Result;
use crate::writer::mssql_geometry_size;

/// The equivalent of `Vec<Option<Vec<u8>>>` holding SQL Server native geometries.
///
/// Converting an [`MssqlBinaryBuilder`] into a [`GenericBinaryArray`] is `O(1)`.
#[derive(Debug)]
pub struct MssqlBinaryBuilder<'a, O: OffsetSizeTrait> {
    values: GenericBinaryBuilder<O>,
    encoders: &'a EncoderSet,
}

impl<'a, O: OffsetSizeTrait> MssqlBinaryBuilder<'a, O> {
    /// Creates a new empty [`MssqlBinaryBuilder`].
    pub fn new(encoders: &'a EncoderSet) -> Self {
        Self::with_capacity(encoders, 0, 0)
    }

    /// Initializes a new [`MssqlBinaryBuilder`] with room for `item_capacity` rows and
    /// `data_capacity` bytes.
    pub fn with_capacity(
        encoders: &'a EncoderSet,
        item_capacity: usize,
        data_capacity: usize,
    ) -> Self {
        Self {
            values: GenericBinaryBuilder::with_capacity(item_capacity, data_capacity),
            encoders,
        }
    }

    /// Push a Geometry onto the end of this builder
    #[inline]
    pub fn push_geometry(&mut self, geom: Option<&impl GeometryTrait<T = f64>>) -> Result<()> {
        if let Some(geom) = geom {
            let encoded = self.encoders.encode_geometry(geom)?;
            let mut buf = Vec::with_capacity(mssql_geometry_size(&encoded));
            encoded.write(&mut buf, self.encoders.options().valid)?;
            self.values.append_value(buf);
        } else {
            self.values.append_null();
        }
        Ok(())
    }

    /// Extend this builder from an iterator of Geometries.
    pub fn extend_from_iter<'b>(
        &mut self,
        mut geoms: impl Iterator<Item = Option<&'b (impl GeometryTrait<T = f64> + 'b)>>,
    ) -> Result<()> {
        geoms.try_for_each(|maybe_geom| self.push_geometry(maybe_geom))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn finish(mut self) -> GenericBinaryArray<O> {
        self.values.finish()
    }
}

/// Encode every geometry of `geoms` into one row of a binary array, with nulls preserved.
///
/// Any encode error aborts the whole column.
pub fn to_binary_array<'a, O: OffsetSizeTrait>(
    geoms: impl Iterator<Item = Option<&'a (impl GeometryTrait<T = f64> + 'a)>>,
    encoders: &EncoderSet,
) -> Result<GenericBinaryArray<O>> {
    let mut builder = MssqlBinaryBuilder::with_capacity(encoders, geoms.size_hint().0, 0);
    builder.extend_from_iter(geoms)?;
    Ok(builder.finish())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encoder::{EncodeOptions, ShapeEncoder};
    use crate::error::MssqlError;
    use crate::test::polygon::{square, square_with_hole};
    use arrow_array::Array;
    use geo_types::{point, Geometry};

    #[test]
    fn nulls_preserved() {
        let geoms = vec![
            Some(Geometry::Polygon(square())),
            None,
            Some(Geometry::Point(point!(x: 1., y: 2.))),
        ];
        let encoders =
            EncoderSet::default().with_options(EncodeOptions::default().with_srid(4326));
        let arr = to_binary_array::<i32>(geoms.iter().map(|g| g.as_ref()), &encoders).unwrap();

        assert_eq!(arr.len(), 3);
        assert!(arr.is_valid(0));
        assert!(arr.is_null(1));

        let expected = encoders
            .to_bytes(&Geometry::Point(point!(x: 1., y: 2.)))
            .unwrap();
        assert_eq!(arr.value(2), expected.as_slice());
        // srid header
        assert_eq!(&arr.value(0)[..4], &4326i32.to_le_bytes());
    }

    #[test]
    fn large_offsets() {
        let geoms = [Geometry::Polygon(square_with_hole())];
        let arr =
            to_binary_array::<i64>(geoms.iter().map(Some), &EncoderSet::default()).unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.null_count(), 0);
    }

    #[test]
    fn error_aborts_column() {
        let geoms = [Geometry::Point(point!(x: 0., y: 0.)), Geometry::Polygon(square())];
        let encoders = EncoderSet::new([ShapeEncoder::Point]);
        let err = to_binary_array::<i32>(geoms.iter().map(Some), &encoders).unwrap_err();
        assert!(matches!(err, MssqlError::MissingEncoder(_)));
    }
}
