use geo_types::{polygon, Geometry, GeometryCollection};

use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_mssql::array::to_binary_array;
use geoarrow_mssql::EncoderSet;

fn create_data() -> Vec<Geometry> {
    // An L shape
    let poly = polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ];
    vec![Geometry::Polygon(poly); 1000]
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let encoders = EncoderSet::default();

    c.bench_function("encode Vec<Polygon> to binary array", |b| {
        b.iter(|| to_binary_array::<i32>(data.iter().map(Some), &encoders).unwrap())
    });

    let collection = Geometry::GeometryCollection(GeometryCollection::from(data.clone()));
    c.bench_function("encode GeometryCollection of 1000 polygons", |b| {
        b.iter(|| encoders.encode_geometry(&collection).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
