use geo_types::{polygon, LineString, Polygon};

pub(crate) fn square() -> Polygon {
    polygon![
        (x: 0., y: 0.),
        (x: 0., y: 4.),
        (x: 4., y: 4.),
        (x: 4., y: 0.),
        (x: 0., y: 0.),
    ]
}

pub(crate) fn square_with_hole() -> Polygon {
    polygon!(
        exterior: [
            (x: 0., y: 0.),
            (x: 0., y: 4.),
            (x: 4., y: 4.),
            (x: 4., y: 0.),
            (x: 0., y: 0.),
        ],
        interiors: [
            [
                (x: 1., y: 1.),
                (x: 1., y: 2.),
                (x: 2., y: 2.),
                (x: 2., y: 1.),
                (x: 1., y: 1.),
            ],
        ],
    )
}

pub(crate) fn p_two_holes() -> Polygon {
    polygon!(
        exterior: [
            (x: 0., y: 0.),
            (x: 0., y: 10.),
            (x: 10., y: 10.),
            (x: 10., y: 0.),
            (x: 0., y: 0.),
        ],
        interiors: [
            [
                (x: 1., y: 1.),
                (x: 1., y: 2.),
                (x: 2., y: 2.),
                (x: 1., y: 1.),
            ],
            [
                (x: 5., y: 5.),
                (x: 5., y: 6.),
                (x: 6., y: 6.),
                (x: 6., y: 5.),
                (x: 5., y: 5.),
            ],
        ],
    )
}

/// A polygon with no exterior coordinates.
pub(crate) fn empty_polygon() -> Polygon {
    Polygon::new(LineString::new(vec![]), vec![])
}
