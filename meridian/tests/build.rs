//! Building shapes from polygons around the antimeridian.

use approx::assert_relative_eq;
use assert_matches::assert_matches;
use meridian::{
    split_ring, BuildOptions, BuiltShape, GeoPoint2d, MultiPolygonBuilder, PolygonDefinition,
    PolygonFactory, Ring, ShapeError,
};
use meridian_types::contour::Contour;
use meridian_types::geo::{GeoPoint, NewGeoPoint};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ring(points: &[(f64, f64)]) -> Ring {
    Ring::new(points.iter().copied()).unwrap()
}

fn dateline_square() -> Ring {
    ring(&[(179.0, 0.0), (-179.0, 0.0), (-179.0, 10.0), (179.0, 10.0), (179.0, 0.0)])
}

#[test]
fn dateline_square_splits_in_two() {
    init_logger();

    let parts = split_ring([
        (179.0, 0.0),
        (-179.0, 0.0),
        (-179.0, 10.0),
        (179.0, 10.0),
        (179.0, 0.0),
    ])
    .unwrap();
    assert_eq!(parts.len(), 2);

    for part in &parts {
        assert!(!part.crosses_antimeridian());
        let closed = part.to_ring();
        assert_eq!(closed.first(), closed.last());
        assert!(closed.len() >= 4);
    }

    let east = &parts[0];
    assert!(east.points.iter().all(|p| p.lon() > 0.0));
    assert!(east.points.contains(&GeoPoint2d::lonlat(180.0, 0.0)));
    assert!(east.points.contains(&GeoPoint2d::lonlat(180.0, 10.0)));

    let west = &parts[1];
    assert!(west.points.iter().all(|p| p.lon() < 0.0));
    assert!(west.points.contains(&GeoPoint2d::lonlat(-180.0, 0.0)));
    assert!(west.points.contains(&GeoPoint2d::lonlat(-180.0, 10.0)));
}

#[test]
fn non_crossing_ring_is_kept() {
    let points = [(10.0, 10.0), (20.0, 10.0), (15.0, 20.0)];
    let parts = split_ring(points).unwrap();

    assert_eq!(parts.len(), 1);
    for (actual, expected) in parts[0].points.iter().zip(points) {
        assert_relative_eq!(*actual, GeoPoint2d::from(expected));
    }
}

#[test]
fn polar_caps_do_not_cross() {
    init_logger();

    let north = split_ring([(-120.0, 70.0), (0.0, 70.0), (120.0, 70.0)]).unwrap();
    let south = split_ring([(120.0, -70.0), (0.0, -70.0), (-120.0, -70.0)]).unwrap();

    for (parts, lat) in [(north, 90.0), (south, -90.0)] {
        assert_eq!(parts.len(), 1);
        let cap = &parts[0];
        assert!(!cap.crosses_antimeridian());
        assert!(cap.points.contains(&GeoPoint2d::lonlat(180.0, lat)));
        assert!(cap.points.contains(&GeoPoint2d::lonlat(-180.0, lat)));
        assert!(cap.points.contains(&GeoPoint2d::lonlat(0.0, lat)));
    }
}

#[test]
fn empty_builder_is_empty_collection() {
    init_logger();

    let builder = MultiPolygonBuilder::new();
    for wrap in [true, false] {
        assert_matches!(
            builder.build(wrap, &PolygonFactory::default()),
            BuiltShape::Collection(collection) if collection.is_empty()
        );
    }
}

#[test]
fn non_crossing_polygon_same_in_both_modes() {
    let mut builder = MultiPolygonBuilder::new();
    builder.register(
        ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
        [ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0)])],
    );

    let factory = PolygonFactory::default();
    let wrapped = builder.build(true, &factory);
    let unwrapped = builder.build(false, &factory);

    assert!(wrapped.is_single());
    assert_eq!(wrapped, unwrapped);
}

#[test]
fn build_is_repeatable() {
    init_logger();

    let mut builder = MultiPolygonBuilder::new();
    builder.register(dateline_square(), []);
    builder.register(ring(&[(30.0, 30.0), (40.0, 30.0), (40.0, 40.0)]), []);

    let factory = PolygonFactory::default();
    let first = builder.build(true, &factory);
    let second = builder.build(true, &factory);
    assert_eq!(first, second);
    assert_eq!(first.as_collection().unwrap().len(), 3);

    builder.register(ring(&[(50.0, 30.0), (60.0, 30.0), (60.0, 40.0)]), []);
    assert_eq!(builder.build(true, &factory).as_collection().unwrap().len(), 4);
}

#[test]
fn crossing_polygon_without_wrap_is_single() {
    let mut builder = MultiPolygonBuilder::new();
    builder.register(dateline_square(), []);

    let shape = builder.build_with(&BuildOptions::no_wrap(), &PolygonFactory::default());
    let polygon = shape.as_single().unwrap();
    assert_eq!(&polygon.outer_contour, dateline_square().contour());
}

#[test]
fn holes_follow_shell_parts() {
    init_logger();

    let mut builder = MultiPolygonBuilder::new();
    builder
        .start_polygon(ring(&[(170.0, -10.0), (-170.0, -10.0), (-170.0, 10.0), (170.0, 10.0)]))
        .hole(ring(&[(175.0, 0.0), (176.0, 0.0), (176.0, 1.0)]))
        .hole(ring(&[(-176.0, 0.0), (-175.0, 0.0), (-175.0, 1.0)]))
        .hole(ring(&[(60.0, 0.0), (61.0, 0.0), (61.0, 1.0)]))
        .close();

    let (shape, warnings) = builder.build_with_diagnostics(true, &PolygonFactory::default());
    let collection = shape.as_collection().unwrap();
    assert_eq!(collection.len(), 2);
    for polygon in collection.shapes() {
        assert_eq!(polygon.inner_contours.len(), 1);
        let shell_east = polygon.outer_contour.points[0].lon() > 0.0;
        let hole_east = polygon.inner_contours[0].points[0].lon() > 0.0;
        assert_eq!(shell_east, hole_east);
    }

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].1.hole, 2);
    assert_relative_eq!(warnings[0].1.point, GeoPoint2d::lonlat(60.0, 0.0));
}

#[test]
fn malformed_rings_are_rejected() {
    assert_matches!(
        Ring::new([(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
        Err(ShapeError::MalformedRing { distinct: 2 })
    );
    assert_matches!(
        Ring::new([(1.0, 1.0); 4]),
        Err(ShapeError::MalformedRing { distinct: 1 })
    );
    assert_matches!(
        Ring::new([(0.0, 0.0), (1.0, f64::INFINITY), (1.0, 1.0)]),
        Err(ShapeError::InvalidCoordinate(_))
    );

    let json = r#"{"shell":[{"lon":0,"lat":0},{"lon":0,"lat":0},{"lon":0,"lat":0}]}"#;
    assert!(serde_json::from_str::<PolygonDefinition>(json).is_err());
}

#[test]
fn builder_round_trips_through_json() {
    let mut builder = MultiPolygonBuilder::new();
    builder.register(dateline_square(), [ring(&[(179.5, 1.0), (-179.5, 1.0), (-179.5, 2.0)])]);

    let json = serde_json::to_string(&builder).unwrap();
    let restored: MultiPolygonBuilder = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, builder);
    assert_eq!(
        restored.build(true, &PolygonFactory::default()),
        builder.build(true, &PolygonFactory::default())
    );
}

#[cfg(feature = "geo-types")]
#[test]
fn geo_types_output() {
    use meridian::GeoTypesFactory;

    let mut builder = MultiPolygonBuilder::new();
    builder.register(dateline_square(), []);

    let BuiltShape::Collection(collection) = builder.build(true, &GeoTypesFactory) else {
        panic!("expected a collection");
    };
    assert_eq!(collection.0.len(), 2);
    for geometry in collection.0 {
        assert_matches!(
            geometry,
            geo_types::Geometry::Polygon(polygon) if polygon.exterior().is_closed()
        );
    }
}
