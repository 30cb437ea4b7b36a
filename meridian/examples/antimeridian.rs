//! Builds a few polygons around the antimeridian and prints the resulting shapes.
//!
//! Run with `RUST_LOG=debug` to see how the polygons are split.

use meridian::{BuildOptions, BuiltShape, GeoTypesFactory, MultiPolygonBuilder, Ring, ShapeError};

fn main() -> Result<(), ShapeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut builder = MultiPolygonBuilder::new();
    builder
        .start_polygon(Ring::new([
            (170.0, -10.0),
            (-170.0, -10.0),
            (-170.0, 10.0),
            (170.0, 10.0),
        ])?)
        .hole(Ring::new([(178.0, -1.0), (-178.0, -1.0), (-178.0, 1.0), (178.0, 1.0)])?)
        .hole(Ring::new([(20.0, 0.0), (21.0, 0.0), (21.0, 1.0)])?)
        .close()
        .start_polygon(Ring::new([(10.0, 40.0), (20.0, 40.0), (15.0, 50.0)])?);

    for options in [BuildOptions::default(), BuildOptions::no_wrap()] {
        let (shape, warnings) =
            builder.build_with_diagnostics(options.wrap_dateline, &GeoTypesFactory);
        println!("wrap_dateline: {}", options.wrap_dateline);
        match shape {
            BuiltShape::Single(polygon) => println!("  {polygon:?}"),
            BuiltShape::Collection(collection) => {
                for geometry in collection {
                    println!("  {geometry:?}");
                }
            }
        }

        for (handle, warning) in warnings {
            println!("  polygon {}: {warning}", handle.index());
        }
    }

    Ok(())
}
