//! Integration with the [`geo-types`](https://docs.rs/geo-types) crate.

mod coord;
mod linestring;
mod polygon;
