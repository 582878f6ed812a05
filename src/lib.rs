#![deny(clippy::all)]
#![forbid(unsafe_code)]

// FIXME: When derive_builder supports Rust 2018 syntax switch to a local import
#[macro_use]
extern crate derive_builder;

pub mod aip;
pub mod error;
pub mod geo;
pub mod output;
pub mod text;

pub use aip::sweden::{parse_lines, Aborted, SwedenObstacleParser};
pub use aip::{Obstacle, ObstacleParser};
pub use error::{Error, Field, LineError, Result};
pub use geo::LatLon;
pub use text::{Document, PlainText, TextSource};
