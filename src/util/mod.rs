pub mod coord;
pub mod dms;
pub mod error;

pub use coord::{Coordinate, Position};
pub use dms::DmsCoordinate;
pub use error::GeohashError;
