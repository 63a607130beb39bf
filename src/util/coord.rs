use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Read access to a latitude/longitude pair in decimal degrees.
///
/// Implemented for `(f64, f64)` tuples in `(lat, lng)` order and for
/// `geo_types::Point<f64>`, where `x` is longitude and `y` is latitude.
pub trait Coordinate {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lng(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lng(&self) -> f64 {
        self.x()
    }
}

impl Coordinate for Position {
    fn lat(&self) -> f64 {
        Position::lat(self)
    }
    fn lng(&self) -> f64 {
        Position::lng(self)
    }
}

/// An immutable latitude/longitude pair with optional display rounding.
///
/// When a precision is set, reads round half-up at that many decimal digits;
/// the stored values are never altered. Half-up keeps halfway cases moving
/// toward +∞ on both hemispheres, so `-2.5` at zero digits reads as `-2`,
/// not `-3`.
///
/// # Example
///
/// ```
/// use geohash_rs::Position;
///
/// let position = Position::new(31.192911, 121.437013).with_precision(4);
/// assert_eq!(position.lat(), 31.1929);
/// assert_eq!(position.lng(), 121.437);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    lat: f64,
    lng: f64,
    precision: Option<u32>,
}

impl Position {
    /// Creates a position with no rounding applied.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            precision: None,
        }
    }

    /// Sets the decimal digit count applied when reading back the values.
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Latitude in decimal degrees, rounded if a precision is set.
    pub fn lat(&self) -> f64 {
        self.read(self.lat)
    }

    /// Longitude in decimal degrees, rounded if a precision is set.
    pub fn lng(&self) -> f64 {
        self.read(self.lng)
    }

    /// The configured display precision, if any.
    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    fn read(&self, value: f64) -> f64 {
        match self.precision {
            Some(digits) => round_half_up(value, digits),
            None => value,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat(), self.lng())
    }
}

impl From<Position> for Point<f64> {
    fn from(position: Position) -> Self {
        Point::new(position.lng(), position.lat())
    }
}

fn round_half_up(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor + 0.5).floor() / factor
}
