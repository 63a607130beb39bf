use serde::{Deserialize, Serialize};

/// A coordinate component in degrees/minutes/decimal-seconds form.
///
/// The sign lives on `whole_degrees`, which keeps a negative zero for values
/// between -1° and 0° so the hemisphere survives the split. Seconds carry the
/// sub-minute remainder rounded half-up at four decimals.
///
/// # Example
///
/// ```
/// use geohash_rs::DmsCoordinate;
///
/// let dms = DmsCoordinate::from_degrees(31.192911);
/// assert_eq!(dms.whole_degrees, 31.0);
/// assert_eq!(dms.minutes, 11.0);
/// assert_eq!(dms.seconds, 34.4796);
/// assert_eq!(dms.to_string(), "31°11′34.4796″");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DmsCoordinate {
    /// Signed whole degrees
    pub whole_degrees: f64,
    /// Whole minutes, 0-59
    pub minutes: f64,
    /// Decimal seconds, 0-60
    pub seconds: f64,
}

impl DmsCoordinate {
    /// Builds the coordinate from already-split components.
    pub fn new(whole_degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            whole_degrees,
            minutes,
            seconds,
        }
    }

    /// Splits decimal degrees into whole degrees, minutes and seconds.
    pub fn from_degrees(degrees: f64) -> Self {
        let whole_degrees = degrees.trunc();
        let remaining = (degrees - whole_degrees).abs();
        let minutes = (remaining * 60.0).trunc();
        let remaining = remaining * 60.0 - minutes;
        let seconds = round_seconds(remaining * 60.0);
        Self {
            whole_degrees,
            minutes,
            seconds,
        }
    }

    /// Recombines the components into decimal degrees.
    pub fn degrees(&self) -> f64 {
        let decimal = self.whole_degrees.abs() + self.minutes / 60.0 + self.seconds / 3600.0;
        if self.whole_degrees.is_sign_negative() {
            -decimal
        } else {
            decimal
        }
    }
}

impl std::fmt::Display for DmsCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{}′{}″", self.whole_degrees, self.minutes, self.seconds)
    }
}

fn round_seconds(seconds: f64) -> f64 {
    (seconds * 10_000.0 + 0.5).floor() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_known_values() {
        let dms = DmsCoordinate::from_degrees(31.192911);
        assert_eq!(dms.whole_degrees, 31.0);
        assert_eq!(dms.minutes, 11.0);
        assert_eq!(dms.seconds, 34.4796);

        let dms = DmsCoordinate::from_degrees(121.437013);
        assert_eq!(dms.whole_degrees, 121.0);
        assert_eq!(dms.minutes, 26.0);
        assert_eq!(dms.seconds, 13.2468);

        let dms = DmsCoordinate::from_degrees(-2.248);
        assert_eq!(dms.whole_degrees, -2.0);
        assert_eq!(dms.minutes, 14.0);
        assert_eq!(dms.seconds, 52.8);
    }

    #[test]
    fn test_split_whole_degrees_only() {
        let dms = DmsCoordinate::from_degrees(90.0);
        assert_eq!(dms.whole_degrees, 90.0);
        assert_eq!(dms.minutes, 0.0);
        assert_eq!(dms.seconds, 0.0);

        let dms = DmsCoordinate::from_degrees(-90.0);
        assert_eq!(dms.whole_degrees, -90.0);
        assert_eq!(dms.degrees(), -90.0);
    }

    #[test]
    fn test_degrees_round_trip() {
        for degrees in [31.192911, 121.437013, -2.248, -73.98765, 0.25] {
            let back = DmsCoordinate::from_degrees(degrees).degrees();
            assert!((back - degrees).abs() < 1e-7, "{} came back as {}", degrees, back);
        }
    }

    #[test]
    fn test_fractional_negative_keeps_hemisphere() {
        let dms = DmsCoordinate::from_degrees(-0.5);
        assert_eq!(dms.minutes, 30.0);
        assert_eq!(dms.degrees(), -0.5);
    }

    #[test]
    fn test_display_renders_components() {
        let dms = DmsCoordinate::new(31.0, 11.0, 34.4796);
        assert_eq!(dms.to_string(), "31°11′34.4796″");
    }
}
