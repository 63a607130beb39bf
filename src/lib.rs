//! # geohash-rs
//!
//! There are currently three main entry points.
//!
//! ### 1. `GeoHasher` - Encoding and Decoding
//!
//! ```
//! use geohash_rs::{GeoHasher, Position};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let hasher = GeoHasher::base32(12)?;
//!
//! let hash = hasher.encode(&Position::new(31.192911, 121.437013));
//! assert_eq!(hash, "wtw37q7xzkpc");
//!
//! let position = hasher.decode(&hash)?;
//! println!("{}", position);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Neighborhood` - Adjacent Cells
//!
//! ```
//! use geohash_rs::GeoHasher;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let hasher = GeoHasher::base32(3)?;
//! let neighborhood = hasher.neighbors("wtw")?;
//!
//! assert_eq!(neighborhood.north.as_deref(), Some("wty"));
//! assert_eq!(neighborhood.southeast.as_deref(), Some("wtr"));
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Planning Hash Lengths by Distance
//!
//! ```
//! use geohash_rs::GeoHasher;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! // Hashes for features around 20 km across
//! let hasher = GeoHasher::base32_by_distance(2_000_000.0)?;
//! assert_eq!(hasher.hash_len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{GeoHasher, Neighborhood};
pub use self::core::{
    Alphabet, BASE4, BASE16, BASE32, BIT_DISTANCES_CM, DistanceMetric, MAX_BITS, MAX_LAT, MAX_LNG,
    MIN_LAT, MIN_LNG, bearing_between, bit_string, deinterleave, dequantize, distance_between,
    final_bearing_between, interleave, midpoint, minimal_bit_len, point_at, quantize,
};
pub use util::{Coordinate, DmsCoordinate, GeohashError, Position};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeohashError> {
        init_logger();
        let hasher = GeoHasher::base32(12)?;
        let origin = Position::new(31.192911, 121.437013);

        let hash = hasher.encode(&origin);
        assert_eq!(hash, "wtw37q7xzkpc");

        let decoded = hasher.decode(&hash)?;
        assert!((decoded.lat() - origin.lat()).abs() < 0.0001);
        assert!((decoded.lng() - origin.lng()).abs() < 0.0001);
        assert_eq!(hasher.encode(&decoded), hash);

        let neighborhood = hasher.neighbors(&hash)?;
        assert_eq!(neighborhood.center, hash);
        assert!(neighborhood.to_array().iter().all(|slot| slot.is_some()));
        Ok(())
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), GeohashError> {
        init_logger();
        let hasher = GeoHasher::base32(12)?;
        let pt = point! { x: 121.437013, y: 31.192911 };
        assert_eq!(hasher.encode(&pt), "wtw37q7xzkpc");

        let cell = hasher.bounds("wtw37q7xzkpc")?;
        assert!(cell.min().x <= pt.x() && pt.x() <= cell.max().x);
        assert!(cell.min().y <= pt.y() && pt.y() <= cell.max().y);
        Ok(())
    }

    #[test]
    fn test_distance_planning_workflow() -> Result<(), GeohashError> {
        init_logger();
        assert_eq!(minimal_bit_len(1.0)?, 60);
        assert_eq!(BIT_DISTANCES_CM[30], 1.864);

        let hasher = GeoHasher::base32_by_distance(1.0)?;
        assert_eq!(hasher.hash_len(), 12);
        assert_eq!(hasher.total_bits(), 60);
        Ok(())
    }

    #[test]
    fn test_decoded_drift_is_small() -> Result<(), GeohashError> {
        init_logger();
        let hasher = GeoHasher::base32(12)?;
        let origin = Position::new(48.8566, 2.3522);
        let decoded = hasher.decode(&hasher.encode(&origin))?;

        let drift = distance_between(&origin, &decoded, DistanceMetric::Haversine);
        assert!(drift > 0.0);
        assert!(drift < 1.0);
        Ok(())
    }

    #[test]
    fn test_serde_workflow() -> Result<(), GeohashError> {
        init_logger();
        let hasher = GeoHasher::base32(3)?;
        let neighborhood = hasher.neighbors("wtw")?;

        let json = serde_json::to_string(&neighborhood).unwrap();
        assert!(json.contains("\"north\":\"wty\""));

        let back: Neighborhood = serde_json::from_str(&json).unwrap();
        assert_eq!(back, neighborhood);
        Ok(())
    }
}
