pub mod alphabet;
pub mod bisect;
pub mod constants;
pub mod geodesic;
pub mod morton;

pub use alphabet::{Alphabet, BASE4, BASE16, BASE32, minimal_bit_len};
pub use bisect::{dequantize, quantize};
pub use constants::{BIT_DISTANCES_CM, MAX_BITS, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
pub use geodesic::{
    DistanceMetric, bearing_between, distance_between, final_bearing_between, midpoint, point_at,
};
pub use morton::{bit_string, deinterleave, interleave};
