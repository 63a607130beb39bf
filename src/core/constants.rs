/// Latitude lower bound in degrees
pub const MIN_LAT: f64 = -90.0;

/// Latitude upper bound in degrees
pub const MAX_LAT: f64 = 90.0;

/// Longitude lower bound in degrees
pub const MIN_LNG: f64 = -180.0;

/// Longitude upper bound in degrees
pub const MAX_LNG: f64 = 180.0;

/// Widest supported interleaved bit width
pub const MAX_BITS: u32 = 64;

/// Linear cell size in centimeters per interleaved bit depth.
///
/// Index `i` holds the cell size implied by `2 * i` interleaved bits, from a
/// single cell spanning the globe (index 0, ~20,015 km) down to the 64-bit
/// floor (index 32, 0.466 cm). Empirically tabulated; hash lengths are planned
/// against these published values, so they are a contract, not a derivation.
pub const BIT_DISTANCES_CM: [f64; 33] = [
    2001508700.0,
    1000754300.0,
    500377200.0,
    250188600.0,
    125094300.0,
    62547100.0,
    31273600.0,
    15636800.0,
    7818400.0,
    3909200.0,
    1954600.0,
    9772992.0,
    4886496.0,
    2443248.0,
    1221624.0,
    610812.0,
    305406.0,
    152703.0,
    76351.0,
    38176.0,
    19088.0,
    954.394,
    477.197,
    238.598,
    119.299,
    59.65,
    29.825,
    14.912,
    7.456,
    3.728,
    1.864,
    0.932,
    0.466,
];
