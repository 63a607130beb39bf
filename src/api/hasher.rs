use crate::api::neighborhood::Neighborhood;
use crate::core::alphabet::{Alphabet, BASE4, BASE16, BASE32};
use crate::core::bisect::{dequantize, quantize};
use crate::core::constants::{MAX_BITS, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
use crate::core::morton::{bit_string, deinterleave, interleave};
use crate::util::coord::{Coordinate, Position};
use crate::util::error::GeohashError;
use geo_types::{Rect, coord};
use once_cell::sync::OnceCell;

static BASE4_CACHE: [OnceCell<GeoHasher>; 32] = [const { OnceCell::new() }; 32];
static BASE16_CACHE: [OnceCell<GeoHasher>; 16] = [const { OnceCell::new() }; 16];
static BASE32_CACHE: [OnceCell<GeoHasher>; 12] = [const { OnceCell::new() }; 12];

/// A z-order geohash codec for one alphabet and hash length.
///
/// The alphabet and the hash length together fix the interleaved bit depth
/// (`hash_len * char_bits`, at most 64) and therefore the cell size. The two
/// axes alternate through the packed word, longitude first, longitude also
/// taking the extra bit at odd depths, so every hash prefix addresses a
/// coarser cell containing the full one.
///
/// # Example
///
/// ```
/// use geohash_rs::{GeoHasher, Position};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let hasher = GeoHasher::base32(12)?;
///
/// let hash = hasher.encode(&Position::new(31.192911, 121.437013));
/// assert_eq!(hash, "wtw37q7xzkpc");
///
/// let decoded = hasher.decode(&hash)?;
/// assert!((decoded.lat() - 31.192911).abs() < 1e-6);
/// assert!((decoded.lng() - 121.437013).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoHasher {
    alphabet: Alphabet,
    hash_len: u32,
    lat_steps: u32,
    lng_steps: u32,
}

impl GeoHasher {
    /// Create a hasher for an alphabet and hash length.
    ///
    /// Fails with [`GeohashError::InvalidConfiguration`] when the requested
    /// length gives zero bits or more than 64.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::{BASE16, GeoHasher};
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let hasher = GeoHasher::new(BASE16, 15)?;
    /// assert_eq!(hasher.total_bits(), 60);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(alphabet: Alphabet, hash_len: u32) -> Result<Self, GeohashError> {
        let total_bits = hash_len.saturating_mul(alphabet.char_bits);
        if total_bits == 0 || total_bits > MAX_BITS {
            return Err(GeohashError::InvalidConfiguration(total_bits));
        }
        let lat_steps = total_bits / 2;
        Ok(Self {
            alphabet,
            hash_len,
            lat_steps,
            lng_steps: total_bits - lat_steps,
        })
    }

    /// Create a base-4 hasher producing `hash_len` characters (1-32).
    pub fn base4(hash_len: u32) -> Result<Self, GeohashError> {
        Self::new(BASE4, hash_len)
    }

    /// Create a base-16 hasher producing `hash_len` characters (1-16).
    pub fn base16(hash_len: u32) -> Result<Self, GeohashError> {
        Self::new(BASE16, hash_len)
    }

    /// Create a base-32 hasher producing `hash_len` characters (1-12).
    pub fn base32(hash_len: u32) -> Result<Self, GeohashError> {
        Self::new(BASE32, hash_len)
    }

    /// Like [`GeoHasher::base4`], backed by a per-length static cache.
    pub fn base4_cached(hash_len: u32) -> Result<Self, GeohashError> {
        cached(&BASE4_CACHE, BASE4, hash_len)
    }

    /// Like [`GeoHasher::base16`], backed by a per-length static cache.
    pub fn base16_cached(hash_len: u32) -> Result<Self, GeohashError> {
        cached(&BASE16_CACHE, BASE16, hash_len)
    }

    /// Like [`GeoHasher::base32`], backed by a per-length static cache.
    pub fn base32_cached(hash_len: u32) -> Result<Self, GeohashError> {
        cached(&BASE32_CACHE, BASE32, hash_len)
    }

    /// Create the finest base-4 hasher whose cells are still at least
    /// `distance_cm` across.
    pub fn base4_by_distance(distance_cm: f64) -> Result<Self, GeohashError> {
        Self::new(BASE4, BASE4.minimal_hash_len(distance_cm)?)
    }

    /// Create the finest base-16 hasher whose cells are still at least
    /// `distance_cm` across.
    pub fn base16_by_distance(distance_cm: f64) -> Result<Self, GeohashError> {
        Self::new(BASE16, BASE16.minimal_hash_len(distance_cm)?)
    }

    /// Create the finest base-32 hasher whose cells are still at least
    /// `distance_cm` across.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeoHasher;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// // Planning for a centimeter takes the full 60-bit depth
    /// let hasher = GeoHasher::base32_by_distance(1.0)?;
    /// assert_eq!(hasher.hash_len(), 12);
    /// # Ok(())
    /// # }
    /// ```
    pub fn base32_by_distance(distance_cm: f64) -> Result<Self, GeohashError> {
        Self::new(BASE32, BASE32.minimal_hash_len(distance_cm)?)
    }

    /// Quantize a coordinate into this hasher's packed z-order bits.
    ///
    /// Coordinates outside the WGS84 range do not fail; each out-of-range
    /// axis saturates to its last cell.
    pub fn to_bits(&self, coord: &impl Coordinate) -> u64 {
        let lat = coord.lat();
        let lng = coord.lng();
        if !(MIN_LAT..=MAX_LAT).contains(&lat) || !(MIN_LNG..=MAX_LNG).contains(&lng) {
            log::warn!(
                "Encoding coordinates out of valid geographic range: lat={}, lng={}",
                lat,
                lng
            );
        }
        let lat_bits = quantize(MIN_LAT, MAX_LAT, lat, self.lat_steps);
        let lng_bits = quantize(MIN_LNG, MAX_LNG, lng, self.lng_steps);
        interleave(lng_bits, lat_bits, self.lng_steps, self.lat_steps)
    }

    /// Encode a coordinate into its cell hash.
    pub fn encode(&self, coord: &impl Coordinate) -> String {
        self.hash_string(self.to_bits(coord))
    }

    /// Decode a hash into the midpoint of its cell.
    pub fn decode(&self, hash: &str) -> Result<Position, GeohashError> {
        let (lat_bits, lng_bits) = self.separate(hash)?;
        Ok(Position::new(
            dequantize(MIN_LAT, MAX_LAT, lat_bits, self.lat_steps),
            dequantize(MIN_LNG, MAX_LNG, lng_bits, self.lng_steps),
        ))
    }

    /// Collect the adjacent cell hashes of `hash`.
    ///
    /// Directions that would step over a pole or past the antimeridian come
    /// back as `None`; see [`Neighborhood`].
    pub fn neighbors(&self, hash: &str) -> Result<Neighborhood, GeohashError> {
        let (lat_bits, lng_bits) = self.separate(hash)?;
        let north = step_up(lat_bits, self.lat_steps);
        let south = lat_bits.checked_sub(1);
        let east = step_up(lng_bits, self.lng_steps);
        let west = lng_bits.checked_sub(1);

        let mut neighborhood = Neighborhood::new(hash.to_string());
        if let Some(north) = north {
            neighborhood.north = Some(self.neighbor_hash(lng_bits, north));
            if let Some(west) = west {
                neighborhood.northwest = Some(self.neighbor_hash(west, north));
            }
            if let Some(east) = east {
                neighborhood.northeast = Some(self.neighbor_hash(east, north));
            }
        }
        if let Some(south) = south {
            neighborhood.south = Some(self.neighbor_hash(lng_bits, south));
            if let Some(west) = west {
                neighborhood.southwest = Some(self.neighbor_hash(west, south));
            }
            if let Some(east) = east {
                neighborhood.southeast = Some(self.neighbor_hash(east, south));
            }
        }
        if let Some(east) = east {
            neighborhood.east = Some(self.neighbor_hash(east, lat_bits));
        }
        if let Some(west) = west {
            neighborhood.west = Some(self.neighbor_hash(west, lat_bits));
        }
        Ok(neighborhood)
    }

    /// Collect the adjacent cell hashes around a coordinate.
    pub fn neighbors_at(&self, coord: &impl Coordinate) -> Result<Neighborhood, GeohashError> {
        self.neighbors(&self.encode(coord))
    }

    /// The rectangle of the cell addressed by `hash`, west/south corner to
    /// east/north corner.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeoHasher;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let hasher = GeoHasher::base32(3)?;
    /// let cell = hasher.bounds("wtw")?;
    /// assert_eq!(cell.min().y, 30.9375);
    /// assert_eq!(cell.max().y, 32.34375);
    /// # Ok(())
    /// # }
    /// ```
    pub fn bounds(&self, hash: &str) -> Result<Rect<f64>, GeohashError> {
        let (lat_bits, lng_bits) = self.separate(hash)?;
        let lat_mid = dequantize(MIN_LAT, MAX_LAT, lat_bits, self.lat_steps);
        let lng_mid = dequantize(MIN_LNG, MAX_LNG, lng_bits, self.lng_steps);
        let half_lat = (MAX_LAT - MIN_LAT) / (1u64 << self.lat_steps) as f64 / 2.0;
        let half_lng = (MAX_LNG - MIN_LNG) / (1u64 << self.lng_steps) as f64 / 2.0;
        Ok(Rect::new(
            coord! { x: lng_mid - half_lng, y: lat_mid - half_lat },
            coord! { x: lng_mid + half_lng, y: lat_mid + half_lat },
        ))
    }

    /// Render the packed bits of a coordinate as a binary string, one
    /// character per interleaved bit.
    pub fn bit_string(&self, coord: &impl Coordinate) -> String {
        bit_string(self.to_bits(coord), self.total_bits())
    }

    /// Number of characters in the hashes this hasher produces.
    pub fn hash_len(&self) -> u32 {
        self.hash_len
    }

    /// Interleaved bit depth, `lat_steps + lng_steps`.
    pub fn total_bits(&self) -> u32 {
        self.lat_steps + self.lng_steps
    }

    /// The character table this hasher renders hashes with.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Quantization depth of the latitude axis.
    pub fn lat_steps(&self) -> u32 {
        self.lat_steps
    }

    /// Quantization depth of the longitude axis.
    pub fn lng_steps(&self) -> u32 {
        self.lng_steps
    }

    fn hash_string(&self, packed: u64) -> String {
        let mask = (1u64 << self.alphabet.char_bits) - 1;
        let mut hash = String::with_capacity(self.hash_len as usize);
        for i in (0..self.hash_len).rev() {
            let group = (packed >> (i * self.alphabet.char_bits)) & mask;
            hash.push(self.alphabet.encode_char(group as u8));
        }
        hash
    }

    fn neighbor_hash(&self, lng_bits: u32, lat_bits: u32) -> String {
        self.hash_string(interleave(lng_bits, lat_bits, self.lng_steps, self.lat_steps))
    }

    fn separate(&self, hash: &str) -> Result<(u32, u32), GeohashError> {
        let len = hash.chars().count();
        if len != self.hash_len as usize {
            return Err(GeohashError::InvalidHashLength(len));
        }
        let mut packed = 0u64;
        for c in hash.chars() {
            packed = (packed << self.alphabet.char_bits) | u64::from(self.alphabet.decode_char(c)?);
        }
        Ok(deinterleave(packed, self.lng_steps, self.lat_steps))
    }
}

/// The cell above `bits`, unless that would leave the axis range.
fn step_up(bits: u32, steps: u32) -> Option<u32> {
    let next = u64::from(bits) + 1;
    (next < 1u64 << steps).then_some(next as u32)
}

fn cached(
    cache: &'static [OnceCell<GeoHasher>],
    alphabet: Alphabet,
    hash_len: u32,
) -> Result<GeoHasher, GeohashError> {
    match hash_len.checked_sub(1).and_then(|i| cache.get(i as usize)) {
        Some(slot) => slot
            .get_or_try_init(|| GeoHasher::new(alphabet, hash_len))
            .copied(),
        None => GeoHasher::new(alphabet, hash_len),
    }
}
