use crate::core::constants::BIT_DISTANCES_CM;
use crate::util::error::GeohashError;

/// A fixed character table rendering bit groups of one width.
///
/// The table must be strictly sorted (decode is a binary search) and hold
/// exactly `2^char_bits` entries, index = value of the bit group. The three
/// supported tables are [`BASE4`], [`BASE16`] and [`BASE32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    /// Sorted character table; index = value of the bit group
    pub table: &'static [char],
    /// Bits consumed per character
    pub char_bits: u32,
}

/// 4-symbol table, 2 bits per character.
pub const BASE4: Alphabet = Alphabet {
    table: &['0', '1', '2', '3'],
    char_bits: 2,
};

/// 16-symbol table, 4 bits per character.
///
/// Digits 0-7 followed by letters a-h. This is not standard hexadecimal: 8
/// and 9 do not appear, and `a` means 8.
pub const BASE16: Alphabet = Alphabet {
    table: &[
        '0', '1', '2', '3', '4', '5', '6', '7', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    ],
    char_bits: 4,
};

/// 32-symbol table, 5 bits per character.
///
/// Digits plus the lowercase letters with a, i, l and o left out to avoid
/// visually ambiguous hashes.
pub const BASE32: Alphabet = Alphabet {
    table: &[
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j',
        'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ],
    char_bits: 5,
};

impl Alphabet {
    /// Renders one bit group as its character.
    ///
    /// Callers keep `bits` below `2^char_bits`.
    pub fn encode_char(&self, bits: u8) -> char {
        self.table[bits as usize]
    }

    /// Looks up the bit group for a character.
    pub fn decode_char(&self, c: char) -> Result<u8, GeohashError> {
        match self.table.binary_search(&c) {
            Ok(index) => Ok(index as u8),
            Err(_) => Err(GeohashError::UnknownCharacter(c)),
        }
    }

    /// Returns the hash length whose cells most tightly cover `distance_cm`,
    /// by integer division of [`minimal_bit_len`].
    ///
    /// Flooring to whole characters can only widen the cells, so they stay at
    /// least `distance_cm` across.
    pub fn minimal_hash_len(&self, distance_cm: f64) -> Result<u32, GeohashError> {
        Ok(minimal_bit_len(distance_cm)? / self.char_bits)
    }
}

/// Returns the deepest even bit count whose tabulated cell size is still at
/// least `distance_cm`.
///
/// Scans [`BIT_DISTANCES_CM`] front to back; the entry before the first one
/// strictly below the requested distance wins. Distances at or beyond the
/// widest entry are too coarse to plan for, distances below the 64-bit entry
/// too fine.
pub fn minimal_bit_len(distance_cm: f64) -> Result<u32, GeohashError> {
    if distance_cm >= BIT_DISTANCES_CM[0] {
        return Err(GeohashError::ResolutionTooCoarse(distance_cm));
    }
    for (i, cell) in BIT_DISTANCES_CM.iter().enumerate().skip(1) {
        if *cell < distance_cm {
            return Ok((i as u32 - 1) * 2);
        }
    }
    if distance_cm < BIT_DISTANCES_CM[BIT_DISTANCES_CM.len() - 1] {
        return Err(GeohashError::ResolutionTooFine(distance_cm));
    }
    Ok(64)
}
