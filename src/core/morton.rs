use crate::core::constants::MAX_BITS;

/// Interleaves two quantized axes into a single z-order word.
///
/// Longitude owns the even positions counting most-significant-first, so the
/// top bit of the packed word is the top longitude bit. When the total width
/// is odd, longitude carries the extra bit and the latitude lane shifts down
/// by one to keep that alignment.
pub fn interleave(lng_bits: u32, lat_bits: u32, lng_width: u32, lat_width: u32) -> u64 {
    let lng = spread(lng_bits);
    let lat = spread(lat_bits);
    if lng_width > lat_width {
        lng | (lat << 1)
    } else {
        (lng << 1) | lat
    }
}

/// Splits a z-order word back into its axes, returning `(lat_bits, lng_bits)`.
///
/// Exact inverse of [`interleave`] for any valid width pair. Bits above
/// `lng_width + lat_width` are ignored.
pub fn deinterleave(mut packed: u64, lng_width: u32, lat_width: u32) -> (u32, u32) {
    let total = lng_width + lat_width;
    if total < MAX_BITS {
        packed &= (1u64 << total) - 1;
    }
    if lng_width > lat_width {
        (squash(packed >> 1), squash(packed))
    } else {
        (squash(packed), squash(packed >> 1))
    }
}

/// Renders the low `width` bits of `bits` as a zero-padded binary string.
pub fn bit_string(bits: u64, width: u32) -> String {
    let masked = if width < MAX_BITS {
        bits & ((1u64 << width) - 1)
    } else {
        bits
    };
    format!("{:0w$b}", masked, w = width as usize)
}

/// Widens the low 32 bits of `n` so bit k lands at position 2k.
fn spread(n: u32) -> u64 {
    // n = 00000000000000000000000000000000xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx
    // each stage doubles the gap between surviving bit groups
    let mut n = n as u64;
    n = (n ^ (n << 16)) & 0x0000_ffff_0000_ffff;
    n = (n ^ (n << 8)) & 0x00ff_00ff_00ff_00ff;
    n = (n ^ (n << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    n = (n ^ (n << 2)) & 0x3333_3333_3333_3333;
    (n ^ (n << 1)) & 0x5555_5555_5555_5555
}

/// Collapses the even positions of `n` so bit 2k lands at position k.
fn squash(mut n: u64) -> u32 {
    n &= 0x5555_5555_5555_5555;
    n |= n >> 1;
    n &= 0x3333_3333_3333_3333;
    n |= n >> 2;
    n &= 0x0f0f_0f0f_0f0f_0f0f;
    n |= n >> 4;
    n &= 0x00ff_00ff_00ff_00ff;
    n |= n >> 8;
    n &= 0x0000_ffff_0000_ffff;
    n |= n >> 16;
    (n & 0xffff_ffff) as u32
}
