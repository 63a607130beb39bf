/// Quantizes a bounded value into a `steps`-bit integer by iterative bisection.
///
/// The interval `[begin, end)` is halved `steps` times; each round emits one
/// bit, most significant first: 0 when `value` falls in the lower half, 1 when
/// it falls in the upper half. A value sitting exactly on the lower edge of
/// its interval belongs to the lower half of every further split, so the loop
/// stops early and leaves the remaining bits at zero.
///
/// Callers keep `steps` in (0, 32] and `value` inside `[begin, end]`. Values
/// outside the range are not rejected; on either side they saturate into the
/// highest cell and will not round-trip.
pub fn quantize(mut begin: f64, mut end: f64, value: f64, steps: u32) -> u32 {
    let mut bits = 0u32;
    for i in 0..steps {
        let mid = (begin + end) / 2.0;
        if value == begin {
            break;
        } else if value > begin && value < mid {
            end = mid;
        } else {
            begin = mid;
            bits |= 1 << (steps - i - 1);
        }
    }
    bits
}

/// Replays the bisection encoded in the low `steps` bits of `bits` and
/// returns the midpoint of the final interval.
///
/// The midpoint is the canonical representative of the quantization cell,
/// not the value that produced the bits. Bits above `steps` are ignored.
pub fn dequantize(mut begin: f64, mut end: f64, mut bits: u32, steps: u32) -> f64 {
    if steps < 32 {
        bits &= (1 << steps) - 1;
    }
    let prefix = 32 - steps;
    for i in 0..steps {
        let mid = (begin + end) / 2.0;
        let bit = (bits << (prefix + i)) >> 31;
        if bit == 0 {
            end = mid;
        } else {
            begin = mid;
        }
    }
    (begin + end) / 2.0
}
