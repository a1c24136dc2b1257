//! G.711 Scalar Transforms
//!
//! The four per-sample formulas that every lookup table in this crate is built
//! from. They are kept free of table state so each one can be audited on its
//! own against the bit layout below.
//!
//! ## Code byte layout
//!
//! ```text
//!   7   6 5 4   3 2 1 0
//! +---+-------+---------+
//! | S |  SEG  |  MANT   |
//! +---+-------+---------+
//! ```
//!
//! - `S`: sign, set for negative samples (before transmission inversion)
//! - `SEG`: segment index 0-7, the position of the leading one
//! - `MANT`: the four bits that follow the leading one
//!
//! ### A-law
//! - Magnitude clamped to 15 bits (`0x7FFF`)
//! - Segment 0 has no implicit leading one
//! - Sign bit and even bits are toggled for transmission (XOR `0xD5`)
//!
//! ### μ-law
//! - Magnitude clamped to `32635` and biased by `132`
//! - Every segment has an implicit leading one
//! - The whole byte is complemented for transmission

/// Largest magnitude an A-law encoder accepts (15 bits)
pub const ALAW_MAX: i32 = 0x7FFF;

/// Toggle mask applied to A-law bytes: sign bit plus every even bit
pub const ALAW_INVERT_MASK: u8 = 0xD5;

/// Largest magnitude a μ-law encoder accepts before the bias is added
pub const MULAW_MAX: i32 = 32635;

/// Bias added to μ-law magnitudes so the leading one is always in bits 7-14
pub const MULAW_BIAS: i32 = 0x84;

/// Scan bits 14 down to 7 for the leading one and return its segment.
///
/// Stops at segment 0 when none of bits 14-8 is set.
fn find_segment(magnitude: i32) -> i32 {
    let mut segment = 7;
    let mut mask = 0x4000;
    while magnitude & mask == 0 && segment > 0 {
        segment -= 1;
        mask >>= 1;
    }
    segment
}

/// A-law compression of one 16-bit linear sample
///
/// # Arguments
///
/// * `sample` - Input linear PCM sample (16-bit signed)
///
/// # Returns
///
/// A-law code byte, already toggled for transmission
pub fn alaw_encode(sample: i16) -> u8 {
    let mut pcm = i32::from(sample);

    // Bit 15 lands directly on bit 7 of the output
    let sign = (pcm & 0x8000) >> 8;
    if sign != 0 {
        pcm = -pcm;
    }
    if pcm > ALAW_MAX {
        pcm = ALAW_MAX;
    }

    let segment = find_segment(pcm);
    let mantissa = if segment == 0 {
        (pcm >> 4) & 0x0F
    } else {
        (pcm >> (segment + 3)) & 0x0F
    };

    let alaw = (sign | (segment << 4) | mantissa) as u8;
    alaw ^ ALAW_INVERT_MASK
}

/// A-law expansion of one code byte
///
/// # Arguments
///
/// * `code` - A-law code byte as transmitted
///
/// # Returns
///
/// Linear PCM sample at the midpoint of the code's quantization step
pub fn alaw_decode(code: u8) -> i16 {
    let alaw = code ^ ALAW_INVERT_MASK;

    let sign = alaw & 0x80;
    let segment = i32::from((alaw & 0x70) >> 4);
    let mut data = i32::from(alaw & 0x0F);

    data <<= 4;
    // Midpoint of the step
    data += 8;

    // Implicit leading one
    if segment != 0 {
        data += 0x100;
    }
    if segment > 1 {
        data <<= segment - 1;
    }

    (if sign == 0 { data } else { -data }) as i16
}

/// μ-law compression of one 16-bit linear sample
///
/// # Arguments
///
/// * `sample` - Input linear PCM sample (16-bit signed)
///
/// # Returns
///
/// μ-law code byte, already complemented for transmission
pub fn mulaw_encode(sample: i16) -> u8 {
    let mut pcm = i32::from(sample);

    let sign = (pcm & 0x8000) >> 8;
    if sign != 0 {
        pcm = -pcm;
    }
    if pcm > MULAW_MAX {
        pcm = MULAW_MAX;
    }
    pcm += MULAW_BIAS;

    // Biased magnitude is at least 0x84, so bit 7 stops the scan at the latest
    debug_assert!(pcm & 0x7F80 != 0);
    let segment = find_segment(pcm);
    let mantissa = (pcm >> (segment + 3)) & 0x0F;

    let mulaw = (sign | (segment << 4) | mantissa) as u8;
    !mulaw
}

/// μ-law expansion of one code byte
///
/// # Arguments
///
/// * `code` - μ-law code byte as transmitted
///
/// # Returns
///
/// Linear PCM sample at the midpoint of the code's quantization step
pub fn mulaw_decode(code: u8) -> i16 {
    let mulaw = !code;

    let sign = mulaw & 0x80;
    let segment = i32::from((mulaw & 0x70) >> 4);
    let mut data = i32::from(mulaw & 0x0F);

    data |= 0x10;
    data <<= 1;
    data += 1;
    data <<= segment + 2;
    data -= MULAW_BIAS;

    (if sign == 0 { data } else { -data }) as i16
}

/// Quantization step of a code's segment, in linear units
///
/// Decoders reconstruct at the midpoint of the step, so the round-trip error
/// of an unclamped sample is at most half of this value.
pub fn alaw_step_size(code: u8) -> i32 {
    let segment = i32::from(((code ^ ALAW_INVERT_MASK) & 0x70) >> 4);
    if segment <= 1 { 16 } else { 16 << (segment - 1) }
}

/// Quantization step of a code's segment, in linear units
pub fn mulaw_step_size(code: u8) -> i32 {
    let segment = i32::from(((!code) & 0x70) >> 4);
    8 << segment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(alaw_encode(0), 0xD5);
        assert_eq!(alaw_encode(-1), 0x55);
        assert_eq!(alaw_encode(128), 0xDD);
        assert_eq!(alaw_encode(1024), 0xE5);
        assert_eq!(alaw_encode(-128), 0x5D);
        assert_eq!(alaw_encode(i16::MAX), 0xAA);
        assert_eq!(alaw_encode(i16::MIN), 0x2A);

        assert_eq!(mulaw_encode(0), 0xFF);
        assert_eq!(mulaw_encode(-1), 0x7F);
        assert_eq!(mulaw_encode(128), 0xEF);
        assert_eq!(mulaw_encode(1024), 0xCD);
        assert_eq!(mulaw_encode(-128), 0x6F);
        assert_eq!(mulaw_encode(-1024), 0x4D);
        assert_eq!(mulaw_encode(i16::MAX), 0x80);
        assert_eq!(mulaw_encode(i16::MIN), 0x00);
    }

    #[test]
    fn test_decoder_matches_itu_reference() {
        // Expansion values of the ITU-T STL g711 module
        assert_eq!(alaw_decode(0xD5), 8);
        assert_eq!(alaw_decode(0xDD), 136);
        assert_eq!(alaw_decode(0xE5), 1056);
        assert_eq!(alaw_decode(0x52), -120);
        assert_eq!(alaw_decode(0x7A), -1008);
        assert_eq!(alaw_decode(0xAA), 32256);
        assert_eq!(alaw_decode(0x2A), -32256);

        assert_eq!(mulaw_decode(0xFF), 0);
        assert_eq!(mulaw_decode(0xEF), 132);
        assert_eq!(mulaw_decode(0xCD), 1052);
        assert_eq!(mulaw_decode(0x6F), -132);
        assert_eq!(mulaw_decode(0x4D), -1052);
        assert_eq!(mulaw_decode(0x80), 32124);
        assert_eq!(mulaw_decode(0x00), -32124);
    }

    #[test]
    fn test_find_segment_bounds() {
        assert_eq!(find_segment(0), 0);
        assert_eq!(find_segment(0xFF), 0);
        assert_eq!(find_segment(0x100), 1);
        assert_eq!(find_segment(0x7FFF), 7);
        assert_eq!(find_segment(0x4000), 7);
        assert_eq!(find_segment(0x3FFF), 6);
    }

    #[test]
    fn test_step_sizes() {
        assert_eq!(alaw_step_size(alaw_encode(10)), 16);
        assert_eq!(alaw_step_size(alaw_encode(300)), 16);
        assert_eq!(alaw_step_size(alaw_encode(600)), 32);
        assert_eq!(alaw_step_size(alaw_encode(30000)), 1024);

        assert_eq!(mulaw_step_size(mulaw_encode(0)), 8);
        assert_eq!(mulaw_step_size(mulaw_encode(30000)), 1024);
    }

    #[test]
    fn test_sign_symmetry_of_decoders() {
        for code in 0u8..=127 {
            assert_eq!(alaw_decode(code), -alaw_decode(code | 0x80));
            assert_eq!(mulaw_decode(code), -mulaw_decode(code | 0x80));
        }
    }
}
