//! Compact ("bits") target encoding
//!
//! The top byte is a base-256 exponent `e` and the low three bytes a mantissa
//! `m`, giving `target = m * 256^(e - 3)`. Bit 0x00800000 is a sign bit; a
//! negative target can never be met, so decoding rejects it.

use crate::error::{HeaderTrustError, Result};
use num_bigint::BigUint;

const MANTISSA_MASK: u32 = 0x007f_ffff;
const SIGN_BIT: u32 = 0x0080_0000;
const MAX_TARGET_BITS: u64 = 256;
const MAX_EXPONENT: u32 = 0xff;
/// Largest value the compact form can express
pub const MAX_COMPACT: u32 = (MAX_EXPONENT << 24) | MANTISSA_MASK;

pub fn decode_compact(bits: u32) -> Result<BigUint> {
    let exponent = bits >> 24;
    let mantissa = bits & MANTISSA_MASK;

    if bits & SIGN_BIT != 0 && mantissa != 0 {
        return Err(HeaderTrustError::InvalidCompactTarget(bits));
    }

    let target = if exponent <= 3 {
        BigUint::from(mantissa >> (8 * (3 - exponent)))
    } else {
        BigUint::from(mantissa) << (8 * (exponent as usize - 3))
    };

    if target.bits() > MAX_TARGET_BITS {
        return Err(HeaderTrustError::InvalidCompactTarget(bits));
    }
    Ok(target)
}

/// Canonical compact form of `target`; precision beyond the 23-bit mantissa is dropped.
///
/// Targets too wide for an 8-bit exponent saturate to `MAX_COMPACT`.
pub fn encode_compact(target: &BigUint) -> u32 {
    let bytes = target.bits().div_ceil(8);
    if bytes > u64::from(MAX_EXPONENT) {
        return MAX_COMPACT;
    }
    let mut size = bytes as u32;

    let mut compact = if size <= 3 {
        (low_u64(target) << (8 * (3 - size))) as u32
    } else {
        low_u64(&(target >> (8 * (size as usize - 3)))) as u32
    };

    // keep the mantissa positive
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }
    if size > MAX_EXPONENT {
        return MAX_COMPACT;
    }

    compact | (size << 24)
}

fn low_u64(value: &BigUint) -> u64 {
    value.iter_u64_digits().next().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_targets() {
        assert_eq!(decode_compact(0x03123456).unwrap(), BigUint::from(0x123456u32));
        assert_eq!(decode_compact(0x01120000).unwrap(), BigUint::from(0x12u32));
        assert_eq!(decode_compact(0x00000000).unwrap(), BigUint::from(0u32));

        let expected = BigUint::from(0xffffu32) << 208;
        assert_eq!(decode_compact(0x1d00ffff).unwrap(), expected);
    }

    #[test]
    fn test_decode_rejects_negative() {
        assert_eq!(
            decode_compact(0x04923456),
            Err(HeaderTrustError::InvalidCompactTarget(0x04923456))
        );
        // sign bit with an empty mantissa is just zero
        assert_eq!(decode_compact(0x01800000).unwrap(), BigUint::from(0u32));
    }

    #[test]
    fn test_decode_rejects_overflow() {
        assert!(decode_compact(0x2100ffff).is_ok());
        assert!(decode_compact(0x2101ffff).is_err());
        assert!(decode_compact(0xff123456).is_err());
    }

    #[test]
    fn test_encode_normalizes_sign_bit() {
        assert_eq!(encode_compact(&BigUint::from(0x80u32)), 0x02008000);
        assert_eq!(encode_compact(&(BigUint::from(0xa632u32) << 200)), 0x1c00a632);
    }

    #[test]
    fn test_round_trip_edge_exponents() {
        for bits in [
            0x00000000u32,
            0x01120000,
            0x02008000,
            0x03123456,
            0x1c0ffff0,
            0x1d00ffff,
            0x1e0ffff0,
            0x1f00ffff,
            0x207fffff,
            0x2100ffff,
        ] {
            let target = decode_compact(bits).unwrap();
            assert_eq!(encode_compact(&target), bits, "bits 0x{bits:08x}");
            assert_eq!(decode_compact(encode_compact(&target)).unwrap(), target);
        }
    }

    #[test]
    fn test_encode_truncates_precision() {
        let target = BigUint::from(0x1234_5678u32);
        let bits = encode_compact(&target);
        assert_eq!(bits, 0x04123456);
        assert_eq!(decode_compact(bits).unwrap(), BigUint::from(0x1234_5600u32));
    }

    #[test]
    fn test_encode_saturates_oversized_targets() {
        assert_eq!(encode_compact(&(BigUint::from(1u8) << 2100)), MAX_COMPACT);
        // 255 bytes whose top byte needs the sign-bit shift
        assert_eq!(encode_compact(&(BigUint::from(0x80u8) << (8 * 254))), MAX_COMPACT);
        // widest value that still fits
        assert_eq!(encode_compact(&(BigUint::from(0x7fu8) << (8 * 254))), 0xff7f_0000);
    }
}
