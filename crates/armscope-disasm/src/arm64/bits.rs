//! Bit extraction primitives.

/// Returns the `width`-bit unsigned field of `word` starting at bit `start`.
#[inline]
pub const fn extract_bits(word: u32, start: u32, width: u32) -> u32 {
    if width == 0 || start >= 32 {
        return 0;
    }
    let mask = (1u64 << width) - 1;
    (((word as u64) >> start) & mask) as u32
}

/// Sign-extends the low `width` bits of `value` to 64 bits.
#[inline]
pub const fn sign_extend(value: u32, width: u32) -> i64 {
    if width == 0 {
        return 0;
    }
    if width >= 32 {
        return value as i32 as i64;
    }
    let shift = 64 - width;
    ((value as i64) << shift) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bits() {
        assert_eq!(extract_bits(0xd503201f, 25, 4), 0b1010);
        assert_eq!(extract_bits(0xd503201f, 0, 5), 0x1f);
        assert_eq!(extract_bits(0xffff_ffff, 0, 32), 0xffff_ffff);
        assert_eq!(extract_bits(0x8000_0000, 31, 1), 1);
        assert_eq!(extract_bits(0x1234_5678, 4, 0), 0);
        assert_eq!(extract_bits(0x1234_5678, 32, 4), 0);
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x3ffff, 19), 0x3ffff);
        assert_eq!(sign_extend(0x40000, 19), -0x40000);
        assert_eq!(sign_extend(0x7ffffff >> 1, 26), -1);
        assert_eq!(sign_extend(0x1ff, 9), -1);
        assert_eq!(sign_extend(0xff, 9), 255);
        assert_eq!(sign_extend(0x8000_0000, 32), -0x8000_0000);
        assert_eq!(sign_extend(5, 0), 0);
    }
}
