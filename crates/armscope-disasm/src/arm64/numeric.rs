//! Numeric helpers from the A64 decode pseudocode.

/// Low `n` bits set.
const fn ones(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Rotates the low `esize` bits of `value` right by `shift`.
const fn rotate_right(value: u64, shift: u32, esize: u32) -> u64 {
    if esize >= 64 {
        return value.rotate_right(shift);
    }
    let shift = shift % esize;
    let value = value & ones(esize);
    if shift == 0 {
        value
    } else {
        ((value >> shift) | (value << (esize - shift))) & ones(esize)
    }
}

/// Repeats the low `esize` bits of `value` across `width` bits.
const fn replicate(value: u64, esize: u32, width: u32) -> u64 {
    let mut result = 0u64;
    let mut pos = 0;
    while pos < width {
        result |= value << pos;
        pos += esize;
    }
    result & ones(width)
}

/// Expands a logical immediate (`N:immr:imms`) to a `width`-bit mask.
///
/// The element size comes from the highest set bit of `N:NOT(imms)`. A run of
/// `S + 1` ones is rotated right by `R` within the element and replicated.
/// Reserved encodings return 0, which is never a valid logical immediate.
pub fn decode_bit_masks(n: u32, imms: u32, immr: u32, width: u32) -> u64 {
    let combined = ((n & 1) << 6) | (!imms & 0x3F);
    if combined == 0 {
        return 0;
    }
    let len = 31 - combined.leading_zeros();
    if len < 1 {
        return 0;
    }
    let levels = (1 << len) - 1;
    let s = imms & levels;
    let r = immr & levels;
    if s == levels {
        return 0;
    }
    let esize = 1u32 << len;
    if esize > width {
        return 0;
    }
    let element = rotate_right(ones(s + 1), r, esize);
    replicate(element, esize, width)
}

/// Expands an 8-bit floating-point immediate to single-precision bits:
/// `sign : NOT(b6) : Replicate(b6, 5) : b5:4 : b3:0 : Zeros(19)`.
pub const fn vfp_expand_imm(imm8: u32) -> u32 {
    let sign = (imm8 >> 7) & 1;
    let b6 = (imm8 >> 6) & 1;
    let exponent_high = if b6 == 1 { 0x1F } else { 0 };
    (sign << 31) | ((b6 ^ 1) << 30) | (exponent_high << 25) | (((imm8 >> 4) & 3) << 23) | ((imm8 & 0xF) << 19)
}

/// Whether `ORR (immediate)` with a zero source should print as `MOV`
/// rather than the `MOVZ`/`MOVN` form that covers the same value.
pub fn move_wide_preferred(sf: bool, n: u32, imms: u32, immr: u32) -> bool {
    let width: u32 = if sf { 64 } else { 32 };
    let s = imms & 0x3F;
    let r = immr & 0x3F;

    if sf && n != 1 {
        return false;
    }
    if !sf && (n != 0 || s & 0x20 != 0) {
        return false;
    }

    if s < 16 {
        return (16 - (r % 16)) % 16 <= 15 - s;
    }
    if s >= width - 15 {
        return r % 16 <= s - (width - 15);
    }
    false
}

/// Whether a bitfield move prints as `SBFX`/`UBFX`.
pub fn bfx_preferred(sf: bool, unsigned: bool, imms: u32, immr: u32) -> bool {
    let imms = imms & 0x3F;
    let immr = immr & 0x3F;

    if imms < immr {
        return false;
    }
    if imms == if sf { 0b111111 } else { 0b011111 } {
        return false;
    }
    if immr == 0 {
        if !sf && (imms == 0b000111 || imms == 0b001111) {
            return false;
        }
        if sf && !unsigned && (imms == 0b000111 || imms == 0b001111 || imms == 0b011111) {
            return false;
        }
    }
    true
}

/// Expands the AdvSIMD modified immediate for `op`, `cmode` and `imm8` to the
/// 64-bit pattern written to each half of the vector.
pub const fn adv_simd_expand_imm(op: u32, cmode: u32, imm8: u32) -> u64 {
    let imm8 = (imm8 & 0xFF) as u64;
    match (cmode >> 1) & 7 {
        0b000 => replicate(imm8, 32, 64),
        0b001 => replicate(imm8 << 8, 32, 64),
        0b010 => replicate(imm8 << 16, 32, 64),
        0b011 => replicate(imm8 << 24, 32, 64),
        0b100 => replicate(imm8, 16, 64),
        0b101 => replicate(imm8 << 8, 16, 64),
        0b110 => {
            if cmode & 1 == 0 {
                replicate((imm8 << 8) | 0xFF, 32, 64)
            } else {
                replicate((imm8 << 16) | 0xFFFF, 32, 64)
            }
        }
        _ => match (cmode & 1, op & 1) {
            (0, 0) => replicate(imm8, 8, 64),
            (0, _) => {
                let mut result = 0u64;
                let mut bit = 0;
                while bit < 8 {
                    if imm8 & (1 << bit) != 0 {
                        result |= 0xFF << (bit * 8);
                    }
                    bit += 1;
                }
                result
            }
            (_, 0) => replicate(vfp_expand_imm(imm8 as u32) as u64, 32, 64),
            (_, _) => {
                let sign = (imm8 >> 7) & 1;
                let b6 = (imm8 >> 6) & 1;
                let exponent_high = if b6 == 1 { 0xFF } else { 0 };
                (sign << 63) | ((b6 ^ 1) << 62) | (exponent_high << 54) | ((imm8 & 0x3F) << 48)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_masks_simple() {
        // and x0, x1, #0x1
        assert_eq!(decode_bit_masks(1, 0, 0, 64), 1);
        // and w0, w1, #0xff
        assert_eq!(decode_bit_masks(0, 0b000111, 0, 32), 0xff);
        // orr x0, xzr, #0xaaaaaaaaaaaaaaaa
        assert_eq!(decode_bit_masks(0, 0b111100, 1, 64), 0xaaaa_aaaa_aaaa_aaaa);
        // 0x5555... (two-bit elements, unrotated)
        assert_eq!(decode_bit_masks(0, 0b111100, 0, 32), 0x5555_5555);
    }

    #[test]
    fn test_bit_masks_rotated() {
        // and x0, x1, #0x8000000000000000
        assert_eq!(decode_bit_masks(1, 0, 1, 64), 0x8000_0000_0000_0000);
        // 16-bit elements of 0x00ff rotated right by 4: 0xf00f
        assert_eq!(decode_bit_masks(0, 0b100111, 4, 32), 0xf00f_f00f);
        // all but the top bit of a 64-bit element
        assert_eq!(decode_bit_masks(1, 62, 0, 64), 0x7fff_ffff_ffff_ffff);
    }

    #[test]
    fn test_bit_masks_reserved() {
        // all-ones run
        assert_eq!(decode_bit_masks(1, 0b111111, 0, 64), 0);
        assert_eq!(decode_bit_masks(0, 0b011111, 0, 32), 0);
        // no set bit in N:NOT(imms)
        assert_eq!(decode_bit_masks(0, 0b111111, 0, 64), 0);
        // one-bit element
        assert_eq!(decode_bit_masks(0, 0b111110, 0, 64), 0);
        // 64-bit element in a 32-bit register
        assert_eq!(decode_bit_masks(1, 0, 0, 32), 0);
    }

    #[test]
    fn test_vfp_expand_imm() {
        assert_eq!(f32::from_bits(vfp_expand_imm(0x70)), 1.0);
        assert_eq!(f32::from_bits(vfp_expand_imm(0x00)), 2.0);
        assert_eq!(f32::from_bits(vfp_expand_imm(0x34)), 20.0);
        assert_eq!(f32::from_bits(vfp_expand_imm(0xdc)), -0.4375);
        assert_eq!(f32::from_bits(vfp_expand_imm(0xe0)), -0.5);
        assert_eq!(f32::from_bits(vfp_expand_imm(0xf0)), -1.0);
        assert_eq!(f32::from_bits(vfp_expand_imm(0x7f)), 1.9375);
        assert_eq!(f32::from_bits(vfp_expand_imm(0x1f)), 7.75);
        assert_eq!(f32::from_bits(vfp_expand_imm(0x3f)), 31.0);
    }

    #[test]
    fn test_move_wide_preferred() {
        // orr x0, xzr, #0xffff is movz-representable
        assert!(move_wide_preferred(true, 1, 15, 0));
        // #0xffff0000 in 64-bit: 16 ones rotated by 48
        assert!(move_wide_preferred(true, 1, 15, 48));
        // run straddling a halfword boundary
        assert!(!move_wide_preferred(true, 1, 15, 8));
        // 0x7fffffffffffffff: a single zero in the top halfword
        assert!(move_wide_preferred(true, 1, 62, 0));
        // element smaller than the register
        assert!(!move_wide_preferred(true, 0, 15, 0));
        assert!(!move_wide_preferred(false, 0, 0b100111, 0));
        // #0x1ffff: 17 ones
        assert!(!move_wide_preferred(true, 1, 16, 0));
    }

    #[test]
    fn test_bfx_preferred() {
        // ubfx x0, x1, #4, #8
        assert!(bfx_preferred(true, true, 11, 4));
        // lsr form
        assert!(!bfx_preferred(true, true, 63, 4));
        assert!(!bfx_preferred(false, true, 31, 4));
        // ubfiz form
        assert!(!bfx_preferred(true, true, 3, 8));
        // uxtb/uxth in 32-bit
        assert!(!bfx_preferred(false, true, 7, 0));
        assert!(!bfx_preferred(false, false, 15, 0));
        // sxtw in 64-bit
        assert!(!bfx_preferred(true, false, 31, 0));
        // ubfx x0, x1, #0, #8 stays ubfx
        assert!(bfx_preferred(true, true, 7, 0));
    }

    #[test]
    fn test_adv_simd_expand_imm() {
        assert_eq!(adv_simd_expand_imm(0, 0b0000, 0xab), 0x0000_00ab_0000_00ab);
        assert_eq!(adv_simd_expand_imm(0, 0b0010, 0xab), 0x0000_ab00_0000_ab00);
        assert_eq!(adv_simd_expand_imm(0, 0b1000, 0xab), 0x00ab_00ab_00ab_00ab);
        assert_eq!(adv_simd_expand_imm(0, 0b1100, 0xab), 0x0000_abff_0000_abff);
        assert_eq!(adv_simd_expand_imm(0, 0b1101, 0xab), 0x00ab_ffff_00ab_ffff);
        assert_eq!(adv_simd_expand_imm(0, 0b1110, 0xab), 0xabab_abab_abab_abab);
        assert_eq!(adv_simd_expand_imm(1, 0b1110, 0b1000_0101), 0xff00_0000_00ff_00ff);
        assert_eq!(adv_simd_expand_imm(0, 0b1111, 0x70), 0x3f80_0000_3f80_0000);
        assert_eq!(adv_simd_expand_imm(1, 0b1111, 0x70), 0x3ff0_0000_0000_0000);
    }
}
