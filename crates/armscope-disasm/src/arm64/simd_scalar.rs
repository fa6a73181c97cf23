//! Advanced SIMD scalar instructions: one element of the vector forms,
//! operating on `b`/`h`/`s`/`d` registers.

use armscope_core::{ElementSize, Operation};

use super::bits::extract_bits;
use super::crypto;
use super::decoded::{element, imm, lane, reserved, scalar, vector_lanes, Decoded, Leaf};
use super::fields::{
    SimdCopy, SimdIndexedElement, SimdScalarPairwise, SimdShiftImmediate, SimdThreeDifferent, SimdThreeSame,
    SimdThreeSameExtra, SimdThreeSameFp16, SimdTwoRegMisc, SimdTwoRegMiscFp16,
};
use super::simd::{
    allows, by_element_operation, fp_element, fp_misc, fp_three_same, indexed_lane, integer_three_same,
    is_frint_sized, left_shift, right_shift, shift_element, shift_operation, ByElement, ShiftForm, Sizes, ANY_SIZE,
    D_ONLY, FP_ZERO, H_OR_S,
};

use Operation as O;

pub(crate) fn decode(word: u32) -> Leaf {
    let bit = |n| extract_bits(word, n, 1);
    if bit(24) == 1 {
        return if bit(10) == 0 {
            indexed_element(SimdIndexedElement(word))
        } else if extract_bits(word, 19, 4) == 0 {
            reserved("AdvSIMD scalar shift immh")
        } else {
            shift_immediate(SimdShiftImmediate(word))
        };
    }
    if bit(21) == 0 {
        return match (bit(10), bit(15)) {
            (1, 1) => three_same_extra(SimdThreeSameExtra(word)),
            (1, _) if extract_bits(word, 22, 2) == 0 => copy(SimdCopy(word)),
            (1, _) if bit(22) == 1 && bit(14) == 0 => three_same_fp16(SimdThreeSameFp16(word)),
            (0, 0) if word >> 28 == 0b0101 && extract_bits(word, 10, 2) == 0 => crypto::sha_three(word),
            _ => reserved("AdvSIMD scalar bit 21 clear"),
        };
    }
    match extract_bits(word, 10, 2) {
        0b01 | 0b11 => three_same(SimdThreeSame(word)),
        0b00 => three_different(SimdThreeDifferent(word)),
        _ => match extract_bits(word, 17, 4) {
            0b0000 => two_reg_misc(SimdTwoRegMisc(word)),
            0b1000 => pairwise(SimdScalarPairwise(word)),
            0b1100 if bit(22) == 1 => two_reg_misc_fp16(SimdTwoRegMiscFp16(word)),
            0b0100 if word >> 28 == 0b0101 => crypto::sha_two(word),
            _ => reserved("AdvSIMD scalar bits 17-20"),
        },
    }
}

/// Floating-point three-same operations that have a scalar form.
fn scalar_fp_three_same(u: bool, a: u32, opcode: u32) -> Option<Operation> {
    fp_three_same(u, a, opcode).filter(|op| {
        matches!(op, O::Fmulx | O::Fcmeq | O::Frecps | O::Frsqrts | O::Fcmge | O::Facge | O::Fabd | O::Fcmgt | O::Facgt)
    })
}

/// Floating-point two-register misc operations that have a scalar form.
fn scalar_fp_misc(u: bool, a: u32, opcode: u32) -> Option<(Operation, bool)> {
    if !u && a == 1 && opcode == 0b11111 {
        return Some((O::Frecpx, false));
    }
    fp_misc(u, a, opcode).filter(|(op, _)| {
        !is_frint_sized(*op)
            && !matches!(
                op,
                O::Frintn | O::Frintm | O::Frintp | O::Frintz | O::Frinta | O::Frintx | O::Frinti | O::Fabs | O::Fneg | O::Fsqrt
            )
    })
}

fn copy(f: SimdCopy) -> Leaf {
    let imm5 = f.imm5();
    if f.op() != 0 || f.imm4() != 0 || imm5 & 0xF == 0 {
        return reserved("AdvSIMD scalar copy");
    }
    let size = imm5.trailing_zeros();
    Ok(Decoded::new(O::Mov)
        .with(scalar(size, f.rd()))
        .with(lane(f.rn(), element(size), imm5 >> (size + 1))))
}

fn three_same(f: SimdThreeSame) -> Leaf {
    let (u, size, opcode) = (f.u(), f.size(), f.opcode());
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());

    if opcode >= 0b11000 {
        let (a, sz) = (size >> 1, size & 1);
        let Some(operation) = scalar_fp_three_same(u, a, opcode & 0b111) else {
            return reserved("AdvSIMD scalar three same FP opcode");
        };
        let log2 = fp_element(sz).log2_bytes();
        return Ok(Decoded::new(operation).with(scalar(log2, rd)).with(scalar(log2, rn)).with(scalar(log2, rm)));
    }

    let Some((operation, sizes)) = integer_three_same(u, opcode) else {
        return reserved("AdvSIMD scalar three same opcode");
    };
    let sizes: Sizes = match operation {
        O::Sqadd | O::Uqadd | O::Sqsub | O::Uqsub | O::Sqshl | O::Uqshl | O::Sqrshl | O::Uqrshl => ANY_SIZE,
        O::Cmgt | O::Cmhi | O::Cmge | O::Cmhs | O::Sshl | O::Ushl | O::Srshl | O::Urshl => D_ONLY,
        O::Add | O::Sub | O::Cmtst | O::Cmeq => D_ONLY,
        O::Sqdmulh | O::Sqrdmulh => sizes,
        _ => return reserved("no scalar form"),
    };
    if !allows(sizes, size) {
        return reserved("AdvSIMD scalar three same size");
    }
    Ok(Decoded::new(operation).with(scalar(size, rd)).with(scalar(size, rn)).with(scalar(size, rm)))
}

fn three_same_fp16(f: SimdThreeSameFp16) -> Leaf {
    let Some(operation) = scalar_fp_three_same(f.u(), f.a(), f.opcode()) else {
        return reserved("AdvSIMD scalar three same FP16 opcode");
    };
    Ok(Decoded::new(operation).with(scalar(1, f.rd())).with(scalar(1, f.rn())).with(scalar(1, f.rm())))
}

fn three_same_extra(f: SimdThreeSameExtra) -> Leaf {
    let size = f.size();
    let operation = match (f.u(), f.opcode()) {
        (true, 0b0000) => O::Sqrdmlah,
        (true, 0b0001) => O::Sqrdmlsh,
        _ => return reserved("AdvSIMD scalar three same extra opcode"),
    };
    if !allows(H_OR_S, size) {
        return reserved("AdvSIMD scalar three same extra size");
    }
    Ok(Decoded::new(operation).with(scalar(size, f.rd())).with(scalar(size, f.rn())).with(scalar(size, f.rm())))
}

fn three_different(f: SimdThreeDifferent) -> Leaf {
    let operation = match (f.u(), f.opcode()) {
        (false, 0b1001) => O::Sqdmlal,
        (false, 0b1011) => O::Sqdmlsl,
        (false, 0b1101) => O::Sqdmull,
        _ => return reserved("AdvSIMD scalar three different opcode"),
    };
    let size = f.size();
    if !allows(H_OR_S, size) {
        return reserved("AdvSIMD scalar three different size");
    }
    Ok(Decoded::new(operation)
        .with(scalar(size + 1, f.rd()))
        .with(scalar(size, f.rn()))
        .with(scalar(size, f.rm())))
}

fn two_reg_misc(f: SimdTwoRegMisc) -> Leaf {
    let (u, size, opcode) = (f.u(), f.size(), f.opcode());
    let (rd, rn) = (f.rd(), f.rn());

    if u && opcode == 0b10110 {
        return if size == 0b01 {
            Ok(Decoded::new(O::Fcvtxn).with(scalar(2, rd)).with(scalar(3, rn)))
        } else {
            reserved("FCVTXN size")
        };
    }

    if opcode >= 0b11000 || (0b01100..=0b01111).contains(&opcode) {
        let (a, sz) = (size >> 1, size & 1);
        let Some((operation, zero)) = scalar_fp_misc(u, a, opcode) else {
            return reserved("AdvSIMD scalar FP misc opcode");
        };
        let log2 = fp_element(sz).log2_bytes();
        let decoded = Decoded::new(operation).with(scalar(log2, rd)).with(scalar(log2, rn));
        return Ok(if zero { decoded.with(FP_ZERO) } else { decoded });
    }

    // (operation, sizes, narrowing, compare against zero)
    let (operation, sizes, narrow, zero) = match (u, opcode) {
        (false, 0b00011) => (O::Suqadd, ANY_SIZE, false, false),
        (false, 0b00111) => (O::Sqabs, ANY_SIZE, false, false),
        (false, 0b01000) => (O::Cmgt, D_ONLY, false, true),
        (false, 0b01001) => (O::Cmeq, D_ONLY, false, true),
        (false, 0b01010) => (O::Cmlt, D_ONLY, false, true),
        (false, 0b01011) => (O::Abs, D_ONLY, false, false),
        (false, 0b10100) => (O::Sqxtn, ANY_SIZE, true, false),
        (true, 0b00011) => (O::Usqadd, ANY_SIZE, false, false),
        (true, 0b00111) => (O::Sqneg, ANY_SIZE, false, false),
        (true, 0b01000) => (O::Cmge, D_ONLY, false, true),
        (true, 0b01001) => (O::Cmle, D_ONLY, false, true),
        (true, 0b01011) => (O::Neg, D_ONLY, false, false),
        (true, 0b10010) => (O::Sqxtun, ANY_SIZE, true, false),
        (true, 0b10100) => (O::Uqxtn, ANY_SIZE, true, false),
        _ => return reserved("AdvSIMD scalar two-register misc opcode"),
    };
    if !allows(sizes, size) || (narrow && size == 3) {
        return reserved("AdvSIMD scalar two-register misc size");
    }
    let decoded = Decoded::new(operation).with(scalar(size, rd));
    Ok(match (narrow, zero) {
        (true, _) => decoded.with(scalar(size + 1, rn)),
        (_, true) => decoded.with(scalar(size, rn)).with(imm(0)),
        _ => decoded.with(scalar(size, rn)),
    })
}

fn two_reg_misc_fp16(f: SimdTwoRegMiscFp16) -> Leaf {
    let Some((operation, zero)) = scalar_fp_misc(f.u(), f.a(), f.opcode()) else {
        return reserved("AdvSIMD scalar FP16 misc opcode");
    };
    let decoded = Decoded::new(operation).with(scalar(1, f.rd())).with(scalar(1, f.rn()));
    Ok(if zero { decoded.with(FP_ZERO) } else { decoded })
}

fn pairwise(f: SimdScalarPairwise) -> Leaf {
    let (u, size, opcode) = (f.u(), f.size(), f.opcode());
    if !u && opcode == 0b11011 {
        return if size == 3 {
            Ok(Decoded::new(O::Addp).with(scalar(3, f.rd())).with(vector_lanes(f.rn(), ElementSize::D, 2)))
        } else {
            reserved("ADDP (scalar) size")
        };
    }
    let (a, sz) = (size >> 1, size & 1);
    let operation = match (opcode, a) {
        (0b01100, 0) => O::Fmaxnmp,
        (0b01101, 0) => O::Faddp,
        (0b01111, 0) => O::Fmaxp,
        (0b01100, _) => O::Fminnmp,
        (0b01111, _) => O::Fminp,
        _ => return reserved("AdvSIMD scalar pairwise opcode"),
    };
    // U=0 is the half-precision form.
    let elem = match (u, sz) {
        (false, 0) => ElementSize::H,
        (false, _) => return reserved("FP16 pairwise sz"),
        (true, sz) => fp_element(sz),
    };
    Ok(Decoded::new(operation)
        .with(scalar(elem.log2_bytes(), f.rd()))
        .with(vector_lanes(f.rn(), elem, 2)))
}

fn shift_immediate(f: SimdShiftImmediate) -> Leaf {
    let (immh, immb) = (f.immh(), f.immb());
    let (rd, rn) = (f.rd(), f.rn());
    let Some((operation, _, form)) = shift_operation(f.u(), f.opcode()) else {
        return reserved("AdvSIMD scalar shift opcode");
    };
    let log2 = shift_element(immh);
    match form {
        ShiftForm::Long => reserved("no scalar widening shift"),
        ShiftForm::Narrow if matches!(operation, O::Shrn | O::Rshrn) => reserved("no scalar SHRN"),
        ShiftForm::Narrow if log2 == 3 => reserved("AdvSIMD scalar narrow immh<3>"),
        ShiftForm::Narrow => Ok(Decoded::new(operation)
            .with(scalar(log2, rd))
            .with(scalar(log2 + 1, rn))
            .with(imm(u64::from(right_shift(immh, immb))))),
        ShiftForm::Fixed if log2 == 0 => reserved("fixed-point conversion of bytes"),
        ShiftForm::Fixed => Ok(Decoded::new(operation)
            .with(scalar(log2, rd))
            .with(scalar(log2, rn))
            .with(imm(u64::from(right_shift(immh, immb))))),
        _ if log2 != 3 && !matches!(operation, O::Sqshl | O::Uqshl | O::Sqshlu) => {
            reserved("AdvSIMD scalar shift of a non-D element")
        }
        ShiftForm::Right => Ok(Decoded::new(operation)
            .with(scalar(log2, rd))
            .with(scalar(log2, rn))
            .with(imm(u64::from(right_shift(immh, immb))))),
        ShiftForm::Left => Ok(Decoded::new(operation)
            .with(scalar(log2, rd))
            .with(scalar(log2, rn))
            .with(imm(u64::from(left_shift(immh, immb))))),
    }
}

fn indexed_element(f: SimdIndexedElement) -> Leaf {
    let size = f.size();
    let Some((operation, shape)) = by_element_operation(f.u(), f.opcode()) else {
        return reserved("AdvSIMD scalar by element opcode");
    };
    let valid = match shape {
        ByElement::Float => size != 0b01,
        ByElement::Integer => matches!(operation, O::Sqdmulh | O::Sqrdmulh | O::Sqrdmlah | O::Sqrdmlsh),
        ByElement::Long(_) => matches!(operation, O::Sqdmlal | O::Sqdmlsl | O::Sqdmull),
        ByElement::Dot | ByElement::Complex => false,
    };
    if !valid || (shape != ByElement::Float && !allows(H_OR_S, size)) {
        return reserved("AdvSIMD scalar by element");
    }
    let Some((elem, index, m)) = indexed_lane(f, size) else {
        return reserved("AdvSIMD scalar by element L");
    };
    let log2 = elem.log2_bytes();
    let destination = match shape {
        ByElement::Long(_) => scalar(log2 + 1, f.rd()),
        _ => scalar(log2, f.rd()),
    };
    Ok(Decoded::new(operation)
        .with(destination)
        .with(scalar(log2, f.rn()))
        .with(lane(m, elem, index)))
}

#[cfg(test)]
mod tests {
    use crate::arm64::decode;
    use armscope_core::render;

    fn dis(word: u32) -> String {
        let insn = decode(word, 0).expect("decode");
        render(&insn, false).expect("render")
    }

    #[test]
    fn test_three_same() {
        assert_eq!(dis(0x5ee28420), "add\td0, d1, d2");
        assert_eq!(dis(0x5e620c20), "sqadd\th0, h1, h2");
        assert_eq!(dis(0x7ee2e420), "fcmgt\td0, d1, d2");
        assert_eq!(dis(0x5e62dc20), "fmulx\td0, d1, d2");
        // ADD of a 32-bit scalar
        assert!(decode(0x5ea28420, 0).is_err());
        // FADD has no scalar form
        assert!(decode(0x5e22d420, 0).is_err());
    }

    #[test]
    fn test_copy_and_pairwise() {
        assert_eq!(dis(0x5e0c0420), "mov\ts0, v1.s[1]");
        assert_eq!(dis(0x5ef1b820), "addp\td0, v1.2d");
        assert_eq!(dis(0x7e30d820), "faddp\ts0, v1.2s");
        assert_eq!(dis(0x7e70d820), "faddp\td0, v1.2d");
    }

    #[test]
    fn test_two_register_misc() {
        assert_eq!(dis(0x5ee0b820), "abs\td0, d1");
        assert_eq!(dis(0x5ee09820), "cmeq\td0, d1, #0x0");
        assert_eq!(dis(0x5ea14820), "sqxtn\ts0, d1");
        assert_eq!(dis(0x7e616820), "fcvtxn\ts0, d1");
        assert_eq!(dis(0x5e21d820), "scvtf\ts0, s1");
        assert_eq!(dis(0x5ee0d820), "fcmeq\td0, d1, #0.00000000");
        assert_eq!(dis(0x5ee1f820), "frecpx\td0, d1");
        assert_eq!(dis(0x5ea0c820), "fcmgt\ts0, s1, #0.00000000");
        assert_eq!(dis(0x5ef8c820), "fcmgt\th0, h1, #0.00000000");
        assert!(decode(0x5e20c820, 0).is_err());
        assert!(decode(0x5e78c820, 0).is_err());
    }

    #[test]
    fn test_shift_immediate() {
        assert_eq!(dis(0x5f410420), "sshr\td0, d1, #0x3f");
        assert_eq!(dis(0x5f4b5420), "shl\td0, d1, #0xb");
        assert_eq!(dis(0x5f0f7420), "sqshl\tb0, b1, #0x7");
        assert_eq!(dis(0x5f0c9420), "sqshrn\tb0, h1, #0x4");
        assert_eq!(dis(0x5f3fe420), "scvtf\ts0, s1, #0x1");
        // SSHR of a 32-bit scalar
        assert!(decode(0x5f210420, 0).is_err());
    }

    #[test]
    fn test_by_element_and_long() {
        assert_eq!(dis(0x5f829020), "fmul\ts0, s1, v2.s[0]");
        assert_eq!(dis(0x5fc21820), "fmla\td0, d1, v2.d[1]");
        assert_eq!(dis(0x5f82b020), "sqdmull\td0, s1, v2.s[0]");
        assert_eq!(dis(0x5ea2d020), "sqdmull\td0, s1, s2");
    }
}
