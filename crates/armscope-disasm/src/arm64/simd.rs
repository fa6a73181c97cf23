//! Advanced SIMD vector instructions, and the top of the SIMD&FP group.
//!
//! The group splits on bits 28-31 into the vector classes decoded here, the
//! scalar classes in `simd_scalar`, scalar floating point in `float` and the
//! cryptographic extensions in `crypto`.

use armscope_core::{Arrangement, ElementSize, Operand, Operation, Shift, ShiftType};

use super::bits::extract_bits;
use super::crypto;
use super::decoded::{
    dreg, element, gpr, imm, imm64, imm_lsl, lane, lane_group, pick, register_list, reserved, scalar, sreg, vector,
    vector_lanes, Decoded, Leaf,
};
use super::fields::{
    SimdAcrossLanes, SimdCopy, SimdExtract, SimdIndexedElement, SimdModifiedImmediate, SimdPermute,
    SimdShiftImmediate, SimdTableLookup, SimdThreeDifferent, SimdThreeSame, SimdThreeSameExtra,
    SimdThreeSameFp16, SimdTwoRegMisc, SimdTwoRegMiscFp16,
};
use super::float;
use super::numeric::{adv_simd_expand_imm, vfp_expand_imm};
use super::simd_scalar;

use Operation as O;

pub(crate) fn decode(word: u32) -> Leaf {
    let op0 = extract_bits(word, 28, 4);
    if op0 & 0b0101 == 0b0001 {
        float::decode(word)
    } else if op0 == 0b1100 {
        crypto::decode_wide(word)
    } else if op0 & 0b1101 == 0b0101 {
        simd_scalar::decode(word)
    } else if op0 & 0b1001 == 0 {
        vector_class(word)
    } else {
        reserved("SIMD&FP op0")
    }
}

fn vector_class(word: u32) -> Leaf {
    let bit = |n| extract_bits(word, n, 1);
    if bit(24) == 1 {
        return if bit(10) == 0 {
            indexed_element(SimdIndexedElement(word))
        } else if extract_bits(word, 19, 4) == 0 {
            modified_immediate(SimdModifiedImmediate(word))
        } else {
            shift_immediate(SimdShiftImmediate(word))
        };
    }
    if bit(21) == 0 {
        return match (bit(10), bit(15)) {
            (1, 1) => three_same_extra(SimdThreeSameExtra(word)),
            (1, _) if extract_bits(word, 22, 2) == 0 => copy(SimdCopy(word)),
            (1, _) if bit(22) == 1 && bit(14) == 0 => three_same_fp16(SimdThreeSameFp16(word)),
            (0, 0) if bit(29) == 1 => extract(SimdExtract(word)),
            (0, 0) if extract_bits(word, 10, 2) == 0b00 => table_lookup(SimdTableLookup(word)),
            (0, 0) if extract_bits(word, 10, 2) == 0b10 => permute(SimdPermute(word)),
            _ => reserved("AdvSIMD vector bit 21 clear"),
        };
    }
    match extract_bits(word, 10, 2) {
        0b01 | 0b11 => three_same(SimdThreeSame(word)),
        0b00 => three_different(SimdThreeDifferent(word)),
        _ => match extract_bits(word, 17, 4) {
            0b0000 => two_reg_misc(SimdTwoRegMisc(word)),
            0b1000 => across_lanes(SimdAcrossLanes(word)),
            0b1100 if bit(22) == 1 => two_reg_misc_fp16(SimdTwoRegMiscFp16(word)),
            0b0100 if word >> 28 == 0b0100 => crypto::aes(word),
            _ => reserved("AdvSIMD vector bits 17-20"),
        },
    }
}

/// `size` values an operation accepts, as a mask indexed by `size`.
pub(super) type Sizes = u8;

pub(super) const ANY_SIZE: Sizes = 0b1111;
pub(super) const NO_D: Sizes = 0b0111;
pub(super) const H_OR_S: Sizes = 0b0110;
pub(super) const B_OR_H: Sizes = 0b0011;
pub(super) const B_ONLY: Sizes = 0b0001;
pub(super) const D_ONLY: Sizes = 0b1000;

#[inline]
pub(super) fn allows(sizes: Sizes, size: u32) -> bool {
    sizes & (1 << size) != 0
}

/// Single- or double-precision element from `sz`.
#[inline]
pub(super) fn fp_element(sz: u32) -> ElementSize {
    if sz == 0 {
        ElementSize::S
    } else {
        ElementSize::D
    }
}

/// `#0.0` of the floating-point compares against zero.
pub(super) const FP_ZERO: Operand = Operand::FloatImm(0);

/// Floating-point three-same operation by `U`, `a` (`size<1>`) and the
/// low three opcode bits. Shared by the single/double, half-precision and
/// scalar tables.
pub(super) fn fp_three_same(u: bool, a: u32, opcode: u32) -> Option<Operation> {
    Some(match (u, a, opcode) {
        (false, 0, 0b000) => O::Fmaxnm,
        (false, 0, 0b001) => O::Fmla,
        (false, 0, 0b010) => O::Fadd,
        (false, 0, 0b011) => O::Fmulx,
        (false, 0, 0b100) => O::Fcmeq,
        (false, 0, 0b110) => O::Fmax,
        (false, 0, 0b111) => O::Frecps,
        (false, _, 0b000) => O::Fminnm,
        (false, _, 0b001) => O::Fmls,
        (false, _, 0b010) => O::Fsub,
        (false, _, 0b110) => O::Fmin,
        (false, _, 0b111) => O::Frsqrts,
        (true, 0, 0b000) => O::Fmaxnmp,
        (true, 0, 0b010) => O::Faddp,
        (true, 0, 0b011) => O::Fmul,
        (true, 0, 0b100) => O::Fcmge,
        (true, 0, 0b101) => O::Facge,
        (true, 0, 0b110) => O::Fmaxp,
        (true, 0, 0b111) => O::Fdiv,
        (true, _, 0b000) => O::Fminnmp,
        (true, _, 0b010) => O::Fabd,
        (true, _, 0b100) => O::Fcmgt,
        (true, _, 0b101) => O::Facgt,
        (true, _, 0b110) => O::Fminp,
        _ => return None,
    })
}

/// Floating-point two-register misc operation, and whether it compares
/// against zero. The compare, `FABS`, `FNEG` and `FSQRT` rows need
/// `size<1>` set.
pub(super) fn fp_misc(u: bool, a: u32, opcode: u32) -> Option<(Operation, bool)> {
    Some(match (u, a, opcode) {
        (false, 0, 0b11000) => (O::Frintn, false),
        (false, 0, 0b11001) => (O::Frintm, false),
        (false, 0, 0b11010) => (O::Fcvtns, false),
        (false, 0, 0b11011) => (O::Fcvtms, false),
        (false, 0, 0b11100) => (O::Fcvtas, false),
        (false, 0, 0b11101) => (O::Scvtf, false),
        (false, 0, 0b11110) => (O::Frint32z, false),
        (false, 0, 0b11111) => (O::Frint64z, false),
        (false, 1, 0b01100) => (O::Fcmgt, true),
        (false, 1, 0b01101) => (O::Fcmeq, true),
        (false, 1, 0b01110) => (O::Fcmlt, true),
        (false, 1, 0b01111) => (O::Fabs, false),
        (false, _, 0b11000) => (O::Frintp, false),
        (false, _, 0b11001) => (O::Frintz, false),
        (false, _, 0b11010) => (O::Fcvtps, false),
        (false, _, 0b11011) => (O::Fcvtzs, false),
        (false, _, 0b11101) => (O::Frecpe, false),
        (true, 0, 0b11000) => (O::Frinta, false),
        (true, 0, 0b11001) => (O::Frintx, false),
        (true, 0, 0b11010) => (O::Fcvtnu, false),
        (true, 0, 0b11011) => (O::Fcvtmu, false),
        (true, 0, 0b11100) => (O::Fcvtau, false),
        (true, 0, 0b11101) => (O::Ucvtf, false),
        (true, 0, 0b11110) => (O::Frint32x, false),
        (true, 0, 0b11111) => (O::Frint64x, false),
        (true, 1, 0b01100) => (O::Fcmge, true),
        (true, 1, 0b01101) => (O::Fcmle, true),
        (true, 1, 0b01111) => (O::Fneg, false),
        (true, _, 0b11001) => (O::Frinti, false),
        (true, _, 0b11010) => (O::Fcvtpu, false),
        (true, _, 0b11011) => (O::Fcvtzu, false),
        (true, _, 0b11101) => (O::Frsqrte, false),
        (true, 1, 0b11111) => (O::Fsqrt, false),
        _ => return None,
    })
}

/// `FRINT32*`/`FRINT64*`, which have no half-precision or scalar form.
pub(super) fn is_frint_sized(op: Operation) -> bool {
    matches!(op, O::Frint32z | O::Frint32x | O::Frint64z | O::Frint64x)
}

/// Element, lane index and `Vm` of an indexed-element operand. Half-precision
/// elements (`size` 00 or 01) index with `H:L:M` and reach only `v0`-`v15`.
pub(super) fn indexed_lane(f: SimdIndexedElement, size: u32) -> Option<(ElementSize, u32, u32)> {
    let (h, l, m, rm) = (f.h(), f.l(), f.m(), f.rm());
    match size {
        0b00 | 0b01 => Some((ElementSize::H, (h << 2) | (l << 1) | m, rm)),
        0b10 => Some((ElementSize::S, (h << 1) | l, (m << 4) | rm)),
        _ if l == 0 => Some((ElementSize::D, h, (m << 4) | rm)),
        _ => None,
    }
}

/// Log2 of the element bytes selected by the highest set bit of a nonzero `immh`.
#[inline]
pub(super) fn shift_element(immh: u32) -> u32 {
    31 - immh.leading_zeros()
}

/// Right shift amount: `2 * esize - immh:immb`.
#[inline]
pub(super) fn right_shift(immh: u32, immb: u32) -> u32 {
    (16 << shift_element(immh)) - ((immh << 3) | immb)
}

/// Left shift amount: `immh:immb - esize`.
#[inline]
pub(super) fn left_shift(immh: u32, immb: u32) -> u32 {
    ((immh << 3) | immb) - (8 << shift_element(immh))
}

fn copy(f: SimdCopy) -> Leaf {
    let imm5 = f.imm5();
    if imm5 & 0xF == 0 {
        return reserved("AdvSIMD copy imm5");
    }
    let size = imm5.trailing_zeros();
    let elem = element(size);
    let index = imm5 >> (size + 1);
    let (q, rd, rn) = (f.q(), f.rd(), f.rn());

    if f.op() == 1 {
        if !q {
            return reserved("INS (element) with Q clear");
        }
        let source = f.imm4() >> size;
        return Ok(Decoded::new(O::Mov).with(lane(rd, elem, index)).with(lane(rn, elem, source)));
    }
    match f.imm4() {
        0b0000 if size == 3 && !q => reserved("DUP (element) of a 1D vector"),
        0b0000 => Ok(Decoded::new(O::Dup).with(vector(rd, elem, q)).with(lane(rn, elem, index))),
        0b0001 if size == 3 && !q => reserved("DUP (general) of a 1D vector"),
        0b0001 => Ok(Decoded::new(O::Dup).with(vector(rd, elem, q)).with(gpr(size == 3, rn))),
        0b0011 if q => Ok(Decoded::new(O::Mov).with(lane(rd, elem, index)).with(gpr(size == 3, rn))),
        0b0101 if size < 2 || (size == 2 && q) => {
            Ok(Decoded::new(O::Smov).with(gpr(q, rd)).with(lane(rn, elem, index)))
        }
        0b0111 if (size < 3 && !q) || (size == 3 && q) => {
            let operation = if size >= 2 { O::Mov } else { O::Umov };
            Ok(Decoded::new(operation).with(gpr(q, rd)).with(lane(rn, elem, index)))
        }
        _ => reserved("AdvSIMD copy imm4"),
    }
}

fn table_lookup(f: SimdTableLookup) -> Leaf {
    if f.op2() != 0 {
        return reserved("table lookup op2");
    }
    let operation = if f.op() == 0 { O::Tbl } else { O::Tbx };
    let q = f.q();
    let table = register_list(f.rn(), f.len() + 1, Arrangement::full(ElementSize::B, true), None);
    Ok(Decoded::new(operation)
        .with(vector(f.rd(), ElementSize::B, q))
        .with(table)
        .with(vector(f.rm(), ElementSize::B, q)))
}

fn permute(f: SimdPermute) -> Leaf {
    let operation = match f.opcode() {
        0b001 => O::Uzp1,
        0b010 => O::Trn1,
        0b011 => O::Zip1,
        0b101 => O::Uzp2,
        0b110 => O::Trn2,
        0b111 => O::Zip2,
        _ => return reserved("permute opcode"),
    };
    let (size, q) = (f.size(), f.q());
    if size == 3 && !q {
        return reserved("permute of 1D vectors");
    }
    let elem = element(size);
    Ok(Decoded::new(operation)
        .with(vector(f.rd(), elem, q))
        .with(vector(f.rn(), elem, q))
        .with(vector(f.rm(), elem, q)))
}

fn extract(f: SimdExtract) -> Leaf {
    let (q, index) = (f.q(), f.imm4());
    if f.op2() != 0 || (!q && index >= 8) {
        return reserved("EXT op2/imm4");
    }
    Ok(Decoded::new(O::Ext)
        .with(vector(f.rd(), ElementSize::B, q))
        .with(vector(f.rn(), ElementSize::B, q))
        .with(vector(f.rm(), ElementSize::B, q))
        .with(imm(u64::from(index))))
}

/// Integer three-same operation and its valid sizes; also used by the
/// scalar decoder, which narrows the sizes further.
pub(super) fn integer_three_same(u: bool, opcode: u32) -> Option<(Operation, Sizes)> {
    Some(match (opcode, u) {
        (0b00000, false) => (O::Shadd, NO_D),
        (0b00000, true) => (O::Uhadd, NO_D),
        (0b00001, false) => (O::Sqadd, ANY_SIZE),
        (0b00001, true) => (O::Uqadd, ANY_SIZE),
        (0b00010, false) => (O::Srhadd, NO_D),
        (0b00010, true) => (O::Urhadd, NO_D),
        (0b00100, false) => (O::Shsub, NO_D),
        (0b00100, true) => (O::Uhsub, NO_D),
        (0b00101, false) => (O::Sqsub, ANY_SIZE),
        (0b00101, true) => (O::Uqsub, ANY_SIZE),
        (0b00110, false) => (O::Cmgt, ANY_SIZE),
        (0b00110, true) => (O::Cmhi, ANY_SIZE),
        (0b00111, false) => (O::Cmge, ANY_SIZE),
        (0b00111, true) => (O::Cmhs, ANY_SIZE),
        (0b01000, false) => (O::Sshl, ANY_SIZE),
        (0b01000, true) => (O::Ushl, ANY_SIZE),
        (0b01001, false) => (O::Sqshl, ANY_SIZE),
        (0b01001, true) => (O::Uqshl, ANY_SIZE),
        (0b01010, false) => (O::Srshl, ANY_SIZE),
        (0b01010, true) => (O::Urshl, ANY_SIZE),
        (0b01011, false) => (O::Sqrshl, ANY_SIZE),
        (0b01011, true) => (O::Uqrshl, ANY_SIZE),
        (0b01100, false) => (O::Smax, NO_D),
        (0b01100, true) => (O::Umax, NO_D),
        (0b01101, false) => (O::Smin, NO_D),
        (0b01101, true) => (O::Umin, NO_D),
        (0b01110, false) => (O::Sabd, NO_D),
        (0b01110, true) => (O::Uabd, NO_D),
        (0b01111, false) => (O::Saba, NO_D),
        (0b01111, true) => (O::Uaba, NO_D),
        (0b10000, false) => (O::Add, ANY_SIZE),
        (0b10000, true) => (O::Sub, ANY_SIZE),
        (0b10001, false) => (O::Cmtst, ANY_SIZE),
        (0b10001, true) => (O::Cmeq, ANY_SIZE),
        (0b10010, false) => (O::Mla, NO_D),
        (0b10010, true) => (O::Mls, NO_D),
        (0b10011, false) => (O::Mul, NO_D),
        (0b10011, true) => (O::Pmul, B_ONLY),
        (0b10100, false) => (O::Smaxp, NO_D),
        (0b10100, true) => (O::Umaxp, NO_D),
        (0b10101, false) => (O::Sminp, NO_D),
        (0b10101, true) => (O::Uminp, NO_D),
        (0b10110, false) => (O::Sqdmulh, H_OR_S),
        (0b10110, true) => (O::Sqrdmulh, H_OR_S),
        (0b10111, false) => (O::Addp, ANY_SIZE),
        _ => return None,
    })
}

fn three_same(f: SimdThreeSame) -> Leaf {
    let (u, size, q, opcode) = (f.u(), f.size(), f.q(), f.opcode());
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());

    if opcode >= 0b11000 {
        let (a, sz) = (size >> 1, size & 1);
        let Some(operation) = fp_three_same(u, a, opcode & 0b111) else {
            return reserved("AdvSIMD three same FP opcode");
        };
        if sz == 1 && !q {
            return reserved("AdvSIMD three same FP of 1D vectors");
        }
        let elem = fp_element(sz);
        return Ok(Decoded::new(operation)
            .with(vector(rd, elem, q))
            .with(vector(rn, elem, q))
            .with(vector(rm, elem, q)));
    }

    if opcode == 0b00011 {
        let operation = match (u, size) {
            (false, 0b00) => O::And,
            (false, 0b01) => O::Bic,
            (false, 0b10) => O::Orr,
            (false, _) => O::Orn,
            (true, 0b00) => O::Eor,
            (true, 0b01) => O::Bsl,
            (true, 0b10) => O::Bit,
            (true, _) => O::Bif,
        };
        let decoded = Decoded::new(operation)
            .with(vector(rd, ElementSize::B, q))
            .with(vector(rn, ElementSize::B, q))
            .with(vector(rm, ElementSize::B, q));
        return Ok(if operation == O::Orr && rn == rm {
            decoded.alias(O::Mov).drop_operand(2)
        } else {
            decoded
        });
    }

    let Some((operation, sizes)) = integer_three_same(u, opcode) else {
        return reserved("AdvSIMD three same opcode");
    };
    if !allows(sizes, size) || (size == 3 && !q) {
        return reserved("AdvSIMD three same size");
    }
    let elem = element(size);
    Ok(Decoded::new(operation)
        .with(vector(rd, elem, q))
        .with(vector(rn, elem, q))
        .with(vector(rm, elem, q)))
}

fn three_same_fp16(f: SimdThreeSameFp16) -> Leaf {
    let Some(operation) = fp_three_same(f.u(), f.a(), f.opcode()) else {
        return reserved("AdvSIMD three same FP16 opcode");
    };
    let q = f.q();
    Ok(Decoded::new(operation)
        .with(vector(f.rd(), ElementSize::H, q))
        .with(vector(f.rn(), ElementSize::H, q))
        .with(vector(f.rm(), ElementSize::H, q)))
}

fn three_same_extra(f: SimdThreeSameExtra) -> Leaf {
    let (u, size, q, opcode) = (f.u(), f.size(), f.q(), f.opcode());
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());
    match (u, opcode) {
        (_, 0b0010) if size == 0b10 => {
            let operation = if u { O::Udot } else { O::Sdot };
            Ok(Decoded::new(operation)
                .with(vector(rd, ElementSize::S, q))
                .with(vector(rn, ElementSize::B, q))
                .with(vector(rm, ElementSize::B, q)))
        }
        (true, 0b0000 | 0b0001) if size == 0b01 || size == 0b10 => {
            let operation = if opcode == 0 { O::Sqrdmlah } else { O::Sqrdmlsh };
            let elem = element(size);
            Ok(Decoded::new(operation)
                .with(vector(rd, elem, q))
                .with(vector(rn, elem, q))
                .with(vector(rm, elem, q)))
        }
        (true, 0b1000..=0b1111) => {
            // FCMLA rotates by rot * 90, FCADD by 90 or 270.
            let (operation, rotation) = if opcode & 0b0100 == 0 {
                (O::Fcmla, (opcode & 0b11) * 90)
            } else if opcode & 1 == 0 {
                (O::Fcadd, if opcode & 0b10 == 0 { 90 } else { 270 })
            } else {
                return reserved("FCADD opcode");
            };
            if size == 0b00 || (size == 0b11 && !q) {
                return reserved("complex arithmetic size");
            }
            let elem = element(size);
            Ok(Decoded::new(operation)
                .with(vector(rd, elem, q))
                .with(vector(rn, elem, q))
                .with(vector(rm, elem, q))
                .with(Operand::imm32_decimal(u64::from(rotation))))
        }
        _ => reserved("AdvSIMD three same extra opcode"),
    }
}

/// Operand shape of a two-register misc operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Misc {
    Same,
    /// Compare against `#0`.
    Zero,
    /// Pairwise add long: destination elements twice as wide, half as many.
    PairLong,
    /// Narrowing to the lower or upper half (`...2`).
    Narrow(Operation),
    /// `SHLL`: widening with the element width as shift.
    ShiftLong(Operation),
}

fn integer_misc(u: bool, opcode: u32) -> Option<(Operation, Sizes, Misc)> {
    Some(match (u, opcode) {
        (false, 0b00000) => (O::Rev64, NO_D, Misc::Same),
        (false, 0b00001) => (O::Rev16, B_ONLY, Misc::Same),
        (false, 0b00010) => (O::Saddlp, NO_D, Misc::PairLong),
        (false, 0b00011) => (O::Suqadd, ANY_SIZE, Misc::Same),
        (false, 0b00100) => (O::Cls, NO_D, Misc::Same),
        (false, 0b00101) => (O::Cnt, B_ONLY, Misc::Same),
        (false, 0b00110) => (O::Sadalp, NO_D, Misc::PairLong),
        (false, 0b00111) => (O::Sqabs, ANY_SIZE, Misc::Same),
        (false, 0b01000) => (O::Cmgt, ANY_SIZE, Misc::Zero),
        (false, 0b01001) => (O::Cmeq, ANY_SIZE, Misc::Zero),
        (false, 0b01010) => (O::Cmlt, ANY_SIZE, Misc::Zero),
        (false, 0b01011) => (O::Abs, ANY_SIZE, Misc::Same),
        (false, 0b10010) => (O::Xtn, NO_D, Misc::Narrow(O::Xtn2)),
        (false, 0b10100) => (O::Sqxtn, NO_D, Misc::Narrow(O::Sqxtn2)),
        (true, 0b00000) => (O::Rev32, B_OR_H, Misc::Same),
        (true, 0b00010) => (O::Uaddlp, NO_D, Misc::PairLong),
        (true, 0b00011) => (O::Usqadd, ANY_SIZE, Misc::Same),
        (true, 0b00100) => (O::Clz, NO_D, Misc::Same),
        (true, 0b00110) => (O::Uadalp, NO_D, Misc::PairLong),
        (true, 0b00111) => (O::Sqneg, ANY_SIZE, Misc::Same),
        (true, 0b01000) => (O::Cmge, ANY_SIZE, Misc::Zero),
        (true, 0b01001) => (O::Cmle, ANY_SIZE, Misc::Zero),
        (true, 0b01011) => (O::Neg, ANY_SIZE, Misc::Same),
        (true, 0b10010) => (O::Sqxtun, NO_D, Misc::Narrow(O::Sqxtun2)),
        (true, 0b10011) => (O::Shll, NO_D, Misc::ShiftLong(O::Shll2)),
        (true, 0b10100) => (O::Uqxtn, NO_D, Misc::Narrow(O::Uqxtn2)),
        _ => return None,
    })
}

fn two_reg_misc(f: SimdTwoRegMisc) -> Leaf {
    let (u, size, q, opcode) = (f.u(), f.size(), f.q(), f.opcode());
    let (rd, rn) = (f.rd(), f.rn());

    // NOT/RBIT share an opcode, split by size.
    if u && opcode == 0b00101 {
        let operation = match size {
            0b00 => O::Mvn,
            0b01 => O::Rbit,
            _ => return reserved("NOT/RBIT size"),
        };
        return Ok(Decoded::new(operation)
            .with(vector(rd, ElementSize::B, q))
            .with(vector(rn, ElementSize::B, q)));
    }

    if matches!(opcode, 0b10110 | 0b10111) {
        return fp_convert_width(u, size, q, opcode, rd, rn);
    }

    if opcode >= 0b11000 || (0b01100..=0b01111).contains(&opcode) {
        let (a, sz) = (size >> 1, size & 1);
        if sz == 1 && !q {
            return reserved("AdvSIMD FP misc of 1D vectors");
        }
        if opcode == 0b11100 && a == 1 {
            if sz == 1 {
                return reserved("URECPE/URSQRTE size");
            }
            let operation = if u { O::Ursqrte } else { O::Urecpe };
            return Ok(Decoded::new(operation)
                .with(vector(rd, ElementSize::S, q))
                .with(vector(rn, ElementSize::S, q)));
        }
        let Some((operation, zero)) = fp_misc(u, a, opcode) else {
            return reserved("AdvSIMD FP misc opcode");
        };
        let elem = fp_element(sz);
        let decoded = Decoded::new(operation).with(vector(rd, elem, q)).with(vector(rn, elem, q));
        return Ok(if zero { decoded.with(FP_ZERO) } else { decoded });
    }

    let Some((operation, sizes, form)) = integer_misc(u, opcode) else {
        return reserved("AdvSIMD two-register misc opcode");
    };
    if !allows(sizes, size) {
        return reserved("AdvSIMD two-register misc size");
    }
    let elem = element(size);
    let wide = element(size + 1);
    let decoded = match form {
        Misc::Same | Misc::Zero if size == 3 && !q => return reserved("AdvSIMD misc of 1D vectors"),
        Misc::Same => Decoded::new(operation).with(vector(rd, elem, q)).with(vector(rn, elem, q)),
        Misc::Zero => {
            Decoded::new(operation).with(vector(rd, elem, q)).with(vector(rn, elem, q)).with(imm(0))
        }
        Misc::PairLong => Decoded::new(operation).with(vector(rd, wide, q)).with(vector(rn, elem, q)),
        Misc::Narrow(upper) => Decoded::new(pick(q, operation, upper))
            .with(vector(rd, elem, q))
            .with(vector(rn, wide, true)),
        Misc::ShiftLong(upper) => Decoded::new(pick(q, operation, upper))
            .with(vector(rd, wide, true))
            .with(vector(rn, elem, q))
            .with(imm(u64::from(8u32 << size))),
    };
    Ok(decoded)
}

/// `FCVTN`, `FCVTXN` and `FCVTL`, which change the element width.
fn fp_convert_width(u: bool, size: u32, q: bool, opcode: u32, rd: u32, rn: u32) -> Leaf {
    if size >> 1 != 0 {
        return reserved("FP width conversion size");
    }
    let sz = size & 1;
    let (narrow, wide) = if sz == 0 { (ElementSize::H, ElementSize::S) } else { (ElementSize::S, ElementSize::D) };
    match (u, opcode) {
        (false, 0b10110) => Ok(Decoded::new(pick(q, O::Fcvtn, O::Fcvtn2))
            .with(vector(rd, narrow, q))
            .with(vector(rn, wide, true))),
        (false, _) => Ok(Decoded::new(pick(q, O::Fcvtl, O::Fcvtl2))
            .with(vector(rd, wide, true))
            .with(vector(rn, narrow, q))),
        (true, 0b10110) if sz == 1 => Ok(Decoded::new(pick(q, O::Fcvtxn, O::Fcvtxn2))
            .with(vector(rd, narrow, q))
            .with(vector(rn, wide, true))),
        _ => reserved("FP width conversion opcode"),
    }
}

fn two_reg_misc_fp16(f: SimdTwoRegMiscFp16) -> Leaf {
    let Some((operation, zero)) = fp_misc(f.u(), f.a(), f.opcode()).filter(|(op, _)| !is_frint_sized(*op)) else {
        return reserved("AdvSIMD FP16 misc opcode");
    };
    let q = f.q();
    let decoded = Decoded::new(operation)
        .with(vector(f.rd(), ElementSize::H, q))
        .with(vector(f.rn(), ElementSize::H, q));
    Ok(if zero { decoded.with(FP_ZERO) } else { decoded })
}

fn across_lanes(f: SimdAcrossLanes) -> Leaf {
    let (u, size, q, opcode) = (f.u(), f.size(), f.q(), f.opcode());
    let (rd, rn) = (f.rd(), f.rn());

    if opcode == 0b01100 || opcode == 0b01111 {
        let minimum = size >> 1 == 1;
        let operation = match (opcode, minimum) {
            (0b01100, false) => O::Fmaxnmv,
            (0b01100, true) => O::Fminnmv,
            (_, false) => O::Fmaxv,
            (_, true) => O::Fminv,
        };
        // U=0 is the half-precision form.
        return if size & 1 != 0 {
            reserved("FP across lanes sz")
        } else if !u {
            Ok(Decoded::new(operation).with(scalar(1, rd)).with(vector(rn, ElementSize::H, q)))
        } else if q {
            Ok(Decoded::new(operation).with(sreg(rd)).with(vector(rn, ElementSize::S, true)))
        } else {
            reserved("FP across lanes size")
        };
    }

    let (operation, long) = match (u, opcode) {
        (false, 0b00011) => (O::Saddlv, true),
        (false, 0b01010) => (O::Smaxv, false),
        (false, 0b11010) => (O::Sminv, false),
        (false, 0b11011) => (O::Addv, false),
        (true, 0b00011) => (O::Uaddlv, true),
        (true, 0b01010) => (O::Umaxv, false),
        (true, 0b11010) => (O::Uminv, false),
        _ => return reserved("across lanes opcode"),
    };
    if size == 3 || (size == 2 && !q) {
        return reserved("across lanes size");
    }
    let destination = scalar(if long { size + 1 } else { size }, rd);
    Ok(Decoded::new(operation).with(destination).with(vector(rn, element(size), q)))
}

/// Shape of a three-different operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Different {
    /// `Vd.Ta, Vn.Tb, Vm.Tb`
    Long,
    /// `Vd.Ta, Vn.Ta, Vm.Tb`
    Wide,
    /// `Vd.Tb, Vn.Ta, Vm.Ta`
    Narrow,
}

fn three_different(f: SimdThreeDifferent) -> Leaf {
    use Different::*;
    let (u, size, q, opcode) = (f.u(), f.size(), f.q(), f.opcode());
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());

    let (lower, upper, shape, sizes) = match (u, opcode) {
        (false, 0b0000) => (O::Saddl, O::Saddl2, Long, NO_D),
        (false, 0b0001) => (O::Saddw, O::Saddw2, Wide, NO_D),
        (false, 0b0010) => (O::Ssubl, O::Ssubl2, Long, NO_D),
        (false, 0b0011) => (O::Ssubw, O::Ssubw2, Wide, NO_D),
        (false, 0b0100) => (O::Addhn, O::Addhn2, Narrow, NO_D),
        (false, 0b0101) => (O::Sabal, O::Sabal2, Long, NO_D),
        (false, 0b0110) => (O::Subhn, O::Subhn2, Narrow, NO_D),
        (false, 0b0111) => (O::Sabdl, O::Sabdl2, Long, NO_D),
        (false, 0b1000) => (O::Smlal, O::Smlal2, Long, NO_D),
        (false, 0b1001) => (O::Sqdmlal, O::Sqdmlal2, Long, H_OR_S),
        (false, 0b1010) => (O::Smlsl, O::Smlsl2, Long, NO_D),
        (false, 0b1011) => (O::Sqdmlsl, O::Sqdmlsl2, Long, H_OR_S),
        (false, 0b1100) => (O::Smull, O::Smull2, Long, NO_D),
        (false, 0b1101) => (O::Sqdmull, O::Sqdmull2, Long, H_OR_S),
        (false, 0b1110) => (O::Pmull, O::Pmull2, Long, B_ONLY | D_ONLY),
        (true, 0b0000) => (O::Uaddl, O::Uaddl2, Long, NO_D),
        (true, 0b0001) => (O::Uaddw, O::Uaddw2, Wide, NO_D),
        (true, 0b0010) => (O::Usubl, O::Usubl2, Long, NO_D),
        (true, 0b0011) => (O::Usubw, O::Usubw2, Wide, NO_D),
        (true, 0b0100) => (O::Raddhn, O::Raddhn2, Narrow, NO_D),
        (true, 0b0101) => (O::Uabal, O::Uabal2, Long, NO_D),
        (true, 0b0110) => (O::Rsubhn, O::Rsubhn2, Narrow, NO_D),
        (true, 0b0111) => (O::Uabdl, O::Uabdl2, Long, NO_D),
        (true, 0b1000) => (O::Umlal, O::Umlal2, Long, NO_D),
        (true, 0b1010) => (O::Umlsl, O::Umlsl2, Long, NO_D),
        (true, 0b1100) => (O::Umull, O::Umull2, Long, NO_D),
        _ => return reserved("three different opcode"),
    };
    if !allows(sizes, size) {
        return reserved("three different size");
    }
    let operation = pick(q, lower, upper);

    // PMULL of 64-bit elements produces one 128-bit element.
    let narrow = |n| {
        if size == 3 {
            vector_lanes(n, ElementSize::D, if q { 2 } else { 1 })
        } else {
            vector(n, element(size), q)
        }
    };
    let wide = |n| {
        if size == 3 {
            vector_lanes(n, ElementSize::Q, 1)
        } else {
            vector(n, element(size + 1), true)
        }
    };
    let decoded = Decoded::new(operation);
    Ok(match shape {
        Long => decoded.with(wide(rd)).with(narrow(rn)).with(narrow(rm)),
        Wide => decoded.with(wide(rd)).with(wide(rn)).with(narrow(rm)),
        Narrow => decoded.with(narrow(rd)).with(wide(rn)).with(wide(rm)),
    })
}

fn modified_immediate(f: SimdModifiedImmediate) -> Leaf {
    let (q, op, cmode, rd) = (f.q(), f.op(), f.cmode(), f.rd());
    let imm8 = (f.abc() << 5) | f.defgh();
    let value = u64::from(imm8);

    if f.o2() == 1 {
        if cmode == 0b1111 && op == 0 {
            return Ok(Decoded::new(O::Fmov)
                .with(vector(rd, ElementSize::H, q))
                .with(Operand::FloatImm(vfp_expand_imm(imm8))));
        }
        return reserved("AdvSIMD modified immediate o2");
    }

    let decoded = match cmode {
        0b0000..=0b0111 => {
            let operation = match (cmode & 1, op) {
                (0, 0) => O::Movi,
                (0, _) => O::Mvni,
                (_, 0) => O::Orr,
                (_, _) => O::Bic,
            };
            Decoded::new(operation)
                .with(vector(rd, ElementSize::S, q))
                .with(imm_lsl(value, 8 * ((cmode >> 1) & 3)))
        }
        0b1000..=0b1011 => {
            let operation = match (cmode & 1, op) {
                (0, 0) => O::Movi,
                (0, _) => O::Mvni,
                (_, 0) => O::Orr,
                (_, _) => O::Bic,
            };
            Decoded::new(operation)
                .with(vector(rd, ElementSize::H, q))
                .with(imm_lsl(value, 8 * ((cmode >> 1) & 1)))
        }
        0b1100 | 0b1101 => {
            let operation = if op == 0 { O::Movi } else { O::Mvni };
            let shift = Shift::new(ShiftType::Msl, 8 << (cmode & 1));
            Decoded::new(operation)
                .with(vector(rd, ElementSize::S, q))
                .with(Operand::imm32_shifted(value, shift))
        }
        0b1110 => match (op, q) {
            (0, _) => Decoded::new(O::Movi).with(vector(rd, ElementSize::B, q)).with(imm(value)),
            (_, false) => Decoded::new(O::Movi)
                .with(dreg(rd))
                .with(imm64(adv_simd_expand_imm(1, cmode, imm8))),
            (_, true) => Decoded::new(O::Movi)
                .with(vector(rd, ElementSize::D, true))
                .with(imm64(adv_simd_expand_imm(1, cmode, imm8))),
        },
        _ => match (op, q) {
            (0, _) => Decoded::new(O::Fmov)
                .with(vector(rd, ElementSize::S, q))
                .with(Operand::FloatImm(vfp_expand_imm(imm8))),
            (_, true) => Decoded::new(O::Fmov)
                .with(vector(rd, ElementSize::D, true))
                .with(Operand::FloatImm(vfp_expand_imm(imm8))),
            (_, false) => return reserved("FMOV (vector, immediate) 1D"),
        },
    };
    Ok(decoded)
}

/// Shape of a shift-by-immediate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShiftForm {
    Right,
    Left,
    /// Narrowing right shift.
    Narrow,
    /// Widening left shift.
    Long,
    /// Fixed-point conversion, `#fbits`.
    Fixed,
}

/// Shift-by-immediate operation and its `...2` form.
pub(super) fn shift_operation(u: bool, opcode: u32) -> Option<(Operation, Operation, ShiftForm)> {
    use ShiftForm::*;
    Some(match (u, opcode) {
        (false, 0b00000) => (O::Sshr, O::Sshr, Right),
        (false, 0b00010) => (O::Ssra, O::Ssra, Right),
        (false, 0b00100) => (O::Srshr, O::Srshr, Right),
        (false, 0b00110) => (O::Srsra, O::Srsra, Right),
        (false, 0b01010) => (O::Shl, O::Shl, Left),
        (false, 0b01110) => (O::Sqshl, O::Sqshl, Left),
        (false, 0b10000) => (O::Shrn, O::Shrn2, Narrow),
        (false, 0b10001) => (O::Rshrn, O::Rshrn2, Narrow),
        (false, 0b10010) => (O::Sqshrn, O::Sqshrn2, Narrow),
        (false, 0b10011) => (O::Sqrshrn, O::Sqrshrn2, Narrow),
        (false, 0b10100) => (O::Sshll, O::Sshll2, Long),
        (false, 0b11100) => (O::Scvtf, O::Scvtf, Fixed),
        (false, 0b11111) => (O::Fcvtzs, O::Fcvtzs, Fixed),
        (true, 0b00000) => (O::Ushr, O::Ushr, Right),
        (true, 0b00010) => (O::Usra, O::Usra, Right),
        (true, 0b00100) => (O::Urshr, O::Urshr, Right),
        (true, 0b00110) => (O::Ursra, O::Ursra, Right),
        (true, 0b01000) => (O::Sri, O::Sri, Right),
        (true, 0b01010) => (O::Sli, O::Sli, Left),
        (true, 0b01100) => (O::Sqshlu, O::Sqshlu, Left),
        (true, 0b01110) => (O::Uqshl, O::Uqshl, Left),
        (true, 0b10000) => (O::Sqshrun, O::Sqshrun2, Narrow),
        (true, 0b10001) => (O::Sqrshrun, O::Sqrshrun2, Narrow),
        (true, 0b10010) => (O::Uqshrn, O::Uqshrn2, Narrow),
        (true, 0b10011) => (O::Uqrshrn, O::Uqrshrn2, Narrow),
        (true, 0b10100) => (O::Ushll, O::Ushll2, Long),
        (true, 0b11100) => (O::Ucvtf, O::Ucvtf, Fixed),
        (true, 0b11111) => (O::Fcvtzu, O::Fcvtzu, Fixed),
        _ => return None,
    })
}

fn shift_immediate(f: SimdShiftImmediate) -> Leaf {
    let (immh, immb, q) = (f.immh(), f.immb(), f.q());
    let (rd, rn) = (f.rd(), f.rn());
    let Some((lower, upper, form)) = shift_operation(f.u(), f.opcode()) else {
        return reserved("AdvSIMD shift by immediate opcode");
    };
    let log2 = shift_element(immh);
    let elem = element(log2);
    match form {
        ShiftForm::Right | ShiftForm::Left | ShiftForm::Fixed if log2 == 3 && !q => {
            reserved("AdvSIMD shift of 1D vectors")
        }
        ShiftForm::Fixed if log2 == 0 => reserved("fixed-point conversion of bytes"),
        ShiftForm::Right | ShiftForm::Fixed => Ok(Decoded::new(lower)
            .with(vector(rd, elem, q))
            .with(vector(rn, elem, q))
            .with(imm(u64::from(right_shift(immh, immb))))),
        ShiftForm::Left => Ok(Decoded::new(lower)
            .with(vector(rd, elem, q))
            .with(vector(rn, elem, q))
            .with(imm(u64::from(left_shift(immh, immb))))),
        ShiftForm::Narrow | ShiftForm::Long if log2 == 3 => reserved("AdvSIMD narrow/long shift immh<3>"),
        ShiftForm::Narrow => Ok(Decoded::new(pick(q, lower, upper))
            .with(vector(rd, elem, q))
            .with(vector(rn, element(log2 + 1), true))
            .with(imm(u64::from(right_shift(immh, immb))))),
        ShiftForm::Long => {
            let amount = left_shift(immh, immb);
            let decoded = Decoded::new(pick(q, lower, upper))
                .with(vector(rd, element(log2 + 1), true))
                .with(vector(rn, elem, q))
                .with(imm(u64::from(amount)));
            Ok(if amount != 0 {
                decoded
            } else {
                let alias = match (lower, q) {
                    (O::Sshll, false) => O::Sxtl,
                    (O::Sshll, true) => O::Sxtl2,
                    (_, false) => O::Uxtl,
                    (_, true) => O::Uxtl2,
                };
                decoded.alias(alias).drop_operand(2)
            })
        }
    }
}

/// Shape of an indexed-element operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ByElement {
    /// Integer, same-width elements (`H` or `S`).
    Integer,
    /// Integer widening, with a `...2` form.
    Long(Operation),
    /// Floating point, `H`, `S` or `D`.
    Float,
    /// Dot product of byte groups.
    Dot,
    /// Complex multiply-accumulate with rotation.
    Complex,
}

pub(super) fn by_element_operation(u: bool, opcode: u32) -> Option<(Operation, ByElement)> {
    use ByElement::*;
    Some(match (u, opcode) {
        (false, 0b0001) => (O::Fmla, Float),
        (false, 0b0010) => (O::Smlal, Long(O::Smlal2)),
        (false, 0b0011) => (O::Sqdmlal, Long(O::Sqdmlal2)),
        (false, 0b0101) => (O::Fmls, Float),
        (false, 0b0110) => (O::Smlsl, Long(O::Smlsl2)),
        (false, 0b0111) => (O::Sqdmlsl, Long(O::Sqdmlsl2)),
        (false, 0b1000) => (O::Mul, Integer),
        (false, 0b1001) => (O::Fmul, Float),
        (false, 0b1010) => (O::Smull, Long(O::Smull2)),
        (false, 0b1011) => (O::Sqdmull, Long(O::Sqdmull2)),
        (false, 0b1100) => (O::Sqdmulh, Integer),
        (false, 0b1101) => (O::Sqrdmulh, Integer),
        (false, 0b1110) => (O::Sdot, Dot),
        (true, 0b0000) => (O::Mla, Integer),
        (true, 0b0010) => (O::Umlal, Long(O::Umlal2)),
        (true, 0b0100) => (O::Mls, Integer),
        (true, 0b0110) => (O::Umlsl, Long(O::Umlsl2)),
        (true, 0b1001) => (O::Fmulx, Float),
        (true, 0b1010) => (O::Umull, Long(O::Umull2)),
        (true, 0b1101) => (O::Sqrdmlah, Integer),
        (true, 0b1110) => (O::Udot, Dot),
        (true, 0b1111) => (O::Sqrdmlsh, Integer),
        (true, 0b0001 | 0b0011 | 0b0101 | 0b0111) => (O::Fcmla, Complex),
        _ => return None,
    })
}

fn indexed_element(f: SimdIndexedElement) -> Leaf {
    let (size, q) = (f.size(), f.q());
    let (rd, rn) = (f.rd(), f.rn());
    let Some((operation, shape)) = by_element_operation(f.u(), f.opcode()) else {
        return reserved("AdvSIMD by element opcode");
    };

    match shape {
        ByElement::Dot | ByElement::Complex => {
            let m = (f.m() << 4) | f.rm();
            let (elem, index) = match (shape, size) {
                (ByElement::Dot, 0b10) => (ElementSize::S, (f.h() << 1) | f.l()),
                (ByElement::Complex, 0b01) => (ElementSize::H, (f.h() << 1) | f.l()),
                (ByElement::Complex, 0b10) if q && f.l() == 0 => (ElementSize::S, f.h()),
                _ => return reserved("AdvSIMD by element size"),
            };
            if shape == ByElement::Dot {
                return Ok(Decoded::new(operation)
                    .with(vector(rd, ElementSize::S, q))
                    .with(vector(rn, ElementSize::B, q))
                    .with(lane_group(m, ElementSize::B, 4, index)));
            }
            let rotation = extract_bits(f.0, 13, 2) * 90;
            return Ok(Decoded::new(operation)
                .with(vector(rd, elem, q))
                .with(vector(rn, elem, q))
                .with(lane(m, elem, index))
                .with(Operand::imm32_decimal(u64::from(rotation))));
        }
        ByElement::Float if size == 0b01 => return reserved("FP by element size"),
        ByElement::Integer | ByElement::Long(_) if size == 0b00 || size == 0b11 => {
            return reserved("integer by element size");
        }
        _ => {}
    }

    let Some((elem, index, m)) = indexed_lane(f, size) else {
        return reserved("AdvSIMD by element L");
    };
    if elem == ElementSize::D && !q {
        return reserved("FP by element of a 1D vector");
    }
    let by = lane(m, elem, index);
    Ok(match shape {
        ByElement::Long(upper) => Decoded::new(pick(q, operation, upper))
            .with(vector(rd, element(size + 1), true))
            .with(vector(rn, elem, q))
            .with(by),
        _ => Decoded::new(operation).with(vector(rd, elem, q)).with(vector(rn, elem, q)).with(by),
    })
}

#[cfg(test)]
mod tests {
    use crate::arm64::decode;
    use crate::DecodeError;
    use armscope_core::render;

    fn dis(word: u32) -> String {
        let insn = decode(word, 0).expect("decode");
        render(&insn, false).expect("render")
    }

    #[test]
    fn test_three_same() {
        assert_eq!(dis(0x4e228420), "add\tv0.16b, v1.16b, v2.16b");
        assert_eq!(dis(0x6ea28420), "sub\tv0.4s, v1.4s, v2.4s");
        assert_eq!(dis(0x4ee28c20), "cmtst\tv0.2d, v1.2d, v2.2d");
        assert_eq!(dis(0x6e201c00), "eor\tv0.16b, v0.16b, v0.16b");
        assert_eq!(dis(0x4ea11c20), "mov\tv0.16b, v1.16b");
        assert_eq!(dis(0x4e22d420), "fadd\tv0.4s, v1.4s, v2.4s");
        assert_eq!(dis(0x6e62dc20), "fmul\tv0.2d, v1.2d, v2.2d");
        // integer ops on 1D vectors
        assert!(decode(0x0ee28420, 0).is_err());
        // MUL of 64-bit elements
        assert!(decode(0x4ee29c20, 0).is_err());
    }

    #[test]
    fn test_three_same_fp16_and_extra() {
        assert_eq!(dis(0x4e421420), "fadd\tv0.8h, v1.8h, v2.8h");
        assert_eq!(dis(0x4e829420), "sdot\tv0.4s, v1.16b, v2.16b");
        assert_eq!(dis(0x6e82c420), "fcmla\tv0.4s, v1.4s, v2.4s, #0");
        assert_eq!(dis(0x6e82f420), "fcadd\tv0.4s, v1.4s, v2.4s, #270");
        assert_eq!(dis(0x6f823020), "fcmla\tv0.4s, v1.4s, v2.s[0], #90");
    }

    #[test]
    fn test_copy() {
        assert_eq!(dis(0x4e080c20), "dup\tv0.2d, x1");
        assert_eq!(dis(0x4e0c0420), "dup\tv0.4s, v1.s[1]");
        assert_eq!(dis(0x4e083c20), "mov\tx0, v1.d[0]");
        assert_eq!(dis(0x0e043c20), "mov\tw0, v1.s[0]");
        assert_eq!(dis(0x0e033c20), "umov\tw0, v1.b[1]");
        assert_eq!(dis(0x4e0a2c20), "smov\tx0, v1.h[2]");
        assert_eq!(dis(0x4e181c20), "mov\tv0.d[1], x1");
        assert_eq!(dis(0x6e0c2420), "mov\tv0.s[1], v1.s[1]");
    }

    #[test]
    fn test_table_permute_extract() {
        assert_eq!(dis(0x4e020020), "tbl\tv0.16b, {v1.16b}, v2.16b");
        assert_eq!(dis(0x0e023020), "tbx\tv0.8b, {v1.16b, v2.16b}, v2.8b");
        assert_eq!(dis(0x4e823820), "zip1\tv0.4s, v1.4s, v2.4s");
        assert_eq!(dis(0x4ec26820), "trn2\tv0.2d, v1.2d, v2.2d");
        assert_eq!(dis(0x6e024020), "ext\tv0.16b, v1.16b, v2.16b, #0x8");
        // EXT index past a 64-bit vector
        assert!(decode(0x2e024020, 0).is_err());
    }

    #[test]
    fn test_two_register_misc() {
        assert_eq!(dis(0x4e205820), "cnt\tv0.16b, v1.16b");
        assert_eq!(dis(0x6e205820), "mvn\tv0.16b, v1.16b");
        assert_eq!(dis(0x6e605820), "rbit\tv0.16b, v1.16b");
        assert_eq!(dis(0x4ea09820), "cmeq\tv0.4s, v1.4s, #0x0");
        assert_eq!(dis(0x0e212820), "xtn\tv0.8b, v1.8h");
        assert_eq!(dis(0x4e212820), "xtn2\tv0.16b, v1.8h");
        assert_eq!(dis(0x2e613820), "shll\tv0.4s, v1.4h, #0x10");
        assert_eq!(dis(0x4ea0f820), "fabs\tv0.4s, v1.4s");
        assert_eq!(dis(0x4ea0d820), "fcmeq\tv0.4s, v1.4s, #0.00000000");
        assert_eq!(dis(0x0e616820), "fcvtn\tv0.2s, v1.2d");
        assert_eq!(dis(0x4e217820), "fcvtl2\tv0.4s, v1.8h");
    }

    #[test]
    fn test_fp_misc_needs_size_high_bit() {
        assert_eq!(dis(0x4ea0c820), "fcmgt\tv0.4s, v1.4s, #0.00000000");
        assert_eq!(dis(0x6ea0c820), "fcmge\tv0.4s, v1.4s, #0.00000000");
        assert_eq!(dis(0x4ea0e820), "fcmlt\tv0.4s, v1.4s, #0.00000000");
        assert_eq!(dis(0x6ea0d820), "fcmle\tv0.4s, v1.4s, #0.00000000");
        assert_eq!(dis(0x6ee0f820), "fneg\tv0.2d, v1.2d");
        assert_eq!(dis(0x6ea1f820), "fsqrt\tv0.4s, v1.4s");
        assert_eq!(dis(0x4ef8c820), "fcmgt\tv0.8h, v1.8h, #0.00000000");
        // same opcodes with size<1> clear
        for word in [0x4e20c820, 0x4e20f820, 0x6e20f820, 0x6e20c820, 0x4e20e820, 0x6e20d820, 0x4e78f820] {
            assert!(matches!(decode(word, 0), Err(DecodeError::Reserved { .. })), "{word:#010x}");
        }
    }

    #[test]
    fn test_frint_to_integer_size() {
        assert_eq!(dis(0x4e21e820), "frint32z\tv0.4s, v1.4s");
        assert_eq!(dis(0x4e21f820), "frint64z\tv0.4s, v1.4s");
        assert_eq!(dis(0x6e21e820), "frint32x\tv0.4s, v1.4s");
        assert_eq!(dis(0x6e21f820), "frint64x\tv0.4s, v1.4s");
        assert_eq!(dis(0x4e61e820), "frint32z\tv0.2d, v1.2d");
        assert_eq!(dis(0x0e21e820), "frint32z\tv0.2s, v1.2s");
        // no half-precision or scalar form
        assert!(decode(0x4e79e820, 0).is_err());
        assert!(decode(0x5e21e820, 0).is_err());
    }

    #[test]
    fn test_across_lanes() {
        assert_eq!(dis(0x4eb1b820), "addv\ts0, v1.4s");
        assert_eq!(dis(0x6e303820), "uaddlv\th0, v1.16b");
        assert_eq!(dis(0x6e30f820), "fmaxv\ts0, v1.4s");
        // 2S across lanes
        assert!(decode(0x0eb1b820, 0).is_err());
    }

    #[test]
    fn test_three_different() {
        assert_eq!(dis(0x0ea2c020), "smull\tv0.2d, v1.2s, v2.2s");
        assert_eq!(dis(0x4ea2c020), "smull2\tv0.2d, v1.4s, v2.4s");
        assert_eq!(dis(0x2e621020), "uaddw\tv0.4s, v1.4s, v2.4h");
        assert_eq!(dis(0x0e224020), "addhn\tv0.8b, v1.8h, v2.8h");
        assert_eq!(dis(0x0ee2e020), "pmull\tv0.1q, v1.1d, v2.1d");
        assert_eq!(dis(0x4ee2e020), "pmull2\tv0.1q, v1.2d, v2.2d");
    }

    #[test]
    fn test_modified_immediate() {
        assert_eq!(dis(0x4f000400), "movi\tv0.4s, #0x0");
        assert_eq!(dis(0x4f072420), "movi\tv0.4s, #0xe1, lsl #8");
        assert_eq!(dis(0x6f00e400), "movi\tv0.2d, #0x0");
        assert_eq!(dis(0x2f00e7e0), "movi\td0, #0xffffffffff");
        assert_eq!(dis(0x4f00c420), "movi\tv0.4s, #0x1, msl #8");
        assert_eq!(dis(0x0f03f600), "fmov\tv0.2s, #1.00000000");
        assert_eq!(dis(0x6f03f600), "fmov\tv0.2d, #1.00000000");
        assert_eq!(dis(0x4f001520), "orr\tv0.4s, #0x9");
    }

    #[test]
    fn test_shift_immediate() {
        assert_eq!(dis(0x4f210420), "sshr\tv0.4s, v1.4s, #0x1f");
        assert_eq!(dis(0x4f1f5420), "shl\tv0.8h, v1.8h, #0xf");
        assert_eq!(dis(0x0f088420), "shrn\tv0.8b, v1.8h, #0x8");
        assert_eq!(dis(0x0f20a420), "sxtl\tv0.2d, v1.2s");
        assert_eq!(dis(0x2f08a420), "uxtl\tv0.8h, v1.8b");
        assert_eq!(dis(0x0f09a420), "sshll\tv0.8h, v1.8b, #0x1");
        assert_eq!(dis(0x4f3fe420), "scvtf\tv0.4s, v1.4s, #0x1");
    }

    #[test]
    fn test_indexed_element() {
        assert_eq!(dis(0x4f829020), "fmul\tv0.4s, v1.4s, v2.s[0]");
        assert_eq!(dis(0x4fa29820), "fmul\tv0.4s, v1.4s, v2.s[3]");
        assert_eq!(dis(0x4fd21020), "fmla\tv0.2d, v1.2d, v18.d[0]");
        assert_eq!(dis(0x4f628020), "mul\tv0.8h, v1.8h, v2.h[2]");
        assert_eq!(dis(0x0f82a020), "smull\tv0.2d, v1.2s, v2.s[0]");
        assert_eq!(dis(0x4fa2e020), "sdot\tv0.4s, v1.16b, v2.4b[1]");
        // integer by element of bytes
        assert!(decode(0x4f028020, 0).is_err());
    }
}
