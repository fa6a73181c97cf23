//! Scalar floating point: conversions, data processing, compares and
//! conditional forms.

use armscope_core::{Condition, ElementSize, Operand, Operation};

use super::bits::extract_bits;
use super::decoded::{dreg, gpr, imm, lane, reserved, scalar, wreg, xreg, Decoded, Leaf, Reserved};
use super::fields::{
    FloatCompare, FloatConditionalCompare, FloatConditionalSelect, FloatDataProcessing1, FloatDataProcessing2,
    FloatDataProcessing3, FloatFixedConversion, FloatImmediate, FloatIntConversion,
};
use super::numeric::vfp_expand_imm;
use super::simd::FP_ZERO;

use Operation as O;

pub(crate) fn decode(word: u32) -> Leaf {
    if extract_bits(word, 29, 1) != 0 {
        return reserved("floating-point S");
    }
    if extract_bits(word, 24, 1) == 1 {
        return data_processing3(FloatDataProcessing3(word));
    }
    if extract_bits(word, 21, 1) == 0 {
        return fixed_conversion(FloatFixedConversion(word));
    }
    match extract_bits(word, 10, 2) {
        0b01 => conditional_compare(FloatConditionalCompare(word)),
        0b10 => data_processing2(FloatDataProcessing2(word)),
        0b11 => conditional_select(FloatConditionalSelect(word)),
        _ => {
            let low = extract_bits(word, 10, 6);
            if low & 0b111 == 0b100 {
                immediate(FloatImmediate(word))
            } else if low & 0b1111 == 0b1000 {
                compare(FloatCompare(word))
            } else if low & 0b11111 == 0b10000 {
                data_processing1(FloatDataProcessing1(word))
            } else if low == 0 {
                int_conversion(FloatIntConversion(word))
            } else {
                reserved("floating-point bits 10-15")
            }
        }
    }
}

/// Log2 of the element bytes for `ftype`: single, double, -, half.
fn ftype_log2(ftype: u32) -> Option<u32> {
    match ftype {
        0b00 => Some(2),
        0b01 => Some(3),
        0b11 => Some(1),
        _ => None,
    }
}

/// Operand builder for the register file of `ftype`, for classes whose
/// `M` bit must be clear.
fn fp_register(m: u32, ftype: u32) -> Result<impl Fn(u32) -> Operand, Reserved> {
    if m != 0 {
        return reserved("floating-point M");
    }
    let log2 = ftype_log2(ftype).ok_or(Reserved("floating-point ftype"))?;
    Ok(move |n| scalar(log2, n))
}

fn fixed_conversion(f: FloatFixedConversion) -> Leaf {
    let (sf, scale) = (f.sf(), f.scale());
    let Some(log2) = ftype_log2(f.ftype()) else {
        return reserved("fixed-point conversion ftype");
    };
    if !sf && scale < 32 {
        return reserved("fixed-point conversion scale");
    }
    let fbits = imm(u64::from(64 - scale));
    let (fp, int) = (scalar(log2, f.rd()), gpr(sf, f.rd()));
    match (f.rmode(), f.opcode()) {
        (0b00, 0b010) => Ok(Decoded::new(O::Scvtf).with(fp).with(gpr(sf, f.rn())).with(fbits)),
        (0b00, 0b011) => Ok(Decoded::new(O::Ucvtf).with(fp).with(gpr(sf, f.rn())).with(fbits)),
        (0b11, 0b000) => Ok(Decoded::new(O::Fcvtzs).with(int).with(scalar(log2, f.rn())).with(fbits)),
        (0b11, 0b001) => Ok(Decoded::new(O::Fcvtzu).with(int).with(scalar(log2, f.rn())).with(fbits)),
        _ => reserved("fixed-point conversion rmode/opcode"),
    }
}

fn int_conversion(f: FloatIntConversion) -> Leaf {
    let (sf, ftype, rmode, opcode) = (f.sf(), f.ftype(), f.rmode(), f.opcode());
    let (rd, rn) = (f.rd(), f.rn());

    // FMOV to and from the top half of a 128-bit register.
    if ftype == 0b10 {
        return match (sf, rmode, opcode) {
            (true, 0b01, 0b110) => Ok(Decoded::new(O::Fmov).with(xreg(rd)).with(lane(rn, ElementSize::D, 1))),
            (true, 0b01, 0b111) => Ok(Decoded::new(O::Fmov).with(lane(rd, ElementSize::D, 1)).with(xreg(rn))),
            _ => reserved("FP/integer conversion ftype"),
        };
    }
    let Some(log2) = ftype_log2(ftype) else {
        return reserved("FP/integer conversion ftype");
    };

    let to_int = |operation| Ok(Decoded::new(operation).with(gpr(sf, rd)).with(scalar(log2, rn)));
    let from_int = |operation| Ok(Decoded::new(operation).with(scalar(log2, rd)).with(gpr(sf, rn)));
    match (rmode, opcode) {
        (0b00, 0b000) => to_int(O::Fcvtns),
        (0b00, 0b001) => to_int(O::Fcvtnu),
        (0b01, 0b000) => to_int(O::Fcvtps),
        (0b01, 0b001) => to_int(O::Fcvtpu),
        (0b10, 0b000) => to_int(O::Fcvtms),
        (0b10, 0b001) => to_int(O::Fcvtmu),
        (0b11, 0b000) => to_int(O::Fcvtzs),
        (0b11, 0b001) => to_int(O::Fcvtzu),
        (0b00, 0b010) => from_int(O::Scvtf),
        (0b00, 0b011) => from_int(O::Ucvtf),
        (0b00, 0b100) => to_int(O::Fcvtas),
        (0b00, 0b101) => to_int(O::Fcvtau),
        // Register moves need matching widths, except half precision.
        (0b00, 0b110 | 0b111) if ftype != 0b11 && sf != (ftype == 0b01) => reserved("FMOV (general) width"),
        (0b00, 0b110) => to_int(O::Fmov),
        (0b00, 0b111) => from_int(O::Fmov),
        (0b11, 0b110) if !sf && ftype == 0b01 => Ok(Decoded::new(O::Fjcvtzs).with(wreg(rd)).with(dreg(rn))),
        _ => reserved("FP/integer conversion rmode/opcode"),
    }
}

fn data_processing1(f: FloatDataProcessing1) -> Leaf {
    let ftype = f.ftype();
    let reg = fp_register(f.m(), ftype)?;
    let (rd, rn) = (f.rd(), f.rn());
    let opcode = f.opcode();

    if opcode >> 2 == 0b0001 {
        let target = opcode & 0b11;
        let Some(log2) = ftype_log2(target) else {
            return reserved("FCVT target");
        };
        if target == ftype {
            return reserved("FCVT to the same precision");
        }
        return Ok(Decoded::new(O::Fcvt).with(scalar(log2, rd)).with(reg(rn)));
    }

    let operation = match opcode {
        0b000000 => O::Fmov,
        0b000001 => O::Fabs,
        0b000010 => O::Fneg,
        0b000011 => O::Fsqrt,
        0b001000 => O::Frintn,
        0b001001 => O::Frintp,
        0b001010 => O::Frintm,
        0b001011 => O::Frintz,
        0b001100 => O::Frinta,
        0b001110 => O::Frintx,
        0b001111 => O::Frinti,
        0b010000 if ftype != 0b11 => O::Frint32z,
        0b010001 if ftype != 0b11 => O::Frint32x,
        0b010010 if ftype != 0b11 => O::Frint64z,
        0b010011 if ftype != 0b11 => O::Frint64x,
        _ => return reserved("floating-point data-processing (1 source) opcode"),
    };
    Ok(Decoded::new(operation).with(reg(rd)).with(reg(rn)))
}

fn compare(f: FloatCompare) -> Leaf {
    let reg = fp_register(f.m(), f.ftype())?;
    if f.op() != 0 {
        return reserved("floating-point compare op");
    }
    let (operation, zero) = match f.opcode2() {
        0b00000 => (O::Fcmp, false),
        0b01000 => (O::Fcmp, true),
        0b10000 => (O::Fcmpe, false),
        0b11000 => (O::Fcmpe, true),
        _ => return reserved("floating-point compare opcode2"),
    };
    let second = if zero { FP_ZERO } else { reg(f.rm()) };
    Ok(Decoded::new(operation).with(reg(f.rn())).with(second))
}

fn immediate(f: FloatImmediate) -> Leaf {
    let reg = fp_register(f.m(), f.ftype())?;
    if f.imm5() != 0 {
        return reserved("floating-point immediate imm5");
    }
    Ok(Decoded::new(O::Fmov).with(reg(f.rd())).with(Operand::FloatImm(vfp_expand_imm(f.imm8()))))
}

fn conditional_compare(f: FloatConditionalCompare) -> Leaf {
    let reg = fp_register(f.m(), f.ftype())?;
    let operation = if f.op() == 0 { O::Fccmp } else { O::Fccmpe };
    Ok(Decoded::new(operation)
        .with(reg(f.rn()))
        .with(reg(f.rm()))
        .with(imm(u64::from(f.nzcv())))
        .with(Operand::Condition(Condition::from_bits(f.cond()))))
}

fn data_processing2(f: FloatDataProcessing2) -> Leaf {
    let reg = fp_register(f.m(), f.ftype())?;
    let operation = match f.opcode() {
        0b0000 => O::Fmul,
        0b0001 => O::Fdiv,
        0b0010 => O::Fadd,
        0b0011 => O::Fsub,
        0b0100 => O::Fmax,
        0b0101 => O::Fmin,
        0b0110 => O::Fmaxnm,
        0b0111 => O::Fminnm,
        0b1000 => O::Fnmul,
        _ => return reserved("floating-point data-processing (2 source) opcode"),
    };
    Ok(Decoded::new(operation).with(reg(f.rd())).with(reg(f.rn())).with(reg(f.rm())))
}

fn conditional_select(f: FloatConditionalSelect) -> Leaf {
    let reg = fp_register(f.m(), f.ftype())?;
    Ok(Decoded::new(O::Fcsel)
        .with(reg(f.rd()))
        .with(reg(f.rn()))
        .with(reg(f.rm()))
        .with(Operand::Condition(Condition::from_bits(f.cond()))))
}

fn data_processing3(f: FloatDataProcessing3) -> Leaf {
    let reg = fp_register(f.m(), f.ftype())?;
    let operation = match (f.o1(), f.o0()) {
        (0, 0) => O::Fmadd,
        (0, _) => O::Fmsub,
        (_, 0) => O::Fnmadd,
        (_, _) => O::Fnmsub,
    };
    Ok(Decoded::new(operation)
        .with(reg(f.rd()))
        .with(reg(f.rn()))
        .with(reg(f.rm()))
        .with(reg(f.ra())))
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
    fn test_data_processing() {
        assert_eq!(dis(0x1e222820), "fadd\ts0, s1, s2");
        assert_eq!(dis(0x1e620820), "fmul\td0, d1, d2");
        assert_eq!(dis(0x1ee21820), "fdiv\th0, h1, h2");
        assert_eq!(dis(0x1f420c20), "fmadd\td0, d1, d2, d3");
        assert_eq!(dis(0x1f628c20), "fnmsub\td0, d1, d2, d3");
        assert_eq!(dis(0x1e214020), "fneg\ts0, s1");
        assert_eq!(dis(0x1e22c020), "fcvt\td0, s1");
        assert_eq!(dis(0x1e63c020), "fcvt\th0, d1");
        assert_eq!(dis(0x1e654020), "frintm\td0, d1");
        assert_eq!(dis(0x1e284020), "frint32z\ts0, s1");
        // FCVT to the same precision
        assert!(decode(0x1e224020, 0).is_err());
        // ftype 10
        assert!(decode(0x1ea22820, 0).is_err());
    }

    #[test]
    fn test_compare_and_select() {
        assert_eq!(dis(0x1e222020), "fcmp\ts1, s2");
        assert_eq!(dis(0x1e602028), "fcmp\td1, #0.00000000");
        assert_eq!(dis(0x1e622030), "fcmpe\td1, d2");
        assert_eq!(dis(0x1e220c20), "fcsel\ts0, s1, s2, eq");
        assert_eq!(dis(0x1e621424), "fccmp\td1, d2, #0x4, ne");
    }

    #[test]
    fn test_immediate() {
        assert_eq!(dis(0x1e201000), "fmov\ts0, #2.00000000");
        assert_eq!(dis(0x1e6e1000), "fmov\td0, #1.00000000");
        assert_eq!(dis(0x1e301000), "fmov\ts0, #-2.00000000");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(dis(0x9e670020), "fmov\td0, x1");
        assert_eq!(dis(0x9e660020), "fmov\tx0, d1");
        assert_eq!(dis(0x1e260020), "fmov\tw0, s1");
        assert_eq!(dis(0x9eae0020), "fmov\tx0, v1.d[1]");
        assert_eq!(dis(0x9eaf0020), "fmov\tv0.d[1], x1");
        assert_eq!(dis(0x9e220020), "scvtf\ts0, x1");
        assert_eq!(dis(0x1e780020), "fcvtzs\tw0, d1");
        assert_eq!(dis(0x1e7e0020), "fjcvtzs\tw0, d1");
        assert_eq!(dis(0x1e240020), "fcvtas\tw0, s1");
        assert_eq!(dis(0x9e02f020), "scvtf\ts0, x1, #0x4");
        assert_eq!(dis(0x1e588020), "fcvtzs\tw0, d1, #0x20");
        // FMOV between mismatched widths
        assert!(decode(0x1e670020, 0).is_err());
        // 32-bit fixed point with fewer than 32 fraction bits allowed
        assert!(decode(0x1e587c20, 0).is_err());
    }
}
