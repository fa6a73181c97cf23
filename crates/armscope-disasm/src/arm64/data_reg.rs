//! Data processing (register): logical and arithmetic on shifted and
//! extended registers, flag manipulation, conditional compare and select,
//! and the 1-, 2- and 3-source groups.

use armscope_core::{Condition, Operand, Operation, Register, Shift, ShiftType};

use super::bits::extract_bits;
use super::decoded::{gpr, gpr_sp, imm, reserved, shifted_gpr, wreg, xreg, xsp, Decoded, Leaf};
use super::fields::{
    AddSubCarry, AddSubExtended, AddSubShifted, ConditionalCompare, ConditionalSelect, DataProcessing1,
    DataProcessing2, DataProcessing3, EvaluateIntoFlags, LogicalShifted, RotateIntoFlags,
};

pub(crate) fn decode(word: u32) -> Leaf {
    let op0 = extract_bits(word, 30, 1);
    let op1 = extract_bits(word, 28, 1);
    let op2 = extract_bits(word, 21, 4);
    let op3 = extract_bits(word, 10, 6);

    if op1 == 0 {
        return match op2 {
            0b0000..=0b0111 => logical_shifted(LogicalShifted(word)),
            _ if op2 & 1 == 0 => add_sub_shifted(AddSubShifted(word)),
            _ => add_sub_extended(AddSubExtended(word)),
        };
    }
    match op2 {
        0b0000 => match op3 {
            0b000000 => add_sub_carry(AddSubCarry(word)),
            _ if op3 & 0b011111 == 0b000001 => rotate_into_flags(RotateIntoFlags(word)),
            _ if op3 & 0b001111 == 0b000010 => evaluate_into_flags(EvaluateIntoFlags(word)),
            _ => reserved("data processing register op3"),
        },
        0b0010 => conditional_compare(ConditionalCompare(word)),
        0b0100 => conditional_select(ConditionalSelect(word)),
        0b0110 if op0 == 0 => two_source(DataProcessing2(word)),
        0b0110 => one_source(DataProcessing1(word)),
        0b1000..=0b1111 => three_source(DataProcessing3(word)),
        _ => reserved("data processing register op2"),
    }
}

fn logical_shifted(f: LogicalShifted) -> Leaf {
    let sf = f.sf();
    if !sf && f.imm6() >= 32 {
        return reserved("32-bit shift amount");
    }
    let operation = match (f.opc(), f.n()) {
        (0b00, 0) => Operation::And,
        (0b00, _) => Operation::Bic,
        (0b01, 0) => Operation::Orr,
        (0b01, _) => Operation::Orn,
        (0b10, 0) => Operation::Eor,
        (0b10, _) => Operation::Eon,
        (_, 0) => Operation::Ands,
        (_, _) => Operation::Bics,
    };
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());
    let shift = ShiftType::from_shift_bits(f.shift());
    let decoded = Decoded::new(operation)
        .with(gpr(sf, rd))
        .with(gpr(sf, rn))
        .with(shifted_gpr(sf, rm, shift, f.imm6()));

    Ok(match operation {
        Operation::Orr if rn == 31 && f.shift() == 0 && f.imm6() == 0 => decoded.alias(Operation::Mov).drop_operand(1),
        Operation::Orn if rn == 31 => decoded.alias(Operation::Mvn).drop_operand(1),
        Operation::Ands if rd == 31 => decoded.alias(Operation::Tst).drop_operand(0),
        _ => decoded,
    })
}

fn add_sub_shifted(f: AddSubShifted) -> Leaf {
    let sf = f.sf();
    if f.shift() == 0b11 {
        return reserved("add/subtract ROR shift");
    }
    if !sf && f.imm6() >= 32 {
        return reserved("32-bit shift amount");
    }
    let (rd, rn) = (f.rd(), f.rn());
    let decoded = Decoded::new(add_sub_operation(f.op(), f.s()))
        .with(gpr(sf, rd))
        .with(gpr(sf, rn))
        .with(shifted_gpr(sf, f.rm(), ShiftType::from_shift_bits(f.shift()), f.imm6()));

    Ok(match (f.op(), f.s()) {
        (0, 1) if rd == 31 => decoded.alias(Operation::Cmn).drop_operand(0),
        (1, 0) if rn == 31 => decoded.alias(Operation::Neg).drop_operand(1),
        (1, 1) if rd == 31 => decoded.alias(Operation::Cmp).drop_operand(0),
        (1, 1) if rn == 31 => decoded.alias(Operation::Negs).drop_operand(1),
        _ => decoded,
    })
}

fn add_sub_operation(op: u32, s: u32) -> Operation {
    match (op, s) {
        (0, 0) => Operation::Add,
        (0, _) => Operation::Adds,
        (_, 0) => Operation::Sub,
        (_, _) => Operation::Subs,
    }
}

fn add_sub_extended(f: AddSubExtended) -> Leaf {
    if f.opt() != 0 {
        return reserved("add/subtract extended opt");
    }
    let amount = f.imm3();
    if amount > 4 {
        return reserved("add/subtract extended shift amount");
    }
    let sf = f.sf();
    let (rd, rn, option) = (f.rd(), f.rn(), f.option());
    let flags = f.s() == 1;

    let rm = Register::gpr(sf && option & 0b011 == 0b011, f.rm());
    // UXTW/UXTX on an SP operand prints as LSL.
    let uses_sp = rn == 31 || (!flags && rd == 31);
    let lsl_option = if sf { 0b011 } else { 0b010 };
    let extend = if uses_sp && option == lsl_option {
        if amount == 0 {
            Operand::reg(rm)
        } else {
            Operand::shifted(rm, Shift::lsl(amount))
        }
    } else {
        let kind = ShiftType::from_extend_bits(option);
        let shift = if amount == 0 { Shift::bare(kind) } else { Shift::new(kind, amount) };
        Operand::shifted(rm, shift)
    };

    let destination = if flags { gpr(sf, rd) } else { gpr_sp(sf, rd) };
    let decoded = Decoded::new(add_sub_operation(f.op(), f.s()))
        .with(destination)
        .with(gpr_sp(sf, rn))
        .with(extend);

    Ok(match (f.op(), flags) {
        (0, true) if rd == 31 => decoded.alias(Operation::Cmn).drop_operand(0),
        (1, true) if rd == 31 => decoded.alias(Operation::Cmp).drop_operand(0),
        _ => decoded,
    })
}

fn add_sub_carry(f: AddSubCarry) -> Leaf {
    let sf = f.sf();
    let operation = match (f.op(), f.s()) {
        (0, 0) => Operation::Adc,
        (0, _) => Operation::Adcs,
        (_, 0) => Operation::Sbc,
        (_, _) => Operation::Sbcs,
    };
    let rn = f.rn();
    let decoded = Decoded::new(operation).with(gpr(sf, f.rd())).with(gpr(sf, rn)).with(gpr(sf, f.rm()));
    Ok(match operation {
        Operation::Sbc if rn == 31 => decoded.alias(Operation::Ngc).drop_operand(1),
        Operation::Sbcs if rn == 31 => decoded.alias(Operation::Ngcs).drop_operand(1),
        _ => decoded,
    })
}

fn rotate_into_flags(f: RotateIntoFlags) -> Leaf {
    if !f.sf() || f.op() != 0 || f.s() != 1 || f.o2() != 0 {
        return reserved("RMIF fields");
    }
    Ok(Decoded::new(Operation::Rmif)
        .with(xreg(f.rn()))
        .with(imm(u64::from(f.imm6())))
        .with(imm(u64::from(f.mask()))))
}

fn evaluate_into_flags(f: EvaluateIntoFlags) -> Leaf {
    if f.sf() || f.op() != 0 || f.s() != 1 || f.opcode2() != 0 || f.o3() != 0 || f.mask() != 0b1101 {
        return reserved("SETF fields");
    }
    let operation = if f.sz() == 0 { Operation::Setf8 } else { Operation::Setf16 };
    Ok(Decoded::new(operation).with(wreg(f.rn())))
}

fn conditional_compare(f: ConditionalCompare) -> Leaf {
    if f.s() != 1 || f.o2() != 0 || f.o3() != 0 {
        return reserved("conditional compare S/o2/o3");
    }
    let sf = f.sf();
    let operation = if f.op() == 0 { Operation::Ccmn } else { Operation::Ccmp };
    let second = if f.imm() == 1 { imm(u64::from(f.rm())) } else { gpr(sf, f.rm()) };
    Ok(Decoded::new(operation)
        .with(gpr(sf, f.rn()))
        .with(second)
        .with(imm(u64::from(f.nzcv())))
        .with(Operand::Condition(Condition::from_bits(f.cond()))))
}

fn conditional_select(f: ConditionalSelect) -> Leaf {
    if f.s() != 0 {
        return reserved("conditional select S");
    }
    if f.op2() > 1 {
        return reserved("conditional select op2");
    }
    let sf = f.sf();
    let operation = match (f.op(), f.op2()) {
        (0, 0) => Operation::Csel,
        (0, _) => Operation::Csinc,
        (_, 0) => Operation::Csinv,
        (_, _) => Operation::Csneg,
    };
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());
    let cond = Condition::from_bits(f.cond());
    let decoded = Decoded::new(operation)
        .with(gpr(sf, rd))
        .with(gpr(sf, rn))
        .with(gpr(sf, rm))
        .with(Operand::Condition(cond));
    if cond.is_always() || operation == Operation::Csel {
        return Ok(decoded);
    }

    let inverted = Operand::Condition(cond.invert());
    let both_zero = rn == 31 && rm == 31;
    let same_source = rn == rm && rn != 31;
    Ok(match operation {
        Operation::Csinc if both_zero => {
            decoded.alias(Operation::Cset).replace(3, inverted).drop_operand(2).drop_operand(1)
        }
        Operation::Csinc if same_source => decoded.alias(Operation::Cinc).replace(3, inverted).drop_operand(2),
        Operation::Csinv if both_zero => {
            decoded.alias(Operation::Csetm).replace(3, inverted).drop_operand(2).drop_operand(1)
        }
        Operation::Csinv if same_source => decoded.alias(Operation::Cinv).replace(3, inverted).drop_operand(2),
        Operation::Csneg if rn == rm => decoded.alias(Operation::Cneg).replace(3, inverted).drop_operand(2),
        _ => decoded,
    })
}

fn one_source(f: DataProcessing1) -> Leaf {
    if f.s() != 0 {
        return reserved("1-source S");
    }
    let sf = f.sf();
    let (rd, rn, opcode) = (f.rd(), f.rn(), f.opcode());
    match f.opcode2() {
        0b00000 => {
            let operation = match (opcode, sf) {
                (0b000000, _) => Operation::Rbit,
                (0b000001, _) => Operation::Rev16,
                (0b000010, false) => Operation::Rev,
                (0b000010, true) => Operation::Rev32,
                (0b000011, true) => Operation::Rev,
                (0b000100, _) => Operation::Clz,
                (0b000101, _) => Operation::Cls,
                _ => return reserved("1-source opcode"),
            };
            Ok(Decoded::new(operation).with(gpr(sf, rd)).with(gpr(sf, rn)))
        }
        0b00001 if sf => pointer_auth(opcode, rd, rn),
        _ => reserved("1-source opcode2"),
    }
}

/// `PAC*`, `AUT*` and `XPAC*` with a modifier register, the zero modifier
/// or no modifier.
fn pointer_auth(opcode: u32, rd: u32, rn: u32) -> Leaf {
    use Operation as O;
    const KEYED: [Operation; 8] = [O::Pacia, O::Pacib, O::Pacda, O::Pacdb, O::Autia, O::Autib, O::Autda, O::Autdb];
    const ZERO: [Operation; 8] =
        [O::Paciza, O::Pacizb, O::Pacdza, O::Pacdzb, O::Autiza, O::Autizb, O::Autdza, O::Autdzb];
    match opcode {
        0b000000..=0b000111 => Ok(Decoded::new(KEYED[opcode as usize]).with(xreg(rd)).with(xsp(rn))),
        0b001000..=0b001111 if rn == 31 => Ok(Decoded::new(ZERO[(opcode & 7) as usize]).with(xreg(rd))),
        0b010000 if rn == 31 => Ok(Decoded::new(O::Xpaci).with(xreg(rd))),
        0b010001 if rn == 31 => Ok(Decoded::new(O::Xpacd).with(xreg(rd))),
        _ => reserved("pointer authentication opcode/Rn"),
    }
}

fn two_source(f: DataProcessing2) -> Leaf {
    if f.s() != 0 {
        return reserved("2-source S");
    }
    let sf = f.sf();
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());
    let operation = match f.opcode() {
        0b000010 => Operation::Udiv,
        0b000011 => Operation::Sdiv,
        // The variable shifts always print under their shift aliases.
        0b001000 => Operation::Lsl,
        0b001001 => Operation::Lsr,
        0b001010 => Operation::Asr,
        0b001011 => Operation::Ror,
        0b001100 if sf => {
            return Ok(Decoded::new(Operation::Pacga).with(xreg(rd)).with(xreg(rn)).with(xsp(rm)));
        }
        opcode @ 0b010000..=0b010111 => {
            let size = opcode & 0b11;
            if (size == 0b11) != sf {
                return reserved("CRC32 size/sf");
            }
            let operation = match opcode {
                0b010000 => Operation::Crc32b,
                0b010001 => Operation::Crc32h,
                0b010010 => Operation::Crc32w,
                0b010011 => Operation::Crc32x,
                0b010100 => Operation::Crc32cb,
                0b010101 => Operation::Crc32ch,
                0b010110 => Operation::Crc32cw,
                _ => Operation::Crc32cx,
            };
            return Ok(Decoded::new(operation).with(wreg(rd)).with(wreg(rn)).with(gpr(sf, rm)));
        }
        _ => return reserved("2-source opcode"),
    };
    Ok(Decoded::new(operation).with(gpr(sf, rd)).with(gpr(sf, rn)).with(gpr(sf, rm)))
}

fn three_source(f: DataProcessing3) -> Leaf {
    if f.op54() != 0 {
        return reserved("3-source op54");
    }
    let sf = f.sf();
    // (operation, alias when Ra is the zero register, widening)
    let (operation, short, widening) = match (f.op31(), f.o0()) {
        (0b000, 0) => (Operation::Madd, Some(Operation::Mul), false),
        (0b000, _) => (Operation::Msub, Some(Operation::Mneg), false),
        (0b001, 0) => (Operation::Smaddl, Some(Operation::Smull), true),
        (0b001, _) => (Operation::Smsubl, Some(Operation::Smnegl), true),
        (0b010, 0) => (Operation::Smulh, None, true),
        (0b101, 0) => (Operation::Umaddl, Some(Operation::Umull), true),
        (0b101, _) => (Operation::Umsubl, Some(Operation::Umnegl), true),
        (0b110, 0) => (Operation::Umulh, None, true),
        _ => return reserved("3-source op31/o0"),
    };
    if widening && !sf {
        return reserved("32-bit widening multiply");
    }
    let (rd, rn, rm, ra) = (f.rd(), f.rn(), f.rm(), f.ra());

    if matches!(operation, Operation::Smulh | Operation::Umulh) {
        return Ok(Decoded::new(operation).with(xreg(rd)).with(xreg(rn)).with(xreg(rm)));
    }
    let sources_sf = sf && !widening;
    let decoded = Decoded::new(operation)
        .with(gpr(sf, rd))
        .with(gpr(sources_sf, rn))
        .with(gpr(sources_sf, rm))
        .with(gpr(sf, ra));
    Ok(match short {
        Some(alias) if ra == 31 => decoded.alias(alias).drop_operand(3),
        _ => decoded,
    })
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
    fn test_logical_shifted() {
        assert_eq!(dis(0x8a020020), "and\tx0, x1, x2");
        assert_eq!(dis(0xaa020c20), "orr\tx0, x1, x2, lsl #3");
        assert_eq!(dis(0xaa0103e0), "mov\tx0, x1");
        assert_eq!(dis(0xaa2103e0), "mvn\tx0, x1");
        assert_eq!(dis(0xaa6213e0), "mvn\tx0, x2, lsr #4");
        // shift amount >= 32 in a 32-bit form
        assert!(decode(0x0a028020, 0).is_err());
    }

    #[test]
    fn test_ands_to_tst() {
        let insn = decode(0xea01001f, 0).expect("decode");
        assert_eq!(insn.operands.len(), 2);
        assert_eq!(render(&insn, false).as_deref(), Ok("tst\tx0, x1"));
    }

    #[test]
    fn test_add_sub_shifted() {
        assert_eq!(dis(0x8b020020), "add\tx0, x1, x2");
        assert_eq!(dis(0x8b020c20), "add\tx0, x1, x2, lsl #3");
        assert_eq!(dis(0xcb0203e0), "neg\tx0, x2");
        assert_eq!(dis(0xeb01001f), "cmp\tx0, x1");
        assert_eq!(dis(0x6b01001f), "cmp\tw0, w1");
        assert_eq!(dis(0xab01001f), "cmn\tx0, x1");
        assert_eq!(dis(0xeb0203e0), "negs\tx0, x2");
        // ROR is not an add/subtract shift
        assert!(decode(0x8bc20020, 0).is_err());
    }

    #[test]
    fn test_add_sub_extended() {
        assert_eq!(dis(0x8b22c020), "add\tx0, x1, w2, sxtw");
        assert_eq!(dis(0x8b2263e0), "add\tx0, sp, x2");
        assert_eq!(dis(0x8b226be0), "add\tx0, sp, x2, lsl #2");
        assert_eq!(dis(0xeb22c03f), "cmp\tx1, w2, sxtw");
        // imm3 above 4
        assert!(decode(0x8b221420, 0).is_err());
    }

    #[test]
    fn test_carry_and_flags() {
        assert_eq!(dis(0x9a020020), "adc\tx0, x1, x2");
        assert_eq!(dis(0xda0203e0), "ngc\tx0, x2");
        assert_eq!(dis(0xfa0203e0), "ngcs\tx0, x2");
        assert_eq!(dis(0xba018402), "rmif\tx0, #0x3, #0x2");
        assert_eq!(dis(0x3a00080d), "setf8\tw0");
        assert_eq!(dis(0x3a00480d), "setf16\tw0");
    }

    #[test]
    fn test_conditional_compare() {
        assert_eq!(dis(0xfa400820), "ccmp\tx1, #0x0, #0x0, eq");
        assert_eq!(dis(0x3a411004), "ccmn\tw0, w1, #0x4, ne");
    }

    #[test]
    fn test_conditional_select_aliases() {
        assert_eq!(dis(0x9a820020), "csel\tx0, x1, x2, eq");
        assert_eq!(dis(0x9a820420), "csinc\tx0, x1, x2, eq");
        assert_eq!(dis(0x9a811420), "cinc\tx0, x1, eq");
        assert_eq!(dis(0x9a9f17e0), "cset\tx0, eq");
        assert_eq!(dis(0x1a9f17e0), "cset\tw0, eq");
        assert_eq!(dis(0xda9f13e0), "csetm\tx0, eq");
        assert_eq!(dis(0xda810420), "cneg\tx0, x1, ne");
        // no alias for al/nv
        assert_eq!(dis(0x9a81e420), "csinc\tx0, x1, x1, al");
    }

    #[test]
    fn test_one_source() {
        assert_eq!(dis(0xdac00020), "rbit\tx0, x1");
        assert_eq!(dis(0xdac00c20), "rev\tx0, x1");
        assert_eq!(dis(0x5ac00820), "rev\tw0, w1");
        assert_eq!(dis(0xdac00820), "rev32\tx0, x1");
        assert_eq!(dis(0x5ac00420), "rev16\tw0, w1");
        assert_eq!(dis(0xdac01020), "clz\tx0, x1");
        assert_eq!(dis(0xdac01420), "cls\tx0, x1");
        // 64-bit REV opcode in a 32-bit form
        assert!(decode(0x5ac00c20, 0).is_err());
    }

    #[test]
    fn test_pointer_authentication() {
        assert_eq!(dis(0xdac10020), "pacia\tx0, x1");
        assert_eq!(dis(0xdac123e0), "paciza\tx0");
        assert_eq!(dis(0xdac13fe0), "autdzb\tx0");
        assert_eq!(dis(0xdac143e0), "xpaci\tx0");
        assert_eq!(dis(0x9ac23020), "pacga\tx0, x1, x2");
    }

    #[test]
    fn test_two_source() {
        assert_eq!(dis(0x9ac20820), "udiv\tx0, x1, x2");
        assert_eq!(dis(0x9ac20c20), "sdiv\tx0, x1, x2");
        assert_eq!(dis(0x9ac22020), "lsl\tx0, x1, x2");
        assert_eq!(dis(0x1ac22820), "asr\tw0, w1, w2");
        assert_eq!(dis(0x9ac22c20), "ror\tx0, x1, x2");
        assert_eq!(dis(0x1ac24020), "crc32b\tw0, w1, w2");
        assert_eq!(dis(0x9ac25c20), "crc32cx\tw0, w1, x2");
    }

    #[test]
    fn test_three_source() {
        assert_eq!(dis(0x9b020c20), "madd\tx0, x1, x2, x3");
        assert_eq!(dis(0x9b027c20), "mul\tx0, x1, x2");
        assert_eq!(dis(0x9b02fc20), "mneg\tx0, x1, x2");
        assert_eq!(dis(0x9b227c20), "smull\tx0, w1, w2");
        assert_eq!(dis(0x9b220c20), "smaddl\tx0, w1, w2, x3");
        assert_eq!(dis(0x9ba28c20), "umsubl\tx0, w1, w2, x3");
        assert_eq!(dis(0x9bc27c20), "umulh\tx0, x1, x2");
        // 32-bit SMULH
        assert!(decode(0x1b427c20, 0).is_err());
    }
}
