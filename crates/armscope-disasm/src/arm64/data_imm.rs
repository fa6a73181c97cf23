//! Data processing (immediate): PC-relative addressing, add/subtract,
//! logical, move wide, bitfield and extract.

use armscope_core::{Operand, Operation};

use super::bits::{extract_bits, sign_extend};
use super::decoded::{gpr, gpr_sp, imm, imm64, imm_lsl, label, reserved, simm32, wreg, Decoded, Leaf};
use super::fields::{AddSubImmediate, Bitfield, Extract, LogicalImmediate, MoveWide, PcRelAddressing};
use super::numeric::{bfx_preferred, decode_bit_masks, move_wide_preferred};

pub(crate) fn decode(word: u32, address: u64) -> Leaf {
    match extract_bits(word, 23, 3) {
        0b000 | 0b001 => pc_relative(PcRelAddressing(word), address),
        // Bit 23 is the high half of the shift field.
        0b010 | 0b011 => add_sub(AddSubImmediate(word)),
        0b100 => logical(LogicalImmediate(word)),
        0b101 => move_wide(MoveWide(word)),
        0b110 => bitfield(Bitfield(word)),
        _ => extract(Extract(word)),
    }
}

fn pc_relative(f: PcRelAddressing, address: u64) -> Leaf {
    let offset = sign_extend((f.immhi() << 2) | f.immlo(), 21);
    let rd = gpr(true, f.rd());
    Ok(if f.op() == 0 {
        Decoded::new(Operation::Adr).with(rd).with(label(address, offset))
    } else {
        Decoded::new(Operation::Adrp).with(rd).with(label(address & !0xFFF, offset << 12))
    })
}

fn add_sub(f: AddSubImmediate) -> Leaf {
    if f.shift() > 1 {
        return reserved("add/subtract immediate shift");
    }
    let sf = f.sf();
    let operation = match (f.op(), f.s()) {
        (0, 0) => Operation::Add,
        (0, _) => Operation::Adds,
        (_, 0) => Operation::Sub,
        _ => Operation::Subs,
    };
    // Only the non-flag-setting forms may write SP.
    let rd = if f.s() == 0 { gpr_sp(sf, f.rd()) } else { gpr(sf, f.rd()) };
    let decoded = Decoded::new(operation)
        .with(rd)
        .with(gpr_sp(sf, f.rn()))
        .with(imm_lsl(u64::from(f.imm12()), f.shift() * 12));

    Ok(match operation {
        Operation::Add if f.shift() == 0 && f.imm12() == 0 && (f.rd() == 31 || f.rn() == 31) => {
            decoded.alias(Operation::Mov).drop_operand(2)
        }
        Operation::Adds if f.rd() == 31 => decoded.alias(Operation::Cmn).drop_operand(0),
        Operation::Subs if f.rd() == 31 => decoded.alias(Operation::Cmp).drop_operand(0),
        _ => decoded,
    })
}

fn logical(f: LogicalImmediate) -> Leaf {
    let sf = f.sf();
    if !sf && f.n() == 1 {
        return reserved("logical immediate N set in 32-bit form");
    }
    let width = if sf { 64 } else { 32 };
    let mask = decode_bit_masks(f.n(), f.imms(), f.immr(), width);
    if mask == 0 {
        return reserved("logical immediate bitmask");
    }
    let operation = match f.opc() {
        0b00 => Operation::And,
        0b01 => Operation::Orr,
        0b10 => Operation::Eor,
        _ => Operation::Ands,
    };
    let rd = if operation == Operation::Ands { gpr(sf, f.rd()) } else { gpr_sp(sf, f.rd()) };
    let value = if sf { imm64(mask) } else { imm(mask) };
    let decoded = Decoded::new(operation).with(rd).with(gpr(sf, f.rn())).with(value);

    Ok(match operation {
        Operation::Orr if f.rn() == 31 && !move_wide_preferred(sf, f.n(), f.imms(), f.immr()) => {
            decoded.alias(Operation::Mov).drop_operand(1)
        }
        Operation::Ands if f.rd() == 31 => decoded.alias(Operation::Tst).drop_operand(0),
        _ => decoded,
    })
}

fn move_wide(f: MoveWide) -> Leaf {
    let sf = f.sf();
    if f.opc() == 0b01 {
        return reserved("move wide opc");
    }
    if !sf && f.hw() >= 2 {
        return reserved("move wide hw in 32-bit form");
    }
    let shift = f.hw() * 16;
    let imm16 = u64::from(f.imm16());
    let operation = match f.opc() {
        0b00 => Operation::Movn,
        0b10 => Operation::Movz,
        _ => Operation::Movk,
    };
    let decoded = Decoded::new(operation).with(gpr(sf, f.rd())).with(imm_lsl(imm16, shift));

    // A zero immediate with a nonzero shift has no MOV spelling.
    let aliasable = !(imm16 == 0 && f.hw() != 0);
    let value = imm16 << shift;
    Ok(match operation {
        Operation::Movz if aliasable => {
            let operand = if sf { imm64(value) } else { imm(value) };
            decoded.alias(Operation::Mov).replace(1, operand)
        }
        Operation::Movn if aliasable && (sf || imm16 != 0xFFFF) => {
            let operand = if sf { Operand::simm(!value as i64) } else { simm32(i64::from(!value as u32 as i32)) };
            decoded.alias(Operation::Mov).replace(1, operand)
        }
        _ => decoded,
    })
}

fn bitfield(f: Bitfield) -> Leaf {
    let sf = f.sf();
    if f.opc() == 0b11 {
        return reserved("bitfield opc");
    }
    if u32::from(sf) != f.n() {
        return reserved("bitfield N does not match sf");
    }
    let (immr, imms) = (f.immr(), f.imms());
    if !sf && (immr >= 32 || imms >= 32) {
        return reserved("bitfield immediate out of range");
    }
    let mask = if sf { 63 } else { 31 };
    let size = mask + 1;
    let rd = gpr(sf, f.rd());
    let rn = gpr(sf, f.rn());
    let lsb_insert = u64::from((size - immr) & mask);
    let width_insert = u64::from(imms + 1);
    let width_extract = u64::from(imms.wrapping_sub(immr).wrapping_add(1));
    let generic = |op: Operation| {
        Decoded::new(op).with(rd).with(rn).with(imm(u64::from(immr))).with(imm(u64::from(imms)))
    };

    let decoded = match f.opc() {
        0b00 => {
            if imms == mask {
                Decoded::new(Operation::Asr).with(rd).with(rn).with(imm(u64::from(immr)))
            } else if imms < immr {
                Decoded::new(Operation::Sbfiz).with(rd).with(rn).with(imm(lsb_insert)).with(imm(width_insert))
            } else if bfx_preferred(sf, false, imms, immr) {
                Decoded::new(Operation::Sbfx).with(rd).with(rn).with(imm(u64::from(immr))).with(imm(width_extract))
            } else {
                let extend = match (immr, imms) {
                    (0, 7) => Some(Operation::Sxtb),
                    (0, 15) => Some(Operation::Sxth),
                    (0, 31) => Some(Operation::Sxtw),
                    _ => None,
                };
                match extend {
                    Some(op) => Decoded::new(op).with(rd).with(wreg(f.rn())),
                    None => generic(Operation::Sbfm),
                }
            }
        }
        0b01 => {
            if imms < immr {
                if f.rn() == 31 {
                    Decoded::new(Operation::Bfc).with(rd).with(imm(lsb_insert)).with(imm(width_insert))
                } else {
                    Decoded::new(Operation::Bfi).with(rd).with(rn).with(imm(lsb_insert)).with(imm(width_insert))
                }
            } else {
                Decoded::new(Operation::Bfxil).with(rd).with(rn).with(imm(u64::from(immr))).with(imm(width_extract))
            }
        }
        _ => {
            if imms != mask && imms + 1 == immr {
                Decoded::new(Operation::Lsl).with(rd).with(rn).with(imm(u64::from(mask - imms)))
            } else if imms == mask {
                Decoded::new(Operation::Lsr).with(rd).with(rn).with(imm(u64::from(immr)))
            } else if imms < immr {
                Decoded::new(Operation::Ubfiz).with(rd).with(rn).with(imm(lsb_insert)).with(imm(width_insert))
            } else if bfx_preferred(sf, true, imms, immr) {
                Decoded::new(Operation::Ubfx).with(rd).with(rn).with(imm(u64::from(immr))).with(imm(width_extract))
            } else {
                match (immr, imms) {
                    (0, 7) => Decoded::new(Operation::Uxtb).with(wreg(f.rd())).with(wreg(f.rn())),
                    (0, 15) => Decoded::new(Operation::Uxth).with(wreg(f.rd())).with(wreg(f.rn())),
                    _ => generic(Operation::Ubfm),
                }
            }
        }
    };
    Ok(decoded)
}

fn extract(f: Extract) -> Leaf {
    let sf = f.sf();
    if f.op21() != 0 || f.o0() != 0 {
        return reserved("extract op21/o0");
    }
    if u32::from(sf) != f.n() {
        return reserved("extract N does not match sf");
    }
    if !sf && f.imms() >= 32 {
        return reserved("extract lsb out of range");
    }
    let decoded = Decoded::new(Operation::Extr)
        .with(gpr(sf, f.rd()))
        .with(gpr(sf, f.rn()))
        .with(gpr(sf, f.rm()))
        .with(imm(u64::from(f.imms())));
    Ok(if f.rn() == f.rm() { decoded.alias(Operation::Ror).drop_operand(2) } else { decoded })
}

#[cfg(test)]
mod tests {
    use crate::arm64::decode;
    use armscope_core::{render, Operation};

    fn dis_at(word: u32, address: u64) -> String {
        let insn = decode(word, address).expect("decode");
        render(&insn, false).expect("render")
    }

    fn dis(word: u32) -> String {
        dis_at(word, 0)
    }

    #[test]
    fn test_adr_adrp() {
        // adr x0, .+8
        assert_eq!(dis_at(0x10000040, 0x1000), "adr\tx0, #0x1008");
        // adrp x1, page+0x1000
        assert_eq!(dis_at(0xb0000001, 0x1234), "adrp\tx1, #0x2000");
    }

    #[test]
    fn test_add_immediate_and_aliases() {
        assert_eq!(dis(0x91000420), "add\tx0, x1, #0x1");
        assert_eq!(dis(0x914043e1), "add\tx1, sp, #0x10, lsl #12");
        assert_eq!(dis(0x910003fd), "mov\tx29, sp");
        assert_eq!(dis(0xf100041f), "cmp\tx0, #0x1");
        assert_eq!(dis(0x3100041f), "cmn\tw0, #0x1");
        assert_eq!(dis(0xd10043ff), "sub\tsp, sp, #0x10");
    }

    #[test]
    fn test_mov_alias_clears_immediate_slot() {
        let insn = decode(0x910003e0, 0).expect("decode");
        assert_eq!(insn.operation, Operation::Mov);
        assert_eq!(insn.operands.len(), 2);
        assert!(insn.operands.slots()[2].is_none());
    }

    #[test]
    fn test_add_immediate_reserved_shift() {
        assert!(decode(0x91800000, 0).is_err());
        assert!(decode(0x91c00000, 0).is_err());
    }

    #[test]
    fn test_logical_immediate() {
        assert_eq!(dis(0x92400c20), "and\tx0, x1, #0xf");
        assert_eq!(dis(0x32000000), "orr\tw0, w0, #0x1");
        assert_eq!(dis(0xb200f3e0), "mov\tx0, #0x5555555555555555");
        assert_eq!(dis(0x7200001f), "tst\tw0, #0x1");
        // N set in a 32-bit form
        assert!(decode(0x12400000, 0).is_err());
    }

    #[test]
    fn test_move_wide() {
        assert_eq!(dis(0xd2800020), "mov\tx0, #0x1");
        assert_eq!(dis(0xd2a00020), "mov\tx0, #0x10000");
        assert_eq!(dis(0x92800000), "mov\tx0, #-0x1");
        assert_eq!(dis(0x12800000), "mov\tw0, #-0x1");
        assert_eq!(dis(0xf2a00020), "movk\tx0, #0x1, lsl #16");
        // zero with a shift keeps the raw form
        assert_eq!(dis(0xd2a00000), "movz\tx0, #0x0, lsl #16");
        // 32-bit movn of 0xffff
        assert_eq!(dis(0x129fffe0), "movn\tw0, #0xffff");
        assert!(decode(0x52c00000, 0).is_err());
    }

    #[test]
    fn test_bitfield_aliases() {
        assert_eq!(dis(0xd37ff800), "lsl\tx0, x0, #0x1");
        assert_eq!(dis(0xd341fc00), "lsr\tx0, x0, #0x1");
        assert_eq!(dis(0x9341fc00), "asr\tx0, x0, #0x1");
        assert_eq!(dis(0x93407c20), "sxtw\tx0, w1");
        assert_eq!(dis(0x13001c20), "sxtb\tw0, w1");
        assert_eq!(dis(0x53001c20), "uxtb\tw0, w1");
        assert_eq!(dis(0x53003c20), "uxth\tw0, w1");
        assert_eq!(dis(0xd3442c20), "ubfx\tx0, x1, #0x4, #0x8");
        assert_eq!(dis(0xd37c1c20), "ubfiz\tx0, x1, #0x4, #0x8");
        assert_eq!(dis(0xb37c1c20), "bfi\tx0, x1, #0x4, #0x8");
        assert_eq!(dis(0xb37c1fe0), "bfc\tx0, #0x4, #0x8");
        assert_eq!(dis(0xb3442c20), "bfxil\tx0, x1, #0x4, #0x8");
        assert_eq!(dis(0x93442c20), "sbfx\tx0, x1, #0x4, #0x8");
        // N mismatch
        assert!(decode(0x93000000, 0).is_err());
    }

    #[test]
    fn test_extract_and_ror() {
        assert_eq!(dis(0x93c21020), "extr\tx0, x1, x2, #0x4");
        assert_eq!(dis(0x93c11020), "ror\tx0, x1, #0x4");
        assert!(decode(0x13c21020 | (1 << 15), 0).is_err());
    }
}
