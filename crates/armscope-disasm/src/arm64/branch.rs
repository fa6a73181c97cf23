//! Branches, exception generation and system instructions.

use armscope_core::{Condition, Operand, Operation, Register, SysOp, SystemReg};

use super::bits::extract_bits;
use super::decoded::{gpr, imm, implementation_specific, label, reserved, xreg, xsp, Decoded, Leaf};
use super::fields::{
    BranchImmediate, BranchRegister, CompareBranch, ConditionalBranch, ExceptionGeneration, System, TestBranch,
};

/// `B.<cond>` operations in condition order.
const CONDITIONAL_BRANCHES: [Operation; 16] = [
    Operation::BEq,
    Operation::BNe,
    Operation::BCs,
    Operation::BCc,
    Operation::BMi,
    Operation::BPl,
    Operation::BVs,
    Operation::BVc,
    Operation::BHi,
    Operation::BLs,
    Operation::BGe,
    Operation::BLt,
    Operation::BGt,
    Operation::BLe,
    Operation::BAl,
    Operation::BNv,
];

pub(crate) fn decode(word: u32, address: u64) -> Leaf {
    let bit25 = extract_bits(word, 25, 1);
    match extract_bits(word, 29, 3) {
        0b000 | 0b100 => branch_immediate(BranchImmediate(word), address),
        0b001 | 0b101 if bit25 == 0 => compare_branch(CompareBranch(word), address),
        0b001 | 0b101 => test_branch(TestBranch(word), address),
        0b010 if bit25 == 0 => conditional_branch(ConditionalBranch(word), address),
        0b110 if bit25 == 1 => branch_register(BranchRegister(word)),
        0b110 if extract_bits(word, 24, 1) == 0 => exception(ExceptionGeneration(word)),
        0b110 if extract_bits(word, 22, 2) == 0 => system(System(word)),
        _ => reserved("branch/system encoding"),
    }
}

fn conditional_branch(f: ConditionalBranch, address: u64) -> Leaf {
    if f.o1() != 0 || f.o0() != 0 {
        return reserved("conditional branch o1/o0");
    }
    let operation = conditional_branch_operation(Condition::from_bits(f.cond()));
    Ok(Decoded::new(operation).with(label(address, f.imm19() << 2)))
}

fn exception(f: ExceptionGeneration) -> Leaf {
    if f.op2() != 0 {
        return reserved("exception generation op2");
    }
    let operation = match (f.opc(), f.ll()) {
        (0b000, 0b01) => Operation::Svc,
        (0b000, 0b10) => Operation::Hvc,
        (0b000, 0b11) => Operation::Smc,
        (0b001, 0b00) => Operation::Brk,
        (0b010, 0b00) => Operation::Hlt,
        (0b101, 0b01) => Operation::Dcps1,
        (0b101, 0b10) => Operation::Dcps2,
        (0b101, 0b11) => Operation::Dcps3,
        _ => return reserved("exception generation opc/LL"),
    };
    let decoded = Decoded::new(operation);
    let dcps = matches!(operation, Operation::Dcps1 | Operation::Dcps2 | Operation::Dcps3);
    Ok(if dcps && f.imm16() == 0 { decoded } else { decoded.with(imm(u64::from(f.imm16()))) })
}

fn system(f: System) -> Leaf {
    match (f.l(), f.op0()) {
        (false, 0b00) => match f.crn() {
            0b0010 if f.op1() == 0b011 && f.rt() == 31 => Ok(hint((f.crm() << 3) | f.op2())),
            0b0011 if f.op1() == 0b011 && f.rt() == 31 => barrier(f),
            0b0100 if f.rt() == 31 => pstate(f),
            _ => reserved("system instruction class"),
        },
        (true, 0b00) => reserved("system instruction with L set"),
        (l, 0b01) => Ok(sys(f, l)),
        (false, _) => Ok(move_to_system(f)),
        (true, _) => Ok(move_from_system(f)),
    }
}

fn hint(imm7: u32) -> Decoded {
    let operation = match imm7 {
        0 => Operation::Nop,
        1 => Operation::Yield,
        2 => Operation::Wfe,
        3 => Operation::Wfi,
        4 => Operation::Sev,
        5 => Operation::Sevl,
        6 => Operation::Dgh,
        7 => Operation::Xpaclri,
        8 => Operation::Pacia1716,
        10 => Operation::Pacib1716,
        12 => Operation::Autia1716,
        14 => Operation::Autib1716,
        16 => Operation::Esb,
        17 => return Decoded::new(Operation::Psb).with(Operand::SystemRegister(SystemReg::Csync)),
        18 => return Decoded::new(Operation::Tsb).with(Operand::SystemRegister(SystemReg::Csync)),
        20 => Operation::Csdb,
        24 => Operation::Paciaz,
        25 => Operation::Paciasp,
        26 => Operation::Pacibz,
        27 => Operation::Pacibsp,
        28 => Operation::Autiaz,
        29 => Operation::Autiasp,
        30 => Operation::Autibz,
        31 => Operation::Autibsp,
        32 => Operation::Bti,
        34 => return Decoded::new(Operation::Bti).with(Operand::SystemRegister(SystemReg::C)),
        36 => return Decoded::new(Operation::Bti).with(Operand::SystemRegister(SystemReg::J)),
        38 => return Decoded::new(Operation::Bti).with(Operand::SystemRegister(SystemReg::Jc)),
        _ => return Decoded::new(Operation::Hint).with(imm(u64::from(imm7))),
    };
    Decoded::new(operation)
}

fn barrier_operand(crm: u32) -> Operand {
    match SystemReg::barrier_option(crm) {
        Some(option) => Operand::SystemRegister(option),
        None => imm(u64::from(crm)),
    }
}

fn barrier(f: System) -> Leaf {
    let crm = f.crm();
    Ok(match f.op2() {
        0b010 => {
            let decoded = Decoded::new(Operation::Clrex);
            if crm == 15 {
                decoded
            } else {
                decoded.with(imm(u64::from(crm)))
            }
        }
        0b100 => match crm {
            0b0000 => Decoded::new(Operation::Ssbb),
            0b0100 => Decoded::new(Operation::Pssbb),
            _ => Decoded::new(Operation::Dsb).with(barrier_operand(crm)),
        },
        0b101 => Decoded::new(Operation::Dmb).with(barrier_operand(crm)),
        0b110 => {
            let decoded = Decoded::new(Operation::Isb);
            if crm == 15 {
                decoded
            } else {
                decoded.with(imm(u64::from(crm)))
            }
        }
        0b111 if crm == 0 => Decoded::new(Operation::Sb),
        _ => return reserved("barrier op2"),
    })
}

fn pstate(f: System) -> Leaf {
    match (f.op1(), f.op2()) {
        (0, 0) => return Ok(Decoded::new(Operation::Cfinv)),
        (0, 1) => return Ok(Decoded::new(Operation::Xaflag)),
        (0, 2) => return Ok(Decoded::new(Operation::Axflag)),
        _ => {}
    }
    match SystemReg::pstate_field(f.op1(), f.op2()) {
        Some(field) => Ok(Decoded::new(Operation::Msr)
            .with(Operand::SystemRegister(field))
            .with(imm(u64::from(f.crm())))),
        None => reserved("PSTATE field"),
    }
}

fn control(n: u32) -> Operand {
    Operand::reg(Register::control(n))
}

fn sys(f: System, l: bool) -> Decoded {
    let (op1, crn, crm, op2, rt) = (f.op1(), f.crn(), f.crm(), f.op2(), f.rt());
    if l {
        return Decoded::new(Operation::Sysl)
            .with(xreg(rt))
            .with(imm(u64::from(op1)))
            .with(control(crn))
            .with(control(crm))
            .with(imm(u64::from(op2)));
    }
    let target = if rt == 31 { Operand::None } else { xreg(rt) };
    match SystemReg::sys_operation(op1, crn, crm, op2) {
        Some((kind, name)) => {
            let operation = match kind {
                SysOp::At => Operation::At,
                SysOp::Dc => Operation::Dc,
                SysOp::Ic => Operation::Ic,
                SysOp::Tlbi => Operation::Tlbi,
            };
            Decoded::new(operation).with(Operand::SystemRegister(name)).with(target)
        }
        None => Decoded::new(Operation::Sys)
            .with(imm(u64::from(op1)))
            .with(control(crn))
            .with(control(crm))
            .with(imm(u64::from(op2)))
            .with(target),
    }
}

fn move_to_system(f: System) -> Decoded {
    let (op0, op1, crn, crm, op2) = (f.op0(), f.op1(), f.crn(), f.crm(), f.op2());
    let register = match SystemReg::from_encoding_for_write(op0, op1, crn, crm, op2) {
        Some(reg) => Operand::SystemRegister(reg),
        None => implementation_specific(op0, op1, crn, crm, op2),
    };
    Decoded::new(Operation::Msr).with(register).with(xreg(f.rt()))
}

fn move_from_system(f: System) -> Decoded {
    let (op0, op1, crn, crm, op2) = (f.op0(), f.op1(), f.crn(), f.crm(), f.op2());
    let register = match SystemReg::from_encoding(op0, op1, crn, crm, op2) {
        Some(reg) => Operand::SystemRegister(reg),
        None => implementation_specific(op0, op1, crn, crm, op2),
    };
    Decoded::new(Operation::Mrs).with(xreg(f.rt())).with(register)
}

fn branch_register(f: BranchRegister) -> Leaf {
    if f.op2() != 0b11111 {
        return reserved("branch register op2");
    }
    let (rn, op3, op4) = (f.rn(), f.op3(), f.op4());
    let decoded = match (f.opc(), op3, op4) {
        (0b0000, 0, 0) => Decoded::new(Operation::Br).with(xreg(rn)),
        (0b0000, 2, 31) => Decoded::new(Operation::Braaz).with(xreg(rn)),
        (0b0000, 3, 31) => Decoded::new(Operation::Brabz).with(xreg(rn)),
        (0b0001, 0, 0) => Decoded::new(Operation::Blr).with(xreg(rn)),
        (0b0001, 2, 31) => Decoded::new(Operation::Blraaz).with(xreg(rn)),
        (0b0001, 3, 31) => Decoded::new(Operation::Blrabz).with(xreg(rn)),
        (0b0010, 0, 0) => {
            let decoded = Decoded::new(Operation::Ret);
            if rn == 30 {
                decoded
            } else {
                decoded.with(xreg(rn))
            }
        }
        (0b0010, 2, 31) if rn == 31 => Decoded::new(Operation::Retaa),
        (0b0010, 3, 31) if rn == 31 => Decoded::new(Operation::Retab),
        (0b0100, 0, 0) if rn == 31 => Decoded::new(Operation::Eret),
        (0b0100, 2, 31) if rn == 31 => Decoded::new(Operation::Eretaa),
        (0b0100, 3, 31) if rn == 31 => Decoded::new(Operation::Eretab),
        (0b0101, 0, 0) if rn == 31 => Decoded::new(Operation::Drps),
        (0b1000, 2, _) => Decoded::new(Operation::Braa).with(xreg(rn)).with(xsp(op4)),
        (0b1000, 3, _) => Decoded::new(Operation::Brab).with(xreg(rn)).with(xsp(op4)),
        (0b1001, 2, _) => Decoded::new(Operation::Blraa).with(xreg(rn)).with(xsp(op4)),
        (0b1001, 3, _) => Decoded::new(Operation::Blrab).with(xreg(rn)).with(xsp(op4)),
        _ => return reserved("branch register opc/op3/op4"),
    };
    Ok(decoded)
}

fn branch_immediate(f: BranchImmediate, address: u64) -> Leaf {
    let operation = if f.op() == 0 { Operation::B } else { Operation::Bl };
    Ok(Decoded::new(operation).with(label(address, f.imm26() << 2)))
}

fn compare_branch(f: CompareBranch, address: u64) -> Leaf {
    let operation = if f.op() == 0 { Operation::Cbz } else { Operation::Cbnz };
    Ok(Decoded::new(operation).with(gpr(f.sf(), f.rt())).with(label(address, f.imm19() << 2)))
}

fn test_branch(f: TestBranch, address: u64) -> Leaf {
    let operation = if f.op() == 0 { Operation::Tbz } else { Operation::Tbnz };
    let bit = (f.b5() << 5) | f.b40();
    Ok(Decoded::new(operation)
        .with(gpr(f.b5() == 1, f.rt()))
        .with(imm(u64::from(bit)))
        .with(label(address, f.imm14() << 2)))
}

/// Operation of `B.<cond>` for a condition.
pub(crate) fn conditional_branch_operation(cond: Condition) -> Operation {
    CONDITIONAL_BRANCHES[cond.bits() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm64::decode;
    use armscope_core::{render, OperandClass};

    fn dis_at(word: u32, address: u64) -> String {
        let insn = decode(word, address).expect("decode");
        render(&insn, false).expect("render")
    }

    fn dis(word: u32) -> String {
        dis_at(word, 0)
    }

    #[test]
    fn test_branches() {
        assert_eq!(dis(0x14000001), "b\t#0x4");
        assert_eq!(dis_at(0x97ffffff, 0x1000), "bl\t#0xffc");
        assert_eq!(dis(0x54000040), "b.eq\t#0x8");
        assert_eq!(dis_at(0x54ffffe1, 0x100), "b.ne\t#0xfc");
        assert_eq!(dis(0xb4000040), "cbz\tx0, #0x8");
        assert_eq!(dis(0x35000041), "cbnz\tw1, #0x8");
        assert_eq!(dis(0x36180040), "tbz\tw0, #0x3, #0x8");
        assert_eq!(dis(0xb7080040), "tbnz\tx0, #0x21, #0x8");
    }

    #[test]
    fn test_conditional_branch_table() {
        for cond in Condition::ALL {
            let name = conditional_branch_operation(cond).name();
            assert_eq!(name, format!("b.{}", cond.name()));
        }
    }

    #[test]
    fn test_branch_register() {
        assert_eq!(dis(0xd61f0200), "br\tx16");
        assert_eq!(dis(0xd63f0100), "blr\tx8");
        assert_eq!(dis(0xd65f03c0), "ret");
        assert_eq!(dis(0xd65f0020), "ret\tx1");
        assert_eq!(dis(0xd65f0bff), "retaa");
        assert_eq!(dis(0xd69f03e0), "eret");
        assert_eq!(dis(0xd6bf03e0), "drps");
        assert_eq!(dis(0xd71f0801), "braa\tx0, x1");
        assert_eq!(dis(0xd61f081f), "braaz\tx0");
        assert!(decode(0xd61e0200, 0).is_err());
    }

    #[test]
    fn test_exception_generation() {
        assert_eq!(dis(0xd4000001), "svc\t#0x0");
        assert_eq!(dis(0xd4000002), "hvc\t#0x0");
        assert_eq!(dis(0xd4207d00), "brk\t#0x3e8");
        assert_eq!(dis(0xd4400000), "hlt\t#0x0");
        assert_eq!(dis(0xd4a00001), "dcps1");
        assert!(decode(0xd4000000, 0).is_err());
    }

    #[test]
    fn test_hints() {
        assert_eq!(dis(0xd503201f), "nop");
        assert_eq!(dis(0xd503203f), "yield");
        assert_eq!(dis(0xd503207f), "wfi");
        assert_eq!(dis(0xd503221f), "esb");
        assert_eq!(dis(0xd503223f), "psb\tcsync");
        assert_eq!(dis(0xd503229f), "csdb");
        assert_eq!(dis(0xd503233f), "paciasp");
        assert_eq!(dis(0xd50323bf), "autiasp");
        assert_eq!(dis(0xd503241f), "bti");
        assert_eq!(dis(0xd503245f), "bti\tc");
        assert_eq!(dis(0xd5032fff), "hint\t#0x7f");
    }

    #[test]
    fn test_barriers() {
        assert_eq!(dis(0xd5033bbf), "dmb\tish");
        assert_eq!(dis(0xd5033f9f), "dsb\tsy");
        assert_eq!(dis(0xd5033fdf), "isb");
        assert_eq!(dis(0xd5033f5f), "clrex");
        assert_eq!(dis(0xd503309f), "ssbb");
        assert_eq!(dis(0xd503349f), "pssbb");
        assert_eq!(dis(0xd50330ff), "sb");
        assert_eq!(dis(0xd50330bf), "dmb\t#0x0");
    }

    #[test]
    fn test_pstate() {
        assert_eq!(dis(0xd50342df), "msr\tdaifset, #0x2");
        assert_eq!(dis(0xd500401f), "cfinv");
        assert_eq!(dis(0xd500403f), "xaflag");
        assert_eq!(dis(0xd500405f), "axflag");
    }

    #[test]
    fn test_system_register_moves() {
        assert_eq!(dis(0xd53bd040), "mrs\tx0, tpidr_el0");
        assert_eq!(dis(0xd51bd040), "msr\ttpidr_el0, x0");
        let insn = decode(0xd53ff201, 0).expect("decode");
        assert_eq!(insn.operands.as_slice()[1].class(), OperandClass::ImplementationSpecific);
        assert_eq!(render(&insn, false).as_deref(), Ok("mrs\tx1, s3_7_c15_c2_0"));
    }

    #[test]
    fn test_system_instructions() {
        assert_eq!(dis(0xd50b7e20), "dc\tcivac, x0");
        assert_eq!(dis(0xd508751f), "ic\tiallu");
        assert_eq!(dis(0xd508831f), "tlbi\tvmalle1is");
        assert_eq!(dis(0xd509001f), "sys\t#0x1, c0, c0, #0x0");
        assert_eq!(dis(0xd5290003), "sysl\tx3, #0x1, c0, c0, #0x0");
    }
}
