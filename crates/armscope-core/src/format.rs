//! Assembly text rendering.
//!
//! An instruction renders as its mnemonic, a tab, and its populated operands
//! joined by `", "`. Immediates, labels and memory offsets are hexadecimal
//! unless [`FormatOptions::decimal_immediates`] is set; shift amounts, lane
//! indices and register numbers are always decimal.

use std::fmt::{self, Write};

use crate::error::RenderError;
use crate::operand::{
    AddressingMode, Arrangement, Immediate, MemoryOperand, PostIndex, RegisterList, RegisterOperand,
    Shift, SysRegEncoding,
};
use crate::register::RegisterClass;
use crate::{Instruction, Operand};

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Print immediates, labels and offsets in decimal instead of hex.
    pub decimal_immediates: bool,
}

impl FormatOptions {
    pub const fn decimal() -> Self {
        Self { decimal_immediates: true }
    }
}

/// Renders `insn` as assembly text.
pub fn render(insn: &Instruction, use_decimal_immediates: bool) -> Result<String, RenderError> {
    insn.format(&FormatOptions { decimal_immediates: use_decimal_immediates })
}

/// Placeholder text for a word that could not be rendered.
pub fn placeholder(word: u32) -> String {
    format!(".inst 0x{word:08x}")
}

impl Instruction {
    /// Renders this instruction with the given options.
    pub fn format(&self, options: &FormatOptions) -> Result<String, RenderError> {
        if self.is_undefined() {
            return Err(RenderError::UndefinedOperation { word: self.word });
        }
        let mnemonic = self.mnemonic();
        let mut out = String::with_capacity(32);
        out.push_str(mnemonic);
        for (index, operand) in self.operands.iter().enumerate() {
            out.push_str(if index == 0 { "\t" } else { ", " });
            let writer = OperandWriter { out: &mut out, options, mnemonic, index };
            writer.write(operand)?;
        }
        Ok(out)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(&FormatOptions::default()) {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str(&placeholder(self.word)),
        }
    }
}

struct OperandWriter<'a> {
    out: &'a mut String,
    options: &'a FormatOptions,
    mnemonic: &'static str,
    index: usize,
}

impl OperandWriter<'_> {
    fn invalid(&self, reason: &'static str) -> RenderError {
        RenderError::invalid_operand(self.mnemonic, self.index, reason)
    }

    fn write(mut self, operand: &Operand) -> Result<(), RenderError> {
        match operand {
            Operand::None => Err(self.invalid("unused slot in operand prefix")),
            Operand::Imm32(imm) => self.immediate(imm, 32),
            Operand::Imm64(imm) => self.immediate(imm, 64),
            Operand::FloatImm(bits) => {
                write!(self.out, "#{:.8}", f32::from_bits(*bits))?;
                Ok(())
            }
            Operand::Register(reg) => self.register(reg),
            Operand::MultiRegister(list) => self.register_list(list),
            Operand::SystemRegister(reg) => {
                self.out.push_str(reg.name());
                Ok(())
            }
            Operand::Memory(mem) => self.memory(mem),
            Operand::Label(target) => {
                self.out.push('#');
                self.number(*target, false);
                Ok(())
            }
            Operand::Condition(cond) => {
                self.out.push_str(cond.name());
                Ok(())
            }
            Operand::ImplementationSpecific(enc) => {
                write_sysreg_encoding(self.out, enc)?;
                Ok(())
            }
        }
    }

    fn number(&mut self, value: u64, negative: bool) {
        self.number_in(value, negative, self.options.decimal_immediates);
    }

    fn number_in(&mut self, value: u64, negative: bool, decimal: bool) {
        if negative {
            self.out.push('-');
        }
        // Writing into a String cannot fail.
        let _ = if decimal {
            write!(self.out, "{value}")
        } else {
            write!(self.out, "{value:#x}")
        };
    }

    fn signed(&mut self, value: i64) {
        self.number(value.unsigned_abs(), value < 0);
    }

    fn immediate(mut self, imm: &Immediate, width: u32) -> Result<(), RenderError> {
        self.out.push('#');
        match (imm.signed, width) {
            (false, _) if imm.decimal => self.number_in(imm.value, false, true),
            (true, 32) => self.signed(i64::from(imm.value as u32 as i32)),
            (true, _) => self.signed(imm.value as i64),
            (false, 32) => self.number(imm.value & 0xFFFF_FFFF, false),
            (false, _) => self.number(imm.value, false),
        }
        if let Some(shift) = imm.shift {
            self.out.push_str(", ");
            write_shift(self.out, &shift)?;
        }
        Ok(())
    }

    fn register(self, op: &RegisterOperand) -> Result<(), RenderError> {
        self.out.push_str(op.reg.name());
        match (op.arrangement, op.lane) {
            (None, None) => {}
            (None, Some(_)) => return Err(self.invalid("lane index without element size")),
            (Some(arrangement), lane) => {
                if op.reg.class() != RegisterClass::V {
                    return Err(self.invalid("arrangement on a non-vector register"));
                }
                if arrangement.lanes == 0 && lane.is_none() {
                    return Err(self.invalid("element-only arrangement without lane index"));
                }
                self.out.push('.');
                write_arrangement(self.out, &arrangement)?;
                if let Some(lane) = lane {
                    write!(self.out, "[{lane}]")?;
                }
            }
        }
        if let Some(shift) = op.shift {
            self.out.push_str(", ");
            write_shift(self.out, &shift)?;
        }
        Ok(())
    }

    fn register_list(self, list: &RegisterList) -> Result<(), RenderError> {
        if list.count == 0 || list.count > 4 {
            return Err(self.invalid("register list length out of range"));
        }
        self.out.push('{');
        for (i, reg) in list.registers().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(reg.name());
            self.out.push('.');
            write_arrangement(self.out, &list.arrangement)?;
        }
        self.out.push('}');
        if let Some(lane) = list.lane {
            write!(self.out, "[{lane}]")?;
        }
        Ok(())
    }

    fn memory(mut self, mem: &MemoryOperand) -> Result<(), RenderError> {
        if mem.base.class() != RegisterClass::X {
            return Err(self.invalid("memory base is not a 64-bit register"));
        }
        self.out.push('[');
        self.out.push_str(mem.base.name());
        match mem.mode {
            AddressingMode::Base => self.out.push(']'),
            AddressingMode::PreIndex(offset) => {
                self.out.push_str(", #");
                self.signed(offset);
                self.out.push_str("]!");
            }
            AddressingMode::PostIndex(PostIndex::Immediate(offset)) => {
                self.out.push_str("], #");
                self.signed(offset);
            }
            AddressingMode::PostIndex(PostIndex::Register(reg)) => {
                self.out.push_str("], ");
                self.out.push_str(reg.name());
            }
            AddressingMode::Offset(offset) => {
                if offset != 0 {
                    self.out.push_str(", #");
                    self.signed(offset);
                }
                self.out.push(']');
            }
            AddressingMode::Extended { index, shift } => {
                self.out.push_str(", ");
                self.out.push_str(index.name());
                if let Some(shift) = shift {
                    self.out.push_str(", ");
                    write_shift(self.out, &shift)?;
                }
                self.out.push(']');
            }
        }
        Ok(())
    }
}

fn write_shift(out: &mut String, shift: &Shift) -> fmt::Result {
    out.push_str(shift.kind.name());
    match shift.amount {
        Some(amount) => write!(out, " #{amount}"),
        None => Ok(()),
    }
}

fn write_arrangement(out: &mut String, arrangement: &Arrangement) -> fmt::Result {
    if arrangement.lanes != 0 {
        write!(out, "{}", arrangement.lanes)?;
    }
    out.push_str(arrangement.element.suffix());
    Ok(())
}

fn write_sysreg_encoding(out: &mut String, enc: &SysRegEncoding) -> fmt::Result {
    write!(out, "s{}_{}_c{}_c{}_{}", enc.op0, enc.op1, enc.crn, enc.crm, enc.op2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{Condition, Group};
    use crate::operand::{ElementSize, ShiftType};
    use crate::{Operation, Register, SystemReg};

    fn insn(operation: Operation, operands: &[Operand]) -> Instruction {
        Instruction {
            word: 0,
            address: 0,
            group: Group::DataProcessingImmediate,
            operation,
            operands: operands.iter().copied().collect(),
        }
    }

    fn hex(operation: Operation, operands: &[Operand]) -> String {
        render(&insn(operation, operands), false).expect("render")
    }

    #[test]
    fn test_bare_mnemonic() {
        assert_eq!(hex(Operation::Nop, &[]), "nop");
    }

    #[test]
    fn test_undefined_fails() {
        let insn = Instruction::undefined(0x1234, 0, Group::Unallocated);
        assert_eq!(render(&insn, false), Err(RenderError::UndefinedOperation { word: 0x1234 }));
        assert_eq!(insn.to_string(), ".inst 0x00001234");
    }

    #[test]
    fn test_immediate_with_shift() {
        let text = hex(
            Operation::Add,
            &[
                Operand::reg(Register::xsp(31)),
                Operand::reg(Register::xsp(1)),
                Operand::imm32_shifted(1, Shift::lsl(12)),
            ],
        );
        assert_eq!(text, "add\tsp, x1, #0x1, lsl #12");
    }

    #[test]
    fn test_decimal_immediates() {
        let insn = insn(Operation::Mov, &[Operand::reg(Register::w(0)), Operand::imm32(255)]);
        assert_eq!(render(&insn, true).as_deref(), Ok("mov\tw0, #255"));
        assert_eq!(render(&insn, false).as_deref(), Ok("mov\tw0, #0xff"));
    }

    #[test]
    fn test_signed_immediates() {
        let minus_one_32 = Operand::Imm32(Immediate { value: 0xFFFF_FFFF, signed: true, shift: None, decimal: false });
        assert_eq!(hex(Operation::Mov, &[Operand::reg(Register::w(0)), minus_one_32]), "mov\tw0, #-0x1");
        assert_eq!(hex(Operation::Mov, &[Operand::reg(Register::x(0)), Operand::simm(-16)]), "mov\tx0, #-0x10");
    }

    #[test]
    fn test_rotation_always_decimal() {
        let ops = [
            Operand::vector(0, Arrangement::full(ElementSize::S, true)),
            Operand::vector(1, Arrangement::full(ElementSize::S, true)),
            Operand::vector(2, Arrangement::full(ElementSize::S, true)),
            Operand::imm32_decimal(270),
        ];
        let insn = insn(Operation::Fcadd, &ops);
        assert_eq!(render(&insn, false).as_deref(), Ok("fcadd\tv0.4s, v1.4s, v2.4s, #270"));
        assert_eq!(render(&insn, true).as_deref(), Ok("fcadd\tv0.4s, v1.4s, v2.4s, #270"));
    }

    #[test]
    fn test_float_immediate() {
        assert_eq!(
            hex(Operation::Fmov, &[Operand::reg(Register::simd(RegisterClass::S, 0)), Operand::FloatImm(0x3f80_0000)]),
            "fmov\ts0, #1.00000000"
        );
    }

    #[test]
    fn test_shifted_and_extended_registers() {
        let text = hex(
            Operation::Add,
            &[
                Operand::reg(Register::x(0)),
                Operand::reg(Register::x(1)),
                Operand::shifted(Register::x(2), Shift::new(ShiftType::Lsl, 3)),
            ],
        );
        assert_eq!(text, "add\tx0, x1, x2, lsl #3");
        let text = hex(
            Operation::Add,
            &[
                Operand::reg(Register::xsp(31)),
                Operand::reg(Register::xsp(31)),
                Operand::shifted(Register::w(2), Shift::bare(ShiftType::Uxtw)),
            ],
        );
        assert_eq!(text, "add\tsp, sp, w2, uxtw");
    }

    #[test]
    fn test_memory_modes() {
        let base = Register::xsp(0);
        let mem = |mode| Operand::memory(base, mode);
        let rt = Operand::reg(Register::x(1));
        assert_eq!(hex(Operation::Ldr, &[rt, mem(AddressingMode::Base)]), "ldr\tx1, [x0]");
        assert_eq!(hex(Operation::Ldr, &[rt, mem(AddressingMode::Offset(0))]), "ldr\tx1, [x0]");
        assert_eq!(hex(Operation::Ldr, &[rt, mem(AddressingMode::Offset(0x10))]), "ldr\tx1, [x0, #0x10]");
        assert_eq!(hex(Operation::Ldr, &[rt, mem(AddressingMode::PreIndex(-8))]), "ldr\tx1, [x0, #-0x8]!");
        assert_eq!(
            hex(Operation::Ldr, &[rt, mem(AddressingMode::PostIndex(PostIndex::Immediate(16)))]),
            "ldr\tx1, [x0], #0x10"
        );
        assert_eq!(
            hex(Operation::Ld1, &[rt, mem(AddressingMode::PostIndex(PostIndex::Register(Register::x(2))))]),
            "ld1\tx1, [x0], x2"
        );
        assert_eq!(
            hex(
                Operation::Ldr,
                &[
                    rt,
                    mem(AddressingMode::Extended {
                        index: Register::w(1),
                        shift: Some(Shift::new(ShiftType::Sxtw, 3)),
                    }),
                ],
            ),
            "ldr\tx1, [x0, w1, sxtw #3]"
        );
    }

    #[test]
    fn test_vector_operands() {
        let text = hex(
            Operation::Add,
            &[
                Operand::vector(0, Arrangement::full(ElementSize::S, true)),
                Operand::vector(1, Arrangement::full(ElementSize::S, true)),
                Operand::lane(2, ElementSize::S, 3),
            ],
        );
        assert_eq!(text, "add\tv0.4s, v1.4s, v2.s[3]");
    }

    #[test]
    fn test_register_lists() {
        let list = RegisterList {
            first: Register::v(0),
            count: 2,
            arrangement: Arrangement::full(ElementSize::B, true),
            lane: None,
        };
        let mem = Operand::memory(Register::xsp(31), AddressingMode::Base);
        assert_eq!(hex(Operation::Ld1, &[Operand::MultiRegister(list), mem]), "ld1\t{v0.16b, v1.16b}, [sp]");
        let lane = RegisterList { arrangement: Arrangement::element(ElementSize::S), lane: Some(1), ..list };
        assert_eq!(hex(Operation::Ld2, &[Operand::MultiRegister(lane), mem]), "ld2\t{v0.s, v1.s}[1], [sp]");
    }

    #[test]
    fn test_system_operands() {
        assert_eq!(
            hex(Operation::Mrs, &[Operand::reg(Register::x(0)), Operand::SystemRegister(SystemReg::TpidrEl0)]),
            "mrs\tx0, tpidr_el0"
        );
        let enc = SysRegEncoding { op0: 3, op1: 0, crn: 15, crm: 2, op2: 0 };
        assert_eq!(
            hex(Operation::Mrs, &[Operand::reg(Register::x(1)), Operand::ImplementationSpecific(enc)]),
            "mrs\tx1, s3_0_c15_c2_0"
        );
        assert_eq!(
            hex(
                Operation::Csel,
                &[
                    Operand::reg(Register::w(0)),
                    Operand::reg(Register::w(1)),
                    Operand::reg(Register::w(2)),
                    Operand::Condition(Condition::Eq),
                ],
            ),
            "csel\tw0, w1, w2, eq"
        );
    }

    #[test]
    fn test_label_rendering() {
        assert_eq!(hex(Operation::B, &[Operand::Label(0x1000)]), "b\t#0x1000");
        assert_eq!(render(&insn(Operation::B, &[Operand::Label(0x1000)]), true).as_deref(), Ok("b\t#4096"));
    }

    #[test]
    fn test_inconsistent_operands_fail() {
        let bad = Operand::Register(RegisterOperand {
            reg: Register::x(0),
            arrangement: Some(Arrangement::full(ElementSize::S, true)),
            lane: None,
            shift: None,
        });
        assert!(matches!(
            render(&insn(Operation::Mov, &[bad]), false),
            Err(RenderError::InvalidOperand { index: 0, .. })
        ));
        let mem = Operand::memory(Register::w(0), AddressingMode::Base);
        assert!(render(&insn(Operation::Ldr, &[Operand::reg(Register::x(0)), mem]), false).is_err());
    }
}
