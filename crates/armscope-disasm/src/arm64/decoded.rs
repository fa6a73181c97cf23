//! Leaf decoder output and the operand builders the leaves share.

use armscope_core::{
    AddressingMode, Arrangement, ElementSize, Immediate, Operand, Operands, Operation, Register,
    RegisterClass, RegisterList, RegisterOperand, Shift, ShiftType, SysRegEncoding,
};

/// A reserved bit pattern, with a short description of the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reserved(pub &'static str);

/// Result of a leaf decoder.
pub(crate) type Leaf = Result<Decoded, Reserved>;

#[inline]
pub(crate) fn reserved<T>(reason: &'static str) -> Result<T, Reserved> {
    Err(Reserved(reason))
}

/// Operation plus operands, as produced by one leaf decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub operation: Operation,
    pub operands: Operands,
}

impl Decoded {
    pub fn new(operation: Operation) -> Self {
        Self { operation, operands: Operands::new() }
    }

    /// Appends an operand.
    pub fn with(mut self, operand: Operand) -> Self {
        self.operands.push(operand);
        self
    }

    /// Renames the operation, keeping the operands.
    pub fn alias(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    /// Deletes operand `index`, shifting later operands down.
    pub fn drop_operand(mut self, index: usize) -> Self {
        self.operands.remove(index);
        self
    }

    pub fn replace(mut self, index: usize, operand: Operand) -> Self {
        self.operands.set(index, operand);
        self
    }
}

/// `Wn`/`Xn`, 31 = zero register.
#[inline]
pub(crate) fn gpr(sf: bool, n: u32) -> Operand {
    Operand::reg(Register::gpr(sf, n))
}

/// `Wn`/`Xn`, 31 = stack pointer.
#[inline]
pub(crate) fn gpr_sp(sf: bool, n: u32) -> Operand {
    Operand::reg(Register::gpr_sp(sf, n))
}

#[inline]
pub(crate) fn xreg(n: u32) -> Operand {
    Operand::reg(Register::x(n))
}

#[inline]
pub(crate) fn wreg(n: u32) -> Operand {
    Operand::reg(Register::w(n))
}

#[inline]
pub(crate) fn xsp(n: u32) -> Operand {
    Operand::reg(Register::xsp(n))
}

/// General purpose register with a shift clause. `LSL #0` is left off.
pub(crate) fn shifted_gpr(sf: bool, n: u32, kind: ShiftType, amount: u32) -> Operand {
    let reg = Register::gpr(sf, n);
    if kind == ShiftType::Lsl && amount == 0 {
        Operand::reg(reg)
    } else {
        Operand::shifted(reg, Shift::new(kind, amount))
    }
}

/// SIMD&FP scalar file for an element of `1 << log2_bytes` bytes.
pub(crate) fn scalar_class(log2_bytes: u32) -> RegisterClass {
    RegisterClass::scalar(log2_bytes).unwrap_or(RegisterClass::Q)
}

/// Scalar SIMD&FP register (`b0`, `h0`, `s0`, `d0`, `q0`).
#[inline]
pub(crate) fn scalar(log2_bytes: u32, n: u32) -> Operand {
    Operand::reg(Register::simd(scalar_class(log2_bytes), n))
}

#[inline]
pub(crate) fn sreg(n: u32) -> Operand {
    scalar(2, n)
}

#[inline]
pub(crate) fn dreg(n: u32) -> Operand {
    scalar(3, n)
}

#[inline]
pub(crate) fn qreg(n: u32) -> Operand {
    scalar(4, n)
}

/// Element size from a two-bit `size` field; larger values give `Q`.
pub(crate) fn element(size: u32) -> ElementSize {
    ElementSize::from_log2(size).unwrap_or(ElementSize::Q)
}

/// Vector register filling a 64-bit (`q == false`) or 128-bit vector.
#[inline]
pub(crate) fn vector(n: u32, element: ElementSize, q: bool) -> Operand {
    Operand::vector(n, Arrangement::full(element, q))
}

/// Vector register with an explicit lane count (`v0.1q`, `v0.4b` of a dot product).
#[inline]
pub(crate) fn vector_lanes(n: u32, element: ElementSize, lanes: u8) -> Operand {
    Operand::vector(n, Arrangement::new(element, lanes))
}

#[inline]
pub(crate) fn lane(n: u32, element: ElementSize, index: u32) -> Operand {
    Operand::lane(n, element, index)
}

/// Indexed group of lanes (`v2.4b[1]` of an indexed dot product).
pub(crate) fn lane_group(n: u32, element: ElementSize, lanes: u8, index: u32) -> Operand {
    Operand::Register(RegisterOperand {
        reg: Register::v(n),
        arrangement: Some(Arrangement::new(element, lanes)),
        lane: Some(index as u8),
        shift: None,
    })
}

/// `{vN.T, ...}` list, optionally with a lane index.
pub(crate) fn register_list(first: u32, count: u32, arrangement: Arrangement, lane: Option<u32>) -> Operand {
    Operand::MultiRegister(RegisterList {
        first: Register::v(first),
        count: count as u8,
        arrangement,
        lane: lane.map(|l| l as u8),
    })
}

#[inline]
pub(crate) fn imm(value: u64) -> Operand {
    Operand::imm32(value)
}

#[inline]
pub(crate) fn imm64(value: u64) -> Operand {
    Operand::imm64(value)
}

/// Signed 32-bit immediate.
pub(crate) fn simm32(value: i64) -> Operand {
    Operand::Imm32(Immediate { value: value as u64, signed: true, shift: None, decimal: false })
}

/// Immediate with a left-shift clause, omitted when `amount` is zero.
pub(crate) fn imm_lsl(value: u64, amount: u32) -> Operand {
    if amount == 0 {
        Operand::imm32(value)
    } else {
        Operand::imm32_shifted(value, Shift::lsl(amount))
    }
}

/// PC-relative target.
#[inline]
pub(crate) fn label(address: u64, offset: i64) -> Operand {
    Operand::Label(address.wrapping_add_signed(offset))
}

/// Memory operand on `Xn|SP`.
#[inline]
pub(crate) fn memory(base: u32, mode: AddressingMode) -> Operand {
    Operand::memory(Register::xsp(base), mode)
}

#[inline]
pub(crate) fn memory_base(base: u32) -> Operand {
    memory(base, AddressingMode::Base)
}

#[inline]
pub(crate) fn memory_offset(base: u32, offset: i64) -> Operand {
    memory(base, AddressingMode::Offset(offset))
}

/// Named system register, or the raw tuple when the encoding has no name.
pub(crate) fn implementation_specific(op0: u32, op1: u32, crn: u32, crm: u32, op2: u32) -> Operand {
    Operand::ImplementationSpecific(SysRegEncoding {
        op0: op0 as u8,
        op1: op1 as u8,
        crn: crn as u8,
        crm: crm as u8,
        op2: op2 as u8,
    })
}

/// Chooses between the lower-half and upper-half (`...2`) form of an operation.
#[inline]
pub(crate) fn pick(upper: bool, lower: Operation, upper_op: Operation) -> Operation {
    if upper {
        upper_op
    } else {
        lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_drops_operand() {
        let decoded = Decoded::new(Operation::Ands)
            .with(wreg(31))
            .with(wreg(1))
            .with(imm(0xff))
            .alias(Operation::Tst)
            .drop_operand(0);
        assert_eq!(decoded.operation, Operation::Tst);
        assert_eq!(decoded.operands.len(), 2);
        assert_eq!(decoded.operands.as_slice()[0], wreg(1));
    }

    #[test]
    fn test_register_sets() {
        assert_eq!(gpr(true, 31).register().map(Register::name), Some("xzr"));
        assert_eq!(gpr_sp(true, 31).register().map(Register::name), Some("sp"));
        assert_eq!(gpr_sp(false, 31).register().map(Register::name), Some("wsp"));
        assert_eq!(scalar(1, 7).register().map(Register::name), Some("h7"));
    }

    #[test]
    fn test_shift_clause_omitted_for_lsl_zero() {
        assert_eq!(shifted_gpr(true, 2, ShiftType::Lsl, 0), xreg(2));
        assert_ne!(shifted_gpr(true, 2, ShiftType::Lsr, 0), xreg(2));
    }

    #[test]
    fn test_label_wraps() {
        assert_eq!(label(0, -4), Operand::Label(0xffff_ffff_ffff_fffc));
        assert_eq!(label(0x1000, 8), Operand::Label(0x1008));
    }
}
