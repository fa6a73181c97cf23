//! Instruction operand types.

use crate::instruction::Condition;
use crate::{Register, SystemReg};

/// Shift or extend applied to a register or immediate operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftType {
    None,
    Lsl,
    Lsr,
    Asr,
    Ror,
    Uxtw,
    Sxtw,
    Sxtx,
    Uxtx,
    Sxtb,
    Sxth,
    Uxth,
    Uxtb,
    Msl,
}

/// Number of [`ShiftType`] symbols.
pub const SHIFT_TYPE_COUNT: usize = 14;

impl ShiftType {
    /// Every shift kind, in index order.
    pub const ALL: [ShiftType; SHIFT_TYPE_COUNT] = [
        Self::None,
        Self::Lsl,
        Self::Lsr,
        Self::Asr,
        Self::Ror,
        Self::Uxtw,
        Self::Sxtw,
        Self::Sxtx,
        Self::Uxtx,
        Self::Sxtb,
        Self::Sxth,
        Self::Uxth,
        Self::Uxtb,
        Self::Msl,
    ];

    /// Shift of a shifted-register operand (`shift` field).
    pub fn from_shift_bits(bits: u32) -> Self {
        match bits & 3 {
            0 => Self::Lsl,
            1 => Self::Lsr,
            2 => Self::Asr,
            _ => Self::Ror,
        }
    }

    /// Extend of an extended-register operand (`option` field).
    pub fn from_extend_bits(bits: u32) -> Self {
        match bits & 7 {
            0 => Self::Uxtb,
            1 => Self::Uxth,
            2 => Self::Uxtw,
            3 => Self::Uxtx,
            4 => Self::Sxtb,
            5 => Self::Sxth,
            6 => Self::Sxtw,
            _ => Self::Sxtx,
        }
    }

    /// Lowercase name; empty for [`ShiftType::None`].
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Lsl => "lsl",
            Self::Lsr => "lsr",
            Self::Asr => "asr",
            Self::Ror => "ror",
            Self::Uxtw => "uxtw",
            Self::Sxtw => "sxtw",
            Self::Sxtx => "sxtx",
            Self::Uxtx => "uxtx",
            Self::Sxtb => "sxtb",
            Self::Sxth => "sxth",
            Self::Uxth => "uxth",
            Self::Uxtb => "uxtb",
            Self::Msl => "msl",
        }
    }
}

/// A shift clause: kind plus an optional amount. `amount == None` renders the
/// bare kind (`uxtw`), as for an extend without a left shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shift {
    pub kind: ShiftType,
    pub amount: Option<u32>,
}

impl Shift {
    pub const fn new(kind: ShiftType, amount: u32) -> Self {
        Self { kind, amount: Some(amount) }
    }

    pub const fn bare(kind: ShiftType) -> Self {
        Self { kind, amount: None }
    }

    pub const fn lsl(amount: u32) -> Self {
        Self::new(ShiftType::Lsl, amount)
    }
}

/// SIMD element size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementSize {
    B,
    H,
    S,
    D,
    Q,
}

impl ElementSize {
    /// Element of `1 << log2_bytes` bytes.
    pub const fn from_log2(log2_bytes: u32) -> Option<Self> {
        match log2_bytes {
            0 => Some(Self::B),
            1 => Some(Self::H),
            2 => Some(Self::S),
            3 => Some(Self::D),
            4 => Some(Self::Q),
            _ => None,
        }
    }

    pub const fn log2_bytes(self) -> u32 {
        match self {
            Self::B => 0,
            Self::H => 1,
            Self::S => 2,
            Self::D => 3,
            Self::Q => 4,
        }
    }

    pub const fn bits(self) -> u32 {
        8 << self.log2_bytes()
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::B => "b",
            Self::H => "h",
            Self::S => "s",
            Self::D => "d",
            Self::Q => "q",
        }
    }
}

/// Vector arrangement: element size and lane count. A lane count of zero
/// names the element alone (`v1.s[2]`, `{v0.d, v1.d}[1]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    pub element: ElementSize,
    pub lanes: u8,
}

impl Arrangement {
    pub const fn new(element: ElementSize, lanes: u8) -> Self {
        Self { element, lanes }
    }

    /// Element-only arrangement, used with lane indices.
    pub const fn element(element: ElementSize) -> Self {
        Self { element, lanes: 0 }
    }

    /// Arrangement filling a 64-bit (`q == false`) or 128-bit vector.
    pub const fn full(element: ElementSize, q: bool) -> Self {
        let total = if q { 128 } else { 64 };
        let lanes = total / element.bits();
        Self { element, lanes: if lanes == 0 { 1 } else { lanes as u8 } }
    }

    /// Total width in bits; zero for element-only arrangements.
    pub const fn bits(self) -> u32 {
        self.element.bits() * self.lanes as u32
    }
}

/// Immediate operand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Immediate {
    /// Raw value. For signed immediates this holds the two's complement bits.
    pub value: u64,
    /// Render as a signed value.
    pub signed: bool,
    /// Optional shift clause (`lsl #12`, `msl #8`).
    pub shift: Option<Shift>,
    /// Always render in decimal, as for rotation angles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub decimal: bool,
}

/// Register operand with its optional vector arrangement, lane index and
/// shift or extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterOperand {
    pub reg: Register,
    pub arrangement: Option<Arrangement>,
    pub lane: Option<u8>,
    pub shift: Option<Shift>,
}

/// One to four consecutive vector registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterList {
    pub first: Register,
    pub count: u8,
    pub arrangement: Arrangement,
    pub lane: Option<u8>,
}

impl RegisterList {
    /// Registers in list order, wrapping from `v31` to `v0`.
    pub fn registers(&self) -> impl Iterator<Item = Register> + '_ {
        (0..u32::from(self.count)).map(move |i| self.first.successor(i))
    }
}

/// Post-index amount: an immediate or a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PostIndex {
    Immediate(i64),
    Register(Register),
}

/// Addressing mode of a memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    /// `[base]`
    Base,
    /// `[base, #imm]!`
    PreIndex(i64),
    /// `[base], #imm` or `[base], reg`
    PostIndex(PostIndex),
    /// `[base, #imm]`; the offset is omitted when zero.
    Offset(i64),
    /// `[base, index{, extend {#amount}}]`
    Extended { index: Register, shift: Option<Shift> },
}

/// Memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryOperand {
    pub base: Register,
    pub mode: AddressingMode,
}

/// Raw `(op0, op1, CRn, CRm, op2)` tuple of a system register with no name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SysRegEncoding {
    pub op0: u8,
    pub op1: u8,
    pub crn: u8,
    pub crm: u8,
    pub op2: u8,
}

/// An instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Unused slot.
    #[default]
    None,
    /// Immediate interpreted at 32 bits.
    Imm32(Immediate),
    /// Immediate interpreted at 64 bits.
    Imm64(Immediate),
    /// Floating-point immediate, as IEEE-754 single-precision bits.
    FloatImm(u32),
    Register(RegisterOperand),
    MultiRegister(RegisterList),
    SystemRegister(SystemReg),
    Memory(MemoryOperand),
    /// PC-relative target address.
    Label(u64),
    Condition(Condition),
    ImplementationSpecific(SysRegEncoding),
}

/// Discriminator of [`Operand`], with the memory addressing modes split out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandClass {
    None,
    Imm32,
    Imm64,
    FloatImm,
    Register,
    MultiRegister,
    SystemRegister,
    MemoryBase,
    MemoryPreIndex,
    MemoryPostIndex,
    MemoryOffset,
    MemoryExtended,
    Label,
    Condition,
    ImplementationSpecific,
}

impl Operand {
    /// Plain register.
    pub const fn reg(reg: Register) -> Self {
        Self::Register(RegisterOperand { reg, arrangement: None, lane: None, shift: None })
    }

    /// Register followed by a shift or extend clause.
    pub const fn shifted(reg: Register, shift: Shift) -> Self {
        Self::Register(RegisterOperand { reg, arrangement: None, lane: None, shift: Some(shift) })
    }

    /// Vector register with an arrangement (`v0.4s`).
    pub const fn vector(n: u32, arrangement: Arrangement) -> Self {
        Self::Register(RegisterOperand {
            reg: Register::v(n),
            arrangement: Some(arrangement),
            lane: None,
            shift: None,
        })
    }

    /// Vector lane (`v1.s[2]`).
    pub const fn lane(n: u32, element: ElementSize, index: u32) -> Self {
        Self::Register(RegisterOperand {
            reg: Register::v(n),
            arrangement: Some(Arrangement::element(element)),
            lane: Some(index as u8),
            shift: None,
        })
    }

    /// Unsigned 32-bit immediate.
    pub const fn imm32(value: u64) -> Self {
        Self::Imm32(Immediate { value, signed: false, shift: None, decimal: false })
    }

    /// 32-bit immediate with a shift clause.
    pub const fn imm32_shifted(value: u64, shift: Shift) -> Self {
        Self::Imm32(Immediate { value, signed: false, shift: Some(shift), decimal: false })
    }

    /// Unsigned 64-bit immediate.
    pub const fn imm64(value: u64) -> Self {
        Self::Imm64(Immediate { value, signed: false, shift: None, decimal: false })
    }

    /// Unsigned 32-bit immediate printed in decimal regardless of options.
    pub const fn imm32_decimal(value: u64) -> Self {
        Self::Imm32(Immediate { value, signed: false, shift: None, decimal: true })
    }

    /// Signed 64-bit immediate.
    pub const fn simm(value: i64) -> Self {
        Self::Imm64(Immediate { value: value as u64, signed: true, shift: None, decimal: false })
    }

    /// Memory operand.
    pub const fn memory(base: Register, mode: AddressingMode) -> Self {
        Self::Memory(MemoryOperand { base, mode })
    }

    pub const fn class(&self) -> OperandClass {
        match self {
            Self::None => OperandClass::None,
            Self::Imm32(_) => OperandClass::Imm32,
            Self::Imm64(_) => OperandClass::Imm64,
            Self::FloatImm(_) => OperandClass::FloatImm,
            Self::Register(_) => OperandClass::Register,
            Self::MultiRegister(_) => OperandClass::MultiRegister,
            Self::SystemRegister(_) => OperandClass::SystemRegister,
            Self::Memory(mem) => match mem.mode {
                AddressingMode::Base => OperandClass::MemoryBase,
                AddressingMode::PreIndex(_) => OperandClass::MemoryPreIndex,
                AddressingMode::PostIndex(_) => OperandClass::MemoryPostIndex,
                AddressingMode::Offset(_) => OperandClass::MemoryOffset,
                AddressingMode::Extended { .. } => OperandClass::MemoryExtended,
            },
            Self::Label(_) => OperandClass::Label,
            Self::Condition(_) => OperandClass::Condition,
            Self::ImplementationSpecific(_) => OperandClass::ImplementationSpecific,
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The register of a register operand.
    pub const fn register(&self) -> Option<Register> {
        match self {
            Self::Register(op) => Some(op.reg),
            _ => None,
        }
    }

    /// The value of an immediate operand.
    pub const fn immediate(&self) -> Option<u64> {
        match self {
            Self::Imm32(imm) | Self::Imm64(imm) => Some(imm.value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_table() {
        assert_eq!(ShiftType::ALL.len(), SHIFT_TYPE_COUNT);
        assert_eq!(ShiftType::ALL[0].name(), "");
        assert_eq!(ShiftType::ALL[1].name(), "lsl");
        assert_eq!(ShiftType::ALL[13].name(), "msl");
        assert_eq!(ShiftType::from_shift_bits(2), ShiftType::Asr);
        assert_eq!(ShiftType::from_extend_bits(6), ShiftType::Sxtw);
    }

    #[test]
    fn test_full_arrangements() {
        assert_eq!(Arrangement::full(ElementSize::B, false).lanes, 8);
        assert_eq!(Arrangement::full(ElementSize::B, true).lanes, 16);
        assert_eq!(Arrangement::full(ElementSize::S, true).lanes, 4);
        assert_eq!(Arrangement::full(ElementSize::D, false).lanes, 1);
        assert_eq!(Arrangement::full(ElementSize::Q, true).lanes, 1);
        assert_eq!(Arrangement::full(ElementSize::H, true).bits(), 128);
    }

    #[test]
    fn test_operand_classes() {
        assert_eq!(Operand::default().class(), OperandClass::None);
        assert_eq!(Operand::imm32(1).class(), OperandClass::Imm32);
        assert_eq!(
            Operand::memory(Register::xsp(31), AddressingMode::Offset(0)).class(),
            OperandClass::MemoryOffset
        );
        assert_eq!(
            Operand::memory(Register::x(0), AddressingMode::PostIndex(PostIndex::Immediate(8))).class(),
            OperandClass::MemoryPostIndex
        );
        assert_eq!(Operand::reg(Register::x(3)).register(), Some(Register::x(3)));
        assert_eq!(Operand::Label(4).immediate(), None);
    }

    #[test]
    fn test_register_list_wraps() {
        let list = RegisterList {
            first: Register::v(30),
            count: 3,
            arrangement: Arrangement::full(ElementSize::S, true),
            lane: None,
        };
        let names: Vec<_> = list.registers().map(Register::name).collect();
        assert_eq!(names, ["v30", "v31", "v0"]);
    }
}
