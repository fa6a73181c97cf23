//! Decoded instruction representation.

use crate::{Operand, Operation};

/// Maximum number of operands of any A64 instruction.
pub const MAX_OPERANDS: usize = 5;

/// Top-level classification by bits 25-28 of the instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    Unallocated,
    DataProcessingImmediate,
    BranchExceptionSystem,
    LoadStore,
    DataProcessingRegister,
    DataProcessingSimdFp,
}

impl Group {
    /// Group selected by `op0` (bits 25-28). `None` has no group.
    pub const fn from_op0(op0: u32) -> Option<Self> {
        match op0 & 0xF {
            0b0000..=0b0011 => Some(Self::Unallocated),
            0b1000 | 0b1001 => Some(Self::DataProcessingImmediate),
            0b1010 | 0b1011 => Some(Self::BranchExceptionSystem),
            0b0100 | 0b0110 | 0b1100 | 0b1110 => Some(Self::LoadStore),
            0b0101 | 0b1101 => Some(Self::DataProcessingRegister),
            0b0111 | 0b1111 => Some(Self::DataProcessingSimdFp),
            _ => None,
        }
    }

    /// Group of a raw instruction word.
    pub const fn classify(word: u32) -> Option<Self> {
        Self::from_op0(word >> 25)
    }
}

/// A64 condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    Eq,
    Ne,
    Cs,
    Cc,
    Mi,
    Pl,
    Vs,
    Vc,
    Hi,
    Ls,
    Ge,
    Lt,
    Gt,
    Le,
    Al,
    Nv,
}

impl Condition {
    /// Every condition, in encoding order.
    pub const ALL: [Condition; 16] = [
        Self::Eq,
        Self::Ne,
        Self::Cs,
        Self::Cc,
        Self::Mi,
        Self::Pl,
        Self::Vs,
        Self::Vc,
        Self::Hi,
        Self::Ls,
        Self::Ge,
        Self::Lt,
        Self::Gt,
        Self::Le,
        Self::Al,
        Self::Nv,
    ];

    /// Condition from a 4-bit `cond` field.
    pub const fn from_bits(bits: u32) -> Self {
        Self::ALL[(bits & 0xF) as usize]
    }

    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Returns the inverse condition. `al` and `nv` invert to each other,
    /// matching the low-bit flip of the encoding.
    pub const fn invert(self) -> Self {
        Self::from_bits(self.bits() ^ 1)
    }

    /// True for `al` and `nv`, which the conditional aliases never use.
    pub const fn is_always(self) -> bool {
        matches!(self, Self::Al | Self::Nv)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Cs => "hs",
            Self::Cc => "lo",
            Self::Mi => "mi",
            Self::Pl => "pl",
            Self::Vs => "vs",
            Self::Vc => "vc",
            Self::Hi => "hi",
            Self::Ls => "ls",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Gt => "gt",
            Self::Le => "le",
            Self::Al => "al",
            Self::Nv => "nv",
        }
    }
}

/// Fixed-capacity operand list. Populated slots always form a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operands {
    slots: [Operand; MAX_OPERANDS],
    len: u8,
}

impl Operands {
    pub const fn new() -> Self {
        Self { slots: [Operand::None; MAX_OPERANDS], len: 0 }
    }

    /// Appends an operand. Pushing [`Operand::None`] or pushing onto a full
    /// list is a no-op.
    pub fn push(&mut self, operand: Operand) {
        if operand.is_none() {
            return;
        }
        debug_assert!((self.len as usize) < MAX_OPERANDS, "operand list overflow");
        if self.len as usize >= MAX_OPERANDS {
            return;
        }
        self.slots[self.len as usize] = operand;
        self.len += 1;
    }

    /// Removes operand `index`, shifting later operands down and clearing the
    /// vacated tail slot.
    pub fn remove(&mut self, index: usize) -> Option<Operand> {
        let len = self.len as usize;
        if index >= len {
            return None;
        }
        let removed = self.slots[index];
        self.slots.copy_within(index + 1..MAX_OPERANDS, index);
        self.slots[MAX_OPERANDS - 1] = Operand::None;
        self.len -= 1;
        Some(removed)
    }

    /// Replaces a populated operand.
    pub fn set(&mut self, index: usize, operand: Operand) {
        if index < self.len as usize && !operand.is_none() {
            self.slots[index] = operand;
        }
    }

    pub fn get(&self, index: usize) -> Option<&Operand> {
        self.as_slice().get(index)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Populated operands.
    pub fn as_slice(&self) -> &[Operand] {
        &self.slots[..self.len as usize]
    }

    /// All five slots, including the unused tail.
    pub fn slots(&self) -> &[Operand; MAX_OPERANDS] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operand> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a Operands {
    type Item = &'a Operand;
    type IntoIter = std::slice::Iter<'a, Operand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Operand> for Operands {
    fn from_iter<I: IntoIterator<Item = Operand>>(iter: I) -> Self {
        let mut operands = Self::new();
        for operand in iter {
            operands.push(operand);
        }
        operands
    }
}

/// A decoded A64 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Raw instruction word.
    pub word: u32,
    /// Address the word was decoded at.
    pub address: u64,
    pub group: Group,
    pub operation: Operation,
    pub operands: Operands,
}

impl Instruction {
    /// Size of every A64 instruction in bytes.
    pub const SIZE: usize = 4;

    /// An instruction with no operation yet.
    pub const fn undefined(word: u32, address: u64, group: Group) -> Self {
        Self { word, address, group, operation: Operation::Undefined, operands: Operands::new() }
    }

    pub fn mnemonic(&self) -> &'static str {
        self.operation.name()
    }

    pub fn is_undefined(&self) -> bool {
        self.operation == Operation::Undefined
    }

    /// Little-endian encoding of the word.
    pub fn bytes(&self) -> [u8; 4] {
        self.word.to_le_bytes()
    }

    /// Address of the following instruction.
    pub fn end_address(&self) -> u64 {
        self.address.wrapping_add(Self::SIZE as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Register;

    fn three() -> Operands {
        [
            Operand::reg(Register::x(0)),
            Operand::reg(Register::x(1)),
            Operand::imm32(5),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_group_classification() {
        for op0 in 0..4 {
            assert_eq!(Group::from_op0(op0), Some(Group::Unallocated));
        }
        assert_eq!(Group::from_op0(0b1001), Some(Group::DataProcessingImmediate));
        assert_eq!(Group::from_op0(0b1011), Some(Group::BranchExceptionSystem));
        assert_eq!(Group::from_op0(0b0110), Some(Group::LoadStore));
        assert_eq!(Group::from_op0(0b1101), Some(Group::DataProcessingRegister));
        assert_eq!(Group::from_op0(0b0111), Some(Group::DataProcessingSimdFp));
        assert_eq!(Group::classify(0xd503201f), Some(Group::BranchExceptionSystem));
    }

    #[test]
    fn test_condition_table() {
        for (bits, cond) in Condition::ALL.iter().enumerate() {
            assert_eq!(cond.bits(), bits as u32);
            assert_eq!(Condition::from_bits(bits as u32), *cond);
        }
        assert_eq!(Condition::Eq.invert(), Condition::Ne);
        assert_eq!(Condition::Hi.invert(), Condition::Ls);
        assert_eq!(Condition::Ge.invert().name(), "lt");
        assert_eq!(Condition::Nv.name(), "nv");
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut ops = three();
        assert_eq!(ops.remove(0), Some(Operand::reg(Register::x(0))));
        assert_eq!(ops.len(), 2);
        assert_eq!(ops.as_slice()[0], Operand::reg(Register::x(1)));
        assert_eq!(ops.as_slice()[1], Operand::imm32(5));
        assert!(ops.slots()[2..].iter().all(Operand::is_none));
    }

    #[test]
    fn test_remove_last_and_out_of_range() {
        let mut ops = three();
        assert_eq!(ops.remove(3), None);
        assert_eq!(ops.remove(2), Some(Operand::imm32(5)));
        assert_eq!(ops.len(), 2);
        assert!(ops.slots()[2].is_none());
    }

    #[test]
    fn test_push_ignores_none() {
        let mut ops = Operands::new();
        ops.push(Operand::None);
        assert!(ops.is_empty());
        ops.push(Operand::Label(0x10));
        assert_eq!(ops.get(0), Some(&Operand::Label(0x10)));
        assert_eq!(ops.get(1), None);
    }

    #[test]
    fn test_undefined_instruction() {
        let insn = Instruction::undefined(0x0000_0000, 0x1000, Group::Unallocated);
        assert!(insn.is_undefined());
        assert_eq!(insn.end_address(), 0x1004);
        assert_eq!(insn.bytes(), [0, 0, 0, 0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let mut insn = Instruction::undefined(0x8b02_0020, 0x40, Group::DataProcessingRegister);
        insn.operation = Operation::Add;
        insn.operands = three();
        let json = serde_json::to_string(&insn).expect("serialize");
        let back: Instruction = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, insn);
    }
}
