//! A64 group dispatch and the slice-based disassembler.

use armscope_core::{Group, Instruction};

use super::decoded::{Decoded, Reserved};
use super::{branch, data_imm, data_reg, load_store, simd};
use crate::{DecodeError, DecodedInstruction, Disassembler};

/// Decodes one A64 instruction word.
///
/// `address` only affects PC-relative operands; pass 0 when unknown. Words in
/// the unallocated group decode successfully to an instruction whose
/// operation is undefined.
pub fn decode(word: u32, address: u64) -> Result<Instruction, DecodeError> {
    let Some(group) = Group::classify(word) else {
        return Err(DecodeError::Undecodable { word, address });
    };
    let leaf = match group {
        Group::Unallocated => return Ok(Instruction::undefined(word, address, group)),
        Group::DataProcessingImmediate => data_imm::decode(word, address),
        Group::BranchExceptionSystem => branch::decode(word, address),
        Group::LoadStore => load_store::decode(word, address),
        Group::DataProcessingRegister => data_reg::decode(word),
        Group::DataProcessingSimdFp => simd::decode(word),
    };
    match leaf {
        Ok(Decoded { operation, operands }) => Ok(Instruction { word, address, group, operation, operands }),
        Err(Reserved(reason)) => Err(DecodeError::reserved(word, address, reason)),
    }
}

/// A64 disassembler over little-endian byte slices.
#[derive(Debug, Clone, Copy, Default)]
pub struct A64Disassembler;

impl A64Disassembler {
    /// Creates a new A64 disassembler.
    pub fn new() -> Self {
        Self
    }
}

impl Disassembler for A64Disassembler {
    fn decode_instruction(&self, bytes: &[u8], address: u64) -> Result<DecodedInstruction, DecodeError> {
        let word = bytes
            .get(..Instruction::SIZE)
            .and_then(|chunk| <[u8; 4]>::try_from(chunk).ok())
            .map(u32::from_le_bytes)
            .ok_or_else(|| DecodeError::truncated(address, Instruction::SIZE, bytes.len()))?;
        let instruction = decode(word, address)?;
        Ok(DecodedInstruction { instruction, size: Instruction::SIZE })
    }

    fn min_instruction_size(&self) -> usize {
        Instruction::SIZE
    }

    fn max_instruction_size(&self) -> usize {
        Instruction::SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armscope_core::{render, Operand, Operation};

    #[test]
    fn test_group_routing() {
        assert_eq!(decode(0xd503201f, 0).map(|i| i.group), Ok(Group::BranchExceptionSystem));
        assert_eq!(decode(0x91000420, 0).map(|i| i.group), Ok(Group::DataProcessingImmediate));
        assert_eq!(decode(0xf9400020, 0).map(|i| i.group), Ok(Group::LoadStore));
        assert_eq!(decode(0x8b020020, 0).map(|i| i.group), Ok(Group::DataProcessingRegister));
        assert_eq!(decode(0x1e222820, 0).map(|i| i.group), Ok(Group::DataProcessingSimdFp));
    }

    #[test]
    fn test_unallocated_is_undefined() {
        for word in [0x0000_0000, 0x0200_0000, 0x0400_0000, 0x0600_0000] {
            let insn = decode(word, 0x100).expect("unallocated decodes");
            assert_eq!(insn.group, Group::Unallocated);
            assert_eq!(insn.operation, Operation::Undefined);
            assert!(insn.operands.is_empty());
            assert!(render(&insn, false).is_err());
        }
    }

    #[test]
    fn test_reserved_carries_word_and_address() {
        // add/sub immediate with shift 0b10
        let err = decode(0x91800000, 0x2000).unwrap_err();
        match err {
            DecodeError::Reserved { word, address, .. } => {
                assert_eq!(word, 0x91800000);
                assert_eq!(address, 0x2000);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_literal_round_trips() {
        let insn = decode(0x187fffe0, 0).expect("decode");
        assert_eq!(insn.operation, Operation::Ldr);
        assert_eq!(insn.operands.as_slice()[1], Operand::Label(0xffffc));

        let insn = decode(0x5880000a, 0).expect("decode");
        assert_eq!(insn.operands.as_slice()[1], Operand::Label(0xfffffffffff00000));
    }

    #[test]
    fn test_slice_decoding() {
        let dis = A64Disassembler::new();
        assert!(dis.is_fixed_width());
        let bytes = [0x1f, 0x20, 0x03, 0xd5, 0xc0, 0x03, 0x5f, 0xd6, 0xaa];
        let block = dis.disassemble_block(&bytes, 0x1000);
        assert_eq!(block.len(), 3);
        assert_eq!(block[0].as_ref().map(|i| i.operation), Ok(Operation::Nop));
        assert_eq!(block[1].as_ref().map(|i| (i.operation, i.address)), Ok((Operation::Ret, 0x1004)));
        assert_eq!(
            block[2].as_ref().unwrap_err(),
            &DecodeError::Truncated { address: 0x1008, needed: 4, available: 1 }
        );
    }

    #[test]
    fn test_slice_skips_failures() {
        let dis = A64Disassembler::new();
        let mut bytes = 0x91800000u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&0xd503201fu32.to_le_bytes());
        let block = dis.disassemble_block(&bytes, 0);
        assert_eq!(block.len(), 2);
        assert!(block[0].is_err());
        assert_eq!(block[1].as_ref().map(|i| i.address), Ok(4));
    }
}
