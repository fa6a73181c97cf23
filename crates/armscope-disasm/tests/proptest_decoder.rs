//! Property-based tests for the A64 decoder.
//!
//! These tests verify invariants that hold for every 32-bit word:
//! - Decoding is deterministic
//! - Populated operand slots form a prefix
//! - The group depends only on bits 25-28
//! - A successful decode of a defined operation always renders

use proptest::prelude::*;

use armscope_core::{render, Group, Operand, Operands, Operation, MAX_OPERANDS};
use armscope_disasm::traits::Disassembler;
use armscope_disasm::{decode, A64Disassembler, DecodeError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20000))]

    /// Same word and address, same result.
    #[test]
    fn decode_is_deterministic(word in any::<u32>(), address in any::<u64>()) {
        prop_assert_eq!(decode(word, address), decode(word, address));
    }

    /// Slots past the operand count are always empty.
    #[test]
    fn operand_slots_form_prefix(word in any::<u32>()) {
        if let Ok(insn) = decode(word, 0x1000) {
            let slots = insn.operands.slots();
            let len = insn.operands.len();
            prop_assert!(slots[..len].iter().all(|op| !op.is_none()), "hole in {:?}", slots);
            prop_assert!(slots[len..].iter().all(|op| op.is_none()), "tail in {:?}", slots);
        }
    }

    /// Flipping bits outside 25-28 never changes the group.
    #[test]
    fn group_depends_on_op0_only(word in any::<u32>(), noise in any::<u32>()) {
        let other = (word & 0x1e00_0000) | (noise & !0x1e00_0000);
        prop_assert_eq!(Group::classify(word), Group::classify(other));
        if let (Ok(a), Ok(b)) = (decode(word, 0), decode(other, 0)) {
            prop_assert_eq!(a.group, b.group);
        }
    }

    /// Every defined instruction renders.
    #[test]
    fn decoded_instruction_renders(word in any::<u32>(), address in any::<u64>()) {
        if let Ok(insn) = decode(word, address) {
            if insn.operation != Operation::Undefined {
                prop_assert!(render(&insn, false).is_ok(), "{:#010x} failed: {:?}", word, render(&insn, false));
                prop_assert!(render(&insn, true).is_ok());
            }
        }
    }

    /// Bits 25-28 in 0..=3 decode to an undefined instruction that refuses
    /// to render.
    #[test]
    fn unallocated_words_are_undefined(low in any::<u32>(), op0 in 0u32..4) {
        let word = (low & !0x1e00_0000) | (op0 << 25);
        let insn = decode(word, 0).expect("unallocated words decode");
        prop_assert_eq!(insn.group, Group::Unallocated);
        prop_assert_eq!(insn.operation, Operation::Undefined);
        prop_assert!(render(&insn, false).is_err());
    }

    /// Errors always carry the failing word and address.
    #[test]
    fn errors_carry_location(word in any::<u32>(), address in any::<u64>()) {
        if let Err(err) = decode(word, address) {
            prop_assert_eq!(err.word(), Some(word));
            prop_assert_eq!(err.address(), address);
        }
    }

    /// Removing operand `k` shifts the tail left and clears the last slot.
    #[test]
    fn remove_shifts_left(values in prop::collection::vec(any::<i32>(), 1..=MAX_OPERANDS), k in 0usize..MAX_OPERANDS) {
        let mut operands: Operands = values.iter().map(|v| Operand::simm(i64::from(*v))).collect();
        let before = *operands.slots();
        let len = operands.len();
        let removed = operands.remove(k);
        if k < len {
            prop_assert_eq!(removed, Some(before[k]));
            prop_assert_eq!(operands.len(), len - 1);
            prop_assert_eq!(&operands.slots()[k..MAX_OPERANDS - 1], &before[k + 1..]);
            prop_assert!(operands.slots()[MAX_OPERANDS - 1].is_none());
        } else {
            prop_assert_eq!(removed, None);
            prop_assert_eq!(operands.slots(), &before);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Block decoding consumes four bytes per word and stops at a short tail.
    #[test]
    fn block_covers_input(bytes in prop::collection::vec(any::<u8>(), 0..64), base in 0u64..0x1_0000) {
        let block = A64Disassembler::new().disassemble_block(&bytes, base * 4);
        let words = bytes.len() / 4;
        let tail = bytes.len() % 4;
        prop_assert_eq!(block.len(), words + usize::from(tail != 0));
        for (i, result) in block.iter().enumerate().take(words) {
            let expected = base * 4 + 4 * i as u64;
            match result {
                Ok(insn) => prop_assert_eq!(insn.address, expected),
                Err(err) => prop_assert_eq!(err.address(), expected),
            }
        }
        if tail != 0 {
            let truncated = matches!(block.last(), Some(Err(DecodeError::Truncated { available, .. })) if *available == tail);
            prop_assert!(truncated);
        }
    }
}
