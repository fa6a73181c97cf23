#![no_main]

use armscope_core::{render, Operation};
use armscope_disasm::traits::Disassembler;
use armscope_disasm::{decode, A64Disassembler, DecodeError, Disassembly};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let disasm = A64Disassembler::new();

    for (i, chunk) in data.chunks_exact(4).take(256).enumerate() {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let address = 0x1000 + 4 * i as u64;
        match decode(word, address) {
            Ok(insn) => {
                assert_eq!(insn.address, address);
                let len = insn.operands.len();
                assert!(insn.operands.slots()[len..].iter().all(|op| op.is_none()));
                // Defined instructions always render
                if insn.operation != Operation::Undefined {
                    if let Err(e) = render(&insn, false) {
                        panic!("{word:#010x} decoded but failed to render: {e}");
                    }
                }
            }
            Err(DecodeError::Truncated { .. }) => unreachable!("full word"),
            Err(_) => {}
        }
    }

    let block = disasm.disassemble_block(data, 0x1000);
    assert_eq!(block.len(), (data.len() + 3) / 4);

    let streamed = Disassembly::new(data, 0x1000).count();
    assert_eq!(streamed, block.len());
});
