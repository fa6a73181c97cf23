//! Rendering of common A64 instructions, checked against the output of
//! established disassemblers.

use armscope_core::{render, FormatOptions};
use armscope_disasm::traits::Disassembler;
use armscope_disasm::{decode, A64Disassembler, DecodeError, Disassembly};

/// A compiled function plus a spread of SIMD, FP and system instructions,
/// all at address 0.
const GOLDEN: &[(u32, &str)] = &[
    (0xa9bd7bfd, "stp\tx29, x30, [sp, #-0x30]!"),
    (0x910003fd, "mov\tx29, sp"),
    (0xa90153f3, "stp\tx19, x20, [sp, #0x10]"),
    (0xf90013f5, "str\tx21, [sp, #0x20]"),
    (0xaa0003f3, "mov\tx19, x0"),
    (0x2a0103f4, "mov\tw20, w1"),
    (0x90000008, "adrp\tx8, #0x0"),
    (0xf9400d08, "ldr\tx8, [x8, #0x18]"),
    (0x38746a69, "ldrb\tw9, [x19, x20]"),
    (0xb8b4da6a, "ldrsw\tx10, [x19, w20, sxtw #2]"),
    (0x7100fe9f, "cmp\tw20, #0x3f"),
    (0x1a9fb120, "csel\tw0, w9, wzr, lt"),
    (0x1a9f17e1, "cset\tw1, eq"),
    (0xb4000208, "cbz\tx8, #0x40"),
    (0x9b020c20, "madd\tx0, x1, x2, x3"),
    (0xd37df041, "lsl\tx1, x2, #0x3"),
    (0x53077c83, "lsr\tw3, w4, #0x7"),
    (0xd3485cc5, "ubfx\tx5, x6, #0x8, #0x10"),
    (0x93407d07, "sxtw\tx7, w8"),
    (0x92089d49, "and\tx9, x10, #0xff00ff00ff00ff00"),
    (0x320003eb, "orr\tw11, wzr, #0x1"),
    (0xd2a2468c, "mov\tx12, #0x12340000"),
    (0xf297ddec, "movk\tx12, #0xbeef"),
    (0x9280002d, "mov\tx13, #-0x2"),
    (0xcb0f03ee, "neg\tx14, x15"),
    (0x2a3103f0, "mvn\tw16, w17"),
    (0xf27d025f, "tst\tx18, #0x8"),
    (0x910043e0, "add\tx0, sp, #0x10"),
    (0xd10803ff, "sub\tsp, sp, #0x200"),
    (0xeb031041, "subs\tx1, x2, x3, lsl #4"),
    (0x1ac40862, "udiv\tw2, w3, w4"),
    (0xdac010c5, "clz\tx5, x6"),
    (0x5ac00907, "rev\tw7, w8"),
    (0xa94153f3, "ldp\tx19, x20, [sp, #0x10]"),
    (0xf94013f5, "ldr\tx21, [sp, #0x20]"),
    (0xa8c37bfd, "ldp\tx29, x30, [sp], #0x30"),
    (0xd65f03c0, "ret"),
    (0xd63f0120, "blr\tx9"),
    (0xd61f0200, "br\tx16"),
    (0xd4000001, "svc\t#0x0"),
    (0xd4207d00, "brk\t#0x3e8"),
    (0xd53bd040, "mrs\tx0, tpidr_el0"),
    (0xd51b4201, "msr\tnzcv, x1"),
    (0xd5033bbf, "dmb\tish"),
    (0xd5033f9f, "dsb\tsy"),
    (0xd5033fdf, "isb"),
    (0xd503233f, "paciasp"),
    (0xd50323bf, "autiasp"),
    (0x885f7c20, "ldxr\tw0, [x1]"),
    (0xc802fc83, "stlxr\tw2, x3, [x4]"),
    (0xc8dffcc5, "ldar\tx5, [x6]"),
    (0xb8270128, "ldadd\tw7, w8, [x9]"),
    (0xc8eafd8b, "casal\tx10, x11, [x12]"),
    (0x1e622820, "fadd\td0, d1, d2"),
    (0x1e250883, "fmul\ts3, s4, s5"),
    (0x1e780020, "fcvtzs\tw0, d1"),
    (0x9e620062, "scvtf\td2, x3"),
    (0x9e6700a4, "fmov\td4, x5"),
    (0x1e2e1006, "fmov\ts6, #1.00000000"),
    (0x1e6020e8, "fcmp\td7, #0.00000000"),
    (0x1e6acd28, "fcsel\td8, d9, d10, gt"),
    (0x1f020c20, "fmadd\ts0, s1, s2, s3"),
    (0x3dc00800, "ldr\tq0, [x0, #0x20]"),
    (0xfd0007e1, "str\td1, [sp, #0x8]"),
    (0x4cdfa000, "ld1\t{v0.16b, v1.16b}, [x0], #0x20"),
    (0x4c007822, "st1\t{v2.4s}, [x1]"),
    (0x4d40c443, "ld1r\t{v3.8h}, [x2]"),
    (0x4ea28420, "add\tv0.4s, v1.4s, v2.4s"),
    (0x4e659c83, "mul\tv3.8h, v4.8h, v5.8h"),
    (0x6e281ce6, "eor\tv6.16b, v7.16b, v8.16b"),
    (0x4eaa1d49, "mov\tv9.16b, v10.16b"),
    (0x6f00e40b, "movi\tv11.2d, #0x0"),
    (0x4e040dac, "dup\tv12.4s, w13"),
    (0x0e073dee, "umov\tw14, v15.b[3]"),
    (0x4e0c1e30, "mov\tv16.s[1], w17"),
    (0x4eb1ba72, "addv\ts18, v19.4s"),
    (0x6f7d06b4, "ushr\tv20.2d, v21.2d, #0x3"),
    (0x4f2556f6, "shl\tv22.4s, v23.4s, #0x5"),
    (0x0e212b38, "xtn\tv24.8b, v25.8h"),
    (0x4fbc137a, "fmla\tv26.4s, v27.4s, v28.s[1]"),
    (0x4e1f03dd, "tbl\tv29.16b, {v30.16b}, v31.16b"),
    (0x0e023820, "zip1\tv0.8b, v1.8b, v2.8b"),
    (0x6e054083, "ext\tv3.16b, v4.16b, v5.16b, #0x8"),
    (0x0e2058e6, "cnt\tv6.8b, v7.8b"),
    (0x6e303928, "uaddlv\th8, v9.16b"),
    (0x4ea1b96a, "fcvtzs\tv10.4s, v11.4s"),
    (0x4ea0c820, "fcmgt\tv0.4s, v1.4s, #0.00000000"),
    (0x4ea0f820, "fabs\tv0.4s, v1.4s"),
    (0x6ee0f820, "fneg\tv0.2d, v1.2d"),
    (0x6ea1f820, "fsqrt\tv0.4s, v1.4s"),
    (0x4e21e820, "frint32z\tv0.4s, v1.4s"),
    (0x6e82f420, "fcadd\tv0.4s, v1.4s, v2.4s, #270"),
    (0x6f823020, "fcmla\tv0.4s, v1.4s, v2.s[0], #90"),
    (0x4e2849ac, "aese\tv12.16b, v13.16b"),
    (0x5e1041ee, "sha256h\tq14, q15, v16.4s"),
    (0x9ac25c20, "crc32cx\tw0, w1, x2"),
];

#[test]
fn golden_vectors() {
    let mut failures = Vec::new();
    for &(word, expected) in GOLDEN {
        let text = decode(word, 0).map_err(|e| e.to_string()).and_then(|insn| render(&insn, false).map_err(|e| e.to_string()));
        if text.as_deref() != Ok(expected) {
            failures.push(format!("{word:#010x}: expected {expected:?}, got {text:?}"));
        }
    }
    assert!(failures.is_empty(), "{} mismatches:\n{}", failures.len(), failures.join("\n"));
}

/// Encodings that other disassemblers reject, each next to an allocated
/// neighbour in `GOLDEN`.
const RESERVED: &[u32] = &[
    0x4e20c820, // fcmgt #0.0 with size<1> clear
    0x6e20c820, // fcmge #0.0
    0x4e20e820, // fcmlt #0.0
    0x4e20f820, // fabs
    0x6e20f820, // fneg
    0x6e20d820, // fcmle #0.0
    0x4e78f820, // fabs, half precision
    0x5e20c820, // scalar fcmgt #0.0
    0x0ee0f820, // fabs of a 1d vector
    0x91800000, // add immediate, shift 0b10
];

#[test]
fn reserved_vectors() {
    for &word in RESERVED {
        let result = decode(word, 0);
        assert!(matches!(result, Err(DecodeError::Reserved { .. })), "{word:#010x}: {result:?}");
    }
}

#[test]
fn golden_block_matches_single_decode() {
    let bytes: Vec<u8> = GOLDEN.iter().flat_map(|(word, _)| word.to_le_bytes()).collect();
    let block = A64Disassembler::new().disassemble_block(&bytes, 0);
    assert_eq!(block.len(), GOLDEN.len());
    for (i, (result, &(word, _))) in block.iter().zip(GOLDEN).enumerate() {
        let insn = result.as_ref().expect("golden words decode");
        assert_eq!(insn.word, word);
        assert_eq!(insn.address, 4 * i as u64);
    }
}

#[test]
fn stream_renders_branch_targets_from_base() {
    // cbz x8, +0x40 ; b -0x8
    let bytes: Vec<u8> = [0xb4000208u32, 0x17fffffe].iter().flat_map(|w| w.to_le_bytes()).collect();
    let texts: Vec<String> = Disassembly::new(bytes.as_slice(), 0x40_0000).flatten().map(|line| line.text).collect();
    assert_eq!(texts, ["cbz\tx8, #0x400040", "b\t#0x3ffffc"]);
}

#[test]
fn decimal_immediates() {
    let insn = decode(0xd10803ff, 0).expect("sub sp, sp, #0x200");
    assert_eq!(insn.format(&FormatOptions::decimal()).as_deref(), Ok("sub\tsp, sp, #512"));
    let insn = decode(0x9280002d, 0).expect("mov x13, #-2");
    assert_eq!(insn.format(&FormatOptions::decimal()).as_deref(), Ok("mov\tx13, #-2"));
}
