//! Benchmarks for disassembly performance.

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use armscope_core::render;
use armscope_disasm::{decode, A64Disassembler, Disassembler, Disassembly};

/// Sample function: prologue, a loop over a byte buffer and the epilogue.
const FUNCTION: &[u32] = &[
    0xa9bd7bfd, // stp x29, x30, [sp, #-0x30]!
    0x910003fd, // mov x29, sp
    0xa90153f3, // stp x19, x20, [sp, #0x10]
    0xaa0003f3, // mov x19, x0
    0x2a0103f4, // mov w20, w1
    0x38746a69, // ldrb w9, [x19, x20]
    0x7100fe9f, // cmp w20, #0x3f
    0x1a9fb120, // csel w0, w9, wzr, lt
    0xb4000208, // cbz x8, #0x40
    0x9b020c20, // madd x0, x1, x2, x3
    0x4ea28420, // add v0.4s, v1.4s, v2.4s
    0x1e622820, // fadd d0, d1, d2
    0x4cdfa000, // ld1 {v0.16b, v1.16b}, [x0], #0x20
    0xa94153f3, // ldp x19, x20, [sp, #0x10]
    0xa8c37bfd, // ldp x29, x30, [sp], #0x30
    0xd65f03c0, // ret
];

fn function_bytes() -> Vec<u8> {
    FUNCTION.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Larger code block for throughput testing (repeated pattern).
fn generate_large_block(size: usize) -> Vec<u8> {
    function_bytes().into_iter().cycle().take(size).collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("arm64_decode");

    group.bench_function("single_word", |b| {
        b.iter(|| decode(black_box(0x4ea28420), 0x1000));
    });

    group.bench_function("decode_and_render", |b| {
        b.iter(|| decode(black_box(0x4cdfa000), 0x1000).map(|insn| render(&insn, false)));
    });

    let disasm = A64Disassembler::new();
    let code = function_bytes();
    group.bench_function("small_function", |b| {
        b.iter(|| disasm.disassemble_block(black_box(&code), 0x1000));
    });

    for size in [1024, 4096, 16384, 65536] {
        let code = generate_large_block(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("throughput", size), &code, |b, code| {
            b.iter(|| disasm.disassemble_block(black_box(code), 0x1000));
        });
    }

    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("arm64_stream");

    for size in [4096, 65536] {
        let code = generate_large_block(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("render", size), &code, |b, code| {
            b.iter(|| Disassembly::new(Cursor::new(black_box(code)), 0x1000).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_stream);
criterion_main!(benches);
