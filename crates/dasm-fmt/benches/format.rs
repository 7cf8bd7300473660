//! Formatter throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dasm_core::Instruction;
use dasm_decode::Decoder;
use dasm_fmt::{Formatter, GasFormatter, IntelFormatter, MasmFormatter, NasmFormatter};

const CODE64: &[u8] = &[
    0x55, // push rbp
    0x48, 0x89, 0xe5, // mov rbp, rsp
    0x48, 0x89, 0x7d, 0xf8, // mov [rbp-8], rdi
    0x48, 0x8b, 0x44, 0x8b, 0x10, // mov rax, [rbx+rcx*4+16]
    0x0f, 0x58, 0xc1, // addps xmm0, xmm1
    0xc5, 0xf0, 0x58, 0xc2, // vaddps xmm0, xmm1, xmm2
    0x62, 0xf1, 0x74, 0x49, 0x58, 0xc2, // vaddps zmm0{k1}, zmm1, zmm2
    0x75, 0x05, // jne +5
    0xb8, 0x01, 0x00, 0x00, 0x00, // mov eax, 1
    0xc3, // ret
];

fn decoded() -> Vec<Instruction> {
    Decoder::new(64, CODE64)
        .with_ip(0x1000)
        .filter_map(Result::ok)
        .collect()
}

fn bench_format(c: &mut Criterion) {
    let instrs = decoded();
    let mut group = c.benchmark_group("format");

    macro_rules! dialect {
        ($name:literal, $formatter:expr) => {
            group.bench_function($name, |b| {
                let mut formatter = $formatter;
                let mut text = String::new();
                b.iter(|| {
                    for instr in &instrs {
                        text.clear();
                        formatter.format(black_box(instr), &mut text);
                    }
                    text.len()
                })
            });
        };
    }

    dialect!("gas", GasFormatter::new());
    dialect!("intel", IntelFormatter::new());
    dialect!("masm", MasmFormatter::new());
    dialect!("nasm", NasmFormatter::new());

    group.bench_function("decode_and_format", |b| {
        let mut formatter = IntelFormatter::new();
        let mut text = String::new();
        b.iter(|| {
            for instr in Decoder::new(64, black_box(CODE64)).with_ip(0x1000).flatten() {
                text.clear();
                formatter.format(&instr, &mut text);
            }
            text.len()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
