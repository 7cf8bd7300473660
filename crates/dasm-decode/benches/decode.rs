//! Decoder throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use dasm_decode::Decoder;

/// A realistic mix: prologue, memory traffic, arithmetic, a compare and branch,
/// an SSE op and an AVX op.
const CODE64: &[u8] = &[
    0x55, // push rbp
    0x48, 0x89, 0xe5, // mov rbp, rsp
    0x48, 0x83, 0xec, 0x20, // sub rsp, 0x20
    0x48, 0x89, 0x7d, 0xf8, // mov [rbp-8], rdi
    0x48, 0x8b, 0x45, 0xf8, // mov rax, [rbp-8]
    0x48, 0x83, 0xc0, 0x01, // add rax, 1
    0x0f, 0x58, 0xc1, // addps xmm0, xmm1
    0xc5, 0xf0, 0x58, 0xc2, // vaddps xmm0, xmm1, xmm2
    0x48, 0x83, 0x7d, 0xf0, 0x0a, // cmp qword [rbp-16], 10
    0x7e, 0x07, // jle +7
    0xb8, 0x01, 0x00, 0x00, 0x00, // mov eax, 1
    0xeb, 0x05, // jmp +5
    0xb8, 0x00, 0x00, 0x00, 0x00, // mov eax, 0
    0x48, 0x83, 0xc4, 0x20, // add rsp, 0x20
    0x5d, // pop rbp
    0xc3, // ret
];

fn repeat_to(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size);
    while out.len() < size {
        let take = (size - out.len()).min(CODE64.len());
        out.extend_from_slice(&CODE64[..take]);
    }
    out
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("single_instruction", |b| {
        b.iter(|| Decoder::new(64, black_box(&CODE64[1..4])).decode())
    });

    group.bench_function("small_function", |b| {
        b.iter(|| {
            let decoder = Decoder::new(64, black_box(CODE64)).with_ip(0x1000);
            decoder.count()
        })
    });

    for size in [1024usize, 16384, 65536] {
        let code = repeat_to(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("block_{size}"), |b| {
            b.iter(|| {
                let decoder = Decoder::new(64, black_box(&code)).with_ip(0x1000);
                decoder.count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
