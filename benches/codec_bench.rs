#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use multipart_codec::{decode, encode, BorrowedPart, OwnedPart};

fn benchmark_decode(c: &mut Criterion) {
    let body = build_body(64 * 1024);

    c.bench_function("decode_borrowed_64kb_leaf", |b| {
        b.iter(|| {
            let tree: BorrowedPart<'_> = decode(&body).expect("message should decode");
            assert_eq!(tree.content().len(), 64 * 1024);
        });
    });

    c.bench_function("decode_owned_64kb_leaf", |b| {
        b.iter(|| {
            let tree: OwnedPart = decode(&body).expect("message should decode");
            assert_eq!(tree.content().len(), 64 * 1024);
        });
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let body = build_body(64 * 1024);
    let tree: OwnedPart = decode(&body).expect("message should decode");

    c.bench_function("encode_64kb_leaf", |b| {
        b.iter(|| {
            let encoded = encode(&tree);
            assert_eq!(encoded.len(), body.len());
        });
    });
}

fn build_body(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + 256);
    out.extend_from_slice(
        b"--BOUND\r\nContent-Disposition: attachment; filename=\"bench.bin\"\r\n\r\n",
    );
    out.extend(std::iter::repeat(b'x').take(size));
    out.extend_from_slice(b"\r\n--BOUND--\r\n");
    out
}

criterion_group!(benches, benchmark_decode, benchmark_encode);
criterion_main!(benches);
