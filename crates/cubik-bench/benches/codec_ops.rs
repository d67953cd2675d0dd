//! Criterion micro-benchmarks for record encoding and state hashing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cubik_bench::scrambled_profile;
use cubik_core::{FaceLabel, Move};
use cubik_engine::MoveOrigin;
use cubik_replay::codec::{decode_frame, encode_frame};
use cubik_replay::{decode_record, encode_record, state_hash, LogFrame};

/// Benchmark: encode a scrambled 8x8 state record.
fn bench_encode_record(c: &mut Criterion) {
    let record = scrambled_profile(8, 100, 3).unwrap().export();

    c.bench_function("codec_encode_record_8x8", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(16 * 1024);
            encode_record(&mut buf, &record).unwrap();
            black_box(&buf);
        });
    });
}

/// Benchmark: decode a scrambled 8x8 state record.
fn bench_decode_record(c: &mut Criterion) {
    let record = scrambled_profile(8, 100, 3).unwrap().export();
    let mut buf = Vec::new();
    encode_record(&mut buf, &record).unwrap();

    c.bench_function("codec_decode_record_8x8", |b| {
        b.iter(|| {
            let decoded = decode_record(&mut buf.as_slice()).unwrap();
            black_box(&decoded);
        });
    });
}

/// Benchmark: encode then decode one log frame.
fn bench_frame_roundtrip(c: &mut Criterion) {
    let frame = LogFrame {
        seq: 42,
        origin: MoveOrigin::New,
        mv: Move::new(FaceLabel::Front, 1, -1),
        state_hash: 0xDEAD_BEEF,
    };

    c.bench_function("codec_frame_roundtrip", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(32);
            encode_frame(&mut buf, &frame).unwrap();
            black_box(decode_frame(&mut buf.as_slice()).unwrap());
        });
    });
}

/// Benchmark: hash a scrambled state per size.
fn bench_state_hash(c: &mut Criterion) {
    for n in [3, 8] {
        let session = scrambled_profile(n, 50, 1).unwrap();
        c.bench_function(&format!("state_hash_{n}"), |b| {
            b.iter(|| {
                black_box(state_hash(session.state()));
            });
        });
    }
}

criterion_group!(
    benches,
    bench_encode_record,
    bench_decode_record,
    bench_frame_roundtrip,
    bench_state_hash
);
criterion_main!(benches);
