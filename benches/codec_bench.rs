//! Benchmarks for RESP encoding/decoding

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minisentinel::protocol::{encode_command, read_frame, Frame};

fn codec_benchmarks(c: &mut Criterion) {
    c.bench_function("encode_ping", |b| {
        b.iter(|| encode_command(black_box(&["PING"])))
    });

    let masters_wire = Frame::array(vec![Frame::from_strings([
        "name", "mymaster", "ip", "127.0.0.1", "port", "6379",
    ])])
    .to_bytes();

    c.bench_function("decode_masters_reply", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(&masters_wire[..]));
            read_frame(&mut cursor).unwrap()
        })
    });

    let bulk_wire = Frame::bulk(vec![0x42u8; 4096]).to_bytes();
    c.bench_function("decode_bulk_4k", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(&bulk_wire[..]));
            read_frame(&mut cursor).unwrap()
        })
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
