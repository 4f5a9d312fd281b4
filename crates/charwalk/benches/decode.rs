use charwalk::{Decoder, DecoderOptions, Encoding};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn gauntlet(label: &str, bytes: &[u8]) -> usize {
    let mut decoder = Encoding::for_label(label)
        .unwrap()
        .decoder(bytes, DecoderOptions::default());
    let mut chars = 0;
    while decoder.next_code().unwrap().is_some() {
        chars += 1;
    }
    chars
}

fn bench_decode(c: &mut Criterion) {
    let ascii: Vec<u8> = b"The quick brown fox jumps over the lazy dog. ".repeat(200);
    let utf8: Vec<u8> = "古池や蛙飛び込む水の音 — every frog in its pond. "
        .repeat(120)
        .into_bytes();
    let shift_jis: Vec<u8> = b"\x82\xA0\x82\xA2\x82\xA4\x41\x42\x43\xB1\xB2\xB3".repeat(400);

    let mut group = c.benchmark_group("decode");
    for (name, label, data) in [
        ("windows-1252/ascii", "windows-1252", &ascii),
        ("utf-8/mixed", "utf-8", &utf8),
        ("shift_jis/mixed", "shift_jis", &shift_jis),
    ] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| gauntlet(black_box(label), black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
