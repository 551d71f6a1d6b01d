//! Scan throughput benchmarks
//!
//! Measures bases per second for each period over:
//! - random sequence (few repeats, mostly mismatch handling)
//! - repeat-rich sequence (long runs, mostly the comparison path)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use repeatscan::repeats::Repeat;
use repeatscan::{scan_fasta, ScanConfig};

const SEQ_LEN: usize = 1_000_000;

/// Random FASTA record with 60-column lines
fn random_fasta(len: usize) -> Vec<u8> {
    let bases = b"ACGT";
    let mut rng = rand::thread_rng();
    to_fasta((0..len).map(|_| bases[rng.gen_range(0..4)]).collect())
}

/// FASTA record made of short tandem repeats separated by random bases
fn repeat_rich_fasta(len: usize) -> Vec<u8> {
    let units: [&[u8]; 4] = [b"A", b"CA", b"CAG", b"AATG"];
    let mut rng = rand::thread_rng();
    let mut seq = Vec::with_capacity(len);
    while seq.len() < len {
        let unit = units[rng.gen_range(0..units.len())];
        for _ in 0..rng.gen_range(2..20) {
            seq.extend_from_slice(unit);
        }
        seq.push(b"ACGTN"[rng.gen_range(0..5)]);
    }
    seq.truncate(len);
    to_fasta(seq)
}

fn to_fasta(seq: Vec<u8>) -> Vec<u8> {
    let mut fasta = b">chr1\n".to_vec();
    for line in seq.chunks(60) {
        fasta.extend_from_slice(line);
        fasta.push(b'\n');
    }
    fasta
}

fn bench_scan(c: &mut Criterion, name: &str, fasta: &[u8]) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Elements(SEQ_LEN as u64));
    group.sample_size(20);

    for period in 1u32..=4 {
        let config = ScanConfig::new(period, period * 3).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(period), &config, |b, config| {
            b.iter(|| {
                let mut records: Vec<Repeat> = Vec::new();
                let summary = scan_fasta(black_box(fasta), config, &mut records).unwrap();
                black_box(summary)
            })
        });
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let fasta = random_fasta(SEQ_LEN);
    bench_scan(c, "scan_random", &fasta);
}

fn bench_repeat_rich(c: &mut Criterion) {
    let fasta = repeat_rich_fasta(SEQ_LEN);
    bench_scan(c, "scan_repeat_rich", &fasta);
}

criterion_group!(benches, bench_random, bench_repeat_rich);
criterion_main!(benches);
