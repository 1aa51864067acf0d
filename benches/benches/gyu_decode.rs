//! Benchmark suite for `GYU`/`RLD` decoding and the shared MT19937 core.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use retouch_benches::{draw_mt19937, generate_gyu_file, generate_rld_file, sizes};
use retouch_types::file::lzss;
use retouch_types::{GyuImage, RldFile};
use std::hint::black_box;

fn bench_mt19937_draws(c: &mut Criterion) {
	let mut group = c.benchmark_group("mt19937");
	group.throughput(Throughput::Elements(10_000));
	group.bench_function("next_u32_x10000", |b| {
		b.iter(|| black_box(draw_mt19937(0x2010_0806, 10_000)));
	});
	group.finish();
}

fn bench_lzss_round_trip(c: &mut Criterion) {
	let mut group = c.benchmark_group("lzss");

	for (name, (w, h)) in [("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM)] {
		let plane = retouch_benches::generate_rgb_plane(w, h);
		group.throughput(Throughput::Bytes(plane.len() as u64));

		group.bench_with_input(BenchmarkId::new("encode", name), &plane, |b, plane| {
			b.iter(|| black_box(lzss::encode(plane)));
		});

		let compressed = lzss::encode(&plane);
		group.bench_with_input(
			BenchmarkId::new("decode", name),
			&(compressed, plane.len()),
			|b, (compressed, len)| {
				b.iter(|| black_box(lzss::decode(compressed, *len)));
			},
		);
	}

	group.finish();
}

fn bench_gyu_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("gyu_decode");

	for (name, (w, h)) in [("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)] {
		let data = generate_gyu_file(w, h, Some(0xDEAD_BEEF));
		group.throughput(Throughput::Elements((w as u64) * (h as u64)));
		group.bench_with_input(BenchmarkId::new("decode", name), &data, |b, data| {
			b.iter(|| black_box(GyuImage::decode(data).unwrap()));
		});
	}

	group.finish();
}

fn bench_gyu_unshuffled_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("gyu_decode_unshuffled");
	let data = generate_gyu_file(sizes::MEDIUM.0, sizes::MEDIUM.1, Some(0));
	group.bench_function("decode", |b| {
		b.iter(|| black_box(GyuImage::decode(&data).unwrap()));
	});
	group.finish();
}

fn bench_rld_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("rld_decode");

	for count in [10u32, 100, 1_000] {
		let data = generate_rld_file(count, 0x2010_0806);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("decode", count), &data, |b, data| {
			b.iter(|| black_box(RldFile::decode(data, 0x2010_0806).unwrap()));
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_mt19937_draws,
	bench_lzss_round_trip,
	bench_gyu_decode,
	bench_gyu_unshuffled_decode,
	bench_rld_decode,
);

criterion_main!(benches);
