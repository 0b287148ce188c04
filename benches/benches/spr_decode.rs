//! Benchmark suite for SPR container decoding
//!
//! This benchmark measures container walking and frame decoding throughput
//! and helps identify hot paths in the scanline decoder.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shandalar_benches::{generate_test_spr_data, sizes};
use shandalar_types::file::spr::{File, FrameHeader, Palette};

/// Benchmark full container decode across typical sprite sizes
fn bench_decode_containers(c: &mut Criterion) {
	let mut group = c.benchmark_group("spr_decode");
	let palette = Palette::grayscale();

	let cases = [
		("tiny", sizes::TINY),
		("small", sizes::SMALL),
		("medium", sizes::MEDIUM),
		("large", sizes::LARGE),
		("screen", sizes::SCREEN),
	];

	for (name, (width, height)) in cases {
		let data = generate_test_spr_data(width, height, 8);
		let file = File::from_bytes(&data);

		let pixels = u64::from(width) * u64::from(height) * 8;
		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("decode", name), &file, |b, file| {
			b.iter(|| {
				let decoded = black_box(file).decode(&palette);
				black_box(decoded)
			});
		});
	}

	group.finish();
}

/// Benchmark the container walk without decoding any pixels
fn bench_walk_only(c: &mut Criterion) {
	let mut group = c.benchmark_group("spr_walk");

	let data = generate_test_spr_data(sizes::LARGE.0, sizes::LARGE.1, 64);
	let file = File::from_bytes(&data);

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("walk_64_frames", |b| {
		b.iter(|| {
			let count = black_box(&file).frames().count();
			black_box(count)
		});
	});

	group.finish();
}

/// Benchmark header parsing separately
fn bench_header_parsing(c: &mut Criterion) {
	let mut group = c.benchmark_group("spr_header");

	let data = generate_test_spr_data(sizes::SMALL.0, sizes::SMALL.1, 1);

	group.bench_function("parse_header", |b| {
		b.iter(|| {
			let result = FrameHeader::from_bytes(black_box(&data));
			black_box(result)
		});
	});

	group.finish();
}

/// Benchmark raster expansion to RGBA (export path)
fn bench_raster_expansion(c: &mut Criterion) {
	let mut group = c.benchmark_group("spr_raster_expand");

	let palette = Palette::grayscale();
	let data = generate_test_spr_data(sizes::SCREEN.0, sizes::SCREEN.1, 1);
	let rasters = File::from_bytes(&data)
		.decode(&palette)
		.into_result()
		.expect("synthetic container decodes cleanly");
	let raster = &rasters[0];

	group.throughput(Throughput::Elements(raster.pixel_count() as u64));
	group.bench_function("to_rgba", |b| {
		b.iter(|| {
			let rgba = black_box(raster).to_rgba();
			black_box(rgba)
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_decode_containers,
	bench_walk_only,
	bench_header_parsing,
	bench_raster_expansion
);
criterion_main!(benches);
