//! End-to-end decoding tests for SPR containers, exercising the public
//! facade the way a caller (viewer, exporter) would.

use shandalar_rs::prelude::*;
use shandalar_rs::prelude::file::spr::constants::{END_OF_CONTAINER, HEADER_SIZE};

/// Builds one frame record with the given geometry, scanline payload and
/// trailing padding.
fn frame(width: u16, height: u16, top: u16, visible: u16, payload: &[u8], padding: usize) -> Vec<u8> {
	let block_size = (HEADER_SIZE + payload.len() + padding) as u32;
	let mut bytes = SprFrameHeader::new(block_size, width, height, top, visible).to_bytes().to_vec();
	bytes.extend_from_slice(payload);
	bytes.extend(std::iter::repeat_n(0u8, padding));
	bytes
}

/// A small card-art-like container: two frames, mixed encodings, padding,
/// sentinel, and trailing junk after the sentinel.
fn sample_container() -> Vec<u8> {
	let mut data = Vec::new();
	// Frame 0: 4x3, one blank line on top, inline + explicit scanlines.
	data.extend_from_slice(&frame(
		4,
		3,
		1,
		2,
		&[
			0, 4, 1, 0, 2, 3, // inline: pixel 1 transparent via raw 0
			1, 0xFE, 2, 5, 6, // explicit run of 2 after 1 leading pixel
		],
		3,
	));
	// Frame 1: 2x1 opaque strip.
	data.extend_from_slice(&frame(2, 1, 0, 1, &[0, 2, 7, 8], 0));
	data.extend_from_slice(&END_OF_CONTAINER.to_le_bytes());
	// Anything after the sentinel must never be read.
	data.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
	data
}

#[test_log::test]
fn decodes_multi_frame_container() {
	let file = SprFile::from_bytes(&sample_container());
	let rasters = file.decode(&Palette::grayscale()).into_result().unwrap();

	assert_eq!(rasters.len(), 2);

	let first = &rasters[0];
	assert_eq!((first.width(), first.height()), (4, 3));
	// Blank top line.
	assert!(first.rows().next().unwrap().iter().all(Pixel::is_transparent));
	// Inline line: raw 0 decodes as transparent.
	assert_eq!(first.get(0, 1), Some(Pixel::Opaque(Color::gray(1))));
	assert_eq!(first.get(1, 1), Some(Pixel::Transparent));
	assert_eq!(first.get(3, 1), Some(Pixel::Opaque(Color::gray(3))));
	// Explicit line: one leading transparent pixel, then literal indices.
	assert_eq!(first.get(0, 2), Some(Pixel::Transparent));
	assert_eq!(first.get(1, 2), Some(Pixel::Opaque(Color::gray(5))));
	assert_eq!(first.get(3, 2), Some(Pixel::Transparent));

	assert_eq!(rasters[1].get(1, 0), Some(Pixel::Opaque(Color::gray(8))));
}

#[test_log::test]
fn walk_exposes_headers_without_decoding() {
	let file = SprFile::from_bytes(&sample_container());

	let headers: Vec<SprFrameHeader> =
		file.frames().map(|frame| *frame.unwrap().header()).collect();

	assert_eq!(headers.len(), 2);
	assert_eq!(headers[0].width(), 4);
	assert_eq!(headers[0].top_blank_lines(), 1);
	assert_eq!(headers[1].block_size() as usize, HEADER_SIZE + 4);
}

#[test_log::test]
fn partial_container_yields_partial_results() {
	let mut data = Vec::new();
	data.extend_from_slice(&frame(2, 1, 0, 1, &[0, 2, 7, 8], 0));
	// Truncated second frame: header promises more bytes than remain.
	data.extend_from_slice(&SprFrameHeader::new(400, 8, 8, 0, 8).to_bytes());

	let file = SprFile::from_bytes(&data);
	let decoded = file.decode(&Palette::grayscale());

	assert_eq!(decoded.rasters().len(), 1);
	assert!(!decoded.is_complete());
	assert!(matches!(decoded.error(), Some(SprError::TruncatedBody { .. })));

	let (rasters, error) = decoded.into_parts();
	assert_eq!(rasters.len(), 1);
	assert!(error.is_some());
}

#[test_log::test]
fn decode_is_deterministic() {
	let file = SprFile::from_bytes(&sample_container());
	let palette = Palette::grayscale();

	let first = file.decode(&palette).into_result().unwrap();
	let second = file.decode(&palette).into_result().unwrap();

	assert_eq!(first, second);
}

#[test_log::test]
fn palette_choice_changes_colors_not_shape() {
	let file = SprFile::from_bytes(&sample_container());

	let gray = file.decode(&Palette::grayscale()).into_result().unwrap();
	let mut sepia = Palette::grayscale();
	sepia.set(7, Color::rgb(112, 66, 20));
	let tinted = file.decode(&sepia).into_result().unwrap();

	assert_eq!(gray.len(), tinted.len());
	for (a, b) in gray.iter().zip(&tinted) {
		assert_eq!((a.width(), a.height()), (b.width(), b.height()));
		// Transparency layout is palette-independent.
		for (ra, rb) in a.rows().zip(b.rows()) {
			for (pa, pb) in ra.iter().zip(rb) {
				assert_eq!(pa.is_transparent(), pb.is_transparent());
			}
		}
	}
	assert_eq!(tinted[1].get(0, 0), Some(Pixel::Opaque(Color::rgb(112, 66, 20))));
}

#[test_log::test]
fn pic_segment_feeds_spr_style_palette() {
	// A PIC palette segment applied over the grayscale base, then used to
	// decode an SPR frame, mirroring how the original viewer shared
	// palettes across asset types.
	let mut segment = vec![b'M', b'0', 3, 0, 7, 7];
	segment.extend_from_slice(&[10, 20, 30]);
	let effective = PaletteSegment::parse(&segment)
		.unwrap()
		.expect("segment present")
		.apply(&Palette::grayscale());

	let data = frame(1, 1, 0, 1, &[0, 0xFF, 1, 7], 0);
	let rasters =
		SprFile::from_bytes(&data).decode(&effective).into_result().unwrap();

	assert_eq!(rasters[0].get(0, 0), Some(Pixel::Opaque(Color::rgb(40, 80, 120))));
}
