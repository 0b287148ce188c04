//! Benchmark helper utilities for shandalar-rs
//!
//! This module provides utilities for generating synthetic SPR containers
//! and common benchmark helpers for the shandalar-rs project.
//!
//! Real game containers are not redistributable, so the suite runs entirely
//! on synthetic data shaped like typical sprite sheets: a mix of inline and
//! explicit run encodings, leading transparency and blank crop bands.

use shandalar_types::file::spr::FrameHeader;
use shandalar_types::file::spr::constants::{END_OF_CONTAINER, HEADER_SIZE};

/// Generates a synthetic SPR container with the given number of frames.
///
/// Each frame alternates scanline encodings: even lines use the inline run
/// encoding with an interior transparent pixel, odd lines use an explicit
/// run with literal palette indices. A quarter of the height is split into
/// blank bands above and below the visible band.
pub fn generate_test_spr_data(width: u16, height: u16, frames: usize) -> Vec<u8> {
	let mut data = Vec::new();
	for _ in 0..frames {
		data.extend_from_slice(&generate_frame(width, height));
	}
	data.extend_from_slice(&END_OF_CONTAINER.to_le_bytes());
	data
}

fn generate_frame(width: u16, height: u16) -> Vec<u8> {
	let top_blank = height / 8;
	let visible = height - top_blank * 2;

	let mut scanlines = Vec::new();
	for y in 0..visible {
		let leading = (y % 4) as u8;
		let run = width.saturating_sub(u16::from(leading)).min(0xFD) as u8;

		scanlines.push(leading);
		if y % 2 == 0 {
			// Inline encoding: run length doubles as discriminator, index 0
			// inside the run decodes as transparent.
			scanlines.push(run);
			for x in 0..run {
				scanlines.push(if x % 7 == 0 { 0 } else { x.wrapping_add(y as u8) });
			}
		} else {
			// Explicit encoding: every raw byte is a literal index.
			scanlines.push(0xFE);
			scanlines.push(run);
			for x in 0..run {
				scanlines.push(x.wrapping_mul(3).wrapping_add(y as u8));
			}
		}
	}

	let block_size = (HEADER_SIZE + scanlines.len()) as u32;
	let header = FrameHeader::new(block_size, width, height, top_blank, visible);

	let mut frame = header.to_bytes().to_vec();
	frame.extend_from_slice(&scanlines);
	frame
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Tiny sprite: 16x16 (256 pixels) - cursor-sized
	pub const TINY: (u16, u16) = (16, 16);
	/// Small sprite: 64x64 (4,096 pixels) - card art thumbnail
	pub const SMALL: (u16, u16) = (64, 64);
	/// Medium sprite: 128x128 (16,384 pixels)
	pub const MEDIUM: (u16, u16) = (128, 128);
	/// Large sprite: 240x180 (43,200 pixels) - full card art
	pub const LARGE: (u16, u16) = (240, 180);
	/// Full screen: 640x480 (307,200 pixels)
	pub const SCREEN: (u16, u16) = (640, 480);
}

#[cfg(test)]
mod tests {
	use super::*;
	use shandalar_types::file::spr::{File, Palette};

	#[test]
	fn test_generate_test_spr_data() {
		let data = generate_test_spr_data(64, 64, 4);

		// Terminated by the sentinel
		assert_eq!(&data[data.len() - 4..], &END_OF_CONTAINER.to_le_bytes());

		let decoded = File::from_bytes(&data).decode(&Palette::grayscale());
		assert!(decoded.is_complete());
		assert_eq!(decoded.rasters().len(), 4);
		assert_eq!(decoded.rasters()[0].width(), 64);
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::TINY, (16, 16));
		assert_eq!(sizes::SCREEN, (640, 480));
	}
}
