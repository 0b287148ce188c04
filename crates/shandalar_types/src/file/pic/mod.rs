//! `.PIC` file format support for `shandalar-rs` project.
//!
//! PIC files are single indexed-color images. The pixel codec itself is
//! still undocumented; what is known is the optional inline palette segment
//! at the start of the buffer, which overrides part of the caller-supplied
//! palette for that one image. This module parses the segment and exposes
//! the pixel codec as a swappable trait so a future decoder (or an external
//! one) can plug in behind [`decode_pic`].
//!
//! # Palette Segment Format
//!
//! ```text
//! u8[2]  magic          ("M0" => 6-bit channels scaled ×4; other "M…" => as-is)
//! u16    segment_len    (skipped, not validated)
//! u8     start_index
//! u8     end_index      (inclusive)
//! u8[3 * (end_index - start_index + 1)]  RGB triplets
//! ```
//!
//! Buffers not starting with `'M'` carry no segment; the caller's palette
//! stands unchanged.
//!
//! # Usage Examples
//!
//! ```
//! use shandalar_types::file::pic::PaletteSegment;
//! use shandalar_types::file::spr::Palette;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = [b'M', b'0', 9, 0, 4, 5, 10, 20, 30, 1, 2, 3];
//! if let Some(segment) = PaletteSegment::parse(&data)? {
//!     let effective = segment.apply(&Palette::grayscale());
//!     let pixels = &data[segment.len_bytes()..];
//!     assert_eq!(effective.get(4).r, 40); // 10 × 4
//!     assert_eq!(pixels.len(), 0);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;

use crate::file::PicError;
use crate::file::spr::palette::{Color, Palette};
use crate::file::spr::raster::Raster;

/// PIC palette segment constants.
pub mod constants {
	/// First magic byte of a palette segment
	pub const SEGMENT_MAGIC: u8 = b'M';

	/// Second magic byte selecting 6-bit channel scaling
	pub const SIX_BIT_MAGIC: [u8; 2] = *b"M0";

	/// Fixed bytes before the RGB triplets (magic, length, start, end)
	pub const SEGMENT_PREFIX_SIZE: usize = 6;
}

/// Channel width of a palette segment's RGB triplets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelScale {
	/// VGA-style 6-bit channels, scaled ×4 into 8-bit range
	SixBit,
	/// Full 8-bit channels, used as-is
	EightBit,
}

impl ChannelScale {
	fn widen(self, channel: u8) -> u8 {
		match self {
			ChannelScale::SixBit => channel.saturating_mul(4),
			ChannelScale::EightBit => channel,
		}
	}
}

impl Display for ChannelScale {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ChannelScale::SixBit => write!(f, "6-bit (×4)"),
			ChannelScale::EightBit => write!(f, "8-bit"),
		}
	}
}

/// An inline palette segment parsed from the head of a PIC buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSegment {
	scale: ChannelScale,
	start: u8,
	end: u8,
	colors: Vec<Color>,
}

impl PaletteSegment {
	/// Parses the optional palette segment at the head of a PIC buffer.
	///
	/// Returns `Ok(None)` when the buffer carries no segment (shorter than
	/// the magic, or not starting with `'M'`).
	///
	/// # Errors
	///
	/// Returns [`PicError::InvalidPaletteRange`] if the segment's start
	/// index exceeds its end index, and [`PicError::TruncatedSegment`] if
	/// the buffer ends inside the segment.
	pub fn parse(data: &[u8]) -> Result<Option<Self>, PicError> {
		if data.len() < 2 || data[0] != constants::SEGMENT_MAGIC {
			return Ok(None);
		}

		let scale = if data[0..2] == constants::SIX_BIT_MAGIC {
			ChannelScale::SixBit
		} else {
			ChannelScale::EightBit
		};

		if data.len() < constants::SEGMENT_PREFIX_SIZE {
			return Err(PicError::TruncatedSegment {
				expected: constants::SEGMENT_PREFIX_SIZE,
				actual: data.len(),
			});
		}

		// Bytes 2-3 hold the declared segment length; the original viewer
		// skips it unvalidated and so do we.
		let start = data[4];
		let end = data[5];
		if start > end {
			return Err(PicError::InvalidPaletteRange {
				start,
				end,
			});
		}

		let count = usize::from(end) - usize::from(start) + 1;
		let expected = constants::SEGMENT_PREFIX_SIZE + count * 3;
		if data.len() < expected {
			return Err(PicError::TruncatedSegment {
				expected,
				actual: data.len(),
			});
		}

		let colors = data[constants::SEGMENT_PREFIX_SIZE..expected]
			.chunks_exact(3)
			.map(|triplet| {
				Color::rgb(scale.widen(triplet[0]), scale.widen(triplet[1]), scale.widen(triplet[2]))
			})
			.collect();

		Ok(Some(Self {
			scale,
			start,
			end,
			colors,
		}))
	}

	/// Returns the channel scale announced by the magic bytes.
	pub fn scale(&self) -> ChannelScale {
		self.scale
	}

	/// Returns the first palette index covered by the segment.
	pub fn start(&self) -> u8 {
		self.start
	}

	/// Returns the last palette index covered by the segment (inclusive).
	pub fn end(&self) -> u8 {
		self.end
	}

	/// Returns the segment's colors, already widened to 8-bit channels.
	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	/// Returns the total byte span of the segment within the buffer, so the
	/// caller can locate the pixel stream that follows.
	pub fn len_bytes(&self) -> usize {
		constants::SEGMENT_PREFIX_SIZE + self.colors.len() * 3
	}

	/// Returns a fresh palette with indices `start..=end` overridden by the
	/// segment's colors. All other indices keep the caller's colors.
	pub fn apply(&self, base: &Palette) -> Palette {
		let mut palette = base.clone();
		for (offset, &color) in self.colors.iter().enumerate() {
			palette.set(self.start + offset as u8, color);
		}
		palette
	}
}

impl Display for PaletteSegment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"PIC palette segment: {} scale, indices {}-{} ({} colors)",
			self.scale,
			self.start,
			self.end,
			self.colors.len()
		)
	}
}

/// Pixel codec seam for the undocumented PIC image data.
///
/// Implementations receive the buffer positioned after any palette segment
/// together with the effective palette, and produce a raster.
pub trait PixelCodec {
	/// Decodes the pixel stream into a raster.
	///
	/// # Errors
	///
	/// Returns an error if the pixel stream is malformed.
	fn decode(&self, data: &[u8], palette: &Palette) -> Result<Raster, PicError>;
}

/// Decodes a PIC buffer with the given codec.
///
/// Resolves the effective palette first (applying the inline segment when
/// present), then hands the remainder of the buffer to `codec`. The base
/// palette is never mutated.
///
/// # Errors
///
/// Returns an error if the palette segment is malformed or the codec fails.
pub fn decode_pic<C: PixelCodec>(
	data: &[u8],
	base_palette: &Palette,
	codec: &C,
) -> Result<Raster, PicError> {
	match PaletteSegment::parse(data)? {
		Some(segment) => {
			let palette = segment.apply(base_palette);
			codec.decode(&data[segment.len_bytes()..], &palette)
		}
		None => codec.decode(data, base_palette),
	}
}
