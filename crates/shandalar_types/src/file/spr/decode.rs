//! SPR frame decoding.
//!
//! ## Scanline encoding
//!
//! Scanlines outside the visible band (the first `top_blank_lines` rows and
//! everything from `top_blank_lines + visible_band_height` down) are fully
//! transparent and consume no bytes. Each visible scanline is a variable
//! length record:
//!
//! | field | size | meaning |
//! |-------|------|---------|
//! | `leading_transparent` | 1 | transparent pixels at the start of the row |
//! | `discriminator`       | 1 | run encoding selector, see below |
//! | `run_length`          | 0-1 | present only for the explicit encoding |
//! | raw pixel bytes       | `run_length` | palette indices |
//!
//! The discriminator selects between two run encodings:
//!
//! - any value other than `0xFE`/`0xFF` is itself the run length, and raw
//!   byte `0` inside the run marks a transparent pixel instead of palette
//!   index 0;
//! - `0xFE` or `0xFF` announce that an explicit run length byte follows,
//!   and every raw byte in the run is a literal palette index, including 0.
//!
//! Pixels right of `leading_transparent + run_length` are transparent and
//! consume nothing, so `run_length == 0` (or `leading_transparent` past the
//! row end) yields an entirely transparent row.

use crate::file::SprError;

use super::FrameHeader;
use super::constants::{EXPLICIT_RUN_MARKER_A, EXPLICIT_RUN_MARKER_B};
use super::palette::Palette;
use super::raster::{Pixel, Raster};

/// Run encoding of one scanline, resolved once from its discriminator byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunEncoding {
	/// Run length is the discriminator itself; raw byte `0` is transparent
	Inline {
		/// Number of encoded pixels in the run
		run_length: u8,
	},
	/// Explicit run length followed the discriminator; raw bytes are
	/// literal palette indices
	Explicit {
		/// Number of encoded pixels in the run
		run_length: u8,
	},
}

impl RunEncoding {
	fn run_length(self) -> usize {
		match self {
			RunEncoding::Inline {
				run_length,
			}
			| RunEncoding::Explicit {
				run_length,
			} => usize::from(run_length),
		}
	}
}

/// Byte cursor over one frame's pixel-data window.
struct Cursor<'a> {
	window: &'a [u8],
	position: usize,
}

impl Cursor<'_> {
	fn read_u8(&mut self, line: u16) -> Result<u8, SprError> {
		let Some(&byte) = self.window.get(self.position) else {
			return Err(SprError::TruncatedPixelData {
				line,
				offset: self.position,
			});
		};
		self.position += 1;
		Ok(byte)
	}
}

/// Decodes one frame's pixel-data window into a raster.
///
/// Returns the raster together with the number of window bytes consumed.
/// The consumed count is informational: the container walker advances by the
/// declared block size, never by this value, since blocks may carry padding.
pub(super) fn decode_frame(
	header: &FrameHeader,
	window: &[u8],
	palette: &Palette,
) -> Result<(Raster, usize), SprError> {
	let top = header.top_blank_lines();
	let visible = header.visible_band_height();
	let height = header.height();

	if u32::from(top) + u32::from(visible) > u32::from(height) {
		return Err(SprError::InvalidFrameGeometry {
			top_blank_lines: top,
			visible_band_height: visible,
			height,
		});
	}

	// Blank bands above and below the visible band stay transparent.
	let mut raster = Raster::filled(header.width(), height, Pixel::Transparent);
	let mut cursor = Cursor {
		window,
		position: 0,
	};

	for y in top..top + visible {
		decode_line(&mut cursor, &mut raster, y, header.width(), palette)?;
	}

	Ok((raster, cursor.position))
}

/// Decodes a single visible scanline.
fn decode_line(
	cursor: &mut Cursor<'_>,
	raster: &mut Raster,
	y: u16,
	width: u16,
	palette: &Palette,
) -> Result<(), SprError> {
	let leading_transparent = usize::from(cursor.read_u8(y)?);
	let encoding = match cursor.read_u8(y)? {
		EXPLICIT_RUN_MARKER_A | EXPLICIT_RUN_MARKER_B => RunEncoding::Explicit {
			run_length: cursor.read_u8(y)?,
		},
		discriminator => RunEncoding::Inline {
			run_length: discriminator,
		},
	};

	let run_end = leading_transparent + encoding.run_length();

	for x in 0..usize::from(width) {
		// Leading and trailing spans are transparent and consume nothing.
		if x < leading_transparent || x >= run_end {
			continue;
		}

		let raw = cursor.read_u8(y)?;
		let pixel = match encoding {
			RunEncoding::Inline {
				..
			} if raw == 0 => Pixel::Transparent,
			_ => Pixel::Opaque(palette.get(raw)),
		};
		raster.set(x as u16, y, pixel);
	}

	Ok(())
}
