//! `.SPR` file format support for `shandalar-rs` project.
//!
//! SPR files are multi-frame sprite containers from Microprose's Shandalar
//! engine. A container is a flat run of self-describing frame records,
//! terminated by a sentinel; each record carries run-length encoded,
//! palette-indexed pixel data with per-line transparency.
//!
//! # File Structure
//!
//! ```text
//! repeat:
//!   frame header (16 bytes)
//!   scanline records for the visible band
//!   padding up to the declared block size, if any
//! until block_size == 0xFFFFFFFF
//! ```
//!
//! # Frame Header Format (16 bytes, little-endian)
//!
//! | Offset | Size | Field                 | Description                                |
//! |--------|------|-----------------------|--------------------------------------------|
//! | 0x00   | 4    | `block_size`          | Record length incl. header; `0xFFFFFFFF` ends the container |
//! | 0x04   | 2    | `width`               | Raster width in pixels                     |
//! | 0x06   | 2    | `height`              | Raster height in pixels                    |
//! | 0x08   | 4    | `reserved`            | Unidentified, preserved but unused         |
//! | 0x0C   | 2    | `top_blank_lines`     | Leading fully-transparent scanlines        |
//! | 0x0E   | 2    | `visible_band_height` | Scanlines carrying encoded pixel data      |
//!
//! Records may be longer than the scanline data they carry; the walker
//! always advances by `block_size`, never by decoded length.
//!
//! # Usage Examples
//!
//! ## Decoding a container
//!
//! ```no_run
//! use shandalar_types::file::spr::{File, Palette};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spr = File::open("CARDART.SPR")?;
//! let palette = Palette::grayscale();
//!
//! let decoded = spr.decode(&palette);
//! for raster in decoded.rasters() {
//!     println!("{}×{}", raster.width(), raster.height());
//! }
//! if let Some(err) = decoded.error() {
//!     eprintln!("container damaged: {err}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Walking frames lazily
//!
//! ```no_run
//! use shandalar_types::file::spr::{File, Palette};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spr = File::open("CARDART.SPR")?;
//! let palette = Palette::grayscale();
//!
//! for frame in spr.frames() {
//!     let frame = frame?;
//!     println!("{}", frame.header());
//!     let raster = frame.decode(&palette)?;
//!     assert_eq!(raster.height(), frame.header().height());
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;
use std::io::Read;

use serde::Serialize;

use crate::file::SprError;

mod decode;
pub mod palette;
pub mod raster;

pub use palette::{Color, Palette};
pub use raster::{Pixel, Raster, RasterRows};

/// SPR container constants.
pub mod constants {
	/// Size of a frame header in bytes
	pub const HEADER_SIZE: usize = 16;

	/// `block_size` value marking the end of the container
	pub const END_OF_CONTAINER: u32 = 0xFFFF_FFFF;

	/// Scanline discriminator announcing an explicit run length
	pub const EXPLICIT_RUN_MARKER_A: u8 = 0xFE;

	/// Scanline discriminator announcing an explicit run length
	pub const EXPLICIT_RUN_MARKER_B: u8 = 0xFF;
}

/// Frame header (16 bytes) describing one record in an SPR container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FrameHeader {
	block_size: u32,
	width: u16,
	height: u16,
	reserved: u32,
	top_blank_lines: u16,
	visible_band_height: u16,
}

impl FrameHeader {
	/// Size of the header in bytes
	pub const SIZE: usize = constants::HEADER_SIZE;

	/// Creates a new frame header with a zeroed reserved field.
	pub fn new(
		block_size: u32,
		width: u16,
		height: u16,
		top_blank_lines: u16,
		visible_band_height: u16,
	) -> Self {
		Self {
			block_size,
			width,
			height,
			reserved: 0,
			top_blank_lines,
			visible_band_height,
		}
	}

	/// Returns the declared record length, header included.
	pub fn block_size(&self) -> u32 {
		self.block_size
	}

	/// Returns the raster width in pixels.
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the raster height in pixels.
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns the unidentified reserved field, preserved as-is.
	pub fn reserved(&self) -> u32 {
		self.reserved
	}

	/// Returns the number of leading fully-transparent scanlines.
	pub fn top_blank_lines(&self) -> u16 {
		self.top_blank_lines
	}

	/// Returns the number of scanlines carrying encoded pixel data.
	pub fn visible_band_height(&self) -> u16 {
		self.visible_band_height
	}

	/// Parses a frame header from the given byte slice.
	///
	/// # Errors
	///
	/// Returns [`SprError::TruncatedHeader`] if fewer than 16 bytes are
	/// available.
	pub fn from_bytes(data: &[u8]) -> Result<Self, SprError> {
		if data.len() < constants::HEADER_SIZE {
			return Err(SprError::TruncatedHeader {
				offset: 0,
				available: data.len(),
			});
		}

		let block_size = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
		let width = u16::from_le_bytes([data[4], data[5]]);
		let height = u16::from_le_bytes([data[6], data[7]]);
		let reserved = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
		let top_blank_lines = u16::from_le_bytes([data[12], data[13]]);
		let visible_band_height = u16::from_le_bytes([data[14], data[15]]);

		Ok(Self {
			block_size,
			width,
			height,
			reserved,
			top_blank_lines,
			visible_band_height,
		})
	}

	/// Converts the header to its 16-byte wire form.
	pub fn to_bytes(&self) -> [u8; constants::HEADER_SIZE] {
		let mut bytes = [0u8; constants::HEADER_SIZE];

		bytes[0..4].copy_from_slice(&self.block_size.to_le_bytes());
		bytes[4..6].copy_from_slice(&self.width.to_le_bytes());
		bytes[6..8].copy_from_slice(&self.height.to_le_bytes());
		bytes[8..12].copy_from_slice(&self.reserved.to_le_bytes());
		bytes[12..14].copy_from_slice(&self.top_blank_lines.to_le_bytes());
		bytes[14..16].copy_from_slice(&self.visible_band_height.to_le_bytes());

		bytes
	}
}

impl Display for FrameHeader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}×{} frame, block {} bytes, {} blank + {} visible lines",
			self.width, self.height, self.block_size, self.top_blank_lines, self.visible_band_height
		)
	}
}

/// SPR container holding raw file data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	/// Complete file data
	raw: Vec<u8>,
}

impl File {
	/// Opens an SPR container from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read. Structural validation
	/// happens lazily while walking frames.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, SprError> {
		let raw = std::fs::read(path)?;
		Ok(Self {
			raw,
		})
	}

	/// Creates a container over a copy of the given bytes.
	pub fn from_bytes(data: &[u8]) -> Self {
		Self {
			raw: data.to_vec(),
		}
	}

	/// Reads a container from any reader.
	///
	/// # Errors
	///
	/// Returns an error if reading fails.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, SprError> {
		let mut raw = Vec::new();
		reader.read_to_end(&mut raw)?;
		Ok(Self {
			raw,
		})
	}

	/// Returns the raw container bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.raw
	}

	/// Returns a lazy iterator over the container's frames.
	///
	/// The iterator walks the buffer front to back, ends at the
	/// `0xFFFFFFFF` sentinel (or the end of the buffer) and is fused after
	/// the first error.
	pub fn frames(&self) -> FrameIter<'_> {
		FrameIter::new(&self.raw)
	}

	/// Walks the container and decodes every frame with the given palette.
	///
	/// Frames decoded before an error are kept, so a partially corrupt
	/// container yields partial results plus the failure.
	pub fn decode(&self, palette: &Palette) -> Decoded {
		let mut rasters = Vec::new();
		let mut error = None;

		for frame in self.frames() {
			match frame.and_then(|view| view.decode(palette)) {
				Ok(raster) => rasters.push(raster),
				Err(err) => {
					error = Some(err);
					break;
				}
			}
		}

		Decoded {
			rasters,
			error,
		}
	}
}

impl Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "SPR container: {} bytes", self.raw.len())
	}
}

/// One frame record: parsed header plus a view of its pixel-data window.
///
/// The window spans the bytes after the 16-byte header up to the declared
/// block end, so it may include padding the decoder never touches.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
	header: FrameHeader,
	pixel_data: &'a [u8],
}

impl FrameView<'_> {
	/// Returns the frame's header.
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// Returns the frame's pixel-data window.
	pub fn pixel_data(&self) -> &[u8] {
		self.pixel_data
	}

	/// Decodes the frame into a raster using the given palette.
	///
	/// # Errors
	///
	/// Returns an error if the frame geometry is inconsistent or the
	/// pixel-data window is exhausted mid-scanline.
	pub fn decode(&self, palette: &Palette) -> Result<Raster, SprError> {
		Ok(self.decode_tracked(palette)?.0)
	}

	/// Decodes the frame, also reporting how many window bytes were read.
	///
	/// The consumed count can legitimately be smaller than the window
	/// (trailing padding); it is informational and never drives the walk.
	///
	/// # Errors
	///
	/// Same failure modes as [`FrameView::decode`].
	pub fn decode_tracked(&self, palette: &Palette) -> Result<(Raster, usize), SprError> {
		decode::decode_frame(&self.header, self.pixel_data, palette)
	}
}

/// Lazy iterator over the frame records of an SPR container.
///
/// Yields `Result` items; after yielding an error (or reaching the
/// sentinel) the iterator is terminal.
#[derive(Debug, Clone)]
pub struct FrameIter<'a> {
	data: &'a [u8],
	cursor: usize,
	finished: bool,
}

impl<'a> FrameIter<'a> {
	/// Creates a walker over a raw container buffer.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			cursor: 0,
			finished: false,
		}
	}

	/// Returns the current byte offset of the walk.
	pub fn offset(&self) -> usize {
		self.cursor
	}

	fn fail(&mut self, error: SprError) -> Option<Result<FrameView<'a>, SprError>> {
		self.finished = true;
		Some(Err(error))
	}
}

impl<'a> Iterator for FrameIter<'a> {
	type Item = Result<FrameView<'a>, SprError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished || self.cursor >= self.data.len() {
			self.finished = true;
			return None;
		}

		let start = self.cursor;
		let available = self.data.len() - start;

		if available < 4 {
			return self.fail(SprError::TruncatedHeader {
				offset: start,
				available,
			});
		}

		let block_size = u32::from_le_bytes([
			self.data[start],
			self.data[start + 1],
			self.data[start + 2],
			self.data[start + 3],
		]);

		// The sentinel is checked before any other header field is read.
		if block_size == constants::END_OF_CONTAINER {
			self.finished = true;
			return None;
		}

		if available < constants::HEADER_SIZE {
			return self.fail(SprError::TruncatedHeader {
				offset: start,
				available,
			});
		}

		let header = match FrameHeader::from_bytes(&self.data[start..start + constants::HEADER_SIZE])
		{
			Ok(header) => header,
			Err(err) => return self.fail(err),
		};

		if (block_size as usize) < constants::HEADER_SIZE {
			return self.fail(SprError::InvalidBlockSize {
				offset: start,
				block_size,
			});
		}

		let block_end = start + block_size as usize;
		if block_end > self.data.len() {
			return self.fail(SprError::TruncatedBody {
				offset: start,
				block_end,
				available: self.data.len(),
			});
		}

		// The next record starts at the declared block end, regardless of
		// how many window bytes the decoder will actually consume.
		self.cursor = block_end;

		Some(Ok(FrameView {
			header,
			pixel_data: &self.data[start + constants::HEADER_SIZE..block_end],
		}))
	}
}

impl std::iter::FusedIterator for FrameIter<'_> {}

/// Result of decoding a whole container: rasters in buffer order, plus the
/// error that stopped the walk, if any.
#[derive(Debug)]
pub struct Decoded {
	rasters: Vec<Raster>,
	error: Option<SprError>,
}

impl Decoded {
	/// Returns the rasters decoded before any failure, in buffer order.
	pub fn rasters(&self) -> &[Raster] {
		&self.rasters
	}

	/// Returns the error that ended the walk, if the container was damaged.
	pub fn error(&self) -> Option<&SprError> {
		self.error.as_ref()
	}

	/// Returns `true` when the whole container decoded cleanly.
	pub fn is_complete(&self) -> bool {
		self.error.is_none()
	}

	/// Splits into rasters and the optional terminal error.
	pub fn into_parts(self) -> (Vec<Raster>, Option<SprError>) {
		(self.rasters, self.error)
	}

	/// Converts to a `Result`, discarding partial rasters on failure.
	///
	/// # Errors
	///
	/// Returns the terminal error of a damaged container.
	pub fn into_result(self) -> Result<Vec<Raster>, SprError> {
		match self.error {
			Some(err) => Err(err),
			None => Ok(self.rasters),
		}
	}
}
