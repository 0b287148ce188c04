//! Error types for file format parsing and decoding.

use thiserror::Error;

/// Errors that can occur when walking or decoding SPR containers
#[derive(Debug, Error)]
pub enum SprError {
	/// Not enough bytes left in the buffer to read a frame header
	#[error("Truncated frame header at offset {offset}: 16 bytes required, {available} remain")]
	TruncatedHeader {
		/// Buffer offset where the header read was attempted
		offset: usize,
		/// Number of bytes remaining at that offset
		available: usize,
	},

	/// A frame's declared block extends past the end of the buffer
	#[error(
		"Truncated frame body: block at offset {offset} ends at {block_end}, buffer is {available} bytes"
	)]
	TruncatedBody {
		/// Buffer offset where the frame record starts
		offset: usize,
		/// Declared end of the block (`offset + block_size`)
		block_end: usize,
		/// Total buffer length
		available: usize,
	},

	/// A frame's declared block is too small to hold its own 16-byte header
	#[error("Invalid block size {block_size} at offset {offset}: blocks are at least 16 bytes")]
	InvalidBlockSize {
		/// Buffer offset where the frame record starts
		offset: usize,
		/// Declared block size
		block_size: u32,
	},

	/// Blank band and visible band together exceed the frame height
	#[error(
		"Invalid frame geometry: {top_blank_lines} blank + {visible_band_height} visible lines exceed height {height}"
	)]
	InvalidFrameGeometry {
		/// Leading fully-transparent scanlines
		top_blank_lines: u16,
		/// Scanlines carrying encoded pixel data
		visible_band_height: u16,
		/// Frame height in pixels
		height: u16,
	},

	/// The pixel-data window ran out before a scanline finished decoding
	#[error("Truncated pixel data on line {line} at window offset {offset}")]
	TruncatedPixelData {
		/// Scanline being decoded when the window ran out
		line: u16,
		/// Offset into the pixel-data window where the read failed
		offset: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when parsing PIC palette segments
#[derive(Debug, Error)]
pub enum PicError {
	/// The buffer ended inside the palette segment
	#[error("Truncated palette segment: expected {expected} bytes, got {actual}")]
	TruncatedSegment {
		/// Number of bytes the segment requires
		expected: usize,
		/// Number of bytes available
		actual: usize,
	},

	/// The segment's start index exceeds its end index
	#[error("Invalid palette range: start {start} > end {end}")]
	InvalidPaletteRange {
		/// First palette index covered by the segment (inclusive)
		start: u8,
		/// Last palette index covered by the segment (inclusive)
		end: u8,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
