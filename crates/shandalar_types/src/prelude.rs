//! Prelude module for `shandalar_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use shandalar_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spr = SprFile::open("CARDART.SPR")?;
//! let rasters = spr.decode(&Palette::grayscale()).into_result()?;
//! # Ok(())
//! # }
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// PIC types
	ChannelScale,
	// Palette types
	Color,

	Decoded,
	Palette,
	PaletteSegment,
	PicError,
	// Raster types
	Pixel,
	PixelCodec,

	Raster,
	// SPR types
	SprError,
	SprFile,
	SprFrameHeader,

	decode_pic,
};

// Iterator types for advanced usage
#[doc(inline)]
pub use crate::file::spr::{FrameIter, FrameView, raster::RasterRows};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
