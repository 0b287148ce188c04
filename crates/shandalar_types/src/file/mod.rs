//! File type support for `shandalar-rs` project.

mod error;

pub mod pic;
pub mod spr;

// Re-export error types
pub use error::{PicError, SprError};

// Re-export main file types
pub use pic::{ChannelScale, PaletteSegment, PixelCodec, decode_pic};
pub use spr::{
	Color, Decoded, File as SprFile, FrameHeader as SprFrameHeader, FrameIter, FrameView, Palette,
	Pixel, Raster,
};
