//! This module is separated into its own crate to keep the facade crate thin, and should not be used directly.

/// `use shandalar_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export shandalar_types for convenience
pub use shandalar_types;

// Re-export commonly used types at crate root
pub use shandalar_types::file::{
	Decoded, Palette, PaletteSegment, PicError, Raster, SprError, SprFile,
};
