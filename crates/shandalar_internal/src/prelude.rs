//! Prelude module for `shandalar_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```no_run
//! use shandalar_internal::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spr = SprFile::open("CARDART.SPR")?;
//! let decoded = spr.decode(&Palette::grayscale());
//! # Ok(())
//! # }
//! ```

// Re-export everything from shandalar_types::prelude
#[doc(inline)]
pub use shandalar_types::prelude::*;

// Re-export the entire shandalar_types module for advanced usage
#[doc(inline)]
pub use shandalar_types;
