//! This crate provides core data types and file format support for the `shandalar-rs` project.
//!
//! # File Formats
//!
//! - **SPR**: Multi-frame sprite containers with run-length encoded,
//!   palette-indexed pixel data and per-line transparency
//! - **PIC**: Single images; the inline palette segment is parsed here and
//!   the pixel codec is a pluggable trait
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use shandalar_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spr = SprFile::open("CARDART.SPR")?;
//! let decoded = spr.decode(&Palette::grayscale());
//! println!("{} frames", decoded.rasters().len());
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use shandalar_types::file::spr::{File, Palette};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spr = File::open("CARDART.SPR")?;
//! for frame in spr.frames() {
//!     println!("{}", frame?.header());
//! }
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use shandalar_types::prelude::*;` to import commonly used items.
pub mod prelude;
