//! Color palettes for Shandalar image assets.
//!
//! Neither `.SPR` nor `.PIC` pixel data carries colors of its own: raw pixel
//! bytes are indices into a 256-entry palette supplied by the caller. The
//! original viewer defaulted to a grayscale ramp until a real palette was
//! loaded, which [`Palette::grayscale`] reproduces. `.PIC` files may embed a
//! palette segment overriding part of the caller's palette, see
//! [`crate::file::pic`].

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

/// RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl Color {
	/// Creates a new RGB color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Creates a grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::rgb(value, value, value)
	}

	/// Black.
	pub const fn black() -> Self {
		Self::rgb(0, 0, 0)
	}

	/// Returns the color as a packed `0x00RRGGBB` value.
	pub const fn to_rgb24(&self) -> u32 {
		((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
	}

	/// Creates a color from a packed `0x00RRGGBB` value.
	pub const fn from_rgb24(rgb: u32) -> Self {
		Self {
			r: ((rgb >> 16) & 0xFF) as u8,
			g: ((rgb >> 8) & 0xFF) as u8,
			b: (rgb & 0xFF) as u8,
		}
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::black()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
	}
}

/// A 256-entry color palette.
///
/// Decoding never mutates a palette; decodes that need a modified palette
/// (such as a PIC palette segment) produce a fresh one instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	/// 256-color table
	colors: [Color; 256],
}

impl Palette {
	/// Number of entries in a palette
	pub const PALETTE_SIZE: usize = 256;

	/// Size of a raw RGB palette dump (256 colors × 3 bytes)
	pub const RAW_RGB_SIZE: usize = Self::PALETTE_SIZE * 3;

	/// Creates a palette with all entries set to black.
	pub fn new() -> Self {
		Self {
			colors: [Color::black(); 256],
		}
	}

	/// Creates a grayscale palette, each entry matching its index.
	///
	/// This is the viewer's default palette when no `.TR` palette is loaded.
	pub fn grayscale() -> Self {
		let mut palette = Self::new();
		for i in 0..Self::PALETTE_SIZE {
			palette.colors[i] = Color::gray(i as u8);
		}
		palette
	}

	/// Creates a palette from an explicit color table.
	pub const fn from_colors(colors: [Color; 256]) -> Self {
		Self {
			colors,
		}
	}

	/// Creates a palette from a raw RGB dump (768 bytes, one triplet per entry).
	pub fn from_rgb_bytes(data: &[u8; Self::RAW_RGB_SIZE]) -> Self {
		let mut palette = Self::new();
		for (i, triplet) in data.chunks_exact(3).enumerate() {
			palette.colors[i] = Color::rgb(triplet[0], triplet[1], triplet[2]);
		}
		palette
	}

	/// Loads a raw RGB palette dump from a reader.
	///
	/// # Errors
	///
	/// Returns an error if fewer than 768 bytes can be read.
	pub fn from_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
		let mut data = [0u8; Self::RAW_RGB_SIZE];
		reader.read_exact(&mut data)?;
		Ok(Self::from_rgb_bytes(&data))
	}

	/// Loads a raw RGB palette dump from a file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be opened or holds fewer than
	/// 768 bytes.
	pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
		let mut file = std::fs::File::open(path)?;
		Self::from_reader(&mut file)
	}

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Sets the color at the specified index.
	#[inline]
	pub fn set(&mut self, index: u8, color: Color) {
		self.colors[index as usize] = color;
	}

	/// Returns a reference to the color table.
	#[inline]
	pub fn colors(&self) -> &[Color; 256] {
		&self.colors
	}

	/// Returns an iterator over palette colors.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}

	/// Returns an iterator over palette colors with indices.
	pub fn iter_indexed(&self) -> impl Iterator<Item = (u8, &Color)> {
		self.colors.iter().enumerate().map(|(i, c)| (i as u8, c))
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Palette: {} colors", Self::PALETTE_SIZE)
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[index as usize]
	}
}

impl std::ops::IndexMut<u8> for Palette {
	fn index_mut(&mut self, index: u8) -> &mut Self::Output {
		&mut self.colors[index as usize]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_color_packing() {
		let color = Color::rgb(255, 128, 64);
		assert_eq!(color.to_rgb24(), 0x00FF_8040);
		assert_eq!(Color::from_rgb24(0x00FF_8040), color);
	}

	#[test]
	fn test_palette_new() {
		let palette = Palette::new();
		assert_eq!(palette.get(0), Color::black());
		assert_eq!(palette.get(255), Color::black());
	}

	#[test]
	fn test_palette_grayscale() {
		let palette = Palette::grayscale();
		assert_eq!(palette.get(0), Color::gray(0));
		assert_eq!(palette.get(128), Color::gray(128));
		assert_eq!(palette.get(255), Color::gray(255));
	}

	#[test]
	fn test_palette_get_set() {
		let mut palette = Palette::new();
		let color = Color::rgb(255, 128, 64);

		palette.set(42, color);
		assert_eq!(palette.get(42), color);
	}

	#[test]
	fn test_palette_index() {
		let mut palette = Palette::new();
		let color = Color::rgb(1, 2, 3);

		palette[7] = color;
		assert_eq!(palette[7], color);
	}

	#[test]
	fn test_palette_iter_indexed() {
		let palette = Palette::grayscale();

		let mut seen = 0usize;
		for (index, color) in palette.iter_indexed() {
			assert_eq!(*color, Color::gray(index));
			seen += 1;
		}
		assert_eq!(seen, Palette::PALETTE_SIZE);
	}

	#[test]
	fn test_palette_from_rgb_bytes() {
		let mut data = [0u8; Palette::RAW_RGB_SIZE];
		data[0] = 255; // index 0 red channel
		data[765] = 10;
		data[766] = 20;
		data[767] = 30;

		let palette = Palette::from_rgb_bytes(&data);
		assert_eq!(palette.get(0), Color::rgb(255, 0, 0));
		assert_eq!(palette.get(255), Color::rgb(10, 20, 30));
	}

	#[test]
	fn test_palette_from_reader_short_input() {
		let data = [0u8; 100];
		assert!(Palette::from_reader(&mut &data[..]).is_err());
	}
}
