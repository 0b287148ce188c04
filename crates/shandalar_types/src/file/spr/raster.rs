//! Decoded rasters.
//!
//! A [`Raster`] is the output of decoding one frame: a width × height grid
//! of pixel outcomes, each either transparent or a resolved palette color.
//! Rasters own their pixels and are independent of the source buffer and
//! palette once produced.

use std::fmt;

use super::palette::Color;

/// Outcome of decoding a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
	/// The cell carries no color
	Transparent,
	/// The cell resolved to a palette color
	Opaque(Color),
}

impl Pixel {
	/// Returns `true` for transparent cells.
	#[inline]
	pub const fn is_transparent(&self) -> bool {
		matches!(self, Pixel::Transparent)
	}

	/// Returns the resolved color, or `None` for transparent cells.
	#[inline]
	pub const fn color(&self) -> Option<Color> {
		match self {
			Pixel::Transparent => None,
			Pixel::Opaque(color) => Some(*color),
		}
	}
}

/// A decoded frame: width × height grid of [`Pixel`] outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
	/// Width in pixels
	width: u16,
	/// Height in pixels
	height: u16,
	/// Row-major pixel grid, `width * height` entries
	pixels: Vec<Pixel>,
}

impl Raster {
	/// Creates a raster with every cell set to `fill`.
	pub fn filled(width: u16, height: u16, fill: Pixel) -> Self {
		Self {
			width,
			height,
			pixels: vec![fill; width as usize * height as usize],
		}
	}

	/// Returns the raster width in pixels.
	#[inline]
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the raster height in pixels.
	#[inline]
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns the total number of cells.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.pixels.len()
	}

	/// Gets the pixel at the specified coordinates.
	///
	/// Returns `None` if the coordinates are out of bounds.
	pub fn get(&self, x: u16, y: u16) -> Option<Pixel> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let index = y as usize * self.width as usize + x as usize;
		self.pixels.get(index).copied()
	}

	/// Sets the pixel at the specified coordinates.
	///
	/// # Panics
	///
	/// Panics if the coordinates are out of bounds.
	pub fn set(&mut self, x: u16, y: u16, pixel: Pixel) {
		assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
		let index = y as usize * self.width as usize + x as usize;
		self.pixels[index] = pixel;
	}

	/// Returns the row-major pixel grid.
	#[inline]
	pub fn pixels(&self) -> &[Pixel] {
		&self.pixels
	}

	/// Returns an iterator over the rows of the raster.
	pub fn rows(&self) -> RasterRows<'_> {
		RasterRows {
			pixels: &self.pixels,
			width: self.width as usize,
			current_row: 0,
			total_rows: self.height as usize,
		}
	}

	/// Returns `true` when every cell is transparent.
	pub fn is_fully_transparent(&self) -> bool {
		self.pixels.iter().all(Pixel::is_transparent)
	}

	/// Expands the raster to RGB bytes, filling transparent cells with
	/// `background`.
	///
	/// Pixels are in row-major order, 3 bytes per pixel.
	pub fn to_rgb(&self, background: Color) -> Vec<u8> {
		let mut data = Vec::with_capacity(self.pixels.len() * 3);
		for pixel in &self.pixels {
			let color = pixel.color().unwrap_or(background);
			data.push(color.r);
			data.push(color.g);
			data.push(color.b);
		}
		data
	}

	/// Expands the raster to RGBA bytes, transparent cells getting alpha 0.
	///
	/// Pixels are in row-major order, 4 bytes per pixel.
	pub fn to_rgba(&self) -> Vec<u8> {
		let mut data = Vec::with_capacity(self.pixels.len() * 4);
		for pixel in &self.pixels {
			match pixel.color() {
				Some(color) => {
					data.push(color.r);
					data.push(color.g);
					data.push(color.b);
					data.push(0xFF);
				}
				None => data.extend_from_slice(&[0, 0, 0, 0]),
			}
		}
		data
	}
}

impl fmt::Display for Raster {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{} raster", self.width, self.height)
	}
}

/// Iterator over the rows of a raster.
#[derive(Debug, Clone)]
pub struct RasterRows<'a> {
	pixels: &'a [Pixel],
	width: usize,
	current_row: usize,
	total_rows: usize,
}

impl<'a> Iterator for RasterRows<'a> {
	type Item = &'a [Pixel];

	fn next(&mut self) -> Option<Self::Item> {
		if self.current_row >= self.total_rows {
			return None;
		}

		let start = self.current_row * self.width;
		let end = start + self.width;
		self.current_row += 1;

		Some(&self.pixels[start..end])
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.total_rows - self.current_row;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for RasterRows<'_> {
	fn len(&self) -> usize {
		self.total_rows - self.current_row
	}
}
