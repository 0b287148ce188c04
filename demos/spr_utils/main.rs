//! SPR (Sprite Container) CLI Utility
//!
//! A command-line tool for inspecting and extracting frames from Shandalar
//! SPR sprite containers.
//!
//! # Features
//!
//! - **unpack**: Extract all frames from an SPR file to PNG images with JSON metadata
//! - **info**: Display information about an SPR file
//!
//! # Metadata Format
//!
//! Frame metadata is stored in a JSON file with the following structure:
//! ```json
//! {
//!   "frame_count": 23,
//!   "frames": [
//!     {
//!       "index": 0,
//!       "width": 128,
//!       "height": 256,
//!       "top_blank_lines": 4,
//!       "visible_band_height": 248,
//!       "filename": "frame_000.png"
//!     }
//!   ]
//! }
//! ```
//!
//! # Palette
//!
//! SPR pixel data is palette-indexed. Pass a raw 768-byte RGB palette dump
//! with `--palette`; without one, frames are rendered with the same
//! grayscale ramp the original viewer defaulted to.
//!
//! # Usage
//!
//! ```bash
//! # Show container information
//! cargo run --example spr_utils -- info CARDART.SPR
//!
//! # Show per-frame header details
//! cargo run --example spr_utils -- info CARDART.SPR -d
//!
//! # Unpack all frames to PNG
//! cargo run --example spr_utils -- unpack CARDART.SPR -p GAME.PAL -o frames/
//! ```

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use image::{ImageBuffer, RgbaImage};
use log::{info, warn};
use serde::Serialize;
use shandalar_rs::prelude::file::{Palette, SprFile};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spr_utils")]
#[command(author = "shandalar-rs project")]
#[command(version = "1.0")]
#[command(about = "SPR sprite container utility - inspect and unpack SPR files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Unpack an SPR file to individual PNG images
	Unpack {
		/// Input SPR file path
		#[arg(value_name = "INPUT_SPR")]
		input: PathBuf,

		/// Output directory path (optional, defaults to `input_frames/`)
		#[arg(short, long, value_name = "OUTPUT_DIR")]
		output: Option<PathBuf>,

		/// Path to a raw 768-byte RGB palette dump
		#[arg(short, long, value_name = "PALETTE")]
		palette: Option<PathBuf>,

		/// Show verbose output
		#[arg(short, long)]
		verbose: bool,
	},

	/// Display information about an SPR file
	Info {
		/// Input SPR file path
		#[arg(value_name = "INPUT_SPR")]
		input: PathBuf,

		/// Show detailed frame information
		#[arg(short, long)]
		detailed: bool,
	},
}

/// Frame metadata for JSON serialization
#[derive(Debug, Clone, Serialize)]
struct FrameMetadata {
	/// Frame index
	index: usize,
	/// Frame width in pixels
	width: u16,
	/// Frame height in pixels
	height: u16,
	/// Leading fully-transparent scanlines
	top_blank_lines: u16,
	/// Scanlines carrying encoded pixel data
	visible_band_height: u16,
	/// Frame PNG filename
	filename: String,
}

/// Complete SPR metadata structure
#[derive(Debug, Clone, Serialize)]
struct SprMetadata {
	/// Total number of frames
	frame_count: usize,
	/// List of frame metadata
	frames: Vec<FrameMetadata>,
}

/// Load the palette, falling back to the viewer's grayscale default
fn load_palette(path: Option<PathBuf>) -> Result<Palette> {
	match path {
		Some(path) => {
			info!("loading palette from {}", path.display());
			Palette::from_file(&path)
				.with_context(|| format!("Failed to load palette {}", path.display()))
		}
		None => {
			warn!("no palette given, using grayscale ramp");
			Ok(Palette::grayscale())
		}
	}
}

/// Handle unpack command
fn handle_unpack(
	input: PathBuf,
	output: Option<PathBuf>,
	palette: Option<PathBuf>,
	verbose: bool,
) -> Result<()> {
	let output_dir = output.unwrap_or_else(|| {
		let stem = input.file_stem().map_or_else(|| "spr".to_string(), |s| s.to_string_lossy().to_lowercase());
		PathBuf::from(format!("{stem}_frames"))
	});
	fs::create_dir_all(&output_dir)?;

	let palette = load_palette(palette)?;
	let spr = SprFile::open(&input)?;

	println!("📦 Unpacking {} to {}", input.display(), output_dir.display());

	let mut frames = Vec::new();
	let decoded = spr.decode(&palette);

	for (index, raster) in decoded.rasters().iter().enumerate() {
		let filename = format!("frame_{index:03}.png");
		let img: RgbaImage = ImageBuffer::from_raw(
			u32::from(raster.width()),
			u32::from(raster.height()),
			raster.to_rgba(),
		)
		.context("Failed to create frame image")?;
		img.save(output_dir.join(&filename))?;

		if verbose {
			println!("   frame {index:3}: {}x{} -> {filename}", raster.width(), raster.height());
		}
		frames.push((index, filename));
	}

	// Headers come from a second walk so metadata survives even when the
	// container is only partially decodable.
	let mut metadata_frames = Vec::new();
	for (frame, (index, filename)) in spr.frames().flatten().zip(frames) {
		let header = frame.header();
		metadata_frames.push(FrameMetadata {
			index,
			width: header.width(),
			height: header.height(),
			top_blank_lines: header.top_blank_lines(),
			visible_band_height: header.visible_band_height(),
			filename,
		});
	}

	let metadata = SprMetadata {
		frame_count: metadata_frames.len(),
		frames: metadata_frames,
	};
	let json = serde_json::to_string_pretty(&metadata)?;
	fs::write(output_dir.join("metadata.json"), json)?;

	println!("✅ Unpacked {} frames", metadata.frame_count);

	if let Some(err) = decoded.error() {
		bail!("container damaged after frame {}: {err}", metadata.frame_count);
	}

	Ok(())
}

/// Handle info command
fn handle_info(input: PathBuf, detailed: bool) -> Result<()> {
	println!("📄 SPR File Information");
	println!("   File: {}", input.display());

	let spr = SprFile::open(&input)?;
	let file_size = fs::metadata(&input)?.len();

	let mut frames = Vec::new();
	let mut walk_error = None;
	for frame in spr.frames() {
		match frame {
			Ok(view) => frames.push(view),
			Err(err) => {
				walk_error = Some(err);
				break;
			}
		}
	}

	println!("\n📊 Summary:");
	println!("   Total frames: {}", frames.len());
	println!("   File size: {} bytes ({:.2} KB)", file_size, file_size as f64 / 1024.0);
	if let Some(err) = &walk_error {
		println!("   ⚠️  Walk stopped early: {err}");
	}

	if detailed && !frames.is_empty() {
		println!("\n📋 Frame Details:");
		println!(
			"   {:<5} {:<10} {:<12} {:<8} {:<8} {:<10}",
			"Index", "Size", "Block", "Blank", "Visible", "Reserved"
		);
		println!("   {}", "-".repeat(60));

		for (index, frame) in frames.iter().enumerate() {
			let header = frame.header();
			println!(
				"   {:<5} {:<10} {:<12} {:<8} {:<8} 0x{}",
				index,
				format!("{}x{}", header.width(), header.height()),
				header.block_size(),
				header.top_blank_lines(),
				header.visible_band_height(),
				hex::encode(header.reserved().to_le_bytes())
			);
		}
	}

	match walk_error {
		Some(err) => Err(err.into()),
		None => Ok(()),
	}
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	match cli.command {
		Commands::Unpack {
			input,
			output,
			palette,
			verbose,
		} => handle_unpack(input, output, palette, verbose),

		Commands::Info {
			input,
			detailed,
		} => handle_info(input, detailed),
	}
}
