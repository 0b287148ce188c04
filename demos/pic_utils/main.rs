//! PIC (Single Image) CLI Utility
//!
//! A command-line tool for inspecting the inline palette segment of
//! Shandalar PIC files. The pixel codec itself is still undocumented, so
//! this tool reports the palette layer only.
//!
//! # Features
//!
//! - **info**: Display palette segment information for a PIC file
//! - **dump-palette**: Write the effective palette as a raw 768-byte RGB dump
//!
//! # Usage
//!
//! ```bash
//! # Show palette segment information
//! cargo run --example pic_utils -- info TITLE.PIC
//!
//! # Export the effective palette for use with spr_utils
//! cargo run --example pic_utils -- dump-palette TITLE.PIC -o title.pal
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use shandalar_rs::prelude::file::{Palette, PaletteSegment};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pic_utils")]
#[command(author = "shandalar-rs project")]
#[command(version = "1.0")]
#[command(about = "PIC image utility - inspect PIC palette segments", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display palette segment information for a PIC file
	Info {
		/// Input PIC file path
		#[arg(value_name = "INPUT_PIC")]
		input: PathBuf,

		/// Number of palette entries to print
		#[arg(short, long, default_value_t = 8)]
		count: usize,
	},

	/// Write the effective palette as a raw 768-byte RGB dump
	DumpPalette {
		/// Input PIC file path
		#[arg(value_name = "INPUT_PIC")]
		input: PathBuf,

		/// Output palette file path
		#[arg(short, long, value_name = "OUTPUT_PAL")]
		output: PathBuf,
	},
}

/// Handle info command
fn handle_info(input: PathBuf, count: usize) -> Result<()> {
	println!("📄 PIC File Information");
	println!("   File: {}", input.display());

	let data = fs::read(&input).with_context(|| format!("Failed to read {}", input.display()))?;
	println!("   File size: {} bytes", data.len());

	let Some(segment) = PaletteSegment::parse(&data)? else {
		println!("\n   No inline palette segment (caller palette stands)");
		return Ok(());
	};

	println!("\n📊 Palette Segment:");
	println!("   Channel scale: {}", segment.scale());
	println!("   Index range: {}-{} ({} colors)", segment.start(), segment.end(), segment.colors().len());
	println!("   Segment span: {} bytes", segment.len_bytes());
	println!("   Pixel stream: {} bytes", data.len() - segment.len_bytes());

	let effective = segment.apply(&Palette::grayscale());
	println!("\n📋 First colors (effective palette):");
	for (index, color) in effective
		.iter_indexed()
		.skip(usize::from(segment.start()))
		.take(count.min(segment.colors().len()))
	{
		println!("   [{index:3}] {color}");
	}

	Ok(())
}

/// Handle dump-palette command
fn handle_dump_palette(input: PathBuf, output: PathBuf) -> Result<()> {
	let data = fs::read(&input).with_context(|| format!("Failed to read {}", input.display()))?;

	let base = Palette::grayscale();
	let palette = match PaletteSegment::parse(&data)? {
		Some(segment) => segment.apply(&base),
		None => {
			warn!("no palette segment in {}, dumping grayscale base", input.display());
			base
		}
	};

	let mut raw = Vec::with_capacity(Palette::RAW_RGB_SIZE);
	for color in palette.iter() {
		raw.extend_from_slice(&[color.r, color.g, color.b]);
	}
	fs::write(&output, raw)?;

	println!("✅ Wrote {} to {}", palette, output.display());
	Ok(())
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	match cli.command {
		Commands::Info {
			input,
			count,
		} => handle_info(input, count),

		Commands::DumpPalette {
			input,
			output,
		} => handle_dump_palette(input, output),
	}
}
