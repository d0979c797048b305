//! blurhash - Validate, inspect and decode BlurHash placeholders
//!
//! A command-line front end for the `blurhash-decoder` crate.

use anyhow::{bail, Context, Result};
use blurhash_decoder::{
    average_color, decode_with, Blurhash, BlurhashHeader, DecodeOptions, PixelFormat,
    DEFAULT_PUNCH,
};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "blurhash")]
#[command(version)]
#[command(about = "Validate, inspect and decode BlurHash placeholders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether one or more hashes are well-formed
    Validate {
        /// Hashes to check
        #[arg(required = true)]
        hashes: Vec<String>,
    },

    /// Print the component grid, maximum AC value and average colour of a hash
    Info {
        /// The hash to inspect
        hash: String,
    },

    /// Decode a hash into an image
    Decode {
        /// The hash to decode
        hash: String,

        /// Output width in pixels
        #[arg(short = 'W', long, default_value = "32")]
        width: u32,

        /// Output height in pixels
        #[arg(short = 'H', long, default_value = "32")]
        height: u32,

        /// Contrast multiplier for the AC components
        #[arg(short, long, env = "BLURHASH_PUNCH", default_value_t = DEFAULT_PUNCH)]
        punch: f64,

        /// Output image file, format from extension (default: raw pixels to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit RGB instead of RGBA
        #[arg(long)]
        rgb: bool,
    },
}

/// One line per hash: `valid` or `invalid: <reason>`.
fn validation_report(hash: &str) -> (bool, String) {
    match Blurhash::parse(hash) {
        Ok(_) => (true, format!("{hash}: valid")),
        Err(e) => (false, format!("{hash}: invalid: {e}")),
    }
}

fn format_info(header: &BlurhashHeader, average: [u8; 3]) -> String {
    let [r, g, b] = average;
    format!(
        "components: {}x{}\nmax AC: {} ({:.6})\naverage colour: #{:02x}{:02x}{:02x}",
        header.components_x,
        header.components_y,
        header.quantised_max_ac,
        header.max_ac(),
        r,
        g,
        b
    )
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Validate { hashes } => {
            let mut invalid = 0usize;
            for hash in &hashes {
                let (ok, line) = validation_report(hash);
                if !ok {
                    invalid += 1;
                }
                println!("{line}");
            }
            if invalid > 0 {
                bail!("{invalid} of {} hashes are invalid", hashes.len());
            }
        }

        Commands::Info { hash } => {
            let parsed =
                Blurhash::parse(&hash).with_context(|| format!("Failed to parse '{hash}'"))?;
            let average = average_color(&hash)?;
            println!("{}", format_info(parsed.header(), average));
        }

        Commands::Decode {
            hash,
            width,
            height,
            punch,
            output,
            rgb,
        } => {
            let format = if rgb {
                PixelFormat::Rgb
            } else {
                PixelFormat::Rgba
            };
            let options = DecodeOptions::default()
                .with_punch(punch)
                .with_format(format);
            let pixels = decode_with(&hash, width, height, &options)
                .with_context(|| format!("Failed to decode '{hash}'"))?;
            tracing::info!(width, height, punch, bytes = pixels.len(), "decoded");

            match output {
                Some(path) => {
                    let saved = match format {
                        PixelFormat::Rgba => image::RgbaImage::from_raw(width, height, pixels)
                            .context("Decoded buffer does not match dimensions")?
                            .save(&path),
                        PixelFormat::Rgb => image::RgbImage::from_raw(width, height, pixels)
                            .context("Decoded buffer does not match dimensions")?
                            .save(&path),
                    };
                    saved.with_context(|| format!("Failed to write '{}'", path.display()))?;
                    eprintln!("Decoded {}x{} -> '{}'", width, height, path.display());
                }
                None => {
                    io::stdout()
                        .lock()
                        .write_all(&pixels)
                        .context("Failed to write pixels to stdout")?;
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blurhash=warn,blurhash_decoder=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    run(Cli::parse())
}
