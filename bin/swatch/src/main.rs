//! Search for the ratios of a set of base colors that best match a target and
//! render the result as a swatch strip.
//!
//! The top band shows every base color with a width proportional to its
//! share, the bottom band shows the target on the left and the best blend on
//! the right.

use anyhow::Context;
use chromix::{Color, Component, Mix, MixConfig, NamedColor, SearchOptions};
use clap::Parser;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 1000;
const BAND_HEIGHT: u32 = 100;

#[derive(Debug, Parser)]
#[command(about = "Approximate a color with a mix of base colors")]
struct Args {
    /// Color to approximate, as `#RRGGBB`.
    #[arg(long)]
    target: String,

    /// Base color as `NAME=#RRGGBB` or `#RRGGBB`. Repeat for every color.
    #[arg(long = "base", required = true)]
    bases: Vec<String>,

    /// Upper bound on the number of search passes.
    #[arg(long, default_value_t = 1000)]
    max_passes: usize,

    /// Where to write the swatch image.
    #[arg(long, default_value = "swatch.png")]
    output: String,
}

fn parse_base(arg: &str) -> anyhow::Result<NamedColor> {
    let (name, hex) = match arg.split_once('=') {
        Some((name, hex)) => (name.to_owned(), hex),
        None => (arg.to_owned(), arg),
    };

    let color = Color::from_hex(hex).with_context(|| format!("base color {arg:?}"))?;
    Ok(NamedColor::new(name, color))
}

fn pixel(color: Color) -> Rgb<u8> {
    Rgb([color.red, color.green, color.blue])
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let target = Color::from_hex(&args.target).context("target color")?;
    let bases = args
        .bases
        .iter()
        .map(|arg| parse_base(arg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let config = MixConfig {
        search: SearchOptions {
            max_passes: args.max_passes,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut mix = Mix::with_config(config)?;
    let outcome = mix.find_best_mix(target, &bases)?;

    tracing::info!(
        target = %target,
        result = %outcome.blend.color,
        distance = outcome.distance,
        passes = outcome.passes,
        "Search complete"
    );
    for share in &outcome.blend.shares {
        tracing::info!(
            name = %share.name,
            ratio = share.ratio,
            percentage = share.percentage,
            "Share"
        );
    }

    // Column boundaries of every base color in the top band.
    let mut edges = vec![];
    let mut acc: Component = 0.0;
    for share in &outcome.blend.shares {
        acc += share.percentage;
        edges.push(((acc / 100.0 * WIDTH as Component).round() as u32, share.color));
    }

    let mut img = RgbImage::new(WIDTH, BAND_HEIGHT * 2);
    for (x, y, p) in img.enumerate_pixels_mut() {
        *p = if y < BAND_HEIGHT {
            edges
                .iter()
                .find(|(edge, _)| x < *edge)
                .map(|(_, color)| pixel(*color))
                .unwrap_or_else(|| pixel(outcome.blend.color))
        } else if x < WIDTH / 2 {
            pixel(target)
        } else {
            pixel(outcome.blend.color)
        };
    }

    img.save(&args.output)
        .with_context(|| format!("could not write image to {}", args.output))?;

    tracing::info!(path = %args.output, "Wrote swatch");

    Ok(())
}
