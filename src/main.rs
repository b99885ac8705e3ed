//! col-to-fit CLI
//!
//! Usage:
//!   col-to-fit [OPTIONS]
//!
//! Options:
//!   -c, --class-name <NAME>  Styling class for the root element
//!   -p, --props <JSON>       Icon props as JSON, e.g. '{"className":"icon-lg"}'
//!   -o, --png <FILE>         Write a PNG instead of printing markup
//!   -s, --size <PX>          PNG size in pixels [default: 24]
//!   --color <RRGGBB>         Color for `currentColor` in the PNG [default: 000000]
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use col_to_fit_icon::{
    IconProps, RasterOptions, RenderError, col_to_fit_icon, encode_png, rasterize,
};

#[derive(Parser)]
#[command(name = "col-to-fit")]
#[command(about = "Render the \"column to fit\" SVG icon")]
struct Cli {
    /// Styling class for the root element
    #[arg(short, long, conflicts_with = "props")]
    class_name: Option<String>,

    /// Icon props as JSON
    #[arg(short, long)]
    props: Option<String>,

    /// Write a PNG to this file instead of printing markup
    #[arg(short = 'o', long)]
    png: Option<PathBuf>,

    /// PNG size in pixels
    #[arg(short, long, default_value_t = 24)]
    size: u32,

    /// Hex color (RRGGBB) that `currentColor` resolves to in the PNG
    #[arg(long, default_value = "000000", value_parser = parse_color)]
    color: [u8; 3],
}

fn parse_color(s: &str) -> Result<[u8; 3], String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("expected RRGGBB, got '{s}'"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("bad color '{s}': {e}"))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

fn props_from_cli(cli: &Cli) -> Result<IconProps, RenderError> {
    if let Some(json) = &cli.props {
        return Ok(IconProps::from_json(json)?);
    }
    Ok(match &cli.class_name {
        Some(class_name) => IconProps::new().with_class_name(class_name),
        None => IconProps::new(),
    })
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let props = props_from_cli(cli)?;
    let svg = col_to_fit_icon(&props);

    match &cli.png {
        Some(path) => {
            let image = rasterize(&svg, &RasterOptions::new(cli.size, cli.color))?;
            let png = encode_png(&image)?;
            fs::write(path, png)?;
            info!("wrote {}x{} icon to {}", image.width(), image.height(), path.display());
        }
        None => println!("{svg}"),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
