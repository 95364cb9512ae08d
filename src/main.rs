use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retro_quant::{DistanceMetric, DitherMode, ModeRegistry, DEFAULT_DEPTH, DEFAULT_MODE};
use retrospex::models::load_registry;
use retrospex::services::{ConvertOptions, Converter};

#[derive(Parser)]
#[command(name = "retrospex")]
#[command(about = "Convert images into Commodore 64 graphics modes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image and write the result as PNG
    Convert {
        /// Input image (PNG, JPEG or GIF)
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long, default_value = "out.png")]
        output: PathBuf,

        /// Graphics mode (see `retrospex modes`)
        #[arg(short, long, default_value = DEFAULT_MODE)]
        mode: String,

        /// Ordered dither matrix: none, bayer2, bayer4 or bayer8
        #[arg(long, default_value = "bayer4", value_parser = parse_dither)]
        dither: DitherMode,

        /// Dither strength
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: f32,

        /// Color distance: rgb or oklab
        #[arg(long, default_value = "rgb", value_parser = parse_metric)]
        metric: DistanceMetric,

        /// YAML file with additional modes
        #[arg(long, env = "RETROSPEX_MODES")]
        modes: Option<PathBuf>,
    },
    /// List available graphics modes
    Modes {
        /// YAML file with additional modes
        #[arg(long, env = "RETROSPEX_MODES")]
        modes: Option<PathBuf>,
    },
}

fn parse_dither(s: &str) -> Result<DitherMode, String> {
    DitherMode::from_name(s)
        .ok_or_else(|| format!("unknown dither '{s}' (expected none, bayer2, bayer4 or bayer8)"))
}

fn parse_metric(s: &str) -> Result<DistanceMetric, String> {
    DistanceMetric::from_name(s).ok_or_else(|| format!("unknown metric '{s}' (expected rgb or oklab)"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            mode,
            dither,
            depth,
            metric,
            modes,
        }) => {
            init_logging();
            let options = ConvertOptions {
                mode,
                dither,
                depth,
                metric,
            };
            run_convert_command(&input, &output, &options, modes.as_deref())
        }
        Some(Commands::Modes { modes }) => {
            init_logging();
            run_modes_command(modes.as_deref())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "retrospex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Convert one image; the output file is written only on full success
fn run_convert_command(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    modes_file: Option<&Path>,
) -> anyhow::Result<()> {
    let registry = load_registry(modes_file)?;
    let converter = Converter::new(&registry);
    converter.convert_to_file(input, output, options)?;
    println!("{}", output.display());
    Ok(())
}

fn run_modes_command(modes_file: Option<&Path>) -> anyhow::Result<()> {
    let registry = load_registry(modes_file)?;
    print_modes(&registry);
    Ok(())
}

fn print_modes(registry: &ModeRegistry) {
    for (name, mode) in registry.iter() {
        let marker = if name == DEFAULT_MODE { " (default)" } else { "" };
        println!(
            "{name}{marker}: {}x{}, pixel width {}, {} colors",
            mode.width(),
            mode.height(),
            mode.pixel_width(),
            mode.palette().len()
        );
        for layer in mode.layers() {
            let patterns: Vec<String> = layer
                .bit_patterns()
                .iter()
                .map(|p| p.to_string())
                .collect();
            println!(
                "    {}x{} cells, patterns [{}]{}",
                layer.cell_width(),
                layer.cell_height(),
                patterns.join(", "),
                if layer.is_terminal() { ", terminal" } else { "" }
            );
        }
    }
}

/// Show version, environment and usage when run without a subcommand
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let modes_file = std::env::var("RETROSPEX_MODES").ok();

    println!("Retrospex v{VERSION}");
    println!("Convert images into Commodore 64 graphics modes\n");

    println!("Environment Variables:");
    println!(
        "  RETROSPEX_MODES = {}",
        modes_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG        = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("retrospex=info (default)")
    );

    let builtin = ModeRegistry::builtin();
    println!("\nBuilt-in modes:");
    println!(
        "  {}",
        builtin.names().collect::<Vec<_>>().join(", ")
    );

    println!("\nCommands:");
    println!("  retrospex convert <INPUT> [-o out.png] [-m {DEFAULT_MODE}]   Convert an image");
    println!("  retrospex modes                                     List graphics modes");
    println!("\nRun 'retrospex --help' for more options.");
}
