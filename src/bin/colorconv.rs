//! Command-line interface for color_space_converter
//!
//! Converts between RGB, CMYK and hex codes and prints isolated-channel
//! preview colors. Inputs left out fall back to the configured defaults.

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use color_space_converter::{
    Channel, ColorConverter, ConversionError, ConversionReport, InkColor, LightColor,
    PlaygroundConfig,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "colorconv",
    about = "Explore conversions between RGB, CMYK and hex color codes",
    version
)]
struct Cli {
    /// JSON configuration with default inputs and rounding rule
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the full conversion report as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert RGB (0-255) to CMYK percentages
    ToCmyk {
        /// Red, green and blue; omit all three to use the configured defaults
        #[arg(num_args = 0..=3, value_names = ["R", "G", "B"], allow_negative_numbers = true)]
        rgb: Vec<i32>,
    },

    /// Convert CMYK percentages (0-100) to RGB
    ToRgb {
        /// Cyan, magenta, yellow and key; omit all four to use the configured defaults
        #[arg(num_args = 0..=4, value_names = ["C", "M", "Y", "K"], allow_negative_numbers = true)]
        cmyk: Vec<f64>,
    },

    /// Print the hex code of an RGB color
    Hex {
        #[arg(allow_negative_numbers = true)]
        red: i32,
        #[arg(allow_negative_numbers = true)]
        green: i32,
        #[arg(allow_negative_numbers = true)]
        blue: i32,
    },

    /// Convert a hex code (#RRGGBB) to RGB and CMYK
    ParseHex {
        /// Hex color, with or without the leading '#'
        hex: String,
    },

    /// Show the swatch color for a single channel with the others at zero
    Preview {
        /// Channel name: red, green, blue, cyan, magenta, yellow or key
        channel: Channel,

        /// Channel value (0-255 for RGB, 0-100 for CMYK)
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Write the default configuration as JSON
    InitConfig {
        /// Output file path
        path: PathBuf,
    },
}

fn main() {
    init_logging();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("Error: {:#}", error);
        if let Some(conversion) = error.downcast_ref::<ConversionError>() {
            if conversion.is_recoverable() {
                eprintln!("Suggestion: {}", conversion.user_message());
            }
        }
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorconv=info,color_space_converter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PlaygroundConfig::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => PlaygroundConfig::default(),
    };
    let converter = config.converter();
    debug!(rounding = ?converter.rounding(), "converter ready");

    match cli.command {
        Commands::ToCmyk { rgb } => {
            let light = resolve_light(&rgb, &config)?;
            print_report(&converter.report_from_light(light), cli.json)?;
        }
        Commands::ToRgb { cmyk } => {
            let ink = resolve_ink(&cmyk, &config)?;
            print_report(&converter.report_from_ink(ink), cli.json)?;
        }
        Commands::Hex { red, green, blue } => {
            let light = LightColor::new(red, green, blue)?;
            println!("{}", converter.to_hex(light));
        }
        Commands::ParseHex { hex } => {
            let light = converter.parse_hex(&hex)?;
            print_report(&converter.report_from_light(light), cli.json)?;
        }
        Commands::Preview { channel, value } => {
            print_preview(&converter, channel, value, cli.json)?;
        }
        Commands::InitConfig { path } => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory {}", parent.display()))?;
            }
            PlaygroundConfig::default().to_json_file(&path)?;
            info!(path = %path.display(), "configuration saved");
        }
    }

    Ok(())
}

/// RGB inputs from the command line, or the configured defaults when none are given
fn resolve_light(args: &[i32], config: &PlaygroundConfig) -> Result<LightColor> {
    match *args {
        [] => Ok(config.light_defaults),
        [red, green, blue] => Ok(LightColor::new(red, green, blue)?),
        _ => bail!("expected 0 or 3 RGB values, got {}", args.len()),
    }
}

/// CMYK inputs from the command line, or the configured defaults when none are given
fn resolve_ink(args: &[f64], config: &PlaygroundConfig) -> Result<InkColor> {
    match *args {
        [] => Ok(config.ink_defaults),
        [cyan, magenta, yellow, key] => Ok(InkColor::new(cyan, magenta, yellow, key)?),
        _ => bail!("expected 0 or 4 CMYK values, got {}", args.len()),
    }
}

fn print_report(report: &ConversionReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{}", report.summary());
    println!("Swatch: {}", report.light);
    println!("HEX Code: {}", report.hex);
    Ok(())
}

fn print_preview(converter: &ColorConverter, channel: Channel, value: f64, json: bool) -> Result<()> {
    let swatch = converter.channel_preview(channel, value)?;
    let hex = converter.to_hex(swatch);

    if json {
        let body = serde_json::json!({
            "channel": channel,
            "value": value,
            "swatch": swatch,
            "hex": hex,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{} preview: {} ({})", channel, swatch, hex);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_light_defaults() {
        let config = PlaygroundConfig {
            light_defaults: LightColor::from_rgb(1, 2, 3),
            ..PlaygroundConfig::default()
        };
        assert_eq!(resolve_light(&[], &config).unwrap(), LightColor::from_rgb(1, 2, 3));
        assert_eq!(
            resolve_light(&[10, 20, 30], &config).unwrap(),
            LightColor::from_rgb(10, 20, 30)
        );
    }

    #[test]
    fn test_resolve_light_partial_count() {
        let config = PlaygroundConfig::default();
        let err = resolve_light(&[1, 2], &config).unwrap_err();
        assert_eq!(err.to_string(), "expected 0 or 3 RGB values, got 2");
        assert!(resolve_light(&[1, 2, 3, 4], &config).is_err());
    }

    #[test]
    fn test_resolve_light_out_of_range() {
        let config = PlaygroundConfig::default();
        let err = resolve_light(&[256, 0, 0], &config).unwrap_err();
        match err.downcast_ref::<ConversionError>() {
            Some(ConversionError::OutOfRange { channel, value }) => {
                assert_eq!(*channel, Channel::Red);
                assert_eq!(*value, 256.0);
            }
            other => panic!("Expected OutOfRange, got: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_ink_defaults() {
        let config = PlaygroundConfig::default();
        assert_eq!(resolve_ink(&[], &config).unwrap(), config.ink_defaults);
        assert_eq!(
            resolve_ink(&[0.0, 0.0, 0.0, 100.0], &config).unwrap(),
            InkColor::KEY_BLACK
        );
    }

    #[test]
    fn test_resolve_ink_partial_count() {
        let config = PlaygroundConfig::default();
        let err = resolve_ink(&[10.0, 20.0, 30.0], &config).unwrap_err();
        assert_eq!(err.to_string(), "expected 0 or 4 CMYK values, got 3");
    }

    #[test]
    fn test_resolve_ink_out_of_range() {
        let config = PlaygroundConfig::default();
        let err = resolve_ink(&[-1.0, 0.0, 0.0, 0.0], &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConversionError>(),
            Some(ConversionError::OutOfRange { channel: Channel::Cyan, .. })
        ));
    }

    #[test]
    fn test_resolve_ink_normalizes_negative_zero() {
        let config = PlaygroundConfig::default();
        let ink = resolve_ink(&[-0.0, 0.0, 0.0, 0.0], &config).unwrap();
        assert_eq!(ink.to_string(), "C=0%, M=0%, Y=0%, K=0%");
    }
}
