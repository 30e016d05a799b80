//! Toolbelt CLI
//!
//! Shell access to a few of the library helpers.
//!
//! # Usage
//!
//! ```bash
//! toolbelt slug "Crème Brûlée!"                 # creme-brulee
//! toolbelt truncate "hello world" --length 5    # hello...
//! toolbelt substitute 'Hi {$name}' --var name=Ada
//! toolbelt color '#FFE700FF' --gray
//! toolbelt color '#000000FF' --mix '#FFFFFFFF' --amount 0.25
//! toolbelt shuffle a b c d --sample 2 --seed 7
//! toolbelt ease 0 10 0.25 --curve smooth
//! toolbelt distance 0 0 3 4
//! toolbelt config --init                        # write defaults to disk
//! ```
//!
//! Settings (default truncate length, RNG seed, log level) are read from
//! `config.json` in the XDG config directory.

use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::process::ExitCode;
use toolbelt::config::{self, ToolbeltConfig};
use toolbelt::text::{TextExt, slugify, substitute_variables};
use toolbelt::{Color, Easing, Point, SequenceExt, random};

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(about = "Small helpers for text, numbers, colors and collections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text to a URL-safe slug
    Slug { text: String },
    /// Cut text to a number of characters
    Truncate {
        text: String,
        /// Maximum characters to keep (default from config)
        #[arg(short, long)]
        length: Option<usize>,
        /// Do not append "..." when text is cut
        #[arg(long)]
        no_ellipsis: bool,
    },
    /// Replace {$name} placeholders in a template
    Substitute {
        template: String,
        /// Placeholder value, repeatable
        #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
    /// Inspect a #RRGGBBAA color
    Color {
        hex: String,
        /// Print the grayscale equivalent
        #[arg(long)]
        gray: bool,
        /// Interpolate toward another #RRGGBBAA color
        #[arg(long, value_name = "HEX")]
        mix: Option<String>,
        /// Interpolation amount for --mix (clamped to 0..1)
        #[arg(long, default_value_t = 0.5)]
        amount: f32,
    },
    /// Print items in random order
    Shuffle {
        items: Vec<String>,
        /// Keep only this many items
        #[arg(short, long)]
        sample: Option<usize>,
        /// RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate an easing curve between two values
    Ease {
        #[arg(allow_negative_numbers = true)]
        from: f64,
        #[arg(allow_negative_numbers = true)]
        to: f64,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// linear, smooth or ping-pong
        #[arg(short, long, default_value_t = Easing::Linear)]
        curve: Easing,
    },
    /// Euclidean, squared and Manhattan distance between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
    },
    /// Show the active configuration
    Config {
        /// Print only the config file location
        #[arg(long)]
        path: bool,
        /// Write the current settings (defaults if none) to disk
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (config, load_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (ToolbeltConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = load_error {
        tracing::warn!("Ignoring invalid config, using defaults: {e}");
    }

    match handle_cli(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn handle_cli(
    command: Commands,
    config: &ToolbeltConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Slug { text } => match slugify(&text) {
            Some(slug) => println!("{slug}"),
            None => return Err(format!("Cannot make a slug from '{text}'").into()),
        },
        Commands::Truncate {
            text,
            length,
            no_ellipsis,
        } => {
            let length = length.unwrap_or(config.truncate_length);
            let add_ellipsis = config.add_ellipsis && !no_ellipsis;
            println!("{}", text.truncated(length, add_ellipsis));
        }
        Commands::Substitute { template, vars } => {
            let mut values = BTreeMap::new();
            for var in vars {
                let Some((name, value)) = var.split_once('=') else {
                    return Err(format!("Invalid variable '{var}', expected NAME=VALUE").into());
                };
                values.insert(name.to_string(), value.to_string());
            }
            println!("{}", substitute_variables(&template, &values));
        }
        Commands::Color {
            hex,
            gray,
            mix,
            amount,
        } => {
            let color = parse_color(&hex)?;
            let color = match mix {
                Some(other) => color.lerp(&parse_color(&other)?, amount),
                None => color,
            };
            let color = if gray { color.grayscale() } else { color };
            println!("{color}");
            println!(
                "rgba({:.3}, {:.3}, {:.3}, {:.3})",
                color.red, color.green, color.blue, color.alpha
            );
        }
        Commands::Shuffle {
            items,
            sample,
            seed,
        } => {
            let mut rng = random::seeded(seed.or(config.seed));
            let picked = match sample {
                Some(count) => items.sample(count, &mut rng),
                None => items.shuffled(&mut rng),
            };
            for item in picked {
                println!("{item}");
            }
        }
        Commands::Ease {
            from,
            to,
            amount,
            curve,
        } => {
            tracing::debug!("Evaluating {curve} from {from} to {to} at {amount}");
            println!("{}", curve.apply(from, to, amount));
        }
        Commands::Distance { x1, y1, x2, y2 } => {
            let a = Point::new(x1, y1);
            let b = Point::new(x2, y2);
            println!("euclidean: {}", a.distance(&b));
            println!("squared:   {}", a.distance_squared(&b));
            println!("manhattan: {}", a.manhattan_distance(&b));
        }
        Commands::Config { path, init } => {
            let location = config::config_path()
                .ok_or("No home directory: cannot determine config location")?;
            if init {
                config::save_config(config)?;
                println!("Wrote {}", location.display());
            } else if path {
                println!("{}", location.display());
            } else {
                println!("{}", toolbelt::json::encode_pretty(config)?);
            }
        }
    }
    Ok(())
}

fn parse_color(hex: &str) -> Result<Color, String> {
    Color::from_hex(hex).ok_or_else(|| format!("Invalid color '{hex}', expected #RRGGBBAA"))
}
