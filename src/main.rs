use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use molsketch::config::{ColorSpec, Config};
use molsketch::draw::{Transform, render::fit_transform, render_frame_png};
use molsketch::input::{KeyCode, KeyTable};
use molsketch::scene::Scene;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "molsketch")]
#[command(
    version,
    about = "Annotation and key classification tools for chemical structure editors"
)]
struct Cli {
    /// Read configuration from this file instead of ~/.config/molsketch/config.toml
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify browser key codes (or key names); prints the whole table when none are given
    Keys {
        /// Numeric key codes or key names
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },
    /// Render a scene file of annotations to PNG
    Render {
        /// Scene file (TOML)
        #[arg(long, short = 's', value_name = "FILE")]
        scene: PathBuf,

        /// Output PNG path
        #[arg(long, short = 'o', value_name = "FILE")]
        output: PathBuf,

        #[arg(long, default_value_t = 640)]
        width: i32,

        #[arg(long, default_value_t = 480)]
        height: i32,

        /// Scale factor applied to model coordinates
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,

        /// Fit all annotations into the image, ignoring --zoom
        #[arg(long)]
        fit: bool,

        /// Background color name (e.g. "white"); transparent when omitted
        #[arg(long, value_name = "COLOR")]
        background: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Keys { keys } => print_keys(&config.key_table()?, &keys),
        Command::Render {
            scene,
            output,
            width,
            height,
            zoom,
            fit,
            background,
        } => {
            if !(zoom.is_finite() && zoom > 0.0) {
                return Err(anyhow::anyhow!("--zoom must be a positive number"));
            }

            let scene = Scene::load(&scene)?;
            let frame = scene
                .build_frame(&config)
                .context("Scene contains invalid geometry")?;

            let transform = match (fit, frame.bounds()) {
                (true, Some(bounds)) => fit_transform(&bounds, width as f64, height as f64, 16.0),
                _ => Transform::identity().scaled(zoom),
            };
            let background = background.map(|name| ColorSpec::Name(name).to_color());

            let png = render_frame_png(&frame, &transform, width, height, background)?;
            std::fs::write(&output, png)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            log::info!("Rendered {} annotations to {}", frame.len(), output.display());
            println!("Wrote {}", output.display());
            Ok(())
        }
    }
}

fn print_keys(table: &KeyTable, keys: &[String]) -> Result<()> {
    if keys.is_empty() {
        for key in table.iter() {
            print_key(key);
        }
        return Ok(());
    }

    for arg in keys {
        let key = match arg.parse::<u32>() {
            Ok(code) => table.lookup(code),
            Err(_) => table
                .find_by_name(arg)
                .cloned()
                .with_context(|| format!("Unknown key name '{}'", arg))?,
        };
        print_key(&key);
    }
    Ok(())
}

fn print_key(key: &KeyCode) {
    let categories = key.categories().names();
    let categories = if categories.is_empty() {
        "-".to_string()
    } else {
        categories.join(",")
    };
    println!("{}\t{}\t{}", key.code(), key.name(), categories);
}
