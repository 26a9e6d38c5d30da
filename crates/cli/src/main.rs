#![deny(unsafe_code)]
//! CLI binary for the image-gen scene generator.
//!
//! Subcommands:
//! - `render <scene>`: draw a scene with a seed, write PNG
//! - `replay <seed.json>`: re-render from a saved seed file
//! - `record <scene>`: print the scene's draw calls as JSON
//! - `list`: print available scenes and palettes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use image_gen_core::{Palette, Seed};
use image_gen_scenes::SceneKind;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "image-gen", about = "Procedural scene image generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a scene and write a PNG snapshot.
    Render {
        /// Scene name (e.g. "mongo-export").
        scene: String,

        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 600)]
        width: u32,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: u32,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette name (refined, classic).
        #[arg(short, long, default_value = "refined")]
        palette: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Also write the seed as JSON next to the output.
        #[arg(long)]
        emit_seed: bool,
    },
    /// Re-render a scene from a seed JSON file.
    Replay {
        /// Path to a seed file written by `render --emit-seed`.
        seed: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Print the draw calls a scene issues, as JSON.
    Record {
        /// Scene name (e.g. "mongo-export").
        scene: String,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette name (refined, classic).
        #[arg(short, long, default_value = "refined")]
        palette: String,
    },
    /// List available scenes and palettes.
    List,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn render_to(seed: &Seed, output: &Path, json: bool) -> Result<(), CliError> {
    let surface = image_gen_scenes::render(seed)?;
    image_gen_scenes::snapshot::write_png(&surface, output)?;
    info!(output = %output.display(), "wrote snapshot");

    if json {
        let info = serde_json::json!({
            "scene": seed.scene,
            "width": seed.width,
            "height": seed.height,
            "palette": seed.palette,
            "seed": seed.seed,
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} ({}x{}, {}, seed {}) -> {}",
            seed.scene,
            seed.width,
            seed.height,
            seed.palette,
            seed.seed,
            output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let scenes = SceneKind::list_scenes();
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "scenes": scenes,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Scenes:");
                for name in scenes {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Render {
            scene,
            width,
            height,
            seed,
            palette,
            output,
            emit_seed,
        } => {
            let seed = Seed::new(&scene, seed)
                .with_size(width, height)
                .with_palette(&palette);
            render_to(&seed, &output, cli.json)?;

            if emit_seed {
                let path = output.with_extension("json");
                let text = serde_json::to_string_pretty(&seed)?;
                fs::write(&path, text)
                    .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
                info!(path = %path.display(), "wrote seed");
            }
        }
        Command::Replay { seed, output } => {
            let text = fs::read_to_string(&seed)
                .map_err(|e| CliError::Io(format!("{}: {e}", seed.display())))?;
            let seed: Seed = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid seed file: {e}")))?;
            render_to(&seed, &output, cli.json)?;
        }
        Command::Record {
            scene,
            seed,
            palette,
        } => {
            let seed = Seed::new(&scene, seed).with_palette(&palette);
            let calls = image_gen_scenes::record(&seed)?;
            if cli.json {
                let info = serde_json::json!({
                    "scene": seed.scene,
                    "seed": seed.seed,
                    "calls": calls,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&calls)?);
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
