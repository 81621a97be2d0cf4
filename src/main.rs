use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

mod command;
mod config;
mod domain;
mod error;
mod format;
mod geometry;
mod predicates;
mod query;

use command::{execute, parse_command};
use config::FileConfig;
use domain::Polygon;
use format::load_polygons;

/// Answer geometric queries over a collection of 2D integer polygons
///
/// Polygons are read from a text file, one per line, in the form
/// `<count> (x1;y1) (x2;y2) ... (xN;yN)`. Commands are then read from a
/// file or stdin, one per line, and each produces exactly one output line.
///
/// Examples:
///   # Query shapes.txt interactively
///   polyquery shapes.txt
///
///   # Run a prepared query script
///   polyquery shapes.txt --commands queries.txt
///
///   # Start with an empty collection and build it up with ECHO
///   polyquery
#[derive(Parser, Debug)]
#[command(name = "polyquery")]
#[command(version, about, long_about = None)]
struct Args {
    /// Polygons file (optional; starts with an empty collection if omitted)
    polygons: Option<PathBuf>,

    /// Path to config file (optional, auto-searches polyquery.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Commands file (defaults to stdin)
    #[arg(long)]
    commands: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let polygons_path = args
        .polygons
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.polygons.clone()));
    let commands_path = args
        .commands
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.commands.clone()));
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let mut collection: Vec<Polygon> = match polygons_path {
        Some(ref path) => {
            let (polygons, skipped) = load_polygons(path)
                .with_context(|| format!("Failed to load polygons from {}", path.display()))?;
            if verbose {
                eprintln!(
                    "Loaded {} polygons from {} ({} malformed lines skipped)",
                    polygons.len(),
                    path.display(),
                    skipped
                );
            }
            polygons
        }
        None => {
            if verbose {
                eprintln!("No polygons file given; starting with an empty collection");
            }
            Vec::new()
        }
    };

    let reader: Box<dyn BufRead> = match commands_path {
        Some(ref path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open commands file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    run_session(&mut collection, reader, &mut std::io::stdout())
}

/// Read-eval-print loop: one command per line, one line of output per
/// command. Every failure is command-scoped; the loop always continues to
/// the next line.
fn run_session(
    collection: &mut Vec<Polygon>,
    reader: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read command line")?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line).and_then(|cmd| execute(collection, cmd)) {
            Ok(output) => writeln!(out, "{}", output)?,
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
    Ok(())
}
