//! Headless Life Runner
//!
//! Seeds a board from a preset or a random soup, advances it and prints the
//! final generation as text or JSON.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use torus_life::core::error::{LifeError, Result};
use torus_life::{Board, BoardSnapshot, Coord, GenerationReport, PatternLibrary, SimulationConfig};

/// Headless Life Runner - run a toroidal Game of Life board without a UI
#[derive(Parser, Debug)]
#[command(name = "life_runner")]
#[command(about = "Seed a toroidal Game of Life board, advance it and print the result")]
struct Args {
    /// TOML config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra pattern definitions (TOML) to register alongside the presets
    #[arg(long)]
    patterns: Option<PathBuf>,

    /// Board height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Board width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Preset to place instead of seeding randomly
    #[arg(long)]
    preset: Option<String>,

    /// Preset origin row, given together with --col (defaults to centering the preset)
    #[arg(long, requires = "col")]
    row: Option<usize>,

    /// Preset origin column, given together with --row (defaults to centering the preset)
    #[arg(long, requires = "row")]
    col: Option<usize>,

    /// Percent chance a cell starts alive when seeding randomly
    #[arg(long)]
    density: Option<f64>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Generations to advance
    #[arg(long)]
    ticks: Option<u64>,

    /// Rule in B/S notation, e.g. B3/S23
    #[arg(long)]
    rule: Option<String>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// List available presets and exit
    #[arg(long)]
    list_presets: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    rule: String,
    preset: Option<String>,
    seed: Option<u64>,
    report: GenerationReport,
    board: BoardSnapshot,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("torus_life=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let mut library = PatternLibrary::with_presets();
    if let Some(path) = &args.patterns {
        library.load_file(path)?;
    }

    if args.list_presets {
        for name in library.preset_names() {
            let (width, height) = library.preset_size(name)?;
            println!("{:<20} {}x{}", name, width, height);
        }
        return Ok(());
    }

    let mut board = Board::from_config(&config)?;

    let seed = match &config.preset {
        Some(name) => {
            let origin = match config.origin {
                Some([row, col]) => Coord::new(row, col),
                None => centered_origin(&library, name, &board)?,
            };
            library.place(&mut board, name, origin)?;
            None
        }
        None => Some(board.randomize(config.density, config.seed)?),
    };

    tracing::info!(
        "Seeded {}x{} board with {} live cells",
        board.height(),
        board.width(),
        board.population()
    );

    let ticks = i64::try_from(config.ticks)
        .map_err(|_| LifeError::InvalidArgument(format!("too many ticks: {}", config.ticks)))?;
    let report = board.advance(ticks)?;

    let result = RunResult {
        rule: board.rule().to_string(),
        preset: config.preset.clone(),
        seed,
        report,
        board: board.snapshot(),
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "text" => print_text(&board, &result),
        _ => {
            eprintln!("Unknown format '{}', defaulting to text", args.format);
            print_text(&board, &result);
        }
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(density) = args.density {
        config.density = density;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(rule) = &args.rule {
        config.rule = rule.clone();
    }
    if let Some(preset) = &args.preset {
        config.preset = Some(preset.clone());
    }
    if let (Some(row), Some(col)) = (args.row, args.col) {
        config.origin = Some([row, col]);
    }

    config.validate()?;
    Ok(config)
}

fn centered_origin(library: &PatternLibrary, name: &str, board: &Board) -> Result<Coord> {
    let (width, height) = library.preset_size(name)?;
    Ok(Coord::new(
        board.height().saturating_sub(height) / 2,
        board.width().saturating_sub(width) / 2,
    ))
}

/// Rows top to bottom, so row 0 is printed last
fn print_text(board: &Board, result: &RunResult) {
    let rows = board.to_rows();
    for row in rows.iter().rev() {
        let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
        println!("{}", line);
    }
    println!();
    println!("Rule: {}", result.rule);
    if let Some(preset) = &result.preset {
        println!("Preset: {}", preset);
    }
    if let Some(seed) = result.seed {
        println!("Seed: {}", seed);
    }
    println!(
        "Tick {}: population {} (+{} / -{})",
        result.report.tick, result.report.population, result.report.births, result.report.deaths
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_needs_both_row_and_col() {
        assert!(Args::try_parse_from(["life_runner", "--preset", "glider", "--row", "3"]).is_err());
        assert!(Args::try_parse_from(["life_runner", "--preset", "glider", "--col", "3"]).is_err());

        let args = Args::try_parse_from(["life_runner", "--preset", "glider", "--row", "3", "--col", "5"])
            .unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.origin, Some([3, 5]));
    }

    #[test]
    fn test_origin_defaults_to_centered() {
        let args = Args::try_parse_from(["life_runner", "--preset", "glider"]).unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.origin, None);

        let board = Board::from_config(&config).unwrap();
        let library = PatternLibrary::with_presets();
        assert_eq!(centered_origin(&library, "glider", &board).unwrap(), Coord::new(8, 18));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let huge = (usize::MAX / 2 + 1).to_string();
        let args = Args::try_parse_from(["life_runner", "--height", huge.as_str(), "--width", "2"]).unwrap();
        assert!(matches!(build_config(&args), Err(LifeError::InvalidArgument(_))));
    }
}
