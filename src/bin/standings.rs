//! Standings from an exported match list.
//! Run with: cargo run --bin standings -- <matches.json> [--knockout]
//!
//! Reads a JSON array of match rows as exported by the datastore and prints group
//! standings. With `--knockout` prints the next knockout round to insert instead.

use clap::Parser as _;
use padel_bracket::{
    calculate_group_standings, generate_knockout_stage, matches_from_rows, write_standings_csv,
    MatchRow, QualificationOverrides,
};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(clap::Parser)]
#[clap(version, about = "Group standings and knockout draw from exported padel matches")]
struct Args {
    /// JSON array of match rows
    matches: PathBuf,
    /// Print the next knockout round instead of the standings
    #[clap(long)]
    knockout: bool,
    #[clap(long, env = "STANDINGS_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// JSON map of team id -> { qualified, eliminated }
    #[clap(long, env = "STANDINGS_OVERRIDES")]
    overrides: Option<PathBuf>,
}

fn load_overrides(path: Option<&Path>) -> Result<QualificationOverrides, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(QualificationOverrides::new());
    };
    let file = File::open(path)?;
    let overrides: QualificationOverrides = serde_json::from_reader(BufReader::new(file))?;
    log::info!("Loaded {} qualification override(s) from {}", overrides.len(), path.display());
    Ok(overrides)
}

fn load_rows(path: &Path) -> Result<Vec<MatchRow>, Box<dyn Error>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();

    let matches = matches_from_rows(load_rows(&args.matches)?)?;
    log::info!("Loaded {} match(es) from {}", matches.len(), args.matches.display());
    let overrides = load_overrides(args.overrides.as_deref())?;
    let standings = calculate_group_standings(&matches, &overrides);
    if standings.is_empty() {
        log::info!("No completed group matches yet");
    }

    let stdout = io::stdout();
    if args.knockout {
        let Some(tournament_id) = matches.first().map(|m| m.tournament_id) else {
            return Err("no matches to take the tournament id from".into());
        };
        let draw = generate_knockout_stage(tournament_id, &standings)?;
        log::info!("Generated {} {} match(es)", draw.matches.len(), draw.round_name);
        serde_json::to_writer_pretty(stdout.lock(), &draw)?;
        println!();
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(stdout.lock(), &standings)?;
            println!();
        }
        OutputFormat::Csv => write_standings_csv(&standings, stdout.lock())?,
    }
    Ok(())
}
