use csgo_match_summary::output::{output_path, write_summary};
use csgo_match_summary::parse;
use main_error::MainError;
use std::env::args;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), MainError> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let path = PathBuf::from(args().nth(1).ok_or("No path provided")?);
    let content = fs::read_to_string(&path)?;

    let summary = parse(&content)?;
    info!(
        rounds = summary.score.win_sequence.len(),
        players = summary.players.len(),
        "log parsed"
    );

    write_summary(&output_path(&path), &summary)?;

    Ok(())
}
