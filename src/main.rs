use clap::Parser;
use main_error::MainError;
use replay_stats::{scan_file, ScanOptions, DEFAULT_INPUT};
use std::io::{stdout, Write};

/// Count replay camera events in infolog.txt and print them as json
#[derive(Parser)]
#[command(name = "replay-stats")]
struct Cli {
    /// Group counts per demofile or battle, ending each at the win announcement
    #[arg(long)]
    sessions: bool,

    /// Track mean and max of the "checked <n> events" samples
    #[arg(long)]
    checked_events: bool,

    /// Pretty print the json output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), MainError> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = ScanOptions {
        track_sessions: cli.sessions,
        track_checked_events: cli.checked_events,
    };
    let output = scan_file(DEFAULT_INPUT, options)?;

    let mut stdout = stdout().lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut stdout, &output)?;
    } else {
        serde_json::to_writer(&mut stdout, &output)?;
    }
    writeln!(stdout)?;

    Ok(())
}
