use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use recordb::config::{Config, LogConfig};
use recordb::session::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory record store with contact lookup
#[derive(Debug, Parser)]
#[command(name = "recordb", version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON seed file, overrides the one named in the config
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Run this single command instead of reading commands from stdin
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

// Re-quote arguments so a command given on the command line parses the same
// way as one read from stdin.
fn join_command(args: &[String]) -> String {
    args
        .iter()
        .map(|arg| {
            let special = |c: char| c.is_whitespace() || c == '"' || c == '\\';
            if !arg.is_empty() && !arg.contains(special) {
                arg.clone()
            } else {
                format!("\"{}\"", arg.replace('\\', "\\\\").replace('"', "\\\""))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed.clone();
    }

    init_logging(&config.log)?;

    info!("Starting RecordDB");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut session = Session::from_config(&config)?;
    info!(
        "Loaded {} records and {} contacts",
        session.store().len(),
        session.contacts().len()
    );

    let stdout = io::stdout();
    if cli.command.is_empty() {
        session.run(io::stdin().lock(), stdout.lock())?;
    } else {
        let reply = session.execute(&join_command(&cli.command));
        let mut out = stdout.lock();
        reply.write_to(&mut out)?;
        out.flush()?;
        if reply.is_error() {
            std::process::exit(1);
        }
    }

    Ok(())
}
