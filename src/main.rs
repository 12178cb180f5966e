use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use eupnea::{Dashboard, DashboardConfig, FileSource};

#[derive(Parser, Debug)]
#[command(name = "eupnea")]
#[command(about = "Turn a node/container metrics snapshot into dashboard view data")]
struct Args {
    /// Path to a snapshot JSON file ({"data": [...]})
    #[arg(short, long, default_value = "snapshot.json")]
    file: PathBuf,

    /// Configuration file (TOML). Ignored if missing.
    #[arg(short, long, default_value = "eupnea.toml")]
    config: PathBuf,

    /// Write the presentation to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long, conflicts_with = "output")]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = DashboardConfig::load(Some(args.config.as_path()))?;
    let source = Box::new(FileSource::new(&args.file));
    let mut dashboard = Dashboard::new(source, config);

    if !dashboard.reload()? {
        let reason = dashboard.load_error.as_deref().unwrap_or("no snapshot available");
        return Err(anyhow!("{}: {}", dashboard.source_description(), reason));
    }

    match args.output {
        Some(path) => {
            dashboard.export_state(&path)?;
            info!(path = %path.display(), "exported presentation");
        }
        None => {
            let json = dashboard.to_json(!args.compact)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter =
        EnvFilter::from_default_env().add_directive(format!("eupnea={}", level).parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
