use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cdrview",
    about = "CDR Analysis Tool — view and export call-detail records"
)]
struct Cli {
    /// Write debug logs to /tmp/cdrview-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// CSV, TXT, JSON or XML file to open on startup.
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Normalise INPUT and write it as tab-separated text, without the TUI.
    Export {
        input: PathBuf,
        /// Output file; the configured default extension is added when missing.
        /// Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/cdrview-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("cdrview debug log started — tail -f /tmp/cdrview-debug.log");
    }

    match cli.command {
        Some(Cmd::Export { input, output }) => {
            if !cli.debug {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(
                        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
                    )
                    .init();
            }
            let config = cdrview::config::Config::load().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "config: falling back to defaults");
                cdrview::config::Config::defaults()
            });
            let written = cdrview::headless::export(
                &input,
                output.as_deref(),
                &config.export.default_extension,
                &mut std::io::stdout().lock(),
            )?;
            if let Some(path) = written {
                eprintln!("Results saved to {}", path.display());
            }
            Ok(())
        }
        None => cdrview_tui::run(cli.file),
    }
}
