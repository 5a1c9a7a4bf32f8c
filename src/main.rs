use std::path::PathBuf;

use clap::Parser;
use xivlog::Config;

#[derive(Parser)]
#[command(
    name = "xivlog",
    about = "Recover roleplay dialogue from binary FFXIV chat logs"
)]
struct Cli {
    /// Config file to layer over the defaults (default: ~/.config/xivlog/config.toml).
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Game user directory containing the FFXIV_CHR* folders.
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Directory the cleaned text files are written to.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Character name to extract into its own file. Repeatable; replaces the
    /// configured list.
    #[arg(long = "track", short = 't', value_name = "NAME")]
    track: Vec<String>,
    /// Also write the run summary as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.paths.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.paths.output = output.clone();
        }
        if !self.track.is_empty() {
            config.output.tracked = self.track.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    let report = xivlog::run(&config)?;
    if let Some(path) = &cli.report {
        report.write_json(path)?;
        tracing::info!(path = %path.display(), "report written");
    }
    println!("{report}");
    Ok(())
}
