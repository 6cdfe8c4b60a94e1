use anyhow::{Context, Result};
use clap::Parser;
use simplelog::LevelFilter;

mod extractstreets;

/// Extracts street pickup-schedule records from the municipal waste
/// pickup PDF into grouped JSON files.
#[derive(Parser)]
struct Args {
    #[command(flatten)]
    command: extractstreets::Command,

    /// Logging level.
    #[arg(long, default_value = "Info")]
    log_level: LevelFilter,
}

pub fn run() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print()?;
            std::process::exit(code);
        }
    };

    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    extractstreets::run(&args.command)
}
