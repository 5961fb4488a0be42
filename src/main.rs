use clap::Parser;
use contentcmp::commands::compare::{self, EXIT_TROUBLE};
use contentcmp::config::Cli;
use contentcmp::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("contentcmp: {:#}", err);
            ExitCode::from(EXIT_TROUBLE)
        }
    }
}

fn try_main() -> anyhow::Result<u8> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let verdict = compare::run(&config)?;
    Ok(compare::report(&config, verdict))
}
