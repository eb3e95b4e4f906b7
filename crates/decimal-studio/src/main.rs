use clap::Parser;
use decimal_engine::logging::{init_logging, LoggingConfig};

mod cli;
mod commands;
mod watch;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    commands::run(cli)
}
