use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod error;
mod logging;

use cli::Cli;
use error::CliError;
use logging::init_logging;

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    debug!("CLI arguments: {:?}", cli);

    if let Err(e) = cli.run() {
        tracing::error!("CLI error: {:?}", e);
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}
