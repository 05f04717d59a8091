use clap::Parser;
use surecp::config::{Cli, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from(cli);

    surecp::commands::copy::run(config)?;

    Ok(())
}
