mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli_opts = cli::Cli::parse();
    cli::run(cli_opts.command)
}
