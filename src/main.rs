use anyhow::Result;
use clap::Parser;
use par_log::cli::{Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Errors propagate so main exits with code 1 (anyhow default)
    run::run(&cli)
}
