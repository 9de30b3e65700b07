use anyhow::Result;
use clap::Parser;
use dispendio::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
