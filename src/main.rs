use anyhow::Result;
use clap::Parser;
use pagewalk::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    pagewalk::logging::init(cli.verbose, cli.quiet);
    cli.run()
}
