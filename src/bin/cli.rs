// src/bin/cli.rs
use fantasy_archive::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
