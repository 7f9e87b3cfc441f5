// src/bin/cli.rs
use kosdaq_discl::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
