// src/bin/cli.rs
use visibility_audit::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
