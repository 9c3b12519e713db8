//! This crate contains the source code for the binary of the maze solver labyrinstar.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use labyrinstar::{app, config::Config, App};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    app::init_logging(config.log_level())?;
    let _status = App::new(config).run(&mut io::stdout().lock())?;

    Ok(())
}
