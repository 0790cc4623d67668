mod clock;
mod logging;
mod manager;
mod settings;
mod time_provider;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::manager::ClockManager;
use crate::settings::ManagerDefaults;
use crate::time_provider::SystemTimeSource;

#[derive(Parser, Debug)]
#[command(
    name = "fullclock",
    version,
    about = "Big-text desktop clock with countdown, count-up and timer windows"
)]
struct Cli {}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    logging::init()?;

    info!(version = env!("CARGO_PKG_VERSION"), "starting clock manager");
    let manager = ClockManager::new(ManagerDefaults::default(), Box::new(SystemTimeSource));
    ui::app::run_gui(manager).context("clock manager window failed")
}
