use std::path::Path;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::tags::{LoftyReader, TagReader};

mod clean;
mod logging;
mod moving;
mod report;
mod settings;

pub use clean::clean_phase;
pub use moving::move_phase;
pub use report::Report;

pub fn run() -> Result<Report> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut settings = settings::load_settings(cli.config.as_deref());
    cli.apply(&mut settings);

    execute(&cli.fromdir, cli.todir.as_deref(), &settings, &LoftyReader)
}

/// Clean names under `source`, then move everything into `destination` if given.
pub fn execute(
    source: &Path,
    destination: Option<&Path>,
    settings: &Settings,
    reader: &dyn TagReader,
) -> Result<Report> {
    let mut report = clean_phase(source, settings, reader)?;
    if let Some(destination) = destination {
        report += move_phase(source, destination, settings)?;
    }

    tracing::info!(%report, "run finished");
    Ok(report)
}
