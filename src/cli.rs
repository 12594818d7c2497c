use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// Rename music files after their title tag (or a cleaned-up version of the
/// current name) and optionally move them to another directory.
#[derive(Parser, Debug)]
#[command(name = "movmusic", version, about)]
pub struct Cli {
    /// Directory to read from.
    pub fromdir: PathBuf,

    /// Print every rename and move.
    #[arg(short, long)]
    pub verbose: bool,

    /// Search directories recursively for files.
    #[arg(short, long, visible_alias = "recursiveclean")]
    pub recursive: bool,

    /// Directory to move music to. Without it names are only cleaned.
    #[arg(short, long, value_name = "DIR")]
    pub todir: Option<PathBuf>,

    /// Show what would change without renaming or moving anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Replace files that already exist at the target path.
    #[arg(long)]
    pub overwrite: bool,

    /// Read settings from this file instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line flags over loaded settings. Flags only switch
    /// behavior on; an unset flag keeps the configured value.
    pub fn apply(&self, settings: &mut Settings) {
        settings.library.recursive |= self.recursive;
        settings.relocate.dry_run |= self.dry_run;
        settings.relocate.overwrite |= self.overwrite;
        settings.output.verbose |= self.verbose;
    }
}
