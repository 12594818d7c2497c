use std::fs;
use std::path::Path;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::library::{list, matches_extension};
use crate::relocate::{Outcome, Relocator};

use super::report::Report;

/// Move every matching file under `source` into `destination`, flattening
/// the directory structure.
pub fn move_phase(source: &Path, destination: &Path, settings: &Settings) -> Result<Report> {
    let verbose = settings.output.verbose;
    let dry_run = settings.relocate.dry_run;
    if !verbose {
        println!("Moving...");
    }

    if !destination.is_dir() && !dry_run {
        if settings.relocate.create_destination {
            fs::create_dir_all(destination).map_err(|source| Error::CreateDir {
                path: destination.to_path_buf(),
                source,
            })?;
        } else {
            return Err(Error::NotADirectory(destination.to_path_buf()));
        }
    }

    let extension = settings.library.extension_suffix();
    let relocator = Relocator::from_settings(&settings.relocate);
    let destination_real = destination.canonicalize().ok();
    let mut report = Report::default();

    for path in list(source, &settings.library)? {
        if !path.is_file() || !matches_extension(&path, &extension) {
            continue;
        }

        // Already where it belongs, e.g. the destination sits inside a recursive source.
        let parent_real = path.parent().and_then(|p| p.canonicalize().ok());
        if destination_real.is_some() && parent_real == destination_real {
            report.skipped += 1;
            continue;
        }

        match relocator.move_into(&path, destination) {
            Ok((Outcome::Collision, target)) => {
                tracing::warn!(
                    from = %path.display(),
                    to = %target.display(),
                    "destination already has this file, not moving"
                );
                report.collisions += 1;
            }
            Ok((Outcome::Done | Outcome::Planned, _)) => {
                if verbose || dry_run {
                    println!("Moved {}", path.display());
                }
                report.moved += 1;
            }
            Err(e) => {
                tracing::error!("{e}");
                report.failed += 1;
            }
        }
    }

    if !verbose {
        println!("Done");
    }
    Ok(report)
}
