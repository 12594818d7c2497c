use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::library::{list, matches_extension};
use crate::naming::{Action, Namer};
use crate::relocate::{Outcome, Relocator};
use crate::tags::TagReader;

use super::report::Report;

/// Rename every matching file under `source` to its normalized name.
///
/// Files are handled one at a time; a failed rename is logged and counted,
/// and the batch carries on.
pub fn clean_phase(source: &Path, settings: &Settings, reader: &dyn TagReader) -> Result<Report> {
    let verbose = settings.output.verbose;
    let dry_run = settings.relocate.dry_run;
    if !verbose {
        println!("Cleaning...");
    }

    let extension = settings.library.extension_suffix();
    let namer = Namer::new(reader, settings);
    let relocator = Relocator::from_settings(&settings.relocate);
    let mut report = Report::default();

    for path in list(source, &settings.library)? {
        if !path.is_file() || !matches_extension(&path, &extension) {
            continue;
        }

        let Some(decision) = namer.name_for(&path) else {
            tracing::warn!(path = %path.display(), "skipping file with a non UTF-8 name");
            report.skipped += 1;
            continue;
        };

        match decision.action {
            Action::Skip(reason) => {
                tracing::debug!(file = %decision.original, ?reason, "name left as is");
                report.skipped += 1;
            }
            Action::Rename => match relocator.rename_in_place(&path, &decision.new_name) {
                Ok((Outcome::Collision, target)) => {
                    tracing::warn!(
                        from = %path.display(),
                        to = %target.display(),
                        "target exists, not renaming"
                    );
                    report.collisions += 1;
                }
                Ok((Outcome::Done | Outcome::Planned, _)) => {
                    tracing::debug!(
                        from = %decision.original,
                        to = %decision.new_name,
                        source = ?decision.source,
                        "renamed"
                    );
                    if verbose || dry_run {
                        println!("{} ==> {}", decision.original, decision.new_name);
                    }
                    report.renamed += 1;
                }
                Err(e) => {
                    tracing::error!("{e}");
                    report.failed += 1;
                }
            },
        }
    }

    if !verbose {
        println!("Done");
    }
    Ok(report)
}
