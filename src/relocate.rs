//! Filesystem side of a run: renaming in place and moving into a destination.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::RelocateSettings;
use crate::error::{Error, Result};

/// What to do when the target path already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Leave both files alone.
    #[default]
    Skip,
    /// Replace the existing file.
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was relocated.
    Done,
    /// Dry run: the file would have been relocated.
    Planned,
    /// The target exists and the policy is `Skip`.
    Collision,
}

/// Paths a dry run has claimed and given up so far.
#[derive(Debug, Default)]
struct Plan {
    targets: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

#[derive(Debug)]
pub struct Relocator {
    policy: CollisionPolicy,
    dry_run: bool,
    plan: RefCell<Plan>,
}

impl Relocator {
    pub fn new(policy: CollisionPolicy, dry_run: bool) -> Self {
        Self {
            policy,
            dry_run,
            plan: RefCell::new(Plan::default()),
        }
    }

    pub fn from_settings(settings: &RelocateSettings) -> Self {
        let policy = if settings.overwrite {
            CollisionPolicy::Overwrite
        } else {
            CollisionPolicy::Skip
        };
        Self::new(policy, settings.dry_run)
    }

    /// Rename `path` to `new_name` within its own directory.
    pub fn rename_in_place(&self, path: &Path, new_name: &str) -> Result<(Outcome, PathBuf)> {
        let target = path.with_file_name(new_name);
        let outcome = self.relocate(path, &target)?;
        Ok((outcome, target))
    }

    /// Move `path` to `destination/<file name>`, flattening any structure.
    pub fn move_into(&self, path: &Path, destination: &Path) -> Result<(Outcome, PathBuf)> {
        let target = match path.file_name() {
            Some(name) => destination.join(name),
            None => destination.to_path_buf(),
        };
        let outcome = self.relocate(path, &target)?;
        Ok((outcome, target))
    }

    fn relocate(&self, from: &Path, to: &Path) -> Result<Outcome> {
        if self.policy == CollisionPolicy::Skip && self.is_occupied(from, to) {
            return Ok(Outcome::Collision);
        }
        if self.dry_run {
            let mut plan = self.plan.borrow_mut();
            plan.targets.remove(from);
            plan.vacated.insert(from.to_path_buf());
            plan.vacated.remove(to);
            plan.targets.insert(to.to_path_buf());
            return Ok(Outcome::Planned);
        }

        match fs::rename(from, to) {
            Ok(()) => Ok(Outcome::Done),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                copy_then_remove(from, to).map_err(|source| rename_error(from, to, source))?;
                Ok(Outcome::Done)
            }
            Err(source) => Err(rename_error(from, to, source)),
        }
    }

    /// Whether `to` holds a file other than `from`. A dry run also counts
    /// what earlier planned moves would have claimed or freed.
    fn is_occupied(&self, from: &Path, to: &Path) -> bool {
        if self.dry_run {
            let plan = self.plan.borrow();
            if plan.targets.contains(to) {
                return true;
            }
            if plan.vacated.contains(to) {
                return false;
            }
        }
        to.exists() && !is_same_file(from, to)
    }
}

/// A case-only rename on a case-insensitive filesystem sees its own source
/// as the target. Only the same underlying file counts; on a case-sensitive
/// filesystem `song.mp3` and `Song.mp3` are two files.
#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    fs::remove_file(from)
}

fn rename_error(from: &Path, to: &Path, source: io::Error) -> Error {
    Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}
