use std::fmt;
use std::ops::AddAssign;

/// Per-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub renamed: usize,
    pub moved: usize,
    pub skipped: usize,
    pub collisions: usize,
    pub failed: usize,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl AddAssign for Report {
    fn add_assign(&mut self, other: Self) {
        self.renamed += other.renamed;
        self.moved += other.moved;
        self.skipped += other.skipped;
        self.collisions += other.collisions;
        self.failed += other.failed;
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} renamed, {} moved, {} unchanged, {} collisions, {} failed",
            self.renamed, self.moved, self.skipped, self.collisions, self.failed
        )
    }
}
