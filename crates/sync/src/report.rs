use std::fmt;

/// Counts from one sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Premade themes put back after the user deleted them
    pub restored: usize,
    /// Discovered themes new to the database
    pub added: usize,
    /// Live-tracking theme refreshed with different content
    pub updated: usize,
    /// Discovered themes left alone because they already exist
    pub skipped: usize,
    /// Themes in the database after the run
    pub total: usize,
}

impl SyncReport {
    /// Number of database changes made.
    pub fn changes(&self) -> usize {
        self.restored + self.added + self.updated
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Restored: {}", self.restored)?;
        writeln!(f, "  New themes: {}", self.added)?;
        writeln!(f, "  Updated: {}", self.updated)?;
        write!(f, "  Total themes: {}", self.total)
    }
}
