//! Rendering options.

/// Controls how a table diff is turned into a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit `DROP COLUMN` / `DROP KEY` clauses for deleted entities.
    pub include_deletions: bool,
    /// Render an `ALTER TABLE` statement. When false, the target table is
    /// rendered in full as `CREATE TABLE`.
    pub alter: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOptions {
    /// Alter mode, deletions left out.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_deletions: false,
            alter: true,
        }
    }

    /// Enables deletion clauses.
    #[must_use]
    pub fn with_deletions(mut self) -> Self {
        self.include_deletions = true;
        self
    }

    /// Switches to full `CREATE TABLE` rendering.
    #[must_use]
    pub fn create_mode(mut self) -> Self {
        self.alter = false;
        self
    }
}
