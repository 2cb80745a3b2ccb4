use std::fmt::{self, Display, Formatter};

use prettytable::{row, Table};
use separator::Separatable;

/// Per-depth search diagnostics, independent of whether a solution was
/// found. Indices line up with BFS depth; a depth with no entries simply
/// has zero everywhere.
///
/// `created` only ever counts newly-inserted (unique) successors - the
/// solver calls `record_duplicate` instead of `record_created` for a
/// successor already in the visited set - so `created` already *is* the
/// unique count; it is never double-counted against `duplicates`.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    created: Vec<u64>,
    duplicates: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_depth(&mut self, depth: usize) {
        if self.created.len() <= depth {
            self.created.resize(depth + 1, 0);
            self.duplicates.resize(depth + 1, 0);
        }
    }

    pub fn record_created(&mut self, depth: usize) {
        self.ensure_depth(depth);
        self.created[depth] += 1;
    }

    pub fn record_duplicate(&mut self, depth: usize) {
        self.ensure_depth(depth);
        self.duplicates[depth] += 1;
    }

    pub fn total_created(&self) -> u64 {
        self.created.iter().sum()
    }

    pub fn total_duplicates(&self) -> u64 {
        self.duplicates.iter().sum()
    }

    pub fn total_unique(&self) -> u64 {
        self.total_created()
    }

    pub fn depths(&self) -> usize {
        self.created.len()
    }

    pub fn created_at(&self, depth: usize) -> u64 {
        self.created.get(depth).copied().unwrap_or(0)
    }

    pub fn duplicates_at(&self, depth: usize) -> u64 {
        self.duplicates.get(depth).copied().unwrap_or(0)
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Unique visited total: {}", self.total_unique().separated_string())?;
        writeln!(f, "Reached duplicates total: {}", self.total_duplicates().separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.add_row(row!["Depth", "Created", "Unique", "Duplicates"]);
        for depth in 0..self.depths() {
            let created = self.created_at(depth);
            let duplicates = self.duplicates_at(depth);
            table.add_row(row![
                depth,
                created.separated_string(),
                created.separated_string(),
                duplicates.separated_string()
            ]);
        }
        write!(f, "{}", table)
    }
}
