use std::fmt::{self, Display, Formatter};

use crate::board::Board;

/// Renders a full solution path: one rendered `Board` per push, separated
/// by a blank line, followed by a trailing push-count summary. Mirrors
/// the source project's `SolutionFormatter`, but works directly off the
/// `Vec<Board>` the solver returns rather than replaying a move list
/// against a separate map/state split.
pub struct SolutionFormatter<'a> {
    path: &'a [Board],
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(path: &'a [Board]) -> Self {
        SolutionFormatter { path }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for board in self.path {
            writeln!(f, "{}", board)?;
        }
        let pushes = self.path.len().saturating_sub(1);
        write!(f, "{} push{}", pushes, if pushes == 1 { "" } else { "s" })
    }
}
