//! Optional `dot` export of a solved push-sequence, gated behind the
//! `graph` feature. Mirrors the source project's `solver::graph` module,
//! which rendered the whole BFS search tree the same way; this reduced
//! version draws the solution path only, since the full tree is owned by
//! an arena that doesn't outlive `solve()`.

use std::io::{self, Write};

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes};

use crate::board::Board;

type Nd<'a> = (usize, &'a Board);
type Ed<'a> = (Nd<'a>, Nd<'a>);

struct PathGraph<'a> {
    path: &'a [Board],
}

impl<'a> GraphWalk<'a, Nd<'a>, Ed<'a>> for PathGraph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Nd<'a>> {
        self.path.iter().enumerate().collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed<'a>> {
        self.path
            .windows(2)
            .enumerate()
            .map(|(i, w)| ((i, &w[0]), (i + 1, &w[1])))
            .collect()
    }

    fn source(&'a self, e: &Ed<'a>) -> Nd<'a> {
        e.0
    }

    fn target(&'a self, e: &Ed<'a>) -> Nd<'a> {
        e.1
    }
}

impl<'a> Labeller<'a, Nd<'a>, Ed<'a>> for PathGraph<'a> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("solution").unwrap()
    }

    fn node_id(&'a self, n: &Nd<'a>) -> Id<'a> {
        Id::new(format!("N{}", n.0)).unwrap()
    }

    fn node_label(&'a self, n: &Nd<'a>) -> LabelText<'a> {
        LabelText::EscStr(format!("{}", n.1).into())
    }
}

/// Writes the solution path as a `dot` digraph to `writer`, one node per
/// board in push order. A debug aid for visualizing a single run, not
/// part of the solver's contract; no state is read back on a later run.
pub fn write_path_dot<W: Write>(path: &[Board], writer: &mut W) -> io::Result<()> {
    let graph = PathGraph { path };
    dot::render(&graph, writer)
}
