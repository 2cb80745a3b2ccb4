//! Breadth-first push-move solver.
//!
//! Explores the space of distinct canonical board configurations reached
//! from an initial board by legal pushes, deduplicating through a
//! hash-bucketed visited set and pruning statically dead states, until it
//! either finds a winning board, exhausts the frontier, or exhausts its
//! iteration budget.

#[cfg(feature = "graph")]
pub mod graph;
pub mod search;
pub mod stats;

use std::collections::VecDeque;

use log::debug;
use typed_arena::Arena;

use crate::board::Board;
use crate::deadlock::is_deadlocked;
use crate::push::push;
use crate::reachability::canonicalize;
use crate::tile::Direction;
use crate::visited::VisitedSet;

pub use stats::Stats;

use search::SearchNode;

/// Outcome of a `solve()` call. Not a `Result`: every one of these is an
/// expected, successfully-computed answer, not a failure.
#[derive(Debug)]
pub enum SolveResult {
    Solved {
        iterations: u64,
        path: Vec<Board>,
        stats: Stats,
    },
    Unsolvable {
        iterations: u64,
        stats: Stats,
    },
    BudgetExhausted {
        iterations: u64,
        stats: Stats,
    },
}

impl SolveResult {
    pub fn stats(&self) -> &Stats {
        match self {
            SolveResult::Solved { stats, .. }
            | SolveResult::Unsolvable { stats, .. }
            | SolveResult::BudgetExhausted { stats, .. } => stats,
        }
    }

    pub fn iterations(&self) -> u64 {
        match *self {
            SolveResult::Solved { iterations, .. }
            | SolveResult::Unsolvable { iterations, .. }
            | SolveResult::BudgetExhausted { iterations, .. } => iterations,
        }
    }
}

/// Runs the BFS push-solver on `initial`, exploring at most `max_iters`
/// frontier pops (one "iteration" per pop).
///
/// `initial` need not be canonicalized; it is cloned and canonicalized
/// before the search starts.
pub fn solve(initial: &Board, max_iters: u64) -> SolveResult {
    let arena = Arena::new();
    let mut stats = Stats::new();

    let mut root_board = initial.clone();
    canonicalize(&mut root_board);

    let mut visited = VisitedSet::new(root_board.width(), root_board.height());

    let root = arena.alloc(SearchNode::root(root_board));
    stats.record_created(0);
    visited.insert(root);

    if root.board().is_win() {
        debug!("initial board already solved");
        return SolveResult::Solved {
            iterations: 0,
            path: root.backtrack(),
            stats,
        };
    }

    let mut frontier: VecDeque<&SearchNode<'_>> = VecDeque::new();
    frontier.push_back(root);

    let mut iterations: u64 = 0;
    debug!("search started");

    while let Some(node) = frontier.pop_front() {
        if iterations >= max_iters {
            return SolveResult::BudgetExhausted { iterations, stats };
        }
        iterations += 1;

        let board = node.board();
        let boxes: Vec<_> = board.box_positions().collect();
        for box_pos in boxes {
            for dir in Direction::ALL {
                let Some(mut successor) = push(board, box_pos, dir) else {
                    continue;
                };
                canonicalize(&mut successor);

                if is_deadlocked(&successor) {
                    continue;
                }

                let depth = (node.depth() + 1) as usize;
                if visited.contains(&successor) {
                    stats.record_duplicate(depth);
                    continue;
                }

                let is_win = successor.is_win();
                let child = arena.alloc(SearchNode::child(successor, node));
                stats.record_created(depth);
                visited.insert(child);

                if is_win {
                    debug!("solved, backtracking path");
                    return SolveResult::Solved {
                        iterations,
                        path: child.backtrack(),
                        stats,
                    };
                }

                frontier.push_back(child);
            }
        }
    }

    SolveResult::Unsolvable { iterations, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn trivial_win_needs_no_pushes() {
        let board = parse("####\n#*@#\n####\n").unwrap();
        match solve(&board, 1000) {
            SolveResult::Solved { path, .. } => assert_eq!(path.len(), 1),
            other => panic!("expected Solved, got {:?}", other),
        }
    }

    #[test]
    fn one_push_solve() {
        let board = parse(
            "#####\n\
             #@$.#\n\
             #   #\n\
             #   #\n\
             #####\n",
        )
        .unwrap();
        match solve(&board, 1000) {
            SolveResult::Solved { path, .. } => {
                assert_eq!(path.len(), 2);
                assert!(path.last().unwrap().is_win());
            }
            other => panic!("expected Solved, got {:?}", other),
        }
    }

    #[test]
    fn two_push_solve() {
        let board = parse(
            "#####\n\
             #@  #\n\
             # $ #\n\
             #  .#\n\
             #####\n",
        )
        .unwrap();
        match solve(&board, 10_000) {
            SolveResult::Solved { path, .. } => {
                assert_eq!(path.len(), 3);
                assert!(path.last().unwrap().is_win());
            }
            other => panic!("expected Solved, got {:?}", other),
        }
    }

    #[test]
    fn corner_deadlock_is_unsolvable() {
        let board = parse(
            "####\n\
             #$@#\n\
             # .#\n\
             ####\n",
        )
        .unwrap();
        match solve(&board, 1000) {
            SolveResult::Unsolvable { .. } => {}
            other => panic!("expected Unsolvable, got {:?}", other),
        }
    }

    #[test]
    fn two_by_two_deadlock_is_unsolvable() {
        let board = parse(
            "#####\n\
             #@..#\n\
             #.$$#\n\
             #.$$#\n\
             #####\n",
        )
        .unwrap();
        match solve(&board, 1000) {
            SolveResult::Unsolvable { .. } => {}
            other => panic!("expected Unsolvable, got {:?}", other),
        }
    }

    #[test]
    fn tiny_budget_exhausts_before_solving() {
        let board = parse(
            "#####\n\
             #@$.#\n\
             #   #\n\
             #   #\n\
             #####\n",
        )
        .unwrap();
        match solve(&board, 0) {
            SolveResult::BudgetExhausted { iterations, .. } => assert_eq!(iterations, 0),
            other => panic!("expected BudgetExhausted, got {:?}", other),
        }
    }

    #[test]
    fn path_is_connected_by_single_pushes() {
        let board = parse(
            "#####\n\
             #@$.#\n\
             #   #\n\
             #   #\n\
             #####\n",
        )
        .unwrap();
        if let SolveResult::Solved { path, .. } = solve(&board, 1000) {
            for window in path.windows(2) {
                let before_boxes: Vec<_> = window[0].box_positions().collect();
                let after_boxes: Vec<_> = window[1].box_positions().collect();
                assert_ne!(before_boxes, after_boxes, "expected a push between consecutive path boards");
            }
        } else {
            panic!("expected a solution");
        }
    }
}
