use crate::board::Board;
use crate::tile::{Pos, Tile};

/// Conservative static deadlock detection: if this returns `true`, no
/// winning state is reachable from `board`. Never returns `true` for a
/// solvable board (both detectors only fire on structural arguments that
/// rule out ever moving the offending box again).
pub fn is_deadlocked(board: &Board) -> bool {
    wall_corner(board) || two_by_two(board)
}

/// A box is dead if it sits in a corner formed by two orthogonally
/// adjacent walls. Before testing plain boxes, any `BoxOnTarget` that is
/// itself immovable in such a corner is folded into a scratch copy as a
/// wall too, since an immovable box blocks other boxes exactly like a
/// wall would; this folding iterates to a fixpoint because folding one
/// box can make a neighboring box immovable in turn.
fn wall_corner(board: &Board) -> bool {
    let mut scratch = board.tiles().clone();

    loop {
        let mut changed = false;
        for pos in scratch.positions() {
            if scratch[pos] == Tile::BoxOnTarget && is_corner(&scratch, pos) {
                scratch[pos] = Tile::Wall;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    scratch
        .positions()
        .any(|pos| scratch[pos] == Tile::Box && is_corner(&scratch, pos))
}

fn is_corner(tiles: &crate::grid::Grid<Tile>, pos: Pos) -> bool {
    let wall_at = |p: Pos| tiles.get(p).is_some_and(|&t| t == Tile::Wall);

    let up = wall_at(Pos::new(pos.r - 1, pos.c));
    let down = wall_at(Pos::new(pos.r + 1, pos.c));
    let left = wall_at(Pos::new(pos.r, pos.c - 1));
    let right = wall_at(Pos::new(pos.r, pos.c + 1));

    (up && left) || (up && right) || (down && left) || (down && right)
}

/// Any 2x2 window made up only of boxes and walls, with at least one box
/// not yet on a target, is dead: none of the boxes in the block can ever
/// be pushed clear of it.
fn two_by_two(board: &Board) -> bool {
    let tiles = board.tiles();
    for r in 0..tiles.rows() - 1 {
        for c in 0..tiles.cols() - 1 {
            let corners = [
                tiles[Pos::new(r, c)],
                tiles[Pos::new(r, c + 1)],
                tiles[Pos::new(r + 1, c)],
                tiles[Pos::new(r + 1, c + 1)],
            ];
            let all_blocking = corners
                .iter()
                .all(|&t| matches!(t, Tile::Box | Tile::BoxOnTarget | Tile::Wall));
            let has_loose_box = corners.iter().any(|&t| t == Tile::Box);
            if all_blocking && has_loose_box {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn corner_box_without_target_is_dead() {
        let board = parse(
            "####\n\
             #$@#\n\
             # .#\n\
             ####\n",
        )
        .unwrap();
        assert!(is_deadlocked(&board));
    }

    #[test]
    fn corner_box_on_target_is_not_dead() {
        let board = parse(
            "####\n\
             #*@#\n\
             #  #\n\
             ####\n",
        )
        .unwrap();
        assert!(!is_deadlocked(&board));
    }

    #[test]
    fn two_by_two_block_is_dead() {
        let board = parse(
            "#####\n\
             #@..#\n\
             #.$$#\n\
             #.$$#\n\
             #####\n",
        )
        .unwrap();
        assert!(is_deadlocked(&board));
    }

    #[test]
    fn two_by_two_all_on_targets_is_not_dead() {
        let board = parse(
            "#####\n\
             #@  #\n\
             # **#\n\
             # **#\n\
             #####\n",
        )
        .unwrap();
        assert!(!is_deadlocked(&board));
    }

    #[test]
    fn open_box_in_middle_is_not_dead() {
        let board = parse(
            "#####\n\
             #@  #\n\
             # $ #\n\
             #  .#\n\
             #####\n",
        )
        .unwrap();
        assert!(!is_deadlocked(&board));
    }
}
