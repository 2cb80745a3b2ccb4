use crate::board::Board;
use crate::tile::{Direction, Pos, Tile};

/// Pushes the box at `box_pos` one cell in `dir`, returning the successor
/// board, or `None` if the push is illegal.
///
/// `board` must already be canonicalized (`crate::reachability::canonicalize`):
/// legality depends on the player-side cell carrying a `PlayerReach*` mark.
/// The returned board is a fresh clone, not canonicalized - the caller
/// (the solver) canonicalizes it again before checking for deadlocks or
/// looking it up in the visited set.
pub fn push(board: &Board, box_pos: Pos, dir: Direction) -> Option<Board> {
    let from_tile = *board.tiles().get(box_pos)?;
    if !from_tile.is_box() {
        return None;
    }

    let player_side = box_pos.neighbor(dir.inverse());
    let player_tile = *board.tiles().get(player_side)?;
    if !player_tile.is_player_reach() {
        return None;
    }

    let dest = box_pos.neighbor(dir);
    let dest_tile = *board.tiles().get(dest)?;
    if !dest_tile.is_walkable() {
        return None;
    }

    let mut next = board.clone();
    let tiles = next.tiles_mut();

    for pos in tiles.positions().collect::<Vec<_>>() {
        tiles[pos] = match tiles[pos] {
            Tile::PlayerReach => Tile::Floor,
            Tile::PlayerReachOnTarget => Tile::Target,
            other => other,
        };
    }

    tiles[dest] = if dest_tile == Tile::Target {
        Tile::BoxOnTarget
    } else {
        Tile::Box
    };

    let vacated = if from_tile == Tile::BoxOnTarget {
        Tile::PlayerOnTarget
    } else {
        Tile::Player
    };
    tiles[box_pos] = vacated;
    next.set_player_pos(box_pos);

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::reachability::canonicalize;

    fn canon(s: &str) -> Board {
        let mut b = parse(s).unwrap();
        canonicalize(&mut b);
        b
    }

    #[test]
    fn push_into_open_floor() {
        let board = canon(
            "#####\n\
             #@$.#\n\
             #   #\n\
             #####\n",
        );
        let result = push(&board, Pos::new(1, 2), Direction::Right).unwrap();
        assert_eq!(result.tiles()[Pos::new(1, 3)], Tile::BoxOnTarget);
        assert_eq!(result.tiles()[Pos::new(1, 2)], Tile::Player);
        assert_eq!(result.player_pos(), Pos::new(1, 2));
    }

    #[test]
    fn push_blocked_by_wall_destination() {
        let board = canon(
            "#####\n\
             #.@$#\n\
             #####\n",
        );
        assert!(push(&board, Pos::new(1, 3), Direction::Right).is_none());
    }

    #[test]
    fn push_blocked_by_unreachable_player_side() {
        let board = canon(
            "######\n\
             #@ $.#\n\
             ##  ##\n\
             ######\n",
        );
        // pushing left requires standing right of the box, which is reachable here,
        // but pushing up requires a player-side cell that's a wall
        assert!(push(&board, Pos::new(1, 3), Direction::Up).is_none());
    }

    #[test]
    fn push_blocked_by_another_box() {
        let board = canon(
            "#####\n\
             #@$$#\n\
             #.. #\n\
             #####\n",
        );
        assert!(push(&board, Pos::new(1, 2), Direction::Right).is_none());
    }

    #[test]
    fn push_onto_target_leaves_player_on_floor() {
        let board = canon(
            "#####\n\
             #@$.#\n\
             #####\n",
        );
        let pushed = push(&board, Pos::new(1, 2), Direction::Right).unwrap();
        assert_eq!(pushed.tiles()[Pos::new(1, 3)], Tile::BoxOnTarget);
        assert_eq!(pushed.tiles()[Pos::new(1, 2)], Tile::Player);
    }
}
