use std::collections::VecDeque;

use crate::board::Board;
use crate::tile::{Direction, Tile};

/// Promotes every `Floor`/`Target` cell reachable from the player,
/// without crossing a wall or a box, to `PlayerReach`/`PlayerReachOnTarget`
/// - including the player's own cell. Two boards that differ only in the
/// player's exact position within the same reachable region end up with
/// identical tile grids after this call, which is exactly the property
/// the solver's visited set relies on for deduplication.
///
/// Idempotent: every cell this promotes becomes a `PlayerReach*` variant,
/// which is a dead end for the fill (it's not a source of further
/// promotion beyond the first pass), so calling this twice in a row is a
/// no-op on the second call.
pub fn canonicalize(board: &mut Board) {
    let start = board.player_pos();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    promote(board, start);

    while let Some(pos) = queue.pop_front() {
        for dir in Direction::ALL {
            let next = pos.neighbor(dir);
            let Some(&tile) = board.tiles().get(next) else {
                continue;
            };
            if matches!(tile, Tile::Floor | Tile::Target) {
                promote(board, next);
                queue.push_back(next);
            }
        }
    }
}

fn promote(board: &mut Board, pos: crate::tile::Pos) {
    let tiles = board.tiles_mut();
    tiles[pos] = match tiles[pos] {
        Tile::Floor | Tile::Player => Tile::PlayerReach,
        Tile::Target | Tile::PlayerOnTarget => Tile::PlayerReachOnTarget,
        other => other,
    };
}
