use std::fmt::{self, Debug, Display, Formatter};

use crate::grid::Grid;
use crate::tile::{Pos, Tile};

/// Reasons a tile grid fails to be a legal [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    NoPlayer,
    MultiplePlayers,
    IncompleteBorder,
    BoxesTargetsMismatch,
    TooSmall,
}

impl Display for SolverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::NoPlayer => write!(f, "no player on the board"),
            SolverError::MultiplePlayers => write!(f, "more than one player on the board"),
            SolverError::IncompleteBorder => write!(f, "board is not fully surrounded by walls"),
            SolverError::BoxesTargetsMismatch => {
                write!(f, "number of boxes doesn't match number of targets")
            }
            SolverError::TooSmall => write!(f, "board must be at least 3x3"),
        }
    }
}

impl std::error::Error for SolverError {}

/// A Sokoban board: a grid of tiles plus the cached player position.
///
/// Not canonicalized by default; `crate::reachability::canonicalize`
/// promotes the player's reachable region to `PlayerReach*` markers so
/// that two boards differing only in the player's exact cell compare
/// equal.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Grid<Tile>,
    player: Pos,
}

impl Board {
    /// An empty bordered rectangle: walls on the outer ring, floor inside.
    /// The caller must place a player before the board is usable.
    pub fn empty(width: i32, height: i32) -> Self {
        assert!(width >= 3 && height >= 3, "board must be at least 3x3");
        let mut tiles = Grid::filled(height, width, Tile::Floor);
        for pos in tiles.positions() {
            if pos.r == 0 || pos.r == height - 1 || pos.c == 0 || pos.c == width - 1 {
                tiles[pos] = Tile::Wall;
            }
        }
        Board {
            tiles,
            player: Pos::new(0, 0),
        }
    }

    pub fn from_tiles(tiles: Grid<Tile>) -> Result<Self, SolverError> {
        if tiles.rows() < 3 || tiles.cols() < 3 {
            return Err(SolverError::TooSmall);
        }

        let mut player = None;
        let mut boxes = 0u32;
        let mut targets = 0u32;
        for pos in tiles.positions() {
            match tiles[pos] {
                Tile::Player => {
                    if player.is_some() {
                        return Err(SolverError::MultiplePlayers);
                    }
                    player = Some(pos);
                }
                Tile::PlayerOnTarget => {
                    if player.is_some() {
                        return Err(SolverError::MultiplePlayers);
                    }
                    player = Some(pos);
                    targets += 1;
                }
                Tile::Box => boxes += 1,
                Tile::BoxOnTarget => {
                    boxes += 1;
                    targets += 1;
                }
                Tile::Target => targets += 1,
                Tile::PlayerReach | Tile::PlayerReachOnTarget => {
                    unreachable!("transient reachability marks must never reach from_tiles")
                }
                Tile::Wall | Tile::Floor => {}
            }
        }

        let player = player.ok_or(SolverError::NoPlayer)?;
        if boxes != targets {
            return Err(SolverError::BoxesTargetsMismatch);
        }

        for r in 0..tiles.rows() {
            if tiles[Pos::new(r, 0)] != Tile::Wall || tiles[Pos::new(r, tiles.cols() - 1)] != Tile::Wall {
                return Err(SolverError::IncompleteBorder);
            }
        }
        for c in 0..tiles.cols() {
            if tiles[Pos::new(0, c)] != Tile::Wall || tiles[Pos::new(tiles.rows() - 1, c)] != Tile::Wall {
                return Err(SolverError::IncompleteBorder);
            }
        }

        Ok(Board { tiles, player })
    }

    pub fn width(&self) -> i32 {
        self.tiles.cols()
    }

    pub fn height(&self) -> i32 {
        self.tiles.rows()
    }

    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut Grid<Tile> {
        &mut self.tiles
    }

    pub fn player_pos(&self) -> Pos {
        self.player
    }

    pub(crate) fn set_player_pos(&mut self, pos: Pos) {
        self.player = pos;
    }

    pub fn is_win(&self) -> bool {
        self.tiles.positions().all(|p| self.tiles[p] != Tile::Box)
    }

    /// Every cell currently holding a box, row-major order: this order
    /// drives the solver's deterministic expansion order.
    pub fn box_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.tiles
            .positions()
            .filter(move |&p| self.tiles[p].is_box())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.tiles.rows() {
            for c in 0..self.tiles.cols() {
                let tile = self.tiles[Pos::new(r, c)];
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
