use std::fmt::{self, Display, Formatter};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::board::Board;
use crate::tile::{Pos, Tile};

/// How many random cells a single placement call tries before giving up.
/// Mirrors the source project's generator, which looped 1000 times per
/// placement before returning failure.
const PLACEMENT_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    NoRoomLeft,
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::NoRoomLeft => {
                write!(f, "no floor cell left to place the requested content")
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Builds random boards by placing a player, then walls, then boxes, then
/// one target per box, all on `Floor` cells inside a bordered rectangle.
///
/// Threads a single seeded RNG through every placement call. The source
/// project's C++ generator reseeded `srand(time(NULL))` on every single
/// placement, which produced correlated output when placements happened
/// within the same wall-clock second; threading one RNG instead is a
/// correctness fix sanctioned by the spec, not a drift from its intent.
#[derive(Debug)]
pub struct Generator {
    rng: Pcg64,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Generator { rng: Pcg64::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Generator { rng: Pcg64::from_entropy() }
    }

    /// Generates a `width x height` board with `walls` interior walls and
    /// `boxes` boxes, each with a matching target. Fails with
    /// `GeneratorError::NoRoomLeft` if any placement can't find a free
    /// floor cell within its attempt budget.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        walls: u32,
        boxes: u32,
    ) -> Result<Board, GeneratorError> {
        let mut board = Board::empty(width, height);

        let player = self.place_on_floor(&board)?;
        board.tiles_mut()[player] = Tile::Player;
        board.set_player_pos(player);

        for _ in 0..walls {
            let pos = self.place_on_floor(&board)?;
            board.tiles_mut()[pos] = Tile::Wall;
        }

        for _ in 0..boxes {
            let pos = self.place_on_floor(&board)?;
            board.tiles_mut()[pos] = Tile::Box;
        }

        for _ in 0..boxes {
            let pos = self.place_on_floor(&board)?;
            board.tiles_mut()[pos] = Tile::Target;
        }

        Ok(board)
    }

    fn place_on_floor(&mut self, board: &Board) -> Result<Pos, GeneratorError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let r = self.rng.gen_range(1..board.height() - 1);
            let c = self.rng.gen_range(1..board.width() - 1);
            let pos = Pos::new(r, c);
            if board.tiles()[pos] == Tile::Floor {
                return Ok(pos);
            }
        }
        Err(GeneratorError::NoRoomLeft)
    }
}
