use std::fmt::{self, Display, Formatter};

use crate::board::{Board, SolverError};
use crate::grid::Grid;
use crate::tile::Tile;

/// Reasons a textual level fails to parse into a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    InvalidChar { row: usize, col: usize, found: char },
    Board(SolverError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidChar { row, col, found } => {
                write!(f, "invalid character {:?} at row {}, col {}", found, row, col)
            }
            ParseError::Board(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<SolverError> for ParseError {
    fn from(e: SolverError) -> Self {
        ParseError::Board(e)
    }
}

/// Parses the textual notation of `#`/` `/`.`/`$`/`*`/`@`/`+` (see
/// `DESIGN.md`) into a [`Board`]. Short rows are padded with `Floor`
/// rather than rejected outright, matching the source project's own
/// parser, but a ragged board still fails `Board::from_tiles`'s border
/// check the same way a hand-edited level file would.
pub fn parse(text: &str) -> Result<Board, ParseError> {
    let text = text.trim_matches('\n');

    let rows: Vec<Vec<Tile>> = text
        .lines()
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| {
                    tile_from_char(ch).ok_or(ParseError::InvalidChar { row, col, found: ch })
                })
                .collect()
        })
        .collect::<Result<_, _>>()?;

    if rows.is_empty() || rows[0].is_empty() {
        return Err(ParseError::Board(SolverError::TooSmall));
    }

    let grid = Grid::from_rows(&rows);
    Ok(Board::from_tiles(grid)?)
}

fn tile_from_char(c: char) -> Option<Tile> {
    match c {
        '#' => Some(Tile::Wall),
        ' ' => Some(Tile::Floor),
        '.' => Some(Tile::Target),
        '$' => Some(Tile::Box),
        '*' => Some(Tile::BoxOnTarget),
        '@' => Some(Tile::Player),
        '+' => Some(Tile::PlayerOnTarget),
        _ => None,
    }
}
