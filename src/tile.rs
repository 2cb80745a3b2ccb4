use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// One cell of a board.
///
/// `PlayerReach` and `PlayerReachOnTarget` only ever appear inside a
/// canonicalized board (see `crate::reachability`) and never in parsed
/// or rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    Wall,
    #[default]
    Floor,
    Target,
    Box,
    BoxOnTarget,
    Player,
    PlayerOnTarget,
    PlayerReach,
    PlayerReachOnTarget,
}

impl Tile {
    pub fn is_box(self) -> bool {
        matches!(self, Tile::Box | Tile::BoxOnTarget)
    }

    pub fn is_player(self) -> bool {
        matches!(self, Tile::Player | Tile::PlayerOnTarget)
    }

    pub fn is_player_reach(self) -> bool {
        matches!(self, Tile::PlayerReach | Tile::PlayerReachOnTarget)
    }

    pub fn has_target(self) -> bool {
        matches!(
            self,
            Tile::Target | Tile::BoxOnTarget | Tile::PlayerOnTarget | Tile::PlayerReachOnTarget
        )
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Target)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Tile::Wall => '#',
            Tile::Floor => ' ',
            Tile::Target => '.',
            Tile::Box => '$',
            Tile::BoxOnTarget => '*',
            Tile::Player => '@',
            Tile::PlayerOnTarget => '+',
            // never rendered as anything but plain floor/target: the notation
            // has no character for a transient reachability marker
            Tile::PlayerReach => ' ',
            Tile::PlayerReachOnTarget => '.',
        };
        write!(f, "{}", c)
    }
}

/// The four orthogonal directions, iterated in this fixed order
/// everywhere the solver's tie-breaking depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A row/column offset, `i32` so it can go negative during bounds checks
/// before a position is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Self {
        Pos { r, c }
    }

    pub fn neighbor(self, dir: Direction) -> Pos {
        self + dir
    }
}

impl Add<Direction> for Pos {
    type Output = Pos;

    fn add(self, dir: Direction) -> Pos {
        match dir {
            Direction::Up => Pos::new(self.r - 1, self.c),
            Direction::Down => Pos::new(self.r + 1, self.c),
            Direction::Left => Pos::new(self.r, self.c - 1),
            Direction::Right => Pos::new(self.r, self.c + 1),
        }
    }
}
