use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::tile::Pos;

/// Generic row-major 2D storage backed by a single flat `Vec`, shared by
/// the board's tile grid and every scratch buffer the solver needs
/// (reachability marks, deadlock scans, dead-end precomputation).
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: i32,
    cols: i32,
}

impl<T> Grid<T> {
    pub fn filled(rows: i32, cols: i32, value: T) -> Self
    where
        T: Clone,
    {
        assert!(rows > 0 && cols > 0);
        Grid {
            data: vec![value; (rows * cols) as usize],
            rows,
            cols,
        }
    }

    pub fn from_rows(rows: &[Vec<T>]) -> Self
    where
        T: Clone + Default,
    {
        assert!(!rows.is_empty() && !rows[0].is_empty());

        let max_cols = rows.iter().map(|row| row.len()).max().unwrap();
        let mut data = Vec::with_capacity(rows.len() * max_cols);
        for row in rows {
            for cell in row {
                data.push(cell.clone());
            }
            for _ in row.len()..max_cols {
                // pad short rows with the default rather than silently
                // accepting a ragged, possibly malformed board
                data.push(T::default());
            }
        }
        Grid {
            data,
            rows: rows.len() as i32,
            cols: max_cols as i32,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.r < self.rows && pos.c >= 0 && pos.c < self.cols
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        if self.in_bounds(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    pub fn scratchpad_with<U: Clone>(&self, value: U) -> Grid<U> {
        Grid {
            data: vec![value; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn scratchpad<U: Clone + Default>(&self) -> Grid<U> {
        self.scratchpad_with(U::default())
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos), "position {:?} out of bounds", pos);
        (pos.r * self.cols + pos.c) as usize
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols as usize) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        &self.data[self.index_of(pos)]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        let i = self.index_of(pos);
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_roundtrips() {
        let mut grid = Grid::filled(3, 4, 0u8);
        grid[Pos::new(1, 2)] = 7;
        assert_eq!(grid[Pos::new(1, 2)], 7);
        assert_eq!(grid[Pos::new(0, 0)], 0);
    }

    #[test]
    fn from_rows_pads_short_rows() {
        let grid: Grid<char> = Grid::from_rows(&[vec!['a', 'b', 'c'], vec!['d']]);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[Pos::new(1, 1)], '\0');
    }

    #[test]
    fn in_bounds_rejects_negative_and_overflow() {
        let grid = Grid::filled(2, 2, 0);
        assert!(grid.in_bounds(Pos::new(0, 0)));
        assert!(!grid.in_bounds(Pos::new(-1, 0)));
        assert!(!grid.in_bounds(Pos::new(2, 0)));
    }

    #[test]
    fn display_matches_rows() {
        let grid: Grid<char> = Grid::from_rows(&[vec!['#', '#'], vec!['#', ' ']]);
        assert_eq!(grid.to_string(), "##\n# \n");
    }
}
