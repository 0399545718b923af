mod coord;

pub use self::coord::Coord;

use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

/// A container of elements in a rectangular grid, stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a new grid of the specified dimensions, filled with a value
    pub fn with_dimensions(width: usize, height: usize, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            elements: vec![val; width * height],
        }
    }

    /// Builds a grid from rows of equal length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let elements = rows.into_iter().flatten().collect();
        Some(Self { width, elements })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.elements.len() / self.width
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i % width, i / width), e))
    }

    pub fn contains_coord(&self, coord: Coord) -> bool {
        coord.col() < self.width() && coord.row() < self.height()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[coord.row() * self.width + coord.col()]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = coord.row() * self.width + coord.col();
        &mut self.elements[index]
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for element in row {
                write!(f, "{}", element)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, Grid};

    #[test]
    fn from_rows() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(2, grid.width());
        assert_eq!(3, grid.height());
        assert_eq!(3, grid[Coord::new(0, 1)]);
        assert_eq!(6, grid[Coord::new(1, 2)]);
    }

    #[test]
    fn from_ragged_rows() {
        assert_eq!(None, Grid::from_rows(vec![vec![1, 2], vec![3]]));
    }

    #[test]
    fn iter_coord() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let coords: Vec<_> = grid.iter_coord().map(|(coord, _)| coord).collect();
        assert_eq!(
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
            ],
            coords
        );
    }

    #[test]
    fn display() {
        let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        assert_eq!("ab\ncd\n", grid.to_string());
    }
}
