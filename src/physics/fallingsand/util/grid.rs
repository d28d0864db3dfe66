//! A simple 2d grid type
//! Backed by an ndarray, indexed by signed cell coordinates so that
//! neighbors of edge cells can be asked for without underflowing.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::math::IVec2;

use crate::physics::fallingsand::error::{Error, Result};

/// A simple 2d grid type
/// x is the column, y is the row, (0, 0) is the top left
#[derive(Clone, Debug)]
pub struct Grid<T>(ndarray::Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid with the given width and height, and fill it with default values
    pub fn new_empty(width: usize, height: usize) -> Self
    where
        T: Default,
    {
        Self(ndarray::Array2::from_shape_simple_fn(
            (height, width),
            T::default,
        ))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the width of the grid
    pub fn get_width(&self) -> usize {
        self.0.ncols()
    }
    /// Get the height of the grid
    pub fn get_height(&self) -> usize {
        self.0.nrows()
    }
    /// Whether the coordinate addresses a cell of this grid
    pub fn in_bounds(&self, idx: IVec2) -> bool {
        idx.x >= 0
            && idx.y >= 0
            && (idx.x as usize) < self.get_width()
            && (idx.y as usize) < self.get_height()
    }
}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, idx: IVec2) -> Result<&T> {
        let coord = self.transform_coord_to_ndarray(idx)?;
        Ok(&self.0[coord])
    }
    /// Gets the value at the given coordinate, mutably
    pub fn checked_get_mut(&mut self, idx: IVec2) -> Result<&mut T> {
        let coord = self.transform_coord_to_ndarray(idx)?;
        Ok(&mut self.0[coord])
    }
    /// Sets the value at the given coordinate, overwriting the old value
    pub fn set(&mut self, idx: IVec2, value: T) -> Result<()> {
        self.replace(idx, value).map(|_| ())
    }
    /// Like set, but gives you ownership of the original value
    pub fn replace(&mut self, idx: IVec2, replacement: T) -> Result<T> {
        let coord = self.transform_coord_to_ndarray(idx)?;
        Ok(std::mem::replace(&mut self.0[coord], replacement))
    }
    /// Exchanges the values of two cells, both must be in bounds
    pub fn swap(&mut self, a: IVec2, b: IVec2) -> Result<()> {
        let a = self.transform_coord_to_ndarray(a)?;
        let b = self.transform_coord_to_ndarray(b)?;
        self.0.swap(a, b);
        Ok(())
    }
    /// Transforms the coordinate to the ndarray coordinate system, which is [row, column]
    fn transform_coord_to_ndarray(&self, idx: IVec2) -> Result<[usize; 2]> {
        if !self.in_bounds(idx) {
            return Err(Error::OutOfBounds(idx));
        }
        Ok([idx.y as usize, idx.x as usize])
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Iterate over every cell with its coordinate, row by row
    pub fn indexed_iter(&self) -> impl Iterator<Item = (IVec2, &T)> {
        self.0
            .indexed_iter()
            .map(|((y, x), value)| (IVec2::new(x as i32, y as i32), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fill a grid row by row
    fn grid_of<T: Default + Copy>(width: usize, height: usize, data: &[T]) -> Grid<T> {
        let mut grid = Grid::new_empty(width, height);
        for (i, value) in data.iter().enumerate() {
            let idx = IVec2::new((i % width) as i32, (i / width) as i32);
            grid.set(idx, *value).unwrap();
        }
        grid
    }

    #[test]
    fn test_iter() {
        let grid = grid_of(2, 3, &[1, 2, 3, 4, 5, 6]);
        let mut iter = grid.indexed_iter().map(|(_, value)| *value);

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.next(), Some(5));
        assert_eq!(iter.next(), Some(6));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_row_major_layout() {
        let grid = grid_of(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.get_width(), 2);
        assert_eq!(grid.get_height(), 3);
        assert_eq!(*grid.checked_get(IVec2::new(1, 0)).unwrap(), 2);
        assert_eq!(*grid.checked_get(IVec2::new(0, 2)).unwrap(), 5);
    }

    #[test]
    fn test_indexed_iter_coordinates() {
        let grid = grid_of(2, 2, &['a', 'b', 'c', 'd']);
        let cells: Vec<(IVec2, char)> = grid.indexed_iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(
            cells,
            vec![
                (IVec2::new(0, 0), 'a'),
                (IVec2::new(1, 0), 'b'),
                (IVec2::new(0, 1), 'c'),
                (IVec2::new(1, 1), 'd'),
            ]
        );
    }

    #[test]
    fn test_swap() {
        let mut grid = grid_of(2, 1, &[1, 2]);
        grid.swap(IVec2::new(0, 0), IVec2::new(1, 0)).unwrap();
        assert_eq!(*grid.checked_get(IVec2::new(0, 0)).unwrap(), 2);
        assert_eq!(*grid.checked_get(IVec2::new(1, 0)).unwrap(), 1);
    }

    mod bounds {
        use super::*;

        macro_rules! test_out_of_bounds {
            ($name:ident, $x:expr, $y:expr) => {
                #[test]
                fn $name() {
                    let mut grid: Grid<u8> = Grid::new_empty(3, 3);
                    let idx = IVec2::new($x, $y);
                    assert!(!grid.in_bounds(idx));
                    assert_eq!(grid.set(idx, 1), Err(Error::OutOfBounds(idx)));
                    assert_eq!(
                        grid.swap(IVec2::ZERO, idx),
                        Err(Error::OutOfBounds(idx))
                    );
                    assert!(grid.checked_get(idx).is_err());
                }
            };
        }

        test_out_of_bounds!(test_past_right, 3, 0);
        test_out_of_bounds!(test_past_bottom, 0, 3);
        test_out_of_bounds!(test_negative_x, -1, 1);
        test_out_of_bounds!(test_negative_y, 1, -1);

        #[test]
        fn test_max_coordinate_is_valid() {
            let mut grid: Grid<u8> = Grid::new_empty(3, 3);
            let max = IVec2::new(2, 2);
            assert!(grid.set(max, 9).is_ok());
            assert!(grid.swap(IVec2::ZERO, max).is_ok());
            assert_eq!(*grid.checked_get(IVec2::ZERO).unwrap(), 9);
        }
    }
}
