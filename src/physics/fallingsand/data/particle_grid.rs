use bevy::math::IVec2;

use crate::physics::fallingsand::error::Result;

use super::super::util::grid::Grid;
use super::particle::Particle;

/// What a coordinate holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Empty,
    Occupied(&'a Particle),
    /// Outside the grid, behaves like a wall that can never be entered
    OutOfBounds,
}

impl<'a> Cell<'a> {
    pub fn particle(&self) -> Option<&'a Particle> {
        match *self {
            Cell::Occupied(particle) => Some(particle),
            _ => None,
        }
    }
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A particle grid is a 2D grid holding at most one particle per cell
#[derive(Clone, Debug)]
pub struct ParticleGrid {
    grid: Grid<Option<Particle>>,
    count: usize,
}

/* Initialization */
impl ParticleGrid {
    /// Creates a new, empty particle grid
    pub fn new_empty(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new_empty(width, height),
            count: 0,
        }
    }
}

/* Getters */
impl ParticleGrid {
    pub fn width(&self) -> usize {
        self.grid.get_width()
    }
    pub fn height(&self) -> usize {
        self.grid.get_height()
    }
    /// The number of live particles
    pub fn count(&self) -> usize {
        self.count
    }
    /// Never fails, coordinates outside the grid are reported as blocked
    pub fn get(&self, pos: IVec2) -> Cell<'_> {
        match self.grid.checked_get(pos) {
            Ok(Some(particle)) => Cell::Occupied(particle),
            Ok(None) => Cell::Empty,
            Err(_) => Cell::OutOfBounds,
        }
    }
    pub fn get_mut(&mut self, pos: IVec2) -> Result<Option<&mut Particle>> {
        Ok(self.grid.checked_get_mut(pos)?.as_mut())
    }
    /// Every live particle with its cell, row by row from the top
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &Particle)> {
        self.grid
            .indexed_iter()
            .filter_map(|(pos, cell)| cell.as_ref().map(|particle| (pos, particle)))
    }
}

/* Modifiers */
impl ParticleGrid {
    pub fn set(&mut self, pos: IVec2, particle: Option<Particle>) -> Result<()> {
        self.replace(pos, particle).map(|_| ())
    }
    /// Like set, but gives you ownership of the original contents
    pub fn replace(&mut self, pos: IVec2, particle: Option<Particle>) -> Result<Option<Particle>> {
        let incoming = particle.is_some();
        let old = self.grid.replace(pos, particle)?;
        match (old.is_some(), incoming) {
            (false, true) => self.count += 1,
            (true, false) => self.count -= 1,
            _ => {}
        }
        Ok(old)
    }
    /// Empties the cell and returns what was in it
    pub fn take(&mut self, pos: IVec2) -> Result<Option<Particle>> {
        self.replace(pos, None)
    }
    /// Exchanges the contents of two cells
    pub fn swap(&mut self, a: IVec2, b: IVec2) -> Result<()> {
        self.grid.swap(a, b)
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec2;

    use super::*;
    use crate::physics::fallingsand::elements::element::ParticleType;
    use crate::physics::fallingsand::error::Error;

    fn sand_at(pos: IVec2) -> Particle {
        Particle::new(0, pos.as_vec2(), ParticleType::Sand)
    }

    #[test]
    fn test_get_out_of_bounds_is_blocked() {
        let grid = ParticleGrid::new_empty(3, 3);
        assert_eq!(grid.get(IVec2::new(-1, 0)), Cell::OutOfBounds);
        assert_eq!(grid.get(IVec2::new(3, 0)), Cell::OutOfBounds);
        assert_eq!(grid.get(IVec2::new(2, 2)), Cell::Empty);
    }

    #[test]
    fn test_set_counts_particles() {
        let mut grid = ParticleGrid::new_empty(3, 3);
        let pos = IVec2::new(1, 1);
        grid.set(pos, Some(sand_at(pos))).unwrap();
        grid.set(pos, Some(sand_at(pos))).unwrap();
        assert_eq!(grid.count(), 1);
        assert_eq!(grid.take(pos).unwrap().map(|p| p.kind), Some(ParticleType::Sand));
        assert_eq!(grid.count(), 0);
        assert_eq!(grid.take(pos).unwrap(), None);
    }

    #[test]
    fn test_swap_exchanges_contents() {
        let mut grid = ParticleGrid::new_empty(3, 3);
        let a = IVec2::new(1, 0);
        let b = IVec2::new(1, 1);
        grid.set(a, Some(sand_at(a))).unwrap();
        grid.swap(a, b).unwrap();
        assert!(grid.get(a).is_empty());
        assert_eq!(
            grid.get(b).particle().map(|p| p.kind),
            Some(ParticleType::Sand)
        );
        assert_eq!(grid.count(), 1);
    }

    #[test]
    fn test_boundary_mutations() {
        let mut grid = ParticleGrid::new_empty(4, 2);
        let max = IVec2::new(3, 1);
        let past = IVec2::new(4, 1);
        assert!(grid.set(max, Some(sand_at(max))).is_ok());
        assert_eq!(grid.set(past, None), Err(Error::OutOfBounds(past)));
        assert_eq!(grid.swap(max, past), Err(Error::OutOfBounds(past)));
        assert!(grid.swap(max, IVec2::ZERO).is_ok());
        assert_eq!(grid.count(), 1);
    }

    #[test]
    fn test_iter_visits_live_cells() {
        let mut grid = ParticleGrid::new_empty(3, 3);
        for pos in [IVec2::new(0, 2), IVec2::new(2, 0)] {
            grid.set(pos, Some(sand_at(pos))).unwrap();
        }
        let cells: Vec<IVec2> = grid.iter().map(|(pos, _)| pos).collect();
        assert_eq!(cells, vec![IVec2::new(2, 0), IVec2::new(0, 2)]);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut grid = ParticleGrid::new_empty(2, 2);
        let pos = IVec2::new(0, 1);
        grid.set(pos, Some(sand_at(pos))).unwrap();
        if let Some(particle) = grid.get_mut(pos).unwrap() {
            particle.velocity = Vec2::new(0.0, 3.0);
        }
        assert_eq!(
            grid.get(pos).particle().map(|p| p.velocity),
            Some(Vec2::new(0.0, 3.0))
        );
        assert!(grid.get_mut(IVec2::new(5, 5)).is_err());
    }
}
