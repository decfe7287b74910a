use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::{Cell, Grid};

/// Rejection samples tried before falling back to the free-cell set
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
    /// Index into the loaded food sprites
    pub variant: usize,
}

impl Food {
    /// Place a new food on a cell not in `occupied`.
    ///
    /// Returns `None` only when every cell of the grid is occupied.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: Grid,
        occupied: &[Cell],
        variants: usize,
    ) -> Option<Self> {
        let position = free_cell(rng, grid, occupied)?;
        let variant = rng.gen_range(0..variants.max(1));

        Some(Self { position, variant })
    }

    /// Move to a fresh free cell with a fresh appearance.
    ///
    /// Leaves the food untouched and returns false if the grid is full.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: Grid,
        occupied: &[Cell],
        variants: usize,
    ) -> bool {
        match Self::spawn(rng, grid, occupied, variants) {
            Some(food) => {
                *self = food;
                true
            }
            None => false,
        }
    }
}

fn free_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid, occupied: &[Cell]) -> Option<Cell> {
    if grid.area() == 0 {
        return None;
    }

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let cell = Cell::new(
            rng.gen_range(0..grid.width) as i32,
            rng.gen_range(0..grid.height) as i32,
        );

        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }

    // Crowded board: draw uniformly from the complement instead
    grid.cells()
        .filter(|cell| !occupied.contains(cell))
        .choose(rng)
}
