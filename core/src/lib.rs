#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: BoardSize,
    pub chance_light_starts_on: f64,
}

impl GameConfig {
    pub const DEFAULT_ROWS: Coord = 5;
    pub const DEFAULT_COLS: Coord = 5;
    pub const DEFAULT_CHANCE_LIGHT_STARTS_ON: f64 = 0.25;

    pub const fn new_unchecked(size: BoardSize, chance_light_starts_on: f64) -> Self {
        Self {
            size,
            chance_light_starts_on,
        }
    }

    pub fn new(size: BoardSize, chance_light_starts_on: f64) -> Result<Self> {
        if size.rows == 0 || size.cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if !(0.0..=1.0).contains(&chance_light_starts_on) {
            return Err(GameError::InvalidChance);
        }
        Ok(Self::new_unchecked(size, chance_light_starts_on))
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.total_cells()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            BoardSize::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS),
            Self::DEFAULT_CHANCE_LIGHT_STARTS_ON,
        )
    }
}

/// Rectangular board of lit/unlit flags.
///
/// A grid value is never edited through the public API: [`LightGrid::flipped_around`]
/// returns a fresh, independent grid and leaves `self` as it was.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightGrid {
    lights: Array2<bool>,
}

impl LightGrid {
    pub fn all_unlit(size: BoardSize) -> Self {
        Self {
            lights: Array2::default(size.to_nd_index()),
        }
    }

    pub fn from_lit_mask(lights: Array2<bool>) -> Result<Self> {
        let (rows, cols) = lights.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { lights })
    }

    pub fn from_lit_coords(size: BoardSize, lit_coords: &[Coords]) -> Result<Self> {
        if size.rows == 0 || size.cols == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let mut grid = Self::all_unlit(size);
        for &coords in lit_coords {
            let coords = grid.validate_coords(coords)?;
            grid.lights[coords.to_nd_index()] = true;
        }

        Ok(grid)
    }

    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }

        let cells: Vec<bool> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let lights = Array2::from_shape_vec((rows.len(), cols), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;

        Self::from_lit_mask(lights)
    }

    pub fn size(&self) -> BoardSize {
        let (rows, cols) = self.lights.dim();
        BoardSize::new(
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        self.size().total_cells()
    }

    pub fn lit_count(&self) -> CellCount {
        let count = self.lights.iter().filter(|&&lit| lit).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    pub fn validate_coords(&self, coords: Coords) -> Result<Coords> {
        if self.size().contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    // off-board positions read as unlit
    pub fn is_lit(&self, coords: Coords) -> bool {
        self.lights
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn has_won(&self) -> bool {
        self.lights.iter().all(|&lit| !lit)
    }

    pub fn iter_flip_targets(&self, coords: Coords) -> FlipTargetIter {
        FlipTargetIter::new(coords, self.size())
    }

    pub fn flipped_around(&self, coords: Coords) -> Self {
        let mut lights = self.lights.clone();
        for pos in self.iter_flip_targets(coords) {
            let cell = &mut lights[pos.to_nd_index()];
            *cell = !*cell;
        }
        Self { lights }
    }
}

impl Index<Coords> for LightGrid {
    type Output = bool;

    fn index(&self, coords: Coords) -> &Self::Output {
        &self.lights[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    NoChange,
    Flipped,
    Won,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}
