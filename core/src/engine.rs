use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }

    fn of(grid: &LightGrid) -> Self {
        if grid.has_won() {
            Self::Won
        } else {
            Self::Playing
        }
    }
}

/// Owns the current board of one game and moves it through `Playing` to `Won`.
///
/// Every flip swaps the current grid for a freshly built one; `Won` is terminal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    grid: LightGrid,
    state: EngineState,
    flip_count: u32,
}

impl PlayEngine {
    pub fn new(grid: LightGrid) -> Self {
        let state = EngineState::of(&grid);
        Self {
            grid,
            state,
            flip_count: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    pub fn size(&self) -> BoardSize {
        self.grid.size()
    }

    pub fn is_lit(&self, coords: Coords) -> bool {
        self.grid.is_lit(coords)
    }

    pub fn lights_on(&self) -> CellCount {
        self.grid.lit_count()
    }

    pub fn flip_count(&self) -> u32 {
        self.flip_count
    }

    pub fn flip(&mut self, coords: Coords) -> Result<FlipOutcome> {
        self.check_not_finished()?;

        if self.grid.iter_flip_targets(coords).next().is_none() {
            log::trace!("flip around {} misses the board", coords);
            return Ok(FlipOutcome::NoChange);
        }

        self.grid = self.grid.flipped_around(coords);
        self.flip_count = self.flip_count.saturating_add(1);
        self.state = EngineState::of(&self.grid);
        log::trace!("flipped around {}, {} lights on", coords, self.lights_on());

        Ok(if self.state.is_finished() {
            log::debug!("board cleared after {} flips", self.flip_count);
            FlipOutcome::Won
        } else {
            FlipOutcome::Flipped
        })
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(row: Coord, col: Coord) -> Coords {
        Coords::new(row, col)
    }

    #[test]
    fn all_unlit_start_is_already_won() {
        let engine = PlayEngine::new(LightGrid::all_unlit(BoardSize::new(3, 3)));

        assert_eq!(engine.state(), EngineState::Won);
        assert!(engine.is_finished());
    }

    #[test]
    fn center_flip_clears_a_lit_plus() {
        let plus = LightGrid::all_unlit(BoardSize::new(3, 3)).flipped_around(coords(1, 1));
        let mut engine = PlayEngine::new(plus);
        assert_eq!(engine.state(), EngineState::Playing);
        assert_eq!(engine.lights_on(), 5);

        assert_eq!(engine.flip(coords(1, 1)).unwrap(), FlipOutcome::Won);
        assert_eq!(engine.state(), EngineState::Won);
        assert!(engine.grid().has_won());
        assert_eq!(engine.flip_count(), 1);
    }

    #[test]
    fn flip_that_leaves_lights_on_keeps_playing() {
        let grid = LightGrid::from_lit_coords(BoardSize::new(2, 2), &[coords(1, 1)]).unwrap();
        let mut engine = PlayEngine::new(grid);

        assert_eq!(engine.flip(coords(0, 0)).unwrap(), FlipOutcome::Flipped);
        assert_eq!(engine.state(), EngineState::Playing);
        assert!(engine.is_lit(coords(0, 0)));
        assert!(engine.is_lit(coords(0, 1)));
        assert!(engine.is_lit(coords(1, 0)));
        assert!(engine.is_lit(coords(1, 1)));
    }

    #[test]
    fn won_is_terminal() {
        let grid = LightGrid::from_lit_coords(BoardSize::new(1, 1), &[coords(0, 0)]).unwrap();
        let mut engine = PlayEngine::new(grid);

        assert_eq!(engine.flip(coords(0, 0)).unwrap(), FlipOutcome::Won);
        let snapshot = engine.grid().clone();

        assert_eq!(engine.flip(coords(0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(engine.grid(), &snapshot);
        assert_eq!(engine.flip_count(), 1);
        assert!(engine.is_finished());
    }

    #[test]
    fn previous_grid_snapshot_survives_a_flip() {
        let grid = LightGrid::from_lit_coords(BoardSize::new(3, 3), &[coords(0, 0)]).unwrap();
        let mut engine = PlayEngine::new(grid);
        let before = engine.grid().clone();

        engine.flip(coords(2, 2)).unwrap();

        assert!(before.is_lit(coords(0, 0)));
        assert!(!before.is_lit(coords(2, 2)));
        assert!(engine.is_lit(coords(2, 2)));
    }

    #[test]
    fn flip_off_the_board_is_not_a_move() {
        let grid = LightGrid::from_lit_coords(BoardSize::new(2, 2), &[coords(0, 0)]).unwrap();
        let mut engine = PlayEngine::new(grid.clone());

        assert_eq!(engine.flip(coords(9, 9)).unwrap(), FlipOutcome::NoChange);
        assert_eq!(engine.grid(), &grid);
        assert_eq!(engine.flip_count(), 0);
        assert_eq!(engine.state(), EngineState::Playing);
    }

    #[test]
    fn flip_just_off_the_edge_still_reaches_the_board() {
        let grid = LightGrid::from_lit_coords(BoardSize::new(2, 2), &[coords(0, 0)]).unwrap();
        let mut engine = PlayEngine::new(grid);

        // (2, 0) is below the board, its upper neighbour (1, 0) is on it
        assert_eq!(engine.flip(coords(2, 0)).unwrap(), FlipOutcome::Flipped);
        assert!(engine.is_lit(coords(1, 0)));
        assert_eq!(engine.size(), BoardSize::new(2, 2));
        assert_eq!(engine.lights_on(), 2);
        assert_eq!(engine.flip_count(), 1);
    }

    #[test]
    fn generated_game_can_be_played_to_a_win() {
        let config = GameConfig::new(BoardSize::new(1, 3), 1.0).unwrap();
        let mut engine = PlayEngine::new(RandomLightGenerator::new(3).generate(config));

        assert_eq!(engine.lights_on(), 3);
        assert_eq!(engine.flip(coords(0, 1)).unwrap(), FlipOutcome::Won);
    }
}
