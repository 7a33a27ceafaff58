use super::*;

/// Lights every cell independently with the configured probability.
///
/// Cells are drawn in row-major order from a generator seeded with `seed`, so the same seed and
/// config always produce the same board. No attempt is made to keep the board solvable.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLightGenerator {
    seed: u64,
}

impl RandomLightGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LightGenerator for RandomLightGenerator {
    fn generate(self, config: GameConfig) -> LightGrid {
        use rand::prelude::*;

        let chance = config.chance_light_starts_on;
        let size = config.size;

        // skip the draws entirely for the degenerate probabilities
        if chance.is_nan() || chance <= 0.0 {
            return LightGrid::all_unlit(size);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let lights = Array2::from_shape_simple_fn(size.to_nd_index(), || {
            chance >= 1.0 || rng.random_bool(chance)
        });
        let grid = LightGrid { lights };

        log::debug!(
            "generated {}x{} board with {} of {} lights on (seed {})",
            size.rows,
            size.cols,
            grid.lit_count(),
            size.total_cells(),
            self.seed
        );
        if grid.has_won() {
            log::warn!("Generated board starts already solved");
        }

        grid
    }
}
