use crate::*;
pub use random::*;

mod random;

pub trait LightGenerator {
    fn generate(self, config: GameConfig) -> LightGrid;
}
