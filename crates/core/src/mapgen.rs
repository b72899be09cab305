//! Procedural level generation split into coherent submodules.

pub mod config;
pub mod model;
pub mod room;
pub mod seed;
pub mod spawns;
pub mod tunnel;

mod generator;

pub use config::DungeonConfig;
pub use generator::{MapGenerator, generate_dungeon};
pub use model::GeneratedDungeon;
pub use room::RectangularRoom;
pub use spawns::place_entities;
pub use tunnel::{BresenhamLine, tunnel_between};

use crate::entity::Entity;
use crate::error::GenerationError;

/// Generates one level from `seed` on a fresh ChaCha stream.
pub fn generate_from_seed(
    seed: u64,
    config: DungeonConfig,
    player: Entity,
) -> Result<GeneratedDungeon, GenerationError> {
    Ok(MapGenerator::new(seed, config)?.generate(player))
}
