pub mod entity;
pub mod error;
pub mod map;
pub mod mapgen;
pub mod tiles;
pub mod types;

pub use entity::{Entity, ORC, PLAYER, Prefab, TROLL};
pub use error::GenerationError;
pub use map::GameMap;
pub use mapgen::{
    DungeonConfig, GeneratedDungeon, MapGenerator, RectangularRoom, generate_dungeon,
    generate_from_seed, place_entities, tunnel_between,
};
pub use tiles::{FLOOR, Graphic, Rgb, SHROUD, Tile, WALL};
pub use types::*;
