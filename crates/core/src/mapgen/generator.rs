//! Room-and-corridor level assembly.

use log::{debug, trace};
use rand_chacha::rand_core::Rng;

use crate::entity::Entity;
use crate::error::GenerationError;
use crate::map::GameMap;
use crate::tiles::FLOOR;

use super::config::DungeonConfig;
use super::model::GeneratedDungeon;
use super::room::RectangularRoom;
use super::seed::{rng_from_seed, roll_inclusive};
use super::spawns::scatter_monsters;
use super::tunnel::tunnel_between;

/// Seeded front end: one validated config, one ChaCha stream per run.
pub struct MapGenerator {
    seed: u64,
    config: DungeonConfig,
}

impl MapGenerator {
    pub fn new(seed: u64, config: DungeonConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { seed, config })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn generate(&self, player: Entity) -> GeneratedDungeon {
        let mut rng = rng_from_seed(self.seed);
        assemble(&self.config, player, &mut rng)
    }
}

pub fn generate_dungeon<R: Rng + ?Sized>(
    config: &DungeonConfig,
    player: Entity,
    rng: &mut R,
) -> Result<GeneratedDungeon, GenerationError> {
    config.validate()?;
    Ok(assemble(config, player, rng))
}

// Callers validate `config` first, so every roll below has a non-empty range,
// every room is at least 2 tiles wide, and every coordinate fits in i32.
fn assemble<R: Rng + ?Sized>(
    config: &DungeonConfig,
    player: Entity,
    rng: &mut R,
) -> GeneratedDungeon {
    let mut map = GameMap::new(config.map_width, config.map_height);
    let player_id = map.add_entity(player);

    let width = config.map_width as i32;
    let height = config.map_height as i32;
    let room_min_size = config.room_min_size as i32;
    let room_max_size = config.room_max_size as i32;

    let mut rooms: Vec<RectangularRoom> = Vec::new();
    let mut corridors = Vec::new();

    for attempt in 0..config.max_rooms {
        let room_width = roll_inclusive(rng, room_min_size, room_max_size);
        let room_height = roll_inclusive(rng, room_min_size, room_max_size);

        let x = roll_inclusive(rng, 0, width - room_width - 1);
        let y = roll_inclusive(rng, 0, height - room_height - 1);

        let new_room = RectangularRoom::new(x, y, room_width, room_height);
        if rooms.iter().any(|other| new_room.intersects(other)) {
            trace!("attempt {attempt}: {room_width}x{room_height} at ({x}, {y}) overlaps");
            continue;
        }

        let (xs, ys) = new_room.inner();
        map.fill_rect(xs, ys, FLOOR);

        match rooms.last() {
            None => {
                map.place_entity(player_id, new_room.center());
            }
            Some(previous) => {
                let path: Vec<_> =
                    tunnel_between(rng, previous.center(), new_room.center()).collect();
                map.fill_cells(path.iter().copied(), FLOOR);
                corridors.push(path);
            }
        }

        scatter_monsters(rng, &new_room, &mut map, config.max_monsters_per_room);
        debug!("attempt {attempt}: accepted room {} at {:?}", rooms.len(), new_room);
        rooms.push(new_room);
    }

    debug!(
        "generated {}x{} dungeon: {} rooms from {} attempts, {} entities",
        config.map_width,
        config.map_height,
        rooms.len(),
        config.max_rooms,
        map.entities().count()
    );

    GeneratedDungeon { map, rooms, corridors, player: player_id }
}
