//! Monster placement inside accepted rooms.

use log::trace;
use rand_chacha::rand_core::Rng;

use crate::entity::{ORC, Prefab, TROLL};
use crate::error::GenerationError;
use crate::map::GameMap;
use crate::types::{EntityId, Pos};

use super::room::RectangularRoom;
use super::seed::{roll_inclusive, roll_unit};

const ORC_CHANCE: f64 = 0.8;

/// Scatters up to `maximum_monsters` monsters over the room interior.
///
/// A trial whose cell is already taken is forfeited rather than retried, so
/// fewer monsters than rolled may appear. Returns the spawned ids in order.
/// Rooms narrower or shorter than 2 tiles have no interior and are rejected
/// before any draw.
pub fn place_entities<R: Rng + ?Sized>(
    rng: &mut R,
    room: &RectangularRoom,
    dungeon: &mut GameMap,
    maximum_monsters: u32,
) -> Result<Vec<EntityId>, GenerationError> {
    let (width, height) = (room.x2 - room.x1, room.y2 - room.y1);
    if width < 2 || height < 2 {
        return Err(GenerationError::RoomWithoutInterior { width, height });
    }
    Ok(scatter_monsters(rng, room, dungeon, maximum_monsters))
}

// `room` must span at least 2 tiles on both axes.
pub(super) fn scatter_monsters<R: Rng + ?Sized>(
    rng: &mut R,
    room: &RectangularRoom,
    dungeon: &mut GameMap,
    maximum_monsters: u32,
) -> Vec<EntityId> {
    let maximum = i32::try_from(maximum_monsters).unwrap_or(i32::MAX);
    let number_of_monsters = roll_inclusive(rng, 0, maximum);

    let mut spawned = Vec::new();
    for _ in 0..number_of_monsters {
        let x = roll_inclusive(rng, room.x1 + 1, room.x2 - 1);
        let y = roll_inclusive(rng, room.y1 + 1, room.y2 - 1);
        let pos = Pos { y, x };

        if dungeon.is_occupied(pos) {
            continue;
        }
        spawned.push(pick_monster(rng).spawn(dungeon, pos));
    }

    trace!(
        "room at ({}, {}) rolled {number_of_monsters} monsters, spawned {}",
        room.x1,
        room.y1,
        spawned.len()
    );
    spawned
}

fn pick_monster<R: Rng + ?Sized>(rng: &mut R) -> &'static Prefab {
    if roll_unit(rng) < ORC_CHANCE { &ORC } else { &TROLL }
}
