//! Public result of a generation run.

use crate::map::GameMap;
use crate::types::{EntityId, Pos};

use super::room::RectangularRoom;

#[derive(Clone, Debug)]
pub struct GeneratedDungeon {
    pub map: GameMap,
    /// Accepted rooms in generation order.
    pub rooms: Vec<RectangularRoom>,
    /// One carved path per room after the first, linking it to its predecessor.
    pub corridors: Vec<Vec<Pos>>,
    pub player: EntityId,
}

impl GeneratedDungeon {
    /// False when every room attempt collided; the player then keeps the
    /// position it arrived with.
    pub fn player_placed(&self) -> bool {
        !self.rooms.is_empty()
    }

    pub fn player_pos(&self) -> Option<Pos> {
        self.map.entity(self.player).map(|entity| entity.pos)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.map.canonical_bytes();
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            for edge in [room.x1, room.y1, room.x2, room.y2] {
                bytes.extend(edge.to_le_bytes());
            }
        }
        bytes
    }
}
