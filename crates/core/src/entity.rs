//! Entities placed on a generated map and the prefabs that spawn them.

use serde::{Deserialize, Serialize};

use crate::map::GameMap;
use crate::tiles::Rgb;
use crate::types::{EntityId, EntityKind, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub pos: Pos,
}

impl Entity {
    pub fn player(pos: Pos) -> Self {
        Self { kind: EntityKind::Player, pos }
    }

    pub fn prefab(&self) -> &'static Prefab {
        self.kind.prefab()
    }

    pub fn blocks_movement(&self) -> bool {
        self.prefab().blocks_movement
    }
}

/// Static description of an entity type. Spawning copies it onto a map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefab {
    pub kind: EntityKind,
    pub glyph: char,
    pub color: Rgb,
    pub name: &'static str,
    pub blocks_movement: bool,
}

impl Prefab {
    pub fn spawn(&self, map: &mut GameMap, pos: Pos) -> EntityId {
        map.add_entity(Entity { kind: self.kind, pos })
    }
}

pub const PLAYER: Prefab = Prefab {
    kind: EntityKind::Player,
    glyph: '@',
    color: Rgb::WHITE,
    name: "Player",
    blocks_movement: true,
};

pub const ORC: Prefab = Prefab {
    kind: EntityKind::Orc,
    glyph: 'o',
    color: Rgb::new(63, 127, 63),
    name: "Orc",
    blocks_movement: true,
};

pub const TROLL: Prefab = Prefab {
    kind: EntityKind::Troll,
    glyph: 'T',
    color: Rgb::new(0, 127, 0),
    name: "Troll",
    blocks_movement: true,
};

impl EntityKind {
    pub fn prefab(self) -> &'static Prefab {
        match self {
            Self::Player => &PLAYER,
            Self::Orc => &ORC,
            Self::Troll => &TROLL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefabs_report_their_own_kind() {
        for kind in [EntityKind::Player, EntityKind::Orc, EntityKind::Troll] {
            assert_eq!(kind.prefab().kind, kind);
        }
    }

    #[test]
    fn spawn_appends_entity_at_requested_cell() {
        let mut map = GameMap::new(8, 8);
        let pos = Pos { y: 3, x: 4 };
        let id = TROLL.spawn(&mut map, pos);

        let entity = map.entity(id).expect("spawned entity should be stored");
        assert_eq!(entity.kind, EntityKind::Troll);
        assert_eq!(entity.pos, pos);
        assert!(entity.blocks_movement());
        assert_eq!(map.entities().count(), 1);
    }
}
