//! Tile grid and entity storage for a single generated level.

use std::hash::Hasher;
use std::ops::Range;

use slotmap::SlotMap;
use xxhash_rust::xxh3::Xxh3;

use crate::entity::Entity;
use crate::tiles::{Graphic, SHROUD, Tile, WALL};
use crate::types::{EntityId, Pos};

#[derive(Clone, Debug)]
pub struct GameMap {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
    visible: Vec<bool>,
    explored: Vec<bool>,
    entities: SlotMap<EntityId, Entity>,
}

impl GameMap {
    /// Creates a wall-filled map with no entities.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![WALL; width * height],
            visible: vec![false; width * height],
            explored: vec![false; width * height],
            entities: SlotMap::with_key(),
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn tile_at(&self, pos: Pos) -> Tile {
        if !self.in_bounds(pos) {
            return WALL;
        }
        self.tiles[self.index(pos)]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// Writes `tile` over the half-open region `xs` by `ys`, clipped to the map.
    pub fn fill_rect(&mut self, xs: Range<i32>, ys: Range<i32>, tile: Tile) {
        let xs = xs.start.max(0)..xs.end.min(self.width as i32);
        let ys = ys.start.max(0)..ys.end.min(self.height as i32);
        for y in ys {
            let row = (y as usize) * self.width;
            for x in xs.clone() {
                self.tiles[row + x as usize] = tile;
            }
        }
    }

    pub fn fill_cells<I>(&mut self, cells: I, tile: Tile)
    where
        I: IntoIterator<Item = Pos>,
    {
        for pos in cells {
            self.set_tile(pos, tile);
        }
    }

    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        self.entities.insert(entity)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter()
    }

    /// Moves an existing entity. Returns false if `id` is not on this map.
    pub fn place_entity(&mut self, id: EntityId, pos: Pos) -> bool {
        match self.entities.get_mut(id) {
            Some(entity) => {
                entity.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn entity_at(&self, pos: Pos) -> Option<(EntityId, &Entity)> {
        self.entities.iter().find(|(_, entity)| entity.pos == pos)
    }

    pub fn blocking_entity_at(&self, pos: Pos) -> Option<(EntityId, &Entity)> {
        self.entities.iter().find(|(_, entity)| entity.pos == pos && entity.blocks_movement())
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.entity_at(pos).is_some()
    }

    /// Marks a cell as currently in view. Anything seen is also remembered.
    pub fn set_visible(&mut self, pos: Pos, visible: bool) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.visible[idx] = visible;
        if visible {
            self.explored[idx] = true;
        }
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.visible[self.index(pos)]
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.explored[self.index(pos)]
    }

    pub fn graphic_at(&self, pos: Pos) -> Graphic {
        if !self.in_bounds(pos) {
            return SHROUD;
        }
        let idx = self.index(pos);
        select_graphic(self.tiles[idx], self.visible[idx], self.explored[idx])
    }

    /// Per-cell graphics in row-major order, as handed to the renderer.
    pub fn render_graphics(&self) -> Vec<Graphic> {
        self.tiles
            .iter()
            .zip(self.visible.iter().zip(&self.explored))
            .map(|(&tile, (&visible, &explored))| select_graphic(tile, visible, explored))
            .collect()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len() * Tile::PACKED_LEN);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.extend(tile.packed_bytes());
        }
        bytes.extend((self.entities.len() as u32).to_le_bytes());
        for entity in self.entities.values() {
            bytes.push(entity.kind.code());
            bytes.extend(entity.pos.y.to_le_bytes());
            bytes.extend(entity.pos.x.to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write(&self.canonical_bytes());
        hasher.finish()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

fn select_graphic(tile: Tile, visible: bool, explored: bool) -> Graphic {
    if visible {
        tile.light
    } else if explored {
        tile.dark
    } else {
        SHROUD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ORC;
    use crate::tiles::FLOOR;

    #[test]
    fn new_map_is_entirely_wall() {
        let map = GameMap::new(6, 4);
        assert_eq!(map.tiles().len(), 24);
        assert!(map.tiles().iter().all(|&tile| tile == WALL));
    }

    #[test]
    fn fill_rect_writes_half_open_region_only() {
        let mut map = GameMap::new(6, 6);
        map.fill_rect(1..4, 2..4, FLOOR);

        for y in 0..6 {
            for x in 0..6 {
                let inside = (1..4).contains(&x) && (2..4).contains(&y);
                let expected = if inside { FLOOR } else { WALL };
                assert_eq!(map.tile_at(Pos { y, x }), expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn region_writes_clip_to_map_bounds() {
        let mut map = GameMap::new(4, 4);
        map.fill_rect(-3..2, 3..9, FLOOR);
        map.fill_cells([Pos { y: -1, x: 0 }, Pos { y: 0, x: 4 }, Pos { y: 0, x: 3 }], FLOOR);

        let floors = map.tiles().iter().filter(|&&tile| tile == FLOOR).count();
        assert_eq!(floors, 3);
        assert_eq!(map.tile_at(Pos { y: 3, x: 0 }), FLOOR);
        assert_eq!(map.tile_at(Pos { y: 0, x: 3 }), FLOOR);
    }

    #[test]
    fn out_of_bounds_reads_as_wall_and_shroud() {
        let map = GameMap::new(3, 3);
        assert_eq!(map.tile_at(Pos { y: -1, x: 1 }), WALL);
        assert_eq!(map.graphic_at(Pos { y: 1, x: 7 }), SHROUD);
    }

    #[test]
    fn graphic_selection_follows_visibility_then_memory() {
        let mut map = GameMap::new(3, 3);
        let pos = Pos { y: 1, x: 1 };
        map.set_tile(pos, FLOOR);
        assert_eq!(map.graphic_at(pos), SHROUD);

        map.set_visible(pos, true);
        assert_eq!(map.graphic_at(pos), FLOOR.light);

        map.clear_visible();
        assert!(map.is_explored(pos));
        assert_eq!(map.graphic_at(pos), FLOOR.dark);

        let graphics = map.render_graphics();
        assert_eq!(graphics.len(), 9);
        assert_eq!(graphics[4], FLOOR.dark);
        assert_eq!(graphics[0], SHROUD);
    }

    #[test]
    fn entity_lookup_and_placement() {
        let mut map = GameMap::new(5, 5);
        let player = map.add_entity(Entity::player(Pos::default()));
        let orc = ORC.spawn(&mut map, Pos { y: 2, x: 2 });

        assert!(map.place_entity(player, Pos { y: 1, x: 3 }));
        assert_eq!(map.entity_at(Pos { y: 1, x: 3 }).map(|(id, _)| id), Some(player));
        assert_eq!(map.blocking_entity_at(Pos { y: 2, x: 2 }).map(|(id, _)| id), Some(orc));
        assert!(!map.is_occupied(Pos { y: 0, x: 0 }));

        let order: Vec<EntityId> = map.entities().map(|(id, _)| id).collect();
        assert_eq!(order, vec![player, orc]);
    }

    #[test]
    fn fingerprint_tracks_tiles_and_entities() {
        let mut a = GameMap::new(5, 5);
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());

        a.set_tile(Pos { y: 2, x: 2 }, FLOOR);
        assert_ne!(a.fingerprint(), b.fingerprint());

        let mut c = a.clone();
        ORC.spawn(&mut c, Pos { y: 2, x: 2 });
        assert_ne!(a.canonical_bytes(), c.canonical_bytes());
    }
}
