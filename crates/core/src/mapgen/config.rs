//! Generation parameters and their fail-fast validation.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Placement attempts, not a guaranteed room count.
    pub max_rooms: u32,
    pub room_min_size: u32,
    pub room_max_size: u32,
    pub map_width: usize,
    pub map_height: usize,
    pub max_monsters_per_room: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            max_rooms: 30,
            room_min_size: 6,
            room_max_size: 10,
            map_width: 80,
            map_height: 45,
            max_monsters_per_room: 2,
        }
    }
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), GenerationError> {
        let (width, height) = (self.map_width, self.map_height);
        if width == 0 || height == 0 {
            return Err(GenerationError::EmptyMap { width, height });
        }
        for dimension in [width, height] {
            if i32::try_from(dimension).is_err() {
                return Err(GenerationError::MapTooLarge(dimension));
            }
        }
        if self.room_min_size < 2 {
            return Err(GenerationError::RoomTooSmall(self.room_min_size));
        }
        if self.room_min_size > self.room_max_size {
            return Err(GenerationError::RoomSizeInverted {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        // The top-left corner is drawn from [0, dimension - size - 1].
        let needed = self.room_max_size as usize + 1;
        if needed > width || needed > height {
            return Err(GenerationError::RoomExceedsMap {
                room_max_size: self.room_max_size,
                width,
                height,
            });
        }
        Ok(())
    }
}
