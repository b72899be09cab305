use thiserror::Error;

/// Precondition violations rejected before any random draw is made.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    EmptyMap { width: usize, height: usize },
    #[error("map dimension {0} exceeds the supported coordinate range")]
    MapTooLarge(usize),
    #[error("room_min_size must be at least 2 to leave a carvable interior, got {0}")]
    RoomTooSmall(u32),
    #[error("room_min_size ({min}) is larger than room_max_size ({max})")]
    RoomSizeInverted { min: u32, max: u32 },
    #[error("a {width}x{height} room has no interior to populate")]
    RoomWithoutInterior { width: i32, height: i32 },
    #[error("rooms up to {room_max_size} tiles need a map larger than {width}x{height}")]
    RoomExceedsMap { room_max_size: u32, width: usize, height: usize },
}
