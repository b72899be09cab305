use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    #[cfg(test)]
    pub(crate) fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EntityKind {
    Player,
    Orc,
    Troll,
}

impl EntityKind {
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Player => 0,
            Self::Orc => 1,
            Self::Troll => 2,
        }
    }
}
