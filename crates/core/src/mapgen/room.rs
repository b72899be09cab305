//! Axis-aligned rectangular rooms.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::types::Pos;

/// A room spanning `x1..=x2` by `y1..=y2` including its wall shell.
///
/// Only `[x1 + 1, x2)` by `[y1 + 1, y2)` is carved, so the top and left
/// borders stay wall while the far edge relies on the cell beyond `x2`/`y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub fn center(&self) -> Pos {
        Pos { y: (self.y1 + self.y2).div_euclid(2), x: (self.x1 + self.x2).div_euclid(2) }
    }

    /// Carvable interior as half-open x and y ranges.
    pub fn inner(&self) -> (Range<i32>, Range<i32>) {
        (self.x1 + 1..self.x2, self.y1 + 1..self.y2)
    }

    /// Overlap test inclusive of the outer boundary; rooms may still end up
    /// sharing a wall.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    pub fn contains_inner(&self, pos: Pos) -> bool {
        let (xs, ys) = self.inner();
        xs.contains(&pos.x) && ys.contains(&pos.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn center_floors_the_midpoint() {
        let room = RectangularRoom { x1: 0, y1: 0, x2: 10, y2: 6 };
        assert_eq!(room.center(), Pos { y: 3, x: 5 });

        let odd = RectangularRoom::new(3, 4, 5, 3);
        assert_eq!(odd.center(), Pos { y: 5, x: 5 });
    }

    #[test]
    fn inner_excludes_top_left_shell() {
        let room = RectangularRoom::new(2, 5, 4, 3);
        assert_eq!(room.inner(), (3..6, 6..8));
        assert!(room.contains_inner(Pos { y: 6, x: 3 }));
        assert!(room.contains_inner(Pos { y: 7, x: 5 }));
        assert!(!room.contains_inner(Pos { y: 5, x: 3 }));
        assert!(!room.contains_inner(Pos { y: 6, x: 6 }));
    }

    #[test]
    fn touching_rooms_count_as_intersecting() {
        let left = RectangularRoom::new(0, 0, 5, 5);
        let touching = RectangularRoom::new(5, 0, 5, 5);
        let apart = RectangularRoom::new(6, 0, 5, 5);
        assert!(left.intersects(&touching));
        assert!(!left.intersects(&apart));
    }

    #[test]
    fn nested_room_intersects() {
        let outer = RectangularRoom::new(0, 0, 20, 20);
        let inner = RectangularRoom::new(5, 5, 3, 3);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    fn room_strategy() -> impl Strategy<Value = RectangularRoom> {
        (0_i32..60, 0_i32..40, 2_i32..12, 2_i32..12)
            .prop_map(|(x, y, w, h)| RectangularRoom::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(a in room_strategy(), b in room_strategy()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn a_room_always_intersects_itself(room in room_strategy()) {
            prop_assert!(room.intersects(&room));
        }

        #[test]
        fn center_lies_within_bounds(room in room_strategy()) {
            let center = room.center();
            prop_assert!((room.x1..=room.x2).contains(&center.x));
            prop_assert!((room.y1..=room.y2).contains(&center.y));
        }
    }
}
