//! L-shaped corridors between two points.

use std::iter::Chain;

use rand_chacha::rand_core::Rng;

use crate::types::Pos;

use super::seed::coin_flip;

/// Cells of an integer Bresenham line, both endpoints included.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    current: Pos,
    end: Pos,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    pub fn new(start: Pos, end: Pos) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: (end.x - start.x).signum(),
            sy: (end.y - start.y).signum(),
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.done {
            return None;
        }
        let pos = self.current;
        if pos == self.end {
            self.done = true;
            return Some(pos);
        }
        let doubled = 2 * self.err;
        if doubled >= self.dy {
            self.err += self.dy;
            self.current.x += self.sx;
        }
        if doubled <= self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(pos)
    }
}

pub type Tunnel = Chain<BresenhamLine, BresenhamLine>;

/// Returns the two-leg path from `start` to `end`.
///
/// One coin flip picks the corner: `(end.x, start.y)` runs horizontally first,
/// `(start.x, end.y)` vertically first. The corner cell is yielded by both legs.
pub fn tunnel_between<R: Rng + ?Sized>(rng: &mut R, start: Pos, end: Pos) -> Tunnel {
    let corner = if coin_flip(rng) {
        Pos { y: start.y, x: end.x }
    } else {
        Pos { y: end.y, x: start.x }
    };
    BresenhamLine::new(start, corner).chain(BresenhamLine::new(corner, end))
}
