//! Packed tile records shared by map generation and the renderer.
//!
//! A [`Tile`] carries two [`Graphic`]s: `light` is drawn while the cell is in
//! the field of view, `dark` once it has only been remembered. Cells that were
//! never observed are drawn with [`SHROUD`].

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Graphic {
    /// Unicode codepoint.
    pub glyph: u32,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Graphic {
    pub const fn new(glyph: char, fg: Rgb, bg: Rgb) -> Self {
        Self { glyph: glyph as u32, fg, bg }
    }

    pub fn glyph_char(self) -> char {
        char::from_u32(self.glyph).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn packed_bytes(self) -> [u8; 10] {
        let mut bytes = [0_u8; 10];
        bytes[..4].copy_from_slice(&self.glyph.to_le_bytes());
        bytes[4..7].copy_from_slice(&self.fg.bytes());
        bytes[7..].copy_from_slice(&self.bg.bytes());
        bytes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub walkable: bool,
    /// False when the tile blocks field of view.
    pub transparent: bool,
    pub dark: Graphic,
    pub light: Graphic,
}

impl Tile {
    pub const PACKED_LEN: usize = 22;

    pub fn packed_bytes(self) -> [u8; Self::PACKED_LEN] {
        let mut bytes = [0_u8; Self::PACKED_LEN];
        bytes[0] = u8::from(self.walkable);
        bytes[1] = u8::from(self.transparent);
        bytes[2..12].copy_from_slice(&self.dark.packed_bytes());
        bytes[12..].copy_from_slice(&self.light.packed_bytes());
        bytes
    }
}

pub const SHROUD: Graphic = Graphic::new(' ', Rgb::WHITE, Rgb::BLACK);

pub const FLOOR: Tile = Tile {
    walkable: true,
    transparent: true,
    dark: Graphic::new(' ', Rgb::WHITE, Rgb::new(21, 31, 44)),
    light: Graphic::new(' ', Rgb::WHITE, Rgb::new(200, 180, 50)),
};

pub const WALL: Tile = Tile {
    walkable: false,
    transparent: false,
    dark: Graphic::new(' ', Rgb::WHITE, Rgb::new(1, 3, 12)),
    light: Graphic::new(' ', Rgb::WHITE, Rgb::new(130, 110, 50)),
};
