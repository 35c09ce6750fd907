//! Row-major tile buffer with a permanent wall border.

use crate::types::{Pos, Tile};

use super::error::MapGenError;

pub const MIN_GRID_SIDE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Allocates a `width` x `height` grid filled with `Wall`. The border ring is
    /// never written by placement, so it stays wall for the life of the grid.
    pub fn new(width: usize, height: usize) -> Result<Self, MapGenError> {
        if width < MIN_GRID_SIDE || height < MIN_GRID_SIDE {
            return Err(MapGenError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height, tiles: vec![Tile::Wall; width * height] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1
    }

    pub fn in_interior(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.is_border(pos)
    }

    /// Panics when `pos` is outside the grid.
    pub fn tile(&self, pos: Pos) -> Tile {
        self.tiles[self.index(pos)]
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.in_bounds(pos).then(|| self.tile(pos))
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: Tile) {
        let index = self.index(pos);
        self.tiles[index] = tile;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    /// Row-major matrix of public tile codes, `layout[y][x]`.
    pub fn to_codes(&self) -> Vec<Vec<i8>> {
        self.rows().map(|row| row.iter().map(|tile| tile.code()).collect()).collect()
    }

    pub fn to_ascii(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            text.extend(row.iter().map(|tile| tile.glyph()));
            text.push('\n');
        }
        text
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.tiles.iter().map(|tile| tile.code() as u8));
        bytes
    }

    fn index(&self, pos: Pos) -> usize {
        pos.y * self.width + pos.x
    }
}
