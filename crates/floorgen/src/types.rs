use serde::{Deserialize, Serialize};

/// Numeric code of a walkable floor cell in an encoded layout.
pub const TILE_FLOOR: i8 = 0;
/// Numeric code of a wall cell in an encoded layout.
pub const TILE_WALL: i8 = 1;
/// Numeric code of a resolved door. Renderers that only know walls treat it as walkable.
pub const TILE_DOOR: i8 = 2;

pub(crate) const TILE_DOOR_CANDIDATE: i8 = -2;
/// Legacy template code for a cell the template leaves untouched.
pub(crate) const TILE_TRANSPARENT: i8 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Tile state of a single grid cell.
///
/// `DoorCandidate` only exists while a layout is being built; every candidate is
/// resolved to `Door` or `Wall` before a layout leaves the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    Wall,
    Floor,
    DoorCandidate,
    Door,
}

impl Tile {
    pub fn code(self) -> i8 {
        match self {
            Self::Wall => TILE_WALL,
            Self::Floor => TILE_FLOOR,
            Self::DoorCandidate => TILE_DOOR_CANDIDATE,
            Self::Door => TILE_DOOR,
        }
    }

    /// Decodes a template or layout code. The transparent code reads as `Wall`
    /// since stamping never copies template walls.
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            TILE_WALL | TILE_TRANSPARENT => Some(Self::Wall),
            TILE_FLOOR => Some(Self::Floor),
            TILE_DOOR_CANDIDATE => Some(Self::DoorCandidate),
            TILE_DOOR => Some(Self::Door),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::DoorCandidate => '?',
            Self::Door => '+',
        }
    }
}
