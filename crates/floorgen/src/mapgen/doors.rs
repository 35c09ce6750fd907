//! Second pass that turns every door candidate into a door or a wall.

use crate::types::{Pos, Tile};

use super::grid::Grid;
use super::sequence::SeededSequence;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct DoorSummary {
    pub(super) doors: usize,
    pub(super) walled: usize,
}

/// Sweeps rows top to bottom, columns left to right, drawing one float per
/// candidate from the sequence that drove placement.
pub(super) fn resolve_doors(
    grid: &mut Grid,
    sequence: &mut SeededSequence,
    door_density: f64,
) -> DoorSummary {
    let mut summary = DoorSummary::default();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos::new(x, y);
            if grid.tile(pos) != Tile::DoorCandidate {
                continue;
            }
            if sequence.next_float() < door_density {
                grid.set(pos, Tile::Door);
                summary.doors += 1;
            } else {
                grid.set(pos, Tile::Wall);
                summary.walled += 1;
            }
        }
    }
    summary
}
