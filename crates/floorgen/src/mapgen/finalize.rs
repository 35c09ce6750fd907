//! Forced-floor override, applied after door resolution so nothing can revert it.

use crate::types::{Pos, Tile};

use super::error::MapGenError;
use super::grid::Grid;

/// Forced floors must target the interior; border cells would break the wall ring
/// and are rejected the same way as coordinates past the edge.
pub(super) fn validate_forced_floors(
    width: usize,
    height: usize,
    positions: &[Pos],
) -> Result<(), MapGenError> {
    match positions
        .iter()
        .find(|pos| pos.x == 0 || pos.y == 0 || pos.x >= width - 1 || pos.y >= height - 1)
    {
        Some(pos) => Err(MapGenError::OutOfBounds { x: pos.x, y: pos.y, width, height }),
        None => Ok(()),
    }
}

pub(super) fn force_floors(grid: &mut Grid, positions: &[Pos]) {
    for &pos in positions {
        debug_assert!(grid.in_interior(pos));
        grid.set(pos, Tile::Floor);
    }
}
