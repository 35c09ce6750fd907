//! High-level orchestration: grid, placement, door resolution, forced floors.

use tracing::{debug, trace};

use super::doors::resolve_doors;
use super::error::MapGenError;
use super::finalize::force_floors;
use super::grid::Grid;
use super::model::{GenerationParams, GenerationResult};
use super::placement::{PlacementContext, place_rooms};
use super::sequence::SeededSequence;

/// Holds immutable parameters only. Every `generate` call builds its own
/// sequence and grid, so a generator can be shared across threads.
#[derive(Clone, Debug)]
pub struct MapGenerator {
    params: GenerationParams,
}

impl MapGenerator {
    pub fn new(params: GenerationParams) -> Self {
        Self { params }
    }

    pub fn generate(&self) -> Result<GenerationResult, MapGenError> {
        let params = &self.params;
        params.validate()?;

        let mut grid = Grid::new(params.width, params.height)?;
        let mut sequence = SeededSequence::with_algorithm(params.seed, params.sequence_algorithm);

        let placements = place_rooms(
            &PlacementContext {
                library: &params.templates,
                constraints: &params.template_data,
                max_attempts: params.max_placement_attempts,
            },
            &mut grid,
            &mut sequence,
        );

        let doors = resolve_doors(&mut grid, &mut sequence, params.door_density);
        trace!(doors = doors.doors, walled = doors.walled, "resolved door candidates");

        force_floors(&mut grid, &params.force_floor_pos);

        debug!(
            seed = params.seed,
            width = params.width,
            height = params.height,
            rooms = placements.len(),
            constraints = params.template_data.len(),
            doors = doors.doors,
            "generated layout"
        );

        Ok(GenerationResult { layout: grid, placements })
    }
}
