//! Generation inputs and the finished layout handed back to callers.

use crate::types::Pos;

use super::constraints::TemplateConstraint;
use super::error::MapGenError;
use super::finalize::validate_forced_floors;
use super::grid::{Grid, MIN_GRID_SIDE};
use super::sequence::SequenceAlgorithm;
use super::templates::TemplateLibrary;

pub const DEFAULT_DOOR_DENSITY: f64 = 0.5;
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    pub width: usize,
    pub height: usize,
    pub templates: TemplateLibrary,
    pub template_data: Vec<TemplateConstraint>,
    pub force_floor_pos: Vec<Pos>,
    pub seed: i64,
    /// Probability that a door candidate becomes a door rather than a wall.
    pub door_density: f64,
    pub max_placement_attempts: u32,
    pub sequence_algorithm: SequenceAlgorithm,
}

impl GenerationParams {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            templates: TemplateLibrary::default(),
            template_data: Vec::new(),
            force_floor_pos: Vec::new(),
            seed: 0,
            door_density: DEFAULT_DOOR_DENSITY,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            sequence_algorithm: SequenceAlgorithm::default(),
        }
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_templates(mut self, templates: impl Into<TemplateLibrary>) -> Self {
        self.templates = templates.into();
        self
    }

    pub fn with_template_data(
        mut self,
        template_data: impl IntoIterator<Item = TemplateConstraint>,
    ) -> Self {
        self.template_data = template_data.into_iter().collect();
        self
    }

    pub fn with_force_floor_pos(
        mut self,
        positions: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        self.force_floor_pos = positions.into_iter().map(|(x, y)| Pos::new(x, y)).collect();
        self
    }

    pub fn with_door_density(mut self, door_density: f64) -> Self {
        self.door_density = door_density;
        self
    }

    pub fn with_max_placement_attempts(mut self, max_placement_attempts: u32) -> Self {
        self.max_placement_attempts = max_placement_attempts;
        self
    }

    pub fn with_sequence_algorithm(mut self, sequence_algorithm: SequenceAlgorithm) -> Self {
        self.sequence_algorithm = sequence_algorithm;
        self
    }

    /// Rejects structural input errors before any grid work starts.
    pub fn validate(&self) -> Result<(), MapGenError> {
        if self.width < MIN_GRID_SIDE || self.height < MIN_GRID_SIDE {
            return Err(MapGenError::InvalidDimensions { width: self.width, height: self.height });
        }
        if !(0.0..=1.0).contains(&self.door_density) {
            return Err(MapGenError::InvalidDoorDensity(self.door_density));
        }
        if self.max_placement_attempts == 0 {
            return Err(MapGenError::InvalidPlacementAttempts);
        }
        validate_forced_floors(self.width, self.height, &self.force_floor_pos)
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new(16, 16)
    }
}

/// A room stamped into the layout, reported so callers can check how many
/// constraints were satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedRoom {
    pub constraint_index: usize,
    pub template_name: String,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl PlacedRoom {
    pub fn contains(&self, pos: Pos) -> bool {
        (self.x..self.x + self.width).contains(&pos.x)
            && (self.y..self.y + self.height).contains(&pos.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub layout: Grid,
    pub placements: Vec<PlacedRoom>,
}
