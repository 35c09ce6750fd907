//! Template-driven floor layout generation split into coherent submodules.

pub mod constraints;
pub mod error;
pub mod grid;
pub mod model;
pub mod sequence;
pub mod templates;

mod doors;
mod finalize;
mod generator;
mod placement;

pub use constraints::TemplateConstraint;
pub use error::MapGenError;
pub use generator::MapGenerator;
pub use grid::Grid;
pub use model::{
    DEFAULT_DOOR_DENSITY, DEFAULT_MAX_PLACEMENT_ATTEMPTS, GenerationParams, GenerationResult,
    PlacedRoom,
};
pub use sequence::{SeededSequence, SequenceAlgorithm};
pub use templates::{RoomTemplate, TemplateLibrary};

pub fn generate_layout(params: &GenerationParams) -> Result<GenerationResult, MapGenError> {
    MapGenerator::new(params.clone()).generate()
}
