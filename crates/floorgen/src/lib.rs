pub mod mapgen;
pub mod types;

pub use mapgen::{
    GenerationParams, GenerationResult, Grid, MapGenError, MapGenerator, PlacedRoom, RoomTemplate,
    SeededSequence, SequenceAlgorithm, TemplateConstraint, TemplateLibrary, generate_layout,
};
pub use types::*;
