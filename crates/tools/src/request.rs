//! TOML generation request consumed by `genmap`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use floorgen::mapgen::{DEFAULT_DOOR_DENSITY, DEFAULT_MAX_PLACEMENT_ATTEMPTS};
use floorgen::{GenerationParams, SequenceAlgorithm, TemplateConstraint, TemplateLibrary};
use serde::Deserialize;

pub const DEFAULT_OUTPUT_PATH: &str = "mapdata/generated_map_v2.json";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GenerationRequest {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub seed: i64,
    #[serde(default = "default_door_density")]
    pub door_density: f64,
    #[serde(default = "default_max_placement_attempts")]
    pub max_placement_attempts: u32,
    #[serde(default)]
    pub sequence_algorithm: SequenceAlgorithm,
    #[serde(default)]
    pub template_data: Vec<TemplateConstraint>,
    #[serde(default)]
    pub force_floor_pos: Vec<[usize; 2]>,
    /// JSON template catalog; the builtin library is used when absent.
    #[serde(default)]
    pub templates: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_door_density() -> f64 {
    DEFAULT_DOOR_DENSITY
}

fn default_max_placement_attempts() -> u32 {
    DEFAULT_MAX_PLACEMENT_ATTEMPTS
}

impl Default for GenerationRequest {
    /// The stock 16x16 floor: two 5x5 rooms, a closet, and three rooms of any size.
    fn default() -> Self {
        let any_size = TemplateConstraint::new(1, 1, 99, 99, 1, 99);
        Self {
            width: 16,
            height: 16,
            seed: 12_345,
            door_density: 0.6,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            sequence_algorithm: SequenceAlgorithm::default(),
            template_data: vec![
                TemplateConstraint::exact(5, 5),
                TemplateConstraint::exact(5, 5),
                TemplateConstraint::exact(3, 3),
                any_size,
                any_size,
                any_size,
            ],
            force_floor_pos: Vec::new(),
            templates: None,
            output: None,
        }
    }
}

/// Command-line values that take precedence over the request file.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RequestOverrides {
    /// JSON template catalog, overriding the request's catalog
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,
    #[arg(long)]
    pub door_density: Option<f64>,
    /// Use the 32-bit stream of the historical map tooling
    #[arg(long)]
    pub legacy_rng: bool,
}

impl GenerationRequest {
    pub fn apply_overrides(&mut self, overrides: &RequestOverrides) {
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if let Some(door_density) = overrides.door_density {
            self.door_density = door_density;
        }
        if overrides.legacy_rng {
            self.sequence_algorithm = SequenceAlgorithm::Mulberry32;
        }
        if let Some(templates) = &overrides.templates {
            self.templates = Some(templates.clone());
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse request file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_templates(&self) -> Result<TemplateLibrary> {
        let Some(path) = &self.templates else {
            return Ok(TemplateLibrary::builtin());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template catalog: {}", path.display()))?;
        TemplateLibrary::from_json(&json)
            .with_context(|| format!("Failed to parse template catalog: {}", path.display()))
    }

    pub fn to_params(&self, templates: TemplateLibrary) -> GenerationParams {
        GenerationParams::new(self.width, self.height)
            .with_seed(self.seed)
            .with_templates(templates)
            .with_template_data(self.template_data.iter().copied())
            .with_force_floor_pos(self.force_floor_pos.iter().map(|&[x, y]| (x, y)))
            .with_door_density(self.door_density)
            .with_max_placement_attempts(self.max_placement_attempts)
            .with_sequence_algorithm(self.sequence_algorithm)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }
}
