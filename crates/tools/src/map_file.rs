//! Persisted map document: request metadata plus the finished layout.
//!
//! The template catalog, constraint list, and forced-floor list are dropped
//! before writing so the stored artifact only carries what replays need.
//! Metadata fields are written one per line and every layout row stays on a
//! single line so diffs of regenerated maps remain readable.
//!
//! Layout cells use the tile codes `0` floor, `1` wall, and `2` door. Readers
//! that only understand floor and wall should treat any code other than `1`
//! as walkable; `format_version` is bumped if the code table ever changes.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use floorgen::{GenerationParams, Grid, SequenceAlgorithm, Tile};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub format_version: u32,
    pub width: usize,
    pub height: usize,
    pub seed: i64,
    pub door_density: f64,
    pub max_placement_attempts: u32,
    pub sequence_algorithm: SequenceAlgorithm,
    pub generated_at_unix_ms: u64,
    pub layout: Vec<Vec<i8>>,
}

impl MapDocument {
    pub fn new(params: &GenerationParams, layout: &Grid, generated_at_unix_ms: u64) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            width: params.width,
            height: params.height,
            seed: params.seed,
            door_density: params.door_density,
            max_placement_attempts: params.max_placement_attempts,
            sequence_algorithm: params.sequence_algorithm,
            generated_at_unix_ms,
            layout: layout.to_codes(),
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let metadata: [(&str, Value); 8] = [
            ("format_version", serde_json::to_value(self.format_version)?),
            ("width", serde_json::to_value(self.width)?),
            ("height", serde_json::to_value(self.height)?),
            ("seed", serde_json::to_value(self.seed)?),
            ("door_density", serde_json::to_value(self.door_density)?),
            ("max_placement_attempts", serde_json::to_value(self.max_placement_attempts)?),
            ("sequence_algorithm", serde_json::to_value(self.sequence_algorithm)?),
            ("generated_at_unix_ms", serde_json::to_value(self.generated_at_unix_ms)?),
        ];

        let mut parts = Vec::with_capacity(metadata.len() + 1);
        for (key, value) in metadata {
            parts.push(format!("  \"{key}\": {}", serde_json::to_string(&value)?));
        }

        let rows: Vec<String> = self
            .layout
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(i8::to_string).collect();
                format!("    [{}]", cells.join(", "))
            })
            .collect();
        parts.push(format!("  \"layout\": [\n{}\n  ]", rows.join(",\n")));

        Ok(format!("{{\n{}\n}}\n", parts.join(",\n")))
    }

    /// Text rendering of the stored codes; codes no tile uses render as `?`.
    pub fn to_ascii(&self) -> String {
        let mut text = String::new();
        for row in &self.layout {
            text.extend(row.iter().map(|&code| Tile::from_code(code).map_or('?', Tile::glyph)));
            text.push('\n');
        }
        text
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = self.to_json_string().map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let document: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(document)
    }
}

pub fn unix_millis_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |duration| duration.as_millis() as u64)
}
