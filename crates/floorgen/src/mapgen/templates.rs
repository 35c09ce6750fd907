//! Immutable catalog of stampable room shapes.

use serde::{Deserialize, Serialize};

use crate::types::{TILE_DOOR, Tile};

use super::constraints::TemplateConstraint;
use super::error::MapGenError;

/// Rectangular room pattern made of `Wall`, `Floor`, and `DoorCandidate` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateDocument", into = "TemplateDocument")]
pub struct RoomTemplate {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl RoomTemplate {
    pub fn new(name: impl Into<String>, rows: &[Vec<i8>]) -> Result<Self, MapGenError> {
        let name = name.into();
        let invalid = |reason: String| MapGenError::InvalidTemplate { name: name.clone(), reason };

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(invalid("layout needs at least one row and one column".to_string()));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(invalid(format!("row {y} has {} cells, expected {width}", row.len())));
            }
            for (x, &code) in row.iter().enumerate() {
                let tile = Tile::from_code(code)
                    .filter(|_| code != TILE_DOOR)
                    .ok_or_else(|| invalid(format!("unsupported code {code} at ({x}, {y})")))?;
                cells.push(tile);
            }
        }

        Ok(Self { name, width, height, cells })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at template-local `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Tile {
        self.cells[y * self.width + x]
    }

    pub fn door_candidate_count(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == Tile::DoorCandidate).count()
    }
}

#[derive(Serialize, Deserialize)]
struct TemplateDocument {
    name: String,
    #[serde(default)]
    width: Option<usize>,
    #[serde(default)]
    height: Option<usize>,
    layout: Vec<Vec<i8>>,
}

impl TryFrom<TemplateDocument> for RoomTemplate {
    type Error = MapGenError;

    fn try_from(document: TemplateDocument) -> Result<Self, Self::Error> {
        let template = Self::new(document.name, &document.layout)?;
        let declared = (
            document.width.unwrap_or(template.width),
            document.height.unwrap_or(template.height),
        );
        if declared != (template.width, template.height) {
            return Err(MapGenError::InvalidTemplate {
                name: template.name,
                reason: format!(
                    "declared size {}x{} does not match layout {}x{}",
                    declared.0, declared.1, template.width, template.height
                ),
            });
        }
        Ok(template)
    }
}

impl From<RoomTemplate> for TemplateDocument {
    fn from(template: RoomTemplate) -> Self {
        let layout = template
            .cells
            .chunks(template.width)
            .map(|row| row.iter().map(|tile| tile.code()).collect())
            .collect();
        Self {
            name: template.name,
            width: Some(template.width),
            height: Some(template.height),
            layout,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateLibrary {
    templates: Vec<RoomTemplate>,
}

impl TemplateLibrary {
    pub fn new(templates: Vec<RoomTemplate>) -> Self {
        Self { templates }
    }

    /// Stock rooms: a 3x3 closet, 5x5 and 5x4 rooms, and a 4x4 L-shape.
    pub fn builtin() -> Self {
        let specs: [(&str, Vec<Vec<i8>>); 4] = [
            ("3x3 Room", vec![vec![1, -2, 1], vec![1, 0, 1], vec![1, 1, 1]]),
            (
                "5x5 Room",
                vec![
                    vec![1, 1, 1, 1, 1],
                    vec![1, 0, 0, 0, 1],
                    vec![1, 0, 0, 0, 1],
                    vec![1, 0, 0, 0, 1],
                    vec![1, -2, 1, -2, 1],
                ],
            ),
            (
                "5x4 Room",
                vec![
                    vec![1, 1, -2, 1, 1],
                    vec![1, 0, 0, 0, 1],
                    vec![1, 0, 0, 0, 1],
                    vec![1, 1, 1, 1, 1],
                ],
            ),
            (
                "L-shape 4x4",
                vec![vec![1, 1, 1, 1], vec![1, 0, 0, 1], vec![1, 0, 1, -1], vec![1, -2, 1, -1]],
            ),
        ];

        let templates = specs
            .iter()
            .map(|(name, rows)| {
                RoomTemplate::new(*name, rows).expect("builtin room templates are well-formed")
            })
            .collect();
        Self { templates }
    }

    /// Parses a JSON array of `{ name, width, height, layout }` documents.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn templates(&self) -> &[RoomTemplate] {
        &self.templates
    }

    pub fn get(&self, index: usize) -> Option<&RoomTemplate> {
        self.templates.get(index)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Catalog indices, in catalog order, of templates inside the constraint's size window.
    pub fn eligible(&self, constraint: &TemplateConstraint) -> Vec<usize> {
        self.templates
            .iter()
            .enumerate()
            .filter(|(_, template)| constraint.accepts(template.width, template.height))
            .map(|(index, _)| index)
            .collect()
    }
}

impl From<Vec<RoomTemplate>> for TemplateLibrary {
    fn from(templates: Vec<RoomTemplate>) -> Self {
        Self::new(templates)
    }
}
