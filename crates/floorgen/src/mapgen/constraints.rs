use serde::{Deserialize, Serialize};

/// One placement request, stored and persisted as
/// `[min_width, min_height, max_width, max_height, min_count, max_count]`.
///
/// Each entry gets a single attempt cycle. The counts are carried for callers and
/// persistence but do not repeat placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 6]", into = "[usize; 6]")]
pub struct TemplateConstraint {
    pub min_width: usize,
    pub min_height: usize,
    pub max_width: usize,
    pub max_height: usize,
    pub min_count: usize,
    pub max_count: usize,
}

impl TemplateConstraint {
    pub fn new(
        min_width: usize,
        min_height: usize,
        max_width: usize,
        max_height: usize,
        min_count: usize,
        max_count: usize,
    ) -> Self {
        Self { min_width, min_height, max_width, max_height, min_count, max_count }
    }

    /// Accepts any template of exactly `width` x `height`.
    pub fn exact(width: usize, height: usize) -> Self {
        Self::new(width, height, width, height, 1, 1)
    }

    pub fn accepts(&self, width: usize, height: usize) -> bool {
        (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height)
    }
}

impl From<[usize; 6]> for TemplateConstraint {
    fn from(fields: [usize; 6]) -> Self {
        let [min_width, min_height, max_width, max_height, min_count, max_count] = fields;
        Self::new(min_width, min_height, max_width, max_height, min_count, max_count)
    }
}

impl From<TemplateConstraint> for [usize; 6] {
    fn from(constraint: TemplateConstraint) -> Self {
        [
            constraint.min_width,
            constraint.min_height,
            constraint.max_width,
            constraint.max_height,
            constraint.min_count,
            constraint.max_count,
        ]
    }
}
