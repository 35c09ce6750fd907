//! Constraint-driven room stamping with a bounded number of position draws.
//!
//! Draw order per constraint, which every historical seed depends on:
//! one `next_int` selecting the template among the eligible ones, then one
//! `(x, y)` pair of `next_int` draws per attempt until a position fits.

use tracing::debug;

use crate::types::{Pos, Tile};

use super::constraints::TemplateConstraint;
use super::grid::Grid;
use super::model::PlacedRoom;
use super::sequence::SeededSequence;
use super::templates::{RoomTemplate, TemplateLibrary};

pub(super) struct PlacementContext<'a> {
    pub(super) library: &'a TemplateLibrary,
    pub(super) constraints: &'a [TemplateConstraint],
    pub(super) max_attempts: u32,
}

/// Processes every constraint in list order. Constraints that find no template or
/// no free position are skipped; placement never fails the generation.
pub(super) fn place_rooms(
    context: &PlacementContext<'_>,
    grid: &mut Grid,
    sequence: &mut SeededSequence,
) -> Vec<PlacedRoom> {
    let mut placements = Vec::new();
    for (constraint_index, constraint) in context.constraints.iter().enumerate() {
        if let Some(room) =
            place_constraint(context, grid, sequence, constraint_index, constraint)
        {
            placements.push(room);
        }
    }
    placements
}

fn place_constraint(
    context: &PlacementContext<'_>,
    grid: &mut Grid,
    sequence: &mut SeededSequence,
    constraint_index: usize,
    constraint: &TemplateConstraint,
) -> Option<PlacedRoom> {
    let eligible = context.library.eligible(constraint);
    if eligible.is_empty() {
        debug!(constraint_index, ?constraint, "no template matches constraint; skipping");
        return None;
    }

    let pick = sequence.next_int(0, eligible.len() - 1);
    let template = context.library.get(eligible[pick])?;

    let Some((max_x, max_y)) = origin_bounds(grid, template) else {
        debug!(
            constraint_index,
            template = template.name(),
            "template is larger than the grid interior; skipping"
        );
        return None;
    };

    for attempt in 0..context.max_attempts {
        let origin = Pos::new(sequence.next_int(1, max_x), sequence.next_int(1, max_y));
        if !footprint_is_free(grid, template, origin) {
            continue;
        }

        stamp(grid, template, origin);
        debug!(
            constraint_index,
            template = template.name(),
            x = origin.x,
            y = origin.y,
            attempt,
            "placed room"
        );
        return Some(PlacedRoom {
            constraint_index,
            template_name: template.name().to_string(),
            x: origin.x,
            y: origin.y,
            width: template.width(),
            height: template.height(),
        });
    }

    debug!(
        constraint_index,
        template = template.name(),
        attempts = context.max_attempts,
        "placement attempts exhausted"
    );
    None
}

/// Largest top-left origin that keeps the template inside `[1, side - 2]` on both axes.
fn origin_bounds(grid: &Grid, template: &RoomTemplate) -> Option<(usize, usize)> {
    let interior_width = grid.width() - 2;
    let interior_height = grid.height() - 2;
    if template.width() > interior_width || template.height() > interior_height {
        return None;
    }
    Some((grid.width() - 1 - template.width(), grid.height() - 1 - template.height()))
}

fn footprint_is_free(grid: &Grid, template: &RoomTemplate, origin: Pos) -> bool {
    (0..template.height()).all(|ty| {
        (0..template.width())
            .all(|tx| grid.tile(Pos::new(origin.x + tx, origin.y + ty)) == Tile::Wall)
    })
}

fn stamp(grid: &mut Grid, template: &RoomTemplate, origin: Pos) {
    for ty in 0..template.height() {
        for tx in 0..template.width() {
            let cell = template.cell(tx, ty);
            if cell != Tile::Wall {
                grid.set(Pos::new(origin.x + tx, origin.y + ty), cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        width: usize,
        height: usize,
        library: &TemplateLibrary,
        constraints: &[TemplateConstraint],
        seed: i64,
    ) -> (Grid, Vec<PlacedRoom>) {
        let mut grid = Grid::new(width, height).expect("test grid dimensions are valid");
        let mut sequence = SeededSequence::new(seed);
        let context = PlacementContext { library, constraints, max_attempts: 50 };
        let placements = place_rooms(&context, &mut grid, &mut sequence);
        (grid, placements)
    }

    fn closet() -> RoomTemplate {
        RoomTemplate::new("closet", &[vec![1, -2, 1], vec![1, 0, 1], vec![1, 1, 1]])
            .expect("closet template is well formed")
    }

    #[test]
    fn stamps_template_cells_at_the_reported_origin() {
        let library = TemplateLibrary::new(vec![closet()]);
        let (grid, placements) = run(9, 9, &library, &[TemplateConstraint::exact(3, 3)], 5);

        assert_eq!(placements.len(), 1);
        let room = &placements[0];
        assert_eq!(grid.tile(Pos::new(room.x + 1, room.y + 1)), Tile::Floor);
        assert_eq!(grid.tile(Pos::new(room.x + 1, room.y)), Tile::DoorCandidate);
        assert_eq!(grid.count(Tile::Floor), 1);
        assert_eq!(grid.count(Tile::DoorCandidate), 1);
    }

    #[test]
    fn rooms_stay_inside_the_interior() {
        let library = TemplateLibrary::builtin();
        let constraints = vec![TemplateConstraint::new(1, 1, 99, 99, 1, 99); 8];
        for seed in 0..20 {
            let (grid, placements) = run(14, 12, &library, &constraints, seed);
            for room in &placements {
                assert!(room.x >= 1 && room.y >= 1);
                assert!(room.x + room.width <= grid.width() - 1);
                assert!(room.y + room.height <= grid.height() - 1);
            }
        }
    }

    #[test]
    fn placed_rooms_never_overwrite_each_other() {
        let library = TemplateLibrary::builtin();
        let constraints = vec![TemplateConstraint::new(1, 1, 99, 99, 1, 99); 10];
        for seed in 0..20 {
            let (grid, placements) = run(16, 16, &library, &constraints, seed);
            let stamped = grid.count(Tile::Floor) + grid.count(Tile::DoorCandidate);
            let expected: usize = placements
                .iter()
                .map(|room| {
                    let template = library
                        .templates()
                        .iter()
                        .find(|template| template.name() == room.template_name)
                        .expect("placed template comes from the library");
                    template.width() * template.height()
                        - (0..template.height())
                            .flat_map(|ty| (0..template.width()).map(move |tx| (tx, ty)))
                            .filter(|&(tx, ty)| template.cell(tx, ty) == Tile::Wall)
                            .count()
                })
                .sum();
            assert_eq!(stamped, expected, "seed {seed} overlapped rooms");
        }
    }

    #[test]
    fn unmatched_constraint_consumes_no_draws() {
        let library = TemplateLibrary::builtin();
        let impossible = TemplateConstraint::new(99, 99, 100, 100, 1, 1);
        let any = TemplateConstraint::new(1, 1, 99, 99, 1, 99);

        let (with_skip, _) = run(20, 20, &library, &[impossible, any], 77);
        let (without_skip, _) = run(20, 20, &library, &[any], 77);
        assert_eq!(with_skip, without_skip);
    }

    #[test]
    fn oversized_template_is_skipped_without_error() {
        let library = TemplateLibrary::builtin();
        let (grid, placements) = run(5, 5, &library, &[TemplateConstraint::exact(5, 5)], 3);
        assert!(placements.is_empty());
        assert_eq!(grid.count(Tile::Wall), 25);
    }

    #[test]
    fn a_full_interior_exhausts_attempts_quietly() {
        let solid = RoomTemplate::new("solid", &[vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]])
            .expect("solid template is well formed");
        let library = TemplateLibrary::new(vec![solid]);
        let constraints = [TemplateConstraint::exact(3, 3), TemplateConstraint::exact(3, 3)];
        let (grid, placements) = run(5, 5, &library, &constraints, 11);

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].constraint_index, 0);
        assert_eq!(grid.count(Tile::Floor), 9);
    }
}
