use floorgen::{
    GenerationParams, MapGenError, MapGenerator, Pos, SequenceAlgorithm, TILE_FLOOR, TILE_WALL,
    TemplateConstraint, TemplateLibrary, Tile, generate_layout,
};

fn base_params() -> GenerationParams {
    GenerationParams::new(20, 20)
        .with_seed(123)
        .with_templates(TemplateLibrary::builtin())
        .with_template_data([TemplateConstraint::new(1, 1, 99, 99, 1, 99)])
}

fn busy_params(seed: i64) -> GenerationParams {
    base_params()
        .with_seed(seed)
        .with_template_data([TemplateConstraint::new(1, 1, 99, 99, 1, 99); 6])
}

#[test]
fn layout_has_requested_dimensions() {
    for (width, height) in [(3, 3), (20, 20), (16, 9), (5, 31)] {
        let params = base_params();
        let params = GenerationParams { width, height, ..params };
        let codes = generate_layout(&params).expect("valid params").layout.to_codes();
        assert_eq!(codes.len(), height);
        assert!(codes.iter().all(|row| row.len() == width));
    }
}

#[test]
fn layout_border_is_wall() {
    let codes = generate_layout(&busy_params(123)).expect("valid params").layout.to_codes();
    let (width, height) = (codes[0].len(), codes.len());
    for x in 0..width {
        assert_eq!(codes[0][x], TILE_WALL);
        assert_eq!(codes[height - 1][x], TILE_WALL);
    }
    for row in &codes {
        assert_eq!(row[0], TILE_WALL);
        assert_eq!(row[width - 1], TILE_WALL);
    }
}

#[test]
fn empty_constraint_list_yields_solid_walled_grid() {
    let params = GenerationParams::new(20, 20).with_seed(123);
    let result = generate_layout(&params).expect("valid params");
    assert_eq!(result.layout.count(Tile::Wall), 400);
    assert!(result.placements.is_empty());
}

#[test]
fn empty_catalog_is_not_an_error() {
    let params = base_params().with_templates(TemplateLibrary::default());
    let result = generate_layout(&params).expect("empty catalog should still generate");
    assert_eq!(result.layout.count(Tile::Wall), 400);
}

#[test]
fn impossible_constraints_place_nothing() {
    let params =
        base_params().with_template_data([TemplateConstraint::new(99, 99, 100, 100, 1, 1)]);
    let result = generate_layout(&params).expect("valid params");
    assert!(result.placements.is_empty());
    assert_eq!(result.layout.count(Tile::Floor), 0);
}

#[test]
fn same_seed_produces_identical_layouts() {
    let first = generate_layout(&busy_params(42)).expect("valid params");
    let second = generate_layout(&busy_params(42)).expect("valid params");
    assert_eq!(first.layout, second.layout);
    assert_eq!(first.placements, second.placements);
}

#[test]
fn different_seeds_produce_different_layouts() {
    let first = generate_layout(&busy_params(1)).expect("valid params");
    let second = generate_layout(&busy_params(2)).expect("valid params");
    assert_ne!(first.layout.to_codes(), second.layout.to_codes());
}

#[test]
fn negative_seeds_generate_layouts() {
    let first = generate_layout(&busy_params(-1)).expect("negative seeds are valid");
    let second = generate_layout(&busy_params(-1)).expect("negative seeds are valid");
    assert_eq!(first, second);
    assert!(!first.placements.is_empty());
}

#[test]
fn legacy_stream_only_reads_low_seed_bits() {
    let legacy = |seed: i64| {
        generate_layout(&busy_params(seed).with_sequence_algorithm(SequenceAlgorithm::Mulberry32))
            .expect("valid params")
    };
    assert_eq!(legacy(-1), legacy(0xFFFF_FFFF));
    assert_eq!(legacy(7), legacy(7 + (1 << 32)));
}

#[test]
fn forced_floors_are_always_floor() {
    let forced = [(5, 5), (10, 12), (1, 1), (18, 18)];
    for seed in 0..10 {
        let params = busy_params(seed).with_force_floor_pos(forced);
        let codes = generate_layout(&params).expect("valid params").layout.to_codes();
        for (x, y) in forced {
            assert_eq!(codes[y][x], TILE_FLOOR, "seed {seed} at ({x}, {y})");
        }
    }
}

#[test]
fn full_door_density_leaves_no_candidates() {
    let params = busy_params(9).with_door_density(1.0);
    let result = generate_layout(&params).expect("valid params");
    assert!(!result.placements.is_empty());
    assert!(result.layout.to_codes().iter().flatten().all(|&code| code >= 0));
    assert!(result.layout.count(Tile::Floor) > 0);
    assert!(result.layout.count(Tile::Door) > 0);
}

#[test]
fn zero_door_density_strictly_adds_walls() {
    for seed in [3_i64, 17, 2_026] {
        let walled = generate_layout(&busy_params(seed).with_door_density(0.0)).expect("valid");
        let doored = generate_layout(&busy_params(seed).with_door_density(1.0)).expect("valid");
        assert_eq!(walled.placements, doored.placements, "room layout must not depend on density");
        assert_eq!(walled.layout.count(Tile::Door), 0);
        assert!(walled.layout.count(Tile::Wall) > doored.layout.count(Tile::Wall));
    }
}

#[test]
fn structural_errors_fail_the_call() {
    let too_small = GenerationParams { width: 2, ..base_params() };
    assert_eq!(
        generate_layout(&too_small),
        Err(MapGenError::InvalidDimensions { width: 2, height: 20 })
    );

    let outside = base_params().with_force_floor_pos([(3, 20)]);
    assert_eq!(
        MapGenerator::new(outside).generate(),
        Err(MapGenError::OutOfBounds { x: 3, y: 20, width: 20, height: 20 })
    );

    let on_border = base_params().with_force_floor_pos([(19, 4)]);
    assert!(matches!(
        generate_layout(&on_border),
        Err(MapGenError::OutOfBounds { x: 19, y: 4, .. })
    ));
}

#[test]
fn forced_floor_overrides_room_walls_without_moving_rooms() {
    let result = generate_layout(&busy_params(5)).expect("valid params");
    let room = result.placements.first().expect("first constraint always fits an empty grid");
    let corner = Pos::new(room.x, room.y);

    let forced = busy_params(5).with_force_floor_pos([(corner.x, corner.y)]);
    let forced_result = generate_layout(&forced).expect("valid params");
    assert_eq!(forced_result.layout.tile(corner), Tile::Floor);
    assert_eq!(forced_result.placements, result.placements);
}
