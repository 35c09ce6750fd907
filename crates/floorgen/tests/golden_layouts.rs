use floorgen::{
    GenerationParams, MapGenerator, SequenceAlgorithm, TemplateConstraint, TemplateLibrary,
};

#[test]
fn legacy_stream_reproduces_pinned_layout() {
    let params = GenerationParams::new(12, 10)
        .with_seed(2024)
        .with_templates(TemplateLibrary::builtin())
        .with_template_data([TemplateConstraint::new(1, 1, 99, 99, 1, 99); 3])
        .with_force_floor_pos([(10, 8)])
        .with_sequence_algorithm(SequenceAlgorithm::Mulberry32);

    let result = MapGenerator::new(params).generate().expect("valid params");

    let expected = "\
############
#####+######
####...#####
####...#####
############
##...#..####
##...#.#####
##...#+#####
##########.#
############
";
    assert_eq!(
        result.layout.to_ascii(),
        expected,
        "update the pinned layout only when generation rules intentionally change"
    );

    let rooms: Vec<(usize, &str, usize, usize)> = result
        .placements
        .iter()
        .map(|room| (room.constraint_index, room.template_name.as_str(), room.x, room.y))
        .collect();
    assert_eq!(rooms, vec![(0, "L-shape 4x4", 5, 4), (1, "5x4 Room", 3, 1), (2, "5x5 Room", 1, 4)]);
}
