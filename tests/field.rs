use life::{FieldError, LifeField};

const SEED: u64 = 42;

fn field_from_rows(rows: &[&str]) -> LifeField {
    let height = rows.len();
    let width = rows[0].len();
    let mut field = LifeField::blank(width, height);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), width);
        for (col, ch) in line.bytes().enumerate() {
            if ch == b'#' {
                field.toggle(row, col).unwrap();
            }
        }
    }
    field
}

fn rows_from_field(field: &LifeField) -> Vec<String> {
    let (width, height) = field.size();
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| if field.get(row, col) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

fn assert_field_eq(field: &LifeField, expected: &[&str]) {
    assert_eq!(rows_from_field(field), expected, "field mismatch");
}

#[test]
fn test_blank_field_stays_blank() {
    let mut field = LifeField::blank(8, 8);
    assert_eq!(field.population(), 0);
    assert!(!field.is_changed());
    assert_eq!(field.generation(), 1);

    field.step();

    assert_eq!(field.population(), 0);
    assert!(!field.is_changed());
    assert_eq!(field.generation(), 2);
}

#[test]
fn test_neighbor_window_excludes_self_and_clips() {
    // On a fully live 3x3 field the corners see 3 neighbors and survive,
    // everything else sees 5 or 8 and dies. A count that wrapped past the
    // edges or included the cell itself would break this.
    let mut field = field_from_rows(&["###", "###", "###"]);

    field.step();

    assert_field_eq(&field, &["#.#", "...", "#.#"]);
    assert!(field.is_changed());
}

#[test]
fn test_lone_cell_dies() {
    let mut field = field_from_rows(&[".....", ".....", "..#..", ".....", "....."]);

    field.step();

    assert_eq!(field.population(), 0);
    assert!(field.is_changed());
}

#[test]
fn test_diagonal_line_collapses() {
    let mut field = field_from_rows(&[
        ".....", //
        ".#...",
        "..#..",
        "...#.",
        ".....",
    ]);

    // the ends see one neighbor and die, the middle survives with two
    field.step();
    assert_field_eq(
        &field,
        &[
            ".....", //
            ".....",
            "..#..",
            ".....",
            ".....",
        ],
    );
    assert!(field.is_changed());

    field.step();
    assert_eq!(field.population(), 0);
    assert!(field.is_changed());

    // settled now
    field.step();
    assert!(!field.is_changed());
}

#[test]
fn test_glider_translates_diagonally() {
    let glider = [
        ".#.", //
        "..#",
        "###",
    ];
    let mut start = vec!["................".to_string()];
    start.extend(glider.iter().map(|row| format!(".{row}............")));
    start.resize(16, "................".to_string());
    let start = start.iter().map(String::as_str).collect::<Vec<_>>();

    let mut field = field_from_rows(&start);
    assert_eq!(field.population(), 5);

    for phase in 1..=8 {
        field.step();
        assert_eq!(field.population(), 5, "population lost at phase {phase}");
        assert!(field.is_changed());
    }

    // after 8 generations the glider has moved two cells down-right
    let mut expected = vec!["................".to_string(); 3];
    expected.extend(glider.iter().map(|row| format!("...{row}..........")));
    expected.resize(16, "................".to_string());
    let expected = expected.iter().map(String::as_str).collect::<Vec<_>>();

    assert_field_eq(&field, &expected);
}

#[test]
fn test_randomize_places_exact_count() {
    let mut field = LifeField::blank(16, 16);
    let seeded = field.randomize(Some(SEED), 80).unwrap();

    assert_eq!(seeded.len(), 80);
    assert_eq!(field.population(), 80);
    assert!(field.is_changed());
    assert_eq!(field.generation(), 1);

    // row-major sorted, hence also free of repeats
    assert!(seeded.windows(2).all(|w| w[0] < w[1]), "seeded={seeded:?}");
    for &(row, col) in &seeded {
        assert!(field.get(row, col), "({row}, {col}) should be alive");
    }
}

#[test]
fn test_randomize_can_fill_whole_field() {
    let mut field = LifeField::blank(4, 4);
    let seeded = field.randomize(Some(SEED), 16).unwrap();

    assert_eq!(seeded.len(), 16);
    assert_eq!(field.population(), 16);
}

#[test]
fn test_randomize_rejects_overflowing_count() {
    let mut field = LifeField::blank(4, 4);
    field.toggle(1, 2).unwrap();
    field.step();
    let before = field.cells().to_vec();
    let generation = field.generation();

    let err = field.randomize(Some(SEED), 17).unwrap_err();
    assert_eq!(
        err,
        FieldError::SeedCountTooLarge {
            count: 17,
            width: 4,
            height: 4,
        }
    );

    assert_eq!(field.cells(), before.as_slice());
    assert_eq!(field.generation(), generation);
}

#[test]
fn test_toggle_round_trip() {
    let mut field = LifeField::blank(5, 4);
    field.randomize(Some(SEED), 7).unwrap();
    let before = field.cells().to_vec();
    let initial = field.get(2, 3);

    assert_eq!(field.toggle(2, 3), Ok(!initial));
    assert_eq!(field.get(2, 3), !initial);
    assert!(field.is_changed());
    assert_eq!(field.generation(), 1);

    assert_eq!(field.toggle(2, 3), Ok(initial));
    assert_eq!(field.cells(), before.as_slice());
}

#[test]
fn test_toggle_out_of_bounds() {
    let mut field = LifeField::blank(5, 4);
    let before = field.cells().to_vec();

    assert_eq!(
        field.toggle(4, 0),
        Err(FieldError::OutOfBounds {
            row: 4,
            col: 0,
            width: 5,
            height: 4,
        })
    );
    assert_eq!(
        field.toggle(0, 5),
        Err(FieldError::OutOfBounds {
            row: 0,
            col: 5,
            width: 5,
            height: 4,
        })
    );
    assert_eq!(field.cells(), before.as_slice());
    assert!(!field.is_changed());
}

#[test]
fn test_generation_counting() {
    let mut field = LifeField::blank(6, 6);
    assert_eq!(field.generation(), 1);

    field.toggle(2, 2).unwrap();
    field.toggle(2, 3).unwrap();
    field.step();
    field.step();
    field.step();
    assert_eq!(field.generation(), 4);

    // direct edits restart the count
    field.toggle(0, 0).unwrap();
    assert_eq!(field.generation(), 1);

    field.step();
    assert_eq!(field.generation(), 2);

    field.randomize(Some(SEED), 10).unwrap();
    assert_eq!(field.generation(), 1);

    field.step();
    field.clear();
    assert_eq!(field.generation(), 1);
    assert_eq!(field.population(), 0);
    assert!(!field.is_changed());
}
