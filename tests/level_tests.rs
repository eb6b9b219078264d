mod common;

use common::{uniform_grid, uniform_layout};
use std::io::{BufRead, Cursor};
use tilegame::level::{build_grid, parse_layout, write_layout};
use tilegame::{LevelError, LevelFile};

const FULL_LEVEL: &str = "\
[Width]
4
[Height]
3
[Texture]
overworld
[Layout]
level1.csv
[Blocked Tiles]
3
4
[Slow Tiles]
7
[Cover Tiles]
5
[Castle Tiles]
9
[Entities]
player,0,0
enemy,3,2
";

#[test]
fn full_level_parses_every_section() {
    let mut reader = Cursor::new(FULL_LEVEL);
    let level = LevelFile::parse(&mut reader).unwrap();

    assert_eq!(level.width, 4);
    assert_eq!(level.height, 3);
    assert_eq!(level.texture, "overworld");
    assert_eq!(level.layout, "level1.csv");
    assert_eq!(level.blocked, vec![3, 4]);
    assert_eq!(level.slow, vec![7]);
    assert_eq!(level.cover, vec![5]);
    assert_eq!(level.castle, vec![9]);
}

#[test]
fn reader_is_left_positioned_for_the_entity_loader() {
    let mut reader = Cursor::new(FULL_LEVEL);
    LevelFile::parse(&mut reader).unwrap();

    // The entity roster collaborator continues on the same stream.
    let mut entity_line = String::new();
    reader.read_line(&mut entity_line).unwrap();
    assert_eq!(entity_line.trim_end(), "player,0,0");
}

#[test]
fn terrain_sections_are_optional_as_a_group() {
    let text = "\
[Width]
2
[Height]
2
[Texture]
t
[Layout]
l.csv
[Entities]
";
    let level = LevelFile::parse(&mut Cursor::new(text)).unwrap();
    assert!(level.blocked.is_empty());
    assert!(level.slow.is_empty());
    assert!(level.cover.is_empty());
    assert!(level.castle.is_empty());
}

#[test]
fn a_middle_section_may_be_skipped() {
    let text = "\
[Width]
2
[Height]
2
[Texture]
t
[Layout]
l.csv
[Blocked Tiles]
1
[Castle Tiles]
9
[Entities]
";
    let level = LevelFile::parse(&mut Cursor::new(text)).unwrap();
    assert_eq!(level.blocked, vec![1]);
    assert!(level.slow.is_empty());
    assert!(level.cover.is_empty());
    assert_eq!(level.castle, vec![9]);
}

#[test]
fn end_of_file_ends_terrain_reading() {
    // An entity-less level: stream simply ends after the last section.
    let text = "\
[Width]
2
[Height]
2
[Texture]
t
[Layout]
l.csv
[Slow Tiles]
7
8
";
    let level = LevelFile::parse(&mut Cursor::new(text)).unwrap();
    assert_eq!(level.slow, vec![7, 8]);
}

#[test]
fn missing_height_header_is_fatal() {
    let text = "\
[Width]
4
[Texture]
t
";
    let err = LevelFile::parse(&mut Cursor::new(text)).unwrap_err();
    assert!(matches!(
        err,
        LevelError::UnexpectedHeader { expected: "[Height]", .. }
    ));
}

#[test]
fn non_numeric_terrain_code_is_fatal() {
    let text = "\
[Width]
2
[Height]
2
[Texture]
t
[Layout]
l.csv
[Blocked Tiles]
banana
";
    let err = LevelFile::parse(&mut Cursor::new(text)).unwrap_err();
    assert!(matches!(err, LevelError::BadInteger { .. }));
}

#[test]
fn out_of_order_terrain_sections_are_rejected() {
    let text = "\
[Width]
2
[Height]
2
[Texture]
t
[Layout]
l.csv
[Slow Tiles]
7
[Blocked Tiles]
1
";
    let err = LevelFile::parse(&mut Cursor::new(text)).unwrap_err();
    assert!(matches!(err, LevelError::UnexpectedHeader { .. }));
}

#[test]
fn non_numeric_width_is_fatal() {
    let text = "[Width]\nwide\n";
    let err = LevelFile::parse(&mut Cursor::new(text)).unwrap_err();
    assert!(matches!(err, LevelError::BadInteger { .. }));
}

#[test]
fn zero_width_is_fatal() {
    let text = "\
[Width]
0
[Height]
2
[Texture]
t
[Layout]
l.csv
";
    let err = LevelFile::parse(&mut Cursor::new(text)).unwrap_err();
    assert!(matches!(err, LevelError::BadDimension { .. }));
}

#[test]
fn empty_texture_name_is_fatal() {
    let text = "\
[Width]
2
[Height]
2
[Texture]

[Layout]
l.csv
";
    let err = LevelFile::parse(&mut Cursor::new(text)).unwrap_err();
    assert!(matches!(err, LevelError::MissingValue("[Texture]")));
}

#[test]
fn truncated_file_is_fatal() {
    let text = "[Width]\n4\n[Height]\n3\n";
    let err = LevelFile::parse(&mut Cursor::new(text)).unwrap_err();
    assert!(matches!(
        err,
        LevelError::UnexpectedEof { expected: "[Texture]" }
    ));
}

#[test]
fn built_grid_matches_declared_dimensions() {
    let mut reader = Cursor::new(FULL_LEVEL);
    let level = LevelFile::parse(&mut reader).unwrap();
    let layout = "1,1,3,1\n1,7,1,1\n1,1,1,9\n";

    let grid = build_grid(&level, layout, 32, 32).unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.get_tile(2, 0).unwrap(), 3);
    assert!(!grid.is_passable(2, 0).unwrap());
    assert!(grid.is_slow_tile(1, 1).unwrap());
    assert!(grid.is_castle_tile(3, 2).unwrap());
    assert!(grid.is_passable(0, 0).unwrap());
}

#[test]
fn layout_with_wrong_row_count_is_rejected() {
    let level = LevelFile {
        width: 2,
        height: 3,
        texture: "t".into(),
        layout: "l.csv".into(),
        ..LevelFile::default()
    };
    let err = build_grid(&level, "1,1\n1,1\n", 32, 32).unwrap_err();
    assert!(matches!(
        err,
        LevelError::LayoutRowMismatch { found: 2, expected: 3 }
    ));
}

#[test]
fn layout_with_wrong_column_count_is_rejected() {
    let err = parse_layout("1,1,1\n1,1\n", 3, 2).unwrap_err();
    assert!(matches!(
        err,
        LevelError::LayoutColumnMismatch { row: 1, found: 2, expected: 3 }
    ));
}

#[test]
fn layout_round_trip_reproduces_every_cell() {
    let mut grid = uniform_grid(5, 4, 1);
    grid.set_tile(0, 0, -1).unwrap();
    grid.set_tile(3, 1, 12).unwrap();
    grid.set_tile(4, 3, 7).unwrap();

    let csv = write_layout(&grid);
    let tiles = parse_layout(&csv, 5, 4).unwrap();

    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(
                tiles[(y * 5 + x) as usize],
                grid.get_tile(x, y).unwrap(),
                "cell ({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn uniform_layout_helper_parses_clean() {
    let csv = uniform_layout(3, 2, 5);
    let tiles = parse_layout(&csv, 3, 2).unwrap();
    assert_eq!(tiles, vec![5; 6]);
}
