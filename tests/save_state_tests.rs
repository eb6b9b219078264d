mod common;

use common::uniform_grid;
use tilegame::GridSaveState;

#[test]
fn snapshot_restores_tiles_and_terrain_tags() {
    let mut grid = uniform_grid(4, 3, 1);
    grid.set_tile(1, 1, 3).unwrap();
    grid.set_tile(2, 2, 7).unwrap();
    let terrain = grid.terrain_mut();
    terrain.set_blocked([3]);
    terrain.set_slow([7]);
    terrain.set_castle([1]);

    let state = GridSaveState::from_grid(&grid);
    let restored = state.restore_grid();

    assert_eq!(restored.width(), 4);
    assert_eq!(restored.height(), 3);
    assert_eq!(restored.tile_width(), grid.tile_width());
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(restored.get_tile(x, y), grid.get_tile(x, y));
        }
    }
    assert!(!restored.is_passable(1, 1).unwrap());
    assert!(restored.is_slow_tile(2, 2).unwrap());
    assert!(restored.is_castle_tile(0, 0).unwrap());
}

#[test]
fn snapshot_survives_json_round_trip() {
    let mut grid = uniform_grid(3, 3, 2);
    grid.terrain_mut().set_blocked([2]);

    let state = GridSaveState::from_grid(&grid);
    let json = serde_json::to_string(&state).unwrap();
    let reloaded: GridSaveState = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded.tiles, state.tiles);
    assert_eq!(reloaded.blocked, state.blocked);
    let restored = reloaded.restore_grid();
    assert!(!restored.is_passable(0, 0).unwrap());
}

#[test]
fn save_and_load_file() {
    let mut grid = uniform_grid(2, 2, 5);
    grid.terrain_mut().set_cover([5]);

    let path = std::env::temp_dir().join("tilegame_save_test.json");
    let path = path.to_string_lossy().to_string();

    let state = GridSaveState::from_grid(&grid);
    state.save_to_file(&path).unwrap();

    let loaded = GridSaveState::load_from_file(&path).unwrap();
    let restored = loaded.restore_grid();
    assert!(restored.is_cover_tile(1, 1).unwrap());

    let _ = std::fs::remove_file(&path);
}
