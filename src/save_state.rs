use crate::grid::TileGrid;
use serde::{Deserialize, Serialize};
use std::fs;

/// Snapshot of a loaded grid: dimensions, tile codes and terrain tags.
///
/// This persists the grid itself so an in-progress game can be restored;
/// derived data such as computed paths is never saved.
#[derive(Debug, Serialize, Deserialize)]
pub struct GridSaveState {
    pub width: i32,
    pub height: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    /// Row-major tile codes, -1 for empty cells.
    pub tiles: Vec<i32>,
    pub blocked: Vec<i32>,
    pub slow: Vec<i32>,
    pub cover: Vec<i32>,
    pub castle: Vec<i32>,
}

impl GridSaveState {
    /// Capture the current grid. Terrain sets are recovered by probing
    /// the classifier with every code present in the tile array.
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut codes: Vec<i32> = grid.tiles().to_vec();
        codes.sort_unstable();
        codes.dedup();

        let terrain = grid.terrain();
        GridSaveState {
            width: grid.width(),
            height: grid.height(),
            cell_width: grid.tile_width(),
            cell_height: grid.tile_height(),
            tiles: grid.tiles().to_vec(),
            blocked: codes.iter().copied().filter(|&c| terrain.is_blocked(c)).collect(),
            slow: codes.iter().copied().filter(|&c| terrain.is_slow(c)).collect(),
            cover: codes.iter().copied().filter(|&c| terrain.is_cover(c)).collect(),
            castle: codes.iter().copied().filter(|&c| terrain.is_castle(c)).collect(),
        }
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize save state: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write save file: {}", e))?;

        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read save file: {}", e))?;

        let save_state: GridSaveState = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse save file: {}", e))?;

        Ok(save_state)
    }

    /// Rebuild a grid from this snapshot.
    pub fn restore_grid(&self) -> TileGrid {
        let mut grid = TileGrid::from_tiles(
            self.width,
            self.height,
            self.cell_width,
            self.cell_height,
            self.tiles.clone(),
        );

        let terrain = grid.terrain_mut();
        terrain.set_blocked(self.blocked.iter().copied());
        terrain.set_slow(self.slow.iter().copied());
        terrain.set_cover(self.cover.iter().copied());
        terrain.set_castle(self.castle.iter().copied());

        grid
    }
}
