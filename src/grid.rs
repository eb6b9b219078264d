use crate::terrain::TerrainClassifier;
use thiserror::Error;

/// Error for cell accesses outside the grid extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinates ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// A pixel rectangle inside the tile atlas or the level surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Rectangular grid of terrain codes.
///
/// Cells hold an integer terrain code; -1 is the "no tile" sentinel for
/// cells that were never assigned. Dimensions are fixed at construction
/// so the flat `(y * width + x)` addressing stays valid for the grid's
/// whole lifetime. The grid owns its classifier; pathfinding and
/// rendering collaborators borrow the grid read-only.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: i32,
    height: i32,
    cell_width: i32,
    cell_height: i32,
    tiles: Vec<i32>,
    terrain: TerrainClassifier,
}

impl TileGrid {
    /// Create a grid with every cell set to the -1 sentinel.
    pub fn new(width: i32, height: i32, cell_width: i32, cell_height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        TileGrid {
            width,
            height,
            cell_width,
            cell_height,
            tiles: vec![-1; (width * height) as usize],
            terrain: TerrainClassifier::new(),
        }
    }

    /// Build a grid from an already populated tile array, row-major.
    /// The array length must equal `width * height`.
    pub fn from_tiles(
        width: i32,
        height: i32,
        cell_width: i32,
        cell_height: i32,
        tiles: Vec<i32>,
    ) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert_eq!(tiles.len(), (width * height) as usize, "tile array size mismatch");
        TileGrid {
            width,
            height,
            cell_width,
            cell_height,
            tiles,
            terrain: TerrainClassifier::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pixel width of a single cell.
    pub fn tile_width(&self) -> i32 {
        self.cell_width
    }

    /// Pixel height of a single cell.
    pub fn tile_height(&self) -> i32 {
        self.cell_height
    }

    pub fn width_in_pixels(&self) -> i32 {
        self.width * self.cell_width
    }

    pub fn height_in_pixels(&self) -> i32 {
        self.height * self.cell_height
    }

    /// Row-major view of the whole tile array.
    pub fn tiles(&self) -> &[i32] {
        &self.tiles
    }

    pub fn terrain(&self) -> &TerrainClassifier {
        &self.terrain
    }

    /// Mutable classifier access, used by the level loader to retag the
    /// grid wholesale. Retagging invalidates any live Pathfinder, which
    /// the borrow checker enforces.
    pub fn terrain_mut(&mut self) -> &mut TerrainClassifier {
        &mut self.terrain
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if self.in_bounds(x, y) {
            Ok((y * self.width + x) as usize)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Terrain code at (x, y). No clamping: out-of-range coordinates are
    /// an error, not a default value.
    pub fn get_tile(&self, x: i32, y: i32) -> Result<i32, GridError> {
        Ok(self.tiles[self.index(x, y)?])
    }

    /// Store a terrain code at (x, y). A failed call leaves the grid
    /// unchanged.
    pub fn set_tile(&mut self, x: i32, y: i32, value: i32) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.tiles[idx] = value;
        Ok(())
    }

    /// True unless the cell's code is in the blocked set.
    ///
    /// Note the inherited quirk: a -1 sentinel cell belongs to no
    /// classification set, so it reports passable even though it is never
    /// drawn. Callers that want "walkable and drawn" must exclude -1
    /// themselves.
    pub fn is_passable(&self, x: i32, y: i32) -> Result<bool, GridError> {
        Ok(!self.terrain.is_blocked(self.get_tile(x, y)?))
    }

    pub fn is_slow_tile(&self, x: i32, y: i32) -> Result<bool, GridError> {
        Ok(self.terrain.is_slow(self.get_tile(x, y)?))
    }

    pub fn is_cover_tile(&self, x: i32, y: i32) -> Result<bool, GridError> {
        Ok(self.terrain.is_cover(self.get_tile(x, y)?))
    }

    pub fn is_castle_tile(&self, x: i32, y: i32) -> Result<bool, GridError> {
        Ok(self.terrain.is_castle(self.get_tile(x, y)?))
    }

    /// Source rectangle for a tile code in a row-major packed atlas with
    /// `atlas_columns` tiles per row. Valid codes start at 1; code 0,
    /// negative codes (including the -1 sentinel) and a non-positive
    /// column count have no region.
    pub fn tile_source(&self, code: i32, atlas_columns: i32) -> Option<TileRegion> {
        if code < 1 || atlas_columns < 1 {
            return None;
        }
        let col = (code - 1) % atlas_columns;
        let row = (code - 1) / atlas_columns;
        Some(TileRegion {
            x: col * self.cell_width,
            y: row * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        })
    }

    /// Pixel rectangle a cell occupies on the level surface.
    pub fn tile_destination(&self, x: i32, y: i32) -> Result<TileRegion, GridError> {
        self.index(x, y)?;
        Ok(TileRegion {
            x: x * self.cell_width,
            y: y * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        })
    }
}
