pub mod config;
pub mod grid;
pub mod level;
pub mod pathfinding;
pub mod save_state;
pub mod terrain;

pub use config::Config;
pub use grid::{GridError, TileGrid, TileRegion};
pub use level::{LevelError, LevelFile};
pub use pathfinding::{Pathfinder, Position, SearchConfig};
pub use save_state::GridSaveState;
pub use terrain::TerrainClassifier;
