use std::collections::HashSet;

/// Terrain classification for a tile grid.
///
/// Holds four sets of terrain codes with independent gameplay meaning:
/// blocked (impassable), slow (movement penalty), cover (defense bonus)
/// and castle (objective). A code may appear in more than one set.
#[derive(Debug, Clone, Default)]
pub struct TerrainClassifier {
    blocked: HashSet<i32>,
    slow: HashSet<i32>,
    cover: HashSet<i32>,
    castle: HashSet<i32>,
}

impl TerrainClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the blocked set entirely. Previous contents are discarded.
    pub fn set_blocked<I: IntoIterator<Item = i32>>(&mut self, codes: I) {
        self.blocked.clear();
        self.blocked.extend(codes);
    }

    /// Replace the slow set entirely.
    pub fn set_slow<I: IntoIterator<Item = i32>>(&mut self, codes: I) {
        self.slow.clear();
        self.slow.extend(codes);
    }

    /// Replace the cover set entirely.
    pub fn set_cover<I: IntoIterator<Item = i32>>(&mut self, codes: I) {
        self.cover.clear();
        self.cover.extend(codes);
    }

    /// Replace the castle set entirely.
    pub fn set_castle<I: IntoIterator<Item = i32>>(&mut self, codes: I) {
        self.castle.clear();
        self.castle.extend(codes);
    }

    /// True if the code forbids entry. False for any code not in the set,
    /// including the -1 sentinel.
    pub fn is_blocked(&self, code: i32) -> bool {
        self.blocked.contains(&code)
    }

    /// True if the code carries a movement penalty.
    pub fn is_slow(&self, code: i32) -> bool {
        self.slow.contains(&code)
    }

    pub fn is_cover(&self, code: i32) -> bool {
        self.cover.contains(&code)
    }

    pub fn is_castle(&self, code: i32) -> bool {
        self.castle.contains(&code)
    }
}
