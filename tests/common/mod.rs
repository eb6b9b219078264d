use tilegame::{Position, TileGrid};

/// Build a grid with every cell set to the same terrain code.
pub fn uniform_grid(width: i32, height: i32, code: i32) -> TileGrid {
    TileGrid::from_tiles(
        width,
        height,
        32,
        32,
        vec![code; (width * height) as usize],
    )
}

/// CSV layout with every cell set to the same code.
#[allow(dead_code)]
pub fn uniform_layout(width: i32, height: i32, code: i32) -> String {
    let row: Vec<String> = (0..width).map(|_| code.to_string()).collect();
    let mut csv = String::new();
    for _ in 0..height {
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

/// Visualize a path on a grid
#[allow(dead_code)]
pub fn visualize_path(grid: &TileGrid, path: &[Position]) -> String {
    let mut result = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Position::new(x, y);
            let code = grid.get_tile(x, y).unwrap();
            let symbol = if Some(&pos) == path.first() {
                'S'
            } else if Some(&pos) == path.last() {
                'D'
            } else if path.contains(&pos) {
                '*'
            } else if grid.terrain().is_blocked(code) {
                '█'
            } else if grid.terrain().is_slow(code) {
                '~'
            } else {
                '.'
            };
            result.push(symbol);
        }
        result.push('\n');
    }
    result
}
