/// Level inspector
///
/// Loads a level file, prints the grid as ASCII and optionally overlays a
/// computed path or the reachable set from a cell.

use std::env;
use std::process;

use tilegame::level;
use tilegame::pathfinding::format_path;
use tilegame::{Config, Pathfinder, Position, TileGrid};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <level.txt> [x1 y1 x2 y2]", args[0]);
        eprintln!("  With four coordinates, also prints the path between the two cells");
        process::exit(1);
    }

    let config = Config::load();
    let (grid, level, _reader) = match level::load_level(
        &args[1],
        config.grid.cell_width,
        config.grid.cell_height,
    ) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args[1], e);
            process::exit(1);
        }
    };

    println!(
        "Level: {}x{} tiles, {}x{} px, texture '{}', layout '{}'",
        grid.width(),
        grid.height(),
        grid.width_in_pixels(),
        grid.height_in_pixels(),
        level.texture,
        level.layout
    );

    let path = if args.len() >= 6 {
        let coords: Vec<i32> = args[2..6]
            .iter()
            .map(|a| a.parse().unwrap_or(-1))
            .collect();
        let start = Position::new(coords[0], coords[1]);
        let goal = Position::new(coords[2], coords[3]);

        let pathfinder = Pathfinder::new(&grid);
        let search = config.movement.search_config();
        match pathfinder.find_path(start, goal, &search) {
            Ok(path) => {
                println!("Path: {}", format_path(&path));
                path
            }
            Err(e) => {
                eprintln!("Path query failed: {}", e);
                process::exit(1);
            }
        }
    } else {
        Vec::new()
    };

    println!("{}", render_grid(&grid, &path));
}

/// ASCII rendering: '#' blocked, '~' slow, '.' plain, ' ' empty, '*' path.
fn render_grid(grid: &TileGrid, path: &[Position]) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let code = grid.get_tile(x, y).unwrap_or(-1);
            let symbol = if path.contains(&Position::new(x, y)) {
                '*'
            } else if grid.terrain().is_blocked(code) {
                '#'
            } else if grid.terrain().is_slow(code) {
                '~'
            } else if code == -1 {
                ' '
            } else {
                '.'
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
