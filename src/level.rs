//! Text level format.
//!
//! A level file is line oriented: literal section headers in a fixed
//! order, each followed by its payload.
//!
//! ```text
//! [Width]
//! 10
//! [Height]
//! 8
//! [Texture]
//! overworld
//! [Layout]
//! level1.csv
//! [Blocked Tiles]
//! 3
//! 4
//! [Slow Tiles]
//! 7
//! [Cover Tiles]
//! [Castle Tiles]
//! 9
//! [Entities]
//! ...
//! ```
//!
//! The four terrain sections are optional as a group and individually
//! skippable, but whatever is present must keep the order above.
//! `[Entities]` ends the terrain data; everything after it belongs to the
//! entity roster loader, which continues on the same reader. Any
//! structural violation aborts the load. A half-built grid never escapes.

use crate::grid::TileGrid;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

const HEADER_WIDTH: &str = "[Width]";
const HEADER_HEIGHT: &str = "[Height]";
const HEADER_TEXTURE: &str = "[Texture]";
const HEADER_LAYOUT: &str = "[Layout]";
const HEADER_ENTITIES: &str = "[Entities]";

/// Terrain section headers in the only order they may appear.
const TERRAIN_HEADERS: [&str; 4] = [
    "[Blocked Tiles]",
    "[Slow Tiles]",
    "[Cover Tiles]",
    "[Castle Tiles]",
];

/// Errors raised while loading a level. Every variant is fatal to the
/// whole load; there is no partial or recoverable state.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("i/o error reading level: {0}")]
    Io(#[from] std::io::Error),
    #[error("expected header {expected}, found {found:?}")]
    UnexpectedHeader { expected: &'static str, found: String },
    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid integer {value:?} in {section}")]
    BadInteger { section: &'static str, value: String },
    #[error("{section} must be positive, got {value}")]
    BadDimension { section: &'static str, value: i32 },
    #[error("layout row {row} has {found} columns, level declares {expected}")]
    LayoutColumnMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("layout has {found} rows, level declares {expected}")]
    LayoutRowMismatch { found: usize, expected: usize },
}

/// Parsed header data of a level file: dimensions, resource names and the
/// four terrain-code lists. The tile array itself lives in the separate
/// layout resource named by `layout`.
#[derive(Debug, Clone, Default)]
pub struct LevelFile {
    pub width: i32,
    pub height: i32,
    pub texture: String,
    pub layout: String,
    pub blocked: Vec<i32>,
    pub slow: Vec<i32>,
    pub cover: Vec<i32>,
    pub castle: Vec<i32>,
}

impl LevelFile {
    /// Run the header state machine over `reader`.
    ///
    /// On success the reader is positioned right after `[Entities]` (or at
    /// end of file for an entity-less level) so the entity roster loader
    /// can continue from there.
    pub fn parse<R: BufRead>(reader: &mut R) -> Result<LevelFile, LevelError> {
        let mut level = LevelFile {
            width: read_int_section(reader, HEADER_WIDTH)?,
            height: read_int_section(reader, HEADER_HEIGHT)?,
            texture: read_name_section(reader, HEADER_TEXTURE)?,
            layout: read_name_section(reader, HEADER_LAYOUT)?,
            ..LevelFile::default()
        };

        if level.width <= 0 {
            return Err(LevelError::BadDimension {
                section: HEADER_WIDTH,
                value: level.width,
            });
        }
        if level.height <= 0 {
            return Err(LevelError::BadDimension {
                section: HEADER_HEIGHT,
                value: level.height,
            });
        }

        // Terrain sections: walk whichever headers are present, in order.
        let mut next_section = 0;
        let mut line = read_line(reader)?;
        while let Some(header) = line {
            if header == HEADER_ENTITIES {
                break;
            }
            match TERRAIN_HEADERS.iter().position(|h| *h == header) {
                Some(idx) if idx >= next_section => {
                    let (codes, terminator) =
                        read_code_payload(reader, TERRAIN_HEADERS[idx])?;
                    match idx {
                        0 => level.blocked = codes,
                        1 => level.slow = codes,
                        2 => level.cover = codes,
                        _ => level.castle = codes,
                    }
                    next_section = idx + 1;
                    line = terminator;
                }
                _ => {
                    return Err(LevelError::UnexpectedHeader {
                        expected: "a terrain section or [Entities]",
                        found: header,
                    });
                }
            }
        }

        Ok(level)
    }
}

/// Read one line, stripping the newline. `None` at end of stream.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, LevelError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

fn expect_header<R: BufRead>(reader: &mut R, expected: &'static str) -> Result<(), LevelError> {
    match read_line(reader)? {
        Some(line) if line == expected => Ok(()),
        Some(line) => Err(LevelError::UnexpectedHeader {
            expected,
            found: line,
        }),
        None => Err(LevelError::UnexpectedEof { expected }),
    }
}

fn read_int_section<R: BufRead>(reader: &mut R, header: &'static str) -> Result<i32, LevelError> {
    expect_header(reader, header)?;
    match read_line(reader)? {
        Some(line) => line.trim().parse().map_err(|_| LevelError::BadInteger {
            section: header,
            value: line,
        }),
        None => Err(LevelError::MissingValue(header)),
    }
}

fn read_name_section<R: BufRead>(
    reader: &mut R,
    header: &'static str,
) -> Result<String, LevelError> {
    expect_header(reader, header)?;
    match read_line(reader)? {
        Some(line) if !line.trim().is_empty() => Ok(line.trim().to_string()),
        Some(_) => Err(LevelError::MissingValue(header)),
        None => Err(LevelError::MissingValue(header)),
    }
}

/// Read integer payload lines until the next recognized header or end of
/// stream. Returns the codes plus the header line that ended the payload,
/// which the caller's state machine consumes next.
fn read_code_payload<R: BufRead>(
    reader: &mut R,
    section: &'static str,
) -> Result<(Vec<i32>, Option<String>), LevelError> {
    let mut codes = Vec::new();
    loop {
        match read_line(reader)? {
            None => return Ok((codes, None)),
            Some(line) => {
                if line == HEADER_ENTITIES || TERRAIN_HEADERS.contains(&line.as_str()) {
                    return Ok((codes, Some(line)));
                }
                let code = line.trim().parse().map_err(|_| LevelError::BadInteger {
                    section,
                    value: line,
                })?;
                codes.push(code);
            }
        }
    }
}

/// Parse a CSV layout resource into a row-major tile array. Row and
/// column counts must match the level's declared dimensions.
pub fn parse_layout(csv: &str, width: i32, height: i32) -> Result<Vec<i32>, LevelError> {
    let mut tiles = Vec::with_capacity((width * height) as usize);
    let rows: Vec<&str> = csv.lines().filter(|l| !l.trim().is_empty()).collect();

    if rows.len() != height as usize {
        return Err(LevelError::LayoutRowMismatch {
            found: rows.len(),
            expected: height as usize,
        });
    }

    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != width as usize {
            return Err(LevelError::LayoutColumnMismatch {
                row,
                found: cells.len(),
                expected: width as usize,
            });
        }
        for cell in cells {
            let code = cell.trim().parse().map_err(|_| LevelError::BadInteger {
                section: HEADER_LAYOUT,
                value: cell.trim().to_string(),
            })?;
            tiles.push(code);
        }
    }

    Ok(tiles)
}

/// Write a grid's tile array back out in the layout CSV format.
/// `parse_layout(&write_layout(&g), g.width(), g.height())` reproduces the
/// tile array exactly.
pub fn write_layout(grid: &TileGrid) -> String {
    let mut out = String::new();
    for row in grid.tiles().chunks(grid.width() as usize) {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Assemble a fully tagged grid from parsed level headers and the layout
/// resource they name.
pub fn build_grid(
    level: &LevelFile,
    layout_csv: &str,
    cell_width: i32,
    cell_height: i32,
) -> Result<TileGrid, LevelError> {
    let tiles = parse_layout(layout_csv, level.width, level.height)?;
    let mut grid = TileGrid::from_tiles(level.width, level.height, cell_width, cell_height, tiles);

    let terrain = grid.terrain_mut();
    terrain.set_blocked(level.blocked.iter().copied());
    terrain.set_slow(level.slow.iter().copied());
    terrain.set_cover(level.cover.iter().copied());
    terrain.set_castle(level.castle.iter().copied());

    Ok(grid)
}

/// Load a level from disk. The layout resource is resolved as
/// `maps/<layout>` next to the level file.
///
/// Returns the grid, the parsed headers and the reader, positioned after
/// `[Entities]` for the entity roster loader.
pub fn load_level<P: AsRef<Path>>(
    path: P,
    cell_width: i32,
    cell_height: i32,
) -> Result<(TileGrid, LevelFile, BufReader<fs::File>), LevelError> {
    let path = path.as_ref();
    let mut reader = BufReader::new(fs::File::open(path)?);
    let level = LevelFile::parse(&mut reader)?;

    let layout_path = path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("maps")
        .join(&level.layout);
    let layout_csv = fs::read_to_string(layout_path)?;

    let grid = build_grid(&level, &layout_csv, cell_width, cell_height)?;
    Ok((grid, level, reader))
}

/// Drain and discard the entity section. Convenience for tools that only
/// care about terrain; real games hand the reader to their entity loader
/// instead.
pub fn skip_entities<R: Read>(reader: &mut BufReader<R>) -> Result<(), LevelError> {
    let mut rest = String::new();
    reader.read_to_string(&mut rest)?;
    Ok(())
}
