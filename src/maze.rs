//! Stage maps: parsing and the walkability grid the AI queries.
//!
//! Stage files are whitespace-separated tile codes, one row per line:
//! `0` floor, `1` wall, `2` mummy spawn, `3` explorer spawn, `4` exit.
//! An ASCII form (`#` wall, `.` or space floor, `M`, `E`, `X`) is accepted
//! too and is what the tests use.

use crate::components::Position;
use crate::error::MapError;
use crate::grid::GridQuery;

// ---------------------------------------------------------------------------
// Tile types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
    MummySpawn,
    ExplorerSpawn,
    Exit,
}

impl Tile {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Tile::Floor),
            "1" => Some(Tile::Wall),
            "2" => Some(Tile::MummySpawn),
            "3" => Some(Tile::ExplorerSpawn),
            "4" => Some(Tile::Exit),
            _ => None,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Tile::Wall),
            '.' | ' ' => Some(Tile::Floor),
            'M' => Some(Tile::MummySpawn),
            'E' => Some(Tile::ExplorerSpawn),
            'X' => Some(Tile::Exit),
            _ => None,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

// ---------------------------------------------------------------------------
// Tile map
// ---------------------------------------------------------------------------

/// A rectangular stage map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
}

impl TileMap {
    /// Parse the numeric stage format.
    pub fn parse_numeric(text: &str) -> Result<Self, MapError> {
        let mut tiles = Vec::new();
        for (row, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let parsed = line
                .split_whitespace()
                .enumerate()
                .map(|(col, code)| {
                    Tile::from_code(code).ok_or_else(|| MapError::UnknownTile {
                        row,
                        col,
                        tile: code.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(parsed);
        }
        Self::from_rows(tiles, false)
    }

    /// Parse the ASCII form. Short rows are padded with floor.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut tiles = Vec::new();
        for (row, line) in text.lines().enumerate() {
            let parsed = line
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    Tile::from_char(ch).ok_or_else(|| MapError::UnknownTile {
                        row,
                        col,
                        tile: ch.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(parsed);
        }
        Self::from_rows(tiles, true)
    }

    fn from_rows(mut tiles: Vec<Vec<Tile>>, pad: bool) -> Result<Self, MapError> {
        let height = tiles.len();
        let width = tiles.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MapError::Empty);
        }

        for (row, line) in tiles.iter_mut().enumerate() {
            if line.len() == width {
                continue;
            }
            if !pad {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            line.resize(width, Tile::Floor);
        }

        let map = TileMap {
            width,
            height,
            tiles,
        };
        {
            let mut exits = map.cells_of(Tile::Exit);
            if let (Some(first), Some(second)) = (exits.next(), exits.next()) {
                return Err(MapError::DuplicateExit { first, second });
            }
        }
        Ok(map)
    }

    /// An all-floor map.
    pub fn open(rows: usize, cols: usize) -> Self {
        TileMap {
            width: cols,
            height: rows,
            tiles: vec![vec![Tile::Floor; cols]; rows],
        }
    }

    /// Mark cells as walls. Cells outside the map are ignored.
    pub fn with_walls(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        for cell in cells {
            self.set(cell, Tile::Wall);
        }
        self
    }

    /// Place the exit, replacing any existing one.
    pub fn with_exit(mut self, exit: Position) -> Self {
        for row in &mut self.tiles {
            for tile in row.iter_mut().filter(|t| **t == Tile::Exit) {
                *tile = Tile::Floor;
            }
        }
        self.set(exit, Tile::Exit);
        self
    }

    fn set(&mut self, cell: Position, tile: Tile) {
        if cell.row < 0 || cell.col < 0 {
            return;
        }
        if let Some(slot) = self
            .tiles
            .get_mut(cell.row as usize)
            .and_then(|row| row.get_mut(cell.col as usize))
        {
            *slot = tile;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at a (row, col) position, or None if out of bounds.
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        self.tiles
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
    }

    fn cells_of(&self, wanted: Tile) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().enumerate().flat_map(move |(row, line)| {
            line.iter()
                .enumerate()
                .filter(move |(_, tile)| **tile == wanted)
                .map(move |(col, _)| Position::new(row as i32, col as i32))
        })
    }

    /// First mummy spawn in row-major order.
    pub fn mummy_spawn(&self) -> Option<Position> {
        self.cells_of(Tile::MummySpawn).next()
    }

    /// First explorer spawn in row-major order.
    pub fn explorer_spawn(&self) -> Option<Position> {
        self.cells_of(Tile::ExplorerSpawn).next()
    }
}

impl GridQuery for TileMap {
    fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.tile_at(Position::new(y, x)).is_none_or(|t| t.is_wall())
    }

    fn rows(&self) -> i32 {
        self.height as i32
    }

    fn cols(&self) -> i32 {
        self.width as i32
    }

    fn exit_position(&self) -> Option<Position> {
        self.cells_of(Tile::Exit).next()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
