//! Level text → tile grid plus spawn positions.
//!
//! Legend: `#` wall, `.` dot, `U` player spawn, `Y`/`G` alien spawn,
//! anything else open floor. Short lines are padded with open floor to
//! the widest line.

use std::fs;
use std::path::Path;

use log::info;

use crate::entities::{Alien, Player};
use crate::error::LoadError;
use crate::grid::{Cell, TileGrid};

#[derive(Clone, Debug)]
pub struct Level {
    pub grid: TileGrid,
    pub player: Player,
    pub aliens: Vec<Alien>,
}

fn cell_for(ch: char) -> Cell {
    match ch {
        '#' => Cell::Wall,
        '.' => Cell::Dot,
        _ => Cell::Open,
    }
}

pub fn parse_level(text: &str) -> Result<Level, LoadError> {
    let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    if lines.is_empty() || width == 0 {
        return Err(LoadError::EmptyLevel);
    }

    let mut player: Option<Player> = None;
    let mut aliens = Vec::new();
    let mut rows = Vec::with_capacity(lines.len());

    for (row, line) in lines.iter().enumerate() {
        for (col, &ch) in line.iter().enumerate() {
            match ch {
                'U' => {
                    if let Some(p) = player {
                        return Err(LoadError::DuplicatePlayer {
                            first: (p.row, p.col),
                            second: (row, col),
                        });
                    }
                    player = Some(Player { row, col });
                }
                'Y' | 'G' => aliens.push(Alien { row, col }),
                _ => {}
            }
        }
        let mut cells: Vec<Cell> = line.iter().map(|&ch| cell_for(ch)).collect();
        cells.resize(width, Cell::Open);
        rows.push(cells);
    }

    let player = player.ok_or(LoadError::MissingPlayer)?;
    Ok(Level {
        grid: TileGrid::from_rows(rows),
        player,
        aliens,
    })
}

pub fn load_level(path: &Path) -> Result<Level, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let level = parse_level(&text)?;
    info!(
        "loaded level {} ({}x{}, {} aliens, {} dots)",
        path.display(),
        level.grid.width(),
        level.grid.height(),
        level.aliens.len(),
        level.grid.dots_remaining()
    );
    Ok(level)
}
