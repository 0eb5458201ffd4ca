//! Game entity types. Plain data, no logic.

use crate::grid::TileGrid;

// ── Commands & directions ─────────────────────────────────────────────────────

/// A decoded player command. "No input" is represented as `Option::None`
/// wherever a command is consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Fire,
    /// ESC: ends the run as a loss on the tick it is consumed.
    Quit,
}

/// A single-cell step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The fleet's last executed collective direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FleetDirection {
    Left,
    #[default]
    Right,
    Down,
}

impl From<FleetDirection> for Direction {
    fn from(dir: FleetDirection) -> Self {
        match dir {
            FleetDirection::Left => Direction::Left,
            FleetDirection::Right => Direction::Right,
            FleetDirection::Down => Direction::Down,
        }
    }
}

// ── Rule sets ─────────────────────────────────────────────────────────────────

/// The three rule sets the game ships with. They differ in how the fleet
/// moves, how often, and what counts as winning or losing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// Every alien wanders randomly each tick; clear all dots to win.
    RandomWalk,
    /// Sweep-and-descend fleet moving every tick. Lost at -1 lives, so the
    /// first catch is survivable and the second ends the run.
    #[default]
    ZigZag,
    /// Sweep-and-descend fleet moving on every 10th tick at a faster frame rate.
    Cadenced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Running
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alien {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Laser {
    pub row: usize,
    pub col: usize,
}

/// Columns at which a sweeping fleet turns around and descends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetBounds {
    pub left: usize,
    pub right: usize,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so the tick function can take the
/// current state by reference and hand back a new one.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: TileGrid,
    pub player: Player,
    pub aliens: Vec<Alien>,
    pub lasers: Vec<Laser>,
    /// Never decreases; +1 per alien destroyed.
    pub score: u32,
    /// Starts at 1. Signed because the ZigZag rules lose at -1.
    pub lives: i32,
    pub fleet_direction: FleetDirection,
    pub bounds: FleetBounds,
    pub variant: Variant,
    pub status: GameStatus,
    pub tick: u64,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            player: self.player,
            aliens: &self.aliens,
            lasers: &self.lasers,
            score: self.score,
            lives: self.lives,
            status: self.status,
        }
    }
}

/// Read-only view of everything a renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a TileGrid,
    pub player: Player,
    pub aliens: &'a [Alien],
    pub lasers: &'a [Laser],
    pub score: u32,
    pub lives: i32,
    pub status: GameStatus,
}
