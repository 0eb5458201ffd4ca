//! Game-loop step functions.
//!
//! `tick` takes an immutable reference to the current `GameState`, the
//! command drained this tick (if any) and a direction source, and returns a
//! brand-new `GameState`. Side effects are limited to the injected
//! direction source.

use log::info;

use crate::collision::{self, player_caught};
use crate::entities::{
    Command, Direction, FleetBounds, FleetDirection, GameState, GameStatus, Laser, Variant,
};
use crate::fleet::{self, DirectionSource};
use crate::grid::Cell;
use crate::level::Level;
use crate::movement::{resolve, step_up};
use crate::rules;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a parsed level under a variant's rules.
pub fn init_state(level: Level, variant: Variant) -> GameState {
    let (left, right) = level
        .grid
        .walkable_columns()
        .unwrap_or((0, level.grid.width().saturating_sub(1)));

    GameState {
        player: level.player,
        aliens: level.aliens,
        lasers: Vec::new(),
        score: 0,
        lives: rules::STARTING_LIVES,
        fleet_direction: FleetDirection::default(),
        bounds: FleetBounds { left, right },
        variant,
        status: GameStatus::Running,
        tick: 0,
        grid: level.grid,
    }
}

// ── Per-tick steps ───────────────────────────────────────────────────────────

/// Slide the player one column. Returns true if the player stepped onto an
/// alien.
pub fn move_player(state: &mut GameState, direction: Direction) -> bool {
    let (row, col) = resolve(state.player.row, state.player.col, direction, &state.grid);
    state.player.row = row;
    state.player.col = col;
    player_caught(&state.player, &state.aliens)
}

/// Spawn a laser on the player's cell; the laser step lifts it clear of the
/// player on the same tick.
pub fn fire_laser(state: &mut GameState) {
    state.lasers.push(Laser {
        row: state.player.row,
        col: state.player.col,
    });
}

/// Move every laser up one row.
///
/// Lasers reaching the top boundary row or a wall are dropped. A laser that
/// flies into a dot clears the dot and is spent.
pub fn move_lasers(state: &mut GameState) {
    let grid = &mut state.grid;
    state.lasers.retain_mut(|laser| match step_up(laser.row, laser.col, grid) {
        Some((row, _)) if grid.cell(row, laser.col) == Cell::Dot => {
            grid.clear_cell(row, laser.col);
            false
        }
        Some((row, col)) => {
            laser.row = row;
            laser.col = col;
            true
        }
        None => false,
    });
}

/// Move the fleet according to the variant: random walk or sweep/descend.
pub fn move_fleet(state: &mut GameState, dirs: &mut impl DirectionSource) {
    match state.variant {
        Variant::RandomWalk => fleet::random_walk(&mut state.aliens, &state.grid, dirs),
        Variant::ZigZag | Variant::Cadenced => {
            state.fleet_direction =
                fleet::sweep(&mut state.aliens, state.fleet_direction, state.bounds, &state.grid);
        }
    }
}

/// Where the run stands. Winning takes precedence when both predicates hold.
pub fn status(state: &GameState) -> GameStatus {
    if rules::has_won(state) {
        GameStatus::Won
    } else if rules::has_lost(state) {
        GameStatus::Lost
    } else {
        GameStatus::Running
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
///
/// A finished state is returned unchanged.
pub fn tick(
    state: &GameState,
    command: Option<Command>,
    dirs: &mut impl DirectionSource,
) -> GameState {
    if state.status.is_terminal() {
        return state.clone();
    }

    let mut next = state.clone();
    next.tick += 1;

    // ── 1–2. Input ───────────────────────────────────────────────────────────
    let mut caught = false;
    match command {
        Some(Command::Quit) => next.lives = rules::lives_floor(next.variant),
        Some(Command::Fire) => fire_laser(&mut next),
        Some(Command::Left) => caught = move_player(&mut next, Direction::Left),
        Some(Command::Right) => caught = move_player(&mut next, Direction::Right),
        None => {}
    }

    // ── 3. Lasers ────────────────────────────────────────────────────────────
    move_lasers(&mut next);

    // ── 4. Fleet, on its cadence ─────────────────────────────────────────────
    if rules::fleet_moves_on(next.variant, next.tick) {
        move_fleet(&mut next, dirs);
    }

    // ── 5. Collisions ────────────────────────────────────────────────────────
    collision::resolve_collisions(&mut next, caught);

    // ── 6. Terminal conditions ───────────────────────────────────────────────
    next.status = status(&next);
    match next.status {
        GameStatus::Won => info!("player won on tick {} with score {}", next.tick, next.score),
        GameStatus::Lost => info!("player lost on tick {} with score {}", next.tick, next.score),
        GameStatus::Running => {}
    }

    next
}

/// `tick`, plus the resulting status for hosts that only need to know
/// whether to keep going.
pub fn run_one_tick(
    state: &GameState,
    command: Option<Command>,
    dirs: &mut impl DirectionSource,
) -> (GameState, GameStatus) {
    let next = tick(state, command, dirs);
    let status = next.status;
    (next, status)
}
