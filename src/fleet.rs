//! Fleet controller.
//!
//! Sweeping variants move the whole fleet one way per fleet-tick and use a
//! three-state machine (`Left`, `Right`, `Down`) to decide the next
//! direction. The random-walk variant moves every alien on its own, with
//! directions drawn from an injected `DirectionSource`.

use std::collections::VecDeque;

use log::debug;
use rand::Rng;

use crate::entities::{Alien, Direction, FleetBounds, FleetDirection};
use crate::grid::TileGrid;
use crate::movement::resolve;

// ── Direction sources ─────────────────────────────────────────────────────────

/// Supplies one direction per alien per random-walk step.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

/// Uniform choice among the four directions, backed by any RNG.
pub struct RandomDirections<R>(pub R);

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_direction(&mut self) -> Direction {
        match self.0.gen_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Right,
            _ => Direction::Left,
        }
    }
}

/// A fixed sequence of directions, replayed in order and then cycled.
#[derive(Clone, Debug)]
pub struct ScriptedDirections {
    script: VecDeque<Direction>,
}

impl ScriptedDirections {
    /// Panics on an empty script.
    pub fn new(script: impl IntoIterator<Item = Direction>) -> Self {
        let script: VecDeque<Direction> = script.into_iter().collect();
        assert!(!script.is_empty(), "direction script must not be empty");
        ScriptedDirections { script }
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        let dir = self.script[0];
        self.script.rotate_left(1);
        dir
    }
}

// ── Sweep-and-descend ─────────────────────────────────────────────────────────

/// Leftmost and rightmost alien columns, or `None` for an empty fleet.
pub fn fleet_edges(aliens: &[Alien]) -> Option<(usize, usize)> {
    let left = aliens.iter().map(|a| a.col).min()?;
    let right = aliens.iter().map(|a| a.col).max()?;
    Some((left, right))
}

/// The fleet state machine's transition function.
///
/// After a descent the fleet always heads right if it sits on the left
/// threshold and left otherwise, whichever edge triggered the descent.
pub fn next_direction(
    current: FleetDirection,
    leftmost: usize,
    rightmost: usize,
    bounds: FleetBounds,
) -> FleetDirection {
    match current {
        FleetDirection::Down if leftmost == bounds.left => FleetDirection::Right,
        FleetDirection::Down => FleetDirection::Left,
        _ if leftmost <= bounds.left || rightmost >= bounds.right => FleetDirection::Down,
        other => other,
    }
}

/// Run one fleet-tick: pick the next direction and move every alien that
/// way. A blocked alien stays put while the rest of the fleet moves on.
///
/// Returns the direction that was executed. An empty fleet is left alone
/// and keeps `current`.
pub fn sweep(
    aliens: &mut [Alien],
    current: FleetDirection,
    bounds: FleetBounds,
    grid: &TileGrid,
) -> FleetDirection {
    let Some((leftmost, rightmost)) = fleet_edges(aliens) else {
        return current;
    };

    let next = next_direction(current, leftmost, rightmost, bounds);
    if next != current {
        debug!("fleet {current:?} -> {next:?} (edges {leftmost}..={rightmost})");
    }

    let dir = Direction::from(next);
    for alien in aliens.iter_mut() {
        (alien.row, alien.col) = resolve(alien.row, alien.col, dir, grid);
    }
    next
}

// ── Random walk ───────────────────────────────────────────────────────────────

/// Move each alien one step in its own freshly drawn direction.
pub fn random_walk(aliens: &mut [Alien], grid: &TileGrid, dirs: &mut impl DirectionSource) {
    for alien in aliens.iter_mut() {
        let dir = dirs.next_direction();
        (alien.row, alien.col) = resolve(alien.row, alien.col, dir, grid);
    }
}
