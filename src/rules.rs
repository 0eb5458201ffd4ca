//! Per-variant rule tables.
//!
//! The variants disagree on cadence, frame rate and the win/loss
//! predicates. Each difference lives here as a small lookup so the tick
//! code stays variant-agnostic.

use std::time::Duration;

use crate::entities::{GameState, Variant};

pub const STARTING_LIVES: i32 = 1;

/// `(every, offset)`: the fleet moves on ticks where `tick % every == offset`.
/// `None` means the fleet moves on every tick.
pub fn fleet_cadence(variant: Variant) -> Option<(u64, u64)> {
    match variant {
        Variant::RandomWalk => None,
        Variant::ZigZag => None,
        Variant::Cadenced => Some((10, 0)),
    }
}

pub fn fleet_moves_on(variant: Variant, tick: u64) -> bool {
    match fleet_cadence(variant) {
        Some((every, offset)) => tick % every == offset,
        None => true,
    }
}

pub fn tick_duration(variant: Variant) -> Duration {
    match variant {
        Variant::RandomWalk | Variant::ZigZag => Duration::from_millis(200),
        Variant::Cadenced => Duration::from_millis(40),
    }
}

/// Lives value at which the run is lost.
pub fn lives_floor(variant: Variant) -> i32 {
    match variant {
        Variant::RandomWalk | Variant::Cadenced => 0,
        Variant::ZigZag => -1,
    }
}

/// Lives after the player is caught by an alien.
///
/// ZigZag takes a life away; the others end the run outright.
pub fn after_death(variant: Variant, lives: i32) -> i32 {
    match variant {
        Variant::RandomWalk | Variant::Cadenced => lives_floor(variant),
        Variant::ZigZag => (lives - 1).max(lives_floor(variant)),
    }
}

pub fn has_won(state: &GameState) -> bool {
    match state.variant {
        Variant::RandomWalk => state.grid.dots_remaining() == 0,
        Variant::ZigZag | Variant::Cadenced => state.aliens.is_empty(),
    }
}

pub fn has_lost(state: &GameState) -> bool {
    state.lives <= lives_floor(state.variant)
}
