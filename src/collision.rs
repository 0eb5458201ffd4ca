//! Collision and scoring pass, run once per tick after all movement.

use log::debug;

use crate::entities::{Alien, GameState, Laser, Player};
use crate::grid::TileGrid;
use crate::rules;

/// What the collision pass found this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub player_hit: bool,
    pub kills: u32,
}

/// True if any alien shares the player's cell.
pub fn player_caught(player: &Player, aliens: &[Alien]) -> bool {
    aliens
        .iter()
        .any(|a| a.row == player.row && a.col == player.col)
}

/// Pair lasers with aliens on the same cell and remove both.
///
/// Lasers are taken in order and each one claims the first living alien on
/// its cell, so when several aliens stack on one cell a single laser takes
/// out only the earliest of them. Every destroyed alien's cell is cleared on
/// the grid. Survivors keep their relative order.
///
/// Returns the number of aliens destroyed.
pub fn resolve_laser_hits(
    aliens: &mut Vec<Alien>,
    lasers: &mut Vec<Laser>,
    grid: &mut TileGrid,
) -> u32 {
    let mut alien_dead = vec![false; aliens.len()];
    let mut laser_spent = vec![false; lasers.len()];
    let mut kills = 0;

    for (li, laser) in lasers.iter().enumerate() {
        let hit = aliens
            .iter()
            .enumerate()
            .find(|(ai, a)| !alien_dead[*ai] && a.row == laser.row && a.col == laser.col)
            .map(|(ai, _)| ai);

        if let Some(ai) = hit {
            alien_dead[ai] = true;
            laser_spent[li] = true;
            grid.clear_cell(laser.row, laser.col);
            kills += 1;
            debug!("laser destroyed alien at ({}, {})", laser.row, laser.col);
        }
    }

    let mut dead = alien_dead.into_iter();
    aliens.retain(|_| !dead.next().unwrap_or(false));
    let mut spent = laser_spent.into_iter();
    lasers.retain(|_| !spent.next().unwrap_or(false));

    kills
}

/// Full collision pass over a state: player death first, then laser hits.
///
/// `caught_earlier` reports that the player already walked into an alien
/// this tick; the death penalty is applied at most once per tick. A caught
/// player loses lives per the variant's rules; the tick carries on either
/// way and the caller decides whether the run is over.
pub fn resolve_collisions(state: &mut GameState, caught_earlier: bool) -> CollisionReport {
    let player_hit = caught_earlier || player_caught(&state.player, &state.aliens);
    if player_hit {
        state.lives = rules::after_death(state.variant, state.lives);
        debug!(
            "player caught at ({}, {}), lives now {}",
            state.player.row, state.player.col, state.lives
        );
    }

    let kills = resolve_laser_hits(&mut state.aliens, &mut state.lasers, &mut state.grid);
    state.score += kills;

    CollisionReport { player_hit, kills }
}
