use space_invaders::collision::*;
use space_invaders::compute::init_state;
use space_invaders::entities::*;
use space_invaders::grid::{Cell, TileGrid};
use space_invaders::level::Level;

fn make_state(variant: Variant) -> GameState {
    init_state(
        Level {
            grid: TileGrid::open(30, 12),
            player: Player { row: 10, col: 14 },
            aliens: Vec::new(),
        },
        variant,
    )
}

// ── player_caught ─────────────────────────────────────────────────────────────

#[test]
fn caught_only_on_exact_cell() {
    let player = Player { row: 10, col: 14 };
    assert!(player_caught(&player, &[Alien { row: 10, col: 14 }]));
    assert!(!player_caught(&player, &[Alien { row: 9, col: 14 }]));
    assert!(!player_caught(&player, &[Alien { row: 10, col: 13 }]));
    assert!(!player_caught(&player, &[]));
}

// ── Laser hits ────────────────────────────────────────────────────────────────

#[test]
fn laser_and_alien_on_same_cell_both_removed() {
    let mut grid = TileGrid::open(30, 12);
    let mut aliens = vec![Alien { row: 5, col: 10 }, Alien { row: 5, col: 12 }];
    let mut lasers = vec![Laser { row: 5, col: 10 }, Laser { row: 8, col: 3 }];
    let kills = resolve_laser_hits(&mut aliens, &mut lasers, &mut grid);
    assert_eq!(kills, 1);
    assert_eq!(aliens, vec![Alien { row: 5, col: 12 }]);
    assert_eq!(lasers, vec![Laser { row: 8, col: 3 }]);
    assert_eq!(grid.cell(5, 10), Cell::Empty);
    assert_eq!(grid.cell(5, 12), Cell::Open);
}

#[test]
fn one_laser_takes_only_the_first_of_stacked_aliens() {
    let mut grid = TileGrid::open(30, 12);
    let mut aliens = vec![
        Alien { row: 5, col: 10 },
        Alien { row: 5, col: 10 },
    ];
    let mut lasers = vec![Laser { row: 5, col: 10 }];
    let kills = resolve_laser_hits(&mut aliens, &mut lasers, &mut grid);
    assert_eq!(kills, 1);
    assert_eq!(aliens.len(), 1);
    assert!(lasers.is_empty());
}

#[test]
fn two_lasers_on_one_alien_spend_only_one() {
    let mut grid = TileGrid::open(30, 12);
    let mut aliens = vec![Alien { row: 5, col: 10 }];
    let mut lasers = vec![Laser { row: 5, col: 10 }, Laser { row: 5, col: 10 }];
    let kills = resolve_laser_hits(&mut aliens, &mut lasers, &mut grid);
    assert_eq!(kills, 1);
    assert!(aliens.is_empty());
    assert_eq!(lasers.len(), 1);
}

#[test]
fn survivors_keep_their_order() {
    let mut grid = TileGrid::open(30, 12);
    let mut aliens = vec![
        Alien { row: 2, col: 1 },
        Alien { row: 2, col: 3 },
        Alien { row: 2, col: 5 },
        Alien { row: 2, col: 7 },
    ];
    let mut lasers = vec![Laser { row: 2, col: 5 }, Laser { row: 2, col: 1 }];
    resolve_laser_hits(&mut aliens, &mut lasers, &mut grid);
    assert_eq!(aliens, vec![Alien { row: 2, col: 3 }, Alien { row: 2, col: 7 }]);
}

// ── Full pass ─────────────────────────────────────────────────────────────────

#[test]
fn pass_scores_one_per_kill() {
    let mut s = make_state(Variant::Cadenced);
    s.score = 4;
    s.aliens = vec![Alien { row: 3, col: 3 }, Alien { row: 3, col: 6 }];
    s.lasers = vec![Laser { row: 3, col: 3 }, Laser { row: 3, col: 6 }];
    let report = resolve_collisions(&mut s, false);
    assert_eq!(report, CollisionReport { player_hit: false, kills: 2 });
    assert_eq!(s.score, 6);
    assert_eq!(s.lives, 1);
}

#[test]
fn caught_player_ends_the_run_outright_outside_zigzag() {
    let mut s = make_state(Variant::Cadenced);
    s.aliens = vec![Alien { row: 10, col: 14 }];
    let report = resolve_collisions(&mut s, false);
    assert!(report.player_hit);
    assert_eq!(s.lives, 0);
}

#[test]
fn zigzag_takes_one_life_per_tick() {
    let mut s = make_state(Variant::ZigZag);
    // Two aliens on the player and an earlier walk-in still cost one life
    s.aliens = vec![Alien { row: 10, col: 14 }, Alien { row: 10, col: 14 }];
    resolve_collisions(&mut s, true);
    assert_eq!(s.lives, 0);
    resolve_collisions(&mut s, false);
    assert_eq!(s.lives, -1);
    resolve_collisions(&mut s, false);
    assert_eq!(s.lives, -1);
}

#[test]
fn walk_in_reported_earlier_counts_as_caught() {
    let mut s = make_state(Variant::RandomWalk);
    let report = resolve_collisions(&mut s, true);
    assert!(report.player_hit);
    assert_eq!(s.lives, 0);
}
