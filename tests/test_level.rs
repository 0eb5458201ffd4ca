use std::path::Path;

use space_invaders::config::GlyphConfig;
use space_invaders::entities::{Alien, Player};
use space_invaders::error::LoadError;
use space_invaders::grid::Cell;
use space_invaders::level::{load_level, parse_level};

// ── Level parsing ─────────────────────────────────────────────────────────────

#[test]
fn legend_maps_to_cells_and_spawns() {
    let level = parse_level(
        "\
######
#Y.G #
#  U #
######
",
    )
    .unwrap();

    assert_eq!(level.grid.width(), 6);
    assert_eq!(level.grid.height(), 4);
    assert_eq!(level.player, Player { row: 2, col: 3 });
    assert_eq!(
        level.aliens,
        vec![Alien { row: 1, col: 1 }, Alien { row: 1, col: 3 }]
    );
    assert_eq!(level.grid.cell(0, 0), Cell::Wall);
    assert_eq!(level.grid.cell(1, 2), Cell::Dot);
    // Spawn markers become open floor
    assert_eq!(level.grid.cell(1, 1), Cell::Open);
    assert_eq!(level.grid.cell(2, 3), Cell::Open);
    assert_eq!(level.grid.dots_remaining(), 1);
}

#[test]
fn short_lines_are_padded_with_open_floor() {
    let level = parse_level("#####\n#U\n#####\n").unwrap();
    assert_eq!(level.grid.width(), 5);
    assert_eq!(level.grid.cell(1, 4), Cell::Open);
}

#[test]
fn missing_player_is_an_error() {
    let err = parse_level("####\n#  #\n####\n").unwrap_err();
    assert!(matches!(err, LoadError::MissingPlayer));
}

#[test]
fn second_player_is_an_error() {
    let err = parse_level("U  U\n").unwrap_err();
    match err {
        LoadError::DuplicatePlayer { first, second } => {
            assert_eq!(first, (0, 0));
            assert_eq!(second, (0, 3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_text_is_an_error() {
    assert!(matches!(parse_level(""), Err(LoadError::EmptyLevel)));
    assert!(matches!(parse_level("\n\n"), Err(LoadError::EmptyLevel)));
}

#[test]
fn missing_file_reports_path() {
    let err = load_level(Path::new("levels/does_not_exist.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.txt"));
}

#[test]
fn shipped_levels_parse() {
    for text in [
        include_str!("../levels/level00.txt"),
        include_str!("../levels/level01.txt"),
    ] {
        let level = parse_level(text).unwrap();
        assert!(!level.aliens.is_empty());
        assert!(level.grid.rows().all(|r| r.len() == level.grid.width()));
    }
    let random_walk = parse_level(include_str!("../levels/level00.txt")).unwrap();
    assert!(random_walk.grid.dots_remaining() > 0);
}

// ── Glyph configuration ───────────────────────────────────────────────────────

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg = GlyphConfig::from_json(r#"{ "alien": "W", "use_emoji": true }"#).unwrap();
    assert_eq!(cfg.alien, "W");
    assert!(cfg.use_emoji);
    assert_eq!(cfg.cell_width(), 2);
    assert_eq!(cfg.player, GlyphConfig::default().player);
}

#[test]
fn malformed_config_is_an_error() {
    assert!(GlyphConfig::from_json("{ \"alien\": 3 }").is_err());
    assert!(GlyphConfig::from_json("not json").is_err());
}

#[test]
fn shipped_configs_load() {
    let plain = GlyphConfig::load(Path::new("config/config_noemoji.json")).unwrap();
    assert_eq!(plain, GlyphConfig::default());
    let emoji = GlyphConfig::load(Path::new("config/config_emoji.json")).unwrap();
    assert!(emoji.use_emoji);
}
