mod display;

use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{cursor, terminal, ExecutableCommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_invaders::compute::init_state;
use space_invaders::config::GlyphConfig;
use space_invaders::entities::{GameState, Variant};
use space_invaders::fleet::RandomDirections;
use space_invaders::input;
use space_invaders::level::load_level;
use space_invaders::rules::tick_duration;
use space_invaders::session;

use display::TerminalRenderer;

// ── Command line and logging ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    RandomWalk,
    ZigZag,
    Cadenced,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::RandomWalk => Variant::RandomWalk,
            VariantArg::ZigZag => Variant::ZigZag,
            VariantArg::Cadenced => Variant::Cadenced,
        }
    }
}

#[derive(Parser)]
#[command(name = "space_invaders")]
#[command(about = "Shoot down a sweeping alien fleet in the terminal")]
struct Args {
    /// Level file to play
    #[arg(long, default_value = "levels/level01.txt")]
    level: PathBuf,
    /// JSON glyph configuration; ASCII glyphs when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Rule set to play under
    #[arg(long, value_enum, default_value = "zig-zag")]
    variant: VariantArg,
    /// Seed for the random-walk fleet
    #[arg(long)]
    seed: Option<u64>,
    /// Log destination (the terminal is busy drawing the game)
    #[arg(long, default_value = "space_invaders.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    // Resources load before the terminal changes mode so errors print cleanly
    let level = load_level(&args.level).context("error loading level")?;
    let glyphs = match &args.config {
        Some(path) => GlyphConfig::load(path).context("error loading configuration")?,
        None => GlyphConfig::default(),
    };
    let variant = Variant::from(args.variant);
    let state = init_state(level, variant);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    out.execute(cursor::Hide)?;

    let result = play(state, glyphs, rng);

    // Always restore the terminal. The last frame stays on screen.
    let _ = out.execute(cursor::Show);
    let _ = terminal::disable_raw_mode();

    let end = result?;
    info!("finished {:?} with score {}", end.status, end.score);
    println!("{:?} - score {}", end.status, end.score);
    Ok(())
}

// ── Game loop ────────────────────────────────────────────────────────────────

fn play(state: GameState, glyphs: GlyphConfig, rng: StdRng) -> Result<GameState> {
    // The reader thread is never joined; process exit reclaims it.
    let (tx, rx) = mpsc::channel();
    input::spawn_reader(tx);

    let frame = tick_duration(state.variant);
    let mut renderer = TerminalRenderer::new(BufWriter::new(stdout()), glyphs);
    let mut dirs = RandomDirections(rng);

    let end = session::run(state, || input::latest(&rx), &mut renderer, &mut dirs, frame)?;
    Ok(end)
}
