//! Host loop: tick, present, sleep, until the run is decided.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use log::info;

use crate::compute::tick;
use crate::entities::{Command, GameState, Snapshot};
use crate::fleet::DirectionSource;

/// Anything that can show a frame. Called once per tick, including the
/// final terminal frame.
pub trait RenderSink {
    fn present(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;
}

/// Drive ticks until the state is won or lost and return the final state.
///
/// `poll` is asked for at most one command per tick and must not block.
/// Each tick is padded out to `frame`; pass `Duration::ZERO` to run flat out.
pub fn run<S: RenderSink>(
    mut state: GameState,
    mut poll: impl FnMut() -> Option<Command>,
    sink: &mut S,
    dirs: &mut impl DirectionSource,
    frame: Duration,
) -> io::Result<GameState> {
    info!(
        "starting {:?} run: {} aliens, {} dots",
        state.variant,
        state.aliens.len(),
        state.grid.dots_remaining()
    );

    loop {
        let frame_start = Instant::now();

        state = tick(&state, poll(), dirs);
        sink.present(&state.snapshot())?;

        if state.status.is_terminal() {
            return Ok(state);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}
