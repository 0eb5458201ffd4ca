//! Terminal alien-fleet shooter.
//!
//! The simulation core (`grid`, `movement`, `fleet`, `collision`,
//! `compute`) is pure and deterministic given its inputs. `level`,
//! `config`, `input` and `session` are the thin layers a terminal host
//! needs around it.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod grid;
pub mod input;
pub mod level;
pub mod movement;
pub mod rules;
pub mod session;
