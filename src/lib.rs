#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod feedback;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod palette;
pub mod player;
pub mod prelude;
mod ring;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod snapshot;
mod source;

pub use common::*;
pub use config::*;
pub use feedback::Cue;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::{Move, Player, SolverPlayer};
#[cfg(feature = "std")]
pub use player::{PlayerNode, RunSummary};
pub use ring::*;
#[cfg(feature = "std")]
pub use session::{LevelRecord, ScheduledAdvance, Session};
pub use source::*;
