//! Core building blocks: player identity, deterministic RNG, the die seam.

pub mod die;
pub mod player;
pub mod rng;

pub use die::{Die, RandomDie, ScriptedDie};
pub use player::{PlayerId, PlayerMap};
pub use rng::EngineRng;
