//! # ludo-engine
//!
//! Rules engine for a four-token race-and-capture board game: each
//! player races four tokens from a private reserve, around a shared
//! path, into a private home lane, rolling a die for movement and
//! capturing opponents by landing on their cell.
//!
//! The crate contains only the rules core. Rendering, board-geometry
//! derivation, input capture, and match orchestration are host
//! concerns: hosts construct a match through [`MatchBuilder`], step it
//! with [`MatchState::play_ply`] until [`MatchState::winner`] reports
//! a player, and observe rolls through [`MatchState::on_roll`].
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through a seeded RNG
//!    behind the [`Die`] seam; a scripted die replays exact sequences.
//!
//! 2. **One mutation point**: `play_ply` is the only operation that
//!    changes a match — roll, phase transition, move selection via the
//!    player's [`Strategy`], application, capture resolution, turn
//!    advance.
//!
//! 3. **Fail loudly**: precondition violations (malformed matches,
//!    strategies fabricating moves) panic instead of corrupting
//!    state. A roll with no legal move is a normal outcome, not an
//!    error.
//!
//! ## Modules
//!
//! - `core`: player identity, deterministic RNG, the die seam
//! - `board`: token positions and per-player traversal paths
//! - `rules`: turn machine, legal-move enumeration, match state
//! - `strategy`: pluggable decision policies

pub mod board;
pub mod core;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Die, EngineRng, PlayerId, PlayerMap, RandomDie, ScriptedDie};

pub use crate::board::{Compartment, PlayerPath, TokenId, TokenPosition, TOKENS_PER_PLAYER};

pub use crate::rules::{
    legal_moves, Capture, MatchBuilder, MatchState, Move, MoveList, PlyOutcome, PlyRecord,
    TurnPhase,
};

pub use crate::strategy::{
    DecisionView, LaggardFirst, RandomStrategy, Strategy, VanguardFirst,
};
