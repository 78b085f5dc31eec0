//! The rules engine: turn machine, move enumeration, match state.

pub mod movegen;
pub mod state;
pub mod turn;

pub use movegen::{legal_moves, Move, MoveList};
pub use state::{Capture, MatchBuilder, MatchState, PlyOutcome, PlyRecord};
pub use turn::TurnPhase;
