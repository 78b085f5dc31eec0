//! The turn/reroll state machine.
//!
//! The phase is re-derived every ply from the previous phase and the
//! fresh roll. After the transition, `Normal` passes the turn to the
//! next player; any other phase keeps the same player rolling.
//!
//! A deliberate consequence of the transition order: a player with no
//! token on the path who keeps missing sixes goes `Normal` →
//! `Stalled` → `Continuing` → `Normal`, i.e. gets up to three
//! consecutive rolls before the turn passes. That is the rule as
//! played, not a shortcut for "one extra attempt".

use serde::{Deserialize, Serialize};

/// Per-player turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Ordinary ply; the turn passes afterwards.
    #[default]
    Normal,
    /// The player rolled a six or was granted a bonus attempt.
    Continuing,
    /// No token on the path; one extra attempt to escape reserve.
    Stalled,
}

impl TurnPhase {
    /// Derive the next phase from a fresh roll.
    ///
    /// `has_token_on_path` reflects the acting player's tokens at roll
    /// time, before any move is applied.
    #[must_use]
    pub fn next(self, roll: u8, has_token_on_path: bool) -> TurnPhase {
        debug_assert!((1..=6).contains(&roll));

        if roll == 6 {
            TurnPhase::Continuing
        } else if self == TurnPhase::Continuing {
            TurnPhase::Normal
        } else if self == TurnPhase::Stalled {
            TurnPhase::Continuing
        } else if !has_token_on_path {
            TurnPhase::Stalled
        } else {
            TurnPhase::Normal
        }
    }

    /// True if the same player acts again next ply.
    #[must_use]
    pub fn retains_turn(self) -> bool {
        self != TurnPhase::Normal
    }
}
