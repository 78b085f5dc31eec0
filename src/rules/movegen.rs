//! Legal move enumeration.
//!
//! Given one player's token positions, their path, and a roll, produce
//! every legal `(token, destination)` pair. An empty result is a
//! normal outcome (the ply simply makes no move), never an error.
//!
//! Enumeration order is deterministic — reserve escape first, then
//! path advances, then home advances, each by ascending token id — so
//! strategies always see candidates in a stable order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Compartment, PlayerPath, TokenId, TokenPosition, TOKENS_PER_PLAYER};

/// A candidate or applied move: which token, and where it lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The moving token's stable identity.
    pub token: TokenId,
    /// The position the token ends on.
    pub dest: TokenPosition,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.token, self.dest)
    }
}

/// Inline list of legal moves. A player owns four tokens plus at most
/// one reserve escape, so this never spills to the heap.
pub type MoveList = SmallVec<[Move; 8]>;

fn own_token_on_cell(tokens: &[TokenPosition; TOKENS_PER_PLAYER], cell: u16) -> bool {
    tokens.iter().any(|t| t.path_cell() == Some(cell))
}

fn own_token_in_home_slot(tokens: &[TokenPosition; TOKENS_PER_PLAYER], slot: u16) -> bool {
    tokens
        .iter()
        .any(|t| t.compartment == Compartment::Home && t.index == slot)
}

/// Enumerate the legal moves for one player.
///
/// - **Reserve escape**: on a six, the lowest-id reserve token may
///   enter the path at the entry cell, unless an own token already
///   stands there. Reserve tokens are interchangeable for this step;
///   picking the lowest id keeps the candidate list stable.
/// - **Path advance**: a token at traversal index `k` moves to index
///   `k + roll`; within the path it is blocked only by own tokens
///   (opponents are captured, not blockers), beyond the path it enters
///   the home lane at slot `k + roll - len` if that slot exists and is
///   free.
/// - **Home advance**: a token at home slot `s` moves to `s + roll` if
///   that slot exists and is free. No wraparound: an overshoot simply
///   produces no candidate.
#[must_use]
pub fn legal_moves(
    tokens: &[TokenPosition; TOKENS_PER_PLAYER],
    path: &PlayerPath,
    roll: u8,
) -> MoveList {
    debug_assert!((1..=6).contains(&roll));

    let mut moves = MoveList::new();
    let roll = roll as usize;
    let len = path.len();

    // Reserve escape.
    if roll == 6 && !own_token_on_cell(tokens, path.entry_cell()) {
        let lowest_reserve = TokenId::all()
            .find(|t| tokens[t.index()].compartment == Compartment::Reserve);
        if let Some(token) = lowest_reserve {
            moves.push(Move {
                token,
                dest: TokenPosition::path(path.entry_cell()),
            });
        }
    }

    // Path advances.
    for token in TokenId::all() {
        let Some(cell) = tokens[token.index()].path_cell() else {
            continue;
        };
        let k = path
            .index_of_cell(cell)
            .expect("Token stands on a cell outside its owner's path");

        let m = k + roll;
        if m < len {
            let dest_cell = path.cell(m);
            if !own_token_on_cell(tokens, dest_cell) {
                moves.push(Move {
                    token,
                    dest: TokenPosition::path(dest_cell),
                });
            }
        } else {
            let h = m - len;
            if h < TOKENS_PER_PLAYER && !own_token_in_home_slot(tokens, h as u16) {
                moves.push(Move {
                    token,
                    dest: TokenPosition::home(h as u8),
                });
            }
        }
    }

    // Home advances.
    for token in TokenId::all() {
        let pos = tokens[token.index()];
        if pos.compartment != Compartment::Home {
            continue;
        }
        let s = pos.index as usize + roll;
        if s < TOKENS_PER_PLAYER && !own_token_in_home_slot(tokens, s as u16) {
            moves.push(Move {
                token,
                dest: TokenPosition::home(s as u8),
            });
        }
    }

    moves
}
