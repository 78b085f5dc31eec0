//! Match state and the per-ply operation.
//!
//! `MatchState` owns everything a match needs: the players (fixed turn
//! order), each player's path, each player's four token positions,
//! each player's strategy, the turn phase, the die, roll listeners,
//! and the ply history. All mutation goes through `play_ply`.
//!
//! One ply:
//! 1. roll the die,
//! 2. notify roll listeners,
//! 3. derive the new turn phase,
//! 4. enumerate legal moves; with none, the ply is a `NoMove`,
//! 5. otherwise ask the acting player's strategy for one candidate,
//! 6. apply it and resolve at most one capture,
//! 7. record the ply, then pass or retain the turn.
//!
//! Precondition violations (bad player counts, a strategy returning a
//! move outside the candidates, stepping a finished match) panic; a
//! well-formed match never hits them.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Compartment, PlayerPath, TokenId, TokenPosition, TOKENS_PER_PLAYER};
use crate::core::{Die, PlayerId, PlayerMap, RandomDie};
use crate::strategy::{DecisionView, Strategy};

use super::movegen::{legal_moves, Move};
use super::turn::TurnPhase;

/// An opponent token sent back to its reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The token's owner.
    pub player: PlayerId,
    /// The captured token.
    pub token: TokenId,
    /// The reserve slot it was returned to.
    pub reserve_slot: u8,
}

/// Result of one ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlyOutcome {
    /// A move was chosen and applied.
    Moved {
        player: PlayerId,
        roll: u8,
        mv: Move,
        capture: Option<Capture>,
    },
    /// The roll produced no legal move. The phase transition still
    /// happened; this is a normal outcome, not an error.
    NoMove { player: PlayerId, roll: u8 },
}

impl PlyOutcome {
    /// The player who rolled.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            PlyOutcome::Moved { player, .. } | PlyOutcome::NoMove { player, .. } => *player,
        }
    }

    /// The applied move, if one was made.
    #[must_use]
    pub fn applied(&self) -> Option<Move> {
        match self {
            PlyOutcome::Moved { mv, .. } => Some(*mv),
            PlyOutcome::NoMove { .. } => None,
        }
    }
}

/// One ply in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// 0-based ply number.
    pub ply: u64,
    pub player: PlayerId,
    pub roll: u8,
    /// The applied move, or `None` for a no-move ply.
    pub mv: Option<Move>,
    pub capture: Option<Capture>,
}

type RollListener = Box<dyn FnMut(PlayerId, u8) + Send>;

/// Builder for a match: one path and one strategy per player, in turn
/// order, plus an optional die override.
pub struct MatchBuilder {
    entrants: Vec<(PlayerPath, Box<dyn Strategy>)>,
    die: Option<Box<dyn Die>>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entrants: Vec::new(),
            die: None,
        }
    }

    /// Add a player. Call order is turn order: the first call is
    /// player 0.
    #[must_use]
    pub fn add_player(mut self, path: PlayerPath, strategy: Box<dyn Strategy>) -> Self {
        self.entrants.push((path, strategy));
        self
    }

    /// Replace the default fair die, e.g. with a `ScriptedDie`.
    #[must_use]
    pub fn die(mut self, die: Box<dyn Die>) -> Self {
        self.die = Some(die);
        self
    }

    /// Build the match. `seed` drives the default die; it is unused
    /// when a die override was supplied.
    ///
    /// Panics unless 2 to 4 players were added.
    #[must_use]
    pub fn build(self, seed: u64) -> MatchState {
        assert!(
            (2..=4).contains(&self.entrants.len()),
            "A match needs 2 to 4 players"
        );

        let mut paths = Vec::new();
        let mut strategies = Vec::new();
        for (path, strategy) in self.entrants {
            paths.push(path);
            strategies.push(strategy);
        }
        let player_count = paths.len();

        MatchState {
            paths: PlayerMap::from_values(paths),
            strategies: PlayerMap::from_values(strategies),
            tokens: PlayerMap::new(player_count, |_| {
                [
                    TokenPosition::reserve(0),
                    TokenPosition::reserve(1),
                    TokenPosition::reserve(2),
                    TokenPosition::reserve(3),
                ]
            }),
            phase: TurnPhase::Normal,
            current: PlayerId::new(0),
            die: self.die.unwrap_or_else(|| Box::new(RandomDie::from_seed(seed))),
            ply_number: 0,
            history: Vector::new(),
            roll_listeners: Vec::new(),
        }
    }
}

/// A running match.
pub struct MatchState {
    paths: PlayerMap<PlayerPath>,
    strategies: PlayerMap<Box<dyn Strategy>>,
    tokens: PlayerMap<[TokenPosition; TOKENS_PER_PLAYER]>,
    phase: TurnPhase,
    current: PlayerId,
    die: Box<dyn Die>,
    ply_number: u64,
    history: Vector<PlyRecord>,
    roll_listeners: Vec<RollListener>,
}

impl MatchState {
    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.paths.player_count()
    }

    /// The player acting on the next ply.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Number of plies played so far.
    #[must_use]
    pub fn ply_number(&self) -> u64 {
        self.ply_number
    }

    /// A player's token positions, indexed by token id.
    #[must_use]
    pub fn tokens_of(&self, player: PlayerId) -> &[TokenPosition; TOKENS_PER_PLAYER] {
        self.tokens.get(player)
    }

    /// A player's traversal path.
    #[must_use]
    pub fn path_of(&self, player: PlayerId) -> &PlayerPath {
        self.paths.get(player)
    }

    /// The full ply history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlyRecord> {
        &self.history
    }

    /// Register a listener notified synchronously of every roll,
    /// before the acting player's strategy is consulted.
    pub fn on_roll(&mut self, listener: impl FnMut(PlayerId, u8) + Send + 'static) {
        self.roll_listeners.push(Box::new(listener));
    }

    /// Which token stands on each occupied path cell.
    ///
    /// Presentation layers use this to draw the board; at most one
    /// token ever occupies a cell.
    #[must_use]
    pub fn path_occupancy(&self) -> FxHashMap<u16, (PlayerId, TokenId)> {
        let mut map = FxHashMap::default();
        for (player, tokens) in self.tokens.iter() {
            for token in TokenId::all() {
                if let Some(cell) = tokens[token.index()].path_cell() {
                    let prev = map.insert(cell, (player, token));
                    assert!(prev.is_none(), "Two tokens occupy path cell {}", cell);
                }
            }
        }
        map
    }

    /// The winner, if some player has all four tokens home.
    ///
    /// Scans in turn order; only the most recent actor can newly
    /// satisfy the condition.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all(self.player_count()).find(|&p| {
            self.tokens[p]
                .iter()
                .all(|t| t.compartment == Compartment::Home)
        })
    }

    /// Play one ply for the current player.
    ///
    /// Panics if the match already has a winner.
    pub fn play_ply(&mut self) -> PlyOutcome {
        assert!(self.winner().is_none(), "Match is already finished");

        let player = self.current;
        let roll = self.die.roll();

        for listener in &mut self.roll_listeners {
            listener(player, roll);
        }

        // Phase is derived at roll time, before the move lands.
        let on_path = self.tokens[player].iter().any(|t| t.is_on_path());
        let new_phase = self.phase.next(roll, on_path);

        let moves = legal_moves(&self.tokens[player], &self.paths[player], roll);

        let outcome = if moves.is_empty() {
            PlyOutcome::NoMove { player, roll }
        } else {
            let chosen = {
                let view = DecisionView::new(player, &self.paths, &self.tokens);
                self.strategies[player].choose(&view, roll, &moves)
            };
            assert!(
                moves.contains(&chosen),
                "Strategy for {} returned a move outside the candidate set",
                player
            );

            let capture = self.apply_move(player, chosen);
            PlyOutcome::Moved {
                player,
                roll,
                mv: chosen,
                capture,
            }
        };

        self.history.push_back(PlyRecord {
            ply: self.ply_number,
            player,
            roll,
            mv: outcome.applied(),
            capture: match outcome {
                PlyOutcome::Moved { capture, .. } => capture,
                PlyOutcome::NoMove { .. } => None,
            },
        });
        self.ply_number += 1;

        self.phase = new_phase;
        if !new_phase.retains_turn() {
            self.current = player.next(self.player_count());
        }

        outcome
    }

    /// Drive plies until a winner exists or `max_plies` is reached.
    ///
    /// Returns the winner, or `None` if the cap was hit first.
    pub fn play_to_end(&mut self, max_plies: u64) -> Option<PlayerId> {
        for _ in 0..max_plies {
            if let Some(winner) = self.winner() {
                return Some(winner);
            }
            self.play_ply();
        }
        self.winner()
    }

    /// Relocate the token and resolve at most one capture.
    ///
    /// The scan over opponents starts after the acting player and
    /// follows turn order; the first opponent token on the landing
    /// cell is captured and the scan stops. Only path landings
    /// capture.
    fn apply_move(&mut self, player: PlayerId, mv: Move) -> Option<Capture> {
        self.tokens[player][mv.token.index()] = mv.dest;

        let cell = mv.dest.path_cell()?;

        let n = self.player_count();
        let mut other = player.next(n);
        while other != player {
            let hit = TokenId::all()
                .find(|t| self.tokens[other][t.index()].path_cell() == Some(cell));
            if let Some(token) = hit {
                let slot = self.lowest_free_reserve_slot(other);
                self.tokens[other][token.index()] = TokenPosition::reserve(slot);
                return Some(Capture {
                    player: other,
                    token,
                    reserve_slot: slot,
                });
            }
            other = other.next(n);
        }
        None
    }

    fn lowest_free_reserve_slot(&self, player: PlayerId) -> u8 {
        let occupied: Vec<u16> = self.tokens[player]
            .iter()
            .filter(|t| t.compartment == Compartment::Reserve)
            .map(|t| t.index)
            .collect();
        (0..TOKENS_PER_PLAYER as u8)
            .find(|slot| !occupied.contains(&(*slot as u16)))
            .expect("No free reserve slot for a captured token")
    }
}
