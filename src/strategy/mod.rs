//! Decision strategies.
//!
//! A strategy is one capability: given a read-only view of the match,
//! the roll, and a non-empty candidate list, return exactly one of the
//! candidates. It must never fabricate a move; the match asserts the
//! returned move is among the candidates.
//!
//! Built-ins:
//! - `RandomStrategy`: uniform over the candidates.
//! - `LaggardFirst`: move the token that is least far along its
//!   owner's path.
//! - `VanguardFirst`: move the token that is furthest along.
//!
//! A human-input strategy would block inside `choose` until the host
//! resolves a selection; the host owns discarding decisions that were
//! abandoned (e.g. a new match started while one was pending).

use crate::board::{PlayerPath, TokenPosition, TOKENS_PER_PLAYER};
use crate::core::{EngineRng, PlayerId, PlayerMap};
use crate::rules::Move;

/// Read-only view of the match handed to strategies.
///
/// Exposes exactly what a decision needs: who is acting, every
/// player's path, and every player's token positions.
pub struct DecisionView<'a> {
    acting: PlayerId,
    paths: &'a PlayerMap<PlayerPath>,
    tokens: &'a PlayerMap<[TokenPosition; TOKENS_PER_PLAYER]>,
}

impl<'a> DecisionView<'a> {
    /// Assemble a view. Hosts normally never call this; the match
    /// builds one per decision. Exposed for strategy test harnesses.
    #[must_use]
    pub fn new(
        acting: PlayerId,
        paths: &'a PlayerMap<PlayerPath>,
        tokens: &'a PlayerMap<[TokenPosition; TOKENS_PER_PLAYER]>,
    ) -> Self {
        Self {
            acting,
            paths,
            tokens,
        }
    }

    /// The player this decision belongs to.
    #[must_use]
    pub fn acting_player(&self) -> PlayerId {
        self.acting
    }

    /// Number of players in the match.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.paths.player_count()
    }

    /// A player's traversal path.
    #[must_use]
    pub fn path_of(&self, player: PlayerId) -> &PlayerPath {
        self.paths.get(player)
    }

    /// A player's token positions, indexed by token id.
    #[must_use]
    pub fn tokens_of(&self, player: PlayerId) -> &[TokenPosition; TOKENS_PER_PLAYER] {
        self.tokens.get(player)
    }
}

/// A pluggable decision policy.
pub trait Strategy: Send {
    /// Select one of `candidates`.
    ///
    /// `candidates` is never empty; the match skips the strategy
    /// entirely when no legal move exists. The returned move must be
    /// one of the candidates.
    fn choose(&mut self, view: &DecisionView<'_>, roll: u8, candidates: &[Move]) -> Move;
}

/// Uniform-random choice over the candidates.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: EngineRng,
}

impl RandomStrategy {
    /// Create a random strategy with its own RNG stream.
    #[must_use]
    pub fn new(rng: EngineRng) -> Self {
        Self { rng }
    }

    /// Convenience constructor from a raw seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(EngineRng::new(seed))
    }
}

impl Strategy for RandomStrategy {
    fn choose(&mut self, _view: &DecisionView<'_>, _roll: u8, candidates: &[Move]) -> Move {
        assert!(!candidates.is_empty(), "Strategy called with no candidates");
        candidates[self.rng.gen_range_usize(0..candidates.len())]
    }
}

/// Path progress of a candidate's origin token.
///
/// Tokens on the path rank by their traversal index; tokens absent
/// from the path (reserve or home) rank as -1, below every path
/// position.
fn origin_progress(view: &DecisionView<'_>, player: PlayerId, mv: &Move) -> i64 {
    let pos = view.tokens_of(player)[mv.token.index()];
    match pos.path_cell() {
        Some(cell) => view
            .path_of(player)
            .index_of_cell(cell)
            .expect("Token stands on a cell outside its owner's path") as i64,
        None => -1,
    }
}

/// Prefer the candidate whose moving token is least far along the
/// owner's path. Ties go to the earlier candidate.
///
/// Bound to one player at construction; using it while another player
/// is acting is a caller error and panics.
#[derive(Clone, Copy, Debug)]
pub struct LaggardFirst {
    player: PlayerId,
}

impl LaggardFirst {
    /// Bind the strategy to the player it will decide for.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl Strategy for LaggardFirst {
    fn choose(&mut self, view: &DecisionView<'_>, _roll: u8, candidates: &[Move]) -> Move {
        assert!(!candidates.is_empty(), "Strategy called with no candidates");
        assert_eq!(
            view.acting_player(),
            self.player,
            "LaggardFirst bound to {} asked to act for {}",
            self.player,
            view.acting_player()
        );

        let mut best = candidates[0];
        let mut best_key = origin_progress(view, self.player, &best);
        for mv in &candidates[1..] {
            let key = origin_progress(view, self.player, mv);
            if key < best_key {
                best = *mv;
                best_key = key;
            }
        }
        best
    }
}

/// Prefer the candidate whose moving token is furthest along the
/// owner's path. Ties go to the earlier candidate.
#[derive(Clone, Copy, Debug)]
pub struct VanguardFirst {
    player: PlayerId,
}

impl VanguardFirst {
    /// Bind the strategy to the player it will decide for.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl Strategy for VanguardFirst {
    fn choose(&mut self, view: &DecisionView<'_>, _roll: u8, candidates: &[Move]) -> Move {
        assert!(!candidates.is_empty(), "Strategy called with no candidates");
        assert_eq!(
            view.acting_player(),
            self.player,
            "VanguardFirst bound to {} asked to act for {}",
            self.player,
            view.acting_player()
        );

        let mut best = candidates[0];
        let mut best_key = origin_progress(view, self.player, &best);
        for mv in &candidates[1..] {
            let key = origin_progress(view, self.player, mv);
            if key > best_key {
                best = *mv;
                best_key = key;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TokenId;

    fn fixture() -> (PlayerMap<PlayerPath>, PlayerMap<[TokenPosition; 4]>) {
        let paths = PlayerMap::from_values(vec![
            PlayerPath::new((0..10).collect()),
            PlayerPath::new((10..20).collect()),
        ]);
        let mut tokens = PlayerMap::new(2, |_| {
            [
                TokenPosition::reserve(0),
                TokenPosition::reserve(1),
                TokenPosition::reserve(2),
                TokenPosition::reserve(3),
            ]
        });
        // Player 0: token 0 at traversal index 2, token 1 at index 7.
        tokens[PlayerId::new(0)][0] = TokenPosition::path(2);
        tokens[PlayerId::new(0)][1] = TokenPosition::path(7);
        (paths, tokens)
    }

    fn candidates() -> Vec<Move> {
        vec![
            Move {
                token: TokenId::new(0),
                dest: TokenPosition::path(5),
            },
            Move {
                token: TokenId::new(1),
                dest: TokenPosition::path(9),
            },
        ]
    }

    #[test]
    fn test_laggard_prefers_least_advanced() {
        let (paths, tokens) = fixture();
        let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);
        let mut strat = LaggardFirst::new(PlayerId::new(0));

        let chosen = strat.choose(&view, 3, &candidates());
        assert_eq!(chosen.token, TokenId::new(0));
    }

    #[test]
    fn test_vanguard_prefers_most_advanced() {
        let (paths, tokens) = fixture();
        let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);
        let mut strat = VanguardFirst::new(PlayerId::new(0));

        let chosen = strat.choose(&view, 3, &candidates());
        assert_eq!(chosen.token, TokenId::new(1));
    }

    #[test]
    fn test_off_path_origin_ranks_below_path() {
        let (paths, tokens) = fixture();
        let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);

        // Reserve escape (token 2, origin off-path) vs path advance.
        let cands = vec![
            Move {
                token: TokenId::new(1),
                dest: TokenPosition::path(9),
            },
            Move {
                token: TokenId::new(2),
                dest: TokenPosition::path(0),
            },
        ];

        let mut laggard = LaggardFirst::new(PlayerId::new(0));
        assert_eq!(laggard.choose(&view, 6, &cands).token, TokenId::new(2));

        let mut vanguard = VanguardFirst::new(PlayerId::new(0));
        assert_eq!(vanguard.choose(&view, 6, &cands).token, TokenId::new(1));
    }

    #[test]
    fn test_ties_break_by_list_order() {
        let (paths, mut tokens) = fixture();
        // Two candidates moving the same token rank equal; first wins.
        tokens[PlayerId::new(0)][1] = TokenPosition::reserve(1);
        let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);

        let cands = vec![
            Move {
                token: TokenId::new(0),
                dest: TokenPosition::path(4),
            },
            Move {
                token: TokenId::new(0),
                dest: TokenPosition::path(6),
            },
        ];

        let mut laggard = LaggardFirst::new(PlayerId::new(0));
        assert_eq!(laggard.choose(&view, 2, &cands), cands[0]);

        let mut vanguard = VanguardFirst::new(PlayerId::new(0));
        assert_eq!(vanguard.choose(&view, 2, &cands), cands[0]);
    }

    #[test]
    fn test_random_returns_member() {
        let (paths, tokens) = fixture();
        let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);
        let mut strat = RandomStrategy::from_seed(3);

        let cands = candidates();
        for _ in 0..100 {
            let chosen = strat.choose(&view, 4, &cands);
            assert!(cands.contains(&chosen));
        }
    }

    #[test]
    #[should_panic(expected = "bound to Player 1")]
    fn test_wrong_player_binding_panics() {
        let (paths, tokens) = fixture();
        let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);
        let mut strat = LaggardFirst::new(PlayerId::new(1));

        let _ = strat.choose(&view, 3, &candidates());
    }
}
