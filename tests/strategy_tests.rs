//! Property tests for move enumeration and the built-in strategies.

use proptest::prelude::*;

use ludo_engine::{
    legal_moves, Compartment, DecisionView, LaggardFirst, PlayerId, PlayerMap, PlayerPath,
    RandomStrategy, Strategy, TokenPosition, VanguardFirst,
};

const PATH_LEN: usize = 12;

/// Build a valid token layout from per-token class and offset choices.
///
/// Classes: 0 = reserve, 1 = path, 2 = home. Uniqueness within a
/// compartment is guaranteed by deriving slots and traversal indices
/// from the token's own index.
fn layout(classes: &[u8; 4], offsets: &[u8; 4], path: &PlayerPath) -> [TokenPosition; 4] {
    std::array::from_fn(|i| match classes[i] {
        0 => TokenPosition::reserve(i as u8),
        1 => {
            let k = i * 3 + (offsets[i] % 3) as usize; // distinct per token
            TokenPosition::path(path.cell(k))
        }
        _ => TokenPosition::home(i as u8),
    })
}

fn fixture(
    tokens0: [TokenPosition; 4],
) -> (PlayerMap<PlayerPath>, PlayerMap<[TokenPosition; 4]>) {
    let paths = PlayerMap::from_values(vec![
        PlayerPath::new((0..PATH_LEN as u16).collect()),
        PlayerPath::new((PATH_LEN as u16..2 * PATH_LEN as u16).collect()),
    ]);
    let tokens = PlayerMap::from_values(vec![
        tokens0,
        [
            TokenPosition::reserve(0),
            TokenPosition::reserve(1),
            TokenPosition::reserve(2),
            TokenPosition::reserve(3),
        ],
    ]);
    (paths, tokens)
}

/// Origin-token progress as the ordering strategies see it.
fn progress(tokens: &[TokenPosition; 4], path: &PlayerPath, token_index: usize) -> i64 {
    match tokens[token_index].path_cell() {
        Some(cell) => path.index_of_cell(cell).unwrap() as i64,
        None => -1,
    }
}

proptest! {
    #[test]
    fn candidates_never_collide_with_own_tokens(
        classes in prop::array::uniform4(0u8..3),
        offsets in prop::array::uniform4(0u8..3),
        roll in 1u8..=6,
    ) {
        let path = PlayerPath::new((0..PATH_LEN as u16).collect());
        let tokens = layout(&classes, &offsets, &path);

        let moves = legal_moves(&tokens, &path, roll);
        for m in &moves {
            match m.dest.compartment {
                Compartment::Path => {
                    let cell = m.dest.path_cell().unwrap();
                    let blockers = tokens
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != m.token.index())
                        .filter(|(_, t)| t.path_cell() == Some(cell))
                        .count();
                    prop_assert_eq!(blockers, 0);
                }
                Compartment::Home => {
                    prop_assert!(m.dest.index < 4);
                    let occupied = tokens
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != m.token.index())
                        .any(|(_, t)| {
                            t.compartment == Compartment::Home && t.index == m.dest.index
                        });
                    prop_assert!(!occupied);
                }
                Compartment::Reserve => {
                    prop_assert!(false, "no move ever targets the reserve");
                }
            }
        }
    }

    #[test]
    fn every_builtin_returns_a_supplied_candidate(
        classes in prop::array::uniform4(0u8..3),
        offsets in prop::array::uniform4(0u8..3),
        roll in 1u8..=6,
        seed in 0u64..1000,
    ) {
        let path = PlayerPath::new((0..PATH_LEN as u16).collect());
        let tokens0 = layout(&classes, &offsets, &path);
        let (paths, tokens) = fixture(tokens0);

        let moves = legal_moves(&tokens0, &path, roll);
        prop_assume!(!moves.is_empty());

        let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);
        let acting = PlayerId::new(0);

        let mut strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(RandomStrategy::from_seed(seed)),
            Box::new(LaggardFirst::new(acting)),
            Box::new(VanguardFirst::new(acting)),
        ];
        for strategy in &mut strategies {
            let chosen = strategy.choose(&view, roll, &moves);
            prop_assert!(moves.contains(&chosen));
        }
    }

    #[test]
    fn laggard_and_vanguard_are_extremal(
        classes in prop::array::uniform4(0u8..3),
        offsets in prop::array::uniform4(0u8..3),
        roll in 1u8..=6,
    ) {
        let path = PlayerPath::new((0..PATH_LEN as u16).collect());
        let tokens0 = layout(&classes, &offsets, &path);
        let (paths, tokens) = fixture(tokens0);

        let moves = legal_moves(&tokens0, &path, roll);
        prop_assume!(!moves.is_empty());

        let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);
        let acting = PlayerId::new(0);

        let min_key = moves
            .iter()
            .map(|m| progress(&tokens0, &path, m.token.index()))
            .min()
            .unwrap();
        let max_key = moves
            .iter()
            .map(|m| progress(&tokens0, &path, m.token.index()))
            .max()
            .unwrap();

        let laggard = LaggardFirst::new(acting).choose(&view, roll, &moves);
        prop_assert_eq!(progress(&tokens0, &path, laggard.token.index()), min_key);

        let vanguard = VanguardFirst::new(acting).choose(&view, roll, &moves);
        prop_assert_eq!(progress(&tokens0, &path, vanguard.token.index()), max_key);
    }
}

#[test]
fn random_strategy_eventually_covers_all_candidates() {
    let path = PlayerPath::new((0..PATH_LEN as u16).collect());
    let tokens0 = [
        TokenPosition::path(0),
        TokenPosition::path(4),
        TokenPosition::path(8),
        TokenPosition::reserve(3),
    ];
    let (paths, tokens) = fixture(tokens0);

    let moves = legal_moves(&tokens0, &path, 2);
    assert_eq!(moves.len(), 3);

    let view = DecisionView::new(PlayerId::new(0), &paths, &tokens);
    let mut strategy = RandomStrategy::from_seed(9);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(strategy.choose(&view, 2, &moves));
    }
    assert_eq!(seen.len(), moves.len());
}
