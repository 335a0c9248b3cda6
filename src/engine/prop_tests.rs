use super::*;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Recalled,
    NotRecalled,
    Advance,
    Undo,
    Shuffle,
    StartTest,
    ResetDeck,
    ReviewFailed,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Recalled),
        3 => Just(Op::NotRecalled),
        2 => Just(Op::Advance),
        2 => Just(Op::Undo),
        1 => Just(Op::Shuffle),
        1 => Just(Op::StartTest),
        1 => Just(Op::ResetDeck),
        2 => Just(Op::ReviewFailed),
    ]
}

fn setup(n: usize, seed: u64) -> SessionEngine<StdRng> {
    let cards = (0..n)
        .map(|i| Card::new(format!("q{}", i), format!("a{}", i)))
        .collect();
    SessionEngine::with_rng(cards, StdRng::seed_from_u64(seed)).unwrap()
}

fn apply(engine: &mut SessionEngine<StdRng>, op: Op) -> Result<SessionStatus> {
    match op {
        Op::Recalled => engine.mark_recalled(),
        Op::NotRecalled => engine.mark_not_recalled(),
        Op::Advance => engine.advance(),
        Op::Undo => engine.undo(),
        Op::Shuffle => Ok(engine.shuffle_deck()),
        Op::StartTest => Ok(engine.start_test()),
        Op::ResetDeck => Ok(engine.reset_deck()),
        Op::ReviewFailed => engine.review_failed(),
    }
}

fn assert_deck_invariants(engine: &SessionEngine<StdRng>) -> std::result::Result<(), TestCaseError> {
    let deck = engine.active_deck();
    let unique: BTreeSet<usize> = deck.iter().copied().collect();
    prop_assert_eq!(unique.len(), deck.len(), "duplicate ids in {:?}", deck);
    for id in deck {
        prop_assert!(*id < engine.cards().len());
        prop_assert!(!engine.memorized().contains(id), "retired id {} still active", id);
    }
    if !deck.is_empty() {
        prop_assert!(engine.cursor() < deck.len());
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_load_is_identity_order(n in 1usize..40, seed in any::<u64>()) {
        let engine = setup(n, seed);
        prop_assert_eq!(engine.active_deck().to_vec(), (0..n).collect::<Vec<_>>());
        prop_assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn prop_invariants_hold_under_any_sequence(
        n in 1usize..12,
        seed in any::<u64>(),
        ops in prop::collection::vec(arb_op(), 0..60),
    ) {
        let mut engine = setup(n, seed);
        for op in ops {
            let _ = apply(&mut engine, op);
            assert_deck_invariants(&engine)?;
        }
    }

    #[test]
    fn prop_undo_reverts_any_single_step(
        n in 1usize..12,
        seed in any::<u64>(),
        prefix in prop::collection::vec(arb_op(), 0..20),
        op in prop_oneof![Just(Op::Recalled), Just(Op::NotRecalled), Just(Op::Advance)],
    ) {
        let mut engine = setup(n, seed);
        for step in prefix {
            let _ = apply(&mut engine, step);
        }
        let deck = engine.active_deck().to_vec();
        let cursor = engine.cursor();
        let memorized = engine.memorized().clone();

        if apply(&mut engine, op).is_ok() {
            prop_assert!(engine.undo().is_ok());
            prop_assert_eq!(engine.active_deck().to_vec(), deck);
            prop_assert_eq!(engine.cursor(), cursor);
            prop_assert_eq!(engine.memorized().clone(), memorized);
        }
    }

    #[test]
    fn prop_recalled_shrinks_deck_by_one(n in 1usize..20, seed in any::<u64>(), skips in 0usize..20) {
        let mut engine = setup(n, seed);
        for _ in 0..skips {
            engine.advance().unwrap();
        }
        let before = engine.active_deck().len();
        let id = engine.current_id().unwrap();
        engine.mark_recalled().unwrap();
        prop_assert_eq!(engine.active_deck().len(), before - 1);
        prop_assert!(engine.memorized().contains(&id));
        prop_assert_eq!(engine.memorized().len(), 1);
    }

    #[test]
    fn prop_study_miss_keeps_length_and_returns_soon(
        n in 2usize..30,
        seed in any::<u64>(),
        skips in 0usize..30,
    ) {
        let mut engine = setup(n, seed);
        for _ in 0..skips {
            engine.advance().unwrap();
        }
        let id = engine.current_id().unwrap();
        engine.mark_not_recalled().unwrap();
        prop_assert_eq!(engine.active_deck().len(), n);

        let mut seen_within = None;
        for step in 0..=MAX_REINSERT_OFFSET {
            if engine.current_id() == Some(id) {
                seen_within = Some(step);
                break;
            }
            engine.advance().unwrap();
        }
        prop_assert!(seen_within.is_some(), "card {} did not come back in time", id);
        prop_assert!(seen_within != Some(0) || n == 1);
    }

    #[test]
    fn prop_shuffle_is_a_permutation(
        n in 1usize..30,
        seed in any::<u64>(),
        retire in 0usize..10,
    ) {
        let mut engine = setup(n, seed);
        for _ in 0..retire.min(n - 1) {
            engine.mark_recalled().unwrap();
        }
        engine.advance().unwrap();
        let mut before = engine.active_deck().to_vec();
        engine.shuffle_deck();
        let mut after = engine.active_deck().to_vec();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
        prop_assert!(!engine.can_undo());
        prop_assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn prop_test_score_matches_failures(answers in prop::collection::vec(any::<bool>(), 1..30), seed in any::<u64>()) {
        let mut engine = setup(answers.len(), seed);
        engine.start_test();
        for recalled in &answers {
            if *recalled {
                engine.mark_recalled().unwrap();
            } else {
                engine.mark_not_recalled().unwrap();
            }
        }
        prop_assert!(engine.is_test_complete());
        let failures = answers.iter().filter(|recalled| !**recalled).count();
        let score = engine.score().unwrap();
        prop_assert_eq!(score.correct, answers.len() - failures);
        prop_assert_eq!(engine.test_failed().len(), failures);
    }
}

#[test]
fn test_shuffle_is_uniform_over_three_cards() {
    let mut engine = setup(3, 11);
    let mut counts = std::collections::HashMap::new();
    let trials = 6000;
    for _ in 0..trials {
        engine.shuffle_deck();
        *counts.entry(engine.active_deck().to_vec()).or_insert(0usize) += 1;
    }
    assert_eq!(counts.len(), 6);
    for (order, count) in counts {
        // expected 1000 per ordering
        assert!((800..=1200).contains(&count), "{:?} came up {} times", order, count);
    }
}
