//! Property tests for the number game session (pure logic, no terminal).

use numterm::core::rng::{self, FixedTargets};
use numterm::games::number::{Continue, GuessError, Outcome, Phase, Rules, Session};
use proptest::prelude::*;

fn guess_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (-50i32..200).prop_map(|n| n.to_string()),
        "[a-z ]{0,4}",
        Just(String::new()),
    ]
}

proptest! {
    /// Targets always land inside the inclusive range
    #[test]
    fn prop_target_in_range(seed in any::<u64>(), rounds in 1usize..20) {
        let mut session = Session::new(Rules::default(), rng::seeded(Some(seed)));
        for _ in 0..rounds {
            prop_assert!((1..=100).contains(&session.target()));
            session.start_round();
        }
    }

    /// A valid guess costs exactly one attempt
    #[test]
    fn prop_valid_guess_costs_one_attempt(target in 1u32..=100, guess in 1u32..=100) {
        let mut session = Session::new(Rules::default(), FixedTargets::new([target]));
        let before = session.attempts_remaining();
        let outcome = session.evaluate_guess(&guess.to_string()).unwrap();
        prop_assert_eq!(session.attempts_remaining(), before - 1);
        let expected = match guess.cmp(&target) {
            std::cmp::Ordering::Equal => Outcome::Correct,
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Greater => Outcome::TooHigh,
        };
        prop_assert_eq!(outcome, expected);
    }

    /// Rejected input leaves attempts and score alone
    #[test]
    fn prop_rejections_are_free(target in 1u32..=100, raw in guess_text()) {
        let mut session = Session::new(Rules::default(), FixedTargets::new([target]));
        let (attempts, score) = (session.attempts_remaining(), session.score());
        match session.evaluate_guess(&raw) {
            Err(GuessError::InvalidFormat { .. }) | Err(GuessError::OutOfRange { .. }) => {
                prop_assert_eq!(session.attempts_remaining(), attempts);
                prop_assert_eq!(session.score(), score);
            }
            Err(GuessError::RoundOver) => prop_assert!(false, "fresh round reported over"),
            Ok(_) => prop_assert_eq!(session.attempts_remaining(), attempts - 1),
        }
    }

    /// Score never goes down, attempts never underflow
    #[test]
    fn prop_score_monotonic(
        targets in prop::collection::vec(1u32..=100, 1..5),
        guesses in prop::collection::vec(guess_text(), 0..60),
        again in prop::collection::vec(any::<bool>(), 0..10),
    ) {
        let mut session = Session::new(Rules::default(), FixedTargets::new(targets));
        let mut answers = again.into_iter();
        let mut last_score = 0;
        for raw in guesses {
            if session.phase() == Phase::RoundOver {
                let choice = if answers.next().unwrap_or(true) {
                    Continue::Yes
                } else {
                    Continue::No
                };
                session.resolve(choice);
            }
            let _ = session.evaluate_guess(&raw);
            prop_assert!(session.score() >= last_score);
            prop_assert!(session.attempts_remaining() <= 5);
            last_score = session.score();
        }
        prop_assert_eq!(session.end_session().final_score, last_score);
    }
}
