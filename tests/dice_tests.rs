//! Dice roller integration tests.

use commander_life::dice::{DiceRng, DiceRoller, Die, MAX_DICE};
use commander_life::LifeError;

/// Same seed, same rolls, for every die shape.
#[test]
fn test_seeded_rollers_agree() {
    let mut a = DiceRoller::seeded(2024);
    let mut b = DiceRoller::seeded(2024);

    for die in Die::ALL {
        assert_eq!(a.roll(3, die).unwrap(), b.roll(3, die).unwrap());
    }
}

/// Results stay within the die's faces and the total adds up.
#[test]
fn test_results_within_faces() {
    let mut roller = DiceRoller::seeded(7);

    for die in Die::ALL {
        for count in 1..=MAX_DICE {
            let roll = roller.roll(count, die).unwrap();
            assert_eq!(roll.die, die);
            assert_eq!(roll.results.len(), count);
            assert!(roll.results.iter().all(|&r| r >= 1 && r <= die.sides()));
            assert_eq!(roll.total, roll.results.iter().sum::<u32>());
        }
    }
}

/// A d20 eventually shows every face.
#[test]
fn test_d20_covers_all_faces() {
    let mut roller = DiceRoller::seeded(99);
    let mut seen = [false; 20];

    for _ in 0..200 {
        let roll = roller.roll(MAX_DICE, Die::D20).unwrap();
        for r in roll.results {
            seen[(r - 1) as usize] = true;
        }
    }

    assert!(seen.iter().all(|&s| s));
}

/// A roller resumed from a captured state continues the same stream.
#[test]
fn test_resume_from_state() {
    let mut roller = DiceRoller::seeded(5);
    roller.roll(4, Die::D8).unwrap();

    let state = roller.rng().state();
    let expected = roller.roll(6, Die::D12).unwrap();

    let mut resumed = DiceRoller::new(DiceRng::from_state(&state));
    assert_eq!(resumed.roll(6, Die::D12).unwrap(), expected);
}

/// Invalid counts are rejected.
#[test]
fn test_invalid_counts() {
    let mut roller = DiceRoller::default();
    assert_eq!(
        roller.roll(MAX_DICE + 1, Die::D6),
        Err(LifeError::InvalidDiceCount { count: MAX_DICE + 1 })
    );
}
