//! Change-log summarizer integration tests.
//!
//! These tests build histories through the session engine and check the
//! merged, newest-first log the UI renders and reverts from.

use commander_life::core::{Player, PlayerId};
use commander_life::session::LifeSession;
use commander_life::summary::{Change, FinalValue};

const A: PlayerId = PlayerId(1);
const B: PlayerId = PlayerId(2);
const C: PlayerId = PlayerId(3);

fn table() -> LifeSession {
    LifeSession::initialize(
        vec![
            Player::new(1, "Ana"),
            Player::new(2, "Bruno"),
            Player::new(3, "Caio"),
        ],
        40,
    )
    .unwrap()
}

/// Three consecutive -1 life steps collapse into one group.
#[test]
fn test_consecutive_life_steps_merge() {
    let mut session = table();
    for _ in 0..3 {
        session.adjust_life(A, -1).unwrap();
    }

    let groups = session.summary();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].change, Change::Life { player: A });
    assert_eq!(groups[0].total_delta, -3);
    assert_eq!(groups[0].count, 3);
    assert_eq!(groups[0].final_value, FinalValue::Amount(37));
    assert_eq!((groups[0].start_index, groups[0].end_index), (0, 3));
}

/// Another player's step splits a run.
#[test]
fn test_interleaved_players_do_not_merge() {
    let mut session = table();
    session.adjust_life(A, -1).unwrap();
    session.adjust_life(B, -1).unwrap();
    session.adjust_life(A, -1).unwrap();

    let groups = session.summary();
    let players: Vec<_> = groups.iter().map(|g| g.change.player()).collect();
    assert_eq!(players, vec![Some(A), Some(B), Some(A)]);
    assert!(groups.iter().all(|g| g.count == 1));
}

/// Commander damage is reported once, not as a separate life loss.
#[test]
fn test_commander_damage_runs() {
    let mut session = table();
    for _ in 0..4 {
        session.adjust_commander_damage(B, C, 1).unwrap();
    }
    session.adjust_commander_damage(B, A, 2).unwrap();

    let groups = session.summary();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].change, Change::CommanderDamage { defender: B, attacker: A });
    assert_eq!(groups[1].change, Change::CommanderDamage { defender: B, attacker: C });
    assert_eq!(groups[1].total_delta, 4);
    assert_eq!(groups[1].final_value, FinalValue::Amount(4));
    assert_eq!(
        groups[1].describe(session.roster()),
        "Bruno commander damage from Caio +4 (4)"
    );
}

/// Elimination flips stay discrete even when consecutive for one player.
#[test]
fn test_elimination_flips_never_merge() {
    let mut session = table();
    session.adjust_life(A, -40).unwrap();
    session.toggle_immunity(A).unwrap(); // revive
    session.toggle_immunity(A).unwrap(); // eliminated again

    let groups = session.summary();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].change, Change::Elimination { player: A });
    assert_eq!(groups[0].final_value, FinalValue::Eliminated(true));
    assert_eq!(groups[1].change, Change::Elimination { player: A });
    assert_eq!(groups[1].final_value, FinalValue::Eliminated(false));
    assert_eq!(groups[1].describe(session.roster()), "Ana revived");

    // The lethal step itself is attributed to life
    assert_eq!(groups[2].change, Change::Life { player: A });
    assert_eq!(groups[2].final_value, FinalValue::Amount(0));
}

/// Reverting to a group's start undoes the whole run.
#[test]
fn test_revert_group_undoes_run() {
    let mut session = table();
    session.adjust_poison(C, 3).unwrap();
    for _ in 0..5 {
        session.adjust_life(B, 2).unwrap();
    }

    let groups = session.summary();
    assert_eq!(groups[0].count, 5);
    assert_eq!(session.revert_group(&groups[0]), Ok(true));

    assert_eq!(session.latest().get(B).unwrap().life(), 40);
    assert_eq!(session.latest().get(C).unwrap().poison(), 3);
    assert_eq!(session.summary().len(), 1);
}

/// Summarizing twice yields identical output and leaves history alone.
#[test]
fn test_summary_is_pure() {
    let mut session = table();
    session.adjust_life(A, -2).unwrap();
    session.adjust_poison(B, 1).unwrap();
    session.toggle_immunity(C).unwrap();

    let before = session.history().clone();
    let first = session.summary();
    let second = session.summary();

    assert_eq!(first, second);
    assert_eq!(session.history(), &before);
    assert_eq!(first[0].change, Change::Immunity { player: C });
    assert_eq!(first[0].describe(session.roster()), "Caio immune");
}

/// Clamped no-op steps are logged as unchanged and merge together.
#[test]
fn test_unchanged_steps() {
    let mut session = table();
    session.adjust_poison(A, -1).unwrap();
    session.adjust_poison(B, -1).unwrap();

    let groups = session.summary();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].change, Change::Unchanged);
    assert_eq!(groups[0].count, 2);
}
