//! Property tests over random command sequences.
//!
//! Every sequence is run against a four-player pod; the properties must
//! hold after each individual command, not just at the end.

use commander_life::core::{Delta, Player, PlayerId, Snapshot, COMMANDER_DAMAGE_LIMIT, POISON_LIMIT};
use commander_life::session::LifeSession;
use commander_life::summary::{summarize, Change};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Command {
    Apply(Delta),
    ToggleImmunity(PlayerId),
    RevertLast,
}

fn arb_player() -> impl Strategy<Value = PlayerId> {
    (1u32..=4).prop_map(PlayerId)
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (arb_player(), -10i64..=10).prop_map(|(player, amount)| Command::Apply(Delta::Life { player, amount })),
        2 => (arb_player(), -3i64..=3).prop_map(|(player, amount)| Command::Apply(Delta::Poison { player, amount })),
        3 => (arb_player(), arb_player(), -8i64..=8)
            .prop_filter("attacker must differ", |(d, a, _)| d != a)
            .prop_map(|(defender, attacker, amount)| Command::Apply(Delta::CommanderDamage { defender, attacker, amount })),
        1 => arb_player().prop_map(Command::ToggleImmunity),
        1 => Just(Command::RevertLast),
    ]
}

fn pod() -> LifeSession {
    LifeSession::initialize(
        (1..=4).map(|i| Player::new(i, format!("P{i}"))).collect(),
        40,
    )
    .unwrap()
}

fn run(session: &mut LifeSession, command: &Command) {
    match command {
        Command::Apply(delta) => {
            session.apply_delta(*delta).unwrap();
        }
        Command::ToggleImmunity(player) => session.toggle_immunity(*player).unwrap(),
        Command::RevertLast => {
            session.revert_last_action();
        }
    }
}

fn expected_elimination(snapshot: &Snapshot, player: PlayerId) -> bool {
    let state = snapshot.get(player).unwrap();
    let lost = state.life() <= 0
        || state.poison() >= POISON_LIMIT
        || state
            .commander_damage()
            .iter()
            .any(|&(_, dmg)| dmg >= COMMANDER_DAMAGE_LIMIT);
    lost && !state.is_immune()
}

proptest! {
    /// `is_eliminated` always matches the pure function of the counters.
    #[test]
    fn elimination_never_lags(commands in proptest::collection::vec(arb_command(), 1..60)) {
        let mut session = pod();
        for command in &commands {
            run(&mut session, command);
            let latest = session.latest();
            for id in session.roster().ids() {
                prop_assert_eq!(latest.get(id).unwrap().is_eliminated(), expected_elimination(latest, id));
                prop_assert!(latest.get(id).unwrap().poison() >= 0);
            }
        }
    }

    /// Commander damage moves damage and life by the same clamped amount.
    #[test]
    fn commander_damage_mirrors_life(
        setup in proptest::collection::vec(arb_command(), 0..20),
        amount in -30i64..=30,
    ) {
        let mut session = pod();
        for command in &setup {
            run(&mut session, command);
        }
        let (defender, attacker) = (PlayerId(1), PlayerId(2));
        let before = session.latest().get(defender).unwrap().clone();

        let applied = session.adjust_commander_damage(defender, attacker, amount).unwrap();
        let after = session.latest().get(defender).unwrap();

        let old = before.commander_damage_from(attacker).unwrap();
        let new = after.commander_damage_from(attacker).unwrap();
        prop_assert_eq!(new, (old + amount).max(0));
        prop_assert_eq!(after.life() - before.life(), -(new - old));
        prop_assert_eq!(applied.life_delta, after.life() - before.life());
    }

    /// Reverting reproduces the target snapshot and sets the length.
    #[test]
    fn revert_reproduces_history(
        commands in proptest::collection::vec(arb_command(), 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut session = pod();
        for command in &commands {
            run(&mut session, command);
        }
        let index = pick.index(session.history().len());
        let target = session.snapshot_at(index).unwrap().clone();

        session.revert_to_index(index).unwrap();
        prop_assert_eq!(session.latest(), &target);
        prop_assert_eq!(session.history().len(), index + 1);

        // Second revert to the same index is a no-op
        prop_assert_eq!(session.revert_to_index(index), Ok(false));
        prop_assert_eq!(session.history().len(), index + 1);
    }

    /// Groups tile the history: counts sum to the step count, indices chain.
    #[test]
    fn summary_tiles_history(commands in proptest::collection::vec(arb_command(), 0..60)) {
        let mut session = pod();
        for command in &commands {
            run(&mut session, command);
        }
        let groups = summarize(session.history(), session.roster());

        let steps: usize = groups.iter().map(|g| g.count).sum();
        prop_assert_eq!(steps, session.history().len() - 1);

        let mut expected_end = session.history().len() - 1;
        for (i, group) in groups.iter().enumerate() {
            prop_assert_eq!(group.end_index, expected_end);
            prop_assert_eq!(group.end_index - group.start_index, group.count);
            if !group.change.is_mergeable() {
                prop_assert_eq!(group.count, 1);
            }
            if let Some(next) = groups.get(i + 1) {
                if group.change.is_mergeable() {
                    prop_assert_ne!(next.change, group.change);
                }
            }
            expected_end = group.start_index;
        }
        prop_assert_eq!(expected_end, 0);
    }

    /// Winner is the single survivor, or none.
    #[test]
    fn winner_is_sole_survivor(commands in proptest::collection::vec(arb_command(), 0..80)) {
        let mut session = pod();
        for command in &commands {
            run(&mut session, command);
        }
        let survivors: Vec<_> = session.latest().survivors(session.roster()).collect();
        match session.current_winner() {
            Some(winner) => prop_assert_eq!(survivors, vec![winner]),
            None => prop_assert_ne!(survivors.len(), 1),
        }
    }
}

/// Life steps are never attributed to commander damage or vice versa.
#[test]
fn test_attribution_matches_commands() {
    let mut session = pod();
    session.adjust_life(PlayerId(3), -5).unwrap();
    session.adjust_commander_damage(PlayerId(3), PlayerId(4), 5).unwrap();

    let groups = session.summary();
    assert_eq!(
        groups[0].change,
        Change::CommanderDamage { defender: PlayerId(3), attacker: PlayerId(4) }
    );
    assert_eq!(groups[1].change, Change::Life { player: PlayerId(3) });
}
