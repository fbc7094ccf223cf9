mod common;

use portfolio_sat::{
    config::Config,
    context::Context,
    db::assignment::Reason,
    decision::DecisionOrder,
    procedures::{
        decide,
        rephase::{Rephase, REPHASE_CYCLE},
    },
    structures::{literal::Literal, value::Value},
};

use common::*;

/// The internal literal of an external literal, for contexts where external `v` is internal `v - 1`.
fn internal(external: i32) -> Literal {
    Literal::new(external.unsigned_abs() - 1, external > 0)
}

/// Clauses over six variables on which no decision leads to a conflict.
fn easy() -> Vec<Vec<i32>> {
    vec![vec![1, 2], vec![3, 4], vec![5, 6]]
}

fn decide_and_propagate(the_context: &mut Context) {
    assert!(matches!(the_context.decide(), decide::Ok::Made(_)));
    assert!(the_context.propagate().is_ok());
}

mod modes {
    use super::*;

    fn assert_represented(the_context: &mut Context) {
        for variable in 0..the_context.assignment.variables() as u32 {
            if the_context.assignment.value(Literal::new(variable, true)) == Value::Unassigned {
                assert!(
                    the_context.orders.active().represents(variable),
                    "{variable} missing after a switch to stable: {}",
                    the_context.orders.is_stable()
                );
            }
        }
    }

    #[test]
    fn switches_keep_every_unassigned_variable() {
        let clauses = planted_three_sat(60, 240, 4);
        let mut the_context = context_with(Config::default(), &clauses);
        assert!(!the_context.orders.is_stable());

        for _ in 0..4 {
            for _ in 0..6 {
                match the_context.decide() {
                    decide::Ok::Made(_) => {}
                    decide::Ok::Exhausted => break,
                }
                if the_context.propagate().is_err() {
                    break;
                }
            }
            assert!(the_context.level() > 0);

            let was_stable = the_context.orders.is_stable();
            the_context.switch_mode();
            assert_eq!(the_context.orders.is_stable(), !was_stable);
            assert_eq!(the_context.level(), 0);
            assert_represented(&mut the_context);
        }
        assert_eq!(the_context.counters.mode_switches, 4);
    }

    #[test]
    fn decisions_cover_every_variable_after_a_switch() {
        let mut the_context = context_with(Config::default(), &easy());
        decide_and_propagate(&mut the_context);
        decide_and_propagate(&mut the_context);

        the_context.switch_mode();
        assert!(the_context.orders.is_stable());
        while let decide::Ok::Made(_) = the_context.decide() {
            assert!(the_context.propagate().is_ok());
        }
        assert_eq!(the_context.unassigned(), 0);
    }
}

mod restarts {
    use super::*;

    #[test]
    fn focused_on_rising_glue() {
        let mut the_context = context_with(Config::default(), &easy());
        assert!(!the_context.orders.is_stable());
        decide_and_propagate(&mut the_context);
        assert!(!the_context.restarting());

        for _ in 0..200 {
            the_context.averages.fast_glue.update(2.0);
            the_context.averages.slow_glue.update(2.0);
        }
        assert!(!the_context.restarting());

        for _ in 0..200 {
            the_context.averages.fast_glue.update(6.0);
        }
        assert!(the_context.restarting());

        // Not before the interval since the last restart has passed.
        the_context.limits.restart = the_context.counters.conflicts + 1;
        assert!(!the_context.restarting());
        the_context.limits.restart = the_context.counters.conflicts;

        the_context.restart();
        assert_eq!(the_context.level(), 0);
        assert_eq!(the_context.counters.restarts, 1);
        assert_eq!(
            the_context.limits.restart,
            the_context.counters.conflicts + the_context.config.restart.interval.value
        );
        assert!(!the_context.restarting());
    }

    #[test]
    fn stable_reluctant_doubling() {
        let mut config = Config::default();
        assert!(config.restart.reluctant_period.set(4));
        let mut the_context = context_with(config, &easy());
        the_context.enter_mode(true);
        assert!(the_context.orders.is_stable());

        // Waits of 4, 4, then 8 conflicts.
        for wait in [4, 4, 8] {
            decide_and_propagate(&mut the_context);
            for _ in 1..wait {
                the_context.reluctant.tick();
                assert!(!the_context.restarting());
            }
            the_context.reluctant.tick();
            assert!(the_context.restarting());

            the_context.restart();
            assert_eq!(the_context.level(), 0);
            assert!(!the_context.restarting());
        }
        assert_eq!(the_context.counters.restarts, 3);
    }

    #[test]
    fn disabled() {
        let mut config = Config::default();
        assert!(config.restart.restart.set(false));
        let mut the_context = context_with(config, &easy());
        decide_and_propagate(&mut the_context);

        for _ in 0..200 {
            the_context.averages.fast_glue.update(9.0);
            the_context.averages.slow_glue.update(1.0);
        }
        assert!(!the_context.restarting());
    }
}

mod rephasing {
    use super::*;

    #[test]
    fn cycle() {
        let mut the_context = context_with(Config::default(), &easy());
        let initial = Value::from_bool(the_context.config.phase.initial.value);
        let best = [
            Value::True,
            Value::False,
            Value::Unassigned,
            Value::True,
            Value::False,
            Value::Unassigned,
        ];
        the_context.phases.best.copy_from_slice(&best);
        let interval = the_context.config.phase.rephase_interval.value;

        let mut kinds = Vec::default();
        for count in 1..=6u64 {
            let before = the_context.phases.saved.clone();
            let kind = the_context.rephase();
            kinds.push(kind);

            let saved = &the_context.phases.saved;
            match kind {
                Rephase::Best => {
                    for variable in 0..best.len() {
                        match best[variable] {
                            Value::Unassigned => assert_eq!(saved[variable], before[variable]),
                            value => assert_eq!(saved[variable], value),
                        }
                    }
                }
                Rephase::Original => assert!(saved.iter().all(|phase| *phase == initial)),
                Rephase::Inverted => assert!(saved.iter().all(|phase| *phase == -initial)),
                Rephase::Random => assert!(saved.iter().all(|phase| phase.is_assigned())),
            }

            assert_eq!(the_context.counters.rephases, count);
            assert_eq!(
                the_context.limits.rephase,
                the_context.counters.conflicts + interval * count
            );
        }

        assert_eq!(kinds, REPHASE_CYCLE.to_vec());
        assert_eq!(the_context.rephase(), Rephase::Best);
    }
}

mod subsumption {
    use super::*;

    #[test]
    fn recent_clause_subsumed() {
        let mut the_context = context_with(Config::default(), &[vec![1, 2, 3], vec![-4, 5]]);
        let cref = the_context.arena.references().next().unwrap();
        the_context.clueue.push(cref);

        the_context.subsume_recent(&[internal(1), internal(4)]);
        assert!(!the_context.arena.clause(cref).unwrap().flags().garbage);
        assert_eq!(the_context.counters.subsumed, 0);

        the_context.subsume_recent(&[internal(1), internal(2)]);
        assert!(the_context.arena.clause(cref).unwrap().flags().garbage);
        assert_eq!(the_context.counters.subsumed, 1);
        assert_eq!(the_context.clueue.iter().count(), 0);
    }

    #[test]
    fn reasons_are_skipped() {
        let mut the_context = context_with(Config::default(), &[vec![1, 2, 3], vec![-4, 5]]);
        let cref = the_context.arena.references().next().unwrap();
        the_context.clueue.push(cref);

        the_context.assign_decision(internal(-2));
        assert!(the_context.propagate().is_ok());
        the_context.assign_decision(internal(-3));
        assert!(the_context.propagate().is_ok());
        assert_eq!(the_context.assignment.reason(internal(1)), Reason::Large(cref));

        the_context.subsume_recent(&[internal(1), internal(2)]);
        assert!(!the_context.arena.clause(cref).unwrap().flags().garbage);
        assert_eq!(the_context.counters.subsumed, 0);
        assert_eq!(the_context.clueue.iter().count(), 1);

        // Once no longer a reason, the clause is subsumed.
        the_context.backtrack(0);
        the_context.subsume_recent(&[internal(1), internal(2)]);
        assert!(the_context.arena.clause(cref).unwrap().flags().garbage);
        assert_eq!(the_context.counters.subsumed, 1);
    }
}
