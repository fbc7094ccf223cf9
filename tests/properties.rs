mod common;

use portfolio_sat::{
    config::Config,
    context::Context,
    db::{assignment::Reason, watches::Watch, ClauseKey},
    procedures::{analysis, decide},
    reports::Report,
    structures::{literal::Literal, value::Value},
    types::err::BCPError,
};

use common::*;

/// The internal literal of an external literal, for contexts where external `v` is internal `v - 1`.
fn internal(external: i32) -> Literal {
    Literal::new(external.unsigned_abs() - 1, external > 0)
}

mod watches {
    use super::*;

    #[test]
    fn every_clause_watched_by_its_first_two_literals() {
        init_logging();
        for seed in 0..3 {
            let clauses = planted_three_sat(100, 420, seed);
            let mut config = Config::default();
            config.arena.reduce_interval.set(20);
            let mut the_context = context_with(config, &clauses);
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

            let references: Vec<_> = the_context.arena.references().collect();
            for cref in references {
                let clause = the_context.arena.clause(cref).unwrap();
                if clause.flags().garbage {
                    continue;
                }
                for literal in &clause.literals()[..2] {
                    assert!(the_context.watches.of(*literal).iter().any(
                        |watch| matches!(watch, Watch::Large { clause, .. } if *clause == cref)
                    ));
                }
            }
        }
    }

    /// Panics if some clause in the arena is watched by two false literals.
    fn assert_watched_well(the_context: &Context) {
        for cref in the_context.arena.references() {
            let clause = the_context.arena.clause(cref).unwrap();
            if clause.flags().garbage {
                continue;
            }
            let literals = clause.literals();
            assert!(
                the_context.assignment.value(literals[0]) != Value::False
                    || the_context.assignment.value(literals[1]) != Value::False,
                "{cref} watched by two false literals at level {}",
                the_context.level()
            );
        }
    }

    #[test]
    fn watches_hold_during_search() {
        init_logging();
        for seed in 0..8 {
            let clauses = planted_three_sat(90, 380, seed);
            let mut the_context = context_with(Config::default(), &clauses);
            let mut steps = 0;
            let mut conflicts = 0;

            loop {
                steps += 1;
                assert!(steps < 50_000, "no model after {steps} steps");

                match the_context.propagate() {
                    Ok(()) => {}

                    Err(BCPError::Conflict(key)) => {
                        conflicts += 1;
                        match the_context.analyze(key) {
                            Ok(analysis::Ok::Asserting { jump, glue }) => {
                                assert!(the_context.learn(jump, glue).is_ok());
                                let asserted = the_context.buffers.learned[0];
                                assert_eq!(the_context.assignment.value(asserted), Value::True);
                            }
                            other => panic!("unexpected analysis {other:?}"),
                        }
                        if conflicts % 7 == 0 {
                            the_context.switch_mode();
                        }
                        continue;
                    }

                    Err(e) => panic!("propagation failed with {e:?}"),
                }

                assert_watched_well(&the_context);

                if steps % 50 == 0 {
                    assert!(the_context.reduce().is_ok());
                    assert_watched_well(&the_context);
                }

                match the_context.decide() {
                    decide::Ok::Made(_) => {}
                    decide::Ok::Exhausted => break,
                }
            }

            assert_eq!(the_context.unassigned(), 0);
            let variables = clauses.iter().flatten().map(|l| l.abs()).max().unwrap_or(0);
            let model: Vec<i32> = (1..=variables)
                .map(|v| match the_context.assignment.value(internal(v)) {
                    Value::True => v,
                    _ => -v,
                })
                .collect();
            assert!(satisfies(&model, &clauses));
        }
    }

    #[test]
    fn binary_clauses_watched_both_ways() {
        let clauses = planted_three_sat(60, 250, 9);
        let mut the_context = context_with(Config::default(), &clauses);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        for binary in the_context.watches.binaries() {
            assert!(the_context.watches.of(binary.b).iter().any(
                |watch| matches!(watch, Watch::Binary { other, .. } if *other == binary.a)
            ));
        }
    }
}

mod analysis_properties {
    use super::*;

    #[test]
    fn decision_is_the_uip() {
        let clauses = [vec![-1, 2], vec![-1, 3], vec![-2, -3, 4], vec![-2, -3, -4]];
        let mut the_context = context_with(Config::default(), &clauses);

        the_context.assign_decision(internal(1));
        let conflict = match the_context.propagate() {
            Err(BCPError::Conflict(key)) => key,
            other => panic!("expected a conflict, found {other:?}"),
        };
        assert!(matches!(conflict, ClauseKey::Large(_)));

        assert_eq!(
            the_context.analyze(conflict),
            Ok(analysis::Ok::Asserting { jump: 0, glue: 1 })
        );
        assert_eq!(the_context.buffers.learned, vec![internal(-1)]);

        assert!(the_context.learn(0, 1).is_ok());
        assert_eq!(the_context.level(), 0);
        assert_eq!(the_context.assignment.value(internal(-1)), Value::True);
        assert_eq!(the_context.assignment.reason(internal(-1)), Reason::Unit);
    }

    #[test]
    fn implied_uip() {
        let clauses = [vec![-1, 6], vec![-6, -5, 2], vec![-6, 3], vec![-2, -3, -5]];
        let mut the_context = context_with(Config::default(), &clauses);

        the_context.assign_decision(internal(5));
        assert!(the_context.propagate().is_ok());
        the_context.assign_decision(internal(1));
        let conflict = match the_context.propagate() {
            Err(BCPError::Conflict(key)) => key,
            other => panic!("expected a conflict, found {other:?}"),
        };

        assert_eq!(
            the_context.analyze(conflict),
            Ok(analysis::Ok::Asserting { jump: 1, glue: 2 })
        );
        assert_eq!(the_context.buffers.learned, vec![internal(-6), internal(-5)]);

        // Exactly one literal of the learnt clause is on the conflict level.
        let on_conflict_level = the_context
            .buffers
            .learned
            .iter()
            .filter(|literal| the_context.assignment.level(**literal) == 2)
            .count();
        assert_eq!(on_conflict_level, 1);

        assert!(the_context.learn(1, 2).is_ok());
        assert_eq!(the_context.level(), 1);
        assert_eq!(the_context.assignment.value(internal(-6)), Value::True);
        assert_eq!(
            the_context.assignment.reason(internal(-6)),
            Reason::Binary(internal(-5))
        );
        assert_eq!(the_context.counters.learned_binaries, 1);
    }
}

mod backtracking {
    use super::*;

    #[test]
    fn round_trip() {
        let clauses = [vec![-1, 2], vec![-2, 3, 4], vec![-3, 5]];
        let mut the_context = context_with(Config::default(), &clauses);
        let unassigned = the_context.unassigned();

        the_context.assign_decision(internal(1));
        assert!(the_context.propagate().is_ok());
        the_context.assign_decision(internal(3));
        assert!(the_context.propagate().is_ok());

        assert_eq!(the_context.level(), 2);
        assert_eq!(the_context.assignment.value(internal(2)), Value::True);
        assert_eq!(the_context.assignment.value(internal(5)), Value::True);
        assert_eq!(the_context.trail.level_start(2), 2);

        the_context.backtrack(1);
        assert_eq!(the_context.level(), 1);
        assert_eq!(the_context.trail.literals(), &[internal(1), internal(2)]);
        assert!(!the_context.assignment.value(internal(3)).is_assigned());
        assert!(!the_context.assignment.value(internal(5)).is_assigned());

        the_context.backtrack(0);
        assert!(the_context.trail.is_empty());
        assert_eq!(the_context.unassigned(), unassigned);
        for variable in 1..=5 {
            assert!(!the_context.assignment.value(internal(variable)).is_assigned());
        }

        // Saved phases are used for the next decisions.
        match the_context.decide() {
            decide::Ok::Made(literal) => {
                let saved = the_context.phases.saved_of(literal.variable());
                assert_eq!(literal.polarity(), saved.unwrap_or(the_context.config.phase.initial.value));
            }
            decide::Ok::Exhausted => panic!("no decision"),
        }
    }

    #[test]
    fn decisions_exhaust() {
        let mut the_context = context_with(Config::default(), &[vec![1, 2]]);
        let mut decisions = 0;
        loop {
            match the_context.decide() {
                decide::Ok::Made(_) => {
                    decisions += 1;
                    assert!(the_context.propagate().is_ok());
                }
                decide::Ok::Exhausted => break,
            }
        }
        assert!(decisions <= 2);
        assert_eq!(the_context.unassigned(), 0);
    }
}

mod hyper_binaries {
    use super::*;
    use portfolio_sat::procedures::collect::CollectMode;

    #[test]
    fn derived_on_level_one() {
        let clauses = [vec![-1, 2], vec![-1, 3], vec![-2, -3, 4]];
        let mut config = Config::default();
        config.arena.hyper_binaries.set(true);
        let mut the_context = context_with(config, &clauses);

        the_context.assign_decision(internal(1));
        assert!(the_context.propagate().is_ok());

        assert_eq!(the_context.assignment.value(internal(4)), Value::True);
        assert_eq!(
            the_context.assignment.reason(internal(4)),
            Reason::Binary(internal(-1))
        );
        assert_eq!(the_context.counters.hyper_binaries, 1);
        assert!(the_context.watches.of(internal(-1)).iter().any(
            |watch| matches!(watch, Watch::Binary { other, hyper: true, .. } if *other == internal(4))
        ));

        // Once no longer a reason, the binary goes with the next collection.
        the_context.backtrack(0);
        assert!(the_context.collect(0, CollectMode::Sparse).is_ok());
        assert!(!the_context
            .watches
            .of(internal(-1))
            .iter()
            .any(|watch| matches!(watch, Watch::Binary { hyper: true, .. })));
        assert_eq!(the_context.watches.of(internal(-1)).len(), 2);
    }

    #[test]
    fn off_by_default() {
        let clauses = [vec![-1, 2], vec![-1, 3], vec![-2, -3, 4]];
        let mut the_context = context_with(Config::default(), &clauses);

        the_context.assign_decision(internal(1));
        assert!(the_context.propagate().is_ok());

        assert!(matches!(
            the_context.assignment.reason(internal(4)),
            Reason::Large(_)
        ));
        assert_eq!(the_context.counters.hyper_binaries, 0);
    }
}
