mod common;

use portfolio_sat::{
    config::{mode::SearchMode, stable::StableHeuristic, Config},
    context::{Context, ContextState},
    reports::Report,
    types::err::{ApiError, ErrorKind},
};

use common::*;

mod basic {
    use super::*;

    #[test]
    fn empty_formula() {
        init_logging();
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn one_literal() {
        let mut the_context = context_with(Config::default(), &[vec![1]]);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value(1), Ok(Some(true)));
    }

    #[test]
    fn units() {
        let mut the_context = context_with(Config::default(), &[vec![1], vec![2]]);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value(1), Ok(Some(true)));
        assert_eq!(the_context.value(2), Ok(Some(true)));
    }

    #[test]
    fn binary_chain_unsat() {
        let clauses = [vec![1, 2], vec![-1, 2], vec![-2]];
        assert_eq!(solve_report(Config::default(), &clauses), Report::Unsatisfiable);
    }

    #[test]
    fn implication_chain_unsat() {
        let clauses = [vec![1, 2], vec![-1, 3], vec![-2, 3], vec![-3]];
        assert_eq!(solve_report(Config::default(), &clauses), Report::Unsatisfiable);
    }

    #[test]
    fn conflict() {
        let clauses = [vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]];
        assert_eq!(solve_report(Config::default(), &clauses), Report::Unsatisfiable);
    }

    #[test]
    fn empty_clause() {
        let mut the_context = context_with(Config::default(), &[vec![1, 2]]);
        assert!(the_context.add_clause(Vec::<i32>::new()).is_ok());
        assert!(the_context.is_inconsistent());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn tautology_ignored() {
        let mut the_context = context_with(Config::default(), &[vec![1, -1, 2], vec![-2]]);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value(2), Ok(Some(false)));
    }

    #[test]
    fn literal_by_literal() {
        let mut the_context = Context::from_config(Config::default());
        for literal in [1, 2, 3, 0, -1, 0, -2, 0] {
            assert!(the_context.add_literal(literal).is_ok());
        }
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value(3), Ok(Some(true)));
    }
}

mod api {
    use super::*;

    #[test]
    fn second_solve() {
        let mut the_context = context_with(Config::default(), &[vec![1, 2]]);
        assert!(the_context.solve().is_ok());
        assert_eq!(
            the_context.solve(),
            Err(ErrorKind::Api(ApiError::IncrementalSolve))
        );
    }

    #[test]
    fn add_after_solve() {
        let mut the_context = context_with(Config::default(), &[vec![1, 2]]);
        assert!(the_context.solve().is_ok());
        assert_eq!(
            the_context.add_clause(vec![3]),
            Err(ErrorKind::Api(ApiError::AddAfterSolve))
        );
    }

    #[test]
    fn zero_inside_clause() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_clause(vec![1, 0, 2]),
            Err(ErrorKind::Api(ApiError::ZeroLiteral))
        );
        assert_eq!(the_context.state, ContextState::Input);
    }

    #[test]
    fn unterminated_clause() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_literal(1).is_ok());
        assert_eq!(
            the_context.solve(),
            Err(ErrorKind::Api(ApiError::UnterminatedClause))
        );
    }

    #[test]
    fn variable_limit() {
        let mut the_context = Context::from_config(Config::default());
        assert!(matches!(
            the_context.add_clause(vec![1, i32::MAX]),
            Err(ErrorKind::Api(ApiError::VariableLimit(_)))
        ));
    }

    #[test]
    fn value_without_model() {
        let mut the_context = context_with(Config::default(), &[vec![1], vec![-1]]);
        assert_eq!(the_context.value(1), Err(ErrorKind::Api(ApiError::NoModel)));
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.value(1), Err(ErrorKind::Api(ApiError::NoModel)));
    }

    #[test]
    fn conflict_limit() {
        let mut the_context = context_with(Config::default(), &pigeonhole(7));
        the_context.set_conflict_limit(10);
        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert!(the_context.counters.conflicts >= 10);
    }

    #[test]
    fn decision_limit() {
        let mut the_context = context_with(Config::default(), &pigeonhole(8));
        the_context.set_decision_limit(20);
        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(the_context.counters.decisions, 20);
    }

    #[test]
    fn terminated_before_solve() {
        let mut the_context = context_with(Config::default(), &pigeonhole(6));
        the_context.terminate();
        assert_eq!(the_context.solve(), Ok(Report::Unknown));
    }

    #[test]
    fn terminate_callback() {
        let mut the_context = context_with(Config::default(), &pigeonhole(7));
        let mut polls = 0;
        the_context.set_callback_terminate(Box::new(move || {
            polls += 1;
            polls > 20
        }));
        assert_eq!(the_context.solve(), Ok(Report::Unknown));
    }
}

mod formulas {
    use super::*;

    fn configs() -> Vec<Config> {
        let mut configs = Vec::default();
        for mode in [SearchMode::Focused, SearchMode::Stable, SearchMode::Switching] {
            for heuristic in [StableHeuristic::VSIDS, StableHeuristic::CHB] {
                let mut config = Config::default();
                config.mode.mode.set(mode);
                config.stable.heuristic.set(heuristic);
                configs.push(config);
            }
        }
        configs
    }

    #[test]
    fn pigeonholes() {
        init_logging();
        for config in configs() {
            for pigeons in 3..=6 {
                assert_eq!(
                    solve_report(config.clone(), &pigeonhole(pigeons)),
                    Report::Unsatisfiable
                );
            }
        }
    }

    #[test]
    fn planted() {
        for config in configs() {
            for seed in 0..4 {
                let clauses = planted_three_sat(60, 240, seed);
                let mut the_context = context_with(config.clone(), &clauses);
                assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
                let model = model_of(&the_context, 60);
                assert!(satisfies(&model, &clauses));
            }
        }
    }

    #[test]
    fn frequent_reduction() {
        let mut config = Config::default();
        config.arena.reduce_interval.set(5);
        config.phase.rephase_interval.set(10);
        config.mode.mode_init.set(20);

        assert_eq!(
            solve_report(config.clone(), &pigeonhole(7)),
            Report::Unsatisfiable
        );

        let clauses = planted_three_sat(120, 500, 7);
        let mut the_context = context_with(config, &clauses);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&model_of(&the_context, 120), &clauses));
    }

    #[test]
    fn chronological_backtracking() {
        let mut config = Config::default();
        config.chrono_levels.set(0);

        let clauses = planted_three_sat(80, 330, 3);
        let mut the_context = context_with(config.clone(), &clauses);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&model_of(&the_context, 80), &clauses));

        assert_eq!(solve_report(config, &pigeonhole(6)), Report::Unsatisfiable);
    }

    #[test]
    fn preprocessing() {
        let mut config = Config::default();
        config.preprocessing.set(true);

        let clauses = vec![vec![1, 2, 3], vec![1, -2], vec![4, -3, 2], vec![-4, 2, 1]];
        let mut the_context = context_with(config.clone(), &clauses);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&model_of(&the_context, 4), &clauses));

        let clauses = planted_three_sat(50, 150, 11);
        let mut the_context = context_with(config.clone(), &clauses);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&model_of(&the_context, 50), &clauses));

        assert_eq!(solve_report(config, &pigeonhole(5)), Report::Unsatisfiable);
    }
}
