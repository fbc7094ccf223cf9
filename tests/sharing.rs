mod common;

use std::{cell::RefCell, rc::Rc, sync::Arc};

use portfolio_sat::{
    config::Config,
    context::Context,
    reports::Report,
    sharing::{endpoint::Endpoint, portfolio::Portfolio, sharer::Sharer, SharedClause},
    types::err::{ErrorKind, SharingError},
};

use common::*;

mod export {
    use super::*;

    #[test]
    fn rejected_clauses_are_kept() {
        init_logging();
        let offered = Rc::new(RefCell::new(Vec::<(Vec<i32>, u32)>::default()));

        let mut the_context = context_with(Config::default(), &pigeonhole(5));
        let log = offered.clone();
        the_context.set_callback_export(Box::new(move |literals: &[i32], glue: u32| {
            log.borrow_mut().push((literals.to_vec(), glue));
            literals.len() < 2
        }));

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));

        let offered = offered.borrow();
        assert!(!offered.is_empty());
        assert_eq!(
            the_context.counters.exported + the_context.counters.export_rejected,
            offered.len() as u64
        );
        assert!(the_context.counters.export_rejected > 0);
        for (literals, glue) in offered.iter() {
            assert!(!literals.is_empty());
            assert!(literals.iter().all(|l| *l != 0 && l.abs() <= 20));
            assert!(*glue as usize <= literals.len());
        }
    }

    #[test]
    fn endpoint_glue_limit() {
        let endpoint = Arc::new(Endpoint::new(0, 1));
        let mut the_context = context_with(Config::default(), &pigeonhole(5));
        endpoint.connect(&mut the_context);

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));

        let (accepted, rejected) = endpoint.export_counts();
        assert_eq!(accepted as u64, the_context.counters.exported);
        assert_eq!(rejected as u64, the_context.counters.export_rejected);
        while let Some(clause) = endpoint.take_exported() {
            assert!(clause.literals.len() == 1 || clause.glue <= 1);
        }
    }
}

mod import {
    use super::*;

    #[test]
    fn false_unit_is_unsatisfiable() {
        let mut the_context = context_with(Config::default(), &[vec![1], vec![1, 2, 3]]);
        let mut units = vec![-1];
        the_context.set_callback_import_unit(Box::new(move || units.pop()));
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn false_clause_is_unsatisfiable() {
        let mut the_context = context_with(Config::default(), &[vec![1], vec![2], vec![1, 2, 3]]);
        let mut clauses = vec![SharedClause {
            literals: vec![-1, -2],
            glue: 1,
            from: 1,
        }];
        the_context.set_callback_import_clause(Box::new(move || clauses.pop()));
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn unknown_variables_are_skipped() {
        let mut the_context = context_with(Config::default(), &[vec![1, 2], vec![-1, 3]]);
        let mut units = vec![7, -2];
        the_context.set_callback_import_unit(Box::new(move || units.pop()));
        let mut clauses = vec![
            SharedClause {
                literals: vec![1, 9, -3],
                glue: 2,
                from: 1,
            },
            SharedClause {
                literals: vec![-1, -2, -3],
                glue: 2,
                from: 1,
            },
        ];
        the_context.set_callback_import_clause(Box::new(move || clauses.pop()));

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.counters.imported_units, 1);
        assert_eq!(the_context.counters.import_skipped, 3);
        assert_eq!(the_context.value(2), Ok(Some(false)));
        assert_eq!(the_context.value(1), Ok(Some(true)));
        assert_eq!(the_context.value(3), Ok(Some(true)));
    }

    #[test]
    fn imported_clauses_constrain_the_model() {
        let mut the_context = context_with(Config::default(), &[vec![1, 2, 3], vec![-1, -2]]);
        let mut clauses = vec![
            SharedClause {
                literals: vec![-3],
                glue: 0,
                from: 2,
            },
            SharedClause {
                literals: vec![-1, 3],
                glue: 1,
                from: 2,
            },
        ];
        the_context.set_callback_import_clause(Box::new(move || clauses.pop()));

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value(1), Ok(Some(false)));
        assert_eq!(the_context.value(2), Ok(Some(true)));
        assert_eq!(the_context.value(3), Ok(Some(false)));
    }
}

mod exchange {
    use super::*;

    #[test]
    fn clauses_move_between_engines() {
        let endpoints: Vec<Arc<Endpoint>> = (0..2).map(|id| Arc::new(Endpoint::new(id, 8))).collect();

        let mut first = context_with(Config::default(), &pigeonhole(5));
        endpoints[0].connect(&mut first);
        assert_eq!(first.solve(), Ok(Report::Unsatisfiable));
        assert!(first.counters.exported > 0);

        let mut sharer = Sharer::new(endpoints.clone(), 40, usize::MAX);
        assert!(sharer.round() > 0);
        assert!(endpoints[0].next_clause().is_none());

        let mut second = Context::from_config(Config::default());
        for clause in pigeonhole(5) {
            assert!(second.add_clause(clause).is_ok());
        }
        endpoints[1].connect(&mut second);
        assert_eq!(second.solve(), Ok(Report::Unsatisfiable));
        assert!(second.counters.imported_units + second.counters.imported_clauses > 0);
    }
}

mod portfolio {
    use super::*;

    #[test]
    fn no_engines() {
        let portfolio = Portfolio::new(Vec::default());
        assert!(matches!(
            portfolio.solve(&[vec![1]]),
            Err(ErrorKind::Sharing(SharingError::NoEngines))
        ));
    }

    #[test]
    fn diverse_configurations() {
        let portfolio = Portfolio::diverse(Config::default(), 6);
        assert_eq!(portfolio.configs.len(), 6);
        let mut seeds: Vec<u64> = portfolio.configs.iter().map(|c| c.random_seed.value).collect();
        seeds.dedup();
        assert_eq!(seeds.len(), 6);
        assert_ne!(
            portfolio.configs[0].mode.mode.value,
            portfolio.configs[1].mode.mode.value
        );
    }

    #[test]
    fn unsatisfiable() {
        init_logging();
        let outcome = Portfolio::diverse(Config::default(), 4)
            .solve(&pigeonhole(7))
            .unwrap();
        assert_eq!(outcome.report, Report::Unsatisfiable);
        assert!(outcome.engine.is_some());
        assert!(outcome.model.is_none());
    }

    #[test]
    fn satisfiable() {
        let clauses = planted_three_sat(150, 600, 21);
        let outcome = Portfolio::diverse(Config::default(), 3).solve(&clauses).unwrap();
        assert_eq!(outcome.report, Report::Satisfiable);
        let model = outcome.model.unwrap();
        assert_eq!(model.len(), 150);
        assert!(satisfies(&model, &clauses));
    }

    #[test]
    fn empty_clause() {
        let outcome = Portfolio::diverse(Config::default(), 2)
            .solve(&[vec![1, 2], vec![]])
            .unwrap();
        assert_eq!(outcome.report, Report::Unsatisfiable);
    }
}
