#![allow(dead_code)]

use portfolio_sat::{config::Config, context::Context, reports::Report};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A context of `config` with each of `clauses` added.
pub fn context_with(config: Config, clauses: &[Vec<i32>]) -> Context {
    let mut the_context = Context::from_config(config);
    for clause in clauses {
        assert!(the_context.add_clause(clause.iter().copied()).is_ok());
    }
    the_context
}

pub fn solve_report(config: Config, clauses: &[Vec<i32>]) -> Report {
    let mut the_context = context_with(config, clauses);
    match the_context.solve() {
        Ok(report) => report,
        Err(e) => panic!("solve failed: {e}"),
    }
}

/// Places `pigeons` pigeons in `pigeons - 1` holes, with at most one pigeon per hole.
pub fn pigeonhole(pigeons: i32) -> Vec<Vec<i32>> {
    let holes = pigeons - 1;
    let var = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;

    let mut clauses = Vec::default();
    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| var(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                clauses.push(vec![-var(a, hole), -var(b, hole)]);
            }
        }
    }
    clauses
}

/// Random clauses of three literals over `variables` variables, each satisfied by a hidden assignment.
pub fn planted_three_sat(variables: i32, clauses: usize, seed: u64) -> Vec<Vec<i32>> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move |bound: i32| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % bound as u64) as i32
    };

    let hidden: Vec<bool> = (0..variables).map(|_| next(2) == 1).collect();

    let mut formula = Vec::default();
    while formula.len() < clauses {
        let mut clause: Vec<i32> = (0..3)
            .map(|_| {
                let v = next(variables) + 1;
                match next(2) {
                    0 => v,
                    _ => -v,
                }
            })
            .collect();
        if !clause.iter().any(|l| hidden[(l.abs() - 1) as usize] == (*l > 0)) {
            clause[0] = -clause[0];
        }
        formula.push(clause);
    }
    formula
}

/// True if `model` (a literal for each variable from one) satisfies every clause.
pub fn satisfies(model: &[i32], clauses: &[Vec<i32>]) -> bool {
    clauses
        .iter()
        .all(|clause| clause.iter().any(|l| model[(l.abs() - 1) as usize] == *l))
}

/// The model of a satisfiable context, as a literal for each variable from one.
pub fn model_of(the_context: &Context, variables: i32) -> Vec<i32> {
    (1..=variables)
        .map(|v| match the_context.value(v) {
            Ok(Some(false)) => -v,
            Ok(_) => v,
            Err(e) => panic!("no value for {v}: {e}"),
        })
        .collect()
}
