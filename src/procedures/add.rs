/*!
Addition of clauses to a context.

# Overview

Clauses are given with external literals, either [literal by literal](GenericContext::add_literal) with zero terminating a clause, or [as a whole](GenericContext::add_clause).
Literals are validated before any change to the context, and each variable is imported on first reference.

On addition a clause is:
- Sorted, with duplicate literals removed.
- Skipped if tautological, or satisfied at level zero.
- Stripped of literals false at level zero.

Then, an empty clause makes the context inconsistent, a unit is assigned and propagated at level zero, a binary clause is stored as a pair of binary watches, and any longer clause is stored in the arena.

Clauses may only be added before a solve.
*/

use crate::{
    context::{ContextState, GenericContext},
    db::{assignment::Reason, import::MAX_EXTERNAL_VARIABLE},
    misc::log::targets::{self},
    structures::{
        literal::{ExternalLiteral, Literal},
        value::Value,
    },
    types::err::{self, BCPError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a literal to the clause being built, or adds the clause if the literal is zero.
    pub fn add_literal(&mut self, literal: ExternalLiteral) -> Result<(), ErrorKind> {
        self.check_input()?;
        match literal {
            0 => {
                let clause = std::mem::take(&mut self.clause_buffer);
                let result = self.add_external_clause(&clause);
                self.clause_buffer = clause;
                self.clause_buffer.clear();
                result
            }
            _ => {
                Self::check_literal(literal)?;
                self.clause_buffer.push(literal);
                Ok(())
            }
        }
    }

    /// Adds a clause, given as external literals without a terminating zero.
    pub fn add_clause(
        &mut self,
        clause: impl IntoIterator<Item = ExternalLiteral>,
    ) -> Result<(), ErrorKind> {
        self.check_input()?;
        if !self.clause_buffer.is_empty() {
            return Err(err::ApiError::UnterminatedClause.into());
        }
        let clause: Vec<ExternalLiteral> = clause.into_iter().collect();
        for literal in &clause {
            if *literal == 0 {
                return Err(err::ApiError::ZeroLiteral.into());
            }
            Self::check_literal(*literal)?;
        }
        self.add_external_clause(&clause)
    }

    fn check_input(&mut self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {
                self.state = ContextState::Input;
                Ok(())
            }
            _ => Err(err::ApiError::AddAfterSolve.into()),
        }
    }

    fn check_literal(literal: ExternalLiteral) -> Result<(), ErrorKind> {
        match literal.unsigned_abs() > MAX_EXTERNAL_VARIABLE as u32 {
            true => Err(err::ApiError::VariableLimit(literal as i64).into()),
            false => Ok(()),
        }
    }

    fn add_external_clause(&mut self, external: &[ExternalLiteral]) -> Result<(), ErrorKind> {
        let mut literals: Vec<Literal> = Vec::with_capacity(external.len());
        for literal in external {
            literals.push(self.imports.import(*literal)?);
        }
        self.ensure_variables();

        if self.inconsistent {
            return Ok(());
        }

        literals.sort_unstable();
        literals.dedup();
        if literals.windows(2).any(|w| w[0].variable() == w[1].variable()) {
            log::trace!(target: targets::PREPROCESSING, "Tautology {external:?}");
            return Ok(());
        }
        if literals
            .iter()
            .any(|l| self.assignment.value(*l) == Value::True)
        {
            return Ok(());
        }
        literals.retain(|l| self.assignment.value(*l) != Value::False);

        match literals.len() {
            0 => self.set_inconsistent(),

            1 => {
                self.assign(literals[0], Reason::Unit);
                match self.propagate() {
                    Ok(()) => {}
                    Err(BCPError::Conflict(_)) => self.set_inconsistent(),
                    Err(e) => return Err(e.into()),
                }
            }

            2 => self.watches.watch_binary(literals[0], literals[1], false, false),

            _ => {
                let cref = self.arena.allocate(&literals, false, 0)?;
                self.watches.watch_large(cref, literals[0], literals[1]);
            }
        }
        Ok(())
    }
}
