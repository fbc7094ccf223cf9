/*!
Boolean constraint propagation, over two watched literals.

# Overview

Each literal on the trail is propagated once, in order of assignment.
Propagation of a (true) literal `l` visits the watches on `-l`, as each of these belongs to a clause in which `-l` is now false.

- A binary watch `(-l o)`:
  + If `o` is false, the clause is a conflict.
  + If `o` is unassigned, `o` is assigned with the binary clause as reason.
- A large watch with a true blocking literal is skipped without reading the clause.
- Otherwise, the clause is read from the arena, and `-l` is moved to position one (if not already there):
  + If the literal at position zero is true, the clause is satisfied and the watch keeps that literal as its blocking literal.
  + If some literal at position two or later is not false, it is swapped into position one and watched in place of `-l`.
    The search for such a literal resumes from where the previous search ended, and wraps around.
  + Otherwise, if the literal at position zero is false the clause is a conflict, and if unassigned the literal is assigned with the clause as reason.

So, the literal at position zero of a reason clause is always the literal forced.

On a conflict the remaining watches are kept, the watch list is restored, and the conflict is returned as an error for [analysis](crate::procedures::analysis).

# Borrows

A watch list is [taken](crate::db::watches::Watches::take) for the duration of the visit, so the list can be rewritten in place while other lists, the arena, and the assignment are updated.
The list is [restored](crate::db::watches::Watches::restore) before returning, with any watches added to the list in the meantime.

# Hyper binary resolution

If [configured](crate::config::dbs::ArenaConfig::hyper_binaries), whenever a clause in the arena forces a literal `o` at level one the binary clause `(-d o)` is derived, where `d` is the decision of level one, and `o` is assigned with the binary clause as reason.
As every literal assigned at level one is implied by `d` (and level zero), the binary clause is implied by the formula.
These clauses are marked *hyper*, and are removed at the next collection unless the reason for some assignment.
*/

use crate::{
    context::GenericContext,
    db::{arena::ClauseRef, assignment::Reason, watches::Watch, ClauseKey},
    misc::log::targets::{self},
    structures::{literal::Literal, value::Value},
    types::err::BCPError,
};

/// The result of a visit to a clause in the arena.
enum Visit {
    /// The clause is satisfied by the literal given, which becomes the blocking literal.
    Satisfied(Literal),

    /// The watch moves to the first literal given, with the second literal as blocking literal.
    Moved(Literal, Literal),

    /// The literal given is forced.
    Forced(Literal),

    /// Every literal of the clause is false.
    Conflict,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates every literal on the trail not yet propagated.
    ///
    /// For documentation, see [procedures::propagate](crate::procedures::propagate).
    pub fn propagate(&mut self) -> Result<(), BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.counters.propagations += 1;
            self.propagate_literal(literal)?;
        }
        Ok(())
    }

    fn propagate_literal(&mut self, literal: Literal) -> Result<(), BCPError> {
        let false_literal = literal.negate();
        let mut list = self.watches.take(false_literal);

        let mut result = Ok(());
        let mut keep = 0;
        let mut index = 0;

        while index < list.len() {
            let watch = list[index];
            index += 1;

            match watch {
                Watch::Binary { other, .. } => {
                    list[keep] = watch;
                    keep += 1;
                    match self.assignment.value(other) {
                        Value::True => {}
                        Value::False => {
                            result = Err(BCPError::Conflict(ClauseKey::Binary(false_literal, other)));
                            break;
                        }
                        Value::Unassigned => self.assign(other, Reason::Binary(false_literal)),
                    }
                }

                Watch::Large { blocking, clause } => {
                    if self.assignment.value(blocking) == Value::True {
                        list[keep] = watch;
                        keep += 1;
                        continue;
                    }

                    let visit = match self.visit_large(false_literal, clause) {
                        Ok(visit) => visit,
                        Err(e) => {
                            list[keep] = watch;
                            keep += 1;
                            result = Err(e);
                            break;
                        }
                    };

                    match visit {
                        Visit::Satisfied(satisfying) => {
                            list[keep] = Watch::Large {
                                blocking: satisfying,
                                clause,
                            };
                            keep += 1;
                        }

                        Visit::Moved(replacement, other) => {
                            self.watches.of_mut(replacement).push(Watch::Large {
                                blocking: other,
                                clause,
                            });
                        }

                        Visit::Forced(forced) => {
                            list[keep] = watch;
                            keep += 1;
                            self.assign_forced(forced, clause);
                        }

                        Visit::Conflict => {
                            list[keep] = watch;
                            keep += 1;
                            result = Err(BCPError::Conflict(ClauseKey::Large(clause)));
                            break;
                        }
                    }
                }
            }
        }

        // Watches after a conflict are kept as they are.
        while index < list.len() {
            list[keep] = list[index];
            keep += 1;
            index += 1;
        }
        list.truncate(keep);
        self.watches.restore(false_literal, list);

        for (a, b) in self.hyper_pending.drain(..) {
            self.watches.watch_binary(a, b, true, true);
        }

        if let Err(BCPError::Conflict(key)) = &result {
            log::trace!(target: targets::PROPAGATION, "Conflict in {key} on {literal}");
        }
        result
    }

    /// Visits a clause in the arena watched by `false_literal`, which has just been made false.
    fn visit_large(&mut self, false_literal: Literal, clause: ClauseRef) -> Result<Visit, BCPError> {
        let assignment = &self.assignment;
        let mut view = match self.arena.clause_mut(clause) {
            Ok(view) => view,
            Err(e) => {
                log::error!(target: targets::PROPAGATION, "Watch on {clause} failed with {e:?}");
                return Err(BCPError::CorruptWatch);
            }
        };

        let searched = view.searched();
        let literals = view.literals_mut();
        if literals[0] == false_literal {
            literals.swap(0, 1);
        }
        if literals[1] != false_literal {
            log::error!(target: targets::PROPAGATION, "{false_literal} does not watch {clause}");
            return Err(BCPError::CorruptWatch);
        }

        let other = literals[0];
        let other_value = assignment.value(other);
        if other_value == Value::True {
            return Ok(Visit::Satisfied(other));
        }

        let size = literals.len();
        let start = match searched {
            s if (2..size).contains(&s) => s,
            _ => 2,
        };

        let replacement = (start..size)
            .chain(2..start)
            .find(|position| assignment.value(literals[*position]) != Value::False);

        match replacement {
            Some(position) => {
                let replacement = literals[position];
                literals[1] = replacement;
                literals[position] = false_literal;
                view.set_searched(position);
                Ok(Visit::Moved(replacement, other))
            }

            None => match other_value {
                Value::False => Ok(Visit::Conflict),
                _ => Ok(Visit::Forced(other)),
            },
        }
    }

    /// Assigns `literal`, forced by `clause`, possibly through a hyper binary clause.
    fn assign_forced(&mut self, literal: Literal, clause: ClauseRef) {
        if self.trail.level() == 1 && self.config.arena.hyper_binaries.value {
            let decision = self.trail.frame(1).decision;
            self.hyper_pending.push((decision.negate(), literal));
            self.counters.hyper_binaries += 1;
            self.assign(literal, Reason::Binary(decision.negate()));
        } else {
            self.assign(literal, Reason::Large(clause));
        }
    }
}
