/*!
Variables ordered by the most recent bump, for the focused mode.

The queue is a doubly linked list of variables in which each variable has a *stamp*, and stamps increase along the list.
A bump moves a variable to the end of the list with a fresh stamp, and so the end of the list holds the most recently bumped variables.
This is the variable move-to-front scheme of [Ryan](https://www.cs.sfu.ca/~mitchell/papers/ryan-thesis.ps), with the front of the scheme the end of the list.

Decisions are made by walking the list backwards from a *search* variable until an unassigned variable is found.
Every variable after the search variable is assigned, and so the search variable only moves forward when a variable with a later stamp is unassigned (or bumped while unassigned).

Variables involved in a conflict are bumped in the order of their stamps, which preserves the relative order of the bumped variables.
*/

use crate::{
    db::assignment::Assignment,
    structures::{
        literal::{Literal, Variable},
        value::Value,
    },
};

use super::DecisionOrder;

#[derive(Clone, Copy, Debug, Default)]
struct Link {
    prev: Option<Variable>,
    next: Option<Variable>,
    stamp: u64,
    enqueued: bool,
}

#[derive(Default)]
pub struct Queue {
    links: Vec<Link>,
    first: Option<Variable>,
    last: Option<Variable>,
    stamp: u64,
    search: Option<Variable>,
}

impl Queue {
    fn enqueue(&mut self, variable: Variable) {
        self.stamp += 1;
        let link = &mut self.links[variable as usize];
        link.prev = self.last;
        link.next = None;
        link.stamp = self.stamp;
        link.enqueued = true;
        match self.last {
            Some(last) => self.links[last as usize].next = Some(variable),
            None => self.first = Some(variable),
        }
        self.last = Some(variable);
    }

    fn dequeue(&mut self, variable: Variable) {
        let Link { prev, next, .. } = self.links[variable as usize];
        match prev {
            Some(prev) => self.links[prev as usize].next = next,
            None => self.first = next,
        }
        match next {
            Some(next) => self.links[next as usize].prev = prev,
            None => self.last = prev,
        }
        if self.search == Some(variable) {
            self.search = prev.or(next);
        }
        let link = &mut self.links[variable as usize];
        link.prev = None;
        link.next = None;
        link.enqueued = false;
    }

    /// The stamp of `variable`.
    pub fn stamp(&self, variable: Variable) -> u64 {
        self.links[variable as usize].stamp
    }

    /// Moves the search to `variable`, if later than the current search.
    fn update_search(&mut self, variable: Variable) {
        let later = match self.search {
            Some(search) => self.stamp(variable) > self.stamp(search),
            None => true,
        };
        if later {
            self.search = Some(variable);
        }
    }

    /// The variables of the queue, from first to last.
    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        std::iter::successors(self.first, |variable| self.links[*variable as usize].next)
    }
}

impl DecisionOrder for Queue {
    fn grow_to(&mut self, variables: usize) {
        let previous = self.links.len();
        if previous >= variables {
            return;
        }
        self.links.resize(variables, Link::default());
        for variable in previous..variables {
            self.enqueue(variable as Variable);
        }
        self.search = self.last;
    }

    fn reinsert(&mut self, variable: Variable) {
        if self.links[variable as usize].enqueued {
            self.update_search(variable);
        }
    }

    fn next_unassigned(&mut self, assignment: &Assignment) -> Option<Variable> {
        let mut candidate = self.search;
        while let Some(variable) = candidate {
            if assignment.value(Literal::new(variable, true)) == Value::Unassigned {
                self.search = Some(variable);
                return Some(variable);
            }
            candidate = self.links[variable as usize].prev;
        }
        None
    }

    fn bump(&mut self, variables: &mut [Variable], assignment: &Assignment, _conflicts: u64) {
        variables.sort_unstable_by_key(|variable| self.stamp(*variable));
        for variable in variables.iter() {
            if !self.links[*variable as usize].enqueued || self.last == Some(*variable) {
                continue;
            }
            self.dequeue(*variable);
            self.enqueue(*variable);
            if assignment.value(Literal::new(*variable, true)) == Value::Unassigned {
                self.update_search(*variable);
            }
        }
    }

    fn reconcile(&mut self, unassigned: &mut dyn Iterator<Item = Variable>) {
        // Every active variable remains in the queue, and so only the search is stale.
        self.search = self.last;
        for variable in unassigned {
            debug_assert!(self.links[variable as usize].enqueued);
        }
    }

    fn deactivate(&mut self, variable: Variable) {
        if self.links[variable as usize].enqueued {
            self.dequeue(variable);
        }
    }

    fn represents(&self, variable: Variable) -> bool {
        let link = &self.links[variable as usize];
        link.enqueued
            && match self.search {
                Some(search) => link.stamp <= self.stamp(search),
                None => false,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::assignment::Reason;

    fn setup(variables: usize) -> (Queue, Assignment) {
        let mut queue = Queue::default();
        let mut assignment = Assignment::default();
        queue.grow_to(variables);
        assignment.grow_to(variables);
        (queue, assignment)
    }

    #[test]
    fn bump_moves_to_end() {
        let (mut queue, assignment) = setup(4);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        queue.bump(&mut [1, 0], &assignment, 1);
        // Bumped in stamp order, so 0 before 1.
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 3, 0, 1]);
        assert_eq!(queue.next_unassigned(&assignment), Some(1));
    }

    #[test]
    fn search_skips_assigned_and_returns() {
        let (mut queue, mut assignment) = setup(3);
        assignment.set(Literal::new(2, true), 1, Reason::Decision);
        assignment.set(Literal::new(1, true), 1, Reason::Decision);

        assert_eq!(queue.next_unassigned(&assignment), Some(0));
        assert!(!queue.represents(2));

        assignment.unset(Literal::new(2, true));
        queue.reinsert(2);
        assert!(queue.represents(2));
        assert_eq!(queue.next_unassigned(&assignment), Some(2));
    }

    #[test]
    fn deactivated_are_never_found() {
        let (mut queue, assignment) = setup(3);
        queue.deactivate(2);
        queue.deactivate(0);
        assert_eq!(queue.next_unassigned(&assignment), Some(1));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1]);
    }
}
