/*!
Orders on variables, from which decisions are made.

Two orders are kept, one for each search mode:

- A [queue](queue::Queue) of variables ordered by the most recent bump, used in the focused mode.
- A [heap](heap::ScoreHeap) of variables ordered by score, used in the stable mode.

Both implement [DecisionOrder], and only the order of the current mode is updated during search.
So, on a switch of mode the order of the new mode is [reconciled](DecisionOrder::reconcile) with the current assignment, after which every unassigned variable is represented in the new order.

```rust
# use portfolio_sat::decision::{Orders, DecisionOrder};
# use portfolio_sat::config::Config;
# use portfolio_sat::db::assignment::Assignment;
let config = Config::default();
let mut orders = Orders::new(&config);
let mut assignment = Assignment::default();

assignment.grow_to(3);
orders.grow_to(3);

assert!(!orders.is_stable());
assert_eq!(orders.active().next_unassigned(&assignment), Some(2));

orders.switch(true, 0..3);
assert_eq!(orders.active().next_unassigned(&assignment).map(|v| v < 3), Some(true));
```
*/

pub mod heap;
pub mod queue;

use crate::{config::Config, db::assignment::Assignment, structures::literal::Variable};

/// An order on variables from which to make decisions.
pub trait DecisionOrder {
    /// Extends the order to `variables` variables, with each fresh variable unassigned.
    fn grow_to(&mut self, variables: usize);

    /// Notes that `variable` has been unassigned, and so may be decided on.
    ///
    /// A variable which is already represented is not represented twice.
    fn reinsert(&mut self, variable: Variable);

    /// The next unassigned variable of the order, if any.
    fn next_unassigned(&mut self, assignment: &Assignment) -> Option<Variable>;

    /// Bumps `variables`, which were involved in the conflict numbered `conflicts`.
    fn bump(&mut self, variables: &mut [Variable], assignment: &Assignment, conflicts: u64);

    /// Ensures each variable in `unassigned` is represented, after a period during which the order was not maintained.
    fn reconcile(&mut self, unassigned: &mut dyn Iterator<Item = Variable>);

    /// Removes `variable` from the order, for good.
    fn deactivate(&mut self, variable: Variable);

    /// True if `variable` is represented by the order, and so would be found by [next_unassigned](DecisionOrder::next_unassigned) if unassigned.
    fn represents(&self, variable: Variable) -> bool;
}

/// The orders of both modes.
pub struct Orders {
    pub heap: heap::ScoreHeap,
    pub queue: queue::Queue,
    stable: bool,
}

impl Orders {
    pub fn new(config: &Config) -> Self {
        Orders {
            heap: heap::ScoreHeap::new(&config.stable),
            queue: queue::Queue::default(),
            stable: false,
        }
    }

    /// Extends both orders.
    pub fn grow_to(&mut self, variables: usize) {
        self.heap.grow_to(variables);
        self.queue.grow_to(variables);
    }

    /// The order of the current mode.
    pub fn active(&mut self) -> &mut dyn DecisionOrder {
        match self.stable {
            true => &mut self.heap,
            false => &mut self.queue,
        }
    }

    /// True if the current mode is stable.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Switches to the order of the stable mode, if `stable`, and the focused mode otherwise, reconciling the order switched to with the unassigned variables given.
    pub fn switch(&mut self, stable: bool, unassigned: impl IntoIterator<Item = Variable>) {
        self.stable = stable;
        let mut unassigned = unassigned.into_iter();
        self.active().reconcile(&mut unassigned);
    }

    /// Removes `variable` from both orders.
    pub fn deactivate(&mut self, variable: Variable) {
        self.heap.deactivate(variable);
        self.queue.deactivate(variable);
    }
}
