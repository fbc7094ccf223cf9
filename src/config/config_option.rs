use crate::context::ContextState;

/// A configurable value, bounded by a minimum and maximum.
///
/// `max_state` is the latest state of a context in which the option may be changed.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub max_state: ContextState,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if within bounds.
    /// Returns true if the value was set, false otherwise.
    pub fn set(&mut self, value: T) -> bool {
        if self.min <= value && value <= self.max {
            self.value = value;
            true
        } else {
            false
        }
    }
}
