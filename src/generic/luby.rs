/*!
An iterator to generate the luby sequence, and a reluctant doubling schedule built on it.

See <https://oeis.org/A182105> for details on the luby sequence.

The iterator uses the reluctant doubling formulation of the sequence from Knuth, as a pair `(u, v)` where `v` is the current element.
If `u & -u == v` the next pair is `(u + 1, 1)`, and otherwise the next pair is `(u, 2v)`.

The [Reluctant] schedule scales each element of the sequence by a fixed period, and signals once as many conflicts as the scaled element have been seen.
The sequence restarts from the first element if the scaled element would exceed a given maximum.
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u64;

/// Foundation of the iterator.
#[derive(Clone, Debug)]
pub struct Luby {
    u: LubyRepresentation,
    v: LubyRepresentation,
}

impl Default for Luby {
    fn default() -> Self {
        Luby { u: 1, v: 1 }
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.v;
        if self.u & self.u.wrapping_neg() == self.v {
            self.u = self.u.checked_add(1)?;
            self.v = 1;
        } else {
            self.v = self.v.checked_add(self.v)?;
        }
        Some(current)
    }
}

impl Luby {
    /// The current element of the sequence, which will be returned by the next call to [next](Luby::next).
    pub fn current(&self) -> LubyRepresentation {
        self.v
    }
}

/// A luby sequence scaled by some period, with a cap.
#[derive(Clone, Debug)]
pub struct Reluctant {
    luby: Luby,
    period: u64,
    max: u64,
    limit: u64,
    wait: u64,
    triggered: bool,
}

impl Reluctant {
    /// A schedule which signals after `period` conflicts, then `period`, `2 * period`, `period`, … (the luby sequence scaled by `period`).
    pub fn new(period: u64, max: u64) -> Self {
        let mut luby = Luby::default();
        let first = luby.next().unwrap_or(1);
        let period = period.max(1);
        Reluctant {
            luby,
            period,
            max: max.max(period),
            limit: first * period,
            wait: 0,
            triggered: false,
        }
    }

    /// Note a conflict, and update the signal if the limit has been reached.
    pub fn tick(&mut self) {
        if self.triggered {
            return;
        }
        self.wait += 1;
        if self.wait < self.limit {
            return;
        }
        self.wait = 0;
        self.triggered = true;

        let mut next = self.luby.next().unwrap_or(1).saturating_mul(self.period);
        if next > self.max {
            self.luby = Luby::default();
            next = self.luby.next().unwrap_or(1) * self.period;
        }
        self.limit = next;
    }

    /// True if the schedule has signalled, without resetting the signal.
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// True if the schedule has signalled since the last call, and resets the signal.
    pub fn take_trigger(&mut self) -> bool {
        std::mem::take(&mut self.triggered)
    }

    /// The count of conflicts the schedule currently waits for.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1,
        2, 4, 8, 16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
    ];

    #[test]
    fn luby() {
        let luby = Luby::default();
        for (known, generated) in LUBY_SLICE.iter().zip(luby) {
            assert_eq!(*known, generated)
        }
    }

    #[test]
    fn reluctant_signals() {
        let mut reluctant = Reluctant::new(2, 1024);
        let mut signals = Vec::default();
        for conflict in 1..=16 {
            reluctant.tick();
            if reluctant.take_trigger() {
                signals.push(conflict);
            }
        }
        // Waits of 2, 2, 4, 2, 2, 4, … conflicts.
        assert_eq!(signals, vec![2, 4, 8, 10, 12, 16]);
    }

    #[test]
    fn reluctant_cap() {
        let mut reluctant = Reluctant::new(1, 2);
        let mut limits = Vec::default();
        for _ in 0..8 {
            limits.push(reluctant.limit());
            for _ in 0..reluctant.limit() {
                reluctant.tick();
            }
            assert!(reluctant.take_trigger());
        }
        assert!(limits.iter().all(|limit| *limit <= 2));
    }
}
