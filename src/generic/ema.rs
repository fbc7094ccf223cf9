//! Exponential moving averages, with bias correction.
//!
//! An average with smoothing factor `α` is updated on each new value `y` by `biased ← biased + α(y − biased)`.
//! As the biased average starts at zero, early averages are too small, and so the (reported) value is corrected by dividing by `1 − βⁿ` where `β = 1 − α` and `n` is the count of updates.
//! Once `βⁿ` is negligible the correction is dropped.
//!
//! The averages are used to compare short and long term glue of learnt clauses when scheduling restarts.

/// An exponential moving average.
#[derive(Clone, Debug)]
pub struct Ema {
    value: f64,
    biased: f64,
    alpha: f64,
    beta: f64,
    exp: f64,
}

impl Ema {
    /// An average over (roughly) the most recent `window` values.
    pub fn new(window: f64) -> Self {
        let alpha = 1.0 / window.max(1.0);
        Ema {
            value: 0.0,
            biased: 0.0,
            alpha,
            beta: 1.0 - alpha,
            exp: 1.0,
        }
    }

    /// Updates the average with `y`.
    pub fn update(&mut self, y: f64) {
        self.biased += self.alpha * (y - self.biased);
        if self.exp > 0.0 {
            self.exp *= self.beta;
            if self.exp < 1e-12 {
                self.exp = 0.0;
                self.value = self.biased;
            } else {
                self.value = self.biased / (1.0 - self.exp);
            }
        } else {
            self.value = self.biased;
        }
    }

    /// The current (corrected) average.
    pub fn value(&self) -> f64 {
        self.value
    }
}
