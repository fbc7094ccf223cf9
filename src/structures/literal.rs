//! Literals, as unsigned integers.
//!
//! ```rust
//! # use portfolio_sat::structures::literal::Literal;
//! let p = Literal::new(79, true);
//!
//! assert!(p.polarity());
//! assert_eq!(p.variable(), 79);
//! assert_eq!(p.code(), 158);
//!
//! assert_eq!(-p, Literal::new(79, false));
//! assert_eq!(-(-p), p);
//! assert_eq!((-p).code(), 159);
//! ```

/// A variable, as an index.
pub type Variable = u32;

/// A literal as given to or returned from a context, with sign indicating polarity.
pub type ExternalLiteral = i32;

/// A literal, encoded as `2 * variable + polarity_bit`.
///
/// The representation is transparent over [u32], and clause literals are stored as raw words in the [arena](crate::db::arena).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Literal(u32);

impl Literal {
    /// A literal which is never the literal of any variable.
    ///
    /// Used to pad the arena when a clause shrinks in place.
    pub const INVALID: Literal = Literal(u32::MAX);

    /// The literal on `variable` with `polarity`.
    pub fn new(variable: Variable, polarity: bool) -> Self {
        Literal((variable << 1) | (!polarity as u32))
    }

    /// The literal with the given code.
    pub fn from_code(code: u32) -> Self {
        Literal(code)
    }

    /// The code of the literal.
    pub fn code(self) -> u32 {
        self.0
    }

    /// The literal as an index to per-literal structures.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The variable of the literal.
    pub fn variable(self) -> Variable {
        self.0 >> 1
    }

    /// True if the literal is positive, false otherwise.
    pub fn polarity(self) -> bool {
        self.0 & 1 == 0
    }

    /// The negation of the literal.
    pub fn negate(self) -> Self {
        Literal(self.0 ^ 1)
    }
}

impl std::ops::Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Literal::INVALID {
            return write!(f, "⊥");
        }
        match self.polarity() {
            true => write!(f, "{}", self.variable()),
            false => write!(f, "-{}", self.variable()),
        }
    }
}

impl std::fmt::Debug for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// Writes a sequence of literals as a space separated string, in the order given.
pub fn literals_string<'l>(literals: impl IntoIterator<Item = &'l Literal>) -> String {
    let mut the_string = String::default();
    for literal in literals {
        if !the_string.is_empty() {
            the_string.push(' ');
        }
        the_string.push_str(&literal.to_string());
    }
    the_string
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding() {
        for variable in [0, 1, 2, 1 << 20] {
            let p = Literal::new(variable, true);
            let not_p = Literal::new(variable, false);

            assert_eq!(p.code(), 2 * variable);
            assert_eq!(not_p.code(), 2 * variable + 1);
            assert_eq!(p.variable(), not_p.variable());
            assert_eq!(-p, not_p);
            assert!(p.polarity());
            assert!(!not_p.polarity());
        }
    }

    #[test]
    fn display() {
        let literals = [Literal::new(3, true), Literal::new(0, false)];
        assert_eq!(literals_string(&literals), "3 -0");
        assert_eq!(Literal::INVALID.to_string(), "⊥");
    }
}
