//! Tri-state values.

/// The value of a literal on the current assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(i8)]
pub enum Value {
    /// The literal is false.
    False = -1,

    /// The literal has no value.
    #[default]
    Unassigned = 0,

    /// The literal is true.
    True = 1,
}

impl Value {
    /// The value corresponding to a boolean.
    pub fn from_bool(value: bool) -> Self {
        match value {
            true => Value::True,
            false => Value::False,
        }
    }

    /// The value as a boolean, if assigned.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            Value::Unassigned => None,
        }
    }

    pub fn is_true(self) -> bool {
        self == Value::True
    }

    pub fn is_false(self) -> bool {
        self == Value::False
    }

    pub fn is_assigned(self) -> bool {
        self != Value::Unassigned
    }
}

impl std::ops::Neg for Value {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Value::False => Value::True,
            Value::Unassigned => Value::Unassigned,
            Value::True => Value::False,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::False => write!(f, "false"),
            Self::Unassigned => write!(f, "unassigned"),
            Self::True => write!(f, "true"),
        }
    }
}
