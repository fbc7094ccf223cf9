//! Key structures, such as literals and values.
//!
//! # Variables and literals
//!
//! A variable is an index in `[0, vars)`, owned by a context for its lifetime.
//! The count of variables only grows, lazily, as external variables are referenced.
//!
//! A literal is a variable paired with a polarity, and is encoded as the unsigned integer `2 * variable + polarity_bit`, with a polarity bit of 0 for the positive literal.
//! So, negation flips the low bit, and literals index per-literal structures (values, watch lists) directly.
//!
//! # External literals
//!
//! Outside of a context literals are signed integers, as in DIMACS: `v` for the positive literal on external variable `v` and `-v` for its negation.
//! The map between external and internal numbering is kept in the [import map](crate::db::import).
//!
//! # Values
//!
//! A [value](value::Value) is tri-state: true, false, or unassigned.
//! Values are stored per literal, so the value of a literal and its negation are each a single lookup.

pub mod literal;
pub mod value;
