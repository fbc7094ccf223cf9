/*!
The map between external and internal variables.

External variables are the (positive) integers used by whatever adds clauses to a context, and by other engines of a portfolio.
Internal variables are indicies from zero.

An external variable is *imported* on first reference, and imports are made in order: the first reference to external variable `e` imports every external variable up to `e` which has not yet been imported.
So, for a single context, external variable `e` is internal variable `e - 1`.
Still, all translation goes through the map, as engines of a portfolio must agree only on external numbering.

An imported variable may later be *eliminated* by preprocessing, after which the value of the variable is not read from the assignment but reconstructed from the [extension stack](crate::db::extension).
And, clauses from other engines which mention an eliminated variable are skipped.

```rust
# use portfolio_sat::db::import::ImportMap;
let mut map = ImportMap::default();
let p = map.import(-3).unwrap();

assert_eq!(map.variables(), 3);
assert_eq!(p.variable(), 2);
assert!(!p.polarity());
assert_eq!(map.export(p), -3);
assert!(map.import(0).is_err());
```
*/

use crate::{
    structures::literal::{ExternalLiteral, Literal, Variable},
    types::err::ApiError,
};

/// The largest supported external variable.
pub const MAX_EXTERNAL_VARIABLE: ExternalLiteral = (1 << 28) - 1;

/// The import record of an external variable.
#[derive(Clone, Copy, Debug)]
pub struct Import {
    /// The positive internal literal of the external variable.
    pub literal: Literal,

    /// The external variable has been mapped to an internal variable.
    pub imported: bool,

    /// The internal variable has been eliminated.
    pub eliminated: bool,
}

impl Default for Import {
    fn default() -> Self {
        Import {
            literal: Literal::INVALID,
            imported: false,
            eliminated: false,
        }
    }
}

/// The import map.
#[derive(Default)]
pub struct ImportMap {
    /// Import records, indexed by external variable.
    imports: Vec<Import>,

    /// External variables, indexed by internal variable.
    exports: Vec<ExternalLiteral>,
}

impl ImportMap {
    /// The internal literal of `external`, importing any required variables.
    pub fn import(&mut self, external: ExternalLiteral) -> Result<Literal, ApiError> {
        if external == 0 {
            return Err(ApiError::ZeroLiteral);
        }
        let variable = external.unsigned_abs();
        if variable > MAX_EXTERNAL_VARIABLE as u32 {
            return Err(ApiError::VariableLimit(external as i64));
        }

        let index = variable as usize;
        if self.imports.len() <= index {
            self.imports.resize(index + 1, Import::default());
        }
        // Imports are contiguous from one, so only variables past the count of exports are fresh.
        for e in (self.exports.len() + 1)..=index {
            let internal = self.exports.len() as Variable;
            self.imports[e] = Import {
                literal: Literal::new(internal, true),
                imported: true,
                eliminated: false,
            };
            self.exports.push(e as ExternalLiteral);
        }

        let positive = self.imports[index].literal;
        Ok(match external > 0 {
            true => positive,
            false => positive.negate(),
        })
    }

    /// The import record of the variable of `external`, if the variable has been imported.
    pub fn get(&self, external: ExternalLiteral) -> Option<&Import> {
        self.imports
            .get(external.unsigned_abs() as usize)
            .filter(|import| import.imported)
    }

    /// The internal literal of `external`, without importing.
    ///
    /// None, if the variable of `external` is unknown or eliminated.
    pub fn lookup(&self, external: ExternalLiteral) -> Option<Literal> {
        let import = self.get(external)?;
        if import.eliminated {
            return None;
        }
        Some(match external > 0 {
            true => import.literal,
            false => import.literal.negate(),
        })
    }

    /// The external literal of `literal`.
    pub fn export(&self, literal: Literal) -> ExternalLiteral {
        let external = self.exports[literal.variable() as usize];
        match literal.polarity() {
            true => external,
            false => -external,
        }
    }

    /// Notes the elimination of `variable`.
    pub fn eliminate(&mut self, variable: Variable) {
        let external = self.exports[variable as usize];
        self.imports[external as usize].eliminated = true;
    }

    /// True if `variable` has been eliminated.
    pub fn is_eliminated(&self, variable: Variable) -> bool {
        let external = self.exports[variable as usize];
        self.imports[external as usize].eliminated
    }

    /// The count of imported (internal) variables.
    pub fn variables(&self) -> usize {
        self.exports.len()
    }

    /// The largest imported external variable.
    pub fn max_external(&self) -> ExternalLiteral {
        self.imports.len().saturating_sub(1) as ExternalLiteral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_in_order() {
        let mut map = ImportMap::default();
        assert_eq!(map.import(2).unwrap(), Literal::new(1, true));
        assert_eq!(map.import(1).unwrap(), Literal::new(0, true));
        assert_eq!(map.variables(), 2);
        assert!(map.lookup(5).is_none());
        assert_eq!(map.export(Literal::new(1, false)), -2);
    }

    #[test]
    fn limits() {
        let mut map = ImportMap::default();
        assert_eq!(map.import(0), Err(ApiError::ZeroLiteral));
        assert!(matches!(
            map.import(MAX_EXTERNAL_VARIABLE + 1),
            Err(ApiError::VariableLimit(_))
        ));
        assert_eq!(map.variables(), 0);
    }

    #[test]
    fn eliminated_are_hidden() {
        let mut map = ImportMap::default();
        let p = map.import(1).unwrap();
        map.eliminate(p.variable());
        assert!(map.lookup(1).is_none());
        assert!(map.lookup(-1).is_none());
        assert!(map.get(1).is_some_and(|import| import.eliminated));
    }
}
