use crate::{config::Glue, structures::literal::ExternalLiteral};

/// A clause in transit between engines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedClause {
    /// The literals of the clause, as external literals.
    pub literals: Vec<ExternalLiteral>,

    /// The glue of the clause when learnt.
    pub glue: Glue,

    /// The engine which learnt the clause.
    pub from: usize,
}

impl SharedClause {
    pub fn size(&self) -> usize {
        self.literals.len()
    }
}
