use super::ModelRef;

/// One side of a relation between two models.
///
/// Declaring `A.x -> B.y` stores `{ target: B, local: x, references: y }` on
/// `A` and the reverse `{ target: A, local: y, references: x }` in the
/// registry for queries from `B` toward `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub target: ModelRef,
    pub local: String,
    pub references: String,
}

impl Relation {
    pub fn reverse(&self, source: ModelRef) -> Relation {
        Relation {
            target: source,
            local: self.references.clone(),
            references: self.local.clone(),
        }
    }
}
