use crate::model::criteria::Criterion;
use crate::model::field::QueryField;
use aqueduct_core::SortDirection;

/// One entry in a query's ordered element list: either a filtering
/// criterion (leaf or combinator subtree) or a sort specification.
///
/// The presence of at least one criterion anywhere in the list decides
/// whether a WHERE clause is emitted at all.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryElement {
    Criterion(Criterion),
    Sort(SortSpec),
}

/// A single ORDER BY term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: QueryField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: QueryField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub const fn asc(field: QueryField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub const fn desc(field: QueryField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}
