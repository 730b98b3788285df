//! The immutable query AST consumed by the compiler.
//!
//! The textual AQL parser (out of scope here) produces these values; the
//! compiler only checks that the domain is one it can generate SQL for and
//! otherwise assumes a well-formed tree.

mod criteria;
mod domain;
mod element;
mod field;
mod query;

pub use criteria::{ComparisonOp, Criterion};
pub use domain::QueryDomain;
pub use element::{QueryElement, SortSpec};
pub use field::QueryField;
pub use query::AqlQuery;
