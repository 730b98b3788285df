//! Compilation of artifact-query-language ASTs into parameterized SQL.
//!
//! The input is a [`AqlQuery`] produced by the (external) AQL parser: a
//! query domain, an ordered list of criteria and sort specifications, the
//! requested result fields and a row limit. [`compile`] turns it into a
//! [`CompiledQuery`] — dialect-correct SQL text plus the positional bind
//! values — for the (equally external) execution layer to run.
//!
//! Compilation is a pure in-memory transformation: no I/O, no retries, no
//! shared mutable state between concurrent calls.

pub mod compiled;
pub mod compiler;
pub mod error;
mod generators;
pub mod model;
pub mod node_index;
pub mod schema;
mod template;

pub use compiled::CompiledQuery;
pub use compiler::{compile, compile_with, DbTypeProvider};
pub use error::{CompileError, Result};
pub use model::{
    AqlQuery, ComparisonOp, Criterion, QueryDomain, QueryElement, QueryField, SortSpec,
};
pub use node_index::{NodeIdCache, NodeIdSource, NodePath};
