//! # Aqueduct
//!
//! An artifact-query-language (AQL) to SQL compiler for repository
//! metadata. The AQL parser hands over an abstract query — domain,
//! criteria/sort elements, result fields, limit — and aqueduct compiles it
//! into parameterized SQL that is correct for the configured database,
//! pagination included.
//!
//! ## Quick start
//!
//! ```rust
//! use aqueduct::prelude::*;
//!
//! fn main() -> aqueduct::Result<()> {
//!     let query = AqlQuery::new(QueryDomain::Artifacts)
//!         .with_criterion(Criterion::and(vec![
//!             Criterion::leaf(QueryField::ItemRepo, ComparisonOp::Equals, "libs-release"),
//!             Criterion::leaf(QueryField::ItemName, ComparisonOp::Like, "%.jar"),
//!         ]))
//!         .with_sort(SortSpec::asc(QueryField::ItemName))
//!         .with_limit(100);
//!
//!     let compiled = compile(&query, DbType::PostgreSql)?;
//!
//!     assert!(compiled.sql().starts_with("select distinct"));
//!     assert_eq!(compiled.params().len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Database support
//!
//! | Database   | Pagination idiom                          |
//! |------------|-------------------------------------------|
//! | Oracle     | `select * from (...) where ROWNUM <= N`   |
//! | MySQL      | `... limit N`                             |
//! | PostgreSQL | `... limit N`                             |
//! | Derby      | `... FETCH FIRST N ROWS ONLY`             |
//! | MSSQL      | `select distinct top N ...`               |

pub use aqueduct_compiler as compiler;
pub use aqueduct_core as core;

pub use aqueduct_compiler::{
    compile, compile_with, AqlQuery, CompileError, CompiledQuery, Result,
};

pub mod prelude {
    pub use aqueduct_compiler::{
        compile, compile_with, AqlQuery, CompileError, CompiledQuery, ComparisonOp, Criterion,
        DbTypeProvider, NodeIdCache, NodeIdSource, NodePath, QueryDomain, QueryElement,
        QueryField, Result, SortSpec,
    };
    pub use aqueduct_core::{AqlValue, DbType, SortDirection, SqlFragment, UNLIMITED};
}
