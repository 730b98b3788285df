//! Compilation driver.
//!
//! Runs the generator operations in a fixed sequence — projection, tables,
//! where-existence check, predicate, sort — then assembles the template and
//! applies the dialect's pagination idiom as a distinct final pass over the
//! full text (Oracle wraps the entire query, so pagination cannot be
//! interleaved with assembly).

use crate::compiled::CompiledQuery;
use crate::error::{CompileError, Result};
use crate::generators::generator_for;
use crate::model::AqlQuery;
use crate::template::QueryTemplate;
use aqueduct_core::DbType;

/// The execution collaborator's view of the currently configured database.
///
/// Must be side-effect-free; it is queried exactly once per compilation and
/// never cached across compilations, since the configuration of a
/// long-lived process can change between calls.
pub trait DbTypeProvider {
    /// The active database type, or `None` when it cannot be resolved.
    fn db_type(&self) -> Option<DbType>;
}

impl DbTypeProvider for DbType {
    fn db_type(&self) -> Option<DbType> {
        Some(*self)
    }
}

/// Compiles `query` for the database type reported by `provider`.
///
/// Fails with [`CompileError::DialectUnresolved`] when the provider cannot
/// name one; no dialect is ever picked silently.
pub fn compile_with(query: &AqlQuery, provider: &dyn DbTypeProvider) -> Result<CompiledQuery> {
    let db_type = provider.db_type().ok_or(CompileError::DialectUnresolved)?;
    compile(query, db_type)
}

/// Compiles `query` into dialect-correct, parameterized SQL.
///
/// Pure and deterministic: identical input (including `db_type`) yields
/// byte-identical SQL and an identical bind-value list. Every field the
/// query references must resolve within the domain's join chain; anything
/// else fails with [`CompileError::FieldUnreachable`] rather than emitting
/// SQL that names an unjoined table.
pub fn compile(query: &AqlQuery, db_type: DbType) -> Result<CompiledQuery> {
    let generator = generator_for(query.domain())?;
    if let Some(field) = generator.unreachable_field(query) {
        return Err(CompileError::FieldUnreachable {
            domain: query.domain(),
            field,
        });
    }

    let mut template = QueryTemplate::new();
    template.set_projection(generator.projection(query));
    template.set_tables(generator.tables(query));
    // Criteria-free queries never invoke the predicate generator: there is
    // no body a `where` keyword could precede, and no join text worth
    // computing for criteria that do not exist.
    if query.has_criteria() {
        template.set_filter(generator.predicate(query));
    }
    template.set_sort(generator.sort(query));

    let (sql, params) = template.assemble();
    let sql = db_type.apply_limit(sql, query.limit());

    tracing::debug!(
        domain = %query.domain(),
        db_type = %db_type,
        params = params.len(),
        "compiled query"
    );

    Ok(CompiledQuery::new(
        sql,
        params,
        query.result_fields().to_vec(),
        query.limit(),
    ))
}
