use crate::model::QueryField;
use aqueduct_core::AqlValue;

/// The executable artifact handed to the execution collaborator: SQL text,
/// positional bind values, the originally requested result fields, and the
/// resolved limit (informational; already baked into the SQL).
///
/// Created fresh per compilation and treated as immutable once returned;
/// never pooled or shared between compilations.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    sql: String,
    params: Vec<AqlValue>,
    fields: Vec<QueryField>,
    limit: u64,
}

impl CompiledQuery {
    pub(crate) fn new(
        sql: String,
        params: Vec<AqlValue>,
        fields: Vec<QueryField>,
        limit: u64,
    ) -> Self {
        Self {
            sql,
            params,
            fields,
            limit,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bind values as a plain ordered slice, aligned one-to-one with the
    /// `?` placeholders in [`CompiledQuery::sql`]. The executor binds them
    /// positionally.
    pub fn params(&self) -> &[AqlValue] {
        &self.params
    }

    /// The result fields as requested, so result-set columns can be mapped
    /// back to field identities.
    pub fn result_fields(&self) -> &[QueryField] {
        &self.fields
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}
