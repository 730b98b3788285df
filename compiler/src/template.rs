use aqueduct_core::{AqlValue, SqlFragment};

/// Named regions of the fixed `select distinct <projection> from <tables>
/// [where <filter>] [<sort>]` skeleton.
///
/// Each region is its own buffer and the final string is produced exactly
/// once, in [`QueryTemplate::assemble`]. Compared to substituting sentinel
/// tokens into a shared template string, this makes it impossible for a
/// field name or literal that happens to look like a sentinel to corrupt a
/// later substitution pass.
#[derive(Debug, Default)]
pub(crate) struct QueryTemplate {
    projection: String,
    tables: String,
    filter: Option<SqlFragment>,
    sort: String,
}

impl QueryTemplate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_projection(&mut self, projection: String) {
        self.projection = projection;
    }

    pub(crate) fn set_tables(&mut self, tables: String) {
        self.tables = tables;
    }

    /// Installs the WHERE body. When never called, neither the `where`
    /// keyword nor any predicate text is emitted.
    pub(crate) fn set_filter(&mut self, filter: SqlFragment) {
        self.filter = Some(filter);
    }

    pub(crate) fn set_sort(&mut self, sort: String) {
        self.sort = sort;
    }

    /// Assembles the final query text and its positional parameters.
    /// Pagination rewriting runs on the returned text as a separate pass.
    pub(crate) fn assemble(self) -> (String, Vec<AqlValue>) {
        let (filter_text, params) = match self.filter {
            Some(filter) if !filter.is_empty() => filter.into_parts(),
            _ => (String::new(), Vec::new()),
        };

        let mut sql = String::with_capacity(
            22 + self.projection.len() + self.tables.len() + filter_text.len() + self.sort.len(),
        );
        sql.push_str("select distinct ");
        sql.push_str(&self.projection);
        sql.push_str(" from ");
        sql.push_str(&self.tables);
        if !filter_text.is_empty() {
            sql.push_str(" where ");
            sql.push_str(&filter_text);
        }
        if !self.sort.is_empty() {
            sql.push(' ');
            sql.push_str(&self.sort);
        }
        (sql, params)
    }
}
