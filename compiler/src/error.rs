use crate::model::{QueryDomain, QueryField};
use thiserror::Error;

/// A compilation failure. There is no partial-success mode: compilation
/// either yields one complete executable query or fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// No SQL generator is registered for the requested domain. The AST
    /// producer should never emit such a domain, so this is surfaced loudly
    /// rather than defaulted.
    #[error("query domain `{0}` is not supported by the SQL compiler")]
    DomainNotSupported(QueryDomain),

    /// A referenced field lives in a table the domain's join chain cannot
    /// reach. Generating anyway would emit SQL naming an undeclared table
    /// alias, so the query is rejected before any text is produced.
    #[error("field `{field}` is not reachable from the `{domain}` domain")]
    FieldUnreachable {
        domain: QueryDomain,
        field: QueryField,
    },

    /// The execution collaborator could not report the active database type.
    /// Silently picking one could generate SQL that is invalid for the real
    /// backend, so the failure propagates instead.
    #[error("active database type could not be resolved")]
    DialectUnresolved,
}

/// Result type for compilation operations.
pub type Result<T> = std::result::Result<T, CompileError>;
