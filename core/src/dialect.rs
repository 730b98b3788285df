//! Database-type model and per-dialect pagination.
//!
//! The five supported products generate identical SQL except for how a row
//! limit is expressed, so the dialect surfaces here as a single rewriting
//! pass over the fully assembled query text.

use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// Limit value meaning "no pagination"; `0` is treated the same way.
pub const UNLIMITED: u64 = u64::MAX;

/// The relational database product the generated SQL targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbType {
    Oracle,
    MySql,
    PostgreSql,
    Derby,
    MsSql,
}

impl DbType {
    /// Every supported database type, in a fixed order.
    pub const ALL: [DbType; 5] = [
        DbType::Oracle,
        DbType::MySql,
        DbType::PostgreSql,
        DbType::Derby,
        DbType::MsSql,
    ];

    /// Parse a database type from a string (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use aqueduct_core::DbType;
    ///
    /// assert_eq!(DbType::parse("postgres"), Some(DbType::PostgreSql));
    /// assert_eq!(DbType::parse("sqlserver"), Some(DbType::MsSql));
    /// assert_eq!(DbType::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("oracle") {
            Some(DbType::Oracle)
        } else if s.eq_ignore_ascii_case("mysql") {
            Some(DbType::MySql)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(DbType::PostgreSql)
        } else if s.eq_ignore_ascii_case("derby") {
            Some(DbType::Derby)
        } else if s.eq_ignore_ascii_case("mssql") || s.eq_ignore_ascii_case("sqlserver") {
            Some(DbType::MsSql)
        } else {
            None
        }
    }

    /// The database type name as a lowercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DbType::Oracle => "oracle",
            DbType::MySql => "mysql",
            DbType::PostgreSql => "postgresql",
            DbType::Derby => "derby",
            DbType::MsSql => "mssql",
        }
    }

    /// Rewrites an assembled query so the database returns at most `limit`
    /// rows. A limit of `0` or [`UNLIMITED`] leaves the text untouched.
    ///
    /// Oracle and MSSQL need structural rewrites (an outer wrapping query,
    /// or editing the first `select distinct` token in place); the other
    /// dialects append a suffix. MSSQL's rewrite targets the first textual
    /// occurrence of `select distinct` only; a subquery containing the same
    /// token would be left alone, and a future domain that put one *before*
    /// the outer projection would be rewritten incorrectly.
    #[must_use]
    pub fn apply_limit(self, sql: String, limit: u64) -> String {
        if limit == 0 || limit == UNLIMITED {
            return sql;
        }
        match self {
            DbType::Oracle => format!("select * from ({sql}) where ROWNUM <= {limit}"),
            DbType::MySql | DbType::PostgreSql => format!("{sql} limit {limit}"),
            DbType::Derby => format!("{sql} FETCH FIRST {limit} ROWS ONLY"),
            DbType::MsSql => {
                sql.replacen("select distinct", &format!("select distinct top {limit}"), 1)
            }
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = DbTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DbType::parse(s).ok_or(DbTypeParseError)
    }
}

/// Error returned when parsing an unknown database-type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown database type")]
pub struct DbTypeParseError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!(DbType::parse("Oracle"), Some(DbType::Oracle));
        assert_eq!(DbType::parse("mysql"), Some(DbType::MySql));
        assert_eq!(DbType::parse("postgresql"), Some(DbType::PostgreSql));
        assert_eq!(DbType::parse("postgres"), Some(DbType::PostgreSql));
        assert_eq!(DbType::parse("pg"), Some(DbType::PostgreSql));
        assert_eq!(DbType::parse("derby"), Some(DbType::Derby));
        assert_eq!(DbType::parse("MSSQL"), Some(DbType::MsSql));
        assert_eq!(DbType::parse("sqlserver"), Some(DbType::MsSql));
        assert_eq!(DbType::parse(""), None);
        assert_eq!("derby".parse::<DbType>(), Ok(DbType::Derby));
        assert_eq!("h2".parse::<DbType>(), Err(DbTypeParseError));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", DbType::PostgreSql), "postgresql");
        assert_eq!(format!("{}", DbType::MsSql), "mssql");
    }

    const QUERY: &str = "select distinct n.repo as \"repo\" from nodes n";

    #[test]
    fn unlimited_is_untouched_everywhere() {
        for db in DbType::ALL {
            assert_eq!(db.apply_limit(QUERY.to_string(), 0), QUERY);
            assert_eq!(db.apply_limit(QUERY.to_string(), UNLIMITED), QUERY);
        }
    }

    #[test]
    fn oracle_wraps_whole_query() {
        assert_eq!(
            DbType::Oracle.apply_limit(QUERY.to_string(), 5),
            format!("select * from ({QUERY}) where ROWNUM <= 5")
        );
    }

    #[test]
    fn mysql_and_postgres_append_limit() {
        assert_eq!(
            DbType::MySql.apply_limit(QUERY.to_string(), 10),
            format!("{QUERY} limit 10")
        );
        assert_eq!(
            DbType::PostgreSql.apply_limit(QUERY.to_string(), 10),
            format!("{QUERY} limit 10")
        );
    }

    #[test]
    fn derby_appends_fetch_first() {
        assert_eq!(
            DbType::Derby.apply_limit(QUERY.to_string(), 20),
            format!("{QUERY} FETCH FIRST 20 ROWS ONLY")
        );
    }

    #[test]
    fn mssql_rewrites_first_occurrence_only() {
        let nested = "select distinct n.node_id from nodes n where n.node_id in \
                      (select distinct np.node_id from node_props np)";
        assert_eq!(
            DbType::MsSql.apply_limit(nested.to_string(), 10),
            "select distinct top 10 n.node_id from nodes n where n.node_id in \
             (select distinct np.node_id from node_props np)"
        );
    }
}
