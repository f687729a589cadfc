//! Identity retrieval dialects
//!
//! A small static table mapping a database name to the statement that reads
//! back the identity value generated by the last insert.

/// Database dialect for identity retrieval.
///
/// Used when a column declares `strategy = "identity"` together with a
/// generator token: a recognized dialect name is replaced by its canonical
/// retrieval statement.
///
/// # Examples
///
/// ```
/// use entable_types::IdentityDialect;
///
/// let dialect = IdentityDialect::parse("MySql").unwrap();
/// assert_eq!(dialect.retrieval_statement(), "SELECT LAST_INSERT_ID()");
///
/// assert_eq!(IdentityDialect::parse("oracle"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IdentityDialect {
    /// IBM DB2 (LUW)
    Db2,
    /// MySQL and MariaDB
    MySql,
    /// Microsoft SQL Server
    SqlServer,
    /// IBM Cloudscape
    Cloudscape,
    /// Apache Derby
    Derby,
    /// HyperSQL
    HsqlDb,
    /// Sybase ASE
    Sybase,
    /// DB2 for z/OS (mainframe)
    #[cfg_attr(feature = "serde", serde(rename = "db2_mf"))]
    Db2Mf,
    /// IBM Informix
    Informix,
}

impl IdentityDialect {
    /// Every known dialect, in lookup order.
    pub const ALL: [IdentityDialect; 9] = [
        IdentityDialect::Db2,
        IdentityDialect::MySql,
        IdentityDialect::SqlServer,
        IdentityDialect::Cloudscape,
        IdentityDialect::Derby,
        IdentityDialect::HsqlDb,
        IdentityDialect::Sybase,
        IdentityDialect::Db2Mf,
        IdentityDialect::Informix,
    ];

    /// Parse a dialect from its name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use entable_types::IdentityDialect;
    ///
    /// assert_eq!(IdentityDialect::parse("mysql"), Some(IdentityDialect::MySql));
    /// assert_eq!(IdentityDialect::parse("DB2_MF"), Some(IdentityDialect::Db2Mf));
    /// assert_eq!(IdentityDialect::parse(""), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dialect| s.eq_ignore_ascii_case(dialect.as_str()))
    }

    /// The statement that returns the last generated identity value.
    #[must_use]
    pub const fn retrieval_statement(&self) -> &'static str {
        match self {
            IdentityDialect::Db2 | IdentityDialect::Cloudscape | IdentityDialect::Derby => {
                "VALUES IDENTITY_VAL_LOCAL()"
            }
            IdentityDialect::MySql => "SELECT LAST_INSERT_ID()",
            IdentityDialect::SqlServer => "SELECT SCOPE_IDENTITY()",
            IdentityDialect::HsqlDb => "CALL IDENTITY()",
            IdentityDialect::Sybase => "SELECT @@IDENTITY",
            IdentityDialect::Db2Mf => "SELECT IDENTITY_VAL_LOCAL() FROM SYSIBM.SYSDUMMY1",
            IdentityDialect::Informix => {
                "select dbinfo('sqlca.sqlerrd1') from systables where tabid=1"
            }
        }
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IdentityDialect::Db2 => "db2",
            IdentityDialect::MySql => "mysql",
            IdentityDialect::SqlServer => "sqlserver",
            IdentityDialect::Cloudscape => "cloudscape",
            IdentityDialect::Derby => "derby",
            IdentityDialect::HsqlDb => "hsqldb",
            IdentityDialect::Sybase => "sybase",
            IdentityDialect::Db2Mf => "db2_mf",
            IdentityDialect::Informix => "informix",
        }
    }

    /// Resolve a generator token: a known dialect name becomes its retrieval
    /// statement, anything else is returned verbatim.
    #[must_use]
    pub fn resolve_token(token: &str) -> &str {
        match Self::parse(token) {
            Some(dialect) => dialect.retrieval_statement(),
            None => token,
        }
    }
}

impl core::fmt::Display for IdentityDialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for IdentityDialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentityDialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown identity dialect")
    }
}

impl std::error::Error for DialectParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_parse() {
        assert_eq!(IdentityDialect::parse("mysql"), Some(IdentityDialect::MySql));
        assert_eq!(IdentityDialect::parse("MySql"), Some(IdentityDialect::MySql));
        assert_eq!(IdentityDialect::parse("MYSQL"), Some(IdentityDialect::MySql));
        assert_eq!(
            IdentityDialect::parse("SqlServer"),
            Some(IdentityDialect::SqlServer)
        );
        assert_eq!(IdentityDialect::parse("hsqldb"), Some(IdentityDialect::HsqlDb));
        assert_eq!(IdentityDialect::parse("db2_mf"), Some(IdentityDialect::Db2Mf));

        assert_eq!(IdentityDialect::parse("postgres"), None);
        assert_eq!(IdentityDialect::parse(""), None);
    }

    #[test]
    fn test_resolve_token() {
        assert_eq!(IdentityDialect::resolve_token("MySql"), "SELECT LAST_INSERT_ID()");
        assert_eq!(IdentityDialect::resolve_token("derby"), "VALUES IDENTITY_VAL_LOCAL()");
        assert_eq!(
            IdentityDialect::resolve_token("SELECT currval('user_id_seq')"),
            "SELECT currval('user_id_seq')"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_dialect_serde_names() {
        assert_eq!(
            serde_json::to_string(&IdentityDialect::Db2Mf).unwrap(),
            "\"db2_mf\""
        );
        let dialect: IdentityDialect = serde_json::from_str("\"sqlserver\"").unwrap();
        assert_eq!(dialect, IdentityDialect::SqlServer);
    }

    #[test]
    fn test_dialect_display_roundtrips_through_parse() {
        for dialect in IdentityDialect::ALL {
            assert_eq!(IdentityDialect::parse(&dialect.to_string()), Some(dialect));
        }
    }
}
