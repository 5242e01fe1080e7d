use std::fmt;

use serde::Serialize;

/// SQL-generation behavior selected for a driver.
///
/// Several driver names may share one dialect (`mysql` and `mymysql` both
/// speak [`Dialect::MySql`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// PostgreSQL statement generation.
    Postgres,
    /// MySQL statement generation.
    MySql,
}

impl Dialect {
    /// All known dialects.
    pub const ALL: [Dialect; 2] = [Dialect::Postgres, Dialect::MySql];

    /// Canonical name, as accepted by `migrate.dialect`.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
        }
    }

    /// Resolve a dialect from its canonical name.
    ///
    /// Matching is exact; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Dialect> {
        match name {
            "postgres" => Some(Dialect::Postgres),
            "mysql" => Some(Dialect::MySql),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
