//! Known database drivers and the metadata attached to them.

use std::fmt;

use serde::Serialize;

use crate::domain::Dialect;

/// Driver name that gets its connection string normalized before lookup.
pub const POSTGRES_DRIVER: &str = "postgres";

/// Static metadata for a driver the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownDriver {
    pub name: &'static str,
    pub import: &'static str,
    pub dialect: Dialect,
}

const KNOWN_DRIVERS: &[KnownDriver] = &[
    KnownDriver { name: POSTGRES_DRIVER, import: "github.com/lib/pq", dialect: Dialect::Postgres },
    KnownDriver {
        name: "mymysql",
        import: "github.com/ziutek/mymysql/godrv",
        dialect: Dialect::MySql,
    },
    KnownDriver {
        name: "mysql",
        import: "github.com/go-sql-driver/mysql",
        dialect: Dialect::MySql,
    },
];

/// Everything needed to work with a specific database driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverInfo {
    /// Driver name as written in `db.driver`.
    pub name: String,
    /// Connection string after expansion and normalization.
    pub dsn: String,
    /// Reference to the module implementing this driver. Empty when unknown.
    pub import: String,
    /// Dialect used for statement generation. `None` when unknown.
    pub dialect: Option<Dialect>,
}

impl DriverInfo {
    /// A driver is usable once it has both a reference and a dialect.
    pub fn is_valid(&self) -> bool {
        !self.import.is_empty() && self.dialect.is_some()
    }
}

// Omits the DSN, which usually carries credentials.
impl fmt::Display for DriverInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let import = if self.import.is_empty() { "<none>" } else { self.import.as_str() };
        let dialect = self.dialect.map(|d| d.name()).unwrap_or("<none>");
        write!(f, "driver '{}' (import: {}, dialect: {})", self.name, import, dialect)
    }
}

/// Look up a driver by name.
///
/// Always returns a value. Unknown names produce a `DriverInfo` with an empty
/// import and no dialect, which fails [`DriverInfo::is_valid`].
pub fn lookup(name: &str) -> DriverInfo {
    let known = KNOWN_DRIVERS.iter().find(|driver| driver.name == name);

    DriverInfo {
        name: name.to_string(),
        dsn: String::new(),
        import: known.map(|driver| driver.import.to_string()).unwrap_or_default(),
        dialect: known.map(|driver| driver.dialect),
    }
}

/// The full registry table, in declaration order.
pub fn known_drivers() -> &'static [KnownDriver] {
    KNOWN_DRIVERS
}
