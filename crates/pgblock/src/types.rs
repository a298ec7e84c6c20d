//! PostgreSQL type names.
//!
//! [`SqlType`] is the closed registry of type names that may appear as trusted
//! text on the right of a `::` cast. Keeping it an enum means a cast target can
//! never come from user input.

use std::borrow::Cow;
use std::fmt;

/// A PostgreSQL data type usable as a cast target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    SmallInt,
    Integer,
    BigInt,
    Real,
    DoublePrecision,
    /// `NUMERIC` or `NUMERIC(precision, scale)`
    Numeric(Option<(u16, u16)>),
    Boolean,
    Text,
    /// `VARCHAR` or `VARCHAR(n)`
    VarChar(Option<u32>),
    /// `CHAR` or `CHAR(n)`; Postgres pads short values with spaces
    Char(Option<u32>),
    Bytea,
    Date,
    Time,
    Timestamp,
    TimestampTz,
    Interval,
    Uuid,
    Json,
    Jsonb,
    Inet,
    Cidr,
    Int4Range,
    Int8Range,
    NumRange,
    TsRange,
    TsTzRange,
    DateRange,
    /// `<inner>[]`
    Array(Box<SqlType>),
}

impl SqlType {
    /// The type name as SQL text.
    pub fn sql(&self) -> Cow<'static, str> {
        let name = match self {
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Real => "REAL",
            SqlType::DoublePrecision => "DOUBLE PRECISION",
            SqlType::Numeric(None) => "NUMERIC",
            SqlType::Numeric(Some((precision, scale))) => {
                return Cow::Owned(format!("NUMERIC({precision}, {scale})"));
            }
            SqlType::Boolean => "BOOLEAN",
            SqlType::Text => "TEXT",
            SqlType::VarChar(None) => "VARCHAR",
            SqlType::VarChar(Some(n)) => return Cow::Owned(format!("VARCHAR({n})")),
            SqlType::Char(None) => "CHAR",
            SqlType::Char(Some(n)) => return Cow::Owned(format!("CHAR({n})")),
            SqlType::Bytea => "BYTEA",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::TimestampTz => "TIMESTAMPTZ",
            SqlType::Interval => "INTERVAL",
            SqlType::Uuid => "UUID",
            SqlType::Json => "JSON",
            SqlType::Jsonb => "JSONB",
            SqlType::Inet => "INET",
            SqlType::Cidr => "CIDR",
            SqlType::Int4Range => "INT4RANGE",
            SqlType::Int8Range => "INT8RANGE",
            SqlType::NumRange => "NUMRANGE",
            SqlType::TsRange => "TSRANGE",
            SqlType::TsTzRange => "TSTZRANGE",
            SqlType::DateRange => "DATERANGE",
            SqlType::Array(inner) => return Cow::Owned(format!("{}[]", inner.sql())),
        };
        Cow::Borrowed(name)
    }

    pub fn array(inner: SqlType) -> Self {
        SqlType::Array(Box::new(inner))
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_types_include_their_length() {
        assert_eq!(SqlType::VarChar(None).sql(), "VARCHAR");
        assert_eq!(SqlType::VarChar(Some(32)).sql(), "VARCHAR(32)");
        assert_eq!(SqlType::Char(Some(2)).sql(), "CHAR(2)");
        assert_eq!(SqlType::Numeric(Some((10, 2))).sql(), "NUMERIC(10, 2)");
    }

    #[test]
    fn arrays_nest() {
        let ty = SqlType::array(SqlType::array(SqlType::Integer));
        assert_eq!(ty.to_string(), "INTEGER[][]");
    }
}
