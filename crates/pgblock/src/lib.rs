//! # pgblock
//!
//! Composable, parameter-safe PostgreSQL expression blocks.
//!
//! ## Features
//!
//! - **Safe by default**: anything not explicitly marked [`raw`] becomes a bound parameter
//! - **Composable**: blocks nest freely and flatten as they are built
//! - **Deterministic**: rendering numbers placeholders `$1..$n` left to right, every time
//! - **Operators**: columns, parameters and blocks share [`Comparable`] (`eq`, `lt`, `cast`, ...)
//! - **DDL**: exclusion and check constraints render to `CONSTRAINT <name> ...` clauses
//!
//! ## Blocks
//!
//! ```ignore
//! use pgblock::{Column, Comparable, and_, block, p, pieces, raw};
//!
//! let room = Column::new("room")?;
//! let guest = Column::new("guest")?;
//!
//! let q = block![
//!     raw("SELECT * FROM bookings WHERE"),
//!     and_(pieces![room.eq(p(12_i32)), guest.is_null().not_()]),
//! ];
//!
//! let rendered = q.render();
//! assert_eq!(
//!     rendered.sql,
//!     "SELECT * FROM bookings WHERE ( room = $1 ) AND ( NOT ( ( guest ) IS NULL ) )"
//! );
//! client.query(&rendered.sql, &rendered.params_ref()).await?;
//! ```
//!
//! ## Constraints
//!
//! ```ignore
//! use pgblock::{Constraint, Exclude, IndexMethod};
//!
//! let ex = Exclude::new([("room", "="), ("during", "&&")])?
//!     .using(IndexMethod::Gist)?
//!     .with_name("bookings_no_overlap")?;
//!
//! let ddl = format!("ALTER TABLE bookings ADD {}", ex.creation_sql()?.render_no_params());
//! ```

pub mod constraint;
pub mod error;
pub mod ident;
pub mod index;
pub mod prelude;
pub mod sql;
pub mod types;

pub use constraint::{Check, Constraint, Exclude, ExcludeElement, Expression};
pub use error::{BlockError, BlockResult};
pub use ident::{Column, Ident, IdentPart, IntoIdent};
pub use index::IndexMethod;
pub use sql::{
    Block, Comparable, IntoSql, Param, Piece, PlaceholderStyle, Raw, RenderConfig, Rendered,
    Renderer, Sql, and_, join, or_, p, raw, wrap,
};
pub use types::SqlType;

// Re-export tokio-postgres so callers can name `ToSql` without a direct dependency.
pub use tokio_postgres;
