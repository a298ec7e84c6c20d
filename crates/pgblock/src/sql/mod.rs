//! Composable SQL blocks.
//!
//! A [`Block`] is an ordered list of trusted SQL text ([`Raw`]) and bound
//! parameters ([`Param`]). Blocks nest freely while you build them and are
//! flattened as they go, so rendering is one linear pass that numbers
//! placeholders left to right.
//!
//! Anything that is not explicitly marked as raw becomes a parameter:
//!
//! ```ignore
//! use pgblock::{block, raw, Comparable};
//!
//! let name = "Robert'); DROP TABLE students;--";
//! let q = block![raw("SELECT * FROM students WHERE"), raw("name").eq(name)];
//!
//! let rendered = q.render();
//! assert_eq!(rendered.sql, "SELECT * FROM students WHERE ( name = $1 )");
//! ```

mod block;
mod comparable;
mod config;
mod piece;
mod render;


use std::borrow::Cow;

use tokio_postgres::types::ToSql;

pub use block::Block;
pub use comparable::Comparable;
pub use config::{PlaceholderStyle, RenderConfig};
pub use piece::{IntoSql, Param, Piece, Raw, Sql};
pub use render::{Rendered, Renderer};

/// Treat the string as raw SQL.
///
/// Never pass user input here. A good rule of thumb: the argument should be a
/// string literal, not a variable.
///
/// ```ignore
/// raw(user_supplied)  // bad
/// raw("ORDER BY id")  // good
/// ```
pub fn raw(sql: impl Into<Cow<'static, str>>) -> Block {
    Block::new([Sql::Raw(Raw::new(sql))])
}

/// Wrap a value as a bound parameter.
pub fn p<T: ToSql + Send + Sync + 'static>(value: T) -> Param {
    Param::new(value)
}

/// Build a block that renders surrounded by parentheses.
pub fn wrap(pieces: impl IntoIterator<Item = Sql>) -> Block {
    Block::wrapped(pieces)
}

/// SQL version of `values.join(joiner)`.
///
/// No separator is emitted after the last value; zero values give an empty
/// block (wrapped only when `wrap` is set).
pub fn join(joiner: impl IntoSql, values: impl IntoIterator<Item = Sql>, wrap: bool) -> Block {
    let joiner = joiner.into_sql();
    let mut pieces = Vec::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            pieces.push(joiner.clone());
        }
        pieces.push(value);
    }
    Block::with_wrap(pieces, wrap)
}

/// Shortcut for `join(raw("AND"), values, false)`.
///
/// The result is not parenthesized. Wrap it yourself before combining it with
/// other boolean operators, or precedence will not be what you expect.
pub fn and_(values: impl IntoIterator<Item = Sql>) -> Block {
    join(raw("AND"), values, false)
}

/// Shortcut for `join(raw("OR"), values, false)`.
///
/// Like [`and_`], the result is not parenthesized.
pub fn or_(values: impl IntoIterator<Item = Sql>) -> Block {
    join(raw("OR"), values, false)
}

/// Collect heterogeneous inputs into a `Vec<Sql>`.
///
/// ```ignore
/// let list = pgblock::join(raw(","), pieces![p(1), "two", raw("three")], true);
/// ```
#[macro_export]
macro_rules! pieces {
    ($($piece:expr),* $(,)?) => {{
        let pieces: ::std::vec::Vec<$crate::Sql> =
            ::std::vec![$($crate::IntoSql::into_sql($piece)),*];
        pieces
    }};
}

/// Build an unwrapped [`Block`] from heterogeneous inputs.
#[macro_export]
macro_rules! block {
    ($($piece:expr),* $(,)?) => {
        $crate::Block::new($crate::pieces![$($piece),*])
    };
}

/// Build a wrapped [`Block`] from heterogeneous inputs.
#[macro_export]
macro_rules! wrap {
    ($($piece:expr),* $(,)?) => {
        $crate::Block::wrapped($crate::pieces![$($piece),*])
    };
}
