//! Leaf pieces of a block and the input union builders accept.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tokio_postgres::types::ToSql;

use super::block::Block;
use crate::error::{BlockError, BlockResult};

pub(crate) static OPEN_PAREN: Piece = Piece::Raw(Raw::from_static("("));
pub(crate) static CLOSE_PAREN: Piece = Piece::Raw(Raw::from_static(")"));

/// Trusted SQL text, inserted into the output verbatim.
///
/// There is no conversion from `&str` or `String`: plain strings
/// passed to a builder become [`Param`]s. Use [`raw`](super::raw) (or
/// [`Raw::new`]) only for text you wrote yourself, never for user input.
#[derive(Clone)]
pub struct Raw(Cow<'static, str>);

impl Raw {
    pub fn new(sql: impl Into<Cow<'static, str>>) -> Self {
        Raw(sql.into())
    }

    pub(crate) const fn from_static(sql: &'static str) -> Self {
        Raw(Cow::Borrowed(sql))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Raw").field(&self.as_str()).finish()
    }
}

/// A bound parameter: an opaque value that is only ever sent through a
/// placeholder.
///
/// Values are stored behind an `Arc`, so cloning a block never copies them.
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// The value as a `tokio-postgres` parameter reference.
    pub fn value(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// One element of a flattened block.
#[derive(Clone, Debug)]
pub enum Piece {
    Raw(Raw),
    Param(Param),
}

/// Everything a block can be built from.
///
/// Builders take `impl IntoSql` (or iterators of `Sql`), so callers rarely
/// name this type directly.
#[derive(Clone, Debug)]
pub enum Sql {
    Raw(Raw),
    Param(Param),
    Block(Block),
}

/// Conversion into the builder input union.
///
/// Any `ToSql` value converts into a bound parameter. Types that can describe
/// themselves as a block (see [`Comparable`](super::Comparable)) implement
/// this by returning `Sql::Block(self.to_block())`.
pub trait IntoSql: Sized {
    fn into_sql(self) -> Sql;

    /// The input as an operand of [`Block::append`].
    ///
    /// Only an explicit [`Block`] or [`Param`] may be appended; everything
    /// else is rejected with [`BlockError::UnsupportedAppend`].
    fn into_appendable(self) -> BlockResult<Sql> {
        Err(BlockError::UnsupportedAppend(std::any::type_name::<Self>()))
    }
}

impl IntoSql for Sql {
    fn into_sql(self) -> Sql {
        self
    }

    fn into_appendable(self) -> BlockResult<Sql> {
        match self {
            Sql::Raw(_) => Err(BlockError::UnsupportedAppend("raw SQL text")),
            sql => Ok(sql),
        }
    }
}

impl IntoSql for Raw {
    fn into_sql(self) -> Sql {
        Sql::Raw(self)
    }

    fn into_appendable(self) -> BlockResult<Sql> {
        Err(BlockError::UnsupportedAppend("raw SQL text"))
    }
}

impl IntoSql for Param {
    fn into_sql(self) -> Sql {
        Sql::Param(self)
    }

    fn into_appendable(self) -> BlockResult<Sql> {
        Ok(Sql::Param(self))
    }
}

impl IntoSql for Block {
    fn into_sql(self) -> Sql {
        Sql::Block(self)
    }

    fn into_appendable(self) -> BlockResult<Sql> {
        Ok(Sql::Block(self))
    }
}

impl<T> IntoSql for T
where
    T: ToSql + Send + Sync + 'static,
{
    fn into_sql(self) -> Sql {
        Sql::Param(Param::new(self))
    }
}
