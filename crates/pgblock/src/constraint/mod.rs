//! Table constraint clauses.
//!
//! Constraints are defined by the schema layer, which assigns each one a name
//! (typically derived from the table) and later splices
//! [`creation_sql`](Constraint::creation_sql) into `CREATE TABLE` /
//! `ALTER TABLE ... ADD`. Definitions are checked when they are built; a
//! missing name is only reported at render time, since naming legitimately
//! happens after construction.

mod check;
mod exclude;


pub use check::Check;
pub use exclude::{Exclude, ExcludeElement};

use crate::error::{BlockError, BlockResult};
use crate::ident::{Column, Ident, IntoIdent};
use crate::sql::{Block, raw};

/// A named table constraint that renders to a DDL clause.
pub trait Constraint {
    /// Human-readable constraint kind, used in error messages.
    fn kind(&self) -> &'static str;

    fn name(&self) -> Option<&Ident>;

    fn set_name(&mut self, name: Ident);

    /// The `CONSTRAINT <name> ...` clause.
    ///
    /// Fails with [`BlockError::MissingConstraintName`] if no name was set.
    fn creation_sql(&self) -> BlockResult<Block>;

    /// Validate and assign the name, consuming `self`.
    fn with_name(mut self, name: impl IntoIdent) -> BlockResult<Self>
    where
        Self: Sized,
    {
        self.set_name(name.into_ident()?);
        Ok(self)
    }
}

/// SQL supplied by the schema layer for use inside a constraint.
///
/// Strings are taken as trusted raw SQL and are *not* escaped; pass a
/// [`Column`] or a composed [`Block`] when the text is not a literal you wrote.
#[derive(Debug, Clone)]
pub struct Expression(Block);

impl Expression {
    pub fn into_block(self) -> Block {
        self.0
    }
}

impl From<Block> for Expression {
    fn from(block: Block) -> Self {
        Expression(block)
    }
}

impl From<&str> for Expression {
    fn from(sql: &str) -> Self {
        Expression(raw(sql.to_owned()))
    }
}

impl From<String> for Expression {
    fn from(sql: String) -> Self {
        Expression(raw(sql))
    }
}

impl From<Column> for Expression {
    fn from(column: Column) -> Self {
        Expression(column.ident().to_block())
    }
}

impl From<&Column> for Expression {
    fn from(column: &Column) -> Self {
        Expression(column.ident().to_block())
    }
}

impl From<Ident> for Expression {
    fn from(ident: Ident) -> Self {
        Expression(ident.to_block())
    }
}

fn required_name<'a>(kind: &'static str, name: Option<&'a Ident>) -> BlockResult<&'a Ident> {
    name.ok_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            target: "pgblock.constraint",
            kind,
            "constraint rendered before a name was assigned"
        );
        BlockError::MissingConstraintName(kind)
    })
}
