use super::block::Block;
use super::piece::{Param, Raw, Sql};
use super::raw;
use crate::types::SqlType;

/// Operators shared by everything that can describe itself as a [`Block`].
///
/// Implementors provide [`to_block`](Comparable::to_block); every operator is
/// a default method returning a new block, leaving `self` untouched. The
/// right-hand side of a binary operator goes through
/// [`IntoSql`](super::IntoSql), so plain values become bound parameters and
/// can never end up in the SQL text.
///
/// ```ignore
/// use pgblock::{Column, Comparable, SqlType, p};
///
/// let price = Column::new("price")?;
/// let cond = price.cast(&SqlType::BigInt).gteq(p(100_i64));
/// assert_eq!(cond.render().sql, "( ( price :: BIGINT ) >= $1 )");
/// ```
pub trait Comparable {
    /// The canonical block representing `self`.
    fn to_block(&self) -> Block;

    /// `( self <op> other )`. `op` is inserted as trusted SQL text.
    fn op(&self, op: &'static str, other: impl super::IntoSql) -> Block {
        crate::wrap![self.to_block(), raw(op), other]
    }

    /// `( name ( self ) )`. `name` is inserted as trusted SQL text.
    fn func(&self, name: &'static str) -> Block {
        crate::wrap![raw(name), crate::wrap![self.to_block()]]
    }

    /// `( ( self ) <suffix> )`. `suffix` is inserted as trusted SQL text.
    fn rfunc(&self, suffix: &'static str) -> Block {
        crate::wrap![crate::wrap![self.to_block()], raw(suffix)]
    }

    fn not_(&self) -> Block {
        self.func("NOT")
    }

    fn is_null(&self) -> Block {
        self.rfunc("IS NULL")
    }

    fn eq(&self, other: impl super::IntoSql) -> Block {
        self.op("=", other)
    }

    fn neq(&self, other: impl super::IntoSql) -> Block {
        self.op("!=", other)
    }

    fn lt(&self, other: impl super::IntoSql) -> Block {
        self.op("<", other)
    }

    fn gt(&self, other: impl super::IntoSql) -> Block {
        self.op(">", other)
    }

    fn lteq(&self, other: impl super::IntoSql) -> Block {
        self.op("<=", other)
    }

    fn gteq(&self, other: impl super::IntoSql) -> Block {
        self.op(">=", other)
    }

    /// `( self :: <type> )`. The type name comes from the fixed [`SqlType`]
    /// registry, which is the only reason it may be trusted as SQL text.
    fn cast(&self, ty: &SqlType) -> Block {
        self.op("::", raw(ty.sql()))
    }
}

impl Comparable for Block {
    fn to_block(&self) -> Block {
        self.clone()
    }
}

impl Comparable for Param {
    fn to_block(&self) -> Block {
        Block::new([Sql::Param(self.clone())])
    }
}

impl Comparable for Raw {
    fn to_block(&self) -> Block {
        Block::new([Sql::Raw(self.clone())])
    }
}
