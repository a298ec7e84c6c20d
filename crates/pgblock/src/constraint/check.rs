use std::borrow::Cow;

use super::{Constraint, Expression, required_name};
use crate::error::BlockResult;
use crate::ident::Ident;
use crate::sql::{Block, raw};
use crate::{block, wrap};

/// A check constraint: `CONSTRAINT <name> CHECK ( <expr> )`.
#[derive(Debug, Clone)]
pub struct Check {
    name: Option<Ident>,
    expr: Block,
}

impl Check {
    pub fn new(expr: impl Into<Expression>) -> Self {
        Self {
            name: None,
            expr: expr.into().into_block(),
        }
    }

    /// Check over trusted SQL text. The text is inserted verbatim.
    pub fn raw(sql: impl Into<Cow<'static, str>>) -> Self {
        Self::new(raw(sql))
    }

    pub fn expr(&self) -> &Block {
        &self.expr
    }

    pub fn render(&self) -> BlockResult<Block> {
        let name = required_name(self.kind(), self.name.as_ref())?;
        Ok(block![
            raw("CONSTRAINT"),
            name.to_block(),
            raw("CHECK"),
            wrap![self.expr.clone()],
        ])
    }
}

impl Constraint for Check {
    fn kind(&self) -> &'static str {
        "check"
    }

    fn name(&self) -> Option<&Ident> {
        self.name.as_ref()
    }

    fn set_name(&mut self, name: Ident) {
        self.name = Some(name);
    }

    fn creation_sql(&self) -> BlockResult<Block> {
        self.render()
    }
}
