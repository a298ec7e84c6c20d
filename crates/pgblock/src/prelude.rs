//! Convenient imports for typical `pgblock` usage.
//!
//! ```ignore
//! use pgblock::prelude::*;
//! ```

pub use crate::{
    Block, BlockError, BlockResult, Column, Comparable, Constraint, Ident, IntoSql, SqlType,
    and_, join, or_, p, raw, wrap,
};
pub use crate::{Check, Exclude, IndexMethod};
pub use crate::{block, pieces};
