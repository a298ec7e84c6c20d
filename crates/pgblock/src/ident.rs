//! Validated SQL identifiers.
//!
//! Identifiers cannot be sent as bind parameters, so anything that ends up in
//! SQL text as a name (constraint names, column references) goes through
//! [`Ident`] first.
//!
//! - Unquoted parts must match `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow anything except NUL; `"` is escaped as `""`
//!
//! # Example
//! ```ignore
//! use pgblock::{Column, Comparable, Ident};
//!
//! let name = Ident::parse("booking_no_overlap")?;
//! let during = Column::new(r#"public."Booking".during"#)?;
//! let overlaps = during.op("&&", pgblock::p(slot));
//! # Ok::<(), pgblock::BlockError>(())
//! ```

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{BlockError, BlockResult};
use crate::sql::{Block, Comparable, IntoSql, Sql, raw};

/// One dot-separated segment of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentPart {
    Unquoted(String),
    Quoted(String),
}

/// A SQL identifier such as `users`, `public.users` or `"Odd Name".id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    parts: Vec<IdentPart>,
}

impl Ident {
    /// Parse an identifier, accepting dotted, quoted and mixed forms.
    pub fn parse(s: &str) -> BlockResult<Self> {
        if s.is_empty() {
            return Err(BlockError::validation("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(BlockError::validation(
                "Identifier cannot contain NUL character",
            ));
        }

        let mut chars = s.chars().peekable();
        let mut parts = vec![parse_part(&mut chars)?];
        while let Some(c) = chars.next() {
            if c != '.' {
                return Err(BlockError::validation(format!(
                    "Expected '.' between identifier parts, got '{c}'"
                )));
            }
            if chars.peek().is_none() {
                return Err(BlockError::validation("Trailing '.' in identifier"));
            }
            parts.push(parse_part(&mut chars)?);
        }

        Ok(Self { parts })
    }

    /// Build a single quoted identifier from an arbitrary name.
    pub fn quoted(name: &str) -> BlockResult<Self> {
        if name.is_empty() {
            return Err(BlockError::validation("Empty quoted identifier"));
        }
        if name.contains('\0') {
            return Err(BlockError::validation(
                "Identifier cannot contain NUL character",
            ));
        }
        Ok(Self {
            parts: vec![IdentPart::Quoted(name.to_owned())],
        })
    }

    pub fn parts(&self) -> &[IdentPart] {
        &self.parts
    }

    /// The identifier as it appears in SQL text.
    pub fn to_sql(&self) -> String {
        self.to_string()
    }

    /// The identifier as a raw block. Safe because the text was validated.
    pub fn to_block(&self) -> Block {
        raw(self.to_sql())
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match part {
                IdentPart::Unquoted(name) => f.write_str(name)?,
                IdentPart::Quoted(name) => write!(f, "\"{}\"", name.replace('"', "\"\""))?,
            }
        }
        Ok(())
    }
}

fn parse_part(chars: &mut Peekable<Chars<'_>>) -> BlockResult<IdentPart> {
    if chars.peek() == Some(&'"') {
        chars.next();
        return parse_quoted(chars);
    }
    parse_unquoted(chars)
}

fn parse_quoted(chars: &mut Peekable<Chars<'_>>) -> BlockResult<IdentPart> {
    let mut name = String::new();
    loop {
        match chars.next() {
            Some('"') if chars.peek() == Some(&'"') => {
                chars.next();
                name.push('"');
            }
            Some('"') => break,
            Some(c) => name.push(c),
            None => return Err(BlockError::validation("Unclosed quoted identifier")),
        }
    }
    if name.is_empty() {
        return Err(BlockError::validation("Empty quoted identifier"));
    }
    Ok(IdentPart::Quoted(name))
}

fn parse_unquoted(chars: &mut Peekable<Chars<'_>>) -> BlockResult<IdentPart> {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c == '.' {
            break;
        }
        let allowed = if name.is_empty() {
            c == '_' || c.is_ascii_alphabetic()
        } else {
            c == '_' || c == '$' || c.is_ascii_alphanumeric()
        };
        if !allowed {
            let what = if name.is_empty() { "start character" } else { "character" };
            return Err(BlockError::validation(format!(
                "Invalid identifier {what}: '{c}'"
            )));
        }
        name.push(c);
        chars.next();
    }
    if name.is_empty() {
        return Err(BlockError::validation("Empty identifier segment"));
    }
    Ok(IdentPart::Unquoted(name))
}

/// Convert an input into an [`Ident`].
pub trait IntoIdent {
    fn into_ident(self) -> BlockResult<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> BlockResult<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> BlockResult<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> BlockResult<Ident> {
        Ident::parse(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> BlockResult<Ident> {
        Ident::parse(&self)
    }
}

/// A reference to a table column.
///
/// This is the smallest capability-exposing type: its block is the column's
/// identifier, so it takes part in every [`Comparable`] operator and can be
/// used anywhere a block is accepted.
#[derive(Debug, Clone)]
pub struct Column {
    ident: Ident,
}

impl Column {
    pub fn new(ident: impl IntoIdent) -> BlockResult<Self> {
        Ok(Self {
            ident: ident.into_ident()?,
        })
    }

    pub fn ident(&self) -> &Ident {
        &self.ident
    }
}

impl Comparable for Column {
    fn to_block(&self) -> Block {
        self.ident.to_block()
    }
}

impl IntoSql for Column {
    fn into_sql(self) -> Sql {
        Sql::Block(self.to_block())
    }
}

impl IntoSql for &Column {
    fn into_sql(self) -> Sql {
        Sql::Block(self.to_block())
    }
}
