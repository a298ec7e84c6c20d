use super::{Constraint, Expression, required_name};
use crate::error::{BlockError, BlockResult};
use crate::ident::Ident;
use crate::index::IndexMethod;
use crate::sql::{Block, IntoSql, join, raw};
use crate::{block, wrap};

/// One `<element> WITH <operator>` entry of an exclusion constraint.
#[derive(Debug, Clone)]
pub struct ExcludeElement {
    target: Block,
    operator: String,
}

impl ExcludeElement {
    pub fn target(&self) -> &Block {
        &self.target
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }
}

/// An exclusion constraint:
/// `CONSTRAINT <name> EXCLUDE USING <method> ( <col> WITH <op> , ... ) [WHERE ( <filter> )]`.
///
/// # Example
/// ```ignore
/// use pgblock::constraint::{Constraint, Exclude};
/// use pgblock::IndexMethod;
///
/// let no_double_booking = Exclude::new([("room", "="), ("during", "&&")])?
///     .using(IndexMethod::Gist)?
///     .filter("NOT cancelled")
///     .with_name("bookings_no_overlap")?;
///
/// assert_eq!(
///     no_double_booking.render()?.render_no_params(),
///     "CONSTRAINT bookings_no_overlap EXCLUDE USING gist ( room WITH = , during WITH && ) WHERE ( NOT cancelled )"
/// );
/// # Ok::<(), pgblock::BlockError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Exclude {
    name: Option<Ident>,
    using: IndexMethod,
    elements: Vec<ExcludeElement>,
    filter: Option<Block>,
}

impl Exclude {
    /// Create an exclusion constraint over `(element, operator)` pairs, using
    /// B-tree.
    ///
    /// Elements may be columns, composed blocks or raw SQL strings; operators
    /// are trusted SQL text. Fails if there are no elements or an operator is
    /// blank.
    pub fn new<E, O>(elements: impl IntoIterator<Item = (E, O)>) -> BlockResult<Self>
    where
        E: Into<Expression>,
        O: Into<String>,
    {
        let elements = elements
            .into_iter()
            .map(|(target, operator)| {
                let operator: String = operator.into();
                if operator.trim().is_empty() {
                    return Err(BlockError::validation(
                        "Exclusion element operator cannot be empty",
                    ));
                }
                Ok(ExcludeElement {
                    target: target.into().into_block(),
                    operator,
                })
            })
            .collect::<BlockResult<Vec<_>>>()?;

        if elements.is_empty() {
            return Err(BlockError::EmptyExclusion);
        }

        Ok(Self {
            name: None,
            using: IndexMethod::Btree,
            elements,
            filter: None,
        })
    }

    /// Choose the index method. GIN and BRIN cannot back an exclusion
    /// constraint and are rejected.
    pub fn using(mut self, method: IndexMethod) -> BlockResult<Self> {
        if !method.supports_exclusion() {
            return Err(BlockError::UnsupportedIndexMethod(format!(
                "{method} cannot back an exclusion constraint"
            )));
        }
        self.using = method;
        Ok(self)
    }

    /// Choose the index method by name, e.g. from a schema file.
    pub fn using_name(self, method: &str) -> BlockResult<Self> {
        self.using(method.parse()?)
    }

    /// Only apply the constraint to rows matching `predicate`.
    pub fn filter(mut self, predicate: impl Into<Expression>) -> Self {
        self.filter = Some(predicate.into().into_block());
        self
    }

    pub fn index_method(&self) -> IndexMethod {
        self.using
    }

    pub fn elements(&self) -> &[ExcludeElement] {
        &self.elements
    }

    pub fn predicate(&self) -> Option<&Block> {
        self.filter.as_ref()
    }

    /// Render the constraint clause.
    pub fn render(&self) -> BlockResult<Block> {
        let name = required_name(self.kind(), self.name.as_ref())?;

        let elements = self.elements.iter().map(|element| {
            block![
                element.target.clone(),
                raw("WITH"),
                raw(element.operator.clone())
            ]
            .into_sql()
        });

        let mut sql = block![
            raw("CONSTRAINT"),
            name.to_block(),
            raw("EXCLUDE USING"),
            raw(self.using.as_str()),
            join(raw(","), elements, true),
        ];
        if let Some(filter) = &self.filter {
            sql.push_block(block![raw("WHERE"), wrap![filter.clone()]]);
        }
        Ok(sql)
    }
}

impl Constraint for Exclude {
    fn kind(&self) -> &'static str {
        "exclusion"
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
