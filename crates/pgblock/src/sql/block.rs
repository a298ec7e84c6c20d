use super::piece::{CLOSE_PAREN, IntoSql, OPEN_PAREN, Param, Piece, Sql};
use super::render::{Rendered, Renderer};
use crate::error::{BlockError, BlockResult};

/// A flattened sequence of raw SQL and parameters.
///
/// Nested blocks are flattened when a block is constructed: their pieces are
/// copied in (surrounded by `(`/`)` if the nested block is wrap-flagged), so a
/// block never contains another block and rendering cost does not depend on
/// how deeply the expression was composed.
///
/// # Example
/// ```ignore
/// use pgblock::{block, raw};
///
/// let q = block![raw("SELECT"), "Hello, World", raw(","), 17];
/// let rendered = q.render();
/// assert_eq!(rendered.sql, "SELECT $1 , $2");
/// ```
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Block {
    pieces: Vec<Piece>,
    wrap: bool,
}

impl Block {
    /// Build an unwrapped block from the given inputs.
    pub fn new(pieces: impl IntoIterator<Item = Sql>) -> Self {
        Self::with_wrap(pieces, false)
    }

    /// Build a block that renders surrounded by parentheses.
    pub fn wrapped(pieces: impl IntoIterator<Item = Sql>) -> Self {
        Self::with_wrap(pieces, true)
    }

    /// Build a block, choosing whether it renders surrounded by parentheses.
    ///
    /// When the only input is itself a block, that block is re-used rather
    /// than nested: its pieces are taken over and the wrap flags are OR-ed, so
    /// re-blocking a wrapped block never produces `( ( ... ) )`.
    pub fn with_wrap(pieces: impl IntoIterator<Item = Sql>, wrap: bool) -> Self {
        let mut inputs: Vec<Sql> = pieces.into_iter().collect();

        if let [Sql::Block(_)] = inputs.as_slice() {
            if let Some(Sql::Block(block)) = inputs.pop() {
                return Self {
                    wrap: block.wrap || wrap,
                    pieces: block.pieces,
                };
            }
        }

        let mut block = Self {
            pieces: Vec::with_capacity(inputs.len()),
            wrap,
        };
        for input in inputs {
            match input {
                Sql::Raw(raw) => block.pieces.push(Piece::Raw(raw)),
                Sql::Param(param) => block.pieces.push(Piece::Param(param)),
                Sql::Block(nested) => nested.flatten_into(&mut block.pieces),
            }
        }
        block
    }

    /// Create an empty, unwrapped block.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrap
    }

    pub fn set_wrap(&mut self, wrap: bool) -> &mut Self {
        self.wrap = wrap;
        self
    }

    /// Consuming counterpart of `set_wrap(true)`.
    pub fn into_wrapped(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// The block's own pieces, without the parentheses its wrap flag adds.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Iterate over the pieces as they would be spliced into a parent.
    ///
    /// `force_wrap` overrides the block's wrap flag when set.
    pub fn iter_pieces(&self, force_wrap: Option<bool>) -> impl Iterator<Item = &Piece> {
        let wrap = force_wrap.unwrap_or(self.wrap);
        let (open, close): (Option<&Piece>, Option<&Piece>) = if wrap {
            (Some(&OPEN_PAREN), Some(&CLOSE_PAREN))
        } else {
            (None, None)
        };
        open.into_iter().chain(self.pieces.iter()).chain(close)
    }

    /// Bound parameters in placeholder order.
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Param(param) => Some(param),
            Piece::Raw(_) => None,
        })
    }

    pub fn param_count(&self) -> usize {
        self.params().count()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Append another block or a single parameter in place.
    ///
    /// Blocks are flattened with their own wrap flag. Anything else, including
    /// plain values, columns and bare raw text, is rejected with
    /// [`BlockError::UnsupportedAppend`]: wrap values with [`p`](super::p)
    /// and text with [`raw`](super::raw) so the intent is explicit at the
    /// call site.
    pub fn append(&mut self, input: impl IntoSql) -> BlockResult<&mut Self> {
        match input.into_appendable()? {
            Sql::Block(block) => Ok(self.push_block(block)),
            Sql::Param(param) => Ok(self.push_param(param)),
            Sql::Raw(_) => Err(BlockError::UnsupportedAppend("raw SQL text")),
        }
    }

    /// Append a block, flattening it with its own wrap flag.
    pub fn push_block(&mut self, block: Block) -> &mut Self {
        block.flatten_into(&mut self.pieces);
        self
    }

    /// Append a single bound parameter.
    pub fn push_param(&mut self, param: Param) -> &mut Self {
        self.pieces.push(Piece::Param(param));
        self
    }

    /// Render with the default [`Renderer`] (`$1, $2, ...` placeholders).
    pub fn render(&self) -> Rendered {
        Renderer::new().render(self)
    }

    /// Render and keep only the SQL text.
    ///
    /// Handy for DDL, where the caller expects no parameters.
    pub fn render_no_params(&self) -> String {
        self.render().sql
    }

    fn flatten_into(self, out: &mut Vec<Piece>) {
        if self.wrap {
            out.reserve(self.pieces.len() + 2);
            out.push(OPEN_PAREN.clone());
            out.extend(self.pieces);
            out.push(CLOSE_PAREN.clone());
        } else {
            out.extend(self.pieces);
        }
    }
}
