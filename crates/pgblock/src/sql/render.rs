use std::borrow::Cow;

use tokio_postgres::types::ToSql;

use super::block::Block;
use super::config::{PlaceholderStyle, RenderConfig};
use super::piece::{Param, Piece};

/// The output of rendering: SQL text plus parameters in placeholder order.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub sql: String,
    pub params: Vec<Param>,
}

impl Rendered {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(Param::value).collect()
    }

    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.sql, self.params)
    }

    pub fn is_parameterless(&self) -> bool {
        self.params.is_empty()
    }
}

/// Turns a [`Block`] into SQL text and an ordered parameter list.
///
/// A renderer holds only configuration. Placeholder numbering restarts at 1
/// for every call, so one renderer can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the default configuration (`$n` placeholders).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a block.
    ///
    /// The block's own wrap flag is honoured, pieces are joined by a single
    /// space, and the n-th parameter encountered gets placeholder `n`.
    pub fn render(&self, block: &Block) -> Rendered {
        let mut sql = String::with_capacity(self.estimate_len(block));
        let mut params = Vec::with_capacity(block.param_count());

        for (i, piece) in block.iter_pieces(None).enumerate() {
            if i > 0 {
                sql.push(' ');
            }
            match piece {
                Piece::Raw(raw) => sql.push_str(raw.as_str()),
                Piece::Param(param) => {
                    params.push(param.clone());
                    self.push_placeholder(&mut sql, params.len());
                }
            }
        }

        let rendered = Rendered { sql, params };
        #[cfg(feature = "tracing")]
        self.trace(&rendered);
        rendered
    }

    fn push_placeholder(&self, out: &mut String, idx: usize) {
        match self.config.placeholder {
            PlaceholderStyle::Dollar => {
                out.push('$');
                push_usize(out, idx);
            }
            PlaceholderStyle::Colon => {
                out.push(':');
                push_usize(out, idx);
            }
            PlaceholderStyle::Question => out.push('?'),
        }
    }

    // Pre-size the output buffer (separators + text + placeholders).
    fn estimate_len(&self, block: &Block) -> usize {
        let mut idx = 0;
        let mut cap = 0;
        for piece in block.iter_pieces(None) {
            cap += 1;
            match piece {
                Piece::Raw(raw) => cap += raw.as_str().len(),
                Piece::Param(_) => {
                    idx += 1;
                    cap += 1 + decimal_digits(idx);
                }
            }
        }
        cap
    }

    #[cfg(feature = "tracing")]
    fn trace(&self, rendered: &Rendered) {
        if !tracing::enabled!(target: "pgblock.render", tracing::Level::DEBUG) {
            return;
        }
        tracing::debug!(
            target: "pgblock.render",
            param_count = rendered.params.len(),
            sql = %self.logged_sql(&rendered.sql),
            "rendered block"
        );
    }

    /// SQL as echoed to logs, cut to `max_sql_length` bytes.
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn logged_sql<'a>(&self, sql: &'a str) -> Cow<'a, str> {
        match self.config.max_sql_length {
            Some(max) if sql.len() > max => {
                Cow::Owned(format!("{}...", truncate_sql_bytes(sql, max)))
            }
            _ => Cow::Borrowed(sql),
        }
    }
}

#[inline]
fn decimal_digits(n: usize) -> usize {
    if n < 10 {
        1
    } else if n < 100 {
        2
    } else if n < 1000 {
        3
    } else {
        (n.ilog10() as usize) + 1
    }
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push(char::from(b'0' + n as u8));
        return;
    }
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    out.extend(buf[pos..].iter().map(|&b| char::from(b)));
}

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
