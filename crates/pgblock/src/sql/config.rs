use serde::{Deserialize, Serialize};

/// Placeholder syntax emitted for bound parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// `$1, $2, ...` (PostgreSQL, `tokio-postgres`)
    #[default]
    Dollar,
    /// `:1, :2, ...`
    Colon,
    /// `?` for every parameter; order alone binds them
    Question,
}

/// Configuration for [`Renderer`](super::Renderer).
///
/// Deserializes with defaults for missing fields, so a schema layer can embed
/// it in its own config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Placeholder syntax. Defaults to `$n`.
    pub placeholder: PlaceholderStyle,
    /// Truncate SQL echoed to logs (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: PlaceholderStyle::Dollar,
            max_sql_length: Some(200),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: PlaceholderStyle) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set maximum SQL length to display in log events.
    pub fn with_max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }
}
