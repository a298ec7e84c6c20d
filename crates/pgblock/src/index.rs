//! Index access methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BlockError;

/// A PostgreSQL index access method (`USING <method>`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMethod {
    #[default]
    Btree,
    Hash,
    Gist,
    SpGist,
    Gin,
    Brin,
}

impl IndexMethod {
    pub const ALL: [IndexMethod; 6] = [
        IndexMethod::Btree,
        IndexMethod::Hash,
        IndexMethod::Gist,
        IndexMethod::SpGist,
        IndexMethod::Gin,
        IndexMethod::Brin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexMethod::Btree => "btree",
            IndexMethod::Hash => "hash",
            IndexMethod::Gist => "gist",
            IndexMethod::SpGist => "spgist",
            IndexMethod::Gin => "gin",
            IndexMethod::Brin => "brin",
        }
    }

    /// Whether the method can back an `EXCLUDE` constraint.
    ///
    /// Postgres needs an access method with plain index scans (`amgettuple`),
    /// which rules out GIN and BRIN.
    pub fn supports_exclusion(&self) -> bool {
        !matches!(self, IndexMethod::Gin | IndexMethod::Brin)
    }
}

impl fmt::Display for IndexMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexMethod {
    type Err = BlockError;

    /// Parse a method name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BlockError::UnsupportedIndexMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_methods_case_insensitively() {
        assert_eq!("btree".parse::<IndexMethod>().unwrap(), IndexMethod::Btree);
        assert_eq!("GiST".parse::<IndexMethod>().unwrap(), IndexMethod::Gist);
        assert_eq!(" spgist ".parse::<IndexMethod>().unwrap(), IndexMethod::SpGist);
    }

    #[test]
    fn rejects_unknown_methods() {
        assert_eq!(
            "rum".parse::<IndexMethod>().unwrap_err(),
            BlockError::UnsupportedIndexMethod("rum".into())
        );
    }

    #[test]
    fn exclusion_support() {
        let supported: Vec<_> = IndexMethod::ALL
            .into_iter()
            .filter(IndexMethod::supports_exclusion)
            .collect();
        assert_eq!(
            supported,
            [IndexMethod::Btree, IndexMethod::Hash, IndexMethod::Gist, IndexMethod::SpGist]
        );
    }

    #[test]
    fn serializes_as_lowercase_names() {
        let json = serde_json::to_string(&IndexMethod::SpGist).unwrap();
        assert_eq!(json, "\"spgist\"");
        let back: IndexMethod = serde_json::from_str("\"gist\"").unwrap();
        assert_eq!(back, IndexMethod::Gist);
    }
}
