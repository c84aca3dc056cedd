//! Search query description.

use std::fmt;

/// Default similarity threshold for fuzzy queries.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 80;

/// How a keyword is matched against a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Value and keyword are equal after case normalization.
    Exact,
    /// Keyword is a contiguous substring of the value.
    Partial,
    /// Value scores at or above the fuzzy threshold.
    Fuzzy,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::Fuzzy => "fuzzy",
        };
        f.write_str(label)
    }
}

/// One search request against one dataset column.
///
/// The threshold only applies to [`MatchMode::Fuzzy`]; other modes ignore it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
    pub column: String,
    pub mode: MatchMode,
    pub case_sensitive: bool,
    pub fuzzy_threshold: u8,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, column: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            keyword: keyword.into(),
            column: column.into(),
            mode,
            case_sensitive: false,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    #[must_use]
    pub fn case_sensitive(mut self, enable: bool) -> Self {
        self.case_sensitive = enable;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }
}
