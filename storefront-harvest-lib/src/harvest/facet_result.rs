use serde::{Deserialize, Serialize};

/// Outcome of fetching one optional facet of an item.
///
/// Absence is a first-class value: a facet that failed or was never requested is
/// recorded explicitly instead of being left out of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum FacetResult<T> {
    /// The facet was fetched successfully.
    Found(T),

    /// The facet fetch failed; carries the reason.
    Unavailable(String),

    /// The facet was not attempted for this item.
    Skipped,
}

impl<T> FacetResult<T> {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Maps a `Found` value, passing `Unavailable` and `Skipped` through unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FacetResult<U> {
        match self {
            Self::Found(data) => FacetResult::Found(f(data)),
            Self::Unavailable(reason) => FacetResult::Unavailable(reason),
            Self::Skipped => FacetResult::Skipped,
        }
    }
}

impl<T, E: core::fmt::Display> From<Result<T, E>> for FacetResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Found(data),
            Err(e) => Self::Unavailable(e.to_string()),
        }
    }
}
