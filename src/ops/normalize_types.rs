//! Type normalization of curated corpora.

use std::path::Path;

use crate::error::Error;

use super::normalize::CuratedRecord;

pub trait NormalizeTypes {
    /// Materialize every row's `text` and `label` as owned strings.
    ///
    /// Purely in-memory: nothing is written back, callers persist the result
    /// themselves if they need to. With `has_headers` unset the columns are
    /// bound positionally as `text,label` (the curated corpus is headerless).
    fn normalize_types(src: &Path, has_headers: bool) -> Result<Vec<CuratedRecord>, Error>;
}
