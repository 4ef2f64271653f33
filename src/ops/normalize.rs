/*! Keyword-to-taxonomy label normalization.

Derives a disaster category from the free-text `keyword` of each raw row and
keeps the rows whose derived label belongs to the taxonomy.
!*/
use std::path::Path;

use serde::Serialize;

use crate::error::Error;

/// A curated corpus row: the tweet text plus its taxonomy label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CuratedRecord {
    pub text: String,
    pub label: String,
}

/// Row counts of a normalization run, for auditability.
///
/// `read == accepted + rejected` always holds on a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    pub read: usize,
    pub accepted: usize,
    pub rejected: usize,
}

pub trait NormalizeLabels {
    /// Derive taxonomy labels for the raw corpus at `src` and write accepted
    /// rows to `dst`, headerless, in input order.
    ///
    /// Accepted rows are buffered and written in one pass at the end, so a
    /// failed run never leaves a partially written destination. With
    /// `truncate` unset the destination is appended to: running twice against
    /// the same raw corpus duplicates every accepted row.
    fn normalize_labels(src: &Path, dst: &Path, truncate: bool)
        -> Result<NormalizeReport, Error>;
}
