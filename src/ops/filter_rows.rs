//! Dropping of non-disaster rows.

use std::path::Path;

use crate::error::Error;

pub trait FilterRows {
    /// Retain rows whose `target` column is non-zero, writing the result
    /// (header included) to `dst`.
    ///
    /// `dst` may equal `src`: the input is read fully before the output is
    /// opened, so in-place overwrite is supported. It is destructive, dropped
    /// rows are gone for good.
    fn filter_rows(src: &Path, dst: &Path) -> Result<(), Error>;
}
