//! Operation traits
//!
//! Implemented for corpus formats under [crate::impls].
mod filter_rows;
mod normalize;
mod normalize_types;
pub(crate) use filter_rows::FilterRows;
pub(crate) use normalize::{CuratedRecord, NormalizeLabels, NormalizeReport};
pub(crate) use normalize_types::NormalizeTypes;
