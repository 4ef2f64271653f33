//! Fixed taxonomy of disaster categories.
//!
//! The taxonomy is the only set of acceptable `label` values in a curated
//! corpus. Rows whose derived label falls outside of it are dropped.

/// The double space in "Non Damage Buildings and  Street" is part of the
/// label: the curated corpora were built with it, so it has to stay.
pub const LABELS: [&str; 12] = [
    "Earthquake",
    "Drought",
    "Damaged Infrastructure",
    "Human Damage",
    "Human",
    "Land Slide",
    "Non Damage Buildings and  Street",
    "Non Damage Wildlife Forest",
    "Sea",
    "Urban Fire",
    "Wild Fire",
    "Water Disaster",
];

/// Checks taxonomy membership (exact, case-sensitive).
pub fn is_label(candidate: &str) -> bool {
    LABELS.contains(&candidate)
}
