//! Keyword rewrite policy and normalization over the raw tweet corpus.
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Error;
use crate::ops::{CuratedRecord, NormalizeLabels, NormalizeReport};
use crate::taxonomy;

use super::{column_index, field, TweetCsv};

/// Matches against the capitalized keyword.
enum Predicate {
    /// Keyword equals one of these exactly.
    Equals(&'static [&'static str]),
    /// Keyword contains the needle. Case-sensitive, and evaluated against the
    /// already-capitalized keyword: "FLOOD" capitalizes to "Flood", which
    /// does not contain "flood". Historical behavior of the curated corpora,
    /// kept as-is on purpose.
    Contains(&'static str),
}

enum Outcome {
    Label(&'static str),
    /// Ambiguous keyword, decided by the tweet text (see [hint_from_text]).
    InspectText,
}

/// The rewrite policy, evaluated in order, first match wins.
const REWRITE_RULES: [(Predicate, Outcome); 7] = [
    (Predicate::Equals(&["Aftershock"]), Outcome::Label("Earthquake")),
    (
        Predicate::Equals(&["Bridge collapse"]),
        Outcome::Label("Damaged Infrastructure"),
    ),
    (
        Predicate::Equals(&["Buildings burning", "Buildings on fire"]),
        Outcome::Label("Urban Fire"),
    ),
    (
        Predicate::Equals(&["Burning", "Burned", "Bush fires"]),
        Outcome::Label("Wild Fire"),
    ),
    (Predicate::Equals(&["Catastrophic"]), Outcome::InspectText),
    (Predicate::Contains("flood"), Outcome::Label("Water Disaster")),
    (Predicate::Contains("wild"), Outcome::Label("Wild Fire")),
];

impl Predicate {
    fn matches(&self, keyword: &str) -> bool {
        match self {
            Predicate::Equals(candidates) => candidates.contains(&keyword),
            Predicate::Contains(needle) => keyword.contains(needle),
        }
    }
}

/// Uppercases the first character and lowercases the rest, like the
/// capitalization the corpus keywords were originally normalized with.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Disambiguates a `Catastrophic` keyword from the tweet text.
/// "fire" takes precedence over "earthquake"; both checks are case-sensitive.
fn hint_from_text(text: &str) -> Option<&'static str> {
    if text.contains("fire") {
        Some("Wild Fire")
    } else if text.contains("earthquake") {
        Some("Earthquake")
    } else {
        None
    }
}

/// Derives the candidate label for a raw row.
///
/// The result is not necessarily a taxonomy member: keywords no rule rewrites
/// come back capitalized but otherwise untouched, and the caller decides
/// whether they pass the membership check.
pub(crate) fn derive_label(keyword: &str, text: &str) -> String {
    let keyword = capitalize(keyword);
    for (predicate, outcome) in &REWRITE_RULES {
        if predicate.matches(&keyword) {
            return match outcome {
                Outcome::Label(label) => (*label).to_string(),
                Outcome::InspectText => match hint_from_text(text) {
                    Some(label) => label.to_string(),
                    // stays "Catastrophic" and fails the taxonomy check
                    None => keyword,
                },
            };
        }
    }
    keyword
}

impl NormalizeLabels for TweetCsv {
    fn normalize_labels(
        src: &Path,
        dst: &Path,
        truncate: bool,
    ) -> Result<NormalizeReport, Error> {
        let mut rdr = csv::Reader::from_path(src)?;
        let headers = rdr.headers()?;
        let keyword_col = column_index(headers, "keyword")?;
        let text_col = column_index(headers, "text")?;

        let mut report = NormalizeReport::default();
        let mut accepted: Vec<CuratedRecord> = Vec::new();
        for (idx, record) in rdr.records().enumerate() {
            let record = record?;
            let row = idx + 1;
            report.read += 1;

            let keyword = field(&record, keyword_col, row, "keyword")?;
            let text = field(&record, text_col, row, "text")?;

            let label = derive_label(keyword, text);
            if taxonomy::is_label(&label) {
                accepted.push(CuratedRecord {
                    text: text.to_string(),
                    label,
                });
                report.accepted += 1;
            } else {
                debug!("row {}: keyword {:?} maps outside the taxonomy", row, keyword);
                report.rejected += 1;
            }
        }

        // single bulk write, after the whole read: a run that aborts on a
        // malformed row leaves the destination untouched
        let file = if truncate {
            OpenOptions::new().write(true).create(true).truncate(true).open(dst)?
        } else {
            OpenOptions::new().append(true).create(true).open(dst)?
        };
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));
        for record in &accepted {
            wtr.serialize(record)?;
        }
        wtr.flush()?;

        Ok(report)
    }
}
