//! Label normalization of the raw tweet corpus
use std::path::PathBuf;

use structopt::StructOpt;

use crate::{cli::Runnable, error::Error, impls::TweetCsv, ops::NormalizeLabels};

#[derive(StructOpt, Debug)]
pub struct NormalizeCorpus {
    #[structopt(help = "Raw tweet corpus (CSV with keyword, text and target columns)")]
    src: PathBuf,
    #[structopt(help = "Curated corpus destination (headerless text,label CSV)")]
    dst: PathBuf,
    #[structopt(
        short,
        long,
        help = "Truncate the destination before writing instead of appending"
    )]
    truncate: bool,
}

impl Runnable for NormalizeCorpus {
    fn run(&self) -> Result<(), Error> {
        if !self.truncate && self.dst.exists() {
            warn!(
                "{:?} exists and will be appended to: accepted rows duplicate on reruns",
                self.dst
            );
        }
        let report = TweetCsv::normalize_labels(&self.src, &self.dst, self.truncate)?;
        info!(
            "{} rows read, {} accepted, {} rejected",
            report.read, report.accepted, report.rejected
        );
        Ok(())
    }
}
