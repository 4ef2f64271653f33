//! Type check of curated corpora
use std::path::PathBuf;

use structopt::StructOpt;

use crate::{cli::Runnable, error::Error, impls::TweetCsv, ops::NormalizeTypes};

#[derive(StructOpt, Debug)]
pub struct CheckTypes {
    #[structopt(help = "Corpus file to check (CSV with text and label columns)")]
    src: PathBuf,
    #[structopt(
        short,
        long,
        help = "Treat the input as headerless with text,label columns (curated corpus format)"
    )]
    no_headers: bool,
}

impl Runnable for CheckTypes {
    fn run(&self) -> Result<(), Error> {
        let rows = TweetCsv::normalize_types(&self.src, !self.no_headers)?;
        info!("{} rows have string-typed text and label", rows.len());
        Ok(())
    }
}
