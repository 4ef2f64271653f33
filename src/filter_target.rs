//! Dropping of non-disaster rows (target == 0)
use std::path::PathBuf;

use structopt::StructOpt;

use crate::{cli::Runnable, error::Error, impls::TweetCsv, ops::FilterRows};

#[derive(StructOpt, Debug)]
pub struct FilterTarget {
    #[structopt(help = "Source corpus file (CSV with a target column)")]
    src: PathBuf,
    #[structopt(help = "Destination file. May equal the source (in-place overwrite)")]
    dst: PathBuf,
}

impl Runnable for FilterTarget {
    fn run(&self) -> Result<(), Error> {
        if self.src == self.dst {
            warn!(
                "destination equals source: {:?} is overwritten in place, dropped rows are not recoverable",
                self.src
            );
        }
        TweetCsv::filter_rows(&self.src, &self.dst)?;
        Ok(())
    }
}
