//! Commands enum

use structopt::StructOpt;

use crate::check_types::CheckTypes;
use crate::error::Error;
use crate::filter_target::FilterTarget;
use crate::normalize::NormalizeCorpus;

/// Runnable traits have to be implemented by commands
/// in order to be executed from CLI.
pub trait Runnable {
    fn run(&self) -> Result<(), Error>;
}

#[derive(StructOpt, Debug)]
#[structopt(
    name = "disaster-tools",
    about = "Curation tools for disaster tweet corpora"
)]
pub enum DisasterTools {
    #[structopt(about = "Map raw tweet keywords onto the disaster taxonomy")]
    Normalize(NormalizeCorpus),
    #[structopt(about = "Drop non-disaster rows (target == 0)")]
    Filter(FilterTarget),
    #[structopt(about = "Ensure text and label columns are uniform strings")]
    CheckTypes(CheckTypes),
}

impl Runnable for DisasterTools {
    fn run(&self) -> Result<(), Error> {
        match self {
            DisasterTools::Normalize(cmd) => cmd.run(),
            DisasterTools::Filter(cmd) => cmd.run(),
            DisasterTools::CheckTypes(cmd) => cmd.run(),
        }
    }
}
