#![doc = include_str!("../README.md")]
#[macro_use]
extern crate log;

mod check_types;
mod cli;
mod error;
mod filter_target;
mod impls;
mod normalize;
mod ops;
mod taxonomy;

use cli::DisasterTools;
use cli::Runnable;
use env_logger::Env;
use structopt::StructOpt;

fn main() -> Result<(), error::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // get options from args
    let opt = DisasterTools::from_args();

    // run command
    opt.run()?;

    Ok(())
}
