/*! Operation implementations

This module contains implementations for operations ([crate::ops]) on corpus formats.

!*/
mod tweet;

pub use tweet::TweetCsv;
