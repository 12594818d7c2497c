//! Candidate enumeration: lists the entries of a source directory.

mod scan;

pub use scan::{list, matches_extension};
