//! Configuration loader and schema types.
//!
//! Settings are loaded once at startup and passed explicitly into the
//! enumerator, namer and relocator.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
