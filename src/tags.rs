//! Tag reading: a small seam over the audio tag library.
//!
//! Reading a tag never fails from the caller's point of view. A file without
//! any tag structure and a tag without the wanted field are both routine on
//! real music folders, so they come back as `FieldLookup` variants rather
//! than errors.

mod model;
mod read;

#[cfg(test)]
pub mod memory;

pub use model::*;
pub use read::LoftyReader;
