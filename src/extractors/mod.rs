//! Candidate extraction: entity decoding, URL scanning, classification and
//! page metadata lookup.

mod classifier;
mod entities;
mod metadata;
mod scanner;

pub use classifier::*;
pub use entities::*;
pub use metadata::*;
pub use scanner::*;
