//! Editing the tag at the end of a file
//!
//! See [`TaggedFile`].

mod tagged_file;

pub use tagged_file::TaggedFile;
