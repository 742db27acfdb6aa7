//! Read and write the ID3v1 tag at the end of audio files.
//!
//! # Supported Formats
//!
//! | Tag        | Read | Write |
//! |------------|------|-------|
//! | ID3v1      | ✓    | ✗     |
//! | ID3v1.1    | ✓    | ✓     |
//!
//! ID3v1 tags are read, but always written back as ID3v1.1, see [`Id3v1Comment`](id3::v1::Id3v1Comment).
//!
//! # Examples
//!
//! ## Editing a file's tag
//!
//! ```rust,no_run
//! use taggr::file::TaggedFile;
//! use taggr::prelude::*;
//!
//! # fn main() -> taggr::error::Result<()> {
//! let mut file = TaggedFile::open("song.mp3")?;
//!
//! println!("Title: {}", file.title());
//! println!("Track: {}", file.track());
//! println!("Genre: {}", file.genre().unwrap_or("Unknown"));
//!
//! file.set_artist(String::from("Foo artist"));
//! file.set_genre("Jazz");
//!
//! // Nothing is written until the file is closed
//! file.close()?;
//! # Ok(()) }
//! ```
//!
//! ## Working with a tag block directly
//!
//! ```rust
//! use taggr::config::{ParseOptions, WriteOptions};
//! use taggr::id3::v1::Id3v1Tag;
//! use taggr::prelude::*;
//!
//! # fn main() -> taggr::error::Result<()> {
//! let mut tag = Id3v1Tag::new();
//! tag.set_title(String::from("Foo title"));
//! tag.set_track(1);
//!
//! let block = tag.encode(WriteOptions::default())?;
//! assert_eq!(block.len(), 128);
//!
//! let parsed = Id3v1Tag::parse(&block, ParseOptions::default());
//! assert_eq!(parsed, Some(tag));
//! # Ok(()) }
//! ```
//!
//! # Concurrency
//!
//! Everything is synchronous and single threaded. A [`TaggedFile`](file::TaggedFile) assumes it
//! has exclusive access to its file, no locking is done.

pub mod config;
pub mod error;
pub mod file;
pub(crate) mod macros;
pub mod tag;
mod util;

pub mod id3;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use taggr::prelude::*;
	//! ```

	pub use crate::tag::{Accessor, TagExt};
}
