//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! See also: [`Id3v1Tag`]
//!
//! An ID3v1 tag is a fixed 128 byte block at the very end of a file:
//!
//! | Offset | Size | Field                                       |
//! |--------|------|---------------------------------------------|
//! | 0      | 3    | `"TAG"`                                     |
//! | 3      | 30   | Title                                       |
//! | 33     | 30   | Artist                                      |
//! | 63     | 30   | Album                                       |
//! | 93     | 4    | Year                                        |
//! | 97     | 30   | Comment (28 bytes in ID3v1.1)               |
//! | 125    | 1    | ID3v1.1 only, the extended marker (`'0'`)   |
//! | 126    | 1    | ID3v1.1 only, the track number              |
//! | 127    | 1    | Genre                                       |
//!
//! ## Genres
//!
//! ID3v1 stores the genre in a single byte, indexing into [`GENRES`].
//! Anything outside of the list is an unknown genre, see [`GENRE_UNKNOWN`].
//!
//! ## Track Numbers
//!
//! Only ID3v1.1 tags have a track number, see [`Id3v1Comment`].
//! Tags are always written as ID3v1.1.
pub(crate) mod constants;
pub mod genre;
pub(crate) mod read;
pub(crate) mod tag;
pub(crate) mod write;

pub use constants::ID3V1_TAG_SIZE;
pub use genre::{GENRE_UNKNOWN, GENRES, genre_index, genre_name};
pub use tag::{Id3v1Comment, Id3v1Tag};
