use super::constants::ID3V1_TAG_SIZE;
use super::genre::{GENRE_UNKNOWN, genre_index, genre_name};
use crate::config::WriteOptions;
use crate::error::{Result, TaggrError};
use crate::tag::{Accessor, TagExt, TagType};

use std::io::Write;

macro_rules! impl_accessor {
	($($name:ident,)+) => {
		paste::paste! {
			$(
				fn $name(&self) -> &str {
					&self.$name
				}

				fn [<set_ $name>](&mut self, value: String) {
					self.$name = value
				}
			)+
		}
	}
}

/// The comment field, and the track number that may share its space
///
/// A V1 tag spends 30 bytes on its comment. A V1.1 (extended) tag gives up the last
/// two of those bytes for a marker and a track number.
///
/// Reading accepts both layouts, but **Taggr** will *always* write an extended tag. Writing a
/// `Legacy` comment truncates it to 28 bytes, and stores a track number of 0.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Id3v1Comment {
	/// An ID3v1 comment, 30 bytes max
	Legacy(String),
	/// An ID3v1.1 comment, 28 bytes max, followed by a track number
	Extended {
		/// The comment text
		comment: String,
		/// The track number
		track: u8,
	},
}

impl Default for Id3v1Comment {
	fn default() -> Self {
		Self::Extended {
			comment: String::new(),
			track: 0,
		}
	}
}

impl Id3v1Comment {
	/// The comment text, regardless of the layout
	pub fn text(&self) -> &str {
		match self {
			Self::Legacy(comment) | Self::Extended { comment, .. } => comment,
		}
	}

	/// The track number, 0 for a `Legacy` comment
	pub fn track(&self) -> u8 {
		match self {
			Self::Legacy(_) => 0,
			Self::Extended { track, .. } => *track,
		}
	}

	/// Whether this comment uses the extended (ID3v1.1) layout
	pub fn is_extended(&self) -> bool {
		matches!(self, Self::Extended { .. })
	}

	fn set_text(&mut self, value: String) {
		match self {
			Self::Legacy(comment) | Self::Extended { comment, .. } => *comment = value,
		}
	}

	fn set_track(&mut self, value: u8) {
		match self {
			Self::Legacy(comment) => {
				*self = Self::Extended {
					comment: std::mem::take(comment),
					track: value,
				}
			},
			Self::Extended { track, .. } => *track = value,
		}
	}
}

/// An ID3v1 tag
///
/// ID3v1 is a severely limited format, with each field
/// being incredibly small in size. All fields have been
/// commented with their maximum sizes and any other additional
/// restrictions.
///
/// Attempting to write a field greater than the maximum size
/// will **not** error, it will just be shrunk.
///
/// Text is stored as single-byte Latin-1, see [`WriteOptions::lossy_text_encoding`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// Track title, 30 bytes max
	pub title: String,
	/// Track artist, 30 bytes max
	pub artist: String,
	/// Album title, 30 bytes max
	pub album: String,
	/// Release year, 4 bytes max
	///
	/// This is expected to be numeric, but it is not validated.
	pub year: String,
	/// The comment, and possibly the track number
	pub comment: Id3v1Comment,
	/// The track's genre, 1 byte
	///
	/// ID3v1 has a predefined set of genres, see [`GENRES`](crate::id3::v1::GENRES).
	/// This byte should be an index to a genre, anything else is treated as unknown.
	pub genre: u8,
}

impl Default for Id3v1Tag {
	fn default() -> Self {
		Self {
			title: String::new(),
			artist: String::new(),
			album: String::new(),
			year: String::new(),
			comment: Id3v1Comment::default(),
			genre: GENRE_UNKNOWN,
		}
	}
}

impl Id3v1Tag {
	/// Create a new empty `Id3v1Tag`
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::id3::v1::{GENRE_UNKNOWN, Id3v1Tag};
	/// use taggr::tag::Accessor;
	///
	/// let id3v1_tag = Id3v1Tag::new();
	/// assert_eq!(id3v1_tag.title(), "");
	/// assert_eq!(id3v1_tag.genre_index(), GENRE_UNKNOWN);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether the tag will be written in the extended layout as-is
	///
	/// This is `false` for tags read from a plain ID3v1 block that haven't had a
	/// track number set. They are upgraded on write regardless.
	pub fn is_extended(&self) -> bool {
		self.comment.is_extended()
	}

	/// Encode the tag into its 128 byte block
	///
	/// The block is always written in the extended (ID3v1.1) layout.
	///
	/// # Errors
	///
	/// * [`WriteOptions::lossy_text_encoding`] is disabled, and a field contains non Latin-1 text
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::config::WriteOptions;
	/// use taggr::id3::v1::Id3v1Tag;
	/// use taggr::tag::Accessor;
	///
	/// # fn main() -> taggr::error::Result<()> {
	/// let mut tag = Id3v1Tag::new();
	/// tag.set_title(String::from("Foo title"));
	/// tag.set_track(3);
	///
	/// let block = tag.encode(WriteOptions::default())?;
	/// assert_eq!(&block[..3], b"TAG");
	/// assert_eq!(block[126], 3);
	/// # Ok(()) }
	/// ```
	pub fn encode(&self, write_options: WriteOptions) -> Result<[u8; ID3V1_TAG_SIZE]> {
		super::write::encode(self, write_options)
	}
}

impl Accessor for Id3v1Tag {
	impl_accessor!(title, artist, album, year,);

	fn comment(&self) -> &str {
		self.comment.text()
	}

	fn set_comment(&mut self, value: String) {
		self.comment.set_text(value);
	}

	fn track(&self) -> u8 {
		self.comment.track()
	}

	fn set_track(&mut self, value: u8) {
		self.comment.set_track(value);
	}

	fn genre(&self) -> Option<&str> {
		genre_name(self.genre)
	}

	fn set_genre(&mut self, genre: &str) {
		self.genre = genre_index(genre);
	}

	fn genre_index(&self) -> u8 {
		self.genre
	}

	fn set_genre_index(&mut self, index: u8) {
		self.genre = index;
	}
}

impl TagExt for Id3v1Tag {
	#[inline]
	fn tag_type(&self) -> TagType {
		TagType::Id3v1
	}

	fn size(&self) -> u32 {
		ID3V1_TAG_SIZE as u32
	}

	/// Dumps the tag to a writer
	///
	/// # Errors
	///
	/// * [`ErrorKind::TextEncode`](crate::error::ErrorKind::TextEncode), see [`Id3v1Tag::encode`]
	/// * [`ErrorKind::Write`](crate::error::ErrorKind::Write)
	fn dump_to<W: Write>(&self, writer: &mut W, write_options: WriteOptions) -> Result<()> {
		let block = self.encode(write_options)?;
		writer.write_all(&block).map_err(TaggrError::write)
	}

	fn clear(&mut self) {
		*self = Self::default();
	}
}
