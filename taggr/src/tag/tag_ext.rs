use crate::config::WriteOptions;
use crate::error::Result;
use crate::tag::{Accessor, TagType};

use std::io::Write;

/// A set of common methods between tags
///
/// This provides a set of methods to make interaction with all tags a similar
/// experience.
pub trait TagExt: Accessor {
	/// Returns the tag's [`TagType`]
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::id3::v1::Id3v1Tag;
	/// use taggr::tag::{TagExt, TagType};
	///
	/// let tag = Id3v1Tag::new();
	///
	/// assert_eq!(tag.tag_type(), TagType::Id3v1);
	/// ```
	fn tag_type(&self) -> TagType;

	/// Returns the number of bytes the encoded tag occupies
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::id3::v1::Id3v1Tag;
	/// use taggr::tag::TagExt;
	///
	/// let tag = Id3v1Tag::new();
	///
	/// assert_eq!(tag.size(), 128);
	/// ```
	fn size(&self) -> u32;

	/// Dumps the encoded tag to a writer
	///
	/// This will only write the tag, it will not attempt to find an existing one
	/// to replace. See [`TaggedFile`](crate::file::TaggedFile) for that.
	///
	/// # Errors
	///
	/// * [`ErrorKind::TextEncode`](crate::error::ErrorKind::TextEncode)
	/// * [`ErrorKind::Write`](crate::error::ErrorKind::Write)
	fn dump_to<W: Write>(&self, writer: &mut W, write_options: WriteOptions) -> Result<()>;

	/// Clear the tag, resetting every value to its default
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::id3::v1::Id3v1Tag;
	/// use taggr::tag::{Accessor, TagExt};
	///
	/// let mut tag = Id3v1Tag::new();
	/// tag.set_title(String::from("Foo title"));
	///
	/// tag.clear();
	///
	/// assert_eq!(tag.title(), "");
	/// ```
	fn clear(&mut self);
}
