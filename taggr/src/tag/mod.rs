//! Utilities for generic tag handling
//!
//! Every supported tag format implements [`Accessor`] and [`TagExt`]. A file's tag is held
//! as a [`FileTag`], a closed set of the supported formats.

mod accessor;
mod tag_ext;
mod tag_type;

pub use accessor::Accessor;
pub use tag_ext::TagExt;
pub use tag_type::TagType;

pub(crate) use accessor::delegate_accessor;

use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3::v1::Id3v1Tag;

use std::io::Write;

/// A tag read from the end of a file
///
/// Support for new formats extends this enum. Each variant provides its own [`Accessor`]
/// and [`TagExt`] implementation, which `FileTag` dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FileTag {
	/// An ID3v1 (or ID3v1.1) tag
	Id3v1(Id3v1Tag),
}

impl FileTag {
	/// Returns the inner [`Id3v1Tag`], if this is one
	pub fn id3v1(&self) -> Option<&Id3v1Tag> {
		match self {
			Self::Id3v1(tag) => Some(tag),
		}
	}

	/// Returns the inner [`Id3v1Tag`] mutably, if this is one
	pub fn id3v1_mut(&mut self) -> Option<&mut Id3v1Tag> {
		match self {
			Self::Id3v1(tag) => Some(tag),
		}
	}

	fn accessor(&self) -> &dyn Accessor {
		match self {
			Self::Id3v1(tag) => tag,
		}
	}

	fn accessor_mut(&mut self) -> &mut dyn Accessor {
		match self {
			Self::Id3v1(tag) => tag,
		}
	}
}

impl From<Id3v1Tag> for FileTag {
	fn from(input: Id3v1Tag) -> Self {
		Self::Id3v1(input)
	}
}

impl Accessor for FileTag {
	delegate_accessor!(accessor, accessor_mut);
}

impl TagExt for FileTag {
	fn tag_type(&self) -> TagType {
		match self {
			Self::Id3v1(tag) => tag.tag_type(),
		}
	}

	fn size(&self) -> u32 {
		match self {
			Self::Id3v1(tag) => tag.size(),
		}
	}

	fn dump_to<W: Write>(&self, writer: &mut W, write_options: WriteOptions) -> Result<()> {
		match self {
			Self::Id3v1(tag) => tag.dump_to(writer, write_options),
		}
	}

	fn clear(&mut self) {
		match self {
			Self::Id3v1(tag) => tag.clear(),
		}
	}
}
