use crate::id3::v1::ID3V1_TAG_SIZE;

/// The tag's format
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagType {
	/// Represents an ID3v1 tag, covering both ID3v1 and ID3v1.1
	Id3v1,
}

impl TagType {
	/// The number of bytes the tag occupies at the end of a file
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::tag::TagType;
	///
	/// assert_eq!(TagType::Id3v1.block_size(), 128);
	/// ```
	pub fn block_size(self) -> u32 {
		match self {
			TagType::Id3v1 => ID3V1_TAG_SIZE as u32,
		}
	}
}
