//! Contains the errors that can arise within Taggr
//!
//! The primary error is [`TaggrError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! Note that a file simply lacking a tag is *not* an error at the codec level, see
//! [`Id3v1Tag::parse`](crate::id3::v1::Id3v1Tag::parse).

pub use crate::util::text::TextEncodingError;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, TaggrError>`
pub type Result<T> = std::result::Result<T, TaggrError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// File format related errors
	/// The trailing block of the file is not a recognized tag
	UnknownFormat,

	// Tag related errors
	/// Errors that arise while encoding text
	TextEncode(TextEncodingError),

	// I/O, split by the operation that failed
	/// The file could not be opened for reading and writing
	Open(std::io::Error),
	/// Seeking to the tag block failed, for example when the file is shorter than the block
	Seek(std::io::Error),
	/// Reading the tag block failed
	Read(std::io::Error),
	/// Writing the tag block failed
	Write(std::io::Error),
}

/// Errors that could occur within Taggr
pub struct TaggrError {
	pub(crate) kind: ErrorKind,
}

impl TaggrError {
	/// Create a `TaggrError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::error::{ErrorKind, TaggrError};
	///
	/// let unknown_format = TaggrError::new(ErrorKind::UnknownFormat);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::error::{ErrorKind, TaggrError};
	///
	/// let unknown_format = TaggrError::new(ErrorKind::UnknownFormat);
	/// if let ErrorKind::UnknownFormat = unknown_format.kind() {
	/// 	println!("No tag here");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	pub(crate) fn open(err: std::io::Error) -> Self {
		Self::new(ErrorKind::Open(err))
	}

	pub(crate) fn seek(err: std::io::Error) -> Self {
		Self::new(ErrorKind::Seek(err))
	}

	pub(crate) fn read(err: std::io::Error) -> Self {
		Self::new(ErrorKind::Read(err))
	}

	pub(crate) fn write(err: std::io::Error) -> Self {
		Self::new(ErrorKind::Write(err))
	}
}

impl std::error::Error for TaggrError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Open(ref err)
			| ErrorKind::Seek(ref err)
			| ErrorKind::Read(ref err)
			| ErrorKind::Write(ref err) => Some(err),
			ErrorKind::TextEncode(ref err) => Some(err),
			ErrorKind::UnknownFormat => None,
		}
	}
}

impl Debug for TaggrError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<TextEncodingError> for TaggrError {
	fn from(input: TextEncodingError) -> Self {
		Self {
			kind: ErrorKind::TextEncode(input),
		}
	}
}

impl Display for TaggrError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::UnknownFormat => write!(
				f,
				"No recognized tag could be found at the end of the provided file"
			),
			ErrorKind::TextEncode(ref message) => write!(f, "Text encoding: {message}"),

			// I/O
			ErrorKind::Open(ref err) => write!(f, "Failed to open file: {err}"),
			ErrorKind::Seek(ref err) => write!(f, "Failed to seek to the tag: {err}"),
			ErrorKind::Read(ref err) => write!(f, "Failed to read the tag: {err}"),
			ErrorKind::Write(ref err) => write!(f, "Failed to write the tag: {err}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{ErrorKind, TaggrError};

	use std::error::Error as _;

	#[test_log::test]
	fn io_errors_keep_their_source() {
		let err = TaggrError::seek(std::io::Error::new(
			std::io::ErrorKind::InvalidInput,
			"negative offset",
		));

		assert!(matches!(err.kind(), ErrorKind::Seek(_)));
		assert!(err.source().is_some());
		assert_eq!(
			err.to_string(),
			"Failed to seek to the tag: negative offset"
		);
	}

	#[test_log::test]
	fn unknown_format_has_no_source() {
		let err = TaggrError::new(ErrorKind::UnknownFormat);
		assert!(err.source().is_none());
	}
}
