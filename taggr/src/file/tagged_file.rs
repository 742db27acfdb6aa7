use crate::config::{ParseOptions, WriteOptions};
use crate::error::{Result, TaggrError};
use crate::id3::find_id3v1;
use crate::macros::err;
use crate::tag::{Accessor, FileTag, TagExt, TagType, delegate_accessor};

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// A file, along with the tag read from its end
///
/// The tag can be freely modified, either through [`TaggedFile::tag_mut`] or the [`Accessor`]
/// methods on the file itself. Nothing is written until [`TaggedFile::close`], which overwrites
/// the tag in place. Dropping a `TaggedFile` without closing it discards any changes.
///
/// A `TaggedFile` owns its handle for its entire lifetime. No locking is done, so it is up to the
/// caller to ensure nothing else modifies the file while it is open.
///
/// # Examples
///
/// ```rust,no_run
/// use taggr::file::TaggedFile;
/// use taggr::tag::Accessor;
///
/// # fn main() -> taggr::error::Result<()> {
/// let mut file = TaggedFile::open("song.mp3")?;
/// println!("Old title: {}", file.title());
///
/// file.set_title(String::from("New title"));
/// file.set_genre("Rock");
///
/// file.close()?;
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct TaggedFile<F = File> {
	file: F,
	tag: FileTag,
}

impl TaggedFile<File> {
	/// Open the file at `path` for reading and writing, and read its tag
	///
	/// See [`TaggedFile::open_with_options`].
	///
	/// # Errors
	///
	/// See [`TaggedFile::open_with_options`]
	pub fn open<P>(path: P) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		Self::open_with_options(path, ParseOptions::default())
	}

	/// Open the file at `path` for reading and writing, and read its tag with the provided options
	///
	/// # Errors
	///
	/// * [`ErrorKind::Open`](crate::error::ErrorKind::Open) if the file can't be opened for reading and writing
	/// * [`ErrorKind::UnknownFormat`](crate::error::ErrorKind::UnknownFormat) if the file doesn't end in a tag
	/// * [`ErrorKind::Seek`](crate::error::ErrorKind::Seek) or [`ErrorKind::Read`](crate::error::ErrorKind::Read)
	///   if reading the tag fails
	pub fn open_with_options<P>(path: P, parse_options: ParseOptions) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Opening `{}` for tag editing", path.display());

		let file = OpenOptions::new()
			.read(true)
			.write(true)
			.open(path)
			.map_err(TaggrError::open)?;

		Self::read_from(file, parse_options)
	}
}

impl<F> TaggedFile<F>
where
	F: Read + Write + Seek,
{
	/// Read the tag from the end of an already opened handle
	///
	/// The handle must allow both reading and writing for [`TaggedFile::close`] to succeed.
	///
	/// # Errors
	///
	/// * [`ErrorKind::UnknownFormat`](crate::error::ErrorKind::UnknownFormat) if `file` doesn't end in a tag
	/// * [`ErrorKind::Seek`](crate::error::ErrorKind::Seek) or [`ErrorKind::Read`](crate::error::ErrorKind::Read)
	///   if reading the tag fails
	///
	/// # Examples
	///
	/// ```rust
	/// use std::io::Cursor;
	///
	/// use taggr::config::{ParseOptions, WriteOptions};
	/// use taggr::file::TaggedFile;
	/// use taggr::id3::v1::Id3v1Tag;
	/// use taggr::tag::Accessor;
	///
	/// # fn main() -> taggr::error::Result<()> {
	/// let mut content = vec![0; 512];
	/// content.extend(Id3v1Tag::new().encode(WriteOptions::default())?);
	///
	/// let mut cursor = Cursor::new(content);
	/// let mut file = TaggedFile::read_from(&mut cursor, ParseOptions::default())?;
	/// file.set_artist(String::from("Foo artist"));
	/// file.close()?;
	///
	/// assert_eq!(&cursor.get_ref()[512 + 33..512 + 36], b"Foo");
	/// # Ok(()) }
	/// ```
	pub fn read_from(mut file: F, parse_options: ParseOptions) -> Result<Self> {
		let Some(id3v1) = find_id3v1(&mut file, parse_options)? else {
			err!(UnknownFormat);
		};

		Ok(Self {
			file,
			tag: FileTag::Id3v1(id3v1),
		})
	}

	/// Write the tag back to the file, and release the handle
	///
	/// See [`TaggedFile::close_with_options`].
	///
	/// # Errors
	///
	/// See [`TaggedFile::close_with_options`]
	pub fn close(self) -> Result<()> {
		self.close_with_options(WriteOptions::default())
	}

	/// Write the tag back to the file with the provided options, and release the handle
	///
	/// The tag is encoded in full before anything is written, and replaces the last
	/// [`TagExt::size`] bytes of the file. The handle is released regardless of the outcome.
	///
	/// # Errors
	///
	/// * [`ErrorKind::TextEncode`](crate::error::ErrorKind::TextEncode), nothing is written
	/// * [`ErrorKind::Seek`](crate::error::ErrorKind::Seek), for example if the file has shrunk
	///   below the size of the tag since it was opened. Nothing is written.
	/// * [`ErrorKind::Write`](crate::error::ErrorKind::Write), the tag may be partially written
	pub fn close_with_options(self, write_options: WriteOptions) -> Result<()> {
		let Self { mut file, tag } = self;

		let tag_size = tag.size();

		let mut block = Vec::with_capacity(tag_size as usize);
		tag.dump_to(&mut block, write_options)?;

		log::debug!("Writing {:?} tag ({tag_size} bytes)", tag.tag_type());

		file.seek(SeekFrom::End(-i64::from(tag_size)))
			.map_err(TaggrError::seek)?;
		file.write_all(&block).map_err(TaggrError::write)?;
		file.flush().map_err(TaggrError::write)?;

		Ok(())
	}
}

impl<F> TaggedFile<F> {
	/// Returns a reference to the tag
	pub fn tag(&self) -> &FileTag {
		&self.tag
	}

	/// Returns a mutable reference to the tag
	///
	/// Changes are only written once the file is closed.
	pub fn tag_mut(&mut self) -> &mut FileTag {
		&mut self.tag
	}

	/// Returns the [`TagType`] of the tag
	pub fn tag_type(&self) -> TagType {
		self.tag.tag_type()
	}

	fn accessor(&self) -> &dyn Accessor {
		&self.tag
	}

	fn accessor_mut(&mut self) -> &mut dyn Accessor {
		&mut self.tag
	}
}

impl<F> Accessor for TaggedFile<F> {
	delegate_accessor!(accessor, accessor_mut);
}

#[cfg(test)]
mod tests {
	use super::TaggedFile;
	use crate::config::{ParseOptions, WriteOptions};
	use crate::error::ErrorKind;
	use crate::id3::v1::Id3v1Tag;
	use crate::tag::{Accessor, TagType};

	use std::io::Cursor;

	fn tagged_content() -> Vec<u8> {
		let mut tag = Id3v1Tag::new();
		tag.set_title(String::from("Foo title"));
		tag.set_genre("Blues");

		let mut content = vec![0xFF; 256];
		content.extend(tag.encode(WriteOptions::new()).unwrap());
		content
	}

	#[test_log::test]
	fn read_and_write_in_memory() {
		let mut cursor = Cursor::new(tagged_content());

		let mut file = TaggedFile::read_from(&mut cursor, ParseOptions::new()).unwrap();
		assert_eq!(file.tag_type(), TagType::Id3v1);
		assert_eq!(file.title(), "Foo title");
		assert_eq!(file.genre(), Some("Blues"));

		file.set_title(String::from("Bar title"));
		file.set_track(2);
		file.close().unwrap();

		let content = cursor.into_inner();
		assert_eq!(content.len(), 256 + 128);
		assert!(content[..256].iter().all(|b| *b == 0xFF));

		let tag = Id3v1Tag::parse(&content[256..], ParseOptions::new()).unwrap();
		assert_eq!(tag.title, "Bar title");
		assert_eq!(tag.track(), 2);
		assert_eq!(tag.genre, 0);
	}

	#[test_log::test]
	fn no_io_until_close() {
		let original = tagged_content();
		let mut cursor = Cursor::new(original.clone());

		let mut file = TaggedFile::read_from(&mut cursor, ParseOptions::new()).unwrap();
		file.set_album(String::from("Baz album"));
		drop(file);

		assert_eq!(cursor.into_inner(), original);
	}

	#[test_log::test]
	fn untagged_is_unknown_format() {
		let mut cursor = Cursor::new(vec![0; 1024]);

		let err = TaggedFile::read_from(&mut cursor, ParseOptions::new()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::UnknownFormat));
	}

	#[test_log::test]
	fn encoding_failure_writes_nothing() {
		let original = tagged_content();
		let mut cursor = Cursor::new(original.clone());

		let mut file = TaggedFile::read_from(&mut cursor, ParseOptions::new()).unwrap();
		file.set_artist(String::from("l—fty"));

		let err = file
			.close_with_options(WriteOptions::new().lossy_text_encoding(false))
			.unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::TextEncode(_)));

		assert_eq!(cursor.into_inner(), original);
	}

	#[test_log::test]
	fn shrunk_stream_fails_to_seek() {
		let mut cursor = Cursor::new(tagged_content());

		let mut file = TaggedFile::read_from(&mut cursor, ParseOptions::new()).unwrap();
		file.set_title(String::from("Bar title"));

		// Simulate the file shrinking while open
		file.file.get_mut().truncate(64);

		let err = file.close().unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::Seek(_)));

		assert_eq!(cursor.into_inner().len(), 64);
	}
}
