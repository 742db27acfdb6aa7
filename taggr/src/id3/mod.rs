//! ID3 specific items
//!
//! Only ID3v1 is supported, see [`v1`].

pub mod v1;

use crate::config::ParseOptions;
use crate::error::{Result, TaggrError};
use v1::{ID3V1_TAG_SIZE, Id3v1Tag};

use std::io::{Read, Seek, SeekFrom};

/// Search for an ID3v1 tag at the end of `data`
///
/// A stream that is too small, or doesn't end in a tag, is not an error.
pub(crate) fn find_id3v1<R>(
	data: &mut R,
	parse_options: ParseOptions,
) -> Result<Option<Id3v1Tag>>
where
	R: Read + Seek,
{
	log::debug!("Searching for an ID3v1 tag");

	let stream_len = data.seek(SeekFrom::End(0)).map_err(TaggrError::seek)?;

	// Reader is too small to contain an ID3v1 tag
	if stream_len < ID3V1_TAG_SIZE as u64 {
		log::debug!("Stream is too small to contain an ID3v1 tag ({stream_len} bytes)");
		return Ok(None);
	}

	data.seek(SeekFrom::End(-(ID3V1_TAG_SIZE as i64)))
		.map_err(TaggrError::seek)?;

	let mut id3v1_tag = [0; ID3V1_TAG_SIZE];
	data.read_exact(&mut id3v1_tag).map_err(TaggrError::read)?;

	let tag = Id3v1Tag::parse(&id3v1_tag, parse_options);
	match tag {
		Some(_) => log::debug!("Found an ID3v1 tag"),
		None => log::debug!("No ID3v1 tag found"),
	}

	Ok(tag)
}

#[cfg(test)]
mod tests {
	use super::find_id3v1;
	use crate::config::{ParseOptions, WriteOptions};
	use crate::id3::v1::Id3v1Tag;
	use crate::tag::Accessor;

	use std::io::Cursor;

	#[test_log::test]
	fn find_at_end_of_stream() {
		let mut tag = Id3v1Tag::new();
		tag.set_title(String::from("Foo title"));

		let mut data = vec![0xFF; 1000];
		data.extend(tag.encode(WriteOptions::new()).unwrap());

		let found = find_id3v1(&mut Cursor::new(data), ParseOptions::new()).unwrap();
		assert_eq!(found, Some(tag));
	}

	#[test_log::test]
	fn small_stream_has_no_tag() {
		let mut data = Cursor::new(b"TAG".to_vec());
		assert_eq!(find_id3v1(&mut data, ParseOptions::new()).unwrap(), None);

		let mut data = Cursor::new(Vec::new());
		assert_eq!(find_id3v1(&mut data, ParseOptions::new()).unwrap(), None);
	}

	#[test_log::test]
	fn untagged_stream() {
		let mut data = Cursor::new(vec![0; 4096]);
		assert_eq!(find_id3v1(&mut data, ParseOptions::new()).unwrap(), None);
	}
}
