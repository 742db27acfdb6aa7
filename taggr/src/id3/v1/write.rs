use super::constants::{EXTENDED_MARKER, ID3V1_TAG_MARKER, ID3V1_TAG_SIZE};
use super::tag::Id3v1Tag;
use crate::config::WriteOptions;
use crate::error::{Result, TaggrError};
use crate::util::text::latin1_encode;

use std::io::{Cursor, Write};

use byteorder::WriteBytesExt;

// The widest text field
const MAX_FIELD_SIZE: usize = 30;

pub(super) fn encode(
	tag: &Id3v1Tag,
	write_options: WriteOptions,
) -> Result<[u8; ID3V1_TAG_SIZE]> {
	fn write_text<W: Write>(
		writer: &mut W,
		value: &str,
		size: usize,
		write_options: WriteOptions,
	) -> Result<()> {
		let mut field = [0; MAX_FIELD_SIZE];

		let encoded = latin1_encode(value, write_options.lossy_text_encoding).take(size);
		for (slot, b) in field.iter_mut().zip(encoded) {
			*slot = b?;
		}

		writer.write_all(&field[..size]).map_err(TaggrError::write)
	}

	log::debug!("Encoding ID3v1 tag");

	let mut writer = Cursor::new([0; ID3V1_TAG_SIZE]);

	writer
		.write_all(&ID3V1_TAG_MARKER)
		.map_err(TaggrError::write)?;

	write_text(&mut writer, &tag.title, 30, write_options)?;
	write_text(&mut writer, &tag.artist, 30, write_options)?;
	write_text(&mut writer, &tag.album, 30, write_options)?;
	write_text(&mut writer, &tag.year, 4, write_options)?;

	// Always an ID3v1.1 tag, a legacy comment loses its last 2 bytes
	write_text(&mut writer, tag.comment.text(), 28, write_options)?;
	writer
		.write_u8(EXTENDED_MARKER)
		.map_err(TaggrError::write)?;
	writer
		.write_u8(tag.comment.track())
		.map_err(TaggrError::write)?;

	writer.write_u8(tag.genre).map_err(TaggrError::write)?;

	Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
	use crate::config::{ParseOptions, WriteOptions};
	use crate::id3::v1::{GENRE_UNKNOWN, Id3v1Comment, Id3v1Tag, genre_index};
	use crate::tag::Accessor;

	fn field(text: &str, width: usize) -> Vec<u8> {
		let mut out = text.as_bytes().to_vec();
		out.resize(width, 0);
		out
	}

	fn scenario_block() -> Vec<u8> {
		let mut block = b"TAG".to_vec();
		block.extend(field("Title", 30));
		block.extend(field("Artist", 30));
		block.extend(field("Album", 30));
		block.extend(b"2024");
		block.extend(field("Hi", 28));
		block.extend([b'0', 5, genre_index("Rock")]);
		block
	}

	#[test_log::test]
	fn scenario_round_trip() {
		let block = scenario_block();

		let tag = Id3v1Tag::parse(&block, ParseOptions::new()).unwrap();
		let encoded = tag.encode(WriteOptions::new()).unwrap();

		assert_eq!(encoded.as_slice(), block.as_slice());
	}

	#[test_log::test]
	fn layout() {
		let tag = Id3v1Tag {
			title: String::from("T"),
			artist: String::from("A"),
			album: String::from("B"),
			year: String::from("1999"),
			comment: Id3v1Comment::Extended {
				comment: String::from("C"),
				track: 9,
			},
			genre: 3,
		};

		let block = tag.encode(WriteOptions::new()).unwrap();
		assert_eq!(&block[..3], b"TAG");
		assert_eq!(block[3], b'T');
		assert_eq!(block[33], b'A');
		assert_eq!(block[63], b'B');
		assert_eq!(&block[93..97], b"1999");
		assert_eq!(block[97], b'C');
		assert!(block[98..125].iter().all(|b| *b == 0));
		assert_eq!(block[125], b'0');
		assert_eq!(block[126], 9);
		assert_eq!(block[127], 3);
	}

	#[test_log::test]
	fn legacy_is_upgraded() {
		let tag = Id3v1Tag {
			comment: Id3v1Comment::Legacy(String::from("This comment is thirty bytes!!")),
			..Id3v1Tag::default()
		};
		assert_eq!(tag.comment().len(), 30);

		let block = tag.encode(WriteOptions::new()).unwrap();
		assert_eq!(&block[97..125], b"This comment is thirty bytes");
		assert_eq!(block[125], b'0');
		assert_eq!(block[126], 0);
		assert_eq!(block[127], GENRE_UNKNOWN);

		let reparsed = Id3v1Tag::parse(&block, ParseOptions::new()).unwrap();
		assert_eq!(
			reparsed.comment,
			Id3v1Comment::Extended {
				comment: String::from("This comment is thirty bytes"),
				track: 0,
			}
		);
	}

	#[test_log::test]
	fn long_fields_are_truncated() {
		let long = "x".repeat(64);

		let mut tag = Id3v1Tag::new();
		tag.set_title(long.clone());
		tag.set_artist(long.clone());
		tag.set_album(long.clone());
		tag.set_year(String::from("20245"));
		tag.set_comment(long);

		let block = tag.encode(WriteOptions::new()).unwrap();
		let reparsed = Id3v1Tag::parse(&block, ParseOptions::new()).unwrap();

		assert_eq!(reparsed.title, "x".repeat(30));
		assert_eq!(reparsed.artist, "x".repeat(30));
		assert_eq!(reparsed.album, "x".repeat(30));
		assert_eq!(reparsed.year, "2024");
		assert_eq!(reparsed.comment(), "x".repeat(28));
	}

	#[test_log::test]
	fn encode_is_idempotent() {
		let mut tag = Id3v1Tag::new();
		tag.set_title(String::from("Foo title"));
		tag.set_comment(String::from("A comment longer than twenty-eight bytes"));
		tag.set_genre("Jazz");

		let first = tag.encode(WriteOptions::new()).unwrap();
		let second = Id3v1Tag::parse(&first, ParseOptions::new())
			.unwrap()
			.encode(WriteOptions::new())
			.unwrap();

		assert_eq!(first, second);
	}

	#[test_log::test]
	fn verbatim_fields_are_idempotent() {
		let block = scenario_block();
		let options = ParseOptions::new().strip_padding(false);

		let tag = Id3v1Tag::parse(&block, options).unwrap();
		let encoded = tag.encode(WriteOptions::new()).unwrap();

		assert_eq!(encoded.as_slice(), block.as_slice());
		assert_eq!(Id3v1Tag::parse(&encoded, options).unwrap(), tag);
	}
}
