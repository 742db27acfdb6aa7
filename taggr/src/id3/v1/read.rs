use super::constants::{
	ALBUM, ARTIST, EXTENDED_COMMENT, EXTENDED_MARKER, EXTENDED_MARKER_OFFSET, GENRE_OFFSET,
	ID3V1_TAG_MARKER, ID3V1_TAG_SIZE, LEGACY_COMMENT, TITLE, TRACK_OFFSET, YEAR,
};
use super::tag::{Id3v1Comment, Id3v1Tag};
use crate::config::ParseOptions;
use crate::util::text::latin1_decode;

impl Id3v1Tag {
	/// Parse an ID3v1 tag from its 128 byte block
	///
	/// A missing tag is not an error. This returns `None` when `block` isn't exactly 128 bytes,
	/// or doesn't start with the `"TAG"` signature.
	///
	/// Both layouts are accepted. If the byte at offset 125 is the extended marker, the comment is
	/// 28 bytes long and followed by a track number, otherwise the comment spans all 30 bytes.
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::config::ParseOptions;
	/// use taggr::id3::v1::Id3v1Tag;
	///
	/// let block = [0; 128];
	/// assert!(Id3v1Tag::parse(&block, ParseOptions::new()).is_none());
	/// ```
	pub fn parse(block: &[u8], parse_options: ParseOptions) -> Option<Self> {
		if block.len() != ID3V1_TAG_SIZE {
			log::debug!(
				"Expected a block of {ID3V1_TAG_SIZE} bytes, got {}",
				block.len()
			);
			return None;
		}

		if block[..3] != ID3V1_TAG_MARKER {
			return None;
		}

		let strip_padding = parse_options.strip_padding;

		let comment = if block[EXTENDED_MARKER_OFFSET] == EXTENDED_MARKER {
			Id3v1Comment::Extended {
				comment: decode_text(&block[EXTENDED_COMMENT], strip_padding),
				track: block[TRACK_OFFSET],
			}
		} else {
			Id3v1Comment::Legacy(decode_text(&block[LEGACY_COMMENT], strip_padding))
		};

		Some(Self {
			title: decode_text(&block[TITLE], strip_padding),
			artist: decode_text(&block[ARTIST], strip_padding),
			album: decode_text(&block[ALBUM], strip_padding),
			year: decode_text(&block[YEAR], strip_padding),
			comment,
			genre: block[GENRE_OFFSET],
		})
	}
}

fn decode_text(data: &[u8], strip_padding: bool) -> String {
	if !strip_padding {
		return latin1_decode(data);
	}

	let mut first_null_pos = data.len();
	if let Some(null_pos) = data.iter().position(|&b| b == 0) {
		if data[null_pos..].iter().any(|b| *b != b'\0') {
			log::warn!("ID3v1 text field contains trailing junk, skipping");
		}

		first_null_pos = null_pos;
	}

	latin1_decode(&data[..first_null_pos])
}
