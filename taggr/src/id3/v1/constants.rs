use std::ops::Range;

/// Size of an ID3v1 tag block, in bytes
pub const ID3V1_TAG_SIZE: usize = 128;

pub(crate) const ID3V1_TAG_MARKER: [u8; 3] = *b"TAG";

// Field ranges, relative to the start of the block
pub(super) const TITLE: Range<usize> = 3..33;
pub(super) const ARTIST: Range<usize> = 33..63;
pub(super) const ALBUM: Range<usize> = 63..93;
pub(super) const YEAR: Range<usize> = 93..97;
pub(super) const LEGACY_COMMENT: Range<usize> = 97..127;
pub(super) const EXTENDED_COMMENT: Range<usize> = 97..125;

pub(super) const EXTENDED_MARKER_OFFSET: usize = 125;
pub(super) const TRACK_OFFSET: usize = 126;
pub(super) const GENRE_OFFSET: usize = 127;

/// The byte marking an ID3v1.1 (extended) block
///
/// NOTE: This is an ASCII `'0'`, *not* a NUL byte. Blocks written by tools using a NUL byte
///       here are read as plain ID3v1, with the track number as part of the comment.
pub(super) const EXTENDED_MARKER: u8 = b'0';
