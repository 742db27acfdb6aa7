//! The fixed ID3v1 genre list
//!
//! A genre is stored as a single byte index into [`GENRES`]. The order of the list is
//! part of the format and can never change.

/// The genre index meaning "no recognized genre"
pub const GENRE_UNKNOWN: u8 = 255;

/// The classic ID3v1 genre list, indices 0 through 79
pub const GENRES: [&str; 80] = [
	"Blues",
	"Classic Rock",
	"Country",
	"Dance",
	"Disco",
	"Funk",
	"Grunge",
	"Hip-Hop",
	"Jazz",
	"Metal",
	"New Age",
	"Oldies",
	"Other",
	"Pop",
	"Rhythm and Blues",
	"Rap",
	"Reggae",
	"Rock",
	"Techno",
	"Industrial",
	"Alternative",
	"Ska",
	"Death Metal",
	"Pranks",
	"Soundtrack",
	"Euro-Techno",
	"Ambient",
	"Trip-Hop",
	"Vocal",
	"Jazz & Funk",
	"Fusion",
	"Trance",
	"Classical",
	"Instrumental",
	"Acid",
	"House",
	"Game",
	"Sound Clip",
	"Gospel",
	"Noise",
	"Alternative Rock",
	"Bass",
	"Soul",
	"Punk",
	"Space",
	"Meditative",
	"Instrumental Pop",
	"Instrumental Rock",
	"Ethnic",
	"Gothic",
	"Darkwave",
	"Techno-Industrial",
	"Electronic",
	"Pop-Folk",
	"Eurodance",
	"Dream",
	"Southern Rock",
	"Comedy",
	"Cult",
	"Gangsta",
	"Top 40",
	"Christian Rap",
	"Pop/Funk",
	"Jungle",
	"Native American",
	"Cabaret",
	"New Wave",
	"Psychedelic",
	"Rave",
	"Showtunes",
	"Trailer",
	"Lo-Fi",
	"Tribal",
	"Acid Punk",
	"Acid Jazz",
	"Polka",
	"Retro",
	"Musical",
	"Rock & Roll",
	"Hard Rock",
];

/// Get the name of the genre at `index`
///
/// Indices outside of [`GENRES`] (including [`GENRE_UNKNOWN`]) have no name.
///
/// # Examples
///
/// ```rust
/// use taggr::id3::v1::genre_name;
///
/// assert_eq!(genre_name(17), Some("Rock"));
/// assert_eq!(genre_name(200), None);
/// ```
pub fn genre_name(index: u8) -> Option<&'static str> {
	GENRES.get(usize::from(index)).copied()
}

/// Get the index of the genre named `name`
///
/// The name must match exactly (case-sensitive). If there is no match, this will return [`GENRE_UNKNOWN`].
///
/// # Examples
///
/// ```rust
/// use taggr::id3::v1::{GENRE_UNKNOWN, genre_index};
///
/// assert_eq!(genre_index("Rock"), 17);
/// assert_eq!(genre_index("rock"), GENRE_UNKNOWN);
/// ```
pub fn genre_index(name: &str) -> u8 {
	GENRES
		.iter()
		.position(|genre| *genre == name)
		.map_or(GENRE_UNKNOWN, |index| index as u8)
}

#[cfg(test)]
mod tests {
	use super::{GENRE_UNKNOWN, GENRES, genre_index, genre_name};

	#[test_log::test]
	fn genre_bounds() {
		assert_eq!(genre_name(0), Some("Blues"));
		assert_eq!(genre_name(79), Some("Hard Rock"));
		assert_eq!(genre_name(80), None);
		assert_eq!(genre_name(GENRE_UNKNOWN), None);
	}

	#[test_log::test]
	fn genre_order() {
		assert_eq!("Darkwave", GENRES[50]);
		assert_eq!(genre_index("Rock"), 17);
		assert_eq!(genre_index("Hard Rock"), 79);
	}

	#[test_log::test]
	fn genre_lookup_is_exact() {
		assert_eq!(genre_index("Hip-Hop"), 7);
		assert_eq!(genre_index("hip-hop"), GENRE_UNKNOWN);
		assert_eq!(genre_index("Hip"), GENRE_UNKNOWN);
		assert_eq!(genre_index(""), GENRE_UNKNOWN);
	}

	#[test_log::test]
	fn every_name_round_trips() {
		for (index, name) in GENRES.iter().enumerate() {
			assert_eq!(usize::from(genre_index(name)), index);
			assert_eq!(genre_name(index as u8), Some(*name));
		}
	}
}
