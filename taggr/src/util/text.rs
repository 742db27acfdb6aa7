/// Errors that can occur while encoding text
///
/// Tags only store single-byte (Latin-1) text, so any character above `U+00FF` can't be written
/// without substitution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextEncodingError {
	valid_up_to: usize,
}

impl TextEncodingError {
	/// The character index in the provided string up to which the encoding was valid
	pub fn valid_up_to(&self) -> usize {
		self.valid_up_to
	}
}

impl core::fmt::Display for TextEncodingError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(
			f,
			"invalid Latin-1 sequence from index {}",
			self.valid_up_to
		)
	}
}

impl core::error::Error for TextEncodingError {}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

pub(crate) fn latin1_encode(
	s: &str,
	lossy: bool,
) -> impl Iterator<Item = std::result::Result<u8, TextEncodingError>> {
	s.chars().enumerate().map(move |(index, c)| {
		if (c as u32) <= 255 {
			Ok(c as u8)
		} else if lossy {
			log::warn!("Substituting non Latin-1 character {c:?} with '?'");
			Ok(b'?')
		} else {
			Err(TextEncodingError {
				valid_up_to: index, // All characters up to this point are single-byte
			})
		}
	})
}

#[cfg(test)]
mod tests {
	use super::{latin1_decode, latin1_encode};

	#[test_log::test]
	fn latin1_is_one_byte_per_char() {
		assert_eq!(latin1_decode(b"Caf\xE9"), "Café");

		let encoded = latin1_encode("Café", false)
			.collect::<Result<Vec<u8>, _>>()
			.unwrap();
		assert_eq!(encoded, b"Caf\xE9");
	}

	#[test_log::test]
	fn latin1_lossy() {
		let encoded = latin1_encode("l—fty", true)
			.collect::<Result<Vec<u8>, _>>()
			.unwrap();
		assert_eq!(encoded, b"l?fty");

		let err = latin1_encode("l—fty", false)
			.collect::<Result<Vec<u8>, _>>()
			.unwrap_err();
		assert_eq!(err.valid_up_to(), 1);
	}
}
