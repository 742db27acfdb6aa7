/// Options to control how Taggr parses a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) strip_padding: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	strip_padding: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			strip_padding: true,
		}
	}

	/// Whether or not to strip the NUL padding from text fields
	///
	/// Text fields occupy a fixed number of bytes, and are padded with NUL bytes. When enabled,
	/// everything from the first NUL byte onward is dropped. When disabled, fields are kept verbatim
	/// at their full width, padding included.
	///
	/// Trailing whitespace is never stripped, as it may be intentional.
	///
	/// # Examples
	///
	/// ```rust
	/// use taggr::config::ParseOptions;
	///
	/// // I want the raw field contents
	/// let parsing_options = ParseOptions::new().strip_padding(false);
	/// ```
	pub fn strip_padding(&mut self, strip_padding: bool) -> Self {
		self.strip_padding = strip_padding;
		*self
	}
}
