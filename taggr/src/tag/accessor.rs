// This defines the `Accessor` trait, used to define unified getters/setters for the
// values every tag holds.
//
// Usage:
//
// accessor_trait! {
//     text_field_name, ...
// }
//
// Every listed name gets a `&str` getter, and a setter taking an owned `String`.
// The numeric fields are defined by hand.
macro_rules! accessor_trait {
	($($name:ident),+ $(,)?) => {
		/// Provides accessors for the values of a tag
		///
		/// All methods operate on the in-memory tag. Nothing is written until the tag is saved,
		/// see [`TaggedFile::close`](crate::file::TaggedFile::close).
		///
		/// Setters do not validate their input. Values that are too wide for their field are
		/// truncated when the tag is written.
		pub trait Accessor {
			$(
				paste::paste! {
					#[doc = "Returns the " $name "."]
					fn $name(&self) -> &str;

					#[doc = "Sets the " $name "."]
					fn [<set_ $name>](&mut self, value: String);
				}
			)+

			/// Returns the track number, 0 if the tag has none.
			fn track(&self) -> u8;

			/// Sets the track number.
			fn set_track(&mut self, value: u8);

			/// Returns the name of the genre, if the stored index is a known genre.
			fn genre(&self) -> Option<&str>;

			/// Sets the genre by name.
			///
			/// The name must match a known genre exactly, otherwise the genre is set to
			/// [`GENRE_UNKNOWN`](crate::id3::v1::GENRE_UNKNOWN).
			fn set_genre(&mut self, genre: &str);

			/// Returns the raw genre index.
			fn genre_index(&self) -> u8;

			/// Sets the raw genre index, without validation.
			fn set_genre_index(&mut self, index: u8);
		}
	};
}

accessor_trait! {
	title, artist, album, year, comment,
}

// Implements `Accessor` by forwarding every method to another `Accessor`
//
// Usage:
//
// impl Accessor for Foo {
//     delegate_accessor!(getter_method, mutable_getter_method);
// }
//
// where both methods return a `&dyn Accessor` / `&mut dyn Accessor`.
macro_rules! delegate_accessor {
	($inner:ident, $inner_mut:ident) => {
		fn title(&self) -> &str {
			self.$inner().title()
		}

		fn set_title(&mut self, value: String) {
			self.$inner_mut().set_title(value)
		}

		fn artist(&self) -> &str {
			self.$inner().artist()
		}

		fn set_artist(&mut self, value: String) {
			self.$inner_mut().set_artist(value)
		}

		fn album(&self) -> &str {
			self.$inner().album()
		}

		fn set_album(&mut self, value: String) {
			self.$inner_mut().set_album(value)
		}

		fn year(&self) -> &str {
			self.$inner().year()
		}

		fn set_year(&mut self, value: String) {
			self.$inner_mut().set_year(value)
		}

		fn comment(&self) -> &str {
			self.$inner().comment()
		}

		fn set_comment(&mut self, value: String) {
			self.$inner_mut().set_comment(value)
		}

		fn track(&self) -> u8 {
			self.$inner().track()
		}

		fn set_track(&mut self, value: u8) {
			self.$inner_mut().set_track(value)
		}

		fn genre(&self) -> Option<&str> {
			self.$inner().genre()
		}

		fn set_genre(&mut self, genre: &str) {
			self.$inner_mut().set_genre(genre)
		}

		fn genre_index(&self) -> u8 {
			self.$inner().genre_index()
		}

		fn set_genre_index(&mut self, index: u8) {
			self.$inner_mut().set_genre_index(index)
		}
	};
}

pub(crate) use delegate_accessor;
