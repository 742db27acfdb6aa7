// Shorthand for return Err(TaggrError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(TaggrError::new(ErrorKind::Variant))
// - err!(Variant(Value))   -> return Err(TaggrError::new(ErrorKind::Variant(Value)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::TaggrError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::TaggrError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use err;
