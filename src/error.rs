
//! Error type definitions.

use std::borrow::Cow;
use std::fmt;
use std::error;

/// A result that may contain a pixel image error.
pub type Result<T> = std::result::Result<T, Error>;

/// A result that, if ok, contains nothing, and otherwise contains a pixel image error.
pub type UnitResult = Result<()>;


/// An error that may happen while describing or constructing an image.
/// Size resolvers supplied by a graphics backend return this type as well,
/// and their errors are handed to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {

    /// The requested combination of format, layout and data cannot describe a valid image,
    /// for example because the buffer length does not match the computed size.
    Invalid(Cow<'static, str>),

    /// The format is valid, but cannot be handled,
    /// for example because a size resolver does not know it.
    NotSupported(Cow<'static, str>),
}

impl Error {

    /// Create an error of the variant `Invalid`.
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Error::Invalid(message.into())
    }

    /// Create an error of the variant `NotSupported`.
    pub fn unsupported(message: impl Into<Cow<'static, str>>) -> Self {
        Error::NotSupported(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Invalid(message) => write!(formatter, "invalid image: {}", message),
            Error::NotSupported(message) => write!(formatter, "not supported: {}", message),
        }
    }
}

impl error::Error for Error {}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_includes_message() {
        let error = Error::invalid("buffer too small");
        assert_eq!(error.to_string(), "invalid image: buffer too small");

        let error = Error::unsupported(format!("format {}", 42));
        assert_eq!(error.to_string(), "not supported: format 42");
    }
}
