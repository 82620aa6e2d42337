
//! Resolve the number of bytes a pixel occupies.
//!
//! Generic formats are looked up in the compiled table.
//! Implementation-specific formats are sized by a [`PixelSizeResolver`]
//! that the graphics backend provides and the caller passes in explicitly.

use crate::error::{Error, Result};
use crate::format::{GenericPixelFormat, PixelFormat};


/// Computes the size of implementation-specific pixel formats.
///
/// Receives the unwrapped backend values. Both methods fail by default,
/// so a backend only implements the flavour its API uses:
/// a single format value (like Vulkan), or a format with an additional type (like OpenGL).
/// Errors are returned to the caller unchanged.
pub trait PixelSizeResolver {

    /// Number of bytes of one pixel in this format.
    fn pixel_size(&self, format: u32) -> Result<usize> {
        Err(Error::unsupported(format!(
            "no pixel size known for implementation-specific format {:#x}", format
        )))
    }

    /// Number of bytes of one pixel in this format with this additional type.
    fn pixel_size_with_extra(&self, format: u32, extra: u32) -> Result<usize> {
        Err(Error::unsupported(format!(
            "no pixel size known for implementation-specific format {:#x} with extra {:#x}",
            format, extra
        )))
    }
}


/// Number of bytes one pixel of this format occupies.
///
/// Generic formats use the table and must not have a non-zero extra value.
/// Implementation-specific formats ask the resolver, with or without the extra value,
/// and its answer is used as is.
pub fn pixel_size<R>(format: PixelFormat, extra: Option<u32>, resolver: &R) -> Result<usize>
    where R: PixelSizeResolver + ?Sized
{
    if let Some(generic) = format.generic() {
        return match extra {
            None | Some(0) => Ok(generic.pixel_size()),
            Some(extra) => Err(Error::invalid(format!(
                "generic pixel format {} does not accept the extra value {:#x}", generic, extra
            ))),
        };
    }

    let raw = format.unwrap_raw()?;
    match extra {
        None => resolver.pixel_size(raw),
        Some(extra) => resolver.pixel_size_with_extra(raw, extra),
    }
}


/// Everything required to interpret a pixel: its format,
/// an optional additional backend type, and the number of bytes it occupies.
///
/// Convert a [`GenericPixelFormat`] using `into()`,
/// or use one of the constructors for implementation-specific formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelDescriptor {
    format: PixelFormat,
    format_extra: u32,
    pixel_size: usize,
}

impl PixelDescriptor {

    /// Describe a generic format, with the size from the table.
    pub fn generic(format: GenericPixelFormat) -> Self {
        PixelDescriptor {
            format: format.into(),
            format_extra: 0,
            pixel_size: format.pixel_size(),
        }
    }

    /// Wrap a backend format and ask the resolver for its size.
    pub fn implementation_specific<R>(format: impl Into<u32>, resolver: &R) -> Result<Self>
        where R: PixelSizeResolver + ?Sized
    {
        let format = PixelFormat::wrap(format)?;

        Ok(PixelDescriptor {
            format,
            format_extra: 0,
            pixel_size: pixel_size(format, None, resolver)?,
        })
    }

    /// Wrap a backend format and ask the resolver for its size,
    /// taking the additional backend type into account.
    pub fn implementation_specific_with_extra<R>(
        format: impl Into<u32>, extra: impl Into<u32>, resolver: &R
    ) -> Result<Self>
        where R: PixelSizeResolver + ?Sized
    {
        let format = PixelFormat::wrap(format)?;
        let format_extra = extra.into();

        Ok(PixelDescriptor {
            format, format_extra,
            pixel_size: pixel_size(format, Some(format_extra), resolver)?,
        })
    }

    /// Wrap a backend format and use the declared pixel size without consulting any resolver.
    ///
    /// The size is not checked against the format.
    /// A wrong size is only noticed when the buffer length does not match.
    pub fn manual(format: u32, extra: u32, pixel_size: usize) -> Result<Self> {
        Self::from_parts(PixelFormat::wrap(format)?, extra, pixel_size)
    }

    /// Combine an already wrapped or generic format with the declared pixel size.
    /// Fails if a generic format is combined with a non-zero extra value.
    pub fn from_parts(format: PixelFormat, format_extra: u32, pixel_size: usize) -> Result<Self> {
        if let Some(generic) = format.generic() {
            if format_extra != 0 {
                return Err(Error::invalid(format!(
                    "generic pixel format {} does not accept the extra value {:#x}", generic, format_extra
                )));
            }
        }

        log::debug!("using unchecked pixel size {} for {} (extra {:#x})", pixel_size, format, format_extra);
        Ok(PixelDescriptor { format, format_extra, pixel_size })
    }

    /// The generic or wrapped format.
    pub fn format(&self) -> PixelFormat { self.format }

    /// The additional backend type, or zero.
    pub fn format_extra(&self) -> u32 { self.format_extra }

    /// Number of bytes one pixel occupies.
    pub fn pixel_size(&self) -> usize { self.pixel_size }
}

impl From<GenericPixelFormat> for PixelDescriptor {
    fn from(format: GenericPixelFormat) -> Self {
        PixelDescriptor::generic(format)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    /// Knows one format with one extra type, and counts how often it was asked.
    #[derive(Default)]
    struct CountingResolver {
        calls: Cell<usize>,
    }

    impl PixelSizeResolver for CountingResolver {
        fn pixel_size_with_extra(&self, format: u32, extra: u32) -> Result<usize> {
            self.calls.set(self.calls.get() + 1);

            match (format, extra) {
                (666, 1337) => Ok(6),
                _ => Err(Error::invalid(format!("unknown format {} and type {}", format, extra))),
            }
        }
    }

    #[test]
    fn generic_formats_skip_resolver() {
        let resolver = CountingResolver::default();
        let size = pixel_size(GenericPixelFormat::Rgb16Float.into(), None, &resolver).unwrap();

        assert_eq!(size, 6);
        assert_eq!(resolver.calls.get(), 0);
    }

    #[test]
    fn generic_formats_reject_extra() {
        let resolver = CountingResolver::default();
        let format = PixelFormat::from(GenericPixelFormat::R8Unorm);

        assert_eq!(pixel_size(format, Some(0), &resolver), Ok(1));
        assert!(matches!(pixel_size(format, Some(3), &resolver), Err(Error::Invalid(_))));
        assert!(PixelDescriptor::from_parts(format, 3, 1).is_err());
    }

    #[test]
    fn resolver_answer_is_used_verbatim() {
        let resolver = CountingResolver::default();
        let descriptor = PixelDescriptor::implementation_specific_with_extra(666_u32, 1337_u32, &resolver).unwrap();

        assert_eq!(descriptor.pixel_size(), 6);
        assert_eq!(descriptor.format_extra(), 1337);
        assert_eq!(descriptor.format(), PixelFormat::wrap(666_u32).unwrap());
        assert_eq!(resolver.calls.get(), 1);
    }

    #[test]
    fn resolver_errors_are_propagated() {
        let resolver = CountingResolver::default();

        let error = PixelDescriptor::implementation_specific_with_extra(1_u32, 2_u32, &resolver).unwrap_err();
        assert_eq!(error, Error::invalid("unknown format 1 and type 2"));

        // this resolver only supports formats with an extra type
        let error = PixelDescriptor::implementation_specific(666_u32, &resolver).unwrap_err();
        assert!(matches!(error, Error::NotSupported(_)));
    }

    #[test]
    fn dynamic_resolver() {
        let resolver: &dyn PixelSizeResolver = &CountingResolver::default();
        let descriptor = PixelDescriptor::implementation_specific_with_extra(666_u32, 1337_u32, resolver);
        assert_eq!(descriptor.map(|descriptor| descriptor.pixel_size()), Ok(6));
    }

    #[test]
    fn manual_size_is_not_checked() {
        let descriptor = PixelDescriptor::manual(666, 1337, 6).unwrap();
        assert_eq!(descriptor.format(), PixelFormat::wrap(666_u32).unwrap());
        assert_eq!(descriptor.format_extra(), 1337);
        assert_eq!(descriptor.pixel_size(), 6);

        let descriptor = PixelDescriptor::from_parts(GenericPixelFormat::Rgba8Unorm.into(), 0, 3).unwrap();
        assert_eq!(descriptor.pixel_size(), 3);

        assert!(PixelDescriptor::manual(1 << 31, 0, 4).is_err());
    }
}
