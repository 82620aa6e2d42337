
//! Pixel formats of uncompressed images.
//!
//! A [`PixelFormat`] is a single number that holds either a member of the closed
//! [`GenericPixelFormat`] enumeration, or a value of a graphics backend's own format enumeration.
//! Backend values are *wrapped* by setting the most significant bit,
//! which no generic format uses, so both kinds share one field without an extra tag.
//!
//! Compressed formats live in their own space, see [`compressed`].

pub mod compressed;
pub mod size;

use std::convert::TryFrom;
use std::fmt;
use std::mem::size_of;

use bit_field::BitField;
use half::f16;

use crate::error::{Error, Result};


/// The bit that marks a wrapped implementation-specific format value.
pub(crate) const IMPLEMENTATION_SPECIFIC_BIT: usize = 31;

/// Set the marker bit, rejecting values that cannot be represented.
pub(crate) fn wrap_raw(raw: u32, space: &'static str) -> Result<u32> {
    if raw.get_bit(IMPLEMENTATION_SPECIFIC_BIT) {
        return Err(Error::invalid(format!(
            "implementation-specific {} {:#x} is too large to be wrapped", space, raw
        )));
    }

    let mut wrapped = raw;
    wrapped.set_bit(IMPLEMENTATION_SPECIFIC_BIT, true);
    Ok(wrapped)
}

/// Clear the marker bit, rejecting values that do not carry it.
pub(crate) fn unwrap_raw(wrapped: u32, space: &'static str) -> Result<u32> {
    if !wrapped.get_bit(IMPLEMENTATION_SPECIFIC_BIT) {
        return Err(Error::invalid(format!(
            "{} {:#x} is not implementation-specific", space, wrapped
        )));
    }

    let mut raw = wrapped;
    raw.set_bit(IMPLEMENTATION_SPECIFIC_BIT, false);
    Ok(raw)
}

pub(crate) fn is_wrapped(value: u32) -> bool {
    value.get_bit(IMPLEMENTATION_SPECIFIC_BIT)
}


/// Declares the generic formats together with their size table,
/// so that no format can exist without a size.
macro_rules! generic_pixel_formats {
    ( $( $(#[$doc:meta])* $name:ident = $value:literal : [$channel:ty; $channels:literal] ),* $(,)? ) => {

        /// Backend-independent format of an uncompressed pixel.
        ///
        /// The size of each format is known without asking a graphics backend.
        /// For formats of a specific graphics API, see [`PixelFormat::wrap`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum GenericPixelFormat {
            $( $(#[$doc])* $name = $value, )*
        }

        impl GenericPixelFormat {

            /// All generic formats, in declaration order.
            pub const ALL: &'static [GenericPixelFormat] = &[ $( GenericPixelFormat::$name, )* ];

            /// Number of bytes one pixel of this format occupies.
            pub fn pixel_size(self) -> usize {
                match self {
                    $( GenericPixelFormat::$name => size_of::<[$channel; $channels]>(), )*
                }
            }

            /// Number of channels in a pixel of this format.
            pub fn channel_count(self) -> usize {
                match self {
                    $( GenericPixelFormat::$name => $channels, )*
                }
            }

            /// The name of this format, as written in code.
            pub fn name(self) -> &'static str {
                match self {
                    $( GenericPixelFormat::$name => stringify!($name), )*
                }
            }

            fn from_u32(value: u32) -> Option<Self> {
                match value {
                    $( $value => Some(GenericPixelFormat::$name), )*
                    _ => None,
                }
            }
        }
    };
}

generic_pixel_formats! {
    /// Red, 8-bit unsigned normalized.
    R8Unorm = 1: [u8; 1],
    /// Red and green, 8-bit unsigned normalized.
    Rg8Unorm = 2: [u8; 2],
    /// RGB, 8-bit unsigned normalized.
    Rgb8Unorm = 3: [u8; 3],
    /// RGBA, 8-bit unsigned normalized.
    Rgba8Unorm = 4: [u8; 4],

    /// Red, 8-bit signed normalized.
    R8Snorm = 5: [i8; 1],
    /// Red and green, 8-bit signed normalized.
    Rg8Snorm = 6: [i8; 2],
    /// RGB, 8-bit signed normalized.
    Rgb8Snorm = 7: [i8; 3],
    /// RGBA, 8-bit signed normalized.
    Rgba8Snorm = 8: [i8; 4],

    /// Red, 8-bit unsigned integral.
    R8Uint = 9: [u8; 1],
    /// Red and green, 8-bit unsigned integral.
    Rg8Uint = 10: [u8; 2],
    /// RGB, 8-bit unsigned integral.
    Rgb8Uint = 11: [u8; 3],
    /// RGBA, 8-bit unsigned integral.
    Rgba8Uint = 12: [u8; 4],

    /// Red, 8-bit signed integral.
    R8Sint = 13: [i8; 1],
    /// Red and green, 8-bit signed integral.
    Rg8Sint = 14: [i8; 2],
    /// RGB, 8-bit signed integral.
    Rgb8Sint = 15: [i8; 3],
    /// RGBA, 8-bit signed integral.
    Rgba8Sint = 16: [i8; 4],

    /// Red, 16-bit unsigned normalized.
    R16Unorm = 17: [u16; 1],
    /// Red and green, 16-bit unsigned normalized.
    Rg16Unorm = 18: [u16; 2],
    /// RGB, 16-bit unsigned normalized.
    Rgb16Unorm = 19: [u16; 3],
    /// RGBA, 16-bit unsigned normalized.
    Rgba16Unorm = 20: [u16; 4],

    /// Red, 16-bit signed normalized.
    R16Snorm = 21: [i16; 1],
    /// Red and green, 16-bit signed normalized.
    Rg16Snorm = 22: [i16; 2],
    /// RGB, 16-bit signed normalized.
    Rgb16Snorm = 23: [i16; 3],
    /// RGBA, 16-bit signed normalized.
    Rgba16Snorm = 24: [i16; 4],

    /// Red, 16-bit unsigned integral.
    R16Uint = 25: [u16; 1],
    /// Red and green, 16-bit unsigned integral.
    Rg16Uint = 26: [u16; 2],
    /// RGB, 16-bit unsigned integral.
    Rgb16Uint = 27: [u16; 3],
    /// RGBA, 16-bit unsigned integral.
    Rgba16Uint = 28: [u16; 4],

    /// Red, 16-bit signed integral.
    R16Sint = 29: [i16; 1],
    /// Red and green, 16-bit signed integral.
    Rg16Sint = 30: [i16; 2],
    /// RGB, 16-bit signed integral.
    Rgb16Sint = 31: [i16; 3],
    /// RGBA, 16-bit signed integral.
    Rgba16Sint = 32: [i16; 4],

    /// Red, 32-bit unsigned integral.
    R32Uint = 33: [u32; 1],
    /// Red and green, 32-bit unsigned integral.
    Rg32Uint = 34: [u32; 2],
    /// RGB, 32-bit unsigned integral.
    Rgb32Uint = 35: [u32; 3],
    /// RGBA, 32-bit unsigned integral.
    Rgba32Uint = 36: [u32; 4],

    /// Red, 32-bit signed integral.
    R32Sint = 37: [i32; 1],
    /// Red and green, 32-bit signed integral.
    Rg32Sint = 38: [i32; 2],
    /// RGB, 32-bit signed integral.
    Rgb32Sint = 39: [i32; 3],
    /// RGBA, 32-bit signed integral.
    Rgba32Sint = 40: [i32; 4],

    /// Red, 16-bit float.
    R16Float = 41: [f16; 1],
    /// Red and green, 16-bit float.
    Rg16Float = 42: [f16; 2],
    /// RGB, 16-bit float.
    Rgb16Float = 43: [f16; 3],
    /// RGBA, 16-bit float.
    Rgba16Float = 44: [f16; 4],

    /// Red, 32-bit float.
    R32Float = 45: [f32; 1],
    /// Red and green, 32-bit float.
    Rg32Float = 46: [f32; 2],
    /// RGB, 32-bit float.
    Rgb32Float = 47: [f32; 3],
    /// RGBA, 32-bit float.
    Rgba32Float = 48: [f32; 4],
}

impl TryFrom<u32> for GenericPixelFormat {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        GenericPixelFormat::from_u32(value).ok_or_else(|| Error::invalid(format!(
            "{:#x} is not a generic pixel format", value
        )))
    }
}

impl fmt::Display for GenericPixelFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}


/// The format of an uncompressed image:
/// either a [`GenericPixelFormat`], or a wrapped implementation-specific value.
///
/// Compares equal to the generic format it was created from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat(u32);

impl PixelFormat {

    /// Wrap a value of a graphics backend's format enumeration.
    /// Fails if the value uses the most significant bit,
    /// which is reserved to mark implementation-specific values.
    pub fn wrap(implementation_specific: impl Into<u32>) -> Result<Self> {
        wrap_raw(implementation_specific.into(), "pixel format").map(PixelFormat)
    }

    /// Extract the backend value that was passed to [`PixelFormat::wrap`].
    /// Fails for generic formats.
    pub fn unwrap_raw(self) -> Result<u32> {
        unwrap_raw(self.0, "pixel format")
    }

    /// Reinterpret a number that was obtained from [`PixelFormat::to_raw`].
    /// Fails for numbers that are neither generic formats nor wrapped values.
    pub fn from_raw(raw: u32) -> Result<Self> {
        if is_wrapped(raw) { Ok(PixelFormat(raw)) }
        else { GenericPixelFormat::try_from(raw).map(PixelFormat::from) }
    }

    /// The number stored in this format.
    /// Generic formats keep their enumeration value, wrapped values include the marker bit.
    pub fn to_raw(self) -> u32 {
        self.0
    }

    /// Whether this format was created with [`PixelFormat::wrap`].
    pub fn is_implementation_specific(self) -> bool {
        is_wrapped(self.0)
    }

    /// The generic format, or `None` for implementation-specific formats.
    pub fn generic(self) -> Option<GenericPixelFormat> {
        if self.is_implementation_specific() { None }
        else { GenericPixelFormat::from_u32(self.0) }
    }
}

impl From<GenericPixelFormat> for PixelFormat {
    fn from(format: GenericPixelFormat) -> Self {
        PixelFormat(format as u32)
    }
}

impl PartialEq<GenericPixelFormat> for PixelFormat {
    fn eq(&self, other: &GenericPixelFormat) -> bool {
        *self == PixelFormat::from(*other)
    }
}

impl PartialEq<PixelFormat> for GenericPixelFormat {
    fn eq(&self, other: &PixelFormat) -> bool {
        other == self
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.generic() {
            Some(generic) => write!(formatter, "PixelFormat::{}", generic),
            None => {
                let mut raw = self.0;
                raw.set_bit(IMPLEMENTATION_SPECIFIC_BIT, false);
                write!(formatter, "PixelFormat::ImplementationSpecific({:#x})", raw)
            },
        }
    }
}

impl fmt::Debug for PixelFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}
