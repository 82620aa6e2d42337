
//! Pixel formats of block-compressed images.
//!
//! Mirrors the uncompressed formats: a [`CompressedPixelFormat`] holds either a
//! [`GenericCompressedPixelFormat`] or a wrapped implementation-specific value.
//! It is a distinct type, so a compressed format can never be mistaken for an uncompressed one.

use std::convert::TryFrom;
use std::fmt;

use bit_field::BitField;

use crate::error::{Error, Result};
use crate::format::{is_wrapped, unwrap_raw, wrap_raw, IMPLEMENTATION_SPECIFIC_BIT};
use crate::math::Vec3;


/// Declares the generic compressed formats together with their block table.
macro_rules! generic_compressed_pixel_formats {
    ( $( $(#[$doc:meta])* $name:ident = $value:literal : ($width:literal x $height:literal, $bytes:literal) ),* $(,)? ) => {

        /// Backend-independent block-compressed format.
        ///
        /// Every format knows the pixel extent and byte size of its blocks,
        /// see [`CompressedPixelStorage::for_format`](crate::storage::CompressedPixelStorage::for_format).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum GenericCompressedPixelFormat {
            $( $(#[$doc])* $name = $value, )*
        }

        impl GenericCompressedPixelFormat {

            /// All generic compressed formats, in declaration order.
            pub const ALL: &'static [GenericCompressedPixelFormat] = &[ $( GenericCompressedPixelFormat::$name, )* ];

            /// Width, height and depth of one block, in pixels.
            pub fn block_size(self) -> Vec3<usize> {
                match self {
                    $( GenericCompressedPixelFormat::$name => Vec3($width, $height, 1), )*
                }
            }

            /// Number of bytes one block occupies.
            pub fn block_data_size(self) -> usize {
                match self {
                    $( GenericCompressedPixelFormat::$name => $bytes, )*
                }
            }

            /// The name of this format, as written in code.
            pub fn name(self) -> &'static str {
                match self {
                    $( GenericCompressedPixelFormat::$name => stringify!($name), )*
                }
            }

            fn from_u32(value: u32) -> Option<Self> {
                match value {
                    $( $value => Some(GenericCompressedPixelFormat::$name), )*
                    _ => None,
                }
            }
        }
    };
}

generic_compressed_pixel_formats! {
    /// S3TC DXT1 / BC1 compressed RGB, unsigned normalized.
    Bc1RgbUnorm = 1: (4 x 4, 8),
    /// S3TC DXT1 / BC1 compressed RGBA with one-bit alpha, unsigned normalized.
    Bc1RgbaUnorm = 2: (4 x 4, 8),
    /// S3TC DXT3 / BC2 compressed RGBA, unsigned normalized.
    Bc2RgbaUnorm = 3: (4 x 4, 16),
    /// S3TC DXT5 / BC3 compressed RGBA, unsigned normalized.
    Bc3RgbaUnorm = 4: (4 x 4, 16),
    /// RGTC / BC4 compressed red, unsigned normalized.
    Bc4RUnorm = 5: (4 x 4, 8),
    /// RGTC / BC4 compressed red, signed normalized.
    Bc4RSnorm = 6: (4 x 4, 8),
    /// RGTC / BC5 compressed red and green, unsigned normalized.
    Bc5RgUnorm = 7: (4 x 4, 16),
    /// RGTC / BC5 compressed red and green, signed normalized.
    Bc5RgSnorm = 8: (4 x 4, 16),
    /// BPTC / BC6H compressed RGB, unsigned float.
    Bc6hRgbUfloat = 9: (4 x 4, 16),
    /// BPTC / BC6H compressed RGB, signed float.
    Bc6hRgbSfloat = 10: (4 x 4, 16),
    /// BPTC / BC7 compressed RGBA, unsigned normalized.
    Bc7RgbaUnorm = 11: (4 x 4, 16),

    /// ETC2 compressed RGB, unsigned normalized.
    Etc2Rgb8Unorm = 12: (4 x 4, 8),
    /// ETC2 compressed RGB with one-bit alpha, unsigned normalized.
    Etc2Rgb8A1Unorm = 13: (4 x 4, 8),
    /// ETC2 compressed RGBA, unsigned normalized.
    Etc2Rgba8Unorm = 14: (4 x 4, 16),
    /// EAC compressed red, unsigned normalized.
    EacR11Unorm = 15: (4 x 4, 8),
    /// EAC compressed red, signed normalized.
    EacR11Snorm = 16: (4 x 4, 8),
    /// EAC compressed red and green, unsigned normalized.
    EacRg11Unorm = 17: (4 x 4, 16),
    /// EAC compressed red and green, signed normalized.
    EacRg11Snorm = 18: (4 x 4, 16),

    /// ASTC compressed RGBA with 4x4 blocks, unsigned normalized.
    Astc4x4RgbaUnorm = 19: (4 x 4, 16),
    /// ASTC compressed RGBA with 8x8 blocks, unsigned normalized.
    Astc8x8RgbaUnorm = 20: (8 x 8, 16),
}

impl TryFrom<u32> for GenericCompressedPixelFormat {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        GenericCompressedPixelFormat::from_u32(value).ok_or_else(|| Error::invalid(format!(
            "{:#x} is not a generic compressed pixel format", value
        )))
    }
}

impl fmt::Display for GenericCompressedPixelFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}


/// The format of a compressed image:
/// either a [`GenericCompressedPixelFormat`], or a wrapped implementation-specific value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPixelFormat(u32);

impl CompressedPixelFormat {

    /// Wrap a value of a graphics backend's compressed format enumeration.
    /// Fails if the value uses the most significant bit.
    pub fn wrap(implementation_specific: impl Into<u32>) -> Result<Self> {
        wrap_raw(implementation_specific.into(), "compressed pixel format").map(CompressedPixelFormat)
    }

    /// Extract the backend value that was passed to [`CompressedPixelFormat::wrap`].
    /// Fails for generic formats.
    pub fn unwrap_raw(self) -> Result<u32> {
        unwrap_raw(self.0, "compressed pixel format")
    }

    /// Reinterpret a number that was obtained from [`CompressedPixelFormat::to_raw`].
    pub fn from_raw(raw: u32) -> Result<Self> {
        if is_wrapped(raw) { Ok(CompressedPixelFormat(raw)) }
        else { GenericCompressedPixelFormat::try_from(raw).map(CompressedPixelFormat::from) }
    }

    /// The number stored in this format.
    pub fn to_raw(self) -> u32 {
        self.0
    }

    /// Whether this format was created with [`CompressedPixelFormat::wrap`].
    pub fn is_implementation_specific(self) -> bool {
        is_wrapped(self.0)
    }

    /// The generic format, or `None` for implementation-specific formats.
    pub fn generic(self) -> Option<GenericCompressedPixelFormat> {
        if self.is_implementation_specific() { None }
        else { GenericCompressedPixelFormat::from_u32(self.0) }
    }
}

impl From<GenericCompressedPixelFormat> for CompressedPixelFormat {
    fn from(format: GenericCompressedPixelFormat) -> Self {
        CompressedPixelFormat(format as u32)
    }
}

impl PartialEq<GenericCompressedPixelFormat> for CompressedPixelFormat {
    fn eq(&self, other: &GenericCompressedPixelFormat) -> bool {
        *self == CompressedPixelFormat::from(*other)
    }
}

impl PartialEq<CompressedPixelFormat> for GenericCompressedPixelFormat {
    fn eq(&self, other: &CompressedPixelFormat) -> bool {
        other == self
    }
}

impl fmt::Display for CompressedPixelFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.generic() {
            Some(generic) => write!(formatter, "CompressedPixelFormat::{}", generic),
            None => {
                let mut raw = self.0;
                raw.set_bit(IMPLEMENTATION_SPECIFIC_BIT, false);
                write!(formatter, "CompressedPixelFormat::ImplementationSpecific({:#x})", raw)
            },
        }
    }
}

impl fmt::Debug for CompressedPixelFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}
