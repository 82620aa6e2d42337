
//! Describe, own and borrow pixel images in any layout a graphics API might use.
//!
//! The central types are [`image::Image`] and [`image::CompressedImage`],
//! which own a byte buffer, and their borrowing counterparts in [`image::view`].
//! Each image combines a [`storage::PixelStorage`] layout, a pixel format and an extent
//! with one, two or three dimensions, and refuses buffers whose length does not match.
//!
//! Pixel formats are either one of the backend-independent generic formats,
//! or a value of a graphics API's own format enumeration, wrapped into the same number.
//! The size of wrapped formats is computed by a [`format::size::PixelSizeResolver`]
//! supplied by the graphics backend.
//!
//! ```
//! use pixel_image::prelude::*;
//!
//! let image = Image2D::new(
//!     PixelStorage::new(), GenericPixelFormat::Rgba8Unorm,
//!     Vec2(1, 3), vec![0; 12]
//! ).unwrap();
//!
//! assert_eq!(image.pixel_size(), 4);
//! assert_eq!(image.as_view().data().len(), 12);
//! ```

#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused_extern_crates,
    unused,

    missing_copy_implementations,
    missing_debug_implementations,

    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]

#![deny(
    unused_variables,
    unused_assignments,
    dead_code,
    unused_must_use,
    missing_copy_implementations,
    trivial_numeric_casts,
    redundant_semicolons
)]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod math;
pub mod storage;
pub mod format;
pub mod image;


/// Export the most important items from `pixel_image`.
/// _Note: This includes a type called `Result`, possibly overwriting the default `std::Result` type usage._
pub mod prelude {

    // main exports
    pub use crate::image::{
        Image, Image1D, Image2D, Image3D,
        CompressedImage, CompressedImage1D, CompressedImage2D, CompressedImage3D,
    };

    pub use crate::image::view::{
        ImageView, ImageView1D, ImageView2D, ImageView3D,
        CompressedImageView, CompressedImageView1D, CompressedImageView2D, CompressedImageView3D,
    };

    // secondary data types
    pub use crate::storage::{PixelStorage, CompressedPixelStorage, DataProperties};
    pub use crate::format::{PixelFormat, GenericPixelFormat};
    pub use crate::format::compressed::{CompressedPixelFormat, GenericCompressedPixelFormat};
    pub use crate::format::size::{PixelDescriptor, PixelSizeResolver, pixel_size};
    pub use crate::math::{Vec2, Vec3, Dimensions};
    pub use crate::error::{Error, Result, UnitResult};

    // re-export external stuff
    pub use half::f16;
}
