
//! Non-owning images, which borrow their pixel data.
//!
//! Views carry the same description as owning images, but only reference a byte slice.
//! Any owning image converts into a view without copying.
//! There is no conversion back, since a view cannot take ownership of the data.

use crate::error::{Result, UnitResult};
use crate::format::compressed::CompressedPixelFormat;
use crate::format::size::PixelDescriptor;
use crate::format::PixelFormat;
use crate::image::compressed::{validate_compressed_data, CompressedImage};
use crate::image::{validate_data, Image};
use crate::math::{Dimensions, Vec2, Vec3};
use crate::storage::{CompressedPixelStorage, DataProperties, PixelStorage};


/// An uncompressed image that borrows its pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageView<'a, D: Dimensions> {
    storage: PixelStorage,
    descriptor: PixelDescriptor,
    size: D,
    data: &'a [u8],
}

/// A compressed image that borrows its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressedImageView<'a, D: Dimensions> {
    storage: CompressedPixelStorage,
    format: CompressedPixelFormat,
    size: D,
    data: &'a [u8],
}

/// A one-dimensional uncompressed view.
pub type ImageView1D<'a> = ImageView<'a, usize>;

/// A two-dimensional uncompressed view.
pub type ImageView2D<'a> = ImageView<'a, Vec2<usize>>;

/// A three-dimensional uncompressed view.
pub type ImageView3D<'a> = ImageView<'a, Vec3<usize>>;

/// A one-dimensional compressed view.
pub type CompressedImageView1D<'a> = CompressedImageView<'a, usize>;

/// A two-dimensional compressed view.
pub type CompressedImageView2D<'a> = CompressedImageView<'a, Vec2<usize>>;

/// A three-dimensional compressed view.
pub type CompressedImageView3D<'a> = CompressedImageView<'a, Vec3<usize>>;


impl<'a, D: Dimensions> ImageView<'a, D> {

    /// Create a view on a buffer, with the same checks as [`Image::new`].
    pub fn new(
        storage: PixelStorage, descriptor: impl Into<PixelDescriptor>,
        size: D, data: &'a [u8]
    ) -> Result<Self>
    {
        let descriptor = descriptor.into();
        validate_data(&storage, &descriptor, size, data.len())?;
        Ok(ImageView { storage, descriptor, size, data })
    }

    /// Create a view without size and data.
    pub fn placeholder(storage: PixelStorage, descriptor: impl Into<PixelDescriptor>) -> Self {
        ImageView {
            storage,
            descriptor: descriptor.into(),
            size: D::ZERO,
            data: &[],
        }
    }

    /// Point this view to another buffer of the same layout.
    /// Fails if the buffer length does not match, keeping the previous buffer.
    pub fn set_data(&mut self, data: &'a [u8]) -> UnitResult {
        validate_data(&self.storage, &self.descriptor, self.size, data.len())?;
        self.data = data;
        Ok(())
    }

    /// The layout of the buffer.
    pub fn storage(&self) -> PixelStorage { self.storage }

    /// Format, extra type and pixel size.
    pub fn descriptor(&self) -> PixelDescriptor { self.descriptor }

    /// The generic or wrapped format.
    pub fn format(&self) -> PixelFormat { self.descriptor.format() }

    /// The additional backend type, or zero.
    pub fn format_extra(&self) -> u32 { self.descriptor.format_extra() }

    /// Number of bytes one pixel occupies.
    pub fn pixel_size(&self) -> usize { self.descriptor.pixel_size() }

    /// The extent in pixels.
    pub fn size(&self) -> D { self.size }

    /// The referenced pixel data, including padding.
    pub fn data(&self) -> &'a [u8] { self.data }

    /// Offset, strides and size of the pixel data.
    pub fn data_properties(&self) -> Result<DataProperties> {
        self.storage.data_properties(self.pixel_size(), self.size.to_vec3())
    }
}

impl<'a, D: Dimensions> From<&'a Image<D>> for ImageView<'a, D> {
    fn from(image: &'a Image<D>) -> Self {
        ImageView {
            storage: image.storage,
            descriptor: image.descriptor,
            size: image.size,
            data: &image.data,
        }
    }
}


impl<'a, D: Dimensions> CompressedImageView<'a, D> {

    /// Create a view on a buffer, with the same checks as [`CompressedImage::new`].
    pub fn new(
        storage: CompressedPixelStorage, format: impl Into<CompressedPixelFormat>,
        size: D, data: &'a [u8]
    ) -> Result<Self>
    {
        validate_compressed_data(&storage, size, data.len())?;
        Ok(CompressedImageView { storage, format: format.into(), size, data })
    }

    /// Create a view without size and data.
    pub fn placeholder(storage: CompressedPixelStorage, format: impl Into<CompressedPixelFormat>) -> Self {
        CompressedImageView {
            storage,
            format: format.into(),
            size: D::ZERO,
            data: &[],
        }
    }

    /// Point this view to another buffer.
    /// Fails if the block layout is known and the length does not match.
    pub fn set_data(&mut self, data: &'a [u8]) -> UnitResult {
        validate_compressed_data(&self.storage, self.size, data.len())?;
        self.data = data;
        Ok(())
    }

    /// The block layout of the buffer.
    pub fn storage(&self) -> CompressedPixelStorage { self.storage }

    /// The generic or wrapped compressed format.
    pub fn format(&self) -> CompressedPixelFormat { self.format }

    /// The extent in pixels.
    pub fn size(&self) -> D { self.size }

    /// The referenced compressed data.
    pub fn data(&self) -> &'a [u8] { self.data }
}

impl<'a, D: Dimensions> From<&'a CompressedImage<D>> for CompressedImageView<'a, D> {
    fn from(image: &'a CompressedImage<D>) -> Self {
        CompressedImageView {
            storage: image.storage,
            format: image.format,
            size: image.size,
            data: &image.data,
        }
    }
}
