
//! Owning pixel images.
//!
//! An [`Image`] owns a byte buffer and everything needed to interpret it:
//! the [`PixelStorage`] layout, the pixel format with its size, and the extent.
//! A [`CompressedImage`] does the same for block-compressed data.
//!
//! Images without size and data are called placeholders. They are valid images
//! that still know their format, for example to compute the size of a future buffer.
//! Releasing the buffer or taking the image turns the source into a placeholder.
//!
//! Use [`view`] to look at the data without owning it.

pub mod compressed;
pub mod view;

pub use compressed::{CompressedImage, CompressedImage1D, CompressedImage2D, CompressedImage3D};
pub use view::{
    CompressedImageView, CompressedImageView1D, CompressedImageView2D, CompressedImageView3D,
    ImageView, ImageView1D, ImageView2D, ImageView3D,
};

use std::mem;

use crate::error::{Error, Result, UnitResult};
use crate::format::size::PixelDescriptor;
use crate::format::PixelFormat;
use crate::math::{Dimensions, Vec2, Vec3};
use crate::storage::{DataProperties, PixelStorage};


/// An uncompressed image that owns its pixel data.
///
/// Cannot be cloned. Moving the data out with [`Image::release`] or [`Image::take`]
/// leaves a placeholder behind.
#[derive(Debug, PartialEq, Eq)]
pub struct Image<D: Dimensions> {
    storage: PixelStorage,
    descriptor: PixelDescriptor,
    size: D,
    data: Vec<u8>,
}

/// A one-dimensional uncompressed image.
pub type Image1D = Image<usize>;

/// A two-dimensional uncompressed image.
pub type Image2D = Image<Vec2<usize>>;

/// A three-dimensional uncompressed image.
pub type Image3D = Image<Vec3<usize>>;


/// Check that a buffer matches the layout of an uncompressed image.
/// Images without size must not have data.
pub(crate) fn validate_data<D: Dimensions>(
    storage: &PixelStorage, descriptor: &PixelDescriptor, size: D, data_len: usize
) -> UnitResult
{
    storage.validate()?;

    if size.is_zero() {
        if data_len != 0 {
            return Err(Error::invalid(format!(
                "image without size cannot contain {} bytes of data", data_len
            )));
        }

        return Ok(());
    }

    if descriptor.pixel_size() == 0 {
        return Err(Error::invalid(format!(
            "pixel size of {} must not be zero for an image of size {:?}",
            descriptor.format(), size
        )));
    }

    let expected = storage.data_properties(descriptor.pixel_size(), size.to_vec3())?.size;
    if data_len != expected {
        return Err(Error::invalid(format!(
            "image of size {:?} with {} byte pixels requires {} bytes of data, but got {}",
            size, descriptor.pixel_size(), expected, data_len
        )));
    }

    Ok(())
}


impl<D: Dimensions> Image<D> {

    /// Create an image from a buffer.
    ///
    /// Pass a [`GenericPixelFormat`](crate::format::GenericPixelFormat) directly,
    /// or a [`PixelDescriptor`] for implementation-specific formats.
    /// Fails if the buffer length does not match the size computed
    /// from the storage, the pixel size and the image size.
    pub fn new(
        storage: PixelStorage, descriptor: impl Into<PixelDescriptor>,
        size: D, data: Vec<u8>
    ) -> Result<Self>
    {
        let descriptor = descriptor.into();
        validate_data(&storage, &descriptor, size, data.len())?;
        Ok(Image { storage, descriptor, size, data })
    }

    /// Create an image without size and data, which only records the format and storage.
    pub fn placeholder(storage: PixelStorage, descriptor: impl Into<PixelDescriptor>) -> Self {
        Image {
            storage,
            descriptor: descriptor.into(),
            size: D::ZERO,
            data: Vec::new(),
        }
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

    /// The extent in pixels. Zero for placeholders.
    pub fn size(&self) -> D { self.size }

    /// The pixel data, including padding. Empty for placeholders.
    pub fn data(&self) -> &[u8] { &self.data }

    /// The pixel data, for modification. The length cannot be changed.
    pub fn data_mut(&mut self) -> &mut [u8] { &mut self.data }

    /// Offset, strides and size of the pixel data.
    /// Only fails for placeholders whose skip offset does not fit into `usize`.
    pub fn data_properties(&self) -> Result<DataProperties> {
        self.storage.data_properties(self.pixel_size(), self.size.to_vec3())
    }

    /// Whether this image has no size and no data.
    pub fn is_placeholder(&self) -> bool {
        self.size.is_zero() && self.data.is_empty()
    }

    /// Hand the pixel data over to the caller, leaving a placeholder.
    /// Returns an empty buffer if this already is a placeholder.
    pub fn release(&mut self) -> Vec<u8> {
        self.size = D::ZERO;
        let data = mem::take(&mut self.data);

        log::trace!("released {} bytes of {} image data", data.len(), self.format());
        data
    }

    /// Move the whole image out, leaving a placeholder with the same format and storage.
    pub fn take(&mut self) -> Self {
        let placeholder = Image::placeholder(self.storage, self.descriptor);
        mem::replace(self, placeholder)
    }

    /// Borrow the pixel data without copying it.
    pub fn as_view(&self) -> ImageView<'_, D> {
        ImageView::from(self)
    }
}
