
//! Owning block-compressed images.

use std::mem;

use crate::error::{Error, Result, UnitResult};
use crate::format::compressed::CompressedPixelFormat;
use crate::image::view::CompressedImageView;
use crate::math::{Dimensions, Vec2, Vec3};
use crate::storage::CompressedPixelStorage;


/// A block-compressed image that owns its data.
///
/// The buffer length is only checked if the storage knows the block properties,
/// otherwise any buffer is accepted as it is.
#[derive(Debug, PartialEq, Eq)]
pub struct CompressedImage<D: Dimensions> {
    pub(crate) storage: CompressedPixelStorage,
    pub(crate) format: CompressedPixelFormat,
    pub(crate) size: D,
    pub(crate) data: Vec<u8>,
}

/// A one-dimensional compressed image.
pub type CompressedImage1D = CompressedImage<usize>;

/// A two-dimensional compressed image.
pub type CompressedImage2D = CompressedImage<Vec2<usize>>;

/// A three-dimensional compressed image.
pub type CompressedImage3D = CompressedImage<Vec3<usize>>;


/// Check a compressed buffer against the block layout, if it is known.
pub(crate) fn validate_compressed_data<D: Dimensions>(
    storage: &CompressedPixelStorage, size: D, data_len: usize
) -> UnitResult
{
    storage.validate()?;

    if size.is_zero() {
        if data_len != 0 {
            return Err(Error::invalid(format!(
                "compressed image without size cannot contain {} bytes of data", data_len
            )));
        }

        return Ok(());
    }

    match storage.data_size(size.to_vec3())? {
        Some(expected) if expected != data_len => Err(Error::invalid(format!(
            "compressed image of size {:?} with blocks of {:?} pixels and {} bytes requires {} bytes, but got {}",
            size, storage.block_size, storage.block_data_size, expected, data_len
        ))),

        _ => Ok(()),
    }
}


impl<D: Dimensions> CompressedImage<D> {

    /// Create a compressed image from a buffer.
    /// Fails only if the storage knows the block properties and the length does not match.
    pub fn new(
        storage: CompressedPixelStorage, format: impl Into<CompressedPixelFormat>,
        size: D, data: Vec<u8>
    ) -> Result<Self>
    {
        validate_compressed_data(&storage, size, data.len())?;
        Ok(CompressedImage { storage, format: format.into(), size, data })
    }

    /// Create an image without size and data.
    pub fn placeholder(storage: CompressedPixelStorage, format: impl Into<CompressedPixelFormat>) -> Self {
        CompressedImage {
            storage,
            format: format.into(),
            size: D::ZERO,
            data: Vec::new(),
        }
    }

    /// The block layout of the buffer.
    pub fn storage(&self) -> CompressedPixelStorage { self.storage }

    /// The generic or wrapped compressed format.
    pub fn format(&self) -> CompressedPixelFormat { self.format }

    /// The extent in pixels. Zero for placeholders.
    pub fn size(&self) -> D { self.size }

    /// The compressed data. Empty for placeholders.
    pub fn data(&self) -> &[u8] { &self.data }

    /// The compressed data, for modification. The length cannot be changed.
    pub fn data_mut(&mut self) -> &mut [u8] { &mut self.data }

    /// Whether this image has no size and no data.
    pub fn is_placeholder(&self) -> bool {
        self.size.is_zero() && self.data.is_empty()
    }

    /// Hand the compressed data over to the caller, leaving a placeholder.
    pub fn release(&mut self) -> Vec<u8> {
        self.size = D::ZERO;
        let data = mem::take(&mut self.data);

        log::trace!("released {} bytes of {} image data", data.len(), self.format);
        data
    }

    /// Move the whole image out, leaving a placeholder with the same format and storage.
    pub fn take(&mut self) -> Self {
        let placeholder = CompressedImage::placeholder(self.storage, self.format);
        mem::replace(self, placeholder)
    }

    /// Borrow the compressed data without copying it.
    pub fn as_view(&self) -> CompressedImageView<'_, D> {
        CompressedImageView::from(self)
    }
}
