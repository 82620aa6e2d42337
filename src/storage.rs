
//! Describes how the pixels of an image are laid out in a byte buffer.
//!
//! Rows of uncompressed images are padded to the [`PixelStorage::alignment`],
//! and both uncompressed and compressed images can be a window into a larger image,
//! using a custom row length, image height, and a skip offset.

use crate::error::{Error, Result, UnitResult};
use crate::format::compressed::GenericCompressedPixelFormat;
use crate::math::{align_up, RoundingMode, Vec3};


/// Layout parameters of an uncompressed pixel buffer.
///
/// The default stores tightly packed rows, each padded to four bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelStorage {

    /// Each row starts at a multiple of this many bytes.
    /// Must be one of 1, 2, 4 or 8.
    pub alignment: usize,

    /// Number of pixels in a row of the buffer.
    /// Zero means the row length equals the width of the image.
    pub row_length: usize,

    /// Number of rows in a slice of the buffer.
    /// Zero means the slice height equals the height of the image.
    pub image_height: usize,

    /// Number of pixels, rows and slices to skip before the first pixel of the image.
    pub skip: Vec3<usize>,
}

/// Layout parameters of a block-compressed pixel buffer.
///
/// As long as [`block_size`](Self::block_size) or [`block_data_size`](Self::block_data_size)
/// are zero, the length of a compressed buffer is not checked at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompressedPixelStorage {

    /// Number of pixels in a row of the buffer.
    /// Zero means the row length equals the width of the image.
    pub row_length: usize,

    /// Number of rows in a slice of the buffer.
    /// Zero means the slice height equals the height of the image.
    pub image_height: usize,

    /// Number of pixels, rows and slices to skip before the first block of the image.
    /// Must be a multiple of the block size.
    pub skip: Vec3<usize>,

    /// Width, height and depth of one compressed block, in pixels.
    pub block_size: Vec3<usize>,

    /// Number of bytes one compressed block occupies.
    pub block_data_size: usize,
}

/// Where the pixels of an image are found in its buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DataProperties {

    /// Byte index of the first pixel, caused by the skip offset.
    pub offset: usize,

    /// Number of bytes from the start of one row to the start of the next row,
    /// including alignment padding.
    pub row_stride: usize,

    /// Number of bytes from the start of one slice to the start of the next slice.
    pub slice_stride: usize,

    /// Number of bytes the buffer must contain.
    pub size: usize,
}


impl Default for PixelStorage {
    fn default() -> Self {
        PixelStorage {
            alignment: 4,
            row_length: 0,
            image_height: 0,
            skip: Vec3(0, 0, 0),
        }
    }
}

impl PixelStorage {

    /// Tightly packed rows with four byte alignment.
    pub fn new() -> Self { Self::default() }

    /// Set the row alignment in bytes.
    pub fn with_alignment(self, alignment: usize) -> Self {
        PixelStorage { alignment, ..self }
    }

    /// Set the number of pixels in a row of the buffer.
    pub fn with_row_length(self, row_length: usize) -> Self {
        PixelStorage { row_length, ..self }
    }

    /// Set the number of rows in a slice of the buffer.
    pub fn with_image_height(self, image_height: usize) -> Self {
        PixelStorage { image_height, ..self }
    }

    /// Set the number of pixels, rows and slices to skip.
    pub fn with_skip(self, skip: Vec3<usize>) -> Self {
        PixelStorage { skip, ..self }
    }

    /// Check that the alignment is one of the supported values.
    pub fn validate(&self) -> UnitResult {
        match self.alignment {
            1 | 2 | 4 | 8 => Ok(()),
            other => Err(Error::invalid(format!(
                "pixel storage alignment must be 1, 2, 4 or 8, but is {}", other
            ))),
        }
    }

    /// Compute offset, strides and total byte size of an image
    /// with the specified pixel size and extent.
    ///
    /// Rows are rounded up to the alignment,
    /// which must be valid (see [`PixelStorage::validate`]).
    /// Fails if any of the byte counts does not fit into `usize`.
    pub fn data_properties(&self, pixel_size: usize, extent: Vec3<usize>) -> Result<DataProperties> {
        let row_length = if self.row_length != 0 { self.row_length } else { extent.0 };
        let image_height = if self.image_height != 0 { self.image_height } else { extent.1 };

        // zero alignment is reported by `validate`, here it behaves like one
        let row_stride = row_length.checked_mul(pixel_size)
            .and_then(|row_bytes| align_up(row_bytes, self.alignment.max(1)))
            .ok_or_else(size_overflow)?;

        let slice_stride = row_stride.checked_mul(image_height).ok_or_else(size_overflow)?;

        let offset = skip_offset(self.skip, Vec3(pixel_size, row_stride, slice_stride))
            .ok_or_else(size_overflow)?;

        let size = slice_stride.checked_mul(extent.2)
            .and_then(|slices| slices.checked_add(offset))
            .ok_or_else(size_overflow)?;

        Ok(DataProperties { offset, row_stride, slice_stride, size })
    }
}


impl CompressedPixelStorage {

    /// No custom layout and no known block properties.
    pub fn new() -> Self { Self::default() }

    /// Use the block properties of a generic compressed format.
    pub fn for_format(format: GenericCompressedPixelFormat) -> Self {
        Self::new()
            .with_block_size(format.block_size())
            .with_block_data_size(format.block_data_size())
    }

    /// Set the number of pixels in a row of the buffer.
    pub fn with_row_length(self, row_length: usize) -> Self {
        CompressedPixelStorage { row_length, ..self }
    }

    /// Set the number of rows in a slice of the buffer.
    pub fn with_image_height(self, image_height: usize) -> Self {
        CompressedPixelStorage { image_height, ..self }
    }

    /// Set the number of pixels, rows and slices to skip.
    pub fn with_skip(self, skip: Vec3<usize>) -> Self {
        CompressedPixelStorage { skip, ..self }
    }

    /// Set the pixel extent of one compressed block.
    pub fn with_block_size(self, block_size: Vec3<usize>) -> Self {
        CompressedPixelStorage { block_size, ..self }
    }

    /// Set the number of bytes of one compressed block.
    pub fn with_block_data_size(self, block_data_size: usize) -> Self {
        CompressedPixelStorage { block_data_size, ..self }
    }

    /// Whether both block size and block data size are known,
    /// which is required to compute the size of a buffer.
    pub fn has_block_properties(&self) -> bool {
        self.block_data_size != 0
            && self.block_size.0 != 0 && self.block_size.1 != 0 && self.block_size.2 != 0
    }

    /// Check that the skip offset starts at a block boundary.
    pub fn validate(&self) -> UnitResult {
        if !self.has_block_properties() { return Ok(()); }

        let Vec3(x, y, z) = self.skip;
        let Vec3(block_x, block_y, block_z) = self.block_size;

        if x % block_x != 0 || y % block_y != 0 || z % block_z != 0 {
            return Err(Error::invalid(format!(
                "compressed skip offset {:?} is not a multiple of the block size {:?}",
                self.skip, self.block_size
            )));
        }

        Ok(())
    }

    /// Compute the number of bytes a compressed image with this extent occupies,
    /// counting partial blocks at the edges as full blocks.
    /// Returns `None` if the block properties are unknown,
    /// and fails if the byte count does not fit into `usize`.
    pub fn data_size(&self, extent: Vec3<usize>) -> Result<Option<usize>> {
        if !self.has_block_properties() { return Ok(None); }

        let row_length = if self.row_length != 0 { self.row_length } else { extent.0 };
        let image_height = if self.image_height != 0 { self.image_height } else { extent.1 };

        let block_count = |pixels: usize, block: usize| RoundingMode::Up.divide(pixels, block);
        let blocks = Vec3(
            block_count(row_length, self.block_size.0),
            block_count(image_height, self.block_size.1),
            block_count(extent.2, self.block_size.2),
        );

        let skipped = Vec3(
            RoundingMode::Down.divide(self.skip.0, self.block_size.0),
            RoundingMode::Down.divide(self.skip.1, self.block_size.1),
            RoundingMode::Down.divide(self.skip.2, self.block_size.2),
        );

        let row_stride = blocks.0.checked_mul(self.block_data_size).ok_or_else(size_overflow)?;
        let slice_stride = row_stride.checked_mul(blocks.1).ok_or_else(size_overflow)?;

        let offset = skip_offset(skipped, Vec3(self.block_data_size, row_stride, slice_stride))
            .ok_or_else(size_overflow)?;

        let size = slice_stride.checked_mul(blocks.2)
            .and_then(|slices| slices.checked_add(offset))
            .ok_or_else(size_overflow)?;

        Ok(Some(size))
    }
}


/// Bytes before the first pixel or block, with the skip counted in units of the strides.
fn skip_offset(skip: Vec3<usize>, strides: Vec3<usize>) -> Option<usize> {
    skip.0.checked_mul(strides.0)?
        .checked_add(skip.1.checked_mul(strides.1)?)?
        .checked_add(skip.2.checked_mul(strides.2)?)
}

fn size_overflow() -> Error {
    Error::invalid("image size overflows")
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_alignment_is_four() {
        let storage = PixelStorage::default();
        assert_eq!(storage.alignment, 4);
        assert_eq!(storage.row_length, 0);
        assert_eq!(storage.image_height, 0);
        assert_eq!(storage.skip, Vec3(0, 0, 0));
        assert!(storage.validate().is_ok());
    }

    #[test]
    fn rejects_unsupported_alignment() {
        assert!(PixelStorage::new().with_alignment(3).validate().is_err());
        assert!(PixelStorage::new().with_alignment(0).validate().is_err());
        assert!(PixelStorage::new().with_alignment(16).validate().is_err());
        assert!(PixelStorage::new().with_alignment(8).validate().is_ok());
    }

    #[test]
    fn aligned_rows_need_no_padding() {
        let properties = PixelStorage::new().data_properties(4, Vec3(1, 3, 1)).unwrap();
        assert_eq!(properties.row_stride, 4);
        assert_eq!(properties.size, 12);
        assert_eq!(properties.offset, 0);
    }

    #[test]
    fn unaligned_rows_are_padded() {
        // 1 pixel of 6 bytes, padded to 8
        let properties = PixelStorage::new().data_properties(6, Vec3(1, 3, 1)).unwrap();
        assert_eq!(properties.row_stride, 8);
        assert_eq!(properties.size, 24);

        let properties = PixelStorage::new().with_alignment(1).data_properties(6, Vec3(1, 3, 1)).unwrap();
        assert_eq!(properties.row_stride, 6);
        assert_eq!(properties.size, 18);

        let properties = PixelStorage::new().with_alignment(1).data_properties(2, Vec3(1, 3, 1)).unwrap();
        assert_eq!(properties.size, 6);

        // 3 pixels of 3 bytes make 9 bytes, padded to 16
        let properties = PixelStorage::new().with_alignment(8).data_properties(3, Vec3(3, 2, 1)).unwrap();
        assert_eq!(properties.row_stride, 16);
        assert_eq!(properties.size, 32);
    }

    #[test]
    fn row_length_and_image_height_override_extent() {
        let storage = PixelStorage::new()
            .with_alignment(1)
            .with_row_length(5)
            .with_image_height(4);

        let properties = storage.data_properties(2, Vec3(3, 2, 2)).unwrap();
        assert_eq!(properties.row_stride, 10);
        assert_eq!(properties.slice_stride, 40);
        assert_eq!(properties.size, 80);
    }

    #[test]
    fn skip_adds_offset() {
        let storage = PixelStorage::new()
            .with_alignment(4)
            .with_skip(Vec3(1, 2, 1));

        let properties = storage.data_properties(4, Vec3(2, 2, 1)).unwrap();
        assert_eq!(properties.row_stride, 8);
        assert_eq!(properties.slice_stride, 16);
        assert_eq!(properties.offset, 4 + 2 * 8 + 16);
        assert_eq!(properties.size, properties.offset + 16);
    }

    #[test]
    fn compressed_size_unknown_without_block_properties() {
        let storage = CompressedPixelStorage::new().with_block_size(Vec3(4, 4, 1));
        assert_eq!(storage.data_size(Vec3(4, 4, 1)), Ok(None));
        assert!(storage.validate().is_ok());
    }

    #[test]
    fn compressed_size_counts_partial_blocks() {
        let storage = CompressedPixelStorage::new()
            .with_block_size(Vec3(4, 4, 1))
            .with_block_data_size(8);

        assert_eq!(storage.data_size(Vec3(4, 4, 1)), Ok(Some(8)));
        assert_eq!(storage.data_size(Vec3(5, 4, 1)), Ok(Some(16)));
        assert_eq!(storage.data_size(Vec3(12, 9, 2)), Ok(Some(3 * 3 * 2 * 8)));
    }

    #[test]
    fn compressed_skip_must_be_block_aligned() {
        let storage = CompressedPixelStorage::new()
            .with_block_size(Vec3(4, 4, 1))
            .with_block_data_size(16)
            .with_skip(Vec3(2, 0, 0));

        assert!(storage.validate().is_err());

        let storage = storage.with_skip(Vec3(4, 4, 0)).with_row_length(8);
        assert!(storage.validate().is_ok());

        // two blocks per row, skip one row of blocks and one block
        assert_eq!(storage.data_size(Vec3(8, 4, 1)), Ok(Some(16 + 2 * 16 + 2 * 16)));
    }

    #[test]
    fn overflowing_sizes_are_errors() {
        let storage = PixelStorage::new();
        assert!(storage.data_properties(4, Vec3(1 << 62, 3, 1)).is_err());
        assert!(storage.data_properties(1, Vec3(usize::MAX - 2, 1, 1)).is_err());
        assert!(storage.data_properties(4, Vec3(1 << 30, 1 << 30, 1 << 10)).is_err());
        assert!(storage.with_skip(Vec3(0, 0, usize::MAX)).data_properties(4, Vec3(1, 1, 1)).is_err());

        let storage = CompressedPixelStorage::for_format(GenericCompressedPixelFormat::Bc3RgbaUnorm);
        assert!(storage.data_size(Vec3(usize::MAX, usize::MAX, 1)).is_err());
        assert!(storage.data_size(Vec3(1 << 40, 1 << 40, 1)).is_err());
    }
}
