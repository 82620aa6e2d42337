#[macro_use]
extern crate bencher;

extern crate pixel_image;
use pixel_image::prelude::*;

use bencher::Bencher;

/// Compute strides and size for every generic format at a typical texture size
fn data_properties_all_formats(bench: &mut Bencher) {
    let storage = PixelStorage::new().with_skip(Vec3(3, 7, 0)).with_row_length(2048);

    bench.iter(||{
        for &format in GenericPixelFormat::ALL {
            let properties = storage.data_properties(format.pixel_size(), Vec3(1920, 1080, 1)).unwrap();
            bencher::black_box(properties);
        }
    })
}

/// Construct an image, which validates the buffer length, then take it apart again
fn construct_and_release(bench: &mut Bencher) {
    let mut data = Some(vec![0_u8; 1920 * 1080 * 4]);

    bench.iter(||{
        let buffer = data.take().unwrap();
        let mut image = Image2D::new(PixelStorage::new(), GenericPixelFormat::Rgba8Unorm, Vec2(1920, 1080), buffer).unwrap();
        data = Some(bencher::black_box(image.release()));
    })
}

/// Wrap, unwrap and resolve implementation-specific formats
fn resolve_implementation_specific(bench: &mut Bencher) {
    struct Resolver;

    impl PixelSizeResolver for Resolver {
        fn pixel_size_with_extra(&self, format: u32, extra: u32) -> Result<usize> {
            Ok((format as usize % 4 + 1) * (extra as usize % 4 + 1))
        }
    }

    bench.iter(||{
        for raw in 0 .. 1024_u32 {
            let descriptor = PixelDescriptor::implementation_specific_with_extra(raw, raw + 7, &Resolver).unwrap();
            bencher::black_box(descriptor);
        }
    })
}

/// Check compressed buffers against the block layout of each generic compressed format
fn compressed_data_size(bench: &mut Bencher) {
    bench.iter(||{
        for &format in GenericCompressedPixelFormat::ALL {
            let storage = CompressedPixelStorage::for_format(format);
            bencher::black_box(storage.data_size(Vec3(1023, 517, 1)).unwrap());
        }
    })
}

benchmark_group!(layout,
    data_properties_all_formats,
    construct_and_release,
    resolve_implementation_specific,
    compressed_data_size,
);

benchmark_main!(layout);
