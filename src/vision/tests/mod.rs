use crate::assert_err;
use crate::tensor::{Tensor, TensorShape};
use crate::vision::{ImageType, VisionError, decode_image, image_to_tensor, to_image};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use std::io::Cursor;

fn sample_rgb() -> RgbImage {
    // 宽3高2
    RgbImage::from_fn(3, 2, |x, y| Rgb([(x * 100) as u8, (y * 255) as u8, 51]))
}

#[test]
fn test_image_type_from_depth() {
    assert_eq!(ImageType::from_depth(1).unwrap(), ImageType::Luma);
    assert_eq!(ImageType::from_depth(3).unwrap(), ImageType::Rgb);
    assert_err!(ImageType::from_depth(4), VisionError::UnsupportedChannels(n) if *n == 4);
}

#[test]
fn test_image_to_tensor_layout() {
    let tensor = image_to_tensor(&DynamicImage::ImageRgb8(sample_rgb())).unwrap();
    assert_eq!(tensor.shape(), TensorShape::new(2, 3, 3));
    // (行1, 列2)：R=200，G=255，B=51
    assert_eq!(tensor.get(1, 2, 0), Some(200.0 / 255.0));
    assert_eq!(tensor.get(1, 2, 1), Some(1.0));
    assert_eq!(tensor.get(1, 2, 2), Some(0.2));
}

#[test]
fn test_decode_png_bytes() {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(sample_rgb())
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .unwrap();

    let tensor = decode_image(&bytes).unwrap();
    assert_eq!(tensor.shape(), TensorShape::new(2, 3, 3));
    assert_eq!(tensor.get(0, 1, 0), Some(100.0 / 255.0));

    assert_err!(decode_image(b"not an image"), VisionError::Image(_));
}

#[test]
fn test_round_trip_through_bitmap() {
    let original = DynamicImage::ImageRgb8(sample_rgb());
    let tensor = image_to_tensor(&original).unwrap();
    let restored = to_image(&tensor).unwrap();
    assert_eq!(restored.to_rgb8(), sample_rgb());
}

#[test]
fn test_greyscale_output_clamps() {
    let tensor = Tensor::new(&[-1.0, 0.0, 0.5, 2.0], TensorShape::matrix(2, 2)).unwrap();
    let image = to_image(&tensor).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.get_pixel(0, 0)[0], 0);
    assert_eq!(image.get_pixel(0, 1)[0], 128);
    assert_eq!(image.get_pixel(1, 1)[0], 255);
}

#[test]
fn test_unsupported_depth() {
    let tensor = Tensor::zeros(TensorShape::new(2, 2, 2));
    assert_err!(to_image(&tensor), VisionError::UnsupportedChannels(n) if *n == 2);
}
