/*
 * @Description  : 图像编解码：拖入的图像 → 张量，归一化后的预览张量 → 可显示的位图。
 *                 在本模块中，不严谨地说：
 *                 1. 所谓的image/图像是指RGB格式的图像；
 *                 2. “灰度”（图）等同于英文中luma、luminance、grey、gray的概念。
 */

mod error;

#[cfg(test)]
mod tests;

pub use error::VisionError;

use crate::tensor::{Tensor, TensorShape};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ImageType {
    /// 单通道的灰度图
    Luma,
    /// 3通道的彩色图
    Rgb,
}

impl ImageType {
    /// 由张量深度判断显示方式
    pub fn from_depth(depth: usize) -> Result<Self, VisionError> {
        match depth {
            1 => Ok(Self::Luma),
            3 => Ok(Self::Rgb),
            other => Err(VisionError::UnsupportedChannels(other)),
        }
    }
}

/// 把内存中的图像字节（PNG、JPEG 等）解码为(行, 列, 3)、取值[0, 1]的张量
pub fn decode_image(bytes: &[u8]) -> Result<Tensor, VisionError> {
    let image = image::load_from_memory(bytes)?;
    image_to_tensor(&image)
}

/// 将本地的图像加载到张量中，约定同`decode_image`
pub fn load_image(path: impl AsRef<Path>) -> Result<Tensor, VisionError> {
    let image = image::open(path)?;
    image_to_tensor(&image)
}

/// 任意颜色格式的图像统一转为 RGB 后按通道平面展开
pub fn image_to_tensor(image: &DynamicImage) -> Result<Tensor, VisionError> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let (rows, columns) = (height as usize, width as usize);

    let mut data = Vec::with_capacity(rows * columns * 3);
    for channel in 0..3 {
        for y in 0..height {
            for x in 0..width {
                data.push(f32::from(rgb.get_pixel(x, y)[channel]) / 255.0);
            }
        }
    }
    Ok(Tensor::new(&data, TensorShape::new(rows, columns, 3))?)
}

/// 把取值[0, 1]的张量转为位图：单通道为灰度图，3通道为 RGB 图。
/// 越界的值会被截断到[0, 1]。
pub fn to_image(tensor: &Tensor) -> Result<DynamicImage, VisionError> {
    let shape = tensor.shape();
    let (width, height) = (shape.columns as u32, shape.rows as u32);
    let view = tensor.view();

    match ImageType::from_depth(shape.depth)? {
        ImageType::Luma => {
            let image = GrayImage::from_fn(width, height, |x, y| {
                Luma([to_u8(view[[0, y as usize, x as usize]])])
            });
            Ok(DynamicImage::ImageLuma8(image))
        }
        ImageType::Rgb => {
            let image = RgbImage::from_fn(width, height, |x, y| {
                let (r, c) = (y as usize, x as usize);
                Rgb([
                    to_u8(view[[0, r, c]]),
                    to_u8(view[[1, r, c]]),
                    to_u8(view[[2, r, c]]),
                ])
            });
            Ok(DynamicImage::ImageRgb8(image))
        }
    }
}

/// 保存张量为图像到本地，格式由扩展名决定
pub fn save_image(tensor: &Tensor, path: impl AsRef<Path>) -> Result<(), VisionError> {
    to_image(tensor)?.save(path)?;
    Ok(())
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
