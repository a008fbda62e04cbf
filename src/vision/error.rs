use crate::errors::TensorError;
use thiserror::Error;

/// 图像编解码错误
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("图像读写失败: {0}")]
    Image(#[from] image::ImageError),

    /// 只有单通道（灰度）与3通道（RGB）张量可以显示
    #[error("图像张量的通道数只可能是1或3，实际为{0}")]
    UnsupportedChannels(usize),

    #[error(transparent)]
    Tensor(#[from] TensorError),
}
