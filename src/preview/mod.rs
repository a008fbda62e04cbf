/*
 * @Description  : 滤波器预览：把某个卷积层已训练好的滤波器逐通道作用于用户拖入的图像。
 *
 * 设计决策：
 * - 与真正的卷积层不同，各通道的互相关结果不求和、也不加偏置，
 *   而是按通道顺序沿深度拼接；
 * - 步长为1、无膨胀、same 填充（输出与输入同尺寸，越界处按0计）；
 * - 各滤波器相互独立，可用 Rayon 并行，结果保持滤波器顺序。
 */

mod gallery;


pub use gallery::{FilterGallery, weight_frames};

use crate::config::ViewerConfig;
use crate::errors::TensorError;
use crate::tensor::{Tensor, TensorShape};
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

/// 滤波器预览引擎，本身无状态，可在任意线程调用
#[derive(Debug, Clone, Copy)]
pub struct FilterPreviewEngine {
    parallel: bool,
}

impl Default for FilterPreviewEngine {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl FilterPreviewEngine {
    pub const fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    pub const fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.parallel_preview)
    }

    /// 对每个滤波器生成一张特征图，返回顺序与`filters`一致。
    ///
    /// # 参数
    /// - `filters`: 滤波器列表，每个的深度都必须等于图像的通道数
    /// - `unit`: 单个卷积核的形状，只用到行与列
    /// - `image`: 形状为(行, 列, 通道)的图像张量
    ///
    /// # 返回
    /// 每个滤波器对应一个形状为(图像行, 图像列, 图像通道)的张量
    ///
    /// # 错误
    /// 任一滤波器的深度或尺寸不符时返回`TensorError::ShapeMismatch`，不返回部分结果。
    pub fn preview(
        &self,
        filters: &[Tensor],
        unit: TensorShape,
        image: &Tensor,
    ) -> Result<Vec<Tensor>, TensorError> {
        for (index, filter) in filters.iter().enumerate() {
            check_filter(index, filter, unit, image)?;
        }

        let results = if self.parallel {
            filters
                .par_iter()
                .map(|filter| preview_filter(filter, image))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            filters
                .iter()
                .map(|filter| preview_filter(filter, image))
                .collect::<Result<Vec<_>, _>>()?
        };

        log::debug!(
            "滤波器预览完成：{}个滤波器，卷积核{}×{}，图像{}",
            filters.len(),
            unit.rows,
            unit.columns,
            image.shape()
        );
        Ok(results)
    }
}

fn check_filter(
    index: usize,
    filter: &Tensor,
    unit: TensorShape,
    image: &Tensor,
) -> Result<(), TensorError> {
    if filter.depth() != image.depth() {
        return Err(TensorError::ShapeMismatch {
            expected: vec![image.depth()],
            got: vec![filter.depth()],
            message: format!("第{index}个滤波器的深度必须等于图像通道数"),
        });
    }
    let shape = filter.shape();
    if !shape.same_plane(&unit) {
        return Err(TensorError::ShapeMismatch {
            expected: vec![unit.rows, unit.columns],
            got: vec![shape.rows, shape.columns],
            message: format!("第{index}个滤波器的尺寸与卷积核尺寸不符"),
        });
    }
    Ok(())
}

/// 单个滤波器：逐通道互相关后沿深度拼接
fn preview_filter(filter: &Tensor, image: &Tensor) -> Result<Tensor, TensorError> {
    let shape = image.shape();
    let initial = Tensor::zeros(TensorShape::new(shape.rows, shape.columns, 0));
    (0..shape.depth).try_fold(initial, |acc, d| {
        let kernel = filter.depth_slice_view(d)?;
        let signal = image.depth_slice_view(d)?;
        acc.concat_depth(&Tensor::from_matrix(correlate2d_same(signal, kernel)))
    })
}

/// same 填充的二维互相关。
/// 输出与`signal`同尺寸；卷积核以输出位置为中心（偶数尺寸时中心偏左上），
/// 越界的抽头按0计。
pub fn correlate2d_same(signal: ArrayView2<'_, f32>, kernel: ArrayView2<'_, f32>) -> Array2<f32> {
    let (rows, columns) = signal.dim();
    let (k_rows, k_columns) = kernel.dim();
    let pad_top = k_rows.saturating_sub(1) / 2;
    let pad_left = k_columns.saturating_sub(1) / 2;

    Array2::from_shape_fn((rows, columns), |(r, c)| {
        let mut sum = 0.0f32;
        for kr in 0..k_rows {
            let Some(sr) = (r + kr).checked_sub(pad_top) else {
                continue;
            };
            if sr >= rows {
                continue;
            }
            for kc in 0..k_columns {
                let Some(sc) = (c + kc).checked_sub(pad_left) else {
                    continue;
                };
                if sc >= columns {
                    continue;
                }
                sum += signal[[sr, sc]] * kernel[[kr, kc]];
            }
        }
        sum
    })
}
