/*
 * @Description  : 三维张量（行、列、深度），按深度平面存储。
 *                 卷积预览与权重展示都只需要“取深度切片”和“沿深度拼接”两种形变，
 *                 所以这里不提供通用的多维运算。
 */

use ndarray::{Array2, Array3, Axis};
use rand::distributions::{Distribution, Uniform};

use crate::errors::TensorError;

mod concat;
mod normalize;
mod property;
mod shape;
mod slice;

#[cfg(test)]
mod tests;

pub use normalize::DEFAULT_NEUTRAL_VALUE;
pub use shape::TensorShape;

/// 32位浮点张量。
/// 内部数据布局为`[depth, rows, columns]`，即第`d`个深度切片在扁平缓冲区中占据
/// `data[d*rows*columns .. (d+1)*rows*columns]`，切片内按行优先排列。
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Array3<f32>,
}

impl Tensor {
    /// 由扁平数据和形状创建张量，`data`的长度必须等于`rows*columns*depth`。
    pub fn new(data: &[f32], shape: TensorShape) -> Result<Self, TensorError> {
        let expected = shape.checked_size().ok_or(TensorError::SizeOverflow {
            rows: shape.rows,
            columns: shape.columns,
            depth: shape.depth,
        })?;
        if data.len() != expected {
            return Err(TensorError::DataLengthMismatch {
                expected,
                got: data.len(),
            });
        }
        let data = Array3::from_shape_vec((shape.depth, shape.rows, shape.columns), data.to_vec())
            .map_err(|_| TensorError::DataLengthMismatch {
                expected,
                got: data.len(),
            })?;
        Ok(Self { data })
    }

    /// 空张量（形状全零），可作为沿深度拼接时的初始累加值
    pub fn empty() -> Self {
        Self {
            data: Array3::zeros((0, 0, 0)),
        }
    }

    pub fn zeros(shape: TensorShape) -> Self {
        Self {
            data: Array3::zeros((shape.depth, shape.rows, shape.columns)),
        }
    }

    /// 将二维矩阵包装为深度为1的张量
    pub fn from_matrix(matrix: Array2<f32>) -> Self {
        Self {
            data: matrix.insert_axis(Axis(0)),
        }
    }

    /// 直接由`[depth, rows, columns]`布局的数组创建
    pub fn from_array(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// 创建一个随机张量，其值在[min, max]的闭区间
    pub fn new_random(min: f32, max: f32, shape: TensorShape) -> Self {
        let mut rng = rand::thread_rng();
        let uniform = Uniform::from(min..=max);
        let data = Array3::from_shape_simple_fn((shape.depth, shape.rows, shape.columns), || {
            uniform.sample(&mut rng)
        });
        Self { data }
    }
}
