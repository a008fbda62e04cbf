use super::Tensor;
use crate::errors::TensorError;
use ndarray::{Axis, concatenate};

impl Tensor {
    /// 沿深度轴拼接两个张量，深度相加。
    /// 两者的行数与列数必须相同；空张量（形状全零）视为拼接的单位元。
    pub fn concat_depth(&self, other: &Self) -> Result<Self, TensorError> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }

        let (lhs, rhs) = (self.shape(), other.shape());
        if !lhs.same_plane(&rhs) {
            return Err(TensorError::ShapeMismatch {
                expected: vec![lhs.rows, lhs.columns],
                got: vec![rhs.rows, rhs.columns],
                message: "沿深度拼接要求行数与列数相同".to_string(),
            });
        }

        let data = concatenate(Axis(0), &[self.data.view(), other.data.view()]).map_err(|_| {
            TensorError::ShapeMismatch {
                expected: vec![lhs.rows, lhs.columns],
                got: vec![rhs.rows, rhs.columns],
                message: "沿深度拼接失败".to_string(),
            }
        })?;
        Ok(Self { data })
    }

    /// 将一组张量依次沿深度轴拼接，空列表得到空张量
    pub fn stack_depth(tensors: &[Self]) -> Result<Self, TensorError> {
        tensors
            .iter()
            .try_fold(Self::empty(), |acc, tensor| acc.concat_depth(tensor))
    }
}
