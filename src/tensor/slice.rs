use super::Tensor;
use crate::errors::TensorError;
use ndarray::{ArrayView2, Axis};

impl Tensor {
    /// 获取第`depth`个深度切片的二维视图（行×列）。
    ///
    /// # 错误
    /// `depth`超出`[0, 深度)`时返回`TensorError::IndexOutOfRange`，不做任何截断。
    pub fn depth_slice_view(&self, depth: usize) -> Result<ArrayView2<'_, f32>, TensorError> {
        let len = self.depth();
        if depth >= len {
            return Err(TensorError::IndexOutOfRange { index: depth, len });
        }
        Ok(self.data.index_axis(Axis(0), depth))
    }

    /// `depth_slice_view`的拥有所有权版本，结果包装为深度为1的张量
    pub fn depth_slice(&self, depth: usize) -> Result<Self, TensorError> {
        let view = self.depth_slice_view(depth)?;
        Ok(Self::from_matrix(view.to_owned()))
    }

    /// 按通道顺序拆出全部深度切片，每个都是深度为1的张量
    pub fn depth_slices(&self) -> Vec<Self> {
        self.data
            .axis_iter(Axis(0))
            .map(|plane| Self::from_matrix(plane.to_owned()))
            .collect()
    }
}
