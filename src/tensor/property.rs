/*
 * @Description  : 本文件仅包含一些属性方法，不包含任何运算方法，所以不会需要用到mut
 */

use super::{Tensor, TensorShape};
use ndarray::ArrayView3;

impl Tensor {
    pub fn shape(&self) -> TensorShape {
        let (depth, rows, columns) = self.data.dim();
        TensorShape::new(rows, columns, depth)
    }

    /// 张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 形状全零的张量
    pub fn is_empty(&self) -> bool {
        self.shape().is_empty()
    }

    pub fn depth(&self) -> usize {
        self.data.dim().0
    }

    /// `[depth, rows, columns]`布局的只读视图
    pub fn view(&self) -> ArrayView3<'_, f32> {
        self.data.view()
    }

    /// 按深度平面、行优先的顺序返回扁平数据
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    pub fn get(&self, row: usize, column: usize, depth: usize) -> Option<f32> {
        self.data.get([depth, row, column]).copied()
    }

    /// 全部元素中的最小值与最大值，空张量返回None
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), x| (min.min(x), max.max(x))))
    }
}
