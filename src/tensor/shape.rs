use crate::errors::TensorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 张量的形状：(行, 列, 深度)。
/// 全零的形状视为“空”形状，在文本摘要中显示为占位符`—`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct TensorShape {
    pub rows: usize,
    pub columns: usize,
    pub depth: usize,
}

impl TensorShape {
    pub const fn new(rows: usize, columns: usize, depth: usize) -> Self {
        Self {
            rows,
            columns,
            depth,
        }
    }

    /// 深度为1的二维形状
    pub const fn matrix(rows: usize, columns: usize) -> Self {
        Self::new(rows, columns, 1)
    }

    pub const fn empty() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn is_empty(&self) -> bool {
        self.rows == 0 && self.columns == 0 && self.depth == 0
    }

    /// 该形状下元素的总个数，溢出时饱和为`usize::MAX`
    pub const fn size(&self) -> usize {
        self.rows.saturating_mul(self.columns).saturating_mul(self.depth)
    }

    /// 元素总个数，超出`usize`范围时返回None
    pub const fn checked_size(&self) -> Option<usize> {
        match self.rows.checked_mul(self.columns) {
            Some(plane) => plane.checked_mul(self.depth),
            None => None,
        }
    }

    /// 单个深度切片的元素个数，溢出时饱和
    pub const fn plane_size(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// 只比较行与列，忽略深度
    pub const fn same_plane(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns
    }

    pub const fn as_array(&self) -> [usize; 3] {
        [self.rows, self.columns, self.depth]
    }

    /// 由至多3个维度构造形状，缺省的尾部维度补1；`[]`为空形状。
    pub fn from_dims(dims: &[usize]) -> Result<Self, TensorError> {
        match *dims {
            [] => Ok(Self::empty()),
            [rows] => Ok(Self::new(rows, 1, 1)),
            [rows, columns] => Ok(Self::matrix(rows, columns)),
            [rows, columns, depth] => Ok(Self::new(rows, columns, depth)),
            _ => Err(TensorError::TooManyDimensions(dims.len())),
        }
    }
}

impl TryFrom<Vec<usize>> for TensorShape {
    type Error = TensorError;

    fn try_from(dims: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_dims(&dims)
    }
}

impl From<TensorShape> for Vec<usize> {
    fn from(shape: TensorShape) -> Self {
        if shape.is_empty() {
            Vec::new()
        } else {
            shape.as_array().to_vec()
        }
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "—");
        }
        write!(f, "{}×{}×{}", self.rows, self.columns, self.depth)
    }
}
