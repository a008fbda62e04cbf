use thiserror::Error;

/// 张量相关的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// 行、列或通道数不一致，无法完成运算
    #[error("形状不匹配：期望{expected:?}，实际为{got:?}（{message}）")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },

    /// 深度切片等索引越界
    #[error("索引越界：{index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// 构造张量时数据长度与形状不符
    #[error("数据长度{got}与形状所需的元素个数{expected}不一致")]
    DataLengthMismatch { expected: usize, got: usize },

    /// 形状的元素总数超出`usize`范围
    #[error("形状{rows}×{columns}×{depth}的元素个数超出可表示范围")]
    SizeOverflow {
        rows: usize,
        columns: usize,
        depth: usize,
    },

    /// 形状最多只能有行、列、深度3个维度
    #[error("张量形状最多3个维度，实际得到{0}个")]
    TooManyDimensions(usize),
}
