use super::NodeId;
use crate::errors::TensorError;
use thiserror::Error;

/// 节点图相关的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("节点{0}不存在")]
    NodeNotFound(NodeId),

    /// 连接构成了环（含自环），无法分层
    #[error("检测到环：经由节点{0}回到了正在遍历的路径")]
    CycleDetected(NodeId),

    /// 某层声明的输入不是排在它之前的层
    #[error("第{layer}层的输入{input}必须是排在它之前的层")]
    InvalidInput { layer: usize, input: usize },

    #[error(transparent)]
    Tensor(#[from] TensorError),
}
