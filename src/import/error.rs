use crate::graph::GraphError;
use thiserror::Error;

/// 模型导入错误
#[derive(Debug, Error)]
pub enum ImportError {
    /// 模型描述格式错误，不生成任何图
    #[error("模型解析失败: {0}")]
    Decode(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("建图失败: {0}")]
    Graph(#[from] GraphError),

    /// 后台导入线程在交付结果前退出
    #[error("导入任务已中止")]
    Cancelled,
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
