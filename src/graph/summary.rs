use super::{GraphError, GraphModel};
use crate::tensor::TensorShape;
use std::fmt;

/// 网络概览：层数、总参数量、输入输出形状与分层深度
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    /// 不含合成根节点的层数
    pub layer_count: usize,
    /// 各层参数量之和，溢出时饱和为`usize::MAX`
    pub total_parameters: usize,
    /// 第一层的输入形状
    pub input_shape: TensorShape,
    /// 最后一层的输出形状
    pub output_shape: TensorShape,
    /// 根节点以下的行数
    pub depth: usize,
}

impl NetworkSummary {
    /// 按分层顺序统计从根可达的节点
    pub fn from_graph(graph: &GraphModel) -> Result<Self, GraphError> {
        let rows = graph.assign_node_rows()?;
        let layers: Vec<_> = rows.iter().skip(1).flatten().collect();

        Ok(Self {
            layer_count: layers.len(),
            total_parameters: layers
                .iter()
                .map(|node| node.record().parameters)
                .fold(0, usize::saturating_add),
            input_shape: layers
                .first()
                .map_or_else(TensorShape::empty, |node| node.record().input_shape),
            output_shape: layers
                .last()
                .map_or_else(TensorShape::empty, |node| node.record().output_shape),
            depth: rows.len() - 1,
        })
    }
}

impl fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "层数: {}", self.layer_count)?;
        writeln!(f, "参数: {}", format_count(self.total_parameters))?;
        writeln!(f, "输入: {}", self.input_shape)?;
        writeln!(f, "输出: {}", self.output_shape)?;
        write!(f, "深度: {}", self.depth)
    }
}

/// 紧凑的计数格式：`950`、`1.5K`、`2.3M`
pub fn format_count(count: usize) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
