/*
 * @Description  : 导入网络后的节点图。
 *                 节点由图统一持有，连接只保存目标节点的 NodeId（非所有权引用）；
 *                 图建好后只读，唯一可变的是展示层写入的建议坐标。
 */

mod builder;
mod dot;
mod error;
mod layering;
mod record;
mod summary;

#[cfg(test)]
mod tests;

pub use builder::{build_chain, build_dag};
pub use error::GraphError;
pub use record::{LayerKind, LayerRecord, NodeVariant};
pub use summary::{NetworkSummary, format_count};

use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 图中的一个节点
#[derive(Debug, Clone)]
pub struct GraphNode {
    id: NodeId,
    record: LayerRecord,
    variant: NodeVariant,
    /// 有向边“流向”的目标，保持声明顺序
    connections: Vec<NodeId>,
    /// 展示层写入的建议坐标
    position: Option<(f32, f32)>,
}

impl GraphNode {
    pub const fn id(&self) -> NodeId {
        self.id
    }

    pub const fn record(&self) -> &LayerRecord {
        &self.record
    }

    pub const fn variant(&self) -> NodeVariant {
        self.variant
    }

    pub fn connections(&self) -> &[NodeId] {
        &self.connections
    }

    pub const fn position(&self) -> Option<(f32, f32)> {
        self.position
    }
}

/// 以唯一根节点（网络输入）为入口的有向图
#[derive(Debug, Clone)]
pub struct GraphModel {
    name: String,
    nodes: BTreeMap<NodeId, GraphNode>,
    root: NodeId,
    next_id: u64,
}

impl GraphModel {
    /// 创建只含根节点的图
    pub fn new(name: &str, root: LayerRecord) -> Self {
        let mut graph = Self {
            name: name.to_string(),
            nodes: BTreeMap::new(),
            root: NodeId(0),
            next_id: 0,
        };
        graph.root = graph.add_node(root);
        graph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &GraphNode {
        // 根节点在构造时插入且从不移除
        &self.nodes[&self.root]
    }

    /// 添加一个尚未连接的节点，返回其 ID
    pub fn add_node(&mut self, record: LayerRecord) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let variant = NodeVariant::for_record(&record);
        self.nodes.insert(
            id,
            GraphNode {
                id,
                record,
                variant,
                connections: Vec::new(),
                position: None,
            },
        );
        id
    }

    /// 添加一条`from → to`的有向边，追加在`from`已有连接之后。
    /// 这里不检查环：环在`assign_rows`（经由`ensure_acyclic`）时以
    /// `GraphError::CycleDetected`报告。
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::NodeNotFound(to));
        }
        let node = self
            .nodes
            .get_mut(&from)
            .ok_or(GraphError::NodeNotFound(from))?;
        node.connections.push(to);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Result<&GraphNode, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn connections(&self, id: NodeId) -> Result<&[NodeId], GraphError> {
        Ok(self.node(id)?.connections())
    }

    /// 按 ID 顺序遍历全部节点（含不可从根到达的节点）
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 展示层回写节点坐标
    pub fn set_position(&mut self, id: NodeId, x: f32, y: f32) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))?;
        node.position = Some((x, y));
        Ok(())
    }

    /// 检查从根可达的部分是否无环。
    /// 用“进行中/已完成”两种标记做迭代式深度优先遍历，遇到指向进行中节点的边即为环。
    pub fn ensure_acyclic(&self) -> Result<(), GraphError> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            InProgress,
            Done,
        }

        let mut marks: HashMap<NodeId, Mark> = HashMap::from([(self.root, Mark::InProgress)]);
        let mut stack: Vec<(NodeId, usize)> = vec![(self.root, 0)];

        while let Some(&(id, cursor)) = stack.last() {
            match self.connections(id)?.get(cursor) {
                Some(&next) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }
                    match marks.get(&next) {
                        Some(Mark::InProgress) => return Err(GraphError::CycleDetected(next)),
                        Some(Mark::Done) => {}
                        None => {
                            marks.insert(next, Mark::InProgress);
                            stack.push((next, 0));
                        }
                    }
                }
                None => {
                    marks.insert(id, Mark::Done);
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}
