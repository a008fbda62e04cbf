use super::{GraphError, GraphModel, GraphNode, NodeId};
use std::collections::HashSet;

impl GraphModel {
    /// 将图按广度优先的发现顺序分成若干行，用于自上而下的布局。
    ///
    /// - 第0行恒为`[root]`；
    /// - 之后每行是上一行各节点尚未访问过的连接目标，每个节点只出现一次，
    ///   汇合节点落在最早发现它的那一行；
    /// - 行内顺序先按父节点的遍历顺序、再按连接的声明顺序，对同一输入结果稳定。
    ///
    /// # 错误
    /// 从根可达的部分存在环时返回`GraphError::CycleDetected`。
    pub fn assign_rows(&self) -> Result<Vec<Vec<NodeId>>, GraphError> {
        self.ensure_acyclic()?;

        let mut visited: HashSet<NodeId> = HashSet::from([self.root]);
        let mut rows = vec![vec![self.root]];
        let mut frontier = vec![self.root];

        loop {
            let mut discovered = Vec::new();
            for &id in &frontier {
                for &target in self.connections(id)? {
                    // 先登记再下探，同一行内的节点按身份互斥
                    if visited.insert(target) {
                        discovered.push(target);
                    }
                }
            }
            if discovered.is_empty() {
                break;
            }
            rows.push(discovered.clone());
            frontier = discovered;
        }

        log::debug!(
            "图「{}」分为{}行，共{}个节点",
            self.name,
            rows.len(),
            visited.len()
        );
        Ok(rows)
    }

    /// `assign_rows`的节点引用版本
    pub fn assign_node_rows(&self) -> Result<Vec<Vec<&GraphNode>>, GraphError> {
        self.assign_rows()?
            .into_iter()
            .map(|row| row.into_iter().map(|id| self.node(id)).collect())
            .collect()
    }
}
