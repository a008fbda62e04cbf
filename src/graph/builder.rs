use super::{GraphError, GraphModel, LayerRecord, NodeId};
use crate::tensor::TensorShape;

/// 把顺序模型的各层串成一条链：`root → layer1 → layer2 → ...`。
/// 根节点是合成的入口节点，其形状取第一层的输入形状（没有层时为空形状）。
pub fn build_chain(name: &str, layers: Vec<LayerRecord>) -> Result<GraphModel, GraphError> {
    let mut graph = GraphModel::new(name, entry_record(layers.first()));
    let mut previous = graph.root_id();
    for record in layers {
        let id = graph.add_node(record);
        graph.connect(previous, id)?;
        previous = id;
    }
    Ok(graph)
}

/// 按各层声明的输入建成有向无环图（如残差块）。
///
/// `layers[i].1`为第`i`层的输入层下标：
/// - `None`：承接前一层（第0层承接根节点）；
/// - `Some(vec![])`：直接承接根节点；
/// - `Some(inputs)`：每个下标都必须小于`i`，否则返回`GraphError::InvalidInput`。
///
/// 同一父节点上的连接按层的顺序追加，保证分层结果的行内顺序稳定。
pub fn build_dag(
    name: &str,
    layers: Vec<(LayerRecord, Option<Vec<usize>>)>,
) -> Result<GraphModel, GraphError> {
    let mut graph = GraphModel::new(name, entry_record(layers.first().map(|(record, _)| record)));
    let root = graph.root_id();

    let mut ids: Vec<NodeId> = Vec::with_capacity(layers.len());
    for (index, (record, inputs)) in layers.into_iter().enumerate() {
        let sources: Vec<NodeId> = match inputs {
            None if index == 0 => vec![root],
            None => vec![ids[index - 1]],
            Some(inputs) if inputs.is_empty() => vec![root],
            Some(inputs) => inputs
                .into_iter()
                .map(|input| {
                    ids.get(input)
                        .copied()
                        .ok_or(GraphError::InvalidInput {
                            layer: index,
                            input,
                        })
                })
                .collect::<Result<_, _>>()?,
        };

        let id = graph.add_node(record);
        for source in sources {
            graph.connect(source, id)?;
        }
        ids.push(id);
    }
    Ok(graph)
}

fn entry_record(first: Option<&LayerRecord>) -> LayerRecord {
    let shape = first.map_or_else(TensorShape::empty, |record| record.input_shape);
    LayerRecord::input(shape)
}
