use crate::graph::{GraphModel, LayerKind, LayerRecord, NodeId};
use crate::tensor::TensorShape;

mod summary;

/// 测试用的普通层载荷
fn dense(input: usize, output: usize) -> LayerRecord {
    LayerRecord::new(
        LayerKind::Dense,
        TensorShape::new(input, 1, 1),
        TensorShape::new(output, 1, 1),
    )
    .with_parameters(input * output)
}

/// A→{B,C}，B→D，C→D
fn diamond() -> (GraphModel, [NodeId; 4]) {
    let mut graph = GraphModel::new("diamond", LayerRecord::input(TensorShape::new(4, 1, 1)));
    let a = graph.root_id();
    let b = graph.add_node(dense(4, 8));
    let c = graph.add_node(LayerRecord::new(
        LayerKind::Relu,
        TensorShape::new(4, 1, 1),
        TensorShape::new(4, 1, 1),
    ));
    let d = graph.add_node(dense(8, 2));
    graph.connect(a, b).unwrap();
    graph.connect(a, c).unwrap();
    graph.connect(b, d).unwrap();
    graph.connect(c, d).unwrap();
    (graph, [a, b, c, d])
}
