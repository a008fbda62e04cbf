use super::{dense, diamond};
use crate::graph::{LayerKind, NetworkSummary, build_chain, format_count};
use crate::tensor::TensorShape;

#[test]
fn test_format_count() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_500), "1.5K");
    assert_eq!(format_count(2_345_678), "2.3M");
}

#[test]
fn test_summary_of_chain() {
    let graph = build_chain("mlp", vec![dense(784, 128), dense(128, 10)]).unwrap();
    let summary = NetworkSummary::from_graph(&graph).unwrap();
    assert_eq!(summary.layer_count, 2);
    assert_eq!(summary.total_parameters, 784 * 128 + 128 * 10);
    assert_eq!(summary.input_shape, TensorShape::new(784, 1, 1));
    assert_eq!(summary.output_shape, TensorShape::new(10, 1, 1));
    assert_eq!(summary.depth, 2);

    let text = summary.to_string();
    assert!(text.contains("参数: 101.6K"));
    assert!(text.contains("输入: 784×1×1"));
}

#[test]
fn test_summary_of_diamond() {
    let (graph, _) = diamond();
    let summary = NetworkSummary::from_graph(&graph).unwrap();
    assert_eq!(summary.layer_count, 3);
    assert_eq!(summary.depth, 2);
    assert_eq!(summary.output_shape, TensorShape::new(2, 1, 1));
}

#[test]
fn test_summary_of_empty_graph() {
    let graph = build_chain("empty", Vec::new()).unwrap();
    let summary = NetworkSummary::from_graph(&graph).unwrap();
    assert_eq!(summary.layer_count, 0);
    assert_eq!(summary.input_shape.to_string(), "—");
    assert_eq!(summary.depth, 0);
}

#[test]
fn test_layer_kind_names() {
    assert_eq!(LayerKind::from("batchNormalize"), LayerKind::BatchNormalize);
    assert_eq!(LayerKind::from("gelu"), LayerKind::Other("gelu".to_string()));
    assert_eq!(LayerKind::TransConv2d.as_str(), "transConv2d");
    assert_eq!(LayerKind::Other("gelu".to_string()).to_string(), "gelu");
    assert_eq!(LayerKind::MaxPool.category(), "Pooling");
    assert_eq!(LayerKind::Selu.category(), "Activation");
    assert!(LayerKind::Tanh.is_activation());
    assert!(!LayerKind::Dense.is_convolution());
}

#[test]
fn test_summary_total_saturates() {
    let graph = build_chain(
        "huge",
        vec![dense(1, 1).with_parameters(usize::MAX), dense(1, 1)],
    )
    .unwrap();
    let summary = NetworkSummary::from_graph(&graph).unwrap();
    assert_eq!(summary.total_parameters, usize::MAX);
}
