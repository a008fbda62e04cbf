use super::{CHAIN_JSON, RESIDUAL_JSON};
use crate::assert_err;
use crate::errors::TensorError;
use crate::graph::{LayerKind, NetworkSummary, NodeVariant};
use crate::import::{ImportError, ModelDescriptor, build_graph, decode, import_model};
use crate::tensor::TensorShape;

#[test]
fn test_decode_layers_in_order() {
    let layers = decode(CHAIN_JSON.as_bytes()).unwrap();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].kind, LayerKind::Conv2d);
    assert_eq!(layers[0].input_shape, TensorShape::new(4, 4, 1));
    assert_eq!(layers[0].weights_size, TensorShape::new(3, 3, 2));
    assert_eq!(layers[1].kind, LayerKind::Relu);
    assert_eq!(layers[1].parameters, 0);
    assert!(layers[1].weights.is_empty());
}

#[test]
fn test_unknown_kind_is_kept_by_name() {
    let layers = decode(RESIDUAL_JSON.as_bytes()).unwrap();
    assert_eq!(layers[2].kind, LayerKind::Other("add".to_string()));
}

#[test]
fn test_malformed_bytes() {
    assert_err!(decode(b"not json"), ImportError::Decode(_));
    assert_err!(
        decode(br#"{ "layers": [ { "kind": "dense", "input_shape": [1, 2, 3, 4] } ] }"#),
        ImportError::Decode(_)
    );
}

#[test]
fn test_forward_input_reference_is_rejected() {
    let json = r#"{ "layers": [
        { "kind": "dense", "inputs": [1] },
        { "kind": "dense" }
    ] }"#;
    assert_err!(
        decode(json.as_bytes()),
        ImportError::Decode("第0层的输入1必须是排在它之前的层")
    );

    let self_reference = r#"{ "layers": [ { "kind": "dense" }, { "kind": "relu", "inputs": [1] } ] }"#;
    assert_err!(decode(self_reference.as_bytes()), ImportError::Decode(_));
}

#[test]
fn test_export_weights() {
    let layers = decode(CHAIN_JSON.as_bytes()).unwrap();
    let weights = layers[0].export_weights().unwrap();
    assert_eq!(weights.len(), 2);
    assert_eq!(weights[0].shape(), TensorShape::new(3, 3, 1));
    assert_eq!(weights[0].get(1, 1, 0), Some(1.0));
    assert_eq!(weights[0].get(0, 0, 0), Some(0.0));
}

#[test]
fn test_bad_weights_become_no_weights() {
    let json = r#"{ "layers": [ {
        "kind": "conv2d",
        "input_shape": [4, 4, 1],
        "weights_size": [2, 2, 1],
        "weights": [ { "shape": [2, 2, 1], "data": [1, 2, 3] } ]
    } ] }"#;
    let layers = decode(json.as_bytes()).unwrap();
    assert!(layers[0].export_weights().is_err());

    let record = layers[0].to_record(0);
    assert!(record.weights.is_empty());
    assert_eq!(record.kind, LayerKind::Conv2d);
}

#[test]
fn test_import_chain() {
    let graph = import_model(CHAIN_JSON.as_bytes()).unwrap();
    assert_eq!(graph.name(), "tiny-cnn");
    assert_eq!(graph.len(), 3);

    let rows = graph.assign_node_rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0].record().kind, LayerKind::Input);
    assert_eq!(rows[0][0].record().output_shape, TensorShape::new(4, 4, 1));
    assert_eq!(
        rows[1][0].variant(),
        NodeVariant::Convolution {
            filter_count: 2,
            unit: TensorShape::new(3, 3, 2),
        }
    );
    assert_eq!(rows[2][0].variant(), NodeVariant::Activation);

    let summary = NetworkSummary::from_graph(&graph).unwrap();
    assert_eq!(summary.layer_count, 2);
    assert_eq!(summary.total_parameters, 20);
    assert_eq!(summary.output_shape, TensorShape::new(4, 4, 2));
}

#[test]
fn test_import_residual_block() {
    let model = ModelDescriptor::decode(RESIDUAL_JSON.as_bytes()).unwrap();
    assert!(model.has_branches());

    let graph = build_graph(&model).unwrap();
    let rows = graph.assign_node_rows().unwrap();
    let kinds: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.iter().map(|node| node.record().kind.as_str()).collect())
        .collect();
    // 汇合层落在最早发现它的那一行
    assert_eq!(kinds, vec![vec!["input"], vec!["dense"], vec!["relu", "add"]]);
}

#[test]
fn test_empty_model() {
    let graph = import_model(br#"{ "layers": [] }"#).unwrap();
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.assign_rows().unwrap(), vec![vec![graph.root_id()]]);
    assert!(graph.root().record().input_shape.is_empty());
}

#[test]
fn test_descriptor_json_round_trip() {
    let model = ModelDescriptor::from_json(CHAIN_JSON).unwrap();
    let again = ModelDescriptor::from_json(&model.to_json().unwrap()).unwrap();
    assert_eq!(again.name, model.name);
    assert_eq!(again.layers.len(), 2);
    assert_eq!(again.layers[0].weights[1].data, model.layers[0].weights[1].data);
    assert!(again.layers[1].inputs.is_none());
}

#[test]
fn test_oversized_weight_shape_becomes_no_weights() {
    let json = r#"{ "layers": [ {
        "kind": "conv2d",
        "weights": [ { "shape": [4294967296, 4294967296, 1], "data": [] } ]
    } ] }"#;
    let layers = decode(json.as_bytes()).unwrap();
    assert_err!(layers[0].export_weights(), TensorError::SizeOverflow { .. });

    let graph = import_model(json.as_bytes()).unwrap();
    let rows = graph.assign_node_rows().unwrap();
    assert!(rows[1][0].record().weights.is_empty());
}

#[test]
fn test_huge_parameter_counts_saturate() {
    let json = format!(
        r#"{{ "layers": [
            {{ "kind": "dense", "parameters": {} }},
            {{ "kind": "dense", "parameters": 1 }}
        ] }}"#,
        usize::MAX
    );
    let graph = import_model(json.as_bytes()).unwrap();
    let summary = NetworkSummary::from_graph(&graph).unwrap();
    assert_eq!(summary.total_parameters, usize::MAX);
}
