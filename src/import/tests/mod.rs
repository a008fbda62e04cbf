mod decode;

/// 两层的顺序模型：3×3 单通道卷积（2个滤波器）→ relu
const CHAIN_JSON: &str = r#"{
    "name": "tiny-cnn",
    "layers": [
        {
            "kind": "conv2d",
            "input_shape": [4, 4, 1],
            "output_shape": [4, 4, 2],
            "parameters": 20,
            "details": "3x3, same",
            "weights_size": [3, 3, 2],
            "weights": [
                { "shape": [3, 3, 1], "data": [0, 0, 0, 0, 1, 0, 0, 0, 0] },
                { "shape": [3, 3, 1], "data": [1, 1, 1, 1, 1, 1, 1, 1, 1] }
            ]
        },
        { "kind": "relu", "input_shape": [4, 4, 2], "output_shape": [4, 4, 2] }
    ]
}"#;

/// 残差块：0 → 1 → 2，且 0 → 2
const RESIDUAL_JSON: &str = r#"{
    "name": "residual",
    "layers": [
        { "kind": "dense", "input_shape": [8], "output_shape": [8], "parameters": 72 },
        { "kind": "relu", "input_shape": [8], "output_shape": [8], "inputs": [0] },
        { "kind": "add", "input_shape": [8], "output_shape": [8], "inputs": [1, 0] }
    ]
}"#;
