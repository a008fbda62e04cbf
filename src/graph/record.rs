/*
 * @Description  : 节点载荷：层类型、输入输出形状、参数量、权重等，
 *                 以及按层类型决定的节点展示变体
 */

use crate::tensor::{Tensor, TensorShape};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 网络中某一层执行的运算类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayerKind {
    /// 图的入口（合成的根节点）
    Input,
    Dense,
    Conv2d,
    TransConv2d,
    Relu,
    LeakyRelu,
    Sigmoid,
    Tanh,
    Swish,
    Selu,
    Softmax,
    MaxPool,
    AvgPool,
    BatchNormalize,
    LayerNormalize,
    Dropout,
    Flatten,
    Reshape,
    Lstm,
    Embedding,
    /// 未收录的层类型，保留原始名称
    Other(String),
}

impl LayerKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Input => "input",
            Self::Dense => "dense",
            Self::Conv2d => "conv2d",
            Self::TransConv2d => "transConv2d",
            Self::Relu => "relu",
            Self::LeakyRelu => "leakyRelu",
            Self::Sigmoid => "sigmoid",
            Self::Tanh => "tanh",
            Self::Swish => "swish",
            Self::Selu => "selu",
            Self::Softmax => "softmax",
            Self::MaxPool => "maxPool",
            Self::AvgPool => "avgPool",
            Self::BatchNormalize => "batchNormalize",
            Self::LayerNormalize => "layerNormalize",
            Self::Dropout => "dropout",
            Self::Flatten => "flatten",
            Self::Reshape => "reshape",
            Self::Lstm => "lstm",
            Self::Embedding => "embedding",
            Self::Other(name) => name,
        }
    }

    pub const fn is_activation(&self) -> bool {
        matches!(
            self,
            Self::Relu
                | Self::LeakyRelu
                | Self::Sigmoid
                | Self::Tanh
                | Self::Swish
                | Self::Selu
                | Self::Softmax
        )
    }

    /// 持有卷积滤波器的层
    pub const fn is_convolution(&self) -> bool {
        matches!(self, Self::Conv2d | Self::TransConv2d)
    }

    /// 卡片上显示的分类名
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Dense => "Fully Connected",
            Self::Conv2d | Self::TransConv2d => "Convolution",
            Self::MaxPool | Self::AvgPool => "Pooling",
            Self::BatchNormalize | Self::LayerNormalize => "Normalization",
            Self::Dropout => "Regularization",
            Self::Flatten | Self::Reshape => "Reshape",
            Self::Lstm => "Recurrent",
            Self::Embedding => "Embedding",
            Self::Other(_) => "Layer",
            _ => "Activation",
        }
    }

    /// 节点的显示颜色（RGB）
    pub const fn color(&self) -> [u8; 3] {
        match self {
            Self::Relu
            | Self::LeakyRelu
            | Self::Sigmoid
            | Self::Tanh
            | Self::Swish
            | Self::Selu
            | Self::Softmax => [51, 153, 51],
            Self::BatchNormalize | Self::LayerNormalize => [153, 128, 204],
            Self::Conv2d | Self::TransConv2d => [0, 128, 204],
            Self::Dense => [204, 102, 102],
            Self::Dropout => [179, 26, 179],
            Self::Flatten => [179, 102, 204],
            Self::MaxPool | Self::AvgPool => [230, 153, 51],
            Self::Reshape => [204, 153, 204],
            Self::Lstm | Self::Embedding => [153, 102, 204],
            Self::Input => [77, 128, 204],
            Self::Other(_) => [128, 128, 128],
        }
    }
}

impl From<&str> for LayerKind {
    fn from(name: &str) -> Self {
        match name {
            "input" => Self::Input,
            "dense" => Self::Dense,
            "conv2d" => Self::Conv2d,
            "transConv2d" => Self::TransConv2d,
            "relu" => Self::Relu,
            "leakyRelu" => Self::LeakyRelu,
            "sigmoid" => Self::Sigmoid,
            "tanh" => Self::Tanh,
            "swish" => Self::Swish,
            "selu" => Self::Selu,
            "softmax" => Self::Softmax,
            "maxPool" => Self::MaxPool,
            "avgPool" => Self::AvgPool,
            "batchNormalize" => Self::BatchNormalize,
            "layerNormalize" => Self::LayerNormalize,
            "dropout" => Self::Dropout,
            "flatten" => Self::Flatten,
            "reshape" => Self::Reshape,
            "lstm" => Self::Lstm,
            "embedding" => Self::Embedding,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LayerKind {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<LayerKind> for String {
    fn from(kind: LayerKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 挂在节点上的层信息
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRecord {
    pub kind: LayerKind,
    pub input_shape: TensorShape,
    pub output_shape: TensorShape,
    /// 可训练参数个数，无参数的层为0
    pub parameters: usize,
    pub details: String,
    /// 已训练好的权重，只读；无参数的层为空
    pub weights: Vec<Tensor>,
    /// 单个滤波器（卷积核）的形状，仅卷积层有意义
    pub weights_size: TensorShape,
}

impl LayerRecord {
    pub fn new(kind: LayerKind, input_shape: TensorShape, output_shape: TensorShape) -> Self {
        Self {
            kind,
            input_shape,
            output_shape,
            parameters: 0,
            details: String::new(),
            weights: Vec::new(),
            weights_size: TensorShape::empty(),
        }
    }

    /// 入口节点的载荷，输入输出都是网络的输入形状
    pub fn input(shape: TensorShape) -> Self {
        Self::new(LayerKind::Input, shape, shape)
    }

    pub fn with_parameters(mut self, parameters: usize) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_weights(mut self, weights: Vec<Tensor>, weights_size: TensorShape) -> Self {
        self.weights = weights;
        self.weights_size = weights_size;
        self
    }
}

/// 节点的展示变体，由层类型在建图时决定；展示层对其做模式匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeVariant {
    /// 网络入口卡片
    Input,
    /// 激活函数的精简卡片
    Activation,
    /// 可展开滤波器画廊、可拖入图像预览的卷积卡片
    Convolution {
        filter_count: usize,
        unit: TensorShape,
    },
    /// 普通层的详细卡片
    Detailed,
}

impl NodeVariant {
    pub fn for_record(record: &LayerRecord) -> Self {
        match &record.kind {
            LayerKind::Input => Self::Input,
            kind if kind.is_activation() => Self::Activation,
            kind if kind.is_convolution() => Self::Convolution {
                filter_count: record.weights.len(),
                unit: record.weights_size,
            },
            _ => Self::Detailed,
        }
    }
}
