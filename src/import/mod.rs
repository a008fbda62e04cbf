/*
 * @Description  : 模型导入：JSON 模型描述 → 各层描述 → 节点图。
 *                 解析与建图可能较慢（权重很大），可经由`spawn_import`放到后台线程。
 */

mod error;
mod task;

#[cfg(test)]
mod tests;

pub use error::ImportError;
pub use task::{ImportTask, spawn_import};

use crate::errors::TensorError;
use crate::graph::{GraphModel, LayerKind, LayerRecord, build_chain, build_dag};
use crate::tensor::{Tensor, TensorShape};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 整个模型的可序列化描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    #[serde(default)]
    pub name: String,
    pub layers: Vec<LayerDescriptor>,
}

/// 单层描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub kind: LayerKind,
    #[serde(default)]
    pub input_shape: TensorShape,
    #[serde(default)]
    pub output_shape: TensorShape,
    #[serde(default)]
    pub parameters: usize,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub weights: Vec<WeightDescriptor>,
    /// 单个滤波器的形状（行, 列, 滤波器个数），仅卷积层有意义
    #[serde(default)]
    pub weights_size: TensorShape,
    /// 输入层下标，缺省时承接前一层
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<usize>>,
}

/// 单个权重张量，数据按深度平面、行优先排列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightDescriptor {
    pub shape: TensorShape,
    pub data: Vec<f32>,
}

impl ModelDescriptor {
    /// 解析并校验模型描述
    pub fn decode(bytes: &[u8]) -> Result<Self, ImportError> {
        let model: Self = serde_json::from_slice(bytes)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        Self::decode(json.as_bytes())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 是否有层声明了输入，即需要建成有向无环图而非链
    pub fn has_branches(&self) -> bool {
        self.layers.iter().any(|layer| layer.inputs.is_some())
    }

    fn validate(&self) -> Result<(), ImportError> {
        for (index, layer) in self.layers.iter().enumerate() {
            if let Some(input) = layer
                .inputs
                .iter()
                .flatten()
                .find(|&&input| input >= index)
            {
                return Err(ImportError::Decode(format!(
                    "第{index}层的输入{input}必须是排在它之前的层"
                )));
            }
        }
        Ok(())
    }
}

impl WeightDescriptor {
    pub fn to_tensor(&self) -> Result<Tensor, TensorError> {
        Tensor::new(&self.data, self.shape)
    }
}

impl LayerDescriptor {
    /// 导出该层的权重张量
    pub fn export_weights(&self) -> Result<Vec<Tensor>, TensorError> {
        self.weights.iter().map(WeightDescriptor::to_tensor).collect()
    }

    /// 转为节点载荷。权重导出失败时视为“没有权重”，不影响导入
    pub fn to_record(&self, index: usize) -> LayerRecord {
        let weights = self.export_weights().unwrap_or_else(|err| {
            log::warn!("第{index}层（{}）的权重无法导出，按无权重处理: {err}", self.kind);
            Vec::new()
        });
        LayerRecord::new(self.kind.clone(), self.input_shape, self.output_shape)
            .with_parameters(self.parameters)
            .with_details(self.details.clone())
            .with_weights(weights, self.weights_size)
    }
}

/// 解析模型字节，返回按顺序排列的各层描述
pub fn decode(bytes: &[u8]) -> Result<Vec<LayerDescriptor>, ImportError> {
    Ok(ModelDescriptor::decode(bytes)?.layers)
}

/// 由模型描述建图：没有任何层声明输入时建成链，否则建成有向无环图
pub fn build_graph(model: &ModelDescriptor) -> Result<GraphModel, ImportError> {
    let records = model
        .layers
        .iter()
        .enumerate()
        .map(|(index, layer)| layer.to_record(index));

    let graph = if model.has_branches() {
        let layers = records
            .zip(model.layers.iter().map(|layer| layer.inputs.clone()))
            .collect();
        build_dag(&model.name, layers)?
    } else {
        build_chain(&model.name, records.collect())?
    };
    Ok(graph)
}

/// 解析并建图
pub fn import_model(bytes: &[u8]) -> Result<GraphModel, ImportError> {
    let model = ModelDescriptor::decode(bytes)?;
    let graph = build_graph(&model)?;
    log::info!(
        "已导入模型「{}」：{}层，共{}个参数",
        model.name,
        model.layers.len(),
        model
            .layers
            .iter()
            .map(|layer| layer.parameters)
            .fold(0, usize::saturating_add)
    );
    Ok(graph)
}

/// 从本地文件导入
pub fn import_file(path: impl AsRef<Path>) -> Result<GraphModel, ImportError> {
    let bytes = std::fs::read(path)?;
    import_model(&bytes)
}
