//! 查看器配置，从 JSON 文件读取，缺省的字段取默认值

use crate::tensor::DEFAULT_NEUTRAL_VALUE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// 常量张量归一化时使用的中间值
    pub neutral_value: f32,
    /// 画廊每行的画面数
    pub gallery_columns: usize,
    /// 是否用 Rayon 并行处理各滤波器
    pub parallel_preview: bool,
    /// 预览图片的输出目录
    pub output_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            neutral_value: DEFAULT_NEUTRAL_VALUE,
            gallery_columns: 3,
            parallel_preview: true,
            output_dir: PathBuf::from("preview"),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从本地文件加载配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }
}
