use super::FilterPreviewEngine;
use crate::errors::TensorError;
use crate::graph::LayerRecord;
use crate::tensor::Tensor;

/// 把每个权重张量拆成逐通道的深度切片，作为未拖入图像时的默认画面
pub fn weight_frames(weights: &[Tensor]) -> Vec<Tensor> {
    weights.iter().flat_map(Tensor::depth_slices).collect()
}

/// 卷积节点的滤波器画廊。
/// 默认展示权重本身；拖入图像后展示预览结果，清除后回到权重画面。
#[derive(Debug, Clone)]
pub struct FilterGallery<'a> {
    record: &'a LayerRecord,
    frames: Vec<Tensor>,
    previewing: bool,
}

impl<'a> FilterGallery<'a> {
    pub fn new(record: &'a LayerRecord) -> Self {
        Self {
            record,
            frames: weight_frames(&record.weights),
            previewing: false,
        }
    }

    /// 用该层的滤波器预览`image`；失败时画廊保持原样
    pub fn preview(
        &mut self,
        engine: &FilterPreviewEngine,
        image: &Tensor,
    ) -> Result<(), TensorError> {
        let frames = engine.preview(&self.record.weights, self.record.weights_size, image)?;
        self.frames = frames;
        self.previewing = true;
        Ok(())
    }

    pub fn clear_preview(&mut self) {
        self.frames = weight_frames(&self.record.weights);
        self.previewing = false;
    }

    pub const fn is_previewing(&self) -> bool {
        self.previewing
    }

    pub fn frames(&self) -> &[Tensor] {
        &self.frames
    }

    /// 归一化到[0, 1]后的画面，交给图像编解码显示
    pub fn display_frames(&self, neutral: f32) -> Vec<Tensor> {
        self.frames
            .iter()
            .map(|frame| frame.normalize_for_display(neutral))
            .collect()
    }

    /// 按每行`columns`个画面分组
    pub fn rows(&self, columns: usize) -> Vec<&[Tensor]> {
        self.frames.chunks(columns.max(1)).collect()
    }
}
