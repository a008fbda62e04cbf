use super::Tensor;

/// 常量张量归一化时使用的中间值
pub const DEFAULT_NEUTRAL_VALUE: f32 = 0.5;

impl Tensor {
    /// 用于显示的最小-最大归一化：把全部元素从`[min, max]`线性映射到`[0, 1]`。
    /// 若`max == min`，所有元素都映射为`neutral`，避免除零。
    pub fn normalize_for_display(&self, neutral: f32) -> Self {
        let Some((min, max)) = self.min_max() else {
            return self.clone();
        };

        if max == min {
            return Self {
                data: self.data.mapv(|_| neutral),
            };
        }

        let range = max - min;
        Self {
            data: self.data.mapv(|x| (x - min) / range),
        }
    }

    /// 使用默认中间值的`normalize_for_display`
    pub fn normalized(&self) -> Self {
        self.normalize_for_display(DEFAULT_NEUTRAL_VALUE)
    }
}
