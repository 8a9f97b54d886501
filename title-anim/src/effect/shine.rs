//! # 高光扫过效果
//!
//! `shine`：一个宽度至多为 [`SHINE_WIDTH`] 的高光从左侧进入，匀速扫过整段文本后从右侧离开。
//!
//! ## 参数
//!
//! ```text
//! [扫过颜色][前导颜色][收尾颜色][恢复码;高光码]文本
//! ```
//!
//! ## 帧序列（共 `len + W + 1` 帧）
//!
//! ```text
//! i = 0                 前导帧：resume + S                       前导颜色
//! i = 1 ..= len + W - 1 扫过帧：窗口 [start, end) 插入高光码      扫过颜色
//! i = len + W           收尾帧：resume + S，done = true           收尾颜色
//! ```
//!
//! 扫过阶段 `start = max(0, k - W)`，`end = min(len, k)`：窗口宽度先从 1 增长到 `W`，
//! 完全位于文本内时保持 `W`，接近末尾时再收缩回 1。

use super::{Effect, FrameSource, check_index, color_triple, expect_groups, group_tokens};
use crate::error::EffectError;
use crate::frame::{ColorTriple, Frame};
use crate::params::EncodedParams;

/// 高光窗口最大宽度
pub const SHINE_WIDTH: usize = 3;

/// 计算扫过阶段第 `k` 步的高光窗口 `[start, end)`
///
/// 对 `k >= 1` 保证 `start <= end <= len` 且 `end - start <= SHINE_WIDTH`。
pub fn shine_window(k: usize, len: usize) -> (usize, usize) {
    let end = k.min(len);
    let start = k.saturating_sub(SHINE_WIDTH).min(end);
    (start, end)
}

/// 高光扫过动画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shine {
    sweep: ColorTriple,
    pre: ColorTriple,
    post: ColorTriple,
    /// 恢复普通样式的格式码
    resume: String,
    /// 高光格式码
    highlight: String,
    chars: Vec<char>,
}

impl Shine {
    pub fn from_params(params: &EncodedParams) -> Result<Self, EffectError> {
        let effect = Effect::Shine;
        expect_groups(effect, params, 4)?;

        let sweep = color_triple(effect, params, 0)?;
        let pre = color_triple(effect, params, 1)?;
        let post = color_triple(effect, params, 2)?;
        let [resume, highlight] = group_tokens::<2>(effect, params, 3)?;

        Ok(Self {
            sweep,
            pre,
            post,
            resume: resume.to_string(),
            highlight: highlight.to_string(),
            chars: params.payload().chars().collect(),
        })
    }

    /// 无高光的整段文本（前导帧与收尾帧）
    fn plain_text(&self) -> String {
        let mut text = self.resume.clone();
        text.extend(&self.chars);
        text
    }

    fn sweep_text(&self, k: usize) -> String {
        let (start, end) = shine_window(k, self.chars.len());

        let mut text = String::with_capacity(
            self.resume.len() * 2 + self.highlight.len() + self.chars.len() * 4,
        );
        text.push_str(&self.resume);
        text.extend(&self.chars[..start]);
        text.push_str(&self.highlight);
        text.extend(&self.chars[start..end]);
        text.push_str(&self.resume);
        text.extend(&self.chars[end..]);
        text
    }
}

impl FrameSource for Shine {
    fn effect(&self) -> Effect {
        Effect::Shine
    }

    fn frame_count(&self) -> usize {
        self.chars.len() + SHINE_WIDTH + 1
    }

    fn frame(&self, index: usize) -> Result<Frame, EffectError> {
        check_index(self, index)?;
        Ok(self.render_frame(index))
    }
}

impl Shine {
    /// 调用方保证 `index < frame_count()`
    pub(crate) fn render_frame(&self, index: usize) -> Frame {
        let last = self.frame_count() - 1;
        if index == 0 {
            Frame::new(self.plain_text(), false, self.pre.clone())
        } else if index == last {
            Frame::new(self.plain_text(), true, self.post.clone())
        } else {
            Frame::new(self.sweep_text(index), false, self.sweep.clone())
        }
    }
}
