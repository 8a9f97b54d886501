//! # 打字效果
//!
//! `text_write` / `text_delete`：参数为一个颜色分组，载荷为任意文本 `S`，共 `len(S) + 1` 帧。
//! 长度按 `char` 计，不考虑显示宽度。

use super::{Effect, FrameSource, check_index, color_triple, expect_groups};
use crate::error::EffectError;
use crate::frame::{ColorTriple, Frame};
use crate::params::EncodedParams;

/// 打字方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMode {
    /// 第 i 帧显示前 i 个字符
    Write,
    /// 第 i 帧去掉前 i 个字符
    Delete,
}

/// 打字动画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    mode: TypeMode,
    colors: ColorTriple,
    chars: Vec<char>,
}

impl Typewriter {
    pub fn from_params(mode: TypeMode, params: &EncodedParams) -> Result<Self, EffectError> {
        let effect = match mode {
            TypeMode::Write => Effect::TextWrite,
            TypeMode::Delete => Effect::TextDelete,
        };

        expect_groups(effect, params, 1)?;
        let colors = color_triple(effect, params, 0)?;

        Ok(Self {
            mode,
            colors,
            chars: params.payload().chars().collect(),
        })
    }

    pub fn mode(&self) -> TypeMode {
        self.mode
    }
}

impl FrameSource for Typewriter {
    fn effect(&self) -> Effect {
        match self.mode {
            TypeMode::Write => Effect::TextWrite,
            TypeMode::Delete => Effect::TextDelete,
        }
    }

    fn frame_count(&self) -> usize {
        self.chars.len() + 1
    }

    fn frame(&self, index: usize) -> Result<Frame, EffectError> {
        check_index(self, index)?;
        Ok(self.render_frame(index))
    }
}

impl Typewriter {
    /// 调用方保证 `index < frame_count()`
    pub(crate) fn render_frame(&self, index: usize) -> Frame {
        let visible = match self.mode {
            TypeMode::Write => &self.chars[..index],
            TypeMode::Delete => &self.chars[index..],
        };
        Frame::new(
            visible.iter().collect::<String>(),
            index == self.chars.len(),
            self.colors.clone(),
        )
    }
}
