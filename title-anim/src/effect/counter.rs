//! # 计数效果
//!
//! `count_down` / `count_up`：参数为一个颜色分组，载荷为十进制非负整数 `N`，共 `N` 帧。

use super::{Effect, FrameSource, check_index, color_triple, expect_groups};
use crate::error::EffectError;
use crate::frame::{ColorTriple, Frame};
use crate::params::EncodedParams;

/// 计数方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountDirection {
    /// N, N-1, ..., 1
    Down,
    /// 1, 2, ..., N
    Up,
}

/// 计数动画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    direction: CountDirection,
    colors: ColorTriple,
    total: usize,
}

impl Counter {
    pub fn from_params(
        direction: CountDirection,
        params: &EncodedParams,
    ) -> Result<Self, EffectError> {
        let effect = match direction {
            CountDirection::Down => Effect::CountDown,
            CountDirection::Up => Effect::CountUp,
        };

        expect_groups(effect, params, 1)?;
        let colors = color_triple(effect, params, 0)?;
        let total = parse_count(effect, params.payload())?;
        if total == 0 {
            return Err(EffectError::NoFrames { effect });
        }

        Ok(Self {
            direction,
            colors,
            total,
        })
    }

    pub fn direction(&self) -> CountDirection {
        self.direction
    }
}

/// 只接受 ASCII 数字，不允许符号与空白
fn parse_count(effect: Effect, payload: &str) -> Result<usize, EffectError> {
    let invalid = || EffectError::InvalidNumber {
        effect,
        value: payload.to_string(),
    };

    if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // 溢出同样视为无效
    payload.parse().map_err(|_| invalid())
}

impl FrameSource for Counter {
    fn effect(&self) -> Effect {
        match self.direction {
            CountDirection::Down => Effect::CountDown,
            CountDirection::Up => Effect::CountUp,
        }
    }

    fn frame_count(&self) -> usize {
        self.total
    }

    fn frame(&self, index: usize) -> Result<Frame, EffectError> {
        check_index(self, index)?;
        Ok(self.render_frame(index))
    }
}

impl Counter {
    /// 调用方保证 `index < frame_count()`
    pub(crate) fn render_frame(&self, index: usize) -> Frame {
        let value = match self.direction {
            CountDirection::Down => self.total - index,
            CountDirection::Up => index + 1,
        };
        Frame::new(
            value.to_string(),
            index + 1 == self.total,
            self.colors.clone(),
        )
    }
}
