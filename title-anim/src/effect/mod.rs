//! # Effect 模块
//!
//! 五种命名效果及其统一的逐帧接口。
//!
//! ## 执行模型
//!
//! ```text
//! 参数串 → parse_params → EncodedParams → Animation::from_params → frame(index) → Frame
//! ```
//!
//! 每个效果都是 `(参数串, 帧索引)` 的纯函数：不保存游标，每次调用都从头计算。
//! `Animation` 只缓存校验过的参数，不缓存播放进度。
//!
//! ## 模块结构
//!
//! - `counter`：倒数 / 正数
//! - `typewriter`：打字 / 删字
//! - `shine`：高光扫过

mod counter;
mod shine;
mod typewriter;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnimError, AnimResult, EffectError};
use crate::frame::{ColorTriple, Frame};
use crate::params::{EncodedParams, parse_params};

pub use counter::{CountDirection, Counter};
pub use shine::{SHINE_WIDTH, Shine, shine_window};
pub use typewriter::{TypeMode, Typewriter};

/// 效果名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// 倒数：N, N-1, ..., 1
    CountDown,
    /// 正数：1, 2, ..., N
    CountUp,
    /// 逐字写出
    TextWrite,
    /// 逐字删除
    TextDelete,
    /// 高光扫过
    Shine,
}

impl Effect {
    /// 全部效果
    pub const ALL: [Effect; 5] = [
        Effect::CountDown,
        Effect::CountUp,
        Effect::TextWrite,
        Effect::TextDelete,
        Effect::Shine,
    ];

    /// 宿主使用的效果名称
    pub fn name(self) -> &'static str {
        match self {
            Self::CountDown => "count_down",
            Self::CountUp => "count_up",
            Self::TextWrite => "text_write",
            Self::TextDelete => "text_delete",
            Self::Shine => "shine",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Effect {
    type Err = EffectError;

    /// 从效果名称解析（名称区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count_down" => Ok(Self::CountDown),
            "count_up" => Ok(Self::CountUp),
            "text_write" => Ok(Self::TextWrite),
            "text_delete" => Ok(Self::TextDelete),
            "shine" => Ok(Self::Shine),
            _ => Err(EffectError::UnknownEffect {
                name: s.to_string(),
            }),
        }
    }
}

/// 逐帧生成接口
///
/// 对外只提供带越界检查的 [`FrameSource::frame`]；不经检查的渲染只在 crate 内部使用。
pub trait FrameSource {
    /// 所属效果
    fn effect(&self) -> Effect;

    /// 总帧数 `F`（总是 >= 1）
    fn frame_count(&self) -> usize;

    /// 渲染第 `index` 帧
    ///
    /// `index >= frame_count()` 时返回 `FrameOutOfRange`，从不钳制或外推。
    fn frame(&self, index: usize) -> Result<Frame, EffectError>;
}

/// 检查帧索引是否在 `0..frame_count()` 内
pub(crate) fn check_index<S: FrameSource + ?Sized>(
    source: &S,
    index: usize,
) -> Result<(), EffectError> {
    let frame_count = source.frame_count();
    if index >= frame_count {
        return Err(EffectError::FrameOutOfRange {
            effect: source.effect(),
            index,
            frame_count,
        });
    }
    Ok(())
}

/// 校验过参数的动画
///
/// 可按参数串缓存以避免重复解析；渲染任意帧都不改变其状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Animation {
    Counter(Counter),
    Typewriter(Typewriter),
    Shine(Shine),
}

impl Animation {
    /// 解析参数串并按效果要求校验
    pub fn prepare(effect: Effect, encoded: &str) -> AnimResult<Self> {
        let params =
            parse_params(encoded).map_err(|source| AnimError::Parse { effect, source })?;
        Ok(Self::from_params(effect, &params)?)
    }

    /// 从已解析的参数构造
    pub fn from_params(effect: Effect, params: &EncodedParams) -> Result<Self, EffectError> {
        match effect {
            Effect::CountDown => {
                Counter::from_params(CountDirection::Down, params).map(Self::Counter)
            }
            Effect::CountUp => Counter::from_params(CountDirection::Up, params).map(Self::Counter),
            Effect::TextWrite => {
                Typewriter::from_params(TypeMode::Write, params).map(Self::Typewriter)
            }
            Effect::TextDelete => {
                Typewriter::from_params(TypeMode::Delete, params).map(Self::Typewriter)
            }
            Effect::Shine => Shine::from_params(params).map(Self::Shine),
        }
    }
}

impl Animation {
    /// 渲染第 `index` 帧，调用方保证 `index < frame_count()`
    pub(crate) fn render_frame(&self, index: usize) -> Frame {
        match self {
            Self::Counter(c) => c.render_frame(index),
            Self::Typewriter(t) => t.render_frame(index),
            Self::Shine(s) => s.render_frame(index),
        }
    }
}

impl FrameSource for Animation {
    fn effect(&self) -> Effect {
        match self {
            Self::Counter(c) => c.effect(),
            Self::Typewriter(t) => t.effect(),
            Self::Shine(s) => s.effect(),
        }
    }

    fn frame_count(&self) -> usize {
        match self {
            Self::Counter(c) => c.frame_count(),
            Self::Typewriter(t) => t.frame_count(),
            Self::Shine(s) => s.frame_count(),
        }
    }

    fn frame(&self, index: usize) -> Result<Frame, EffectError> {
        check_index(self, index)?;
        Ok(self.render_frame(index))
    }
}

/// 渲染指定效果的第 `index` 帧
///
/// 宿主的主要入口：每次调用都重新解析参数串并计算，结果只取决于输入。
pub fn render(effect: Effect, encoded: &str, index: usize) -> AnimResult<Frame> {
    Ok(Animation::prepare(effect, encoded)?.frame(index)?)
}

/// 按效果名称渲染
pub fn render_by_name(name: &str, encoded: &str, index: usize) -> AnimResult<Frame> {
    render(name.parse()?, encoded, index)
}

/// 计算指定输入的总帧数
pub fn frame_count(effect: Effect, encoded: &str) -> AnimResult<usize> {
    Ok(Animation::prepare(effect, encoded)?.frame_count())
}

// -------------------------------------------------------------------------
// 参数形状校验
// -------------------------------------------------------------------------

/// 要求参数恰好有 `expected` 个分组
pub(crate) fn expect_groups(
    effect: Effect,
    params: &EncodedParams,
    expected: usize,
) -> Result<(), EffectError> {
    let found = params.groups().len();
    if found != expected {
        return Err(EffectError::GroupCount {
            effect,
            expected,
            found,
        });
    }
    Ok(())
}

/// 取出第 `index` 个分组中恰好 `N` 个 token
pub(crate) fn group_tokens<const N: usize>(
    effect: Effect,
    params: &EncodedParams,
    index: usize,
) -> Result<[&str; N], EffectError> {
    let group = params.group(index).ok_or(EffectError::GroupCount {
        effect,
        expected: index + 1,
        found: params.groups().len(),
    })?;

    if group.len() != N {
        return Err(EffectError::TokenCount {
            effect,
            group: index,
            expected: N,
            found: group.len(),
        });
    }

    let mut out = [""; N];
    for (slot, token) in out.iter_mut().zip(group.tokens()) {
        *slot = token.as_str();
    }
    Ok(out)
}

/// 取出第 `index` 个分组作为颜色三元组
pub(crate) fn color_triple(
    effect: Effect,
    params: &EncodedParams,
    index: usize,
) -> Result<ColorTriple, EffectError> {
    let [primary, secondary, tertiary] = group_tokens::<3>(effect, params, index)?;
    Ok(ColorTriple::new(primary, secondary, tertiary))
}
