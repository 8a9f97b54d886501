//! # Error 模块
//!
//! 定义 title-anim 中使用的错误类型。
//!
//! 所有错误都只影响单次调用：核心不做部分恢复，也不产生帧。

use thiserror::Error;

use crate::effect::Effect;

/// 参数串解析错误
///
/// `offset` 为出错位置在参数串中的字节偏移。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `[` 没有对应的 `]`
    #[error("偏移 {offset}：分组缺少结束符 ']'")]
    UnclosedGroup { offset: usize },

    /// 空分组 `[]`
    #[error("偏移 {offset}：分组不能为空")]
    EmptyGroup { offset: usize },
}

/// 效果层错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// 未知的效果名称
    #[error("未知效果 '{name}'")]
    UnknownEffect { name: String },

    /// 分组数量与效果要求不符
    #[error("效果 '{effect}' 需要 {expected} 个分组，实际 {found} 个")]
    GroupCount {
        effect: Effect,
        expected: usize,
        found: usize,
    },

    /// 某个分组的 token 数量不符
    #[error("效果 '{effect}' 的第 {group} 个分组需要 {expected} 个 token，实际 {found} 个")]
    TokenCount {
        effect: Effect,
        group: usize,
        expected: usize,
        found: usize,
    },

    /// 数值载荷无效
    #[error("效果 '{effect}' 的载荷 '{value}' 不是有效的非负整数")]
    InvalidNumber { effect: Effect, value: String },

    /// 输入不产生任何帧（如 `N == 0`）
    #[error("效果 '{effect}' 的输入不产生任何帧")]
    NoFrames { effect: Effect },

    /// 帧索引越界
    #[error("效果 '{effect}' 的帧索引 {index} 越界，有效范围是 0..{frame_count}")]
    FrameOutOfRange {
        effect: Effect,
        index: usize,
        frame_count: usize,
    },
}

/// title-anim 统一错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimError {
    /// 参数串解析错误
    #[error("效果 '{effect}' 参数解析错误: {source}")]
    Parse {
        effect: Effect,
        #[source]
        source: ParseError,
    },

    /// 效果错误
    #[error("效果错误: {0}")]
    Effect(#[from] EffectError),
}

/// Result 类型别名
pub type AnimResult<T> = Result<T, AnimError>;
