//! # Frame 模块
//!
//! 定义所有效果共用的帧结果。
//!
//! ## 设计说明
//!
//! - `Frame` 每次调用都重新构造，构造后不可变
//! - 颜色 token 对核心不透明，只原样透传给宿主

use std::fmt;

use serde::{Deserialize, Serialize};

/// 颜色 token
///
/// 保留参数串中的原始文本，由宿主解释其含义。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// 原始文本
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 按整数解释（宿主常用整数颜色值）
    pub fn as_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一组三个颜色 token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTriple {
    pub primary: ColorToken,
    pub secondary: ColorToken,
    pub tertiary: ColorToken,
}

impl ColorTriple {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
    ) -> Self {
        Self {
            primary: ColorToken::new(primary),
            secondary: ColorToken::new(secondary),
            tertiary: ColorToken::new(tertiary),
        }
    }
}

impl fmt::Display for ColorTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.primary, self.secondary, self.tertiary)
    }
}

/// 单帧渲染结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// 本帧完整文本（可能内嵌格式码）
    pub text: String,
    /// 是否为最后一帧
    pub done: bool,
    /// 本帧颜色
    pub colors: ColorTriple,
}

impl Frame {
    pub fn new(text: impl Into<String>, done: bool, colors: ColorTriple) -> Self {
        Self {
            text: text.into(),
            done,
            colors,
        }
    }
}

/// 输出格式：`1, 2, 3 | false | "text"`
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | \"{}\"", self.colors, self.done, self.text)
    }
}
