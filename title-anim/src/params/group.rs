//! # 参数分组
//!
//! 一对方括号内按 `;` 切分出的 token 序列。

/// 参数分组
///
/// 由解析器构造，至少包含一个 token（token 本身可以为空串）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    tokens: Vec<String>,
}

impl Group {
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        debug_assert!(!tokens.is_empty());
        Self { tokens }
    }

    /// 全部 token
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// token 数量
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// 是否没有 token
    ///
    /// 分组只能由解析器构造且至少含一个 token，因此恒为 false
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// 按索引获取 token
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }
}
