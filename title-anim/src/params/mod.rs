//! # Params 模块
//!
//! 效果参数串的解析（手写扫描，无 regex 依赖）。
//!
//! ## 语法
//!
//! ```text
//! Encoded  := Group* Payload
//! Group    := '[' Token (';' Token)* ']'
//! Token    := 除 ';' 与 ']' 以外的任意字符序列
//! Payload  := 剩余的全部字符（可为空）
//! ```
//!
//! 解析器只负责结构提取，不解释 token；token 是数字还是格式码由各效果决定。

mod group;

pub use group::Group;

use crate::error::ParseError;

/// 解析后的参数串：有序分组 + 尾部载荷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedParams {
    groups: Vec<Group>,
    payload: String,
}

impl EncodedParams {
    /// 全部分组（按出现顺序）
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// 按索引获取分组
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// 尾部载荷文本
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// 重新编码为参数串
    ///
    /// 对任何解析成功的输入，`parse_params(s)?.to_encoded() == s`。
    pub fn to_encoded(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            out.push('[');
            out.push_str(&group.tokens().join(";"));
            out.push(']');
        }
        out.push_str(&self.payload);
        out
    }
}

/// 解析参数串
///
/// 从头扫描：当前字符为 `[` 时读取到下一个 `]`，内部按 `;` 切分为 token；
/// 遇到非 `[` 字符（或字符串结束）后，剩余部分即为载荷。
///
/// # 示例
///
/// ```text
/// "[1;2;3]Hi"  -> groups: [["1", "2", "3"]], payload: "Hi"
/// "[&a;&1]"    -> groups: [["&a", "&1"]],    payload: ""
/// "plain"      -> groups: [],                payload: "plain"
/// ```
pub fn parse_params(input: &str) -> Result<EncodedParams, ParseError> {
    let mut groups = Vec::new();
    let mut rest = input;
    let mut offset = 0;

    while let Some(after_open) = rest.strip_prefix('[') {
        let close = after_open
            .find(']')
            .ok_or(ParseError::UnclosedGroup { offset })?;

        let interior = &after_open[..close];
        if interior.is_empty() {
            return Err(ParseError::EmptyGroup { offset });
        }

        groups.push(Group::new(interior.split(';').map(str::to_string).collect()));

        // '[' + interior + ']'
        let consumed = close + 2;
        rest = &rest[consumed..];
        offset += consumed;
    }

    Ok(EncodedParams {
        groups,
        payload: rest.to_string(),
    })
}
