//! # Title Anim
//!
//! 标题动画帧生成的核心库。
//!
//! ## 架构概述
//!
//! `title-anim` 是纯逻辑核心，不做 IO，也不保存任何跨调用状态。
//! 每个效果都是 `(参数串, 帧索引)` 到帧结果的纯函数：
//!
//! ```text
//! Host                              Core
//!   │                                │
//!   │──── (effect, params, index) ──►│ parse_params → Animation → frame(index)
//!   │◄─── Frame { text, done, colors }│
//!   │                                │
//! ```
//!
//! 宿主从 `index = 0` 开始逐帧调用，拿到 `done == true` 后停止；帧间节奏、
//! 颜色 token 与内嵌格式码的含义都由宿主决定。
//!
//! ## 使用示例
//!
//! ```ignore
//! use title_anim::{Effect, render};
//!
//! let mut index = 0;
//! loop {
//!     let frame = render(Effect::Shine, "[1;2;3][4;5;6][7;8;9][&a;&1]Title", index)?;
//!     host.show(&frame);
//!     if frame.done {
//!         break;
//!     }
//!     index += 1;
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`params`]：参数串解析
//! - [`frame`]：帧结果定义
//! - [`effect`]：五种效果与统一接口
//! - [`driver`]：逐帧迭代器
//! - [`error`]：错误类型定义

pub mod driver;
pub mod effect;
pub mod error;
pub mod frame;
pub mod params;

// 重导出核心类型
pub use driver::{Frames, collect_frames};
pub use effect::{
    Animation, CountDirection, Counter, Effect, FrameSource, SHINE_WIDTH, Shine, TypeMode,
    Typewriter, frame_count, render, render_by_name, shine_window,
};
pub use error::{AnimError, AnimResult, EffectError, ParseError};
pub use frame::{ColorToken, ColorTriple, Frame};
pub use params::{EncodedParams, Group, parse_params};
