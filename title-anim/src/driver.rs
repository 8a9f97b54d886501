//! # Driver 模块
//!
//! 帧驱动器：以 `0, 1, 2, ...` 依次调用效果，直到拿到 `done` 帧为止。
//!
//! ## 设计说明
//!
//! - 驱动器只负责索引推进，不负责帧间计时（节奏由宿主控制）
//! - 每一帧仍从头计算，驱动器不缓存帧内容
//! - 索引只在 `0..frame_count()` 内推进，不会越界渲染

use std::iter::FusedIterator;

use crate::effect::{Animation, Effect, FrameSource};
use crate::error::AnimResult;
use crate::frame::Frame;

/// 逐帧迭代器
///
/// 产出 `frame_count()` 帧，最后一帧 `done == true`，之后返回 `None`。
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    source: &'a Animation,
    next: usize,
    count: usize,
}

impl<'a> Frames<'a> {
    pub fn new(source: &'a Animation) -> Self {
        Self {
            source,
            next: 0,
            count: source.frame_count(),
        }
    }

    /// 下一次将要渲染的帧索引
    pub fn next_index(&self) -> usize {
        self.next
    }
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next >= self.count {
            return None;
        }
        let frame = self.source.render_frame(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl FusedIterator for Frames<'_> {}

impl Animation {
    /// 从第 0 帧开始逐帧迭代
    pub fn frames(&self) -> Frames<'_> {
        Frames::new(self)
    }
}

/// 渲染完整帧序列
pub fn collect_frames(effect: Effect, encoded: &str) -> AnimResult<Vec<Frame>> {
    Ok(Animation::prepare(effect, encoded)?.frames().collect())
}
