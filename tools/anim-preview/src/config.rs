//! # Config 模块
//!
//! 预览工具配置。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (preview.json)
//! 3. 默认值（最低）

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// 帧间隔允许的最大值（毫秒）
const MAX_INTERVAL_MS: u64 = 10_000;

/// 帧输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `1, 2, 3 | false | "text"`
    #[default]
    Text,
    /// 每帧一行 JSON
    Json,
}

/// 预览配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// 帧间隔（毫秒）
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// 输出格式
    #[serde(default)]
    pub output: OutputFormat,

    /// 每帧输出前是否清屏
    #[serde(default)]
    pub clear_screen: bool,
}

fn default_interval_ms() -> u64 {
    50
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            output: OutputFormat::default(),
            clear_screen: false,
        }
    }
}

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 帧间隔超出范围
    #[error("帧间隔必须在 1 - {max} 毫秒之间，实际 {0}", max = MAX_INTERVAL_MS)]
    IntervalOutOfRange(u64),
}

impl PreviewConfig {
    /// 加载配置文件
    ///
    /// 文件不存在时返回默认配置；读取或解析失败则报错。
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("配置文件读取失败: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("配置文件解析失败: {}", path.display()))?;

        info!(path = %path.display(), "配置文件加载成功");
        Ok(config)
    }

    /// 应用命令行覆盖项
    pub fn with_overrides(
        mut self,
        interval_ms: Option<u64>,
        output: Option<OutputFormat>,
    ) -> Self {
        if let Some(interval_ms) = interval_ms {
            self.interval_ms = interval_ms;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 || self.interval_ms > MAX_INTERVAL_MS {
            return Err(ConfigError::IntervalOutOfRange(self.interval_ms));
        }
        Ok(())
    }
}
