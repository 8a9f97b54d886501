//! # check 命令
//!
//! 批量校验动画定义文件。
//!
//! 定义文件为 JSON 数组：
//!
//! ```text
//! [
//!   { "name": "welcome", "effect": "shine", "params": "[1;2;3][4;5;6][7;8;9][&a;&1]Welcome" },
//!   { "name": "timer",   "effect": "count_down", "params": "[1;2;3]10" }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use title_anim::{Animation, Effect, FrameSource};
use tracing::debug;
use walkdir::WalkDir;

/// 单条动画定义
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationDef {
    pub name: String,
    pub effect: String,
    pub params: String,
}

/// 校验失败的定义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub file: PathBuf,
    pub name: String,
    pub message: String,
}

/// 校验结果
#[derive(Debug, Default)]
pub struct CheckReport {
    /// 检查的文件数量
    pub files_checked: usize,
    /// 通过校验的定义：(名称, 总帧数)
    pub passed: Vec<(String, usize)>,
    /// 校验失败的定义
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 校验单条定义，返回总帧数
pub fn check_def(def: &AnimationDef) -> anyhow::Result<usize> {
    let effect: Effect = def.effect.parse()?;
    let anim = Animation::prepare(effect, &def.params)?;
    Ok(anim.frame_count())
}

/// 收集路径下的定义文件
fn collect_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// 校验路径（文件或目录）下的全部定义
pub fn check_path(path: &Path) -> anyhow::Result<CheckReport> {
    if !path.exists() {
        anyhow::bail!("路径不存在: {}", path.display());
    }

    let mut report = CheckReport::default();
    for file in collect_files(path) {
        let content = fs::read_to_string(&file)
            .with_context(|| format!("读取失败: {}", file.display()))?;
        let defs: Vec<AnimationDef> = serde_json::from_str(&content)
            .with_context(|| format!("定义文件格式错误: {}", file.display()))?;

        debug!(file = %file.display(), count = defs.len(), "检查定义文件");
        report.files_checked += 1;

        for def in defs {
            match check_def(&def) {
                Ok(frames) => report.passed.push((def.name, frames)),
                Err(e) => report.failures.push(CheckFailure {
                    file: file.clone(),
                    name: def.name,
                    message: format!("{e:#}"),
                }),
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str, effect: &str, params: &str) -> AnimationDef {
        AnimationDef {
            name: name.to_string(),
            effect: effect.to_string(),
            params: params.to_string(),
        }
    }

    #[test]
    fn test_check_def() {
        assert_eq!(check_def(&def("a", "count_down", "[1;2;3]10")).unwrap(), 10);
        assert_eq!(
            check_def(&def("b", "shine", "[1;2;3][4;5;6][7;8;9][&a;&1]Test String")).unwrap(),
            15
        );
        assert!(check_def(&def("c", "sparkle", "[1;2;3]Hi")).is_err());
        assert!(check_def(&def("d", "count_up", "[1;2;3]abc")).is_err());
    }

    #[test]
    fn test_check_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("good.json"),
            r#"[{ "name": "timer", "effect": "count_down", "params": "[1;2;3]5" }]"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(
            dir.path().join("nested/mixed.json"),
            r#"[
                { "name": "intro", "effect": "text_write", "params": "[1;2;3]Hi" },
                { "name": "broken", "effect": "shine", "params": "[1;2;3]Hi" }
            ]"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let report = check_path(dir.path()).unwrap();
        assert_eq!(report.files_checked, 2);
        assert_eq!(report.passed.len(), 2);
        assert!(report.passed.contains(&("timer".to_string(), 5)));
        assert!(report.passed.contains(&("intro".to_string(), 3)));
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "broken");
        assert!(!report.is_ok());
    }

    #[test]
    fn test_check_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_path(&dir.path().join("nope")).is_err());
    }
}
