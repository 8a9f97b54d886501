//! # preview - 标题动画预览工具
//!
//! 作为示例宿主驱动 title-anim：按固定节奏逐帧调用效果并输出。
//!
//! ## 命令
//!
//! - `play`: 播放一个效果
//! - `list`: 列出全部效果及参数格式
//! - `check`: 校验动画定义文件
//!
//! 日志级别由 `RUST_LOG` 控制，默认 `info`，`--verbose` 时为 `debug`。

mod check;
mod config;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use title_anim::{Animation, Effect, FrameSource, SHINE_WIDTH};
use tracing::{debug, info, warn};

use config::{OutputFormat, PreviewConfig};

#[derive(Parser)]
#[command(name = "preview", version, about = "标题动画预览工具")]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 配置文件路径（不指定时使用默认配置）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 逐帧播放一个效果
    Play {
        /// 效果名称，如 shine
        effect: String,
        /// 参数串，如 "[1;2;3]10"
        params: String,
        /// 帧间隔（毫秒）
        #[arg(long)]
        interval_ms: Option<u64>,
        /// 输出格式
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
        /// 不等待，直接输出全部帧
        #[arg(long)]
        no_delay: bool,
    },
    /// 列出全部效果
    List,
    /// 校验动画定义文件（文件或目录）
    Check {
        #[arg(default_value = "animations")]
        path: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = real_main(cli) {
        eprintln!("preview error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Play {
            effect,
            params,
            interval_ms,
            output,
            no_delay,
        } => {
            let config = match &cli.config {
                Some(path) => PreviewConfig::load(path)?,
                None => PreviewConfig::default(),
            }
            .with_overrides(interval_ms, output);
            config.validate()?;
            play(&effect, &params, &config, no_delay)?;
        }
        Commands::List => list_effects()?,
        Commands::Check { path } => check(&path)?,
    }
    Ok(())
}

//=============================================================================
// play
//=============================================================================

fn play(
    effect: &str,
    params: &str,
    config: &PreviewConfig,
    no_delay: bool,
) -> anyhow::Result<()> {
    let effect: Effect = effect.parse()?;
    let anim = Animation::prepare(effect, params)
        .with_context(|| format!("无法准备效果 '{effect}'"))?;

    info!(%effect, frames = anim.frame_count(), "开始播放");
    write_frames(&anim, config, no_delay, &mut io::stdout().lock())?;
    info!(%effect, "播放结束");
    Ok(())
}

/// 按配置逐帧写出，`done` 帧之后不再等待
fn write_frames<W: Write>(
    anim: &Animation,
    config: &PreviewConfig,
    no_delay: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let interval = Duration::from_millis(config.interval_ms);

    for (index, frame) in anim.frames().enumerate() {
        if config.clear_screen {
            write!(out, "\x1b[2J\x1b[H")?;
        }
        match config.output {
            OutputFormat::Text => writeln!(out, "{frame}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &frame)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        debug!(index, done = frame.done, "帧已输出");

        if !frame.done && !no_delay {
            thread::sleep(interval);
        }
    }
    Ok(())
}

//=============================================================================
// list
//=============================================================================

/// (参数格式, 总帧数)
fn effect_usage(effect: Effect) -> (&'static str, String) {
    match effect {
        Effect::CountDown | Effect::CountUp => ("[c1;c2;c3]N", "N".to_string()),
        Effect::TextWrite | Effect::TextDelete => ("[c1;c2;c3]文本", "len + 1".to_string()),
        Effect::Shine => (
            "[扫过颜色][前导颜色][收尾颜色][恢复码;高光码]文本",
            format!("len + {}", SHINE_WIDTH + 1),
        ),
    }
}

fn list_effects() -> anyhow::Result<()> {
    write_effect_list(&mut io::stdout().lock())
}

fn write_effect_list<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for effect in Effect::ALL {
        let (usage, frames) = effect_usage(effect);
        writeln!(out, "{:<12} {usage}  (帧数: {frames})", effect.name())?;
    }
    Ok(())
}

//=============================================================================
// check
//=============================================================================

fn check(path: &Path) -> anyhow::Result<()> {
    let report = check::check_path(path)?;

    for (name, frames) in &report.passed {
        println!("  ✓ {name} ({frames} 帧)");
    }
    for failure in &report.failures {
        warn!(file = %failure.file.display(), name = %failure.name, "定义校验失败");
        println!(
            "  ✗ {} [{}]: {}",
            failure.name,
            failure.file.display(),
            failure.message
        );
    }

    println!(
        "\n检查了 {} 个文件，{} 个定义通过，{} 个失败",
        report.files_checked,
        report.passed.len(),
        report.failures.len()
    );

    if !report.is_ok() {
        anyhow::bail!("{} 个定义校验失败", report.failures.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use title_anim::Frame;

    fn render_output(effect: Effect, params: &str, config: &PreviewConfig) -> String {
        let anim = Animation::prepare(effect, params).unwrap();
        let mut out = Vec::new();
        write_frames(&anim, config, true, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_output_one_frame_per_line() {
        let config = PreviewConfig::default().with_overrides(None, Some(OutputFormat::Json));
        let output = render_output(Effect::CountDown, "[1;2;3]3", &config);

        let frames: Vec<Frame> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(
            frames.iter().map(|f| f.text.as_str()).collect::<Vec<_>>(),
            ["3", "2", "1"]
        );
        assert!(frames[2].done);
        assert!(frames[..2].iter().all(|f| !f.done));
    }

    #[test]
    fn test_text_output_matches_frame_display() {
        let output = render_output(Effect::TextWrite, "[1;2;3]Hi", &PreviewConfig::default());
        assert_eq!(
            output,
            "1, 2, 3 | false | \"\"\n1, 2, 3 | false | \"H\"\n1, 2, 3 | true | \"Hi\"\n"
        );
    }

    #[test]
    fn test_clear_screen_prefixes_every_frame() {
        let config = PreviewConfig {
            clear_screen: true,
            ..PreviewConfig::default()
        };
        let output = render_output(Effect::CountUp, "[1;2;3]2", &config);
        assert_eq!(output.matches("\x1b[2J\x1b[H").count(), 2);
    }

    #[test]
    fn test_effect_usage_frame_counts() {
        assert_eq!(effect_usage(Effect::CountDown).1, "N");
        assert_eq!(effect_usage(Effect::TextDelete).1, "len + 1");
        assert_eq!(effect_usage(Effect::Shine).1, "len + 4");
        assert!(effect_usage(Effect::Shine).0.starts_with("[扫过颜色]"));
    }

    #[test]
    fn test_effect_list_names_every_effect() {
        let mut out = Vec::new();
        write_effect_list(&mut out).unwrap();
        let listing = String::from_utf8(out).unwrap();
        assert_eq!(listing.lines().count(), Effect::ALL.len());
        for effect in Effect::ALL {
            assert!(listing.contains(effect.name()), "{effect}");
        }
    }
}
