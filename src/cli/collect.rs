//! # collect_logs CLI 定义
//!
//! 汇总 vaspflow 流水线日志为单个文本文件
//!
//! ## 依赖关系
//! - 被 `bin/collect_logs.rs` 使用
//! - 参数传递给 `commands/collect.rs`

use clap::Parser;
use std::path::PathBuf;

/// collect_logs 命令行参数
#[derive(Parser, Debug)]
#[command(name = "collect_logs")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Concatenate known vaspflow log files into a single text file", long_about = None)]
pub struct CollectCli {
    /// Working directory containing the pipeline output (pressure subdirectories)
    #[arg(long)]
    pub workdir: PathBuf,

    /// Output file path
    #[arg(long, default_value = "collected_logs.txt")]
    pub output: PathBuf,

    /// Maximum number of bytes kept per file (tail)
    #[arg(long, default_value_t = 20_000)]
    pub max_bytes: u64,
}
