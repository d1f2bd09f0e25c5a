//! # run_vaspflow CLI 定义
//!
//! 转发参数到外部 vaspflow 流水线 CLI
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Parser;
use std::path::PathBuf;

/// run_vaspflow 命令行参数
#[derive(Parser, Debug)]
#[command(name = "run_vaspflow")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Validate arguments and launch the vaspflow pipeline CLI", long_about = None)]
pub struct RunCli {
    /// Input structure file or directory
    #[arg(short, long)]
    pub input: PathBuf,

    /// Pipeline configuration file [default: config/vaspflow.json in the launcher root]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Whitespace-separated external pressures in GPa (e.g. "0 50 100")
    #[arg(long)]
    pub pressures: Option<String>,

    /// Python interpreter used to run the pipeline
    #[arg(long, default_value = "python")]
    pub python: String,
}
