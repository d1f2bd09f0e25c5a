//! # CLI 模块
//!
//! 使用 `clap` 定义两个二进制入口的命令行参数。
//!
//! ## 命令结构
//! - `run_vaspflow`: 校验路径并转发到外部流水线 CLI
//! - `collect_logs`: 汇总流水线日志
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `bin/collect_logs.rs` 使用
//! - 子模块: run, collect

pub mod collect;
pub mod run;

use clap::error::ErrorKind;
use clap::Parser;

/// 解析命令行参数，失败时按退出码约定终止进程
///
/// `--help`/`--version` 退出码 0；其余解析错误（缺失必选参数、
/// 未知参数等）打印用法后退出码 1，不沿用 clap 默认的 2。
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}
