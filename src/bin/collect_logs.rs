//! # collect_logs 入口
//!
//! 汇总 vaspflow 流水线工作目录中的已知日志文件为单个文本文件。

use vaspflow_runner::cli::{self, collect::CollectCli};
use vaspflow_runner::commands;
use vaspflow_runner::utils::output;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let args: CollectCli = cli::parse_or_exit();

    if let Err(e) = commands::collect::execute(args) {
        output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
