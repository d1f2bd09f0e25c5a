//! # run_vaspflow 入口
//!
//! 校验命令行参数后启动外部 vaspflow 流水线 CLI。
//! 校验失败退出码 1，校验通过后透传子进程的退出码。

use vaspflow_runner::cli::{self, run::RunCli};
use vaspflow_runner::commands;
use vaspflow_runner::utils::output;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let args: RunCli = cli::parse_or_exit();

    match commands::run::execute(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
