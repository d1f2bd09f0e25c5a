//! # run 命令实现
//!
//! 校验参数后启动外部 vaspflow 流水线 CLI，并透传其退出码。
//!
//! ## 功能
//! - 定位启动器根目录
//! - 构造并校验调用请求
//! - 以继承的标准流启动子进程
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `models/invocation.rs`

use crate::cli::run::RunCli;
use crate::error::{Result, RunnerError};
use crate::models::InvocationRequest;

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 外部流水线 CLI 入口脚本（位于启动器根目录）
pub const CLI_ENTRY: &str = "cli.py";

/// 执行 run 命令，返回子进程退出码
pub fn execute(args: RunCli) -> Result<i32> {
    let root = launcher_root()?;
    let request = InvocationRequest::resolve(
        &args.input,
        args.config.as_deref(),
        args.pressures.as_deref(),
        &args.python,
        &root,
    )?;

    launch(&request, &root)
}

/// 启动器根目录：可执行文件所在目录
///
/// 等价于原 shell 包装脚本的 `cd "$(dirname "$0")"`，
/// 保证子进程总是在流水线仓库根目录下运行。
fn launcher_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| RunnerError::Other(format!("Cannot locate launcher executable: {}", e)))?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        RunnerError::Other("Launcher executable has no parent directory".to_string())
    })
}

/// 启动外部 CLI 并阻塞等待其退出
///
/// 子进程继承标准输入输出流；被信号终止（无退出码）时按 1 处理。
pub fn launch(request: &InvocationRequest, root: &Path) -> Result<i32> {
    let status = Command::new(&request.interpreter)
        .arg(root.join(CLI_ENTRY))
        .args(request.forward_args())
        .current_dir(root)
        .status()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RunnerError::CommandNotFound {
                command: request.interpreter.clone(),
            },
            _ => RunnerError::CommandFailed {
                command: request.interpreter.clone(),
                reason: e.to_string(),
            },
        })?;

    Ok(status.code().unwrap_or(1))
}
