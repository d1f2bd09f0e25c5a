//! # 调用请求模型
//!
//! 描述一次 vaspflow 流水线启动请求的全部参数。
//!
//! ## 功能
//! - 校验输入与配置路径
//! - 解析压强 token 列表
//! - 构造转发给外部 CLI 的参数序列
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `error.rs`

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RunnerError};

/// 默认流水线配置文件（相对启动器根目录）
pub const DEFAULT_CONFIG_PATH: &str = "config/vaspflow.json";

/// 单次流水线调用请求
///
/// 仅在一次调用期间存活，子进程启动后即被丢弃。
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// 输入结构文件或目录（已规范化为绝对路径）
    pub input: PathBuf,
    /// 流水线配置文件（已验证为常规文件）
    pub config: PathBuf,
    /// 外压 token 列表，空表示使用外部默认值
    pub pressures: Vec<String>,
    /// Python 解释器
    pub interpreter: String,
}

impl InvocationRequest {
    /// 校验路径并构造调用请求
    ///
    /// 校验顺序：输入非空 -> 输入存在 -> 配置为常规文件。
    /// 调用者提供的相对路径相对其当前目录规范化，
    /// 默认配置路径相对启动器根目录 `root` 解析。
    pub fn resolve(
        input: &Path,
        config: Option<&Path>,
        pressures: Option<&str>,
        interpreter: &str,
        root: &Path,
    ) -> Result<Self> {
        if input.as_os_str().is_empty() {
            return Err(RunnerError::InvalidArgument(
                "--input must not be empty".to_string(),
            ));
        }

        let input = fs::canonicalize(input).map_err(|_| RunnerError::FileNotFound {
            path: input.display().to_string(),
        })?;

        let config = match config {
            Some(path) => fs::canonicalize(path).map_err(|_| RunnerError::FileNotFound {
                path: path.display().to_string(),
            })?,
            None => root.join(DEFAULT_CONFIG_PATH),
        };

        if !config.is_file() {
            return Err(RunnerError::FileNotFound {
                path: config.display().to_string(),
            });
        }

        let pressures = parse_pressures(pressures.unwrap_or(""))?;

        Ok(Self {
            input,
            config,
            pressures,
            interpreter: interpreter.to_string(),
        })
    }

    /// 构造转发给外部 CLI 的参数序列
    ///
    /// 压强列表为空时不产生 `-p` 参数。
    pub fn forward_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            OsString::from("-i"),
            self.input.clone().into_os_string(),
            OsString::from("--config"),
            self.config.clone().into_os_string(),
        ];

        if !self.pressures.is_empty() {
            args.push(OsString::from("-p"));
            args.extend(self.pressures.iter().map(OsString::from));
        }

        args
    }
}

/// 解析空白分隔的压强 token 列表
///
/// 每个 token 必须是有限数值。保留原始文本，转发时不重新格式化。
pub fn parse_pressures(raw: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();

    for token in raw.split_whitespace() {
        let value: f64 = token
            .parse()
            .map_err(|_| RunnerError::InvalidPressure(token.to_string()))?;
        if !value.is_finite() {
            return Err(RunnerError::InvalidPressure(token.to_string()));
        }
        tokens.push(token.to_string());
    }

    Ok(tokens)
}
