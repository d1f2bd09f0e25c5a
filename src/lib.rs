//! # vaspflow-runner - vaspflow 流水线配套工具
//!
//! 外部 `vaspflow` 流水线的薄启动层：真正的 VASP 编排
//! （INCAR/POTCAR/KPOINTS 生成、Slurm 提交、断点续算）都在外部
//! Python CLI 中完成，这里只负责参数校验、转发与日志收集。
//!
//! ## 二进制入口
//! - `run_vaspflow` - 校验路径后启动外部流水线 CLI，透传退出码
//! - `collect_logs` - 汇总流水线日志为单个文本文件
//!
//! ## 依赖关系
//! ```text
//! main.rs / bin/collect_logs.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── models/    (调用请求模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod utils;
