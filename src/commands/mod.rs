//! # 命令执行模块
//!
//! 实现两个二进制入口的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `bin/collect_logs.rs` 调用
//! - 使用 `cli/`, `models/`, `utils/`
//! - 子模块: run, collect

pub mod collect;
pub mod run;
