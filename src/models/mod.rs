//! # 数据模型模块
//!
//! 定义启动器使用的数据结构。

pub mod invocation;

pub use invocation::InvocationRequest;
