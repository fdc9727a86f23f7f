//! test-pypackage - 查询已安装包版本号的命令行工具
//!
//! 分层结构与入口保持一致：参数定义、命令处理、领域模型、基础设施

// 领域层
pub mod domain;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

// 重新导出常用类型
pub use app::{AppConfig, Application};
pub use domain::{DomainError, ExitStatus, PackageName, Result, Version, VersionSource};
pub use infrastructure::{FixedVersion, PackageRegistry};
