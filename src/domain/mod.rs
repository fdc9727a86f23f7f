//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域值类型
//! - registry: 版本来源接口（输出端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod registry;

pub use error::{DomainError, Result};
pub use models::{ExitStatus, PackageName, Version};
pub use registry::VersionSource;
