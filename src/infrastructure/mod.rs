//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - metadata: 包元数据注册表
//! - logging: 日志初始化

pub mod logging;
pub mod metadata;

pub use metadata::{FixedVersion, PackageRegistry};
