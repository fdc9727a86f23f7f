//! 版本来源接口（输出端口）

use crate::domain::error::Result;
use crate::domain::models::{PackageName, Version};

/// 包版本来源
///
/// 由应用容器注入，命令本身不依赖任何全局元数据。
pub trait VersionSource: Send + Sync {
    /// 查找指定包的版本号，找不到时返回 `DomainError::PackageNotFound`
    fn version(&self, package: &PackageName) -> Result<Version>;
}

impl<F> VersionSource for F
where
    F: Fn(&PackageName) -> Result<Version> + Send + Sync,
{
    fn version(&self, package: &PackageName) -> Result<Version> {
        self(package)
    }
}
