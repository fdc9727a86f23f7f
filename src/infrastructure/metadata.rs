//! 包元数据注册表实现

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{PackageName, Version};
use crate::domain::registry::VersionSource;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 包元数据注册表
///
/// 以规范化包名为键。默认内容来自编译期写入的 Cargo 包元数据。
#[derive(Debug, Clone, Default)]
pub struct PackageRegistry {
    entries: HashMap<String, Version>,
}

impl PackageRegistry {
    /// 空注册表
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// 包含当前 crate 自身版本的注册表
    #[must_use]
    pub fn current() -> Self {
        let mut registry = Self::empty();
        if let Ok(version) = Version::parse(env!("CARGO_PKG_VERSION")) {
            registry.insert(&PackageName::current(), version);
        }
        registry
    }

    /// 登记一个包，已存在时覆盖
    pub fn register(&mut self, name: &str, version: &str) -> Result<()> {
        let version = Version::parse(version)?;
        self.insert(&PackageName::new(name), version);
        Ok(())
    }

    fn insert(&mut self, name: &PackageName, version: Version) {
        debug!(package = %name, version = %version, "登记包版本");
        self.entries.insert(name.normalized(), version);
    }

    /// 已登记的包数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VersionSource for PackageRegistry {
    fn version(&self, package: &PackageName) -> Result<Version> {
        match self.entries.get(&package.normalized()) {
            Some(version) => Ok(version.clone()),
            None => {
                warn!(package = %package, "包元数据未找到");
                Err(DomainError::PackageNotFound(package.to_string()))
            }
        }
    }
}

/// 固定版本来源，不论查询哪个包都返回同一版本
#[derive(Debug, Clone)]
pub struct FixedVersion {
    version: Version,
}

impl FixedVersion {
    pub fn new(version: &str) -> Result<Self> {
        Ok(Self {
            version: Version::parse(version)?,
        })
    }
}

impl VersionSource for FixedVersion {
    fn version(&self, _package: &PackageName) -> Result<Version> {
        Ok(self.version.clone())
    }
}
