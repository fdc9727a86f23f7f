//! 包元数据值类型

use crate::domain::error::{DomainError, Result};
use std::fmt;

/// 当前 crate 的包名
pub const CURRENT_PACKAGE: &str = env!("CARGO_PKG_NAME");

/// 包名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// 当前 crate 自身的包名
    #[must_use]
    pub fn current() -> Self {
        Self::new(CURRENT_PACKAGE)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 规范化名称：忽略大小写，`-`、`_`、`.` 视为同一分隔符
    #[must_use]
    pub fn normalized(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut last_sep = false;
        for c in self.0.trim().chars() {
            if matches!(c, '-' | '_' | '.') {
                if !last_sep {
                    out.push('-');
                }
                last_sep = true;
            } else {
                out.extend(c.to_lowercase());
                last_sep = false;
            }
        }
        out
    }
}

impl Default for PackageName {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 版本号，非空且不含首尾空白
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    /// 校验后创建版本号
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() || raw.trim() != raw {
            return Err(DomainError::InvalidVersion(raw));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 进程退出状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitStatus {
    #[default]
    Success,
    /// 查找或输出失败
    Failure,
    /// 参数错误，与 clap 的约定一致
    Usage,
}

impl ExitStatus {
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Usage => 2,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        // code() 总在 0..=2 范围内
        std::process::ExitCode::from(status.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name() {
        assert_eq!(PackageName::new("Test_PyPackage").normalized(), "test-pypackage");
        assert_eq!(PackageName::new("test.pypackage").normalized(), "test-pypackage");
        assert_eq!(PackageName::new("test--_pypackage").normalized(), "test-pypackage");
    }

    #[test]
    fn test_current_package() {
        assert_eq!(PackageName::default().as_str(), "test-pypackage");
    }

    #[test]
    fn test_version_rejects_empty() {
        assert!(matches!(Version::parse(""), Err(DomainError::InvalidVersion(_))));
        assert!(matches!(Version::parse("  "), Err(DomainError::InvalidVersion(_))));
    }

    #[test]
    fn test_version_kept_verbatim() {
        assert_eq!(Version::parse("1.2.3rc1").unwrap().as_str(), "1.2.3rc1");
        assert!(matches!(
            Version::parse(" 1.2.3\n"),
            Err(DomainError::InvalidVersion(ref raw)) if raw == " 1.2.3\n"
        ));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
        assert_eq!(ExitStatus::Usage.code(), 2);
    }
}
