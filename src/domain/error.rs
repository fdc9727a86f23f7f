//! 领域层错误类型

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    /// 参数解析失败，渲染与退出交给 clap
    #[error("参数错误: {0}")]
    Usage(#[from] clap::Error),

    #[error("包未找到: {0}")]
    #[diagnostic(
        code(test_pypackage::package_not_found),
        help("确认该包已安装在当前环境中")
    )]
    PackageNotFound(String),

    #[error("无效的版本号: {0}")]
    #[diagnostic(code(test_pypackage::invalid_version))]
    InvalidVersion(String),

    #[error("IO 错误: {0}")]
    #[diagnostic(code(test_pypackage::io))]
    Io(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl DomainError {
    /// 对应的进程退出码
    #[must_use]
    pub fn exit_status(&self) -> super::models::ExitStatus {
        use super::models::ExitStatus;
        match self {
            DomainError::Usage(err) if !err.use_stderr() => ExitStatus::Success,
            DomainError::Usage(_) => ExitStatus::Usage,
            _ => ExitStatus::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ExitStatus;

    #[test]
    fn test_package_not_found_is_failure() {
        let err = DomainError::PackageNotFound("missing-pkg".to_string());
        assert_eq!(err.exit_status(), ExitStatus::Failure);
        assert_eq!(err.to_string(), "包未找到: missing-pkg");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DomainError = io.into();
        assert!(matches!(err, DomainError::Io(ref msg) if msg.contains("pipe closed")));
        assert_eq!(err.exit_status(), ExitStatus::Failure);
    }

    #[test]
    fn test_usage_error_exit_status() {
        use clap::error::ErrorKind;

        let err = DomainError::from(clap::Error::new(ErrorKind::UnknownArgument));
        assert_eq!(err.exit_status(), ExitStatus::Usage);
        assert_eq!(err.exit_status().code(), 2);

        let err = DomainError::InvalidVersion(String::new());
        assert_eq!(err.exit_status(), ExitStatus::Failure);
    }

    #[test]
    fn test_diagnostic_code() {
        let err = DomainError::PackageNotFound("x".to_string());
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("test_pypackage::package_not_found"));
    }
}
