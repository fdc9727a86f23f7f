//! 应用程序容器
//!
//! 负责依赖注入和参数分发

use crate::cli::Cli;
use crate::commands::{CommandContext, CommandHandler, VersionCommand};
use crate::domain::error::Result;
use crate::domain::models::{ExitStatus, PackageName};
use crate::domain::registry::VersionSource;
use crate::infrastructure::PackageRegistry;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// 要查询版本的包，默认为当前 crate
    pub package: PackageName,
}

/// 应用程序容器
pub struct Application {
    config: AppConfig,
    source: Arc<dyn VersionSource>,
}

impl Application {
    /// 使用内置包元数据注册表创建应用程序实例
    pub fn new(config: AppConfig) -> Self {
        Self::with_source(config, Arc::new(PackageRegistry::current()))
    }

    /// 注入自定义版本来源
    pub fn with_source(config: AppConfig, source: Arc<dyn VersionSource>) -> Self {
        Self { config, source }
    }

    /// 使用进程参数运行
    pub fn run(&self, out: &mut dyn Write) -> Result<ExitStatus> {
        self.run_from(std::env::args_os(), out)
    }

    /// 使用给定参数运行，第一个元素为程序名
    pub fn run_from<I, T>(&self, args: I, out: &mut dyn Write) -> Result<ExitStatus>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        debug!(version_flag = cli.version, "参数解析完成");

        if !cli.version {
            return Ok(ExitStatus::Success);
        }

        let command = VersionCommand::new(Arc::clone(&self.source), self.config.package.clone());
        command.execute(&mut CommandContext::new(out))
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
