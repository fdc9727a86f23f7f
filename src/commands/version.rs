//! version 命令处理器

use super::{CommandContext, CommandHandler};
use crate::domain::error::Result;
use crate::domain::models::{ExitStatus, PackageName};
use crate::domain::registry::VersionSource;
use std::sync::Arc;
use tracing::debug;

/// version 命令
pub struct VersionCommand {
    source: Arc<dyn VersionSource>,
    package: PackageName,
}

impl VersionCommand {
    pub fn new(source: Arc<dyn VersionSource>, package: PackageName) -> Self {
        Self { source, package }
    }
}

impl CommandHandler for VersionCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<ExitStatus> {
        let version = self.source.version(&self.package)?;
        debug!(package = %self.package, version = %version, "版本号已解析");

        writeln!(ctx.out, "{}", version)?;
        ctx.out.flush()?;
        Ok(ExitStatus::Success)
    }
}
