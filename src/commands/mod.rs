//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait

use crate::domain::error::Result;
use crate::domain::models::ExitStatus;
use std::io::Write;

pub mod version;

pub use version::VersionCommand;

/// 命令上下文
pub struct CommandContext<'a> {
    /// 标准输出（测试中可替换为内存缓冲）
    pub out: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<ExitStatus>;
}
