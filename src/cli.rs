//! CLI 参数定义

use clap::Parser;

/// 查询已安装包的版本号
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "test-pypackage",
    about = "查询已安装包的版本号",
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// 输出当前包的版本号
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}
