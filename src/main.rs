//! test-pypackage 主程序入口
//!
//! 设计原则：
//! - 入口代码简洁，逻辑委托给 Application
//! - 参数错误交给 clap 渲染并退出
//! - 其余错误以 miette 诊断形式输出到 stderr

use std::process::ExitCode;
use test_pypackage::app::Application;
use test_pypackage::domain::DomainError;
use test_pypackage::infrastructure::logging;

fn main() -> ExitCode {
    logging::init_logger();

    let app = Application::default();
    let result = {
        let mut stdout = std::io::stdout().lock();
        app.run(&mut stdout)
    };

    match result {
        Ok(status) => status.into(),
        Err(DomainError::Usage(err)) => err.exit(),
        Err(e) => {
            tracing::error!(error = %e, "命令执行失败");
            let status = e.exit_status();
            eprintln!("{:?}", miette::Report::new(e));
            status.into()
        }
    }
}
