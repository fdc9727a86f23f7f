//! 领域模型

pub mod package;

pub use package::{ExitStatus, PackageName, Version};
