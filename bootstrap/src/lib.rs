//! materials-bootstrap - 启动骨架
//!
//! 配置加载、日志初始化和关闭信号

mod runtime;

pub use runtime::*;
