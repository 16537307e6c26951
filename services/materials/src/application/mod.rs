//! 应用层
//!
//! `MaterialService` 即数据访问层；`worker` 把它放进独立任务，由表现层通过消息调用

pub mod commands;
pub mod queries;
pub mod service;
pub mod worker;

pub use commands::*;
pub use queries::*;
pub use service::*;
pub use worker::*;
