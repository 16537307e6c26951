//! 表现层
//!
//! 控制器把用户命令绑定到存储调用，视图保存当前结果集和消息区，
//! 控制台负责读写终端

mod command;
mod console;
mod controller;
mod grid;
mod prompt;
mod view;

pub use command::*;
pub use console::*;
pub use controller::*;
pub use grid::*;
pub use prompt::*;
pub use view::*;
