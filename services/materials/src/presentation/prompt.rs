//! 交互式输入

use std::io;

use async_trait::async_trait;

/// 向用户提问
#[async_trait]
pub trait Prompter: Send {
    /// 是/否确认，默认否；输入结束时返回 `false`
    async fn confirm(&mut self, question: &str) -> io::Result<bool>;

    /// 读取一个字段；输入结束时返回 `None`
    async fn ask(&mut self, label: &str) -> io::Result<Option<String>>;
}
