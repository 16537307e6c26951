//! materials-errors - 统一错误处理
//!
//! 数据访问层的全部错误都在这里定义，由表现层在操作边界上转换为用户可见的消息

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// 启动时建立存储连接失败
    #[error("{0}")]
    ConnectionFailed(String),

    /// 没有可用的存储连接（启动连接失败后不会重连）
    #[error("No database connection")]
    NoConnection,

    /// 搜索词为空，未访问存储
    #[error("Search field is empty")]
    EmptyQuery,

    /// 价格/数量等输入无法转换为合法数值
    #[error("{0}")]
    Validation(String),

    /// 存储层的任何失败，包括约束冲突和表结构不匹配
    #[error("{0}")]
    QueryFailed(String),

    /// 请求删除时没有选中行
    #[error("No row selected for deletion")]
    NoSelection,
}

impl AppError {
    pub fn connection_failed(msg: impl Into<String>) -> Self {
        Self::ConnectionFailed(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn query_failed(msg: impl Into<String>) -> Self {
        Self::QueryFailed(msg.into())
    }

    /// 稳定的错误代码，用于结构化日志
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConnectionFailed(_) => "connection_failed",
            Self::NoConnection => "no_connection",
            Self::EmptyQuery => "empty_query",
            Self::Validation(_) => "validation_failed",
            Self::QueryFailed(_) => "query_failed",
            Self::NoSelection => "no_selection",
        }
    }

    /// 前置条件错误：不带操作前缀直接展示
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NoConnection | Self::EmptyQuery | Self::NoSelection)
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
