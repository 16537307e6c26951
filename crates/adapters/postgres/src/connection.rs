//! PostgreSQL 连接管理
//!
//! 整个进程只持有一个长连接：连接池大小固定为 1

use materials_errors::{AppError, AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info};

use crate::config::PostgresConfig;

/// 建立数据库连接
///
/// 先直接打开一次连接，保留拒绝连接、认证失败等原始原因；
/// 连接池自身失败时只会在超时后报告 `PoolTimedOut`。
/// 失败时返回 `ConnectionFailed`，调用方负责决定是否继续以无连接状态运行
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    debug!(db = %config.display_target(), "Connecting to PostgreSQL");

    let options = config.connect_options();
    let conn = tokio::time::timeout(config.connect_timeout, options.connect())
        .await
        .map_err(|_| {
            AppError::connection_failed(format!(
                "timed out after {}s connecting to {}",
                config.connect_timeout.as_secs(),
                config.display_target()
            ))
        })?
        .map_err(|e| AppError::connection_failed(e.to_string()))?;
    conn.close()
        .await
        .map_err(|e| AppError::connection_failed(e.to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| AppError::connection_failed(e.to_string()))?;

    info!(db = %config.display_target(), "PostgreSQL connection established");
    Ok(pool)
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::query_failed(format!("Database health check failed: {}", e)))?;
    Ok(())
}

/// 关闭连接，等待正在执行的语句结束
pub async fn close_pool(pool: &PgPool) {
    if !pool.is_closed() {
        pool.close().await;
        info!("PostgreSQL connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SslMode;
    use secrecy::Secret;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_refused_connection_keeps_cause() {
        // 端口 1 上不会有 PostgreSQL
        let config = PostgresConfig::from_components("127.0.0.1", 1, "db", "postgres")
            .with_password(Secret::new("1234".to_string()))
            .with_ssl_mode(SslMode::Disable)
            .with_connect_timeout(Duration::from_secs(10));

        let started = Instant::now();
        let err = create_pool(&config).await.unwrap_err();

        let message = match err {
            AppError::ConnectionFailed(message) => message,
            other => panic!("expected ConnectionFailed, got {:?}", other),
        };
        assert!(
            message.to_lowercase().contains("refused"),
            "cause missing from '{}'",
            message
        );
        assert!(!message.contains("pool timed out"));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    #[ignore] // 需要 PostgreSQL 实例
    async fn test_check_connection() {
        let config = PostgresConfig::from_components("localhost", 5432, "db", "postgres")
            .with_password(Secret::new("1234".to_string()));

        let pool = create_pool(&config).await.expect("connect");
        check_connection(&pool).await.expect("health check");
        close_pool(&pool).await;
        assert!(pool.is_closed());
    }
}
