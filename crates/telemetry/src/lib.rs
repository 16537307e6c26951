//! telemetry - 可观测性库
//!
//! 日志统一写到 stderr，stdout 留给控制台表格

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化 tracing
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// 初始化 JSON 格式的 tracing（生产环境）
pub fn init_tracing_json(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
        .init();
}

/// 健康检查状态
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub checks: Vec<HealthCheck>,
}

#[derive(Debug, Clone)]
pub struct HealthCheck {
    pub name: String,
    pub healthy: bool,
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn new() -> Self {
        Self {
            healthy: true,
            checks: Vec::new(),
        }
    }

    pub fn add_check(&mut self, name: impl Into<String>, healthy: bool, message: Option<String>) {
        if !healthy {
            self.healthy = false;
        }
        self.checks.push(HealthCheck {
            name: name.into(),
            healthy,
            message,
        });
    }

    /// 单行摘要，例如 `healthy (postgres: ok)`
    pub fn summary(&self) -> String {
        let checks = self
            .checks
            .iter()
            .map(|check| {
                let state = match (&check.message, check.healthy) {
                    (Some(msg), _) => msg.as_str(),
                    (None, true) => "ok",
                    (None, false) => "failing",
                };
                format!("{}: {}", check.name, state)
            })
            .collect::<Vec<_>>()
            .join(", ");

        let overall = if self.healthy { "healthy" } else { "unhealthy" };
        if checks.is_empty() {
            overall.to_string()
        } else {
            format!("{} ({})", overall, checks)
        }
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}
