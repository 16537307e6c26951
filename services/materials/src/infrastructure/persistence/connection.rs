//! 建立存储连接

use std::time::Duration;

use materials_adapter_postgres::{PostgresConfig, SslMode, close_pool, create_pool};
use materials_config::DatabaseConfig;
use materials_errors::{AppError, AppResult};
use tracing::warn;

use crate::domain::value_objects::SchemaVariant;

use super::ddl::ensure_table;
use super::postgres::PostgresMaterialRepository;

/// 由应用配置构造 PostgreSQL 连接配置
pub fn postgres_config(database: &DatabaseConfig) -> AppResult<PostgresConfig> {
    let ssl_mode = database
        .ssl_mode
        .parse::<SslMode>()
        .map_err(AppError::connection_failed)?;

    let mut config = PostgresConfig::from_components(
        database.host.clone(),
        database.port,
        database.name.clone(),
        database.user.clone(),
    )
    .with_password(database.password.clone())
    .with_ssl_mode(ssl_mode)
    .with_connect_timeout(Duration::from_secs(database.connect_timeout_secs));

    if let Some(ref app_name) = database.application_name {
        config = config.with_application_name(app_name.clone());
    }

    Ok(config)
}

/// 连接存储（启动时调用一次）
///
/// `init_schema` 为真时在连接后确保物料表存在；建表失败视为连接失败
pub async fn connect(
    database: &DatabaseConfig,
    schema: SchemaVariant,
    init_schema: bool,
) -> AppResult<PostgresMaterialRepository> {
    let config = postgres_config(database)?;
    let pool = create_pool(&config).await?;

    if init_schema {
        if let Err(e) = ensure_table(&pool, schema).await {
            warn!(error = %e, "Schema initialisation failed, dropping connection");
            close_pool(&pool).await;
            return Err(AppError::connection_failed(e.to_string()));
        }
    }

    Ok(PostgresMaterialRepository::new(pool, schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, Secret};

    fn database() -> DatabaseConfig {
        DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            name: "db".to_string(),
            user: "postgres".to_string(),
            password: Secret::new("1234".to_string()),
            ssl_mode: "disable".to_string(),
            connect_timeout_secs: 3,
            application_name: Some("materials-desk".to_string()),
        }
    }

    #[test]
    fn test_postgres_config_from_database_section() {
        let config = postgres_config(&database()).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.database, "db");
        assert_eq!(config.username, "postgres");
        assert_eq!(config.ssl_mode, SslMode::Disable);
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.application_name.as_deref(), Some("materials-desk"));
        assert_eq!(
            config.password.as_ref().map(|p| p.expose_secret().as_str()),
            Some("1234")
        );
    }

    #[test]
    fn test_invalid_ssl_mode_is_a_connection_failure() {
        let mut database = database();
        database.ssl_mode = "sometimes".to_string();

        let err = postgres_config(&database).unwrap_err();
        assert!(matches!(err, AppError::ConnectionFailed(_)));
    }
}
