//! 建表语句
//!
//! 仅在显式要求时执行，且使用 `IF NOT EXISTS`，既有表不会被修改

use materials_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::info;

use crate::domain::value_objects::{
    ColumnKind, MATERIALS_TABLE, PRICE_PRECISION, PRICE_SCALE, SchemaVariant,
};

/// 生成某一列集合的建表语句
pub fn create_table_sql(schema: SchemaVariant) -> String {
    let definitions = schema
        .columns()
        .iter()
        .map(|column| {
            let name = schema.column_name(*column);
            match column.kind() {
                ColumnKind::Identifier => format!("{} SERIAL PRIMARY KEY", name),
                ColumnKind::Text => format!("{} TEXT NOT NULL DEFAULT ''", name),
                ColumnKind::Decimal => {
                    format!(
                        "{} NUMERIC({}, {}) NOT NULL CHECK ({} >= 0)",
                        name, PRICE_PRECISION, PRICE_SCALE, name
                    )
                }
                ColumnKind::Quantity => {
                    format!("{} INTEGER NOT NULL CHECK ({} >= 0)", name, name)
                }
            }
        })
        .collect::<Vec<_>>()
        .join(",\n    ");

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        MATERIALS_TABLE, definitions
    )
}

/// 确保物料表存在
pub async fn ensure_table(pool: &PgPool, schema: SchemaVariant) -> AppResult<()> {
    sqlx::query(&create_table_sql(schema))
        .execute(pool)
        .await
        .map_err(|e| AppError::query_failed(format!("Failed to create materials table: {}", e)))?;

    info!(schema = %schema, "Materials table ensured");
    Ok(())
}
