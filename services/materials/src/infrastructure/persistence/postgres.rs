//! PostgreSQL repository implementation

use async_trait::async_trait;
use materials_adapter_postgres::{check_connection, close_pool};
use materials_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::{Material, MaterialData, MaterialDetails};
use crate::domain::repositories::MaterialRepository;
use crate::domain::value_objects::{MaterialId, SchemaVariant, SearchTerm};

use super::rows::{BasicMaterialRow, ExtendedMaterialRow};
use super::statements::MaterialStatements;

pub struct PostgresMaterialRepository {
    pool: PgPool,
    schema: SchemaVariant,
    statements: MaterialStatements,
}

impl PostgresMaterialRepository {
    pub fn new(pool: PgPool, schema: SchemaVariant) -> Self {
        Self {
            pool,
            schema,
            statements: MaterialStatements::new(schema),
        }
    }

    /// 执行查询语句并按列集合解码；`pattern` 绑定到 `$1`
    async fn fetch(&self, sql: &str, pattern: Option<String>) -> Result<Vec<Material>, sqlx::Error> {
        match self.schema {
            SchemaVariant::Extended => {
                let mut query = sqlx::query_as::<_, ExtendedMaterialRow>(sql);
                if let Some(pattern) = pattern {
                    query = query.bind(pattern);
                }
                let rows = query.fetch_all(&self.pool).await?;
                Ok(rows.into_iter().map(Material::from).collect())
            }
            SchemaVariant::Basic => {
                let mut query = sqlx::query_as::<_, BasicMaterialRow>(sql);
                if let Some(pattern) = pattern {
                    query = query.bind(pattern);
                }
                let rows = query.fetch_all(&self.pool).await?;
                Ok(rows.into_iter().map(Material::from).collect())
            }
        }
    }
}

#[async_trait]
impl MaterialRepository for PostgresMaterialRepository {
    fn schema(&self) -> SchemaVariant {
        self.schema
    }

    async fn list_all(&self) -> AppResult<Vec<Material>> {
        self.fetch(&self.statements.select_all, None)
            .await
            .map_err(|e| AppError::query_failed(e.to_string()))
    }

    async fn search(&self, term: &SearchTerm) -> AppResult<Vec<Material>> {
        self.fetch(&self.statements.search, Some(term.like_pattern()))
            .await
            .map_err(|e| AppError::query_failed(e.to_string()))
    }

    async fn insert(&self, data: &MaterialData) -> AppResult<MaterialId> {
        if data.schema() != self.schema {
            return Err(AppError::validation(format!(
                "Material has {} columns but the table uses {} columns",
                data.schema(),
                self.schema
            )));
        }

        // 绑定顺序与 writable_columns 一致
        let query = sqlx::query_scalar::<_, i32>(&self.statements.insert)
            .bind(&data.title)
            .bind(&data.material_type);
        let query = match &data.details {
            MaterialDetails::Extended {
                picture,
                storage_quantity,
                min_quantity,
                pack_quantity,
            } => query
                .bind(picture)
                .bind(data.price)
                .bind(*storage_quantity)
                .bind(*min_quantity)
                .bind(*pack_quantity),
            MaterialDetails::Basic { stock_quantity } => {
                query.bind(data.price).bind(*stock_quantity)
            }
        };

        let id = query
            .bind(&data.unit)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::query_failed(e.to_string()))?;

        Ok(MaterialId(id))
    }

    async fn delete(&self, id: MaterialId) -> AppResult<u64> {
        let result = sqlx::query(&self.statements.delete)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::query_failed(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> AppResult<()> {
        check_connection(&self.pool).await
    }

    async fn close(&self) {
        close_pool(&self.pool).await;
    }
}
