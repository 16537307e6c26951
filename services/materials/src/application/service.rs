//! 物料数据访问服务

use std::sync::Arc;

use materials_errors::{AppError, AppResult};
use materials_telemetry::HealthStatus;
use tracing::{debug, info};

use crate::domain::entities::Material;
use crate::domain::repositories::MaterialRepository;
use crate::domain::value_objects::{MaterialId, SchemaVariant, SearchTerm};

use super::commands::CreateMaterialCommand;

/// 数据访问层
///
/// 持有唯一的存储连接。启动时连接失败则以无连接状态存在，
/// 此后每个操作立即返回 `NoConnection`，不会尝试重连
pub struct MaterialService {
    repo: Option<Arc<dyn MaterialRepository>>,
    schema: SchemaVariant,
}

impl MaterialService {
    pub fn new(repo: Arc<dyn MaterialRepository>) -> Self {
        let schema = repo.schema();
        Self {
            repo: Some(repo),
            schema,
        }
    }

    /// 无连接的服务
    pub fn disconnected(schema: SchemaVariant) -> Self {
        Self { repo: None, schema }
    }

    pub fn schema(&self) -> SchemaVariant {
        self.schema
    }

    pub fn is_connected(&self) -> bool {
        self.repo.is_some()
    }

    fn repo(&self) -> AppResult<&Arc<dyn MaterialRepository>> {
        self.repo.as_ref().ok_or(AppError::NoConnection)
    }

    /// 查询全部物料；空表返回空列表
    pub async fn list_all(&self) -> AppResult<Vec<Material>> {
        let materials = self.repo()?.list_all().await?;
        debug!(count = materials.len(), "Listed materials");
        Ok(materials)
    }

    /// 按名称或类型搜索；空搜索词在访问存储前被拒绝
    pub async fn search(&self, term: &str) -> AppResult<Vec<Material>> {
        let repo = self.repo()?;
        let term = SearchTerm::new(term)?;

        let materials = repo.search(&term).await?;
        debug!(term = term.as_str(), count = materials.len(), "Searched materials");
        Ok(materials)
    }

    /// 校验表单并插入一行，返回存储分配的 ID
    pub async fn insert(&self, command: &CreateMaterialCommand) -> AppResult<MaterialId> {
        let repo = self.repo()?;

        // 校验失败时不发出任何语句
        let data = command.parse(self.schema)?;

        let id = repo.insert(&data).await?;
        info!(material_id = %id, title = %data.title, "Material created");
        Ok(id)
    }

    /// 按 ID 删除；ID 不存在时视为成功
    pub async fn delete_by_id(&self, id: MaterialId) -> AppResult<()> {
        let rows = self.repo()?.delete(id).await?;
        if rows == 0 {
            debug!(material_id = %id, "Delete matched no rows");
        } else {
            info!(material_id = %id, "Material deleted");
        }
        Ok(())
    }

    /// 连接健康检查
    pub async fn health(&self) -> HealthStatus {
        let mut status = HealthStatus::new();
        match self.repo() {
            Ok(repo) => match repo.ping().await {
                Ok(()) => status.add_check("postgres", true, None),
                Err(e) => status.add_check("postgres", false, Some(e.to_string())),
            },
            Err(e) => status.add_check("postgres", false, Some(e.to_string())),
        }
        status
    }

    /// 释放连接；之后服务处于无连接状态
    pub async fn close(&mut self) {
        if let Some(repo) = self.repo.take() {
            repo.close().await;
        } else {
            debug!("Close requested without an active connection");
        }
    }
}
