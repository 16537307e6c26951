//! 物料仓储接口

use async_trait::async_trait;
use materials_errors::AppResult;

use crate::domain::entities::{Material, MaterialData};
use crate::domain::value_objects::{MaterialId, SchemaVariant, SearchTerm};

/// 物料仓储接口
///
/// 每个方法只执行一条参数化语句，写操作立即提交
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// 当前使用的列集合
    fn schema(&self) -> SchemaVariant;

    /// 查询全部物料，不保证顺序
    async fn list_all(&self) -> AppResult<Vec<Material>>;

    /// 名称或类型包含搜索词（不区分大小写）
    async fn search(&self, term: &SearchTerm) -> AppResult<Vec<Material>>;

    /// 插入一行并返回存储分配的 ID
    async fn insert(&self, data: &MaterialData) -> AppResult<MaterialId>;

    /// 按 ID 删除，返回受影响行数
    async fn delete(&self, id: MaterialId) -> AppResult<u64>;

    /// 连接探测
    async fn ping(&self) -> AppResult<()>;

    /// 释放连接
    async fn close(&self);
}
