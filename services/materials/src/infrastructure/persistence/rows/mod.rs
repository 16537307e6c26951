//! 数据库行映射结构
//!
//! 字段名即物理列名；除主键外各列允许为 NULL，读取时文本按空串、数值按 0 处理

use rust_decimal::Decimal;
use sqlx::FromRow;

/// 9 列物料表的行
#[derive(Debug, FromRow)]
pub struct ExtendedMaterialRow {
    pub id_material: i32,
    pub title_material: Option<String>,
    pub material_type: Option<String>,
    pub picture: Option<String>,
    pub price: Option<Decimal>,
    pub storage_quality: Option<i32>,
    pub min_quality: Option<i32>,
    pub pack_quality: Option<i32>,
    pub unit: Option<String>,
}

/// 6 列物料表的行
#[derive(Debug, FromRow)]
pub struct BasicMaterialRow {
    pub id: i32,
    pub name: Option<String>,
    pub material_type: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub unit: Option<String>,
}
