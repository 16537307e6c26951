//! 物料实体
//!
//! 物料只是存储中的一行：按需查询，不缓存，生命周期仅限于当前结果集

use rust_decimal::Decimal;

use crate::domain::value_objects::{MaterialColumn, MaterialId, SchemaVariant};

/// 随列集合变化的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialDetails {
    Extended {
        picture: String,
        storage_quantity: i32,
        min_quantity: i32,
        pack_quantity: i32,
    },
    Basic {
        stock_quantity: i32,
    },
}

impl MaterialDetails {
    pub fn schema(&self) -> SchemaVariant {
        match self {
            MaterialDetails::Extended { .. } => SchemaVariant::Extended,
            MaterialDetails::Basic { .. } => SchemaVariant::Basic,
        }
    }
}

/// 物料字段（不含存储分配的 ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialData {
    pub title: String,
    pub material_type: String,
    pub price: Decimal,
    pub unit: String,
    pub details: MaterialDetails,
}

impl MaterialData {
    pub fn schema(&self) -> SchemaVariant {
        self.details.schema()
    }

    /// 单元格文本；不属于当前列集合的列返回空串
    pub fn cell(&self, column: MaterialColumn) -> String {
        match (column, &self.details) {
            (MaterialColumn::Id, _) => String::new(),
            (MaterialColumn::Title, _) => self.title.clone(),
            (MaterialColumn::MaterialType, _) => self.material_type.clone(),
            (MaterialColumn::Price, _) => self.price.to_string(),
            (MaterialColumn::Unit, _) => self.unit.clone(),
            (MaterialColumn::Picture, MaterialDetails::Extended { picture, .. }) => picture.clone(),
            (
                MaterialColumn::StorageQuantity,
                MaterialDetails::Extended {
                    storage_quantity, ..
                },
            ) => storage_quantity.to_string(),
            (MaterialColumn::MinQuantity, MaterialDetails::Extended { min_quantity, .. }) => {
                min_quantity.to_string()
            }
            (MaterialColumn::PackQuantity, MaterialDetails::Extended { pack_quantity, .. }) => {
                pack_quantity.to_string()
            }
            (MaterialColumn::StockQuantity, MaterialDetails::Basic { stock_quantity }) => {
                stock_quantity.to_string()
            }
            _ => String::new(),
        }
    }
}

/// 物料
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub id: MaterialId,
    pub data: MaterialData,
}

impl Material {
    pub fn new(id: MaterialId, data: MaterialData) -> Self {
        Self { id, data }
    }

    pub fn id(&self) -> MaterialId {
        self.id
    }

    pub fn schema(&self) -> SchemaVariant {
        self.data.schema()
    }

    pub fn cell(&self, column: MaterialColumn) -> String {
        match column {
            MaterialColumn::Id => self.id.to_string(),
            other => self.data.cell(other),
        }
    }

    /// 按列集合顺序输出整行
    pub fn cells(&self) -> Vec<String> {
        self.schema()
            .columns()
            .iter()
            .map(|column| self.cell(*column))
            .collect()
    }
}
