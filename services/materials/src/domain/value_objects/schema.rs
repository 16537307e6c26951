//! 物料表列集合
//!
//! 同一张 `materials` 表存在两套互不兼容的列定义，启动时选定其一，
//! 之后所有语句、表格表头和录入表单都以此为准

use std::fmt;
use std::str::FromStr;

/// 物料表名
pub const MATERIALS_TABLE: &str = "materials";

/// 价格列 `NUMERIC(PRICE_PRECISION, PRICE_SCALE)`
pub const PRICE_PRECISION: u32 = 10;
pub const PRICE_SCALE: u32 = 2;

/// 列集合变体
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SchemaVariant {
    /// 9 列：含图片、库存、最小量、包装量
    #[default]
    Extended,
    /// 6 列：只有一个库存数量
    Basic,
}

/// 逻辑列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialColumn {
    Id,
    Title,
    MaterialType,
    Picture,
    Price,
    StorageQuantity,
    MinQuantity,
    PackQuantity,
    StockQuantity,
    Unit,
}

/// 列的值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 存储分配的整数主键
    Identifier,
    Text,
    /// 非负十进制数
    Decimal,
    /// 非负整数
    Quantity,
}

const EXTENDED_COLUMNS: &[MaterialColumn] = &[
    MaterialColumn::Id,
    MaterialColumn::Title,
    MaterialColumn::MaterialType,
    MaterialColumn::Picture,
    MaterialColumn::Price,
    MaterialColumn::StorageQuantity,
    MaterialColumn::MinQuantity,
    MaterialColumn::PackQuantity,
    MaterialColumn::Unit,
];

const BASIC_COLUMNS: &[MaterialColumn] = &[
    MaterialColumn::Id,
    MaterialColumn::Title,
    MaterialColumn::MaterialType,
    MaterialColumn::Price,
    MaterialColumn::StockQuantity,
    MaterialColumn::Unit,
];

impl SchemaVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Extended => "extended",
            SchemaVariant::Basic => "basic",
        }
    }

    /// 全部列，按展示顺序，第一列为 ID
    pub fn columns(&self) -> &'static [MaterialColumn] {
        match self {
            SchemaVariant::Extended => EXTENDED_COLUMNS,
            SchemaVariant::Basic => BASIC_COLUMNS,
        }
    }

    /// 可写列（插入时由调用方提供），即除 ID 外的全部列
    pub fn writable_columns(&self) -> &'static [MaterialColumn] {
        &self.columns()[1..]
    }

    /// 物理列名
    pub fn column_name(&self, column: MaterialColumn) -> &'static str {
        match (self, column) {
            (SchemaVariant::Extended, MaterialColumn::Id) => "id_material",
            (SchemaVariant::Extended, MaterialColumn::Title) => "title_material",
            (SchemaVariant::Basic, MaterialColumn::Id) => "id",
            (SchemaVariant::Basic, MaterialColumn::Title) => "name",
            (_, MaterialColumn::MaterialType) => "material_type",
            (_, MaterialColumn::Picture) => "picture",
            (_, MaterialColumn::Price) => "price",
            // 与既有表结构保持一致的列名
            (_, MaterialColumn::StorageQuantity) => "storage_quality",
            (_, MaterialColumn::MinQuantity) => "min_quality",
            (_, MaterialColumn::PackQuantity) => "pack_quality",
            (_, MaterialColumn::StockQuantity) => "stock_quantity",
            (_, MaterialColumn::Unit) => "unit",
        }
    }

    /// 表格表头
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.header()).collect()
    }
}

impl MaterialColumn {
    pub fn kind(&self) -> ColumnKind {
        match self {
            MaterialColumn::Id => ColumnKind::Identifier,
            MaterialColumn::Title
            | MaterialColumn::MaterialType
            | MaterialColumn::Picture
            | MaterialColumn::Unit => ColumnKind::Text,
            MaterialColumn::Price => ColumnKind::Decimal,
            MaterialColumn::StorageQuantity
            | MaterialColumn::MinQuantity
            | MaterialColumn::PackQuantity
            | MaterialColumn::StockQuantity => ColumnKind::Quantity,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            MaterialColumn::Id => "ID",
            MaterialColumn::Title => "Name",
            MaterialColumn::MaterialType => "Type",
            MaterialColumn::Picture => "Picture",
            MaterialColumn::Price => "Price",
            MaterialColumn::StorageQuantity => "Storage",
            MaterialColumn::MinQuantity => "Min",
            MaterialColumn::PackQuantity => "Pack",
            MaterialColumn::StockQuantity => "Stock",
            MaterialColumn::Unit => "Unit",
        }
    }

    /// 录入表单标签
    pub fn label(&self) -> &'static str {
        match self {
            MaterialColumn::MinQuantity => "Min Quantity",
            MaterialColumn::PackQuantity => "Pack Quantity",
            other => other.header(),
        }
    }
}

impl FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extended" | "a" => Ok(SchemaVariant::Extended),
            "basic" | "b" => Ok(SchemaVariant::Basic),
            other => Err(format!(
                "unknown schema variant '{}', expected 'extended' or 'basic'",
                other
            )),
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_sets() {
        assert_eq!(SchemaVariant::Extended.columns().len(), 9);
        assert_eq!(SchemaVariant::Basic.columns().len(), 6);
        assert_eq!(SchemaVariant::Extended.writable_columns().len(), 8);
        assert!(!SchemaVariant::Basic.writable_columns().contains(&MaterialColumn::Id));
        assert!(!SchemaVariant::Basic.columns().contains(&MaterialColumn::Picture));
        assert!(!SchemaVariant::Extended.columns().contains(&MaterialColumn::StockQuantity));
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            SchemaVariant::Extended.headers(),
            vec!["ID", "Name", "Type", "Picture", "Price", "Storage", "Min", "Pack", "Unit"]
        );
        assert_eq!(
            SchemaVariant::Basic.headers(),
            vec!["ID", "Name", "Type", "Price", "Stock", "Unit"]
        );
    }

    #[test]
    fn test_physical_column_names() {
        let extended = SchemaVariant::Extended;
        assert_eq!(extended.column_name(MaterialColumn::Id), "id_material");
        assert_eq!(extended.column_name(MaterialColumn::Title), "title_material");
        assert_eq!(extended.column_name(MaterialColumn::StorageQuantity), "storage_quality");

        let basic = SchemaVariant::Basic;
        assert_eq!(basic.column_name(MaterialColumn::Id), "id");
        assert_eq!(basic.column_name(MaterialColumn::Title), "name");
        assert_eq!(basic.column_name(MaterialColumn::StockQuantity), "stock_quantity");
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("Extended".parse(), Ok(SchemaVariant::Extended));
        assert_eq!("b".parse(), Ok(SchemaVariant::Basic));
        assert!("wide".parse::<SchemaVariant>().is_err());
        assert_eq!(SchemaVariant::default(), SchemaVariant::Extended);
    }

    #[test]
    fn test_column_kinds() {
        assert_eq!(MaterialColumn::Id.kind(), ColumnKind::Identifier);
        assert_eq!(MaterialColumn::Price.kind(), ColumnKind::Decimal);
        assert_eq!(MaterialColumn::PackQuantity.kind(), ColumnKind::Quantity);
        assert_eq!(MaterialColumn::Picture.kind(), ColumnKind::Text);
        assert_eq!(MaterialColumn::MinQuantity.label(), "Min Quantity");
        assert_eq!(MaterialColumn::Unit.label(), "Unit");
    }
}
