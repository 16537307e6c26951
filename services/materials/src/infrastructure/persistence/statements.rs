//! SQL 语句
//!
//! 语句文本只由静态列名拼成，用户输入一律作为绑定参数传入

use crate::domain::value_objects::{MATERIALS_TABLE, MaterialColumn, SchemaVariant};

/// 某一列集合下的四条语句
#[derive(Debug, Clone)]
pub struct MaterialStatements {
    pub select_all: String,
    pub search: String,
    pub insert: String,
    pub delete: String,
}

impl MaterialStatements {
    pub fn new(schema: SchemaVariant) -> Self {
        let name = |column: MaterialColumn| schema.column_name(column);

        let columns = schema
            .columns()
            .iter()
            .map(|c| name(*c))
            .collect::<Vec<_>>()
            .join(", ");
        let writable = schema
            .writable_columns()
            .iter()
            .map(|c| name(*c))
            .collect::<Vec<_>>();
        let placeholders = (1..=writable.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");

        let id = name(MaterialColumn::Id);

        Self {
            select_all: format!("SELECT {} FROM {}", columns, MATERIALS_TABLE),
            search: format!(
                "SELECT {} FROM {} WHERE {} ILIKE $1 OR {} ILIKE $1",
                columns,
                MATERIALS_TABLE,
                name(MaterialColumn::Title),
                name(MaterialColumn::MaterialType)
            ),
            insert: format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
                MATERIALS_TABLE,
                writable.join(", "),
                placeholders,
                id
            ),
            delete: format!("DELETE FROM {} WHERE {} = $1", MATERIALS_TABLE, id),
        }
    }
}
