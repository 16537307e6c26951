//! 行 → 实体转换

use crate::domain::entities::{Material, MaterialData, MaterialDetails};
use crate::domain::value_objects::MaterialId;

use super::rows::{BasicMaterialRow, ExtendedMaterialRow};

impl From<ExtendedMaterialRow> for Material {
    fn from(row: ExtendedMaterialRow) -> Self {
        Material::new(
            MaterialId(row.id_material),
            MaterialData {
                title: row.title_material.unwrap_or_default(),
                material_type: row.material_type.unwrap_or_default(),
                price: row.price.unwrap_or_default(),
                unit: row.unit.unwrap_or_default(),
                details: MaterialDetails::Extended {
                    picture: row.picture.unwrap_or_default(),
                    storage_quantity: row.storage_quality.unwrap_or_default(),
                    min_quantity: row.min_quality.unwrap_or_default(),
                    pack_quantity: row.pack_quality.unwrap_or_default(),
                },
            },
        )
    }
}

impl From<BasicMaterialRow> for Material {
    fn from(row: BasicMaterialRow) -> Self {
        Material::new(
            MaterialId(row.id),
            MaterialData {
                title: row.name.unwrap_or_default(),
                material_type: row.material_type.unwrap_or_default(),
                price: row.price.unwrap_or_default(),
                unit: row.unit.unwrap_or_default(),
                details: MaterialDetails::Basic {
                    stock_quantity: row.stock_quantity.unwrap_or_default(),
                },
            },
        )
    }
}
