//! Material commands

use std::collections::HashMap;
use std::str::FromStr;

use materials_errors::{AppError, AppResult};
use rust_decimal::Decimal;

use crate::domain::entities::{MaterialData, MaterialDetails};
use crate::domain::value_objects::{
    MaterialColumn, PRICE_PRECISION, PRICE_SCALE, SchemaVariant,
};

/// 创建物料命令
///
/// 保存表单的原始文本输入，未填写的字段视为空串
#[derive(Debug, Clone, Default)]
pub struct CreateMaterialCommand {
    values: HashMap<MaterialColumn, String>,
}

impl CreateMaterialCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: MaterialColumn, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: MaterialColumn, value: impl Into<String>) {
        self.values.insert(column, value.into());
    }

    pub fn value(&self, column: MaterialColumn) -> &str {
        self.values.get(&column).map(String::as_str).unwrap_or("")
    }

    /// 校验并转换为物料字段
    ///
    /// 价格必须是非负十进制数，数量必须是非负整数；文本原样保留
    pub fn parse(&self, schema: SchemaVariant) -> AppResult<MaterialData> {
        let price = parse_price(self.value(MaterialColumn::Price))?;

        let details = match schema {
            SchemaVariant::Extended => MaterialDetails::Extended {
                picture: self.value(MaterialColumn::Picture).to_string(),
                storage_quantity: self.quantity(MaterialColumn::StorageQuantity)?,
                min_quantity: self.quantity(MaterialColumn::MinQuantity)?,
                pack_quantity: self.quantity(MaterialColumn::PackQuantity)?,
            },
            SchemaVariant::Basic => MaterialDetails::Basic {
                stock_quantity: self.quantity(MaterialColumn::StockQuantity)?,
            },
        };

        Ok(MaterialData {
            title: self.value(MaterialColumn::Title).to_string(),
            material_type: self.value(MaterialColumn::MaterialType).to_string(),
            price,
            unit: self.value(MaterialColumn::Unit).to_string(),
            details,
        })
    }

    fn quantity(&self, column: MaterialColumn) -> AppResult<i32> {
        parse_quantity(column, self.value(column))
    }
}

fn parse_price(raw: &str) -> AppResult<Decimal> {
    let price = Decimal::from_str(raw.trim()).map_err(|_| {
        AppError::validation(format!("Price must be a decimal number, got '{}'", raw))
    })?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::validation(format!(
            "Price must not be negative, got '{}'",
            raw
        )));
    }

    // 存储不做舍入：小数位和整数位都必须放得进价格列
    if price.normalize().scale() > PRICE_SCALE {
        return Err(AppError::validation(format!(
            "Price must have at most {} decimal places, got '{}'",
            PRICE_SCALE, raw
        )));
    }

    let limit = Decimal::from(10u64.pow(PRICE_PRECISION - PRICE_SCALE));
    if price >= limit {
        return Err(AppError::validation(format!(
            "Price must be less than {}, got '{}'",
            limit, raw
        )));
    }

    Ok(price)
}

fn parse_quantity(column: MaterialColumn, raw: &str) -> AppResult<i32> {
    let quantity = raw.trim().parse::<i32>().map_err(|_| {
        AppError::validation(format!(
            "{} must be a whole number, got '{}'",
            column.label(),
            raw
        ))
    })?;

    if quantity < 0 {
        return Err(AppError::validation(format!(
            "{} must not be negative, got '{}'",
            column.label(),
            raw
        )));
    }

    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_form() -> CreateMaterialCommand {
        CreateMaterialCommand::new()
            .with(MaterialColumn::Title, "Cement")
            .with(MaterialColumn::MaterialType, "Binder")
            .with(MaterialColumn::Price, "12.50")
            .with(MaterialColumn::StockQuantity, "100")
            .with(MaterialColumn::Unit, "kg")
    }

    #[test]
    fn test_parse_basic_form() {
        let data = basic_form().parse(SchemaVariant::Basic).unwrap();
        assert_eq!(data.title, "Cement");
        assert_eq!(data.material_type, "Binder");
        assert_eq!(data.price, Decimal::new(1250, 2));
        assert_eq!(data.unit, "kg");
        assert_eq!(data.details, MaterialDetails::Basic { stock_quantity: 100 });
    }

    #[test]
    fn test_parse_extended_form_with_missing_text() {
        let form = CreateMaterialCommand::new()
            .with(MaterialColumn::Price, " 3 ")
            .with(MaterialColumn::StorageQuantity, "10")
            .with(MaterialColumn::MinQuantity, "+2")
            .with(MaterialColumn::PackQuantity, "0");

        let data = form.parse(SchemaVariant::Extended).unwrap();
        assert_eq!(data.title, "");
        assert_eq!(data.unit, "");
        assert_eq!(data.price, Decimal::from(3));
        assert_eq!(
            data.details,
            MaterialDetails::Extended {
                picture: String::new(),
                storage_quantity: 10,
                min_quantity: 2,
                pack_quantity: 0,
            }
        );
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let form = basic_form().with(MaterialColumn::Price, "cheap");
        let err = form.parse(SchemaVariant::Basic).unwrap_err();
        assert_eq!(
            err,
            AppError::validation("Price must be a decimal number, got 'cheap'")
        );
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let err = basic_form()
            .with(MaterialColumn::Price, "-1")
            .parse(SchemaVariant::Basic)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = basic_form()
            .with(MaterialColumn::StockQuantity, "-5")
            .parse(SchemaVariant::Basic)
            .unwrap_err();
        assert_eq!(
            err,
            AppError::validation("Stock must not be negative, got '-5'")
        );
    }

    #[test]
    fn test_fractional_or_blank_quantity_is_rejected() {
        let err = basic_form()
            .with(MaterialColumn::StockQuantity, "1.5")
            .parse(SchemaVariant::Basic)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // 空数量无法转换
        let err = CreateMaterialCommand::new()
            .with(MaterialColumn::Price, "1")
            .parse(SchemaVariant::Basic)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_price_beyond_two_decimals_is_rejected() {
        let err = basic_form()
            .with(MaterialColumn::Price, "12.555")
            .parse(SchemaVariant::Basic)
            .unwrap_err();
        assert_eq!(
            err,
            AppError::validation("Price must have at most 2 decimal places, got '12.555'")
        );

        // 末尾的零不算额外精度
        let data = basic_form()
            .with(MaterialColumn::Price, "12.500")
            .parse(SchemaVariant::Basic)
            .unwrap();
        assert_eq!(data.price, Decimal::new(1250, 2));
    }

    #[test]
    fn test_price_beyond_column_range_is_rejected() {
        let err = basic_form()
            .with(MaterialColumn::Price, "123456789")
            .parse(SchemaVariant::Basic)
            .unwrap_err();
        assert_eq!(
            err,
            AppError::validation("Price must be less than 100000000, got '123456789'")
        );

        let data = basic_form()
            .with(MaterialColumn::Price, "99999999.99")
            .parse(SchemaVariant::Basic)
            .unwrap();
        assert_eq!(data.price, Decimal::new(9_999_999_999, 2));
    }

    #[test]
    fn test_negative_zero_price_is_accepted() {
        let data = basic_form()
            .with(MaterialColumn::Price, "-0")
            .parse(SchemaVariant::Basic)
            .unwrap();
        assert!(data.price.is_zero());
    }
}
