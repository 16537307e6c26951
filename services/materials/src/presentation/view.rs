//! 视图状态

use crate::domain::entities::Material;
use crate::domain::value_objects::SchemaVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

/// 表格与消息区
#[derive(Debug, Clone)]
pub struct MaterialsView {
    schema: SchemaVariant,
    rows: Vec<Material>,
    selected: Option<usize>,
    messages: Vec<Message>,
    keep_history: bool,
}

impl MaterialsView {
    /// `keep_history` 为真时消息不随新操作清空
    pub fn new(schema: SchemaVariant, keep_history: bool) -> Self {
        Self {
            schema,
            rows: Vec::new(),
            selected: None,
            messages: Vec::new(),
            keep_history,
        }
    }

    pub fn schema(&self) -> SchemaVariant {
        self.schema
    }

    pub fn rows(&self) -> &[Material] {
        &self.rows
    }

    /// 整体替换结果集并清除选中
    pub fn replace_rows(&mut self, rows: Vec<Material>) {
        self.rows = rows;
        self.selected = None;
    }

    /// 选中第 `index` 行（从 0 开始）；越界返回 `false`
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&Material> {
        self.selected.and_then(|index| self.rows.get(index))
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|m| m.level == MessageLevel::Error)
            .map(|m| m.text.as_str())
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            level: MessageLevel::Error,
            text: text.into(),
        });
    }

    pub fn push_info(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            level: MessageLevel::Info,
            text: text.into(),
        });
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// 新操作开始
    pub fn begin_operation(&mut self) {
        if !self.keep_history {
            self.messages.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MaterialData, MaterialDetails};
    use crate::domain::value_objects::MaterialId;
    use rust_decimal::Decimal;

    fn row(id: i32) -> Material {
        Material::new(
            MaterialId(id),
            MaterialData {
                title: format!("M{}", id),
                material_type: "T".to_string(),
                price: Decimal::ONE,
                unit: "kg".to_string(),
                details: MaterialDetails::Basic { stock_quantity: 1 },
            },
        )
    }

    #[test]
    fn test_replace_rows_clears_selection() {
        let mut view = MaterialsView::new(SchemaVariant::Basic, false);
        view.replace_rows(vec![row(1), row(2)]);
        assert!(view.select(1));
        assert_eq!(view.selected_row().map(|m| m.id), Some(MaterialId(2)));

        view.replace_rows(vec![row(3)]);
        assert!(view.selected_row().is_none());
        assert!(!view.select(1));
    }

    #[test]
    fn test_messages_cleared_per_operation() {
        let mut view = MaterialsView::new(SchemaVariant::Basic, false);
        view.push_error("first");
        view.begin_operation();
        assert!(view.messages().is_empty());
    }

    #[test]
    fn test_messages_accumulate_with_history() {
        let mut view = MaterialsView::new(SchemaVariant::Basic, true);
        view.push_error("first");
        view.begin_operation();
        view.push_info("note");
        view.push_error("second");
        assert_eq!(view.errors().collect::<Vec<_>>(), vec!["first", "second"]);

        view.clear_messages();
        assert!(view.messages().is_empty());
    }
}
