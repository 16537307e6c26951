//! 文本表格渲染

use crate::domain::value_objects::ColumnKind;

use super::view::{MaterialsView, MessageLevel};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// 渲染表格和消息区
///
/// 第一列是行序号（`select` 使用），选中行以 `>` 标记；数值列右对齐
pub fn render(view: &MaterialsView, color: bool) -> String {
    let schema = view.schema();
    let columns = schema.columns();

    let mut header = vec!["#".to_string()];
    header.extend(schema.headers().into_iter().map(str::to_string));

    let body: Vec<Vec<String>> = view
        .rows()
        .iter()
        .enumerate()
        .map(|(index, material)| {
            let marker = if view.selected_index() == Some(index) { ">" } else { " " };
            let mut cells = vec![format!("{}{}", marker, index + 1)];
            cells.extend(material.cells());
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    // 序号列和数值列右对齐
    let right_aligned: Vec<bool> = std::iter::once(true)
        .chain(columns.iter().map(|c| {
            matches!(
                c.kind(),
                ColumnKind::Identifier | ColumnKind::Decimal | ColumnKind::Quantity
            )
        }))
        .collect();

    let mut out = String::new();
    out.push_str(&format_line(&header, &widths, &right_aligned));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &body {
        out.push_str(&format_line(row, &widths, &right_aligned));
        out.push('\n');
    }

    let count = body.len();
    out.push_str(&format!("({} {})\n", count, if count == 1 { "row" } else { "rows" }));

    for message in view.messages() {
        match (message.level, color) {
            (MessageLevel::Error, true) => {
                out.push_str(&format!("{}{}{}\n", RED, message.text, RESET))
            }
            _ => {
                out.push_str(&message.text);
                out.push('\n');
            }
        }
    }

    out
}

fn format_line(cells: &[String], widths: &[usize], right_aligned: &[bool]) -> String {
    cells
        .iter()
        .zip(widths)
        .zip(right_aligned)
        .map(|((cell, width), right)| {
            if *right {
                format!("{:>width$}", cell, width = width)
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Material, MaterialData, MaterialDetails};
    use crate::domain::value_objects::{MaterialId, SchemaVariant};
    use rust_decimal::Decimal;

    fn cement() -> Material {
        Material::new(
            MaterialId(1),
            MaterialData {
                title: "Cement".to_string(),
                material_type: "Binder".to_string(),
                price: Decimal::new(1250, 2),
                unit: "kg".to_string(),
                details: MaterialDetails::Basic {
                    stock_quantity: 100,
                },
            },
        )
    }

    #[test]
    fn test_empty_grid_shows_headers() {
        let view = MaterialsView::new(SchemaVariant::Basic, false);
        let out = render(&view, false);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("# | ID | Name | Type | Price | Stock | Unit"));
        assert_eq!(lines.next(), Some("--+----+------+------+-------+-------+-----"));
        assert_eq!(lines.next(), Some("(0 rows)"));
    }

    #[test]
    fn test_rows_and_selection_marker() {
        let mut view = MaterialsView::new(SchemaVariant::Basic, false);
        view.replace_rows(vec![cement()]);
        view.select(0);

        let out = render(&view, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " # | ID | Name   | Type   | Price | Stock | Unit");
        assert_eq!(lines[2], ">1 |  1 | Cement | Binder | 12.50 |   100 | kg");
        assert_eq!(lines[3], "(1 row)");
    }

    #[test]
    fn test_errors_are_red_when_colored() {
        let mut view = MaterialsView::new(SchemaVariant::Extended, false);
        view.push_error("No database connection");
        view.push_info("healthy");

        let colored = render(&view, true);
        assert!(colored.contains("\x1b[31mNo database connection\x1b[0m\n"));
        assert!(colored.ends_with("healthy\n"));

        let plain = render(&view, false);
        assert!(plain.contains("No database connection\n"));
        assert!(!plain.contains("\x1b["));
    }
}
