//! Translation of grid values and styles into spreadsheet API bodies.
//!
//! Grid format ranges are inclusive on both ends; the destination expects
//! half-open `[start, end)` indices, so end indices gain one here.

use chansheet_core::{CellStyle, CellValue, Color, FormatRange, Row};
use serde_json::{json, Map, Value};

/// Destination representation of one cell value
pub fn cell_value(value: &CellValue) -> Value {
    match value {
        CellValue::Empty => Value::String(String::new()),
        CellValue::Text(text) => Value::String(text.clone()),
        CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => json!(*n as i64),
        CellValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(value.as_text())),
    }
}

/// Rows of destination values for a bulk write
pub fn value_rows(rows: &[Row]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| row.iter().map(cell_value).collect())
        .collect()
}

fn color(color: Color) -> Value {
    let (red, green, blue) = color.to_unit_rgb();
    json!({ "red": red, "green": green, "blue": blue })
}

/// `userEnteredFormat` object for a style; unset properties are omitted
pub fn user_entered_format(style: &CellStyle) -> Value {
    let mut format = Map::new();

    let mut text = Map::new();
    if let Some(bold) = style.bold {
        text.insert("bold".into(), json!(bold));
    }
    if let Some(italic) = style.italic {
        text.insert("italic".into(), json!(italic));
    }
    if let Some(size) = style.font_size {
        text.insert("fontSize".into(), json!(size));
    }
    if let Some(family) = &style.font_family {
        text.insert("fontFamily".into(), json!(family));
    }
    if let Some(c) = style.text_color {
        text.insert("foregroundColor".into(), color(c));
    }
    if !text.is_empty() {
        format.insert("textFormat".into(), Value::Object(text));
    }

    if let Some(c) = style.background_color {
        format.insert("backgroundColor".into(), color(c));
    }
    if let Some(align) = style.horizontal_align {
        format.insert("horizontalAlignment".into(), json!(align.as_str().to_uppercase()));
    }
    if let Some(align) = style.vertical_align {
        format.insert("verticalAlignment".into(), json!(align.as_str().to_uppercase()));
    }
    if let Some(pattern) = &style.number_format {
        format.insert("numberFormat".into(), json!({ "type": "NUMBER", "pattern": pattern }));
    }
    if let Some(borders) = style.borders.filter(|b| b.any()) {
        let sides: Map<String, Value> = borders
            .enabled()
            .map(|side| (side.to_string(), json!({ "style": "SOLID" })))
            .collect();
        format.insert("borders".into(), Value::Object(sides));
    }

    Value::Object(format)
}

/// `repeatCell` request applying `range.style` on tab `sheet_id`
pub fn repeat_cell(range: &FormatRange, sheet_id: i64) -> Value {
    json!({
        "repeatCell": {
            "range": {
                "sheetId": sheet_id,
                "startRowIndex": range.start_row,
                "endRowIndex": range.end_row + 1,
                "startColumnIndex": range.start_col,
                "endColumnIndex": range.end_col + 1,
            },
            "cell": {
                "userEnteredFormat": user_entered_format(&range.style),
            },
            "fields": "userEnteredFormat",
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chansheet_core::{Borders, HorizontalAlign, VerticalAlign};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_values() {
        assert_eq!(cell_value(&CellValue::Empty), json!(""));
        assert_eq!(cell_value(&CellValue::text("+40")), json!("+40"));
        assert_eq!(cell_value(&CellValue::Number(1040.0)), json!(1040));
        assert_eq!(cell_value(&CellValue::Number(2.5)), json!(2.5));
        assert_eq!(cell_value(&CellValue::Number(f64::NAN)), json!("NaN"));
    }

    #[test]
    fn test_full_style() {
        let style = CellStyle::bold()
            .with_italic(false)
            .with_font_size(11)
            .with_font_family("Roboto")
            .with_text_color(Color::BLACK)
            .with_background_color(Color::WHITE)
            .with_horizontal_align(HorizontalAlign::Center)
            .with_vertical_align(VerticalAlign::Middle)
            .with_number_format("#,##0")
            .with_borders(Borders {
                top: true,
                bottom: true,
                left: false,
                right: false,
            });

        assert_eq!(
            user_entered_format(&style),
            json!({
                "textFormat": {
                    "bold": true,
                    "italic": false,
                    "fontSize": 11,
                    "fontFamily": "Roboto",
                    "foregroundColor": {"red": 0.0, "green": 0.0, "blue": 0.0},
                },
                "backgroundColor": {"red": 1.0, "green": 1.0, "blue": 1.0},
                "horizontalAlignment": "CENTER",
                "verticalAlignment": "MIDDLE",
                "numberFormat": {"type": "NUMBER", "pattern": "#,##0"},
                "borders": {
                    "top": {"style": "SOLID"},
                    "bottom": {"style": "SOLID"},
                },
            })
        );
    }

    #[test]
    fn test_sparse_style() {
        assert_eq!(user_entered_format(&CellStyle::new()), json!({}));
        let style = CellStyle::new()
            .with_background_color(Color::SECTION_GREY)
            .with_borders(Borders::default());
        let format = user_entered_format(&style);
        assert!(format.get("textFormat").is_none());
        assert!(format.get("borders").is_none());
        let red = format["backgroundColor"]["red"].as_f64().unwrap();
        assert!((red - 245.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeat_cell_is_half_open() {
        let range = FormatRange::new(1, 0, 1, 6, CellStyle::bold());
        let request = repeat_cell(&range, 99);
        assert_eq!(
            request["repeatCell"]["range"],
            json!({
                "sheetId": 99,
                "startRowIndex": 1,
                "endRowIndex": 2,
                "startColumnIndex": 0,
                "endColumnIndex": 7,
            })
        );
        assert_eq!(request["repeatCell"]["fields"], json!("userEnteredFormat"));
        assert_eq!(
            request["repeatCell"]["cell"]["userEnteredFormat"],
            json!({"textFormat": {"bold": true}})
        );
    }
}
