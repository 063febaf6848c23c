use crate::data::DataDoc;
use crate::models::json::{text, truthy_field};
use serde_json::Value;

/// 许可证目录的一行 (已规范化)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitRow {
    pub name: String,
    pub inspections: String,
    pub notes: String,
}

impl PermitRow {
    fn from_value(record: &Value) -> Self {
        let name = truthy_field(record, "name")
            .or_else(|| truthy_field(record, "type"))
            .map(text)
            .unwrap_or_else(|| "Permit".to_string());

        let inspections = if let Some(list) = record.get("inspections").and_then(Value::as_array) {
            list.iter()
                .map(|i| truthy_field(i, "type").map(text).unwrap_or_else(|| text(i)))
                .collect::<Vec<_>>()
                .join(", ")
        } else if let Some(list) = record.get("requires").and_then(Value::as_array) {
            list.iter().map(text).collect::<Vec<_>>().join(", ")
        } else {
            "—".to_string()
        };

        let notes = truthy_field(record, "notes").map(text).unwrap_or_default();

        Self {
            name,
            inspections,
            notes,
        }
    }
}

/// 许可证目录的展示形态, 加载时一次性判定
#[derive(Debug, Clone, PartialEq)]
pub enum PermitCatalogView {
    Unavailable { message: String },
    Rows(Vec<PermitRow>),
    Unrecognized(Value),
}

impl PermitCatalogView {
    /// 支持数组或以键索引的对象, 可选外层 `permits` 包装
    pub fn resolve(doc: &DataDoc) -> Self {
        let value = match doc {
            DataDoc::Ready(value) => value,
            DataDoc::Unavailable { message } => {
                return PermitCatalogView::Unavailable {
                    message: message.clone(),
                }
            }
        };

        let permits = truthy_field(value, "permits").unwrap_or(value);
        let records: Vec<&Value> = match permits {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => map.values().collect(),
            _ => Vec::new(),
        };

        if records.is_empty() {
            return PermitCatalogView::Unrecognized(value.clone());
        }

        PermitCatalogView::Rows(records.into_iter().map(PermitRow::from_value).collect())
    }
}
