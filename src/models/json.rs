//! 松散 JSON 配置的读取辅助函数

use bigdecimal::BigDecimal;
use serde_json::Value;
use std::str::FromStr;

/// 按 JSON Pointer 读取十进制数 (数字或可解析的数字字符串)
pub fn decimal_at(value: &Value, pointer: &str) -> Option<BigDecimal> {
    value.pointer(pointer).and_then(decimal)
}

pub fn decimal(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::Number(n) => BigDecimal::from_str(&n.to_string()).ok(),
        Value::String(s) => BigDecimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// 与浏览器端一致的真值判断: null/false/0/"" 为假
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 字符串原样返回, 其它值输出紧凑 JSON
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 读取字段, 仅当其为真值时返回
pub fn truthy_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| truthy(v))
}
