use crate::models::EstimateSummary;
use crate::render::estimate::{reference_rows, valuation_suffix};
use crate::render::format::{escape_html, money};
use chrono::{DateTime, Local};
use std::fmt::Write;

const PRINT_STYLE: &str = "body{font:14px/1.45 -apple-system,Segoe UI,Inter,Roboto,sans-serif;margin:24px;color:#111}\
h1{font-size:20px;margin:0 0 12px}\
table{width:100%;border-collapse:collapse;margin:8px 0}\
th,td{padding:8px;border-bottom:1px solid #e5e7eb;text-align:left}\
th:last-child,td:last-child{text-align:right}\
.sub{color:#555}";

/// 生成可打印的独立 HTML 文档
///
/// 尚未做过估算时返回 `None`, 调用方不应打开任何文档。
pub fn printable(summary: Option<&EstimateSummary>, generated_at: DateTime<Local>) -> Option<String> {
    let s = summary?;

    let mut fees = String::new();
    for line in &s.lines {
        let meta = line
            .meta
            .as_deref()
            .map(|m| format!(" ({})", escape_html(m)))
            .unwrap_or_default();
        let _ = write!(
            fees,
            "<tr><td>{}{}</td><td>{}</td></tr>",
            escape_html(&line.label),
            meta,
            money(&line.amount)
        );
    }

    let reference = if s.reference.is_empty() {
        String::new()
    } else {
        format!(
            "<h3>Reference per‑fixture</h3><table><tbody>{}\
             <tr><th>Reference subtotal</th><th>{}</th></tr></tbody></table>",
            reference_rows(&s.reference, "<td>"),
            money(&s.reference_total)
        )
    };

    let unique = s.unique_inspections();
    let inspections = if unique.is_empty() {
        String::new()
    } else {
        let items: String = unique
            .iter()
            .map(|i| format!("<li>{}</li>", escape_html(i)))
            .collect();
        format!("<h3>Inspections</h3><ul>{}</ul>", items)
    };

    let address = or_not_provided(&s.address);
    let project = or_not_provided(&s.description);

    Some(format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <title>PermitNow Summary</title><style>{style}</style></head><body>\
         <h1>PermitNow – Estimate Summary</h1>\
         <div class=\"sub\">Address: {address}<br>Project: {project}{valuation}</div>\
         <h3>Fees</h3>\
         <table><thead><tr><th>Line</th><th>Amount</th></tr></thead><tbody>{fees}\
         <tr><th>Total</th><th>{total}</th></tr></tbody></table>\
         {reference}{inspections}\
         <div class=\"sub\" style=\"margin-top:6px\">Generated by PermitNow · {generated}</div>\
         <script>window.print()</script>\
         </body></html>",
        style = PRINT_STYLE,
        address = address,
        project = project,
        valuation = valuation_suffix(s),
        fees = fees,
        total = money(&s.total),
        reference = reference,
        inspections = inspections,
        generated = generated_at.format("%-m/%-d/%Y, %-I:%M:%S %p"),
    ))
}

fn or_not_provided(s: &str) -> String {
    if s.is_empty() {
        "(not provided)".to_string()
    } else {
        escape_html(s)
    }
}
