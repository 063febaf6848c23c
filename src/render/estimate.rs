use crate::models::{EstimateSummary, FeeLine};
use crate::render::format::{escape_html, money};
use bigdecimal::Zero;
use std::fmt::Write;

const NOT_PROVIDED: &str = "<em>(not provided)</em>";

/// 页面内的估算结果片段
pub fn render_summary(s: &EstimateSummary) -> String {
    let mut out = String::new();

    let address = non_empty(&s.address).unwrap_or_else(|| NOT_PROVIDED.to_string());
    let project = non_empty(&s.description).unwrap_or_else(|| NOT_PROVIDED.to_string());
    let _ = write!(out, "<div class=\"sub\">Address: {}</div>", address);
    let _ = write!(
        out,
        "<div class=\"sub\">Project: {}{}</div>",
        project,
        valuation_suffix(s)
    );

    out.push_str(
        "<table class=\"table\" style=\"margin-top:10px\"><thead><tr><th>Fee line</th>\
         <th style=\"text-align:right\">Amount</th></tr></thead><tbody>",
    );
    for line in &s.lines {
        let meta = line
            .meta
            .as_deref()
            .map(|m| format!(" <span class=\"sub\">({})</span>", escape_html(m)))
            .unwrap_or_default();
        let _ = write!(
            out,
            "<tr><td>{}{}</td><td style=\"text-align:right\">{}</td></tr>",
            escape_html(&line.label),
            meta,
            money(&line.amount)
        );
    }
    let _ = write!(
        out,
        "<tr><th>Total (estimated)</th><th style=\"text-align:right\">{}</th></tr></tbody></table>",
        money(&s.total)
    );

    if !s.reference.is_empty() {
        out.push_str(
            "<div class=\"sub\" style=\"margin-top:6px\"><strong>Reference per‑fixture</strong> \
             (portal uses minimums; this is informational):</div><table class=\"table\"><tbody>",
        );
        out.push_str(&reference_rows(&s.reference, "<td style=\"text-align:right\">"));
        let _ = write!(
            out,
            "<tr><th>Reference subtotal</th><th style=\"text-align:right\">{}</th></tr></tbody></table>",
            money(&s.reference_total)
        );
    }

    let unique = s.unique_inspections();
    if !unique.is_empty() {
        out.push_str("<div style=\"margin-top:8px\"><strong>Inspections Required</strong><ul>");
        for i in unique {
            let _ = write!(out, "<li>{}</li>", escape_html(i));
        }
        out.push_str("</ul></div>");
    }

    out.push_str(
        "<div class=\"sub\">Next: you can copy this summary into the Village portal. \
         A printable PDF is available below.</div>",
    );
    out
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| escape_html(s))
}

/// 估值非零时附加 ` · Valuation: $x`
pub(crate) fn valuation_suffix(s: &EstimateSummary) -> String {
    if s.valuation.is_zero() {
        String::new()
    } else {
        format!(" · Valuation: {}", money(&s.valuation))
    }
}

pub(crate) fn reference_rows(lines: &[FeeLine], amount_cell: &str) -> String {
    let mut rows = String::new();
    for r in lines {
        let _ = write!(
            rows,
            "<tr><td>{}</td>{}{}</td></tr>",
            escape_html(&r.label),
            amount_cell,
            money(&r.amount)
        );
    }
    rows
}
