//! 只读信息区块: 费用表、检查要求、承包商、联系方式

use crate::models::{FeeScheduleView, PermitCatalogView};
use crate::render::format::{escape_html, grouped, plain};
use serde_json::Value;
use std::fmt::Write;

pub const DEFAULT_FEE_MODE: &str = "village_strict";

const INSPECTION_REMINDER: &str = "Reminder: Rough inspections must be approved before covering \
walls/ceilings when electrical, plumbing, or HVAC are involved.";

/// 无法识别结构时的回退: 提示 + 转义后的格式化 JSON
pub fn raw_fallback(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    format!(
        "<div class=\"sub\">Structure not recognized; showing raw data.</div>\n\
         <pre class=\"json\">{}</pre>",
        escape_html(&pretty)
    )
}

fn unavailable(message: &str) -> String {
    format!("<div class=\"sub\">{}</div>", escape_html(message))
}

pub fn render_fees(view: &FeeScheduleView) -> String {
    match view {
        FeeScheduleView::Unavailable { message } => unavailable(message),
        FeeScheduleView::Unrecognized(value) => raw_fallback(value),
        FeeScheduleView::RateSchedule(schedule) => {
            let mut rows = String::new();
            if let Some(rate) = &schedule.rate_per_1000 {
                let _ = write!(
                    rows,
                    "<tr><th>Building (res. alteration)</th><td>${}/$1,000 of valuation</td></tr>",
                    plain(rate)
                );
            }
            let optional = [
                ("Plan Exam (alteration)", &schedule.plan_exam_alteration),
                ("Plan Exam (deck/pool)", &schedule.plan_exam_deck_pool),
                ("Erosion control (res. add/alt)", &schedule.erosion_control),
                ("Minimum fee", &schedule.minimum_fee),
            ];
            for (label, value) in optional {
                if let Some(value) = value {
                    let _ = write!(rows, "<tr><th>{}</th><td>${}</td></tr>", label, plain(value));
                }
            }
            let mode = schedule.fee_mode.as_deref().unwrap_or(DEFAULT_FEE_MODE);

            format!(
                "<div class=\"sub\">Village valuation schedule; residential alterations.</div>\n\
                 <table class=\"table\"><tbody>{}</tbody></table>\n\
                 <div class=\"sub\">Mode: <span class=\"badge\">{}</span></div>",
                rows,
                escape_html(mode)
            )
        }
        FeeScheduleView::Tiered(tiers) => {
            let mut rows = String::new();
            for tier in tiers {
                let _ = write!(
                    rows,
                    "<tr><td>${}–${}</td><td>${}</td><td>${}</td></tr>",
                    grouped(&tier.min, 3),
                    grouped(&tier.max, 3),
                    plain(&tier.base_fee),
                    plain(&tier.per_thousand)
                );
            }
            format!(
                "<div class=\"sub\">Valuation tiers:</div>\n\
                 <table class=\"table\">\
                 <thead><tr><th>Range</th><th>Base</th><th>Per $1,000</th></tr></thead>\
                 <tbody>{}</tbody></table>",
                rows
            )
        }
    }
}

pub fn render_inspections(view: &PermitCatalogView) -> String {
    match view {
        PermitCatalogView::Unavailable { message } => unavailable(message),
        PermitCatalogView::Unrecognized(value) => raw_fallback(value),
        PermitCatalogView::Rows(permits) => {
            let mut rows = String::new();
            for p in permits {
                let _ = write!(
                    rows,
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&p.name),
                    escape_html(&p.inspections),
                    escape_html(&p.notes)
                );
            }
            format!(
                "<table class=\"table\">\
                 <thead><tr><th>Permit</th><th>Inspections</th><th>Notes</th></tr></thead>\
                 <tbody>{}</tbody></table>\n\
                 <div class=\"sub\">{}</div>",
                rows, INSPECTION_REMINDER
            )
        }
    }
}

/// 承包商区块 (占位, 暂无数据文件)
pub fn render_contractors() -> String {
    "<div class=\"sub\">Add a <code>data/contractors.json</code> to list MIR (or others), \
     license #, phone, email.</div>\n\
     <table class=\"table\">\
     <thead><tr><th>Company</th><th>Contact</th><th>Phone</th><th>Email</th></tr></thead>\
     <tbody><tr><td>MIR Improvements</td><td>—</td><td>—</td><td>—</td></tr></tbody>\
     </table>"
        .to_string()
}

/// 联系方式区块 (固定的建筑检查员条目)
pub fn render_contacts() -> String {
    "<table class=\"table\"><tbody><tr>\
     <th>Building Inspections</th>\
     <td>Jim Micech — Building Inspector</td>\
     <td>262-375-5305</td>\
     <td><a href=\"tel:12623755305\">Call</a></td>\
     </tr></tbody></table>\n\
     <div class=\"sub\">We can replace this with a <code>data/contacts.json</code> later \
     if you prefer to manage it in a file.</div>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataDoc;
    use serde_json::json;

    fn fees(doc: Value) -> String {
        render_fees(&FeeScheduleView::resolve(&DataDoc::Ready(doc)))
    }

    #[test]
    fn rate_schedule_table_with_default_mode() {
        let html = fees(json!({
            "minimum_fee": 60,
            "building": {
                "res_add_alt_deck_pool": {"rate_per_1000": 13.5},
                "plan_exam": {"residential": {"alteration": 65}}
            }
        }));
        assert!(html.contains("$13.5/$1,000 of valuation"));
        assert!(html.contains("<tr><th>Plan Exam (alteration)</th><td>$65</td></tr>"));
        assert!(!html.contains("deck/pool"));
        assert!(!html.contains("Erosion control"));
        assert!(html.contains("<tr><th>Minimum fee</th><td>$60</td></tr>"));
        assert!(html.contains("<span class=\"badge\">village_strict</span>"));
    }

    #[test]
    fn configured_fee_mode_is_shown() {
        let html = fees(json!({
            "fee_mode": "portal_minimums",
            "building": {"res_add_alt_deck_pool": {"rate_per_1000": 12}}
        }));
        assert!(html.contains("<span class=\"badge\">portal_minimums</span>"));
    }

    #[test]
    fn tiered_table_rows() {
        let html = fees(json!({
            "valuation_schedule": [
                {"min": 0, "max": 5000, "base_fee": 60, "per_thousand": 0},
                {"min": 5001, "max": 250000, "base_fee": 60, "per_thousand": 12.5}
            ]
        }));
        assert!(html.contains("Valuation tiers:"));
        assert!(html.contains("<tr><td>$0–$5,000</td><td>$60</td><td>$0</td></tr>"));
        assert!(html.contains("<tr><td>$5,001–$250,000</td><td>$60</td><td>$12.5</td></tr>"));
        assert!(!html.contains("badge"));
    }

    #[test]
    fn unknown_shape_shows_escaped_raw_json() {
        let html = fees(json!({"note": "<script>"}));
        assert!(html.contains("Structure not recognized; showing raw data."));
        assert!(html.contains("&quot;note&quot;: &quot;&lt;script&gt;&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn unavailable_message_replaces_section() {
        let view = FeeScheduleView::Unavailable {
            message: "Missing or unreadable: data/fees.village.json".into(),
        };
        assert_eq!(
            render_fees(&view),
            "<div class=\"sub\">Missing or unreadable: data/fees.village.json</div>"
        );
    }

    #[test]
    fn inspections_table_always_ends_with_reminder() {
        let view = PermitCatalogView::resolve(&DataDoc::Ready(json!([
            {"type": "Electrical", "inspections": [{"type": "Rough"}, "Final"], "notes": "a & b"}
        ])));
        let html = render_inspections(&view);
        assert!(html.contains("<tr><td>Electrical</td><td>Rough, Final</td><td>a &amp; b</td></tr>"));
        assert!(html.ends_with(&format!("<div class=\"sub\">{}</div>", INSPECTION_REMINDER)));
    }

    #[test]
    fn empty_catalog_uses_raw_fallback() {
        let view = PermitCatalogView::resolve(&DataDoc::Ready(json!({"permits": []})));
        let html = render_inspections(&view);
        assert!(html.starts_with("<div class=\"sub\">Structure not recognized"));
        assert!(!html.contains("Reminder"));
    }

    #[test]
    fn placeholders_are_static() {
        assert!(render_contractors().contains("<td>MIR Improvements</td>"));
        assert!(render_contacts().contains("href=\"tel:12623755305\""));
    }
}
