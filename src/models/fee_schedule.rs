use crate::data::DataDoc;
use crate::models::json::{decimal, decimal_at, text, truthy, truthy_field};
use bigdecimal::{BigDecimal, Zero};
use serde_json::Value;

/// 费用表 (估算与展示共用的字段视图, 缺失字段为 None)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeSchedule {
    pub rate_per_1000: Option<BigDecimal>,
    pub plan_exam_alteration: Option<BigDecimal>,
    pub plan_exam_deck_pool: Option<BigDecimal>,
    pub erosion_control: Option<BigDecimal>,
    pub minimum_fee: Option<BigDecimal>,
    pub electrical_minimum: Option<BigDecimal>,
    pub plumbing_minimum: Option<BigDecimal>,
    pub hvac_minimum: Option<BigDecimal>,
    pub unit_fees: UnitFees,
    pub fee_mode: Option<String>,
}

/// 按件参考单价 (仅供参考, 不计入总额)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitFees {
    pub recessed_light: Option<BigDecimal>,
    pub gfc_outlet: Option<BigDecimal>,
    pub standard_outlet: Option<BigDecimal>,
    pub water_line: Option<BigDecimal>,
}

impl FeeSchedule {
    pub fn from_value(doc: &Value) -> Self {
        Self {
            rate_per_1000: decimal_at(doc, "/building/res_add_alt_deck_pool/rate_per_1000"),
            plan_exam_alteration: decimal_at(doc, "/building/plan_exam/residential/alteration"),
            plan_exam_deck_pool: decimal_at(doc, "/building/plan_exam/residential/deck_pool"),
            erosion_control: decimal_at(
                doc,
                "/building/erosion_control/res_additions_alterations",
            ),
            minimum_fee: decimal_at(doc, "/minimum_fee"),
            electrical_minimum: decimal_at(doc, "/electrical/portal_minimum"),
            plumbing_minimum: decimal_at(doc, "/plumbing/portal_minimum"),
            hvac_minimum: decimal_at(doc, "/hvac/distribution_minimum"),
            unit_fees: UnitFees {
                recessed_light: decimal_at(
                    doc,
                    "/electrical/reference_unit_fees/recessed_light",
                ),
                gfc_outlet: decimal_at(doc, "/electrical/reference_unit_fees/gfc_outlet"),
                standard_outlet: decimal_at(
                    doc,
                    "/electrical/reference_unit_fees/standard_outlet",
                ),
                water_line: decimal_at(doc, "/plumbing/reference_unit_fees/water_line"),
            },
            fee_mode: truthy_field(doc, "fee_mode").map(text),
        }
    }

    /// 是否为 "费率表" 形态 (存在非零的每千元费率)
    pub fn has_rate_schedule(&self) -> bool {
        self.rate_per_1000.as_ref().is_some_and(|r| !r.is_zero())
    }
}

/// 估值分档
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationTier {
    pub min: BigDecimal,
    pub max: BigDecimal,
    pub base_fee: BigDecimal,
    pub per_thousand: BigDecimal,
}

impl ValuationTier {
    fn from_value(tier: &Value) -> Option<Self> {
        Some(Self {
            min: decimal(tier.get("min")?)?,
            max: decimal(tier.get("max")?)?,
            base_fee: decimal(tier.get("base_fee")?)?,
            per_thousand: decimal(tier.get("per_thousand")?)?,
        })
    }
}

/// 费用表的展示形态, 加载时一次性判定
///
/// 判定顺序: 费率表 > 估值分档 > 原始数据回退。
#[derive(Debug, Clone, PartialEq)]
pub enum FeeScheduleView {
    Unavailable { message: String },
    RateSchedule(FeeSchedule),
    Tiered(Vec<ValuationTier>),
    Unrecognized(Value),
}

impl FeeScheduleView {
    pub fn resolve(doc: &DataDoc) -> Self {
        let value = match doc {
            DataDoc::Ready(value) => value,
            DataDoc::Unavailable { message } => {
                return FeeScheduleView::Unavailable {
                    message: message.clone(),
                }
            }
        };

        let schedule = FeeSchedule::from_value(value);
        if schedule.has_rate_schedule() {
            return FeeScheduleView::RateSchedule(schedule);
        }

        if let Some(tiers) = value.get("valuation_schedule").and_then(Value::as_array) {
            let parsed: Option<Vec<ValuationTier>> =
                tiers.iter().map(ValuationTier::from_value).collect();
            if let Some(parsed) = parsed {
                return FeeScheduleView::Tiered(parsed);
            }
            tracing::warn!("valuation_schedule has malformed tiers, showing raw data");
        }

        FeeScheduleView::Unrecognized(value.clone())
    }
}

/// 估算路径: 仅在文档可用且为对象/数组时才视为已加载
pub fn schedule_for_estimate(value: Option<&Value>) -> Option<FeeSchedule> {
    value.filter(|v| truthy(v)).map(FeeSchedule::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn rev2() -> Value {
        json!({
            "fee_mode": "village_strict",
            "minimum_fee": 60,
            "building": {
                "res_add_alt_deck_pool": {"rate_per_1000": 13.5},
                "plan_exam": {"residential": {"alteration": 65, "deck_pool": 50}},
                "erosion_control": {"res_additions_alterations": 60}
            },
            "electrical": {
                "portal_minimum": 40,
                "reference_unit_fees": {"recessed_light": 2.5, "gfc_outlet": 3}
            },
            "plumbing": {"portal_minimum": 40, "reference_unit_fees": {"water_line": 8}},
            "hvac": {"distribution_minimum": 30}
        })
    }

    #[test]
    fn reads_every_documented_path() {
        let s = FeeSchedule::from_value(&rev2());
        assert_eq!(s.rate_per_1000, BigDecimal::from_str("13.5").ok());
        assert_eq!(s.plan_exam_alteration, Some(BigDecimal::from(65)));
        assert_eq!(s.plan_exam_deck_pool, Some(BigDecimal::from(50)));
        assert_eq!(s.erosion_control, Some(BigDecimal::from(60)));
        assert_eq!(s.hvac_minimum, Some(BigDecimal::from(30)));
        assert_eq!(s.unit_fees.gfc_outlet, Some(BigDecimal::from(3)));
        assert_eq!(s.unit_fees.standard_outlet, None);
        assert_eq!(s.unit_fees.water_line, Some(BigDecimal::from(8)));
        assert_eq!(s.fee_mode.as_deref(), Some("village_strict"));
    }

    #[test]
    fn rate_schedule_wins_over_tiers() {
        let mut doc = rev2();
        doc["valuation_schedule"] = json!([{"min": 0, "max": 1000, "base_fee": 50, "per_thousand": 10}]);
        let view = FeeScheduleView::resolve(&DataDoc::Ready(doc));
        assert!(matches!(view, FeeScheduleView::RateSchedule(_)));
    }

    #[test]
    fn tiers_without_rate_key_render_tiered() {
        let doc = json!({
            "valuation_schedule": [
                {"min": 0, "max": 5000, "base_fee": 60, "per_thousand": 0},
                {"min": 5001, "max": 50000, "base_fee": 60, "per_thousand": 12.5}
            ]
        });
        match FeeScheduleView::resolve(&DataDoc::Ready(doc)) {
            FeeScheduleView::Tiered(tiers) => {
                assert_eq!(tiers.len(), 2);
                assert_eq!(tiers[1].per_thousand, BigDecimal::from_str("12.5").unwrap());
            }
            other => panic!("expected tiered view, got {:?}", other),
        }
    }

    #[test]
    fn zero_rate_is_not_a_rate_schedule() {
        let doc = json!({"building": {"res_add_alt_deck_pool": {"rate_per_1000": 0}}});
        let view = FeeScheduleView::resolve(&DataDoc::Ready(doc.clone()));
        assert_eq!(view, FeeScheduleView::Unrecognized(doc));
    }

    #[test]
    fn malformed_tier_falls_back_to_raw() {
        let doc = json!({"valuation_schedule": [{"min": 0}]});
        let view = FeeScheduleView::resolve(&DataDoc::Ready(doc.clone()));
        assert_eq!(view, FeeScheduleView::Unrecognized(doc));
    }

    #[test]
    fn unavailable_document_keeps_message() {
        let view = FeeScheduleView::resolve(&DataDoc::Unavailable {
            message: "Missing or unreadable: fees.json".into(),
        });
        assert_eq!(
            view,
            FeeScheduleView::Unavailable {
                message: "Missing or unreadable: fees.json".into()
            }
        );
    }

    #[test]
    fn estimate_schedule_requires_a_loaded_document() {
        assert!(schedule_for_estimate(None).is_none());
        assert!(schedule_for_estimate(Some(&json!(null))).is_none());
        assert!(schedule_for_estimate(Some(&json!({}))).is_some());
    }
}
