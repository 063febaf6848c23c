use crate::error::ApiError;
use bigdecimal::{BigDecimal, Signed, Zero};
use indexmap::IndexSet;
use serde::Deserialize;
use std::str::FromStr;

/// 估算表单 (字段名与页面表单控件一致)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimateForm {
    #[serde(default)]
    pub addr: String,
    #[serde(default)]
    pub valuation: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "t-elec")]
    pub electrical: Option<String>,
    #[serde(rename = "t-plum")]
    pub plumbing: Option<String>,
    #[serde(rename = "t-hvac")]
    pub hvac: Option<String>,
    #[serde(rename = "f-recess", default)]
    pub recessed_lights: String,
    #[serde(rename = "f-gfci", default)]
    pub gfci_outlets: String,
    #[serde(rename = "f-outlet", default)]
    pub standard_outlets: String,
    #[serde(rename = "f-water", default)]
    pub water_lines: String,
}

/// 勾选的工种
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradeFlags {
    pub electrical: bool,
    pub plumbing: bool,
    pub hvac: bool,
}

/// 按件数量 (仅用于参考价)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureCounts {
    pub recessed_lights: u32,
    pub gfci_outlets: u32,
    pub standard_outlets: u32,
    pub water_lines: u32,
}

/// 用户输入的项目参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectInput {
    pub address: String,
    pub valuation: BigDecimal,
    pub description: String,
    pub trades: TradeFlags,
    pub fixtures: FixtureCounts,
}

impl TryFrom<EstimateForm> for ProjectInput {
    type Error = ApiError;

    fn try_from(form: EstimateForm) -> Result<Self, Self::Error> {
        let valuation = match form.valuation.trim() {
            "" => BigDecimal::zero(),
            raw => BigDecimal::from_str(raw)
                .map_err(|_| ApiError::InvalidRequest(format!("Invalid valuation: {}", raw)))?,
        };
        if valuation.is_negative() {
            return Err(ApiError::InvalidRequest(
                "Valuation cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            address: form.addr.trim().to_string(),
            valuation,
            description: form.desc.trim().to_string(),
            trades: TradeFlags {
                electrical: form.electrical.is_some(),
                plumbing: form.plumbing.is_some(),
                hvac: form.hvac.is_some(),
            },
            fixtures: FixtureCounts {
                recessed_lights: parse_count("f-recess", &form.recessed_lights)?,
                gfci_outlets: parse_count("f-gfci", &form.gfci_outlets)?,
                standard_outlets: parse_count("f-outlet", &form.standard_outlets)?,
                water_lines: parse_count("f-water", &form.water_lines)?,
            },
        })
    }
}

fn parse_count(field: &str, raw: &str) -> Result<u32, ApiError> {
    match raw.trim() {
        "" => Ok(0),
        raw => raw
            .parse()
            .map_err(|_| ApiError::InvalidRequest(format!("Invalid count for {}: {}", field, raw))),
    }
}

/// 费用明细行
#[derive(Debug, Clone, PartialEq)]
pub struct FeeLine {
    pub label: String,
    pub amount: BigDecimal,
    pub meta: Option<String>,
}

impl FeeLine {
    pub fn new(label: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            label: label.into(),
            amount,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

/// 一次估算的结果, 供页面展示、打印与导出使用
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateSummary {
    pub address: String,
    pub valuation: BigDecimal,
    pub description: String,
    pub lines: Vec<FeeLine>,
    pub total: BigDecimal,
    pub reference: Vec<FeeLine>,
    pub reference_total: BigDecimal,
    /// 原始检查项列表 (可能有重复)
    pub inspections: Vec<String>,
}

impl EstimateSummary {
    /// 去重后的检查项, 保留首次出现的顺序
    pub fn unique_inspections(&self) -> IndexSet<&str> {
        self.inspections.iter().map(String::as_str).collect()
    }
}
