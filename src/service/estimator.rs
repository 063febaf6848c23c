use crate::models::{EstimateSummary, FeeLine, FeeSchedule, ProjectInput};
use crate::service::trades::{needed_trades, Trade};
use bigdecimal::{BigDecimal, Zero};

/// 未配置时使用的默认值
pub mod defaults {
    /// 每千元费率 13.5, 以 (尾数, 小数位数) 表示
    pub const RATE_PER_1000: (i64, i64) = (135, 1);
    pub const PLAN_EXAM_ALTERATION: i32 = 65;
    pub const EROSION_CONTROL: i32 = 60;
    pub const MINIMUM_FEE: i32 = 60;
    pub const TRADE_MINIMUM: i32 = 40;
    /// 暖通最低收费的下限, 配置值低于它时不生效
    pub const HVAC_FLOOR: i32 = 60;
}

pub const BUILDING_FINAL: &str = "Final Building Inspection";

/// 费用估算 (纯函数, 不持有状态)
///
/// `schedule` 为 `None` 表示费用表未能加载: 此时不产生任何费用行,
/// 但检查项仍按工种推断与建筑终验规则生成。
pub fn estimate(input: &ProjectInput, schedule: Option<&FeeSchedule>) -> EstimateSummary {
    let trades = needed_trades(&input.trades, &input.description);

    let lines = schedule
        .map(|s| fee_lines(input, s, &trades))
        .unwrap_or_default();
    let total = sum(&lines);

    let reference = schedule
        .map(|s| reference_lines(input, s))
        .unwrap_or_default();
    let reference_total = sum(&reference);

    let inspections = inspections(input, &trades);

    tracing::debug!(
        "estimate: {} fee lines, total {}, {} inspections",
        lines.len(),
        total,
        inspections.len()
    );

    EstimateSummary {
        address: input.address.clone(),
        valuation: input.valuation.clone(),
        description: input.description.clone(),
        lines,
        total,
        reference,
        reference_total,
        inspections,
    }
}

/// 建筑费: 估值 / 1000 × 费率, 非零且低于最低收费时取最低收费
pub fn building_fee(valuation: &BigDecimal, rate: &BigDecimal, minimum: &BigDecimal) -> BigDecimal {
    if *valuation <= BigDecimal::zero() {
        return BigDecimal::zero();
    }
    let fee = valuation.clone() / BigDecimal::from(1000) * rate.clone();
    if !fee.is_zero() && fee < *minimum {
        minimum.clone()
    } else {
        fee
    }
}

fn fee_lines(input: &ProjectInput, schedule: &FeeSchedule, trades: &[Trade]) -> Vec<FeeLine> {
    let rate = schedule.rate_per_1000.clone().unwrap_or_else(default_rate);
    let plan_exam = or_default(&schedule.plan_exam_alteration, defaults::PLAN_EXAM_ALTERATION);
    let erosion = or_default(&schedule.erosion_control, defaults::EROSION_CONTROL);
    let minimum = or_default(&schedule.minimum_fee, defaults::MINIMUM_FEE);

    let mut lines = Vec::with_capacity(3 + trades.len());

    if input.valuation > BigDecimal::zero() {
        let fee = building_fee(&input.valuation, &rate, &minimum);
        lines.push(
            FeeLine::new("Building (res. alteration)", fee)
                .with_meta(format!("{}/$1,000", crate::render::format::plain(&rate))),
        );
    }
    lines.push(FeeLine::new("Plan exam (alteration)", plan_exam));
    lines.push(FeeLine::new("Erosion control (res. add/alt)", erosion));

    for &trade in trades {
        lines.push(FeeLine::new(trade.fee_label(), trade_minimum(schedule, trade)));
    }

    lines
}

/// 工种最低收费; 暖通不低于 60
pub fn trade_minimum(schedule: &FeeSchedule, trade: Trade) -> BigDecimal {
    match trade {
        Trade::Electrical => or_default(&schedule.electrical_minimum, defaults::TRADE_MINIMUM),
        Trade::Plumbing => or_default(&schedule.plumbing_minimum, defaults::TRADE_MINIMUM),
        Trade::Hvac => {
            let floor = BigDecimal::from(defaults::HVAC_FLOOR);
            let configured = or_default(&schedule.hvac_minimum, defaults::HVAC_FLOOR);
            configured.max(floor)
        }
    }
}

fn reference_lines(input: &ProjectInput, schedule: &FeeSchedule) -> Vec<FeeLine> {
    let fixtures = &input.fixtures;
    let units = &schedule.unit_fees;
    let candidates = [
        ("Recessed lights", fixtures.recessed_lights, &units.recessed_light),
        ("GFCI outlets", fixtures.gfci_outlets, &units.gfc_outlet),
        ("Std outlets", fixtures.standard_outlets, &units.standard_outlet),
        ("Water lines", fixtures.water_lines, &units.water_line),
    ];

    candidates
        .into_iter()
        .filter_map(|(label, count, rate)| {
            let rate = rate.as_ref().filter(|r| !r.is_zero())?;
            if count == 0 {
                return None;
            }
            Some(FeeLine::new(
                format!("{} ×{}", label, count),
                BigDecimal::from(count) * rate.clone(),
            ))
        })
        .collect()
}

fn inspections(input: &ProjectInput, trades: &[Trade]) -> Vec<String> {
    let mut list: Vec<String> = trades
        .iter()
        .flat_map(|t| t.inspections())
        .map(str::to_string)
        .collect();

    if input.valuation > BigDecimal::zero() || !input.description.is_empty() {
        list.push(BUILDING_FINAL.to_string());
    }
    list
}

fn sum(lines: &[FeeLine]) -> BigDecimal {
    lines
        .iter()
        .fold(BigDecimal::zero(), |acc, line| acc + line.amount.clone())
}

fn or_default(value: &Option<BigDecimal>, default: i32) -> BigDecimal {
    value.clone().unwrap_or_else(|| BigDecimal::from(default))
}

fn default_rate() -> BigDecimal {
    let (mantissa, scale) = defaults::RATE_PER_1000;
    BigDecimal::new(mantissa.into(), scale)
}
