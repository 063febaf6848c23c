use crate::models::TradeFlags;
use regex::Regex;
use std::sync::LazyLock;

/// 需要单独收费与检查的工种
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trade {
    Electrical,
    Plumbing,
    Hvac,
}

static ELECTRICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(light|outlet|circuit|electrical|recess)").expect("valid pattern")
});
static PLUMBING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(plumb|sink|toilet|water|drain|fixture)").expect("valid pattern")
});
static HVAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(hvac|furnace|ac|duct|mechanical|vent)").expect("valid pattern")
});

impl Trade {
    pub const ALL: [Trade; 3] = [Trade::Electrical, Trade::Plumbing, Trade::Hvac];

    fn keywords(self) -> &'static Regex {
        match self {
            Trade::Electrical => &*ELECTRICAL,
            Trade::Plumbing => &*PLUMBING,
            Trade::Hvac => &*HVAC,
        }
    }

    fn checked(self, flags: &TradeFlags) -> bool {
        match self {
            Trade::Electrical => flags.electrical,
            Trade::Plumbing => flags.plumbing,
            Trade::Hvac => flags.hvac,
        }
    }

    /// 勾选或描述命中关键词, 二者满足其一即可
    pub fn is_needed(self, flags: &TradeFlags, description: &str) -> bool {
        self.checked(flags) || self.keywords().is_match(description)
    }

    pub fn fee_label(self) -> &'static str {
        match self {
            Trade::Electrical => "Electrical trade (portal minimum)",
            Trade::Plumbing => "Plumbing trade (portal minimum)",
            Trade::Hvac => "HVAC/Mechanical (minimum)",
        }
    }

    /// 粗验与终验
    pub fn inspections(self) -> [&'static str; 2] {
        match self {
            Trade::Electrical => ["Rough Electrical", "Final Electrical"],
            Trade::Plumbing => ["Rough Plumbing", "Final Plumbing"],
            Trade::Hvac => ["Rough HVAC", "Mechanical Final"],
        }
    }
}

/// 按固定顺序 (电气、给排水、暖通) 返回需要的工种
pub fn needed_trades(flags: &TradeFlags, description: &str) -> Vec<Trade> {
    Trade::ALL
        .into_iter()
        .filter(|t| t.is_needed(flags, description))
        .collect()
}
