use bigdecimal::{BigDecimal, Signed};

/// 金额显示: 四舍五入到分, 千分位, 去掉小数末尾的 0 (`$1,234.5`)
pub fn money(amount: &BigDecimal) -> String {
    format!("${}", grouped(amount, 2))
}

/// 带千分位的数字, 最多保留 `max_fraction` 位小数
pub fn grouped(value: &BigDecimal, max_fraction: i64) -> String {
    let (sign, int_part, frac_part) = split(value, max_fraction);

    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + frac_part.len() + 2);
    out.push_str(sign);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

/// 不带千分位的最简数字表示 (`13.5`, `65`)
pub fn plain(value: &BigDecimal) -> String {
    let (sign, int_part, frac_part) = split(value, 6);
    if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

fn split(value: &BigDecimal, max_fraction: i64) -> (&'static str, String, String) {
    let rounded = round_half_up(&value.abs(), max_fraction);
    let text = rounded.with_scale(max_fraction).to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0').to_string();
    let int_part = int_part.to_string();

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value.is_negative() && !is_zero { "-" } else { "" };
    (sign, int_part, frac_part)
}

/// 非负数的四舍五入 (`with_scale` 本身只截断)
fn round_half_up(value: &BigDecimal, digits: i64) -> BigDecimal {
    let half = BigDecimal::from(5) / pow10(digits + 1);
    (value.clone() + half).with_scale(digits)
}

fn pow10(exp: i64) -> BigDecimal {
    (0..exp).fold(BigDecimal::from(1), |acc, _| acc * BigDecimal::from(10))
}

/// HTML 转义 (`& < > " '`)
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
