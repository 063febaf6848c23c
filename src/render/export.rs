use crate::models::EstimateSummary;
use crate::render::format::plain;

/// 把最近一次估算导出为 CSV, 便于粘贴到审批门户
///
/// 列: section, label, amount, note
pub fn summary_csv(s: &EstimateSummary) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["section", "label", "amount", "note"])?;

    for line in &s.lines {
        wtr.write_record([
            "fee",
            line.label.as_str(),
            plain(&line.amount).as_str(),
            line.meta.as_deref().unwrap_or(""),
        ])?;
    }
    wtr.write_record(["total", "Total (estimated)", plain(&s.total).as_str(), ""])?;

    for line in &s.reference {
        wtr.write_record(["reference", line.label.as_str(), plain(&line.amount).as_str(), ""])?;
    }
    if !s.reference.is_empty() {
        wtr.write_record(["reference_total", "Reference subtotal", plain(&s.reference_total).as_str(), ""])?;
    }

    for inspection in s.unique_inspections() {
        wtr.write_record(["inspection", inspection, "", ""])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
