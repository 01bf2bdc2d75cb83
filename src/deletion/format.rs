use super::models::{DeletionStats, KILO, SizeUnit};


const ZERO_SIZE: &str = "~0 B";


/// Freed bytes as `"~N UNIT"`, e.g. `"~1 KB"`.
pub fn freed_size_formatted(stats: DeletionStats) -> String {
    format_size(stats.total_size_bytes())
}


/// The unit is picked from the raw byte count first and the scaled value is
/// rounded afterwards, so 1048575 bytes reads `"~1024 KB"`, not `"~1 MB"`.
/// Ties round to even. Zero and negative counts read `"~0 B"`.
pub fn format_size(bytes: i64) -> String {
    if bytes <= 0 {
        return ZERO_SIZE.to_string();
    }

    let unit = unit_for(bytes);
    let scaled = bytes as f64 / unit.multiplier() as f64;
    format!("~{:.0} {}", scaled.round_ties_even(), unit)
}


/// floor(log1024(bytes)) capped at TB, done in integers.
fn unit_for(bytes: i64) -> SizeUnit {
    let mut index = 0;
    let mut threshold = KILO;
    while index < SizeUnit::LARGEST.index() && bytes >= threshold {
        index += 1;
        threshold = threshold.saturating_mul(KILO);
    }
    SizeUnit::from_index(index)
}
