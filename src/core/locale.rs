use crate::domain::model::Unit;

/// 只有 "en" 與 "en-us" 使用英制，其他語系一律公制
pub fn detect_preferred_unit(locale: &str) -> Unit {
    match locale.trim().to_lowercase().as_str() {
        "en" | "en-us" => Unit::Imperial,
        _ => Unit::Metric,
    }
}

/// 把 POSIX 形式的語系 (例如 `en_US.UTF-8`) 轉成 `en-us`
pub fn normalize_locale(raw: &str) -> String {
    let tag = raw.trim();
    let tag = tag.split(['.', '@']).next().unwrap_or(tag);
    tag.replace('_', "-").to_lowercase()
}
