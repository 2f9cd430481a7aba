use crate::core::settings::Settings;
use crate::domain::model::{LineItem, Quote, Tier, Unit};

/// 面積顯示時除以的固定倍數
pub const DISPLAY_AREA_SCALE: f64 = 1000.0;

const METRIC_RATE: f64 = 0.00107639;
const IMPERIAL_RATE: f64 = 0.00694444;
const STANDARD_MULTIPLIER: f64 = 39.0;
const LIGHT_MULTIPLIER: f64 = 18.0;

/// 每單位面積的基本費率
pub fn rate_per_area(unit: Unit) -> f64 {
    match unit {
        Unit::Metric => METRIC_RATE,
        Unit::Imperial => IMPERIAL_RATE,
    }
}

pub fn tier_multiplier(tier: Tier) -> f64 {
    match tier {
        Tier::Standard => STANDARD_MULTIPLIER,
        Tier::Light => LIGHT_MULTIPLIER,
    }
}

/// 寬 × 高 × 數量，單位為該量測單位的平方
pub fn compute_area(item: &LineItem) -> f64 {
    item.width() * item.height() * f64::from(item.count())
}

pub fn display_area(area: f64) -> f64 {
    area / DISPLAY_AREA_SCALE
}

/// 單列價格，每列各自四捨五入
pub fn compute_price(item: &LineItem, unit: Unit, tier: Tier) -> u64 {
    price_for_area(compute_area(item), unit, tier)
}

pub fn price_for_area(area: f64, unit: Unit, tier: Tier) -> u64 {
    // 乘法順序固定為 area * rate * multiplier
    let raw = area * rate_per_area(unit) * tier_multiplier(tier);
    raw.round().max(0.0) as u64
}

/// 總價 = 各列已四捨五入價格的和，不對總和再做四捨五入
pub fn compute_total<'a, I>(items: I, settings: &Settings) -> u64
where
    I: IntoIterator<Item = &'a LineItem>,
{
    items
        .into_iter()
        .map(|item| compute_price(item, settings.unit, settings.tier))
        .sum()
}

pub fn quote(item: &LineItem, settings: &Settings) -> Quote {
    let area = compute_area(item);
    Quote {
        id: item.id(),
        width: item.width(),
        height: item.height(),
        count: item.count(),
        area,
        display_area: display_area(area),
        price: price_for_area(area, settings.unit, settings.tier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ItemId;

    fn item(width: f64, height: f64, count: u32) -> LineItem {
        LineItem::new(ItemId(1), width, height, count)
    }

    #[test]
    fn test_metric_standard_price() {
        let item = item(100.0, 100.0, 1);
        assert_eq!(compute_area(&item), 10000.0);
        assert_eq!(display_area(compute_area(&item)), 10.0);
        assert_eq!(compute_price(&item, Unit::Metric, Tier::Standard), 420);
    }

    #[test]
    fn test_metric_light_price() {
        let item = item(100.0, 100.0, 1);
        assert_eq!(compute_price(&item, Unit::Metric, Tier::Light), 194);
    }

    #[test]
    fn test_imperial_prices() {
        let item = item(48.0, 48.0, 2);
        assert_eq!(compute_area(&item), 4608.0);
        assert_eq!(compute_price(&item, Unit::Imperial, Tier::Standard), 1248);
        // 4608 * 0.00694444 * 18 = 575.99...
        assert_eq!(compute_price(&item, Unit::Imperial, Tier::Light), 576);
    }

    #[test]
    fn test_total_sums_rounded_prices() {
        // 60 * 60 * 1 = 3600 -> 3600 * 0.00107639 * 18 = 69.75 -> 70
        let items = vec![item(60.0, 60.0, 1), item(60.0, 60.0, 1), item(60.0, 60.0, 1)];
        let settings = Settings::new(Unit::Metric, Tier::Light);

        let total = compute_total(&items, &settings);
        assert_eq!(total, 210);

        // 直接對總面積計價會得到 209
        let unrounded: f64 = items
            .iter()
            .map(|i| compute_area(i) * rate_per_area(Unit::Metric) * tier_multiplier(Tier::Light))
            .sum();
        assert_eq!(unrounded.round() as u64, 209);
    }

    #[test]
    fn test_total_of_empty_collection_is_zero() {
        let items: Vec<LineItem> = Vec::new();
        assert_eq!(compute_total(&items, &Settings::default()), 0);
    }

    #[test]
    fn test_quote_matches_pure_functions() {
        let item = item(120.0, 180.0, 3);
        let settings = Settings::new(Unit::Metric, Tier::Standard);
        let quote = quote(&item, &settings);

        assert_eq!(quote.area, compute_area(&item));
        assert_eq!(quote.display_area, 64.8);
        assert_eq!(quote.price, compute_price(&item, Unit::Metric, Tier::Standard));
    }
}
