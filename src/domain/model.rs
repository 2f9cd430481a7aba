use crate::utils::error::EstimatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 量測單位，決定寬高範圍與每單位面積的價格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "m", alias = "metric")]
    Metric,
    #[serde(rename = "ft", alias = "imperial")]
    Imperial,
}

impl Unit {
    /// 畫面上使用的短標籤 (沿用舊表單的 m / ft)
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Metric => "m",
            Unit::Imperial => "ft",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "cm" | "metric" => Ok(Unit::Metric),
            "ft" | "in" | "imperial" => Ok(Unit::Imperial),
            _ => Err(EstimatorError::unknown_token("unit", s)),
        }
    }
}

/// 產品等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    #[serde(alias = "standart", alias = "premium")]
    Standard,
    Light,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Standard => "standard",
            Tier::Light => "light",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // "standart" 是舊版頁面 select 的值
            "standard" | "standart" | "premium" => Ok(Tier::Standard),
            "light" => Ok(Tier::Light),
            _ => Err(EstimatorError::unknown_token("tier", s)),
        }
    }
}

/// 可編輯的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    Count,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Count => "count",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "width" | "w" => Ok(Field::Width),
            "height" | "h" => Ok(Field::Height),
            "count" | "c" | "qty" => Ok(Field::Count),
            _ => Err(EstimatorError::unknown_token("field", s)),
        }
    }
}

/// 項目識別碼，只在同一個 store 內唯一，刪除後不會重複使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// 一列窗簾訂單。只能經由 `LineItemStore` 修改，面積與價格不儲存
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    id: ItemId,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) count: u32,
}

impl LineItem {
    pub(crate) fn new(id: ItemId, width: f64, height: f64, count: u32) -> Self {
        Self {
            id,
            width,
            height,
            count,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Width => self.width,
            Field::Height => self.height,
            Field::Count => f64::from(self.count),
        }
    }
}

/// 某一列在目前設定下的計算結果，給畫面與匯出使用
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub id: ItemId,
    pub width: f64,
    pub height: f64,
    pub count: u32,
    pub area: f64,
    pub display_area: f64,
    pub price: u64,
}

/// 欄位編輯的結果。超出範圍不是錯誤，而是被夾回範圍內
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldUpdate {
    Applied(f64),
    Clamped { requested: f64, stored: f64 },
    /// 非數字輸入，欄位保持原值
    NotANumber,
    UnknownItem,
}

impl FieldUpdate {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FieldUpdate::Applied(_) | FieldUpdate::Clamped { .. })
    }

    pub fn stored_value(&self) -> Option<f64> {
        match self {
            FieldUpdate::Applied(value) => Some(*value),
            FieldUpdate::Clamped { stored, .. } => Some(*stored),
            FieldUpdate::NotANumber | FieldUpdate::UnknownItem => None,
        }
    }
}

/// 從配置檔預先載入的項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_seed_count")]
    pub count: u32,
}

fn default_seed_count() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tokens() {
        assert_eq!("m".parse::<Unit>().unwrap(), Unit::Metric);
        assert_eq!(" FT ".parse::<Unit>().unwrap(), Unit::Imperial);
        assert_eq!("imperial".parse::<Unit>().unwrap(), Unit::Imperial);
        assert!("yard".parse::<Unit>().is_err());
        assert_eq!(Unit::Imperial.to_string(), "ft");
    }

    #[test]
    fn test_tier_tokens() {
        assert_eq!("standart".parse::<Tier>().unwrap(), Tier::Standard);
        assert_eq!("Light".parse::<Tier>().unwrap(), Tier::Light);
        assert!("gold".parse::<Tier>().is_err());
        assert_eq!(Tier::default(), Tier::Standard);
    }

    #[test]
    fn test_field_tokens() {
        assert_eq!("w".parse::<Field>().unwrap(), Field::Width);
        assert_eq!("HEIGHT".parse::<Field>().unwrap(), Field::Height);
        assert_eq!("qty".parse::<Field>().unwrap(), Field::Count);
        assert!("depth".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_update_outcomes() {
        assert!(FieldUpdate::Applied(100.0).is_accepted());
        let clamped = FieldUpdate::Clamped {
            requested: 500.0,
            stored: 250.0,
        };
        assert!(clamped.is_accepted());
        assert_eq!(clamped.stored_value(), Some(250.0));
        assert!(!FieldUpdate::NotANumber.is_accepted());
        assert_eq!(FieldUpdate::UnknownItem.stored_value(), None);
    }

    #[test]
    fn test_unit_serializes_as_label() {
        let json = serde_json::to_string(&Unit::Metric).unwrap();
        assert_eq!(json, "\"m\"");
        let unit: Unit = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(unit, Unit::Imperial);
    }
}
