use crate::domain::model::Unit;

pub const COUNT_MIN: u32 = 1;
pub const COUNT_MAX: u32 = 9999;

/// 單一量測單位下寬高的允許範圍
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitProfile {
    pub unit: Unit,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

pub const METRIC_PROFILE: UnitProfile = UnitProfile {
    unit: Unit::Metric,
    min_width: 60.0,
    max_width: 250.0,
    min_height: 60.0,
    max_height: 400.0,
};

pub const IMPERIAL_PROFILE: UnitProfile = UnitProfile {
    unit: Unit::Imperial,
    min_width: 24.0,
    max_width: 96.0,
    min_height: 24.0,
    max_height: 156.0,
};

pub fn profile_for(unit: Unit) -> &'static UnitProfile {
    match unit {
        Unit::Metric => &METRIC_PROFILE,
        Unit::Imperial => &IMPERIAL_PROFILE,
    }
}

impl UnitProfile {
    /// 呼叫端需先排除 NaN
    pub fn clamp_width(&self, value: f64) -> f64 {
        clamp_into(value, self.min_width, self.max_width)
    }

    pub fn clamp_height(&self, value: f64) -> f64 {
        clamp_into(value, self.min_height, self.max_height)
    }

    pub fn contains(&self, width: f64, height: f64) -> bool {
        (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height)
    }

    /// 舊版表單上的 "min/max" 標籤
    pub fn width_label(&self) -> String {
        format!("{}/{}", self.min_width, self.max_width)
    }

    pub fn height_label(&self) -> String {
        format!("{}/{}", self.min_height, self.max_height)
    }
}

pub fn clamp_count(value: f64) -> u32 {
    // 小數數量先四捨五入再夾回範圍
    clamp_into(value.round(), f64::from(COUNT_MIN), f64::from(COUNT_MAX)) as u32
}

fn clamp_into(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}
