use crate::core::store::LineItemStore;
use crate::domain::model::{Tier, Unit};
use crate::domain::profile::{profile_for, UnitProfile};

/// 整個 session 共用的設定，由呼叫端明確傳入需要它的元件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub unit: Unit,
    pub tier: Tier,
}

impl Settings {
    pub fn new(unit: Unit, tier: Tier) -> Self {
        Self { unit, tier }
    }

    pub fn profile(&self) -> &'static UnitProfile {
        profile_for(self.unit)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Unit::Metric, Tier::Standard)
    }
}

/// 設定變更的結果，呈現層依此決定要重畫哪些東西
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    Unchanged,
    UnitChanged {
        from: Unit,
        to: Unit,
        rescaled: usize,
    },
    TierChanged {
        from: Tier,
        to: Tier,
    },
}

impl SettingsChange {
    pub fn is_changed(&self) -> bool {
        !matches!(self, SettingsChange::Unchanged)
    }
}

/// 唯一可以修改 `Settings` 的地方；切換單位時連帶重新夾限所有項目
pub struct SettingsController<'a> {
    settings: &'a mut Settings,
    store: &'a mut LineItemStore,
}

impl<'a> SettingsController<'a> {
    pub fn new(settings: &'a mut Settings, store: &'a mut LineItemStore) -> Self {
        Self { settings, store }
    }

    pub fn set_unit(&mut self, unit: Unit) -> SettingsChange {
        let from = self.settings.unit;
        if from == unit {
            return SettingsChange::Unchanged;
        }

        self.settings.unit = unit;
        let rescaled = self.store.rescale_all(profile_for(unit));
        tracing::info!(
            "🔧 Unit changed {} -> {} ({} item(s) rescaled)",
            from,
            unit,
            rescaled
        );

        SettingsChange::UnitChanged {
            from,
            to: unit,
            rescaled,
        }
    }

    pub fn set_tier(&mut self, tier: Tier) -> SettingsChange {
        let from = self.settings.tier;
        if from == tier {
            return SettingsChange::Unchanged;
        }

        self.settings.tier = tier;
        tracing::info!("🔧 Tier changed {} -> {}", from, tier);

        SettingsChange::TierChanged { from, to: tier }
    }
}
