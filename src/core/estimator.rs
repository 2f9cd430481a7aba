use crate::core::pricing;
use crate::core::settings::{Settings, SettingsChange, SettingsController};
use crate::core::store::LineItemStore;
use crate::domain::model::{Field, FieldUpdate, ItemId, LineItem, Quote, SeedItem, Tier, Unit};
use crate::domain::profile::UnitProfile;

/// 估價引擎：擁有項目清單與設定，所有操作結束時衍生值都是最新的
///
/// 面積與價格不另外儲存，每次讀取都由目前的寬、高、數量與設定重新計算。
#[derive(Debug, Default)]
pub struct Estimator {
    settings: Settings,
    store: LineItemStore,
}

impl Estimator {
    pub fn new(settings: Settings) -> Self {
        tracing::debug!(
            "Estimator created (unit: {}, tier: {})",
            settings.unit,
            settings.tier
        );
        Self {
            settings,
            store: LineItemStore::new(),
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn profile(&self) -> &'static UnitProfile {
        self.settings.profile()
    }

    pub fn add_item(&mut self) -> Quote {
        let item = self.store.add_item(self.settings.profile());
        pricing::quote(item, &self.settings)
    }

    /// 預載項目，數值仍經過與互動編輯相同的夾限
    pub fn add_seed(&mut self, seed: &SeedItem) -> ItemId {
        let profile = self.settings.profile();
        let id = self.store.add_item(profile).id();
        let updates = [
            (Field::Width, seed.width),
            (Field::Height, seed.height),
            (Field::Count, f64::from(seed.count)),
        ];
        for (field, value) in updates {
            let result = self.store.update_value(id, field, value, profile);
            if !result.is_accepted() {
                tracing::warn!(
                    "⚠️ Seed item #{} {} = {} rejected ({:?}), keeping {}",
                    id,
                    field,
                    value,
                    result,
                    self.store.get(id).map(|item| item.get(field)).unwrap_or_default()
                );
            } else if let FieldUpdate::Clamped { requested, stored } = result {
                tracing::debug!("Seed item #{} {} clamped {} -> {}", id, field, requested, stored);
            }
        }
        id
    }

    pub fn remove_item(&mut self, id: ItemId) -> bool {
        self.store.remove_item(id)
    }

    pub fn update_field(&mut self, id: ItemId, field: Field, raw_value: &str) -> FieldUpdate {
        self.store
            .update_field(id, field, raw_value, self.settings.profile())
    }

    pub fn set_unit(&mut self, unit: Unit) -> SettingsChange {
        SettingsController::new(&mut self.settings, &mut self.store).set_unit(unit)
    }

    pub fn set_tier(&mut self, tier: Tier) -> SettingsChange {
        SettingsController::new(&mut self.settings, &mut self.store).set_tier(tier)
    }

    pub fn item(&self, id: ItemId) -> Option<&LineItem> {
        self.store.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn quote(&self, id: ItemId) -> Option<Quote> {
        self.store
            .get(id)
            .map(|item| pricing::quote(item, &self.settings))
    }

    pub fn quotes(&self) -> Vec<Quote> {
        self.store
            .iter()
            .map(|item| pricing::quote(item, &self.settings))
            .collect()
    }

    pub fn final_total(&self) -> u64 {
        pricing::compute_total(&self.store, &self.settings)
    }

    /// 沒有任何項目時不顯示總價
    pub fn visible_total(&self) -> Option<u64> {
        if self.store.is_empty() {
            None
        } else {
            Some(self.final_total())
        }
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }
}
