use crate::domain::model::{Field, FieldUpdate, ItemId, LineItem};
use crate::domain::profile::{clamp_count, UnitProfile, COUNT_MIN};

/// 依插入順序保存所有項目，顯示順序即插入順序
#[derive(Debug, Default)]
pub struct LineItemStore {
    items: Vec<LineItem>,
    next_id: u64,
}

impl LineItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增一列，寬高預設為目前單位的最小值，數量為 1
    pub fn add_item(&mut self, profile: &UnitProfile) -> &LineItem {
        self.next_id += 1;
        let id = ItemId(self.next_id);
        self.items.push(LineItem::new(
            id,
            profile.min_width,
            profile.min_height,
            COUNT_MIN,
        ));
        tracing::debug!("➕ Added item #{} ({})", id, profile.unit);
        &self.items[self.items.len() - 1]
    }

    /// 不存在的項目直接忽略，回傳是否有刪除
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                tracing::debug!("🗑️ Removed item #{}", id);
                true
            }
            None => {
                tracing::debug!("Item #{} already removed, ignoring", id);
                false
            }
        }
    }

    /// 以原始輸入字串更新欄位；非數字輸入不會改動欄位
    pub fn update_field(
        &mut self,
        id: ItemId,
        field: Field,
        raw_value: &str,
        profile: &UnitProfile,
    ) -> FieldUpdate {
        match parse_raw(raw_value) {
            Some(value) => self.update_value(id, field, value, profile),
            None => {
                tracing::warn!("Rejected non-numeric {} '{}' for item #{}", field, raw_value, id);
                FieldUpdate::NotANumber
            }
        }
    }

    pub fn update_value(
        &mut self,
        id: ItemId,
        field: Field,
        value: f64,
        profile: &UnitProfile,
    ) -> FieldUpdate {
        // 無窮大仍是數字，會被夾到上下限
        if value.is_nan() {
            return FieldUpdate::NotANumber;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return FieldUpdate::UnknownItem;
        };

        let stored = match field {
            Field::Width => {
                item.width = profile.clamp_width(value);
                item.width
            }
            Field::Height => {
                item.height = profile.clamp_height(value);
                item.height
            }
            Field::Count => {
                item.count = clamp_count(value);
                f64::from(item.count)
            }
        };

        if stored == value {
            tracing::debug!("✏️ Item #{} {} = {}", id, field, stored);
            FieldUpdate::Applied(stored)
        } else {
            tracing::debug!("✏️ Item #{} {} clamped {} -> {}", id, field, value, stored);
            FieldUpdate::Clamped {
                requested: value,
                stored,
            }
        }
    }

    /// 切換單位後把所有寬高夾回新範圍，仍在範圍內的值保持不變。回傳被改動的項目數
    pub fn rescale_all(&mut self, profile: &UnitProfile) -> usize {
        let mut changed = 0;
        for item in &mut self.items {
            let width = profile.clamp_width(item.width);
            let height = profile.clamp_height(item.height);
            if width != item.width || height != item.height {
                tracing::debug!(
                    "📐 Item #{} rescaled {}x{} -> {}x{}",
                    item.id(),
                    item.width,
                    item.height,
                    width,
                    height
                );
                item.width = width;
                item.height = height;
                changed += 1;
            }
        }
        changed
    }

    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a LineItemStore {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// 空字串、非數字以及 "NaN"、"inf" 這類字面值視為無效輸入。
/// 像 "1e400" 這種溢位的數字會變成無窮大，之後被夾到上下限。
fn parse_raw(raw_value: &str) -> Option<f64> {
    let text = raw_value.trim();
    let value = text.parse::<f64>().ok()?;
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() {
        let magnitude = text.trim_start_matches(['+', '-']).to_lowercase();
        if magnitude == "inf" || magnitude == "infinity" {
            return None;
        }
    }
    Some(value)
}
