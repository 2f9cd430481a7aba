use crate::domain::model::{ItemId, Quote, SeedItem, Unit};
use crate::domain::profile::UnitProfile;
use crate::utils::error::Result;

/// 呈現層：核心只輸出計算結果，畫面怎麼畫由實作決定
pub trait Presenter {
    fn render_item(&mut self, quote: &Quote, unit: Unit) -> Result<()>;
    fn remove_item(&mut self, id: ItemId) -> Result<()>;
    fn relabel_unit(&mut self, profile: &UnitProfile) -> Result<()>;
    /// `None` 表示目前沒有項目，總價不顯示
    fn render_total(&mut self, total: Option<u64>) -> Result<()>;
    fn message(&mut self, text: &str) -> Result<()>;
}

/// 啟動時的設定來源 (命令列、TOML 配置檔)
pub trait SessionDefaults {
    fn unit_token(&self) -> Option<&str>;
    fn tier_token(&self) -> Option<&str>;
    fn locale(&self) -> Option<&str>;
    fn seed_items(&self) -> &[SeedItem];
}
