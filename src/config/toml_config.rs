use crate::domain::model::{SeedItem, Tier, Unit};
use crate::domain::ports::SessionDefaults;
use crate::domain::profile::{COUNT_MAX, COUNT_MIN};
use crate::utils::error::{EstimatorError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateConfig {
    #[serde(default)]
    pub settings: SettingsSection,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsSection {
    pub unit: Option<String>,
    pub tier: Option<String>,
    pub locale: Option<String>,
}

impl EstimateConfig {
    /// 從 TOML 檔案載入估價單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析估價單
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${DEFAULT_UNIT})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EstimatorError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn unit(&self) -> Result<Option<Unit>> {
        self.settings
            .unit
            .as_deref()
            .map(str::parse)
            .transpose()
    }

    pub fn tier(&self) -> Result<Option<Tier>> {
        self.settings
            .tier
            .as_deref()
            .map(str::parse)
            .transpose()
    }
}

impl Validate for EstimateConfig {
    fn validate(&self) -> Result<()> {
        self.unit()?;
        self.tier()?;

        if let Some(locale) = &self.settings.locale {
            validation::validate_non_empty_string("settings.locale", locale)?;
        }

        // 超出寬高範圍會在載入時被夾限，這裡只擋無法計算的值
        for (index, item) in self.items.iter().enumerate() {
            validation::validate_finite(&format!("items[{}].width", index), item.width)?;
            validation::validate_finite(&format!("items[{}].height", index), item.height)?;
            validation::validate_range(
                &format!("items[{}].count", index),
                item.count,
                COUNT_MIN,
                COUNT_MAX,
            )?;
        }

        Ok(())
    }
}

impl SessionDefaults for EstimateConfig {
    fn unit_token(&self) -> Option<&str> {
        self.settings.unit.as_deref()
    }

    fn tier_token(&self) -> Option<&str> {
        self.settings.tier.as_deref()
    }

    fn locale(&self) -> Option<&str> {
        self.settings.locale.as_deref()
    }

    fn seed_items(&self) -> &[SeedItem] {
        &self.items
    }
}
