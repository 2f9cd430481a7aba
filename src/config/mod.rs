pub mod toml_config;

use crate::core::locale::{detect_preferred_unit, normalize_locale};
use crate::core::settings::Settings;
use crate::domain::model::{SeedItem, Tier, Unit};
use crate::domain::ports::SessionDefaults;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "blind-estimator")]
#[command(about = "Interactive price estimator for window blinds")]
pub struct CliConfig {
    #[arg(long, help = "Measurement unit: m | ft (default: detected from locale)")]
    pub unit: Option<String>,

    #[arg(long, help = "Product tier: standard | light")]
    pub tier: Option<String>,

    #[arg(long, help = "Locale used for unit detection, e.g. en-US")]
    pub locale: Option<String>,

    #[arg(short, long, help = "TOML estimate file with settings and items")]
    pub config: Option<String>,

    #[arg(long, help = "Print the estimate as json or csv and exit")]
    pub export: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(unit) = &self.unit {
            unit.parse::<Unit>()?;
        }
        if let Some(tier) = &self.tier {
            tier.parse::<Tier>()?;
        }
        if let Some(path) = &self.config {
            crate::utils::validation::validate_path("config", path)?;
        }
        if let Some(format) = &self.export {
            format.parse::<crate::app::export::ExportFormat>()?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl SessionDefaults for CliConfig {
    fn unit_token(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    fn tier_token(&self) -> Option<&str> {
        self.tier.as_deref()
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn seed_items(&self) -> &[SeedItem] {
        &[]
    }
}

/// 系統環境的語系，只作為最後的來源，排在命令列與配置檔之後
#[derive(Debug, Clone, Default)]
pub struct EnvironmentLocale {
    locale: Option<String>,
}

impl EnvironmentLocale {
    pub fn new(locale: Option<String>) -> Self {
        Self { locale }
    }

    /// 依序讀 LC_ALL、LANG
    pub fn from_env() -> Self {
        let locale = std::env::var("LC_ALL")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| std::env::var("LANG").ok().filter(|v| !v.is_empty()));
        Self { locale }
    }
}

impl SessionDefaults for EnvironmentLocale {
    fn unit_token(&self) -> Option<&str> {
        None
    }

    fn tier_token(&self) -> Option<&str> {
        None
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn seed_items(&self) -> &[SeedItem] {
        &[]
    }
}

/// 依來源順序決定啟動設定：先出現的來源優先，單位最後才用語系推測
pub fn resolve_settings(sources: &[&dyn SessionDefaults]) -> Result<Settings> {
    let mut unit: Option<Unit> = None;
    let mut tier: Option<Tier> = None;

    for source in sources {
        if unit.is_none() {
            if let Some(token) = source.unit_token() {
                unit = Some(token.parse()?);
            }
        }
        if tier.is_none() {
            if let Some(token) = source.tier_token() {
                tier = Some(token.parse()?);
            }
        }
    }

    let unit = match unit {
        Some(unit) => unit,
        None => {
            let locale = sources.iter().find_map(|source| source.locale());
            let detected = locale
                .map(|raw| detect_preferred_unit(&normalize_locale(raw)))
                .unwrap_or(Unit::Metric);
            tracing::debug!("Unit detected from locale {:?}: {}", locale, detected);
            detected
        }
    };

    Ok(Settings::new(unit, tier.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StaticDefaults {
        unit: Option<&'static str>,
        tier: Option<&'static str>,
        locale: Option<&'static str>,
    }

    impl SessionDefaults for StaticDefaults {
        fn unit_token(&self) -> Option<&str> {
            self.unit
        }

        fn tier_token(&self) -> Option<&str> {
            self.tier
        }

        fn locale(&self) -> Option<&str> {
            self.locale
        }

        fn seed_items(&self) -> &[SeedItem] {
            &[]
        }
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = resolve_settings(&[]).unwrap();
        assert_eq!(settings, Settings::new(Unit::Metric, Tier::Standard));
    }

    #[test]
    fn test_first_source_wins() {
        let cli = StaticDefaults {
            unit: Some("m"),
            ..Default::default()
        };
        let file = StaticDefaults {
            unit: Some("ft"),
            tier: Some("light"),
            ..Default::default()
        };

        let settings = resolve_settings(&[&cli, &file]).unwrap();
        assert_eq!(settings.unit, Unit::Metric);
        assert_eq!(settings.tier, Tier::Light);
    }

    #[test]
    fn test_unit_from_locale() {
        let cli = StaticDefaults {
            locale: Some("en_US.UTF-8"),
            ..Default::default()
        };
        assert_eq!(resolve_settings(&[&cli]).unwrap().unit, Unit::Imperial);

        let cli = StaticDefaults {
            locale: Some("fr-FR"),
            ..Default::default()
        };
        assert_eq!(resolve_settings(&[&cli]).unwrap().unit, Unit::Metric);
    }

    #[test]
    fn test_file_locale_beats_environment() {
        let cli = StaticDefaults::default();
        let file = StaticDefaults {
            locale: Some("en-US"),
            ..Default::default()
        };
        let env = EnvironmentLocale::new(Some("de_DE.UTF-8".to_string()));

        let settings = resolve_settings(&[&cli, &file, &env]).unwrap();
        assert_eq!(settings.unit, Unit::Imperial);

        // 只有環境語系時才用它
        let settings = resolve_settings(&[&cli, &env]).unwrap();
        assert_eq!(settings.unit, Unit::Metric);
    }

    #[test]
    fn test_environment_locale_reads_lc_all_and_lang() {
        std::env::remove_var("LC_ALL");
        std::env::set_var("LANG", "de_DE.UTF-8");

        let env = EnvironmentLocale::from_env();
        assert_eq!(env.locale(), Some("de_DE.UTF-8"));

        let file = StaticDefaults {
            locale: Some("en-US"),
            ..Default::default()
        };
        let settings = resolve_settings(&[&file, &env]).unwrap();
        assert_eq!(settings.unit, Unit::Imperial);

        std::env::set_var("LC_ALL", "en_US.UTF-8");
        let env = EnvironmentLocale::from_env();
        assert_eq!(env.locale(), Some("en_US.UTF-8"));
        assert_eq!(resolve_settings(&[&env]).unwrap().unit, Unit::Imperial);

        std::env::remove_var("LC_ALL");
        std::env::remove_var("LANG");
    }

    #[test]
    fn test_unknown_token_is_error() {
        let cli = StaticDefaults {
            tier: Some("gold"),
            ..Default::default()
        };
        assert!(resolve_settings(&[&cli]).is_err());
    }
}
