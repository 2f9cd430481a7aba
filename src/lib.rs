pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::session::{Session, TerminalPresenter};
pub use config::{resolve_settings, toml_config::EstimateConfig, EnvironmentLocale};
pub use crate::core::{estimator::Estimator, settings::Settings};
pub use domain::model::{Field, FieldUpdate, ItemId, Quote, Tier, Unit};
pub use utils::error::{EstimatorError, Result};
