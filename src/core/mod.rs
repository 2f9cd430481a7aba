pub mod estimator;
pub mod locale;
pub mod pricing;
pub mod settings;
pub mod store;

pub use crate::domain::model::{Field, FieldUpdate, ItemId, LineItem, Quote, Tier, Unit};
pub use crate::domain::ports::{Presenter, SessionDefaults};
pub use crate::utils::error::Result;
