pub mod converter;
pub mod credentials;
pub mod numeral;
pub mod registration;

pub use crate::domain::model::{ConversionResult, PasswordReport, RegisteredUser, RegistrationOutcome};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, ModernResolver};
pub use crate::utils::error::Result;
