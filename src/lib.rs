pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FileStore, HttpModernResolver, InMemoryStore};
pub use config::Settings;
pub use crate::core::converter::RomanConverter;
pub use crate::core::credentials::{is_valid_email, verify_password};
pub use crate::core::numeral::{convert_to_old_roman, parse_arabic};
pub use crate::core::registration::RegistrationForm;
pub use utils::error::{CalcError, Result};
