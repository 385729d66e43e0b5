use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Roman numeral converter with email/password validators")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Modern numeral service endpoint (overrides the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout for the modern numeral service, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Where registrations are stored (overrides the config file)
    #[arg(long, global = true)]
    pub store_path: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Additive ("old") notation, e.g. 9 -> VIIII
    Old {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Subtractive ("modern") notation via the numeral service, e.g. 9 -> IX
    Modern {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Both notations
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Skip the modern numeral lookup
        #[arg(long)]
        offline: bool,
    },
    /// Check whether an email address is acceptable
    CheckEmail { email: String },
    /// Report which password rules hold
    CheckPassword {
        #[arg(allow_hyphen_values = true)]
        password: String,
    },
    /// Validate and store a registration
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, allow_hyphen_values = true)]
        password: String,
    },
    /// Remove any stored registration
    Unregister,
}

impl CliConfig {
    /// Resolves effective settings: defaults, then the config file, then flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_toml(&TomlConfig::from_file(path)?),
            None => Settings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.resolver_endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = Some(timeout);
        }
        if let Some(store_path) = &self.store_path {
            settings.store_path = store_path.clone();
        }

        Ok(settings)
    }
}
