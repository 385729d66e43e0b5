use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Additive numeral alphabet, strictly descending by value. There is no `D`:
/// five hundred is written `CCCCC`.
pub const NUMERAL_TABLE: [(u32, char); 6] = [
    (1000, 'M'),
    (100, 'C'),
    (50, 'L'),
    (10, 'X'),
    (5, 'V'),
    (1, 'I'),
];

pub const MIN_ARABIC: i64 = 1;
pub const MAX_ARABIC: i64 = 3999;

/// Per-rule outcome of a password check.
///
/// For a missing or empty password only `pass` is populated; every rule field
/// stays `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_invalid: Option<bool>,
    pub pass: bool,
}

impl PasswordReport {
    pub fn rejected() -> Self {
        Self::default()
    }

    /// Human-readable list of the rules this password broke. A rule that was
    /// never evaluated (missing password) counts as broken.
    pub fn failures(&self) -> Vec<&'static str> {
        let rules = [
            (self.length, "Password needs to be at least 8 characters"),
            (self.lowercase, "Password needs a lower case letter"),
            (self.uppercase, "Password needs an upper case letter"),
            (self.digit, "Password needs a numeric digit (0-9)"),
            (self.symbol, "Password needs a symbol (!@#$%^&*)"),
            (
                self.no_invalid,
                "Password contains invalid characters (only letters, numbers, and !@#$%^&* are allowed)",
            ),
        ];

        rules
            .iter()
            .filter(|(check, _)| *check != Some(true))
            .map(|(_, message)| *message)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub arabic: u16,
    pub old: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modern: Option<String>,
}

/// Locally "registered" user. Credentials are kept in plain text: this is a
/// demo registration, not an authentication system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub email: String,
    pub password: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(RegisteredUser),
    Rejected {
        email_valid: bool,
        password: PasswordReport,
    },
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered(_))
    }

    pub fn messages(&self) -> Vec<String> {
        match self {
            RegistrationOutcome::Registered(_) => vec!["Registration Successful".to_string()],
            RegistrationOutcome::Rejected {
                email_valid,
                password,
            } => {
                let mut messages = vec!["Registration Error".to_string()];
                if !email_valid {
                    messages.push("The email address you entered is invalid.".to_string());
                }
                if !password.pass {
                    messages.push("The password you entered is invalid:".to_string());
                    messages.extend(password.failures().into_iter().map(String::from));
                }
                messages
            }
        }
    }
}
