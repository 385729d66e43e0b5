use crate::domain::model::PasswordReport;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// 大小寫不敏感，且 \w 只涵蓋 ASCII
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)^[A-Za-z0-9_!#$%&'*+/=?`{|}~^-]+(?:\.[A-Za-z0-9_!#$%&'*+/=?`{|}~^-]+)*@(?:[a-z0-9-]+\.)+[a-z]{2,6}$",
    )
    .expect("email pattern is valid")
});

static LOWERCASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").expect("valid"));
static UPPERCASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").expect("valid"));
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("valid"));
static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[!@#$%^&*]").expect("valid"));
static INVALID_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9!@#$%^&*]").expect("valid"));

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Email check for loosely typed input (form payloads): anything that is not a
/// JSON string is simply not a valid email.
pub fn is_valid_email_value(email: &Value) -> bool {
    email.as_str().is_some_and(is_valid_email)
}

/// Runs every password rule independently; `pass` is true only if all hold.
pub fn verify_password(password: &str) -> PasswordReport {
    if password.is_empty() {
        return PasswordReport::rejected();
    }

    // 以 UTF-16 單位計算長度，與瀏覽器表單一致
    let length = password.encode_utf16().count() >= MIN_PASSWORD_LENGTH;
    let lowercase = LOWERCASE_RE.is_match(password);
    let uppercase = UPPERCASE_RE.is_match(password);
    let digit = DIGIT_RE.is_match(password);
    let symbol = SYMBOL_RE.is_match(password);
    let no_invalid = !INVALID_CHAR_RE.is_match(password);

    PasswordReport {
        length: Some(length),
        lowercase: Some(lowercase),
        uppercase: Some(uppercase),
        digit: Some(digit),
        symbol: Some(symbol),
        no_invalid: Some(no_invalid),
        pass: length && lowercase && uppercase && digit && symbol && no_invalid,
    }
}

pub fn verify_password_value(password: &Value) -> PasswordReport {
    match password.as_str() {
        Some(password) => verify_password(password),
        None => PasswordReport::rejected(),
    }
}
