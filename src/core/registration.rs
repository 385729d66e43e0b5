use crate::core::credentials::{is_valid_email, verify_password};
use crate::domain::model::{RegisteredUser, RegistrationOutcome};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use chrono::Utc;

pub const USER_KEY: &str = "user";

/// Registration form handler. Validates the submitted credentials and, when
/// both are acceptable, records the user in the injected store.
pub struct RegistrationForm<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RegistrationForm<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn submit(&self, email: &str, password: &str) -> Result<RegistrationOutcome> {
        let email_valid = is_valid_email(email);
        let password_report = verify_password(password);

        if !(email_valid && password_report.pass) {
            tracing::info!(
                email_valid,
                password_valid = password_report.pass,
                "Registration rejected"
            );
            return Ok(RegistrationOutcome::Rejected {
                email_valid,
                password: password_report,
            });
        }

        let user = RegisteredUser {
            email: email.to_string(),
            password: password.to_string(),
            registered_at: Utc::now(),
        };
        let json = serde_json::to_string(&user)?;
        self.store.set(USER_KEY, &json).await?;

        tracing::info!("Registered {}", user.email);
        Ok(RegistrationOutcome::Registered(user))
    }

    pub async fn registered_user(&self) -> Result<Option<RegisteredUser>> {
        match self.store.get(USER_KEY).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Forgets everything the form stored.
    pub async fn unregister(&self) -> Result<()> {
        self.store.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;

    #[tokio::test]
    async fn test_successful_registration_stores_user() {
        let form = RegistrationForm::new(InMemoryStore::new());
        let outcome = form.submit("hello@example.com", "123abcABC*").await.unwrap();

        assert!(outcome.is_registered());
        assert_eq!(outcome.messages(), vec!["Registration Successful"]);

        let user = form.registered_user().await.unwrap().unwrap();
        assert_eq!(user.email, "hello@example.com");
        assert_eq!(user.password, "123abcABC*");
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_and_nothing_stored() {
        let form = RegistrationForm::new(InMemoryStore::new());
        let outcome = form.submit("hello@example.c", "123abcABC*").await.unwrap();

        match &outcome {
            RegistrationOutcome::Rejected { email_valid, password } => {
                assert!(!email_valid);
                assert!(password.pass);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(outcome
            .messages()
            .contains(&"The email address you entered is invalid.".to_string()));
        assert!(form.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_password_lists_failed_rules() {
        let form = RegistrationForm::new(InMemoryStore::new());
        let outcome = form.submit("hello@example.com", "abc").await.unwrap();

        let messages = outcome.messages();
        assert!(messages.contains(&"The password you entered is invalid:".to_string()));
        assert!(messages.contains(&"Password needs to be at least 8 characters".to_string()));
        assert!(messages.contains(&"Password needs an upper case letter".to_string()));
        assert!(!messages.contains(&"Password needs a lower case letter".to_string()));
        assert_eq!(form.registered_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unregister_clears_store() {
        let form = RegistrationForm::new(InMemoryStore::new());
        form.submit("hello@example.com", "123abcABC*").await.unwrap();
        form.unregister().await.unwrap();
        assert_eq!(form.registered_user().await.unwrap(), None);
    }
}
