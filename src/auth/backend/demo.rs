//! In-process backend reproducing the dashboard's simulated authentication

use super::AuthBackend;
use super::types::{AuthOutcome, RegisterData, SessionTokens};
use crate::config::{AuthConfig, DemoAccount};
use crate::core::models::{Identity, IdentityProvider, SsoProvider, UserRole};
use crate::utils::error::{BookmsError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Account {
    /// `None` for accounts created through SSO
    password: Option<String>,
    identity: Identity,
}

/// Demo backend
///
/// Accounts come from [`AuthConfig::demo_accounts`] plus whatever is
/// registered during the process. Issued markers are only known to this
/// instance, so a marker persisted by an earlier process fails restoration.
#[derive(Debug, Default)]
pub struct DemoAuthBackend {
    /// Accounts keyed by lowercase email, SSO accounts by provider
    accounts: RwLock<HashMap<String, Account>>,
    /// Live sessions: access marker to account email
    sessions: RwLock<HashMap<String, String>>,
}

impl DemoAuthBackend {
    /// Create a backend seeded with the configured demo accounts
    pub fn new(config: &AuthConfig) -> Self {
        let backend = Self::default();
        {
            let mut accounts = backend.accounts.write();
            for account in &config.demo_accounts {
                accounts.insert(account.email.to_lowercase(), Self::seed(account));
            }
        }
        backend
    }

    fn seed(account: &DemoAccount) -> Account {
        let mut identity = Identity::new(&account.email, &account.full_name, account.role);
        identity.is_active = account.active;
        Account {
            password: Some(account.password.clone()),
            identity,
        }
    }

    /// Activate or deactivate an account; returns false when it does not exist
    pub fn set_active(&self, email: &str, active: bool) -> bool {
        match self.accounts.write().get_mut(&email.to_lowercase()) {
            Some(account) => {
                account.identity.is_active = active;
                true
            }
            None => false,
        }
    }

    /// Account key of a provider's SSO identity; never a valid email, so it
    /// cannot collide with a registered account
    fn sso_key(provider: SsoProvider) -> String {
        format!("sso:{}", provider)
    }

    /// Number of live sessions
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    fn issue_session(&self, email_key: &str, identity: Identity) -> AuthOutcome {
        let tokens = SessionTokens::new(format!("demo-{}", Uuid::new_v4().simple()))
            .with_refresh_token(format!("demo-refresh-{}", Uuid::new_v4().simple()));
        self.sessions
            .write()
            .insert(tokens.access_token.clone(), email_key.to_string());
        AuthOutcome { identity, tokens }
    }

    fn touch_login(&self, email_key: &str) -> Option<Identity> {
        let mut accounts = self.accounts.write();
        let account = accounts.get_mut(email_key)?;
        account.identity.update_last_login();
        Some(account.identity.clone())
    }
}

#[async_trait]
impl AuthBackend for DemoAuthBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let key = email.trim().to_lowercase();

        let active = {
            let accounts = self.accounts.read();
            let account = accounts
                .get(&key)
                .filter(|account| account.password.as_deref() == Some(password))
                .ok_or_else(|| BookmsError::invalid_credentials("Invalid credentials"))?;
            account.identity.is_active()
        };
        if !active {
            return Err(BookmsError::invalid_credentials("Account is inactive"));
        }

        let identity = self
            .touch_login(&key)
            .ok_or_else(|| BookmsError::invalid_credentials("Invalid credentials"))?;
        debug!("Demo sign-in accepted for {}", key);
        Ok(self.issue_session(&key, identity))
    }

    async fn sign_up(&self, data: &RegisterData) -> Result<AuthOutcome> {
        super::validation::validate_registration(data)?;

        let key = data.email.trim().to_lowercase();
        let mut identity = Identity::new(
            data.email.trim(),
            data.full_name.trim(),
            data.role.unwrap_or(UserRole::User),
        );
        identity.update_last_login();

        {
            let mut accounts = self.accounts.write();
            if accounts.contains_key(&key) {
                return Err(BookmsError::validation(
                    "An account with this email already exists",
                ));
            }
            accounts.insert(
                key.clone(),
                Account {
                    password: Some(data.password.clone()),
                    identity: identity.clone(),
                },
            );
        }

        info!("Registered demo account {} as {}", key, identity.role);
        Ok(self.issue_session(&key, identity))
    }

    async fn sign_in_with_sso(&self, provider: SsoProvider, token: &str) -> Result<AuthOutcome> {
        if token.trim().is_empty() {
            return Err(BookmsError::sso_failure(format!(
                "Unable to sign in with {}",
                provider
            )));
        }

        let key = Self::sso_key(provider);
        let identity = {
            let mut accounts = self.accounts.write();
            let account = accounts.entry(key.clone()).or_insert_with(|| {
                let display = match provider {
                    SsoProvider::Google => "Google User",
                    SsoProvider::Microsoft => "Microsoft User",
                };
                Account {
                    password: None,
                    identity: Identity::new(
                        format!("user@{}.com", provider),
                        display,
                        UserRole::User,
                    )
                    .with_provider(IdentityProvider::from(provider)),
                }
            });
            if !account.identity.is_active() {
                return Err(BookmsError::sso_failure(format!(
                    "{} account is inactive",
                    provider
                )));
            }
            account.identity.update_last_login();
            account.identity.clone()
        };

        debug!("Demo SSO sign-in accepted for {}", identity.email);
        Ok(self.issue_session(&key, identity))
    }

    async fn restore_session(&self, access_token: &str) -> Result<Identity> {
        let key = self
            .sessions
            .read()
            .get(access_token)
            .cloned()
            .ok_or_else(|| BookmsError::invalid_credentials("Unknown or expired session marker"))?;

        self.accounts
            .read()
            .get(&key)
            .map(|account| account.identity.clone())
            .ok_or_else(|| BookmsError::invalid_credentials("Account no longer exists"))
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        self.sessions.write().remove(access_token);
        Ok(())
    }
}
