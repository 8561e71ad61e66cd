//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use bookms_auth::auth::session::MemorySessionStore;
use bookms_auth::config::{AuthConfig, DemoAccount, SessionConfig};
use bookms_auth::{AuthSystem, DemoAuthBackend, Identity, SessionState, UserRole};
use std::sync::Arc;
use uuid::Uuid;

/// Built-in demo administrator
pub const ADMIN_EMAIL: &str = "admin@bookms.com";
pub const ADMIN_PASSWORD: &str = "password123";

/// Factory for creating test identities
pub struct IdentityFactory;

impl IdentityFactory {
    /// Identity with a unique email and the given role
    pub fn with_role(role: UserRole) -> Identity {
        let tag = &Uuid::new_v4().simple().to_string()[..8];
        Identity::new(
            format!("{}-{}@bookms.com", role.as_str().to_lowercase(), tag),
            format!("Test {}", role),
            role,
        )
    }

    pub fn user() -> Identity {
        Self::with_role(UserRole::User)
    }

    pub fn admin() -> Identity {
        Self::with_role(UserRole::Admin)
    }

    pub fn super_admin() -> Identity {
        Self::with_role(UserRole::SuperAdmin)
    }

    /// Email of the demo account seeded for `role`
    pub fn demo_email(role: UserRole) -> String {
        format!("demo-{}@bookms.com", role.as_str().to_lowercase())
    }

    /// Demo account for every role, sharing one password
    pub fn demo_accounts() -> Vec<DemoAccount> {
        UserRole::all()
            .into_iter()
            .map(|role| DemoAccount {
                email: Self::demo_email(role),
                password: ADMIN_PASSWORD.to_string(),
                full_name: format!("Demo {}", role),
                role,
                active: true,
            })
            .collect()
    }
}

/// Authentication system over an in-memory store and the demo backend
pub struct TestAuth {
    pub system: AuthSystem,
    pub store: Arc<MemorySessionStore>,
    pub backend: Arc<DemoAuthBackend>,
}

impl TestAuth {
    /// Initialized system knowing the built-in admin plus one account per role
    pub async fn new() -> Self {
        let mut config = AuthConfig::default();
        config.demo_accounts.extend(IdentityFactory::demo_accounts());
        Self::with_config(config).await
    }

    pub async fn with_config(config: AuthConfig) -> Self {
        let store = Arc::new(MemorySessionStore::new());
        let backend = Arc::new(DemoAuthBackend::new(&config));
        let system = Self::system_over(&config, store.clone(), backend.clone());
        system.initialize().await;
        Self {
            system,
            store,
            backend,
        }
    }

    /// Second, uninitialized system sharing this one's store and backend
    pub fn reopen(&self) -> AuthSystem {
        Self::system_over(self.system.config(), self.store.clone(), self.backend.clone())
    }

    fn system_over(
        config: &AuthConfig,
        store: Arc<MemorySessionStore>,
        backend: Arc<DemoAuthBackend>,
    ) -> AuthSystem {
        let session = Arc::new(SessionState::new(store, &SessionConfig::default()));
        AuthSystem::new(config, session, backend)
    }

    /// Sign in as the demo account of `role`
    pub async fn sign_in_as(&self, role: UserRole) -> Identity {
        self.system
            .login(&IdentityFactory::demo_email(role), ADMIN_PASSWORD)
            .await
            .expect("demo account sign-in")
    }
}
