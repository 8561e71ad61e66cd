//! Core authentication system implementation

use super::backend::validation::{validate_registration, validate_sign_in};
use super::backend::{AuthBackend, AuthOutcome, DemoAuthBackend, RegisterData};
use super::rbac::AccessRequirement;
use super::session::{SessionSnapshot, SessionState, create_store};
use crate::config::{AuthConfig, Config};
use crate::core::models::{Identity, SsoProvider, UserRole};
use crate::navigation::{Sidebar, VisibleSection};
use crate::routing::{Navigation, RouteTable, Router};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Application-scoped authentication context
///
/// Owns the session holder and the backend boundary. Construct one at the top
/// of the application and hand clones to consumers; there is no global
/// instance.
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Session state holder
    session: Arc<SessionState>,
    /// Identity source
    backend: Arc<dyn AuthBackend>,
    /// Route table with its guard
    router: Arc<Router>,
}

/// Lowers the loading flag when an operation ends, however it ends
struct LoadingGuard<'a>(&'a SessionState);

impl<'a> LoadingGuard<'a> {
    fn raise(session: &'a SessionState) -> Self {
        session.set_loading(true);
        Self(session)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

impl AuthSystem {
    /// Assemble a system from its parts
    ///
    /// The session stays loading until [`initialize`](Self::initialize).
    pub fn new(
        config: &AuthConfig,
        session: Arc<SessionState>,
        backend: Arc<dyn AuthBackend>,
    ) -> Self {
        let router = Router::new(RouteTable::dashboard(config), config);
        Self {
            config: Arc::new(config.clone()),
            session,
            backend,
            router: Arc::new(router),
        }
    }

    /// Build the configured store and demo backend, then restore any persisted session
    pub async fn from_config(config: &Config) -> Result<Self> {
        info!("Initializing authentication system");

        let store = create_store(config.session())?;
        let session = Arc::new(SessionState::new(store, config.session()));
        let backend = Arc::new(DemoAuthBackend::new(config.auth()));

        let system = Self::new(config.auth(), session, backend);
        system.initialize().await;

        info!("Authentication system initialized");
        Ok(system)
    }

    /// Restore a persisted session, settling the loading flag
    pub async fn initialize(&self) -> Option<Identity> {
        self.session.restore(self.backend.as_ref()).await
    }

    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        validate_sign_in(email, password)?;

        let _loading = LoadingGuard::raise(&self.session);
        let outcome = self.backend.sign_in(email.trim(), password).await;
        self.establish(outcome, "sign-in").await
    }

    /// Register a new account and sign it in
    pub async fn register(&self, data: RegisterData) -> Result<Identity> {
        validate_registration(&data)?;

        let _loading = LoadingGuard::raise(&self.session);
        let outcome = self.backend.sign_up(&data).await;
        self.establish(outcome, "sign-up").await
    }

    /// Sign in through an external identity provider
    pub async fn login_with_sso(&self, provider: SsoProvider, token: &str) -> Result<Identity> {
        let _loading = LoadingGuard::raise(&self.session);
        let outcome = self.backend.sign_in_with_sso(provider, token).await;
        self.establish(outcome, provider.as_str()).await
    }

    async fn establish(&self, outcome: Result<AuthOutcome>, operation: &str) -> Result<Identity> {
        match outcome {
            Ok(AuthOutcome { identity, tokens }) => {
                info!("{} succeeded for {}", operation, identity.email);
                let replaced = self.session.access_marker().await;
                self.session.set_identity(identity.clone(), &tokens).await;
                if let Some(marker) = replaced.filter(|marker| *marker != tokens.access_token) {
                    self.revoke(&marker).await;
                }
                Ok(identity)
            }
            Err(e) => {
                warn!("{} failed: {}", operation, e);
                Err(e)
            }
        }
    }

    /// Sign out: revoke the marker with the backend and clear the session
    pub async fn logout(&self) {
        if let Some(marker) = self.session.access_marker().await {
            self.revoke(&marker).await;
        }
        self.session.clear().await;
        info!("Signed out");
    }

    async fn revoke(&self, marker: &str) {
        if let Err(e) = self.backend.sign_out(marker).await {
            warn!("Failed to revoke session marker: {}", e);
        }
    }

    /// Session state holder
    pub fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// Authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Router over the dashboard route table
    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.session.current_identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.session.has_role(role)
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        self.session.has_any_role(roles)
    }

    pub fn can_access(&self, requirement: &AccessRequirement) -> bool {
        self.session.can_access(requirement)
    }

    /// Snapshot of the session
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Decide what a navigation to `path` does for the current session
    pub fn navigate(&self, path: &str) -> Navigation {
        self.router.navigate(&self.session.snapshot(), path)
    }

    /// Where to go after a successful sign-in
    pub fn resume_destination(&self, from: Option<&str>) -> String {
        self.router.resume_destination(&self.session.snapshot(), from)
    }

    /// Sections of `sidebar` the current identity may see
    pub fn visible_sidebar<'a>(
        &self,
        sidebar: &'a Sidebar,
        current_path: &str,
    ) -> Vec<VisibleSection<'a>> {
        sidebar.visible(self.session.current_identity().as_ref(), current_path)
    }
}
