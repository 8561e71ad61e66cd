//! Session state holder

use super::store::SessionStore;
use crate::auth::backend::{AuthBackend, SessionTokens};
use crate::auth::rbac::{self, AccessRequirement};
use crate::config::SessionConfig;
use crate::core::models::{Identity, UserRole};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Point-in-time view of the session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Live identity, `None` when signed out
    pub identity: Option<Identity>,
    /// Restoration or an auth operation is in flight
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        rbac::has_role(self.identity.as_ref(), role)
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        rbac::has_any_role(self.identity.as_ref(), roles)
    }

    pub fn can_access(&self, requirement: &AccessRequirement) -> bool {
        rbac::can_access(self.identity.as_ref(), requirement)
    }
}

/// Single authoritative holder of the current identity
///
/// Starts in the loading state; [`SessionState::restore`] settles it. Store
/// failures are logged and never surface to callers.
#[derive(Debug)]
pub struct SessionState {
    state: watch::Sender<SessionSnapshot>,
    store: Arc<dyn SessionStore>,
    access_key: String,
    refresh_key: String,
}

impl SessionState {
    /// Create a holder over `store`, loading until restored
    pub fn new(store: Arc<dyn SessionStore>, config: &SessionConfig) -> Self {
        let (state, _) = watch::channel(SessionSnapshot {
            identity: None,
            loading: true,
        });
        Self {
            state,
            store,
            access_key: config.access_key.clone(),
            refresh_key: config.refresh_key.clone(),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver notified on every identity or loading change
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.state.borrow().has_role(role)
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        self.state.borrow().has_any_role(roles)
    }

    pub fn can_access(&self, requirement: &AccessRequirement) -> bool {
        self.state.borrow().can_access(requirement)
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.state.send_if_modified(|snapshot| {
            let changed = snapshot.loading != loading;
            snapshot.loading = loading;
            changed
        });
    }

    /// Access marker currently persisted, if any
    pub async fn access_marker(&self) -> Option<String> {
        match self.store.get(&self.access_key).await {
            Ok(marker) => marker,
            Err(e) => {
                warn!("Failed to read session marker: {}", e);
                None
            }
        }
    }

    /// Replace the live identity and persist its markers
    pub async fn set_identity(&self, identity: Identity, tokens: &SessionTokens) {
        info!("Session established for {} ({})", identity.email, identity.role);
        self.state.send_modify(|snapshot| snapshot.identity = Some(identity));

        if let Err(e) = self.store.set(&self.access_key, &tokens.access_token).await {
            warn!("Failed to persist session marker: {}", e);
        }
        let refresh = match &tokens.refresh_token {
            Some(token) => self.store.set(&self.refresh_key, token).await,
            None => self.store.remove(&self.refresh_key).await,
        };
        if let Err(e) = refresh {
            warn!("Failed to persist refresh marker: {}", e);
        }
    }

    /// Drop the live identity and erase both markers; idempotent
    pub async fn clear(&self) {
        self.state.send_if_modified(|snapshot| snapshot.identity.take().is_some());
        self.erase_markers().await;
    }

    async fn erase_markers(&self) {
        for key in [&self.access_key, &self.refresh_key] {
            if let Err(e) = self.store.remove(key).await {
                warn!("Failed to erase session marker {}: {}", key, e);
            }
        }
    }

    /// Resolve a persisted marker into the live identity
    ///
    /// Loading is raised for the duration and always lowered at the end. A
    /// missing, unreadable, unknown or inactive marker settles to an absent
    /// identity; a rejected marker is erased.
    pub async fn restore<B: AuthBackend + ?Sized>(&self, backend: &B) -> Option<Identity> {
        self.set_loading(true);

        let restored = match self.access_marker().await {
            None => {
                debug!("No session marker found");
                None
            }
            Some(marker) => match backend.restore_session(&marker).await {
                Ok(identity) if identity.is_active() => {
                    info!("Session restored for {}", identity.email);
                    Some(identity)
                }
                Ok(identity) => {
                    warn!("Session marker belongs to inactive account {}", identity.email);
                    self.erase_markers().await;
                    None
                }
                Err(e) => {
                    warn!("Session restoration failed: {}", e);
                    self.erase_markers().await;
                    None
                }
            },
        };

        let identity = restored.clone();
        self.state.send_modify(move |snapshot| {
            snapshot.identity = identity;
            snapshot.loading = false;
        });
        restored
    }
}
