//! Authentication backend boundary
//!
//! The session holder never talks to an identity source directly; sign-in,
//! sign-up, SSO and marker restoration all go through [`AuthBackend`].

mod demo;
pub mod types;
pub mod validation;

pub use demo::DemoAuthBackend;
pub use types::{AuthOutcome, RegisterData, SessionTokens};

use crate::core::models::{Identity, SsoProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Request/response boundary to an identity source
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for an identity; fails with `InvalidCredentials`
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthOutcome>;

    /// Create an account; fails with `Validation` on bad or duplicate input
    async fn sign_up(&self, data: &RegisterData) -> Result<AuthOutcome>;

    /// Exchange an external provider token; fails with `SsoFailure`
    async fn sign_in_with_sso(&self, provider: SsoProvider, token: &str) -> Result<AuthOutcome>;

    /// Resolve a persisted access marker to the identity it was issued for
    async fn restore_session(&self, access_token: &str) -> Result<Identity>;

    /// Revoke an access marker
    async fn sign_out(&self, _access_token: &str) -> Result<()> {
        Ok(())
    }
}
