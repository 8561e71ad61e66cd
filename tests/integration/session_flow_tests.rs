//! Session lifecycle integration tests
//!
//! Restoration, sign-in, sign-up, SSO and sign-out through `AuthSystem`
//! against the demo backend and real marker stores.

#[cfg(test)]
mod tests {
    use crate::common::{ADMIN_EMAIL, ADMIN_PASSWORD, IdentityFactory, TestAuth};
    use bookms_auth::auth::session::FileSessionStore;
    use bookms_auth::config::SessionConfig;
    use bookms_auth::{
        AuthSystem, BookmsError, DemoAuthBackend, RegisterData, SessionState, SessionStore,
        SsoProvider, UserRole,
    };
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_restore_valid_marker_at_start() {
        let auth = TestAuth::new().await;
        let admin = assert_ok!(auth.system.login(ADMIN_EMAIL, ADMIN_PASSWORD).await);

        let reopened = auth.reopen();
        let mut changes = reopened.session().subscribe();
        assert!(changes.borrow().loading);

        let restored = reopened.initialize().await;

        assert_eq!(restored.map(|identity| identity.id), Some(admin.id));
        assert!(changes.has_changed().unwrap());
        let settled = changes.borrow_and_update().clone();
        assert!(!settled.loading);
        assert_eq!(settled.identity.unwrap().email, ADMIN_EMAIL);
    }

    #[tokio::test]
    async fn test_restore_without_marker_requires_fresh_sign_in() {
        let auth = TestAuth::new().await;
        let reopened = auth.reopen();

        assert!(reopened.initialize().await.is_none());
        assert!(!reopened.is_loading());
        assert!(!reopened.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_after_sign_out_fails() {
        let auth = TestAuth::new().await;
        assert_ok!(auth.system.login(ADMIN_EMAIL, ADMIN_PASSWORD).await);
        let marker = auth.system.session().access_marker().await.unwrap();

        auth.system.logout().await;
        assert_eq!(auth.backend.session_count(), 0);

        // Put the revoked marker back as if it had never been erased
        auth.store.set("access_token", &marker).await.unwrap();
        let reopened = auth.reopen();
        assert!(reopened.initialize().await.is_none());
        assert!(auth.store.get("access_token").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_rejects_deactivated_account() {
        let auth = TestAuth::new().await;
        assert_ok!(auth.system.login(ADMIN_EMAIL, ADMIN_PASSWORD).await);
        assert!(auth.backend.set_active(ADMIN_EMAIL, false));

        let reopened = auth.reopen();
        assert!(reopened.initialize().await.is_none());
        assert!(auth.store.is_empty());
    }

    #[tokio::test]
    async fn test_inactive_account_cannot_sign_in() {
        let auth = TestAuth::new().await;
        auth.backend.set_active(ADMIN_EMAIL, false);

        let err = assert_err!(auth.system.login(ADMIN_EMAIL, ADMIN_PASSWORD).await);
        assert!(matches!(err, BookmsError::InvalidCredentials(_)));
        assert!(!auth.system.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_replaces_identity_wholesale() {
        let auth = TestAuth::new().await;
        let super_admin = auth.sign_in_as(UserRole::SuperAdmin).await;
        assert!(auth.system.has_role(UserRole::Admin));

        let user = auth.sign_in_as(UserRole::User).await;

        assert_ne!(user.id, super_admin.id);
        assert_eq!(auth.system.current_identity().unwrap().id, user.id);
        assert!(!auth.system.has_role(UserRole::Admin));
    }

    #[tokio::test]
    async fn test_registration_rules_first_failure_wins() {
        let auth = TestAuth::new().await;

        let mut data = RegisterData::new("J", "not-an-email", "short");
        let err = assert_err!(auth.system.register(data.clone()).await);
        assert!(err.message().contains("Full name"), "{}", err);

        data.full_name = "Jane Reader".to_string();
        let err = assert_err!(auth.system.register(data.clone()).await);
        assert!(err.message().contains("email"), "{}", err);

        data.email = "jane@bookms.com".to_string();
        let err = assert_err!(auth.system.register(data.clone()).await);
        assert!(err.message().contains("8"), "{}", err);

        data.password = "password123".to_string();
        data.confirm_password = "password124".to_string();
        let err = assert_err!(auth.system.register(data.clone()).await);
        assert!(err.message().contains("match"), "{}", err);

        data.confirm_password = "password123".to_string();
        data.agree_to_terms = false;
        let err = assert_err!(auth.system.register(data.clone()).await);
        assert!(err.message().contains("terms"), "{}", err);

        data.agree_to_terms = true;
        let identity = assert_ok!(auth.system.register(data).await);
        assert_eq!(identity.role, UserRole::User);
        assert!(!auth.system.is_loading());
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let auth = TestAuth::new().await;
        let data = RegisterData::new("Someone Else", ADMIN_EMAIL, "password123");

        let err = assert_err!(auth.system.register(data).await);
        assert!(matches!(err, BookmsError::Validation(_)));
        assert!(!auth.system.is_authenticated());
    }

    #[tokio::test]
    async fn test_sso_reuses_provider_account() {
        let auth = TestAuth::new().await;

        let first = assert_ok!(auth.system.login_with_sso(SsoProvider::Microsoft, "t1").await);
        let second = assert_ok!(auth.system.login_with_sso(SsoProvider::Microsoft, "t2").await);

        assert_eq!(first.email, "user@microsoft.com");
        assert_eq!(first.full_name, "Microsoft User");
        assert_eq!(first.id, second.id);

        let err = assert_err!(auth.system.login_with_sso(SsoProvider::Google, "  ").await);
        assert!(matches!(err, BookmsError::SsoFailure(_)));
        assert_eq!(auth.system.current_identity().unwrap().id, second.id);
    }

    #[tokio::test]
    async fn test_clear_twice_same_as_once() {
        let auth = TestAuth::new().await;
        auth.sign_in_as(UserRole::Admin).await;

        auth.system.session().clear().await;
        let once = auth.system.snapshot();
        auth.system.session().clear().await;

        assert_eq!(auth.system.snapshot(), once);
        assert!(auth.store.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_one_session() {
        let auth = TestAuth::new().await;
        let view = auth.system.clone();

        auth.sign_in_as(UserRole::User).await;
        assert!(view.is_authenticated());

        view.logout().await;
        assert!(!auth.system.is_authenticated());
    }

    #[tokio::test]
    async fn test_file_store_survives_holder_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let backend = Arc::new(DemoAuthBackend::new(&Default::default()));
        let config = SessionConfig::default();

        let open = || {
            let store = Arc::new(FileSessionStore::new(&path));
            let session = Arc::new(SessionState::new(store, &config));
            AuthSystem::new(&Default::default(), session, backend.clone())
        };

        let first = open();
        first.initialize().await;
        let admin = assert_ok!(first.login(ADMIN_EMAIL, ADMIN_PASSWORD).await);
        drop(first);

        let second = open();
        let restored = second.initialize().await;
        assert_eq!(restored.map(|identity| identity.id), Some(admin.id));
    }

    #[tokio::test]
    async fn test_factory_identities_are_distinct() {
        let a = IdentityFactory::admin();
        let b = IdentityFactory::admin();
        assert_ne!(a.email, b.email);
        assert!(a.has_role(UserRole::User));
        assert!(!IdentityFactory::user().has_role(UserRole::Admin));
    }
}
