//! Configuration integration tests
//!
//! Loading YAML from disk, validation failures, and building an
//! authentication system from the loaded configuration.

#[cfg(test)]
mod tests {
    use bookms_auth::config::{SessionBackend, Validate};
    use bookms_auth::{AuthSystem, BookmsError, Config, UserRole};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_configured_accounts_sign_in() {
        let file = write_config(
            r#"
auth:
  demo_accounts:
    - email: "librarian@bookms.com"
      password: "shelves-and-stacks"
      full_name: "Head Librarian"
      role: "SuperAdmin"
    - email: "reader@bookms.com"
      password: "reading-is-fun"
      full_name: "Reader"
      role: "User"
      active: false
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let auth = AuthSystem::from_config(&config).await.unwrap();

        let librarian = auth
            .login("librarian@bookms.com", "shelves-and-stacks")
            .await
            .unwrap();
        assert_eq!(librarian.role, UserRole::SuperAdmin);
        assert_eq!(librarian.full_name, "Head Librarian");

        // A configured account list replaces the built-in admin
        assert!(auth.login("admin@bookms.com", "password123").await.is_err());

        let err = auth
            .login("reader@bookms.com", "reading-is-fun")
            .await
            .unwrap_err();
        assert!(matches!(err, BookmsError::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn test_file_backend_writes_markers() {
        let dir = TempDir::new().unwrap();
        let session_path = dir.path().join("markers.json");
        let file = write_config(&format!(
            "session:\n  backend: file\n  path: {:?}\n  access_key: bookms_access\n",
            session_path.display().to_string()
        ));

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.session().backend, SessionBackend::File);

        let auth = AuthSystem::from_config(&config).await.unwrap();
        auth.login("admin@bookms.com", "password123").await.unwrap();

        let content = tokio::fs::read_to_string(&session_path).await.unwrap();
        let markers: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(markers["bookms_access"].as_str().unwrap().starts_with("demo-"));
        assert!(markers["refresh_token"].is_string());

        auth.logout().await;
        let content = tokio::fs::read_to_string(&session_path).await.unwrap();
        let markers: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(markers.get("bookms_access").is_none());
    }

    #[test]
    fn test_file_backend_requires_path() {
        let err = Config::from_yaml("session:\n  backend: file\n").unwrap_err();
        assert!(matches!(err, BookmsError::Config(_)));
    }

    #[test]
    fn test_marker_keys_must_differ() {
        let err = Config::from_yaml("session:\n  access_key: marker\n  refresh_key: marker\n")
            .unwrap_err();
        assert!(matches!(err, BookmsError::Config(_)));
    }

    #[test]
    fn test_sign_in_and_forbidden_paths_must_differ() {
        let result = Config::from_yaml("auth:\n  sign_in_path: /gate\n  forbidden_path: /gate\n");
        assert!(matches!(result, Err(BookmsError::Config(_))));
    }

    #[test]
    fn test_demo_account_rules() {
        let mut config = Config::default();
        config.app.auth.demo_accounts[0].password = "short".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.app.auth.demo_accounts[0].email = "admin-at-bookms".to_string();
        assert!(config.app.auth.validate().is_err());

        let mut config = Config::default();
        let duplicate = config.app.auth.demo_accounts[0].clone();
        config.app.auth.demo_accounts.push(duplicate);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = Config::from_yaml(concat!(
            "auth:\n",
            "  demo_accounts:\n",
            "    - email: a@bookms.com\n",
            "      password: password123\n",
            "      full_name: A\n",
            "      role: Owner\n",
        ));
        assert!(matches!(result, Err(BookmsError::Config(_))));
    }

    #[test]
    fn test_saved_yaml_reloads() {
        let mut config = Config::default();
        config.app.auth.forbidden_path = "/no-entry".to_string();
        config.app.logging.level = "bookms_auth=debug".to_string();
        // Passwords are never written out, so only an account-free config reloads as-is
        config.app.auth.demo_accounts.clear();

        let reloaded = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();

        assert_eq!(reloaded.auth().forbidden_path, "/no-entry");
        assert_eq!(reloaded.logging().level, "bookms_auth=debug");
        assert!(reloaded.auth().demo_accounts.is_empty());
    }
}
