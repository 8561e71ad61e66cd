//! Sidebar integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestAuth;
    use bookms_auth::{AccessRequirement, NavItem, NavSection, Sidebar, UserRole};

    fn titles(auth: &TestAuth, sidebar: &Sidebar) -> Vec<String> {
        auth.system
            .visible_sidebar(sidebar, "/books")
            .into_iter()
            .flat_map(|section| section.items.into_iter().map(|entry| entry.item.title.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_user_never_sees_gated_management_section() {
        let auth = TestAuth::new().await;
        auth.sign_in_as(UserRole::User).await;

        // Every entry is open to any signed-in identity; only the section gate differs
        let sidebar = Sidebar::new(vec![
            NavSection::new(
                "Management",
                vec![
                    NavItem::authenticated("Users", "/management/users"),
                    NavItem::public("Handbook", "/handbook"),
                ],
            )
            .gated(AccessRequirement::any_of([UserRole::Admin, UserRole::SuperAdmin])),
        ]);

        assert!(auth.system.visible_sidebar(&sidebar, "/").is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_sidebar_per_role() {
        let auth = TestAuth::new().await;
        let sidebar = Sidebar::dashboard();

        assert!(titles(&auth, &sidebar).is_empty());

        auth.sign_in_as(UserRole::User).await;
        assert_eq!(titles(&auth, &sidebar), ["Books", "Categories", "Authors"]);

        auth.sign_in_as(UserRole::Admin).await;
        assert_eq!(
            titles(&auth, &sidebar),
            ["Books", "Categories", "Authors", "Users"]
        );

        auth.sign_in_as(UserRole::SuperAdmin).await;
        assert_eq!(
            titles(&auth, &sidebar),
            ["Books", "Categories", "Authors", "Users", "Roles"]
        );

        auth.system.logout().await;
        assert!(titles(&auth, &sidebar).is_empty());
    }

    #[tokio::test]
    async fn test_active_entry_marked() {
        let auth = TestAuth::new().await;
        auth.sign_in_as(UserRole::Admin).await;
        let sidebar = Sidebar::dashboard();

        let sections = auth.system.visible_sidebar(&sidebar, "/management/users");
        let active: Vec<_> = sections
            .iter()
            .flat_map(|section| section.items.iter())
            .filter(|entry| entry.active)
            .map(|entry| entry.item.title.as_str())
            .collect();

        assert_eq!(active, ["Users"]);
    }

    #[test]
    fn test_sidebar_loads_from_yaml() {
        let yaml = r#"
sections:
  - label: Library
    items:
      - title: Books
        url: /books
        requires_auth: true
      - title: About
        url: /about
  - label: Owners
    requirement: [SuperAdmin]
    items:
      - title: Roles
        url: /management/roles
        requirement: [SuperAdmin]
"#;
        let sidebar: Sidebar = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(sidebar.sections.len(), 2);
        assert!(sidebar.sections[0].items[0].is_locked());
        assert!(sidebar.sections[0].items[1].is_visible(None));
        assert_eq!(
            sidebar.sections[1].requirement,
            Some(AccessRequirement::super_admin())
        );
        assert_eq!(sidebar.visible(None, "/about").len(), 1);
    }
}
