//! Role-gated sidebar model

use crate::auth::rbac::{AccessRequirement, can_access};
use crate::core::models::Identity;
use serde::{Deserialize, Serialize};

/// Sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
    /// Entry is behind sign-in; shown with a lock marker
    #[serde(default)]
    pub requires_auth: bool,
    /// Roles allowed to see the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<AccessRequirement>,
}

impl NavItem {
    /// Entry visible to everyone
    pub fn public(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            requires_auth: false,
            requirement: None,
        }
    }

    /// Entry visible to any signed-in identity
    pub fn authenticated(title: &str, url: &str) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(title, url)
        }
    }

    /// Entry visible to identities meeting `requirement`
    pub fn gated(title: &str, url: &str, requirement: AccessRequirement) -> Self {
        Self {
            requires_auth: true,
            requirement: Some(requirement),
            ..Self::public(title, url)
        }
    }

    pub fn is_locked(&self) -> bool {
        self.requires_auth
    }

    pub fn is_visible(&self, identity: Option<&Identity>) -> bool {
        match &self.requirement {
            Some(requirement) => can_access(identity, requirement),
            None if self.requires_auth => identity.is_some(),
            None => true,
        }
    }
}

/// Labelled group of entries with an optional gate of its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<AccessRequirement>,
    pub items: Vec<NavItem>,
}

impl NavSection {
    pub fn new(label: &str, items: Vec<NavItem>) -> Self {
        Self {
            label: label.to_string(),
            requirement: None,
            items,
        }
    }

    pub fn gated(mut self, requirement: AccessRequirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    fn gate_passes(&self, identity: Option<&Identity>) -> bool {
        self.requirement
            .as_ref()
            .is_none_or(|requirement| can_access(identity, requirement))
    }
}

/// Entry projected for one viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleItem<'a> {
    #[serde(flatten)]
    pub item: &'a NavItem,
    /// Entry URL equals the current path
    pub active: bool,
}

/// Section projected for one viewer; never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleSection<'a> {
    pub label: &'a str,
    pub items: Vec<VisibleItem<'a>>,
}

/// Declared navigation list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    pub sections: Vec<NavSection>,
}

impl Sidebar {
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self { sections }
    }

    /// Sidebar of the BookMS dashboard
    pub fn dashboard() -> Self {
        Self::new(vec![
            NavSection::new(
                "Navigation",
                vec![
                    NavItem::authenticated("Books", "/books"),
                    NavItem::authenticated("Categories", "/categories"),
                    NavItem::authenticated("Authors", "/authors"),
                ],
            ),
            NavSection::new(
                "Management",
                vec![
                    NavItem::gated("Users", "/management/users", AccessRequirement::admin()),
                    NavItem::gated("Roles", "/management/roles", AccessRequirement::super_admin()),
                ],
            )
            .gated(AccessRequirement::admin()),
        ])
    }

    /// Sections and entries `identity` may see, marking the entry at `current_path`
    ///
    /// A section appears only when its own gate passes and at least one of its
    /// entries is visible. The projection borrows from the sidebar and never
    /// changes it; call again after the identity changes.
    pub fn visible(
        &self,
        identity: Option<&Identity>,
        current_path: &str,
    ) -> Vec<VisibleSection<'_>> {
        self.sections
            .iter()
            .filter(|section| section.gate_passes(identity))
            .filter_map(|section| {
                let items: Vec<_> = section
                    .items
                    .iter()
                    .filter(|item| item.is_visible(identity))
                    .map(|item| VisibleItem {
                        item,
                        active: item.url == current_path,
                    })
                    .collect();

                (!items.is_empty()).then_some(VisibleSection {
                    label: &section.label,
                    items,
                })
            })
            .collect()
    }
}
