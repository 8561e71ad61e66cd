//! Dashboard route table and navigation decisions

use super::guard::{Denial, GuardState, Redirect, RouteGuard};
use crate::auth::rbac::AccessRequirement;
use crate::auth::session::SessionSnapshot;
use crate::config::AuthConfig;
use crate::core::models::{Identity, UserRole};
use serde::Serialize;

/// How a route is reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "requirement", rename_all = "snake_case")]
pub enum RouteAccess {
    /// Anyone, signed in or not
    Public,
    /// The sign-in screen; signed-in visitors are sent home
    SignIn,
    /// Guarded by a requirement
    Protected(AccessRequirement),
}

/// Declared route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDef {
    pub path: String,
    pub title: String,
    pub access: RouteAccess,
    /// Target rendered in place of this route once access is granted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteDef {
    pub fn public(path: &str, title: &str) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            access: RouteAccess::Public,
            redirect: None,
        }
    }

    pub fn sign_in(path: &str, title: &str) -> Self {
        Self {
            access: RouteAccess::SignIn,
            ..Self::public(path, title)
        }
    }

    pub fn protected(path: &str, title: &str, requirement: AccessRequirement) -> Self {
        Self {
            access: RouteAccess::Protected(requirement),
            ..Self::public(path, title)
        }
    }

    pub fn redirecting_to(mut self, target: &str) -> Self {
        self.redirect = Some(target.to_string());
        self
    }

    /// Requirement of a protected route
    pub fn requirement(&self) -> Option<&AccessRequirement> {
        match &self.access {
            RouteAccess::Protected(requirement) => Some(requirement),
            _ => None,
        }
    }
}

/// Ordered set of declared routes; declared once, read-only afterwards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    /// Routes of the BookMS dashboard, with sign-in and forbidden pages at the configured paths
    pub fn dashboard(config: &AuthConfig) -> Self {
        Self::new(vec![
            RouteDef::sign_in(&config.sign_in_path, "Sign In"),
            RouteDef::public(&config.forbidden_path, "Access Denied"),
            RouteDef::protected("/", "Home", AccessRequirement::authenticated())
                .redirecting_to("/dashboard"),
            RouteDef::protected("/dashboard", "Dashboard", AccessRequirement::authenticated()),
            RouteDef::protected("/books", "Books", AccessRequirement::authenticated()),
            RouteDef::protected("/categories", "Categories", AccessRequirement::authenticated()),
            RouteDef::protected("/authors", "Authors", AccessRequirement::authenticated()),
            RouteDef::protected(
                "/management/users",
                "User Management",
                AccessRequirement::admin(),
            ),
            RouteDef::protected(
                "/management/roles",
                "Role Management",
                AccessRequirement::super_admin(),
            ),
            RouteDef::protected("/admin", "Admin Dashboard", AccessRequirement::admin()),
        ])
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    /// Route declared for `path`, ignoring a query string, fragment or trailing slash
    pub fn find(&self, path: &str) -> Option<&RouteDef> {
        let path = normalize_path(path);
        self.routes.iter().find(|route| route.path == path)
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Landing page of a role
pub fn home_path(role: UserRole) -> &'static str {
    match role {
        UserRole::SuperAdmin | UserRole::Admin => "/admin",
        UserRole::User => "/dashboard",
    }
}

/// Result of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    /// Show the route
    Render { path: String, title: String },
    /// Go elsewhere without denial
    Redirect(Redirect),
    /// Turned away by the guard
    Denied(Denial),
    /// Session still loading
    Pending,
    /// No such route
    NotFound { path: String },
}

/// Route table combined with its guard
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    guard: RouteGuard,
}

impl Router {
    pub fn new(table: RouteTable, config: &AuthConfig) -> Self {
        Self {
            table,
            guard: RouteGuard::new(config),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide what navigating to `path` does for `session`
    pub fn navigate(&self, session: &SessionSnapshot, path: &str) -> Navigation {
        let Some(route) = self.table.find(path) else {
            return Navigation::NotFound {
                path: path.to_string(),
            };
        };

        match &route.access {
            RouteAccess::Public => render(route),
            RouteAccess::SignIn => match &session.identity {
                Some(identity) => Navigation::Redirect(Redirect::to(home_path(identity.role))),
                None => render(route),
            },
            RouteAccess::Protected(requirement) => {
                match self.guard.evaluate(session, Some(requirement), path) {
                    GuardState::Pending => Navigation::Pending,
                    GuardState::Denied(denial) => Navigation::Denied(denial),
                    GuardState::Granted => match &route.redirect {
                        Some(target) => Navigation::Redirect(Redirect::to(target)),
                        None => render(route),
                    },
                }
            }
        }
    }

    /// Where to go after a successful sign-in
    ///
    /// The preserved destination, query and fragment included, when it names a
    /// known route other than the sign-in page; otherwise the identity's home
    /// path.
    pub fn resume_destination(&self, session: &SessionSnapshot, from: Option<&str>) -> String {
        let home = match &session.identity {
            Some(identity) => home_path(identity.role),
            None => return self.guard.sign_in_path().to_string(),
        };

        from.filter(|path| {
            self.table
                .find(path)
                .is_some_and(|route| route.access != RouteAccess::SignIn)
        })
        .map(str::to_string)
        .unwrap_or_else(|| home.to_string())
    }
}

/// Target of the forbidden page's "back" action
pub fn forbidden_back_path(identity: Option<&Identity>) -> &'static str {
    identity.map_or("/dashboard", |identity| home_path(identity.role))
}

fn render(route: &RouteDef) -> Navigation {
    Navigation::Render {
        path: route.path.clone(),
        title: route.title.clone(),
    }
}
