//! Sidebar navigation filtered by role

mod sidebar;

pub use sidebar::{NavItem, NavSection, Sidebar, VisibleItem, VisibleSection};
