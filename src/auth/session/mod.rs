//! Session state
//!
//! The holder owns the live identity and its loading flag; the store keeps
//! the opaque markers that let a later process restore the session.

mod state;
pub mod store;

pub use state::{SessionSnapshot, SessionState};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, create_store};
