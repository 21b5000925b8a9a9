//! Wizard session storage, the typed replacement for the browser's
//! key/value answer bag.

pub mod store;

pub use store::{JsonFileStore, MemoryStore, SessionStore, clear_responses, field_keys};
