//! Session-scoped key/value storage
//!
//! Entries live for the duration of one dashboard session. Creating and
//! destroying sessions is the storage layer's business; consumers only read
//! and write keys.
//!
//! ```text
//! SessionValue (one key, textual default)
//!     │
//!     └── Arc<dyn SessionStore>
//!         ├── MemorySessionStore (tests, ephemeral runs)
//!         └── FileSessionStore   (<dir>/<session-id>.json)
//! ```

mod file;
mod store;
mod value;

pub use file::FileSessionStore;
pub use store::{MemorySessionStore, SessionId, SessionStore, StorageKey};
pub use value::SessionValue;
