//! Contact storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → repository.rs (ContactRepository trait, the only mutation gateway)
//!     → memory.rs (in-memory implementation backed by a concurrent map)
//!     → owned Contact copies returned to the caller
//!
//! At startup:
//!     seed.rs generates demo contacts
//!     → inserted through ContactRepository::add
//! ```
//!
//! # Design Decisions
//! - Handlers only see `Arc<dyn ContactRepository>`; a persistent store can slot in later
//! - Ids come from a monotonic counter and are never reused after deletion
//! - Absence is a normal outcome (`Option` / `bool`), never an error

pub mod memory;
pub mod model;
pub mod repository;
pub mod seed;

pub use memory::InMemoryContactRepository;
pub use model::{Contact, ContactId, NewContact};
pub use repository::ContactRepository;
