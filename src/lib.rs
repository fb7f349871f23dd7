//! In-memory contacts HTTP service library.

pub mod config;
pub mod contacts;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use contacts::{Contact, ContactRepository, InMemoryContactRepository, NewContact};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
