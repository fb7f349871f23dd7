//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → middleware/request_log.rs (log method + path, start timer)
//!     → greeting.rs / contacts.rs (handler → ContactRepository)
//!     → response.rs (absence → empty 404)
//!     → middleware/request_log.rs (log status + elapsed)
//!     → Send to client
//! ```

pub mod contacts;
pub mod greeting;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_of, UuidRequestId, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
