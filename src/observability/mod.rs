//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request logging middleware and the contact store produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request log event
//! - Metrics are cheap and disabled unless configured

pub mod logging;
pub mod metrics;
