//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Store calls produce:
//!     → logging.rs (structured log events, request IDs)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```

pub mod logging;
pub mod metrics;
