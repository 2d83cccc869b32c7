//! Remote store subsystem.
//!
//! # Data Flow
//! ```text
//! Caller (catalog service)
//!     → client.rs (build request: table URL, auth headers, request ID)
//!     → remote store REST surface
//!     → client.rs (normalize: 2xx rows, or error payload)
//!     → Return: StoreResult<rows> to the caller
//! ```
//!
//! # Design Decisions
//! - Stateless façade: the remote store is the system of record
//! - One request per call; retries and failover belong to no layer here
//! - Errors carry the store's payload verbatim, no local taxonomy

pub mod client;
pub mod error;

pub use client::{OrderBy, StoreClient};
pub use error::{ErrorDetail, StoreError, StoreResult};
