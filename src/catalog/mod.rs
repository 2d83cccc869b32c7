//! Catalog subsystem.
//!
//! # Data Flow
//! ```text
//! View intent (create / list / update / delete)
//!     → service.rs (field filtering, ordering, error policy)
//!     → store client (one request per call)
//!     → Return: StoreResult for writes, Listing for list reads
//! ```

pub mod service;
pub mod types;

pub use service::CatalogService;
pub use types::{Category, Guide, GuideFields, GuideId, Listing};
