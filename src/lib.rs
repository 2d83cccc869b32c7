//! Fitness catalog core library.
//!
//! Data access for the guide/category catalog against a remote store,
//! plus the static route table the navigation layer consults.

pub mod catalog;
pub mod config;
pub mod observability;
pub mod routing;
pub mod store;

pub use catalog::{CatalogService, Category, Guide, GuideFields, GuideId, Listing};
pub use config::CatalogConfig;
pub use routing::{RouteTable, View};
pub use store::{StoreClient, StoreError};
