//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Current URL path
//!     → table.rs (walk entries in source order)
//!     → matcher.rs (evaluate pattern, bind :params)
//!     → Return: first matching entry, or the terminal not-found entry
//! ```
//!
//! # Design Decisions
//! - The table is declarative data; all matching lives in the generic
//!   matcher
//! - Built at startup, immutable at runtime
//! - Deterministic: same path always resolves to the same entry
//! - First match wins; the not-found catch-all is always present and
//!   always last

pub mod matcher;
pub mod table;

pub use matcher::{PathParams, PathPattern, Segment};
pub use table::{Resolved, RouteEntry, RouteTable, View};
