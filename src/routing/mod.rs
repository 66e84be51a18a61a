//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, request target)
//!     → router.rs (exact lookup in the static route table)
//!     → Return: matched Route or the not-found response
//! ```
//!
//! # Design Decisions
//! - Route table is a `static` slice, immutable at runtime
//! - Method and target compared with case-sensitive string equality
//! - The target includes the query string, so `/hello?x=1` does not match
//! - Deterministic: same input always yields the same response

pub mod router;

pub use router::{Route, RouteMatch, Router, ROUTES};
