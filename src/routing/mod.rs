//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered route table, first match wins)
//!     → matcher.rs (compiled path pattern, parameter extraction)
//!     → Return: Matched route + params, MethodNotAllowed, or NotFound
//!
//! Route Compilation (at startup):
//!     "/api/phones/{id:[0-9]+}"
//!     → PathPattern::parse
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex engine: parameter classes are fixed character sets
//! - Deterministic: same input always matches same route
//! - The table is data; handlers are referenced by `Endpoint`

pub mod matcher;
pub mod router;

pub use matcher::{ParamClass, PathParams, PathPattern, PatternError};
pub use router::{Dispatch, Endpoint, Route, Router};
