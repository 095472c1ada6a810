//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, catch-all dispatch)
//!     → request.rs (request ID)
//!     → routing::Router (method + path → Endpoint)
//!     → handlers.rs (filter / decode → encode → response)
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{request_id, RequestIdGenerator, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};
