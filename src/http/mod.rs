//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum router, request IDs, tracing)
//!     ├── /            → frontend.rs (SPA entry point)
//!     ├── /static/*    → tower-http ServeDir (css, js)
//!     ├── /api/config  → frontend.rs (server identity for the browser)
//!     └── /api/pdns/*  → proxy.rs (rewrite, inject key, forward, normalize)
//!                           → error.rs (503/504/500 as {"detail": ...})
//! ```

pub mod error;
pub mod frontend;
pub mod proxy;
pub mod server;

pub use error::ProxyError;
pub use server::{AppState, HttpServer};
