//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional, loaded at startup)
//!     → process environment (existing values win over the file)
//!     → env.rs (trimmed reads; empty counts as unset)
//!     → schema.rs (GatewayConfig: listener + upstream + timeouts)
//!     → CLI flags override the listener fields
//!     → resolved once in main, injected via AppState
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; handlers never touch the environment
//! - All variables have defaults so the gateway starts with zero setup
//! - No validation pass: a bad port or URL surfaces at bind/connect time
//!   with the offending value in the error

pub mod env;
pub mod schema;

pub use schema::GatewayConfig;
pub use schema::ListenConfig;
pub use schema::PdnsConfig;
pub use schema::TimeoutConfig;
