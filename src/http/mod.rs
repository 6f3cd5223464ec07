//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (attach request ID)
//!     → handlers.rs (/, /weather, /quote, /metrics)
//!     → providers make zero, one or two outbound calls
//!     → JSON response (or JSON error envelope)
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::MakeRequestUuid;
pub use server::{AppState, HttpServer};
