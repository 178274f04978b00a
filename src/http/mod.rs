//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → mapper middleware (one per configured rule, in order)
//!     → echo.rs (report method, path, query and headers as JSON)
//!     → Send to client
//! ```

pub mod echo;
pub mod server;

pub use echo::{echo_handler, EchoResponse};
pub use server::HttpServer;
