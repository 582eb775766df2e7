//! # Lema API
//!
//! A REST API built with Rust, Axum and SQLite serving users (each with one
//! address) and the posts they write.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── args.rs          # Command-line flags
//! ├── docs.rs          # OpenAPI document
//! ├── logging.rs       # tracing subscriber setup
//! ├── modules/         # Feature modules
//! │   ├── users/       # Users and addresses (read-only over HTTP)
//! │   └── posts/       # Post creation, lookup and deletion
//! ├── router.rs        # Main router, fallbacks and middleware
//! ├── server.rs        # Listener and graceful shutdown
//! ├── state.rs         # Shared application state
//! └── validator.rs     # Envelope-aware request extractors
//! ```
//!
//! Each feature module follows the same layout:
//!
//! - `repository.rs`: storage trait and its SQLx implementation
//! - `service.rs`: deadlines and error translation over the repository
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: Axum router configuration
//!
//! Shared types live in the workspace crates:
//!
//! - [`lema_core`]: errors, pagination and the response envelope
//! - [`lema_config`]: environment configuration
//! - [`lema_db`]: pool construction and migrations
//! - [`lema_models`]: entities and DTOs
//!
//! ## Responses
//!
//! Every response, including errors and unmatched routes, is a JSON envelope:
//!
//! ```json
//! { "success": true, "message": "Post fetched successfully", "data": { "id": 1 } }
//! ```
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:5001/swagger-ui`
//! - Scalar: `http://localhost:5001/scalar`

pub mod args;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod server;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use lema_config;
pub use lema_core;
pub use lema_db;
pub use lema_models;
