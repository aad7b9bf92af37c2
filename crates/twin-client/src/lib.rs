//! Twin Client Library
//!
//! Provides a typed HTTP client for the car twin state API.
//!
//! # Example
//!
//! ```rust,no_run
//! use twin_client::TwinClient;
//! use twin_core::CarStateInput;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TwinClient::new("http://localhost:3000")?;
//!
//!     let created = client
//!         .create_state(&CarStateInput {
//!             engine_running: true,
//!             current_gear: "D".to_string(),
//!             speed: 45.0,
//!             rpm: 2500.0,
//!             car_color: "#ff6b6b".to_string(),
//!             session_id: "session-1".to_string(),
//!             temperature: 85.0,
//!             fuel: 60.0,
//!             mileage: 0.0,
//!         })
//!         .await?;
//!
//!     let fetched = client.get_state(&created.id).await?;
//!     assert_eq!(fetched.session_id, "session-1");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides an in-process server for integration tests:
//!
//! ```rust,ignore
//! use twin_client::testing::TestServer;
//! use twin_api::{create_router, AppState};
//!
//! let server = TestServer::start(create_router(AppState::new())).await?;
//! let info = server.client.describe().await?;
//! ```

mod client;
mod error;
pub mod testing;
mod types;

pub use client::TwinClient;
pub use error::{Result, TwinClientError};
pub use types::ApiInfo;

// Re-export core types for convenience
pub use twin_core::{CarState, CarStateInput, MetricsSnapshot};
