//! HTTP service for seqdiff.
//!
//! Serves a single endpoint, `/api/compare`: `POST` a JSON body with two
//! texts and receive the line-by-line difference report as a downloadable
//! plain-text file; `GET` returns usage information.

pub mod config;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use protocol::{endpoints, CompareRequest, ErrorResponse, UsageResponse};
pub use server::SeqdiffServer;
