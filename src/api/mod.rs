//! Helpdesk HTTP API.
//!
//! A thin request-adapter over [`crate::pipeline::HelpdeskPipeline`]:
//! decode the request, run the pipeline on the blocking pool, wrap the
//! reply as `{"reply": ...}`. The router is composable; `helpdesk_router()`
//! returns a `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::helpdesk_router;
pub use server::{start_server, HelpdeskServer};
pub use types::ApiContext;
