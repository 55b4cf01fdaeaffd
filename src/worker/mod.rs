//! Asynchronous fetch worker.
//!
//! Provider lookups run as spawned Tokio tasks so the event loop never waits
//! on the network. Responses come back as [`FetchResponse`] values over an
//! unbounded channel and are fed into the application as events.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and request execution

pub mod handler;
pub mod messages;

pub use handler::{FeedQueries, FetchWorker};
pub use messages::{FetchRequest, FetchResponse, TraceContext};
