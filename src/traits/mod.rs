//! Trait abstractions for external collaborators.
//!
//! The HTTP seam lives here so the API client can be exercised in tests
//! with a mock transport instead of a live server.

mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
