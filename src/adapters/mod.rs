//! Adapter implementations for the trait abstractions.
//!
//! Production adapters wrap real libraries (reqwest); the mock adapter
//! records requests and replays configured responses for tests.

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
