//! Adapter implementations for external dependencies.
//!
//! Production adapters wrap real libraries (reqwest); the mock module
//! provides test doubles for the same traits.

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
