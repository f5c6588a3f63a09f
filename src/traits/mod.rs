//! Trait abstractions for external dependencies.
//!
//! These traits form the seams of the application, enabling dependency
//! injection and mocking in tests.

mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
